use crate::animation::completion::{self, Completion, Resolver};
use crate::animation::glyphs::GlyphSet;
use crate::animation::schedule::{TransitionUnit, build_schedule};
use crate::foundation::error::{ScrambleError, ScrambleResult};
use crate::foundation::rng::Rng64;
use crate::render::surface::TextSurface;

/// Tunable parameters for a [`Scrambler`]. The defaults are the constants
/// the effect shipped with: jitter width 40, re-roll probability 0.28.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrambleParams {
    /// Jitter width `W`: per-character start frames and end offsets are each
    /// drawn uniformly from `[0, W)`, so a run lasts at most `2W - 2` frames.
    #[serde(default = "default_jitter_width")]
    pub jitter_width: u64,

    /// Per-tick probability of re-rolling a latched placeholder glyph while
    /// a position is inside its scramble window. Below 1.0 the flicker stays
    /// readable instead of strobing every tick.
    #[serde(default = "default_reroll_probability")]
    pub reroll_probability: f64,

    /// Placeholder alphabet.
    #[serde(default)]
    pub glyphs: GlyphSet,
}

fn default_jitter_width() -> u64 {
    40
}

fn default_reroll_probability() -> f64 {
    0.28
}

impl Default for ScrambleParams {
    fn default() -> Self {
        Self {
            jitter_width: default_jitter_width(),
            reroll_probability: default_reroll_probability(),
            glyphs: GlyphSet::default(),
        }
    }
}

impl ScrambleParams {
    /// Check parameter ranges. The glyph set is validated at construction.
    pub fn validate(&self) -> ScrambleResult<()> {
        if self.jitter_width == 0 {
            return Err(ScrambleError::validation("jitter_width must be >= 1"));
        }
        if !self.reroll_probability.is_finite()
            || !(0.0..=1.0).contains(&self.reroll_probability)
        {
            return Err(ScrambleError::validation(
                "reroll_probability must be a finite value within [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Run-generation token. Each `set_text` call gets the next id; a superseded
/// run's id never resolves, which makes abandonment observable instead of an
/// accidental race on a scheduled-callback handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunId(pub u64);

/// Outcome of a single [`Scrambler::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickStatus {
    /// No run is active.
    Idle,
    /// The active run advanced and has frames left.
    Active,
    /// This tick finished the active run and resolved its future.
    Completed,
}

#[derive(Debug)]
struct Run {
    id: RunId,
    units: Vec<TransitionUnit>,
    frame: u64,
    resolver: Resolver,
}

/// Animates a [`TextSurface`] from its displayed text to a target text.
///
/// At most one run is active at a time. The embedder drives [`tick`] once per
/// animation frame; ticks for a run execute strictly in increasing frame
/// order and no tick is skipped.
///
/// [`tick`]: Scrambler::tick
#[derive(Debug)]
pub struct Scrambler<S: TextSurface> {
    surface: S,
    params: ScrambleParams,
    rng: Rng64,
    next_run: u64,
    run: Option<Run>,
}

impl<S: TextSurface> Scrambler<S> {
    /// Build an animator over `surface` with validated parameters.
    pub fn new(surface: S, params: ScrambleParams, rng: Rng64) -> ScrambleResult<Self> {
        params.validate()?;
        Ok(Self {
            surface,
            params,
            rng,
            next_run: 0,
            run: None,
        })
    }

    /// Build an animator with default parameters; infallible.
    pub fn with_defaults(surface: S, seed: u64) -> Self {
        Self {
            surface,
            params: ScrambleParams::default(),
            rng: Rng64::new(seed),
            next_run: 0,
            run: None,
        }
    }

    /// Start a run from the currently displayed text to `new_text`.
    ///
    /// Builds a fresh schedule, renders frame 0 immediately, and returns the
    /// run's [`Completion`]. Any in-flight run is superseded: its pending
    /// future is abandoned and will never resolve. A run with zero units
    /// (empty to empty) completes during this call.
    #[tracing::instrument(skip(self))]
    pub fn set_text(&mut self, new_text: &str) -> Completion {
        let old_text = self.surface.text();
        let units = build_schedule(&old_text, new_text, self.params.jitter_width, &mut self.rng);

        let id = RunId(self.next_run);
        self.next_run += 1;

        if let Some(prev) = self.run.take() {
            // Dropping the resolver is the abandonment: the superseded run's
            // future stays pending forever.
            tracing::debug!(superseded = prev.id.0, run = id.0, "superseding active run");
        }

        let (resolver, signal) = completion::channel();
        self.run = Some(Run {
            id,
            units,
            frame: 0,
            resolver,
        });
        self.advance();
        signal
    }

    /// Advance the active run by one frame.
    pub fn tick(&mut self) -> TickStatus {
        self.advance()
    }

    /// Whether a run is currently in flight.
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Generation token of the active run, if any.
    pub fn current_run(&self) -> Option<RunId> {
        self.run.as_ref().map(|r| r.id)
    }

    /// The animator's parameters.
    pub fn params(&self) -> &ScrambleParams {
        &self.params
    }

    /// Shared access to the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Exclusive access to the surface. The engine owns the surface while a
    /// run is active; external writes mid-run are the caller's to coordinate.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consume the animator and return its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn advance(&mut self) -> TickStatus {
        let Some(run) = self.run.as_mut() else {
            return TickStatus::Idle;
        };

        let mut rendered = String::new();
        let mut complete = 0usize;
        for unit in run.units.iter_mut() {
            if run.frame >= unit.end_frame {
                complete += 1;
                if let Some(to) = unit.to {
                    rendered.push(to);
                }
            } else if run.frame >= unit.start_frame {
                // First entry into the window always draws a glyph; after
                // that the latched glyph survives a tick with probability
                // 1 - reroll_probability.
                let kept = match unit.glyph {
                    Some(g) => {
                        if self.rng.next_f64_01() < self.params.reroll_probability {
                            None
                        } else {
                            Some(g)
                        }
                    }
                    None => None,
                };
                let glyph = match kept {
                    Some(g) => g,
                    None => {
                        let g = self.params.glyphs.pick(&mut self.rng);
                        unit.glyph = Some(g);
                        g
                    }
                };
                rendered.push(glyph);
            } else if let Some(from) = unit.from {
                rendered.push(from);
            }
        }

        // Whole-surface replace, not an incremental patch.
        self.surface.set_text(&rendered);

        let total = run.units.len();
        let id = run.id;
        if complete == total {
            if let Some(finished) = self.run.take() {
                finished.resolver.resolve();
            }
            tracing::trace!(run = id.0, "run completed");
            TickStatus::Completed
        } else {
            run.frame += 1;
            TickStatus::Active
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/engine.rs"]
mod tests;
