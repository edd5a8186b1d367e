use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::engine::{ScrambleParams, Scrambler, TickStatus};
use crate::foundation::error::{ScrambleError, ScrambleResult};
use crate::foundation::rng::Rng64;
use crate::render::surface::TextSurface;

/// One step of a playback script: decode to `text`, then hold it on screen
/// for `hold_frames` ticks before the next step starts.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptStep {
    /// Target text for this step.
    pub text: String,
    /// Ticks to hold the finished text; 0 moves on immediately.
    #[serde(default)]
    pub hold_frames: u64,
}

/// Playback script boundary object.
///
/// This is the JSON-facing representation of a chained animation (the
/// `"TRANSMITTING..." -> "SIGNAL RECEIVED" -> "TRANSMIT"` pattern) with the
/// determinism seed and engine parameters alongside the steps.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Script {
    /// Determinism seed for the whole playback.
    #[serde(default)]
    pub seed: u64,
    /// Engine parameters shared by every step.
    #[serde(default)]
    pub params: ScrambleParams,
    /// Steps in playback order; must be non-empty.
    pub steps: Vec<ScriptStep>,
}

impl Script {
    /// An empty script with the given seed and default parameters.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            params: ScrambleParams::default(),
            steps: Vec::new(),
        }
    }

    /// Replace the engine parameters.
    pub fn with_params(mut self, params: ScrambleParams) -> Self {
        self.params = params;
        self
    }

    /// Append a step.
    pub fn step(mut self, text: impl Into<String>, hold_frames: u64) -> Self {
        self.steps.push(ScriptStep {
            text: text.into(),
            hold_frames,
        });
        self
    }

    /// Parse and validate a script from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScrambleResult<Self> {
        let script: Script = serde_json::from_reader(r)
            .map_err(|e| ScrambleError::serde(format!("parse script JSON: {e}")))?;
        script.validate()?;
        Ok(script)
    }

    /// Parse and validate a script from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ScrambleResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScrambleError::script(format!("open script JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check that the script can be played.
    pub fn validate(&self) -> ScrambleResult<()> {
        if self.steps.is_empty() {
            return Err(ScrambleError::script("script must have at least one step"));
        }
        self.params.validate()
    }
}

/// Playback status reported by [`ScriptPlayer::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerStatus {
    /// More ticks to come.
    Running,
    /// The last step finished its hold; the surface shows the final text.
    Finished,
}

#[derive(Clone, Copy, Debug)]
enum PlayerState {
    Pending { step: usize },
    Animating { step: usize },
    Holding { step: usize, remaining: u64 },
    Finished,
}

/// Drives a [`Scrambler`] through a [`Script`], one tick per animation frame.
#[derive(Debug)]
pub struct ScriptPlayer<S: TextSurface> {
    scrambler: Scrambler<S>,
    steps: Vec<ScriptStep>,
    state: PlayerState,
}

impl<S: TextSurface> ScriptPlayer<S> {
    /// Build a player over `surface` for a validated `script`.
    pub fn new(surface: S, script: Script) -> ScrambleResult<Self> {
        script.validate()?;
        let Script {
            seed,
            params,
            steps,
        } = script;
        let scrambler = Scrambler::new(surface, params, Rng64::new(seed))?;
        Ok(Self {
            scrambler,
            steps,
            state: PlayerState::Pending { step: 0 },
        })
    }

    /// Advance playback by one frame.
    pub fn tick(&mut self) -> PlayerStatus {
        match self.state {
            PlayerState::Finished => PlayerStatus::Finished,
            PlayerState::Pending { step } => {
                tracing::debug!(step, "starting script step");
                let text = self.steps[step].text.clone();
                // The per-step completion signal is intentionally unused: the
                // player polls tick statuses instead of awaiting.
                let _ = self.scrambler.set_text(&text);
                if self.scrambler.is_animating() {
                    self.state = PlayerState::Animating { step };
                } else {
                    self.enter_hold(step);
                }
                PlayerStatus::Running
            }
            PlayerState::Animating { step } => {
                match self.scrambler.tick() {
                    TickStatus::Completed | TickStatus::Idle => self.enter_hold(step),
                    TickStatus::Active => {}
                }
                PlayerStatus::Running
            }
            PlayerState::Holding { step, remaining } => {
                if remaining > 0 {
                    self.state = PlayerState::Holding {
                        step,
                        remaining: remaining - 1,
                    };
                    return PlayerStatus::Running;
                }
                let next = step + 1;
                if next < self.steps.len() {
                    self.state = PlayerState::Pending { step: next };
                    PlayerStatus::Running
                } else {
                    self.state = PlayerState::Finished;
                    PlayerStatus::Finished
                }
            }
        }
    }

    /// Whether playback has reached the end of the last hold.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, PlayerState::Finished)
    }

    /// Shared access to the surface.
    pub fn surface(&self) -> &S {
        self.scrambler.surface()
    }

    /// Consume the player and return its surface.
    pub fn into_surface(self) -> S {
        self.scrambler.into_surface()
    }

    fn enter_hold(&mut self, step: usize) {
        let remaining = self.steps[step].hold_frames;
        self.state = PlayerState::Holding { step, remaining };
    }
}

#[cfg(test)]
#[path = "../tests/unit/script.rs"]
mod tests;
