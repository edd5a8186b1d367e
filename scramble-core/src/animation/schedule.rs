use crate::foundation::rng::Rng64;

/// Transition schedule for a single character position within a run.
///
/// `from`/`to` are `None` past the end of the old/new string respectively;
/// such positions render as nothing, which is how the surface grows and
/// shrinks when the two lengths differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionUnit {
    /// Character at this position in the old string.
    pub from: Option<char>,
    /// Character at this position in the new string.
    pub to: Option<char>,
    /// Frame at which this position starts scrambling.
    pub start_frame: u64,
    /// Frame at which this position settles on `to`; >= `start_frame`.
    pub end_frame: u64,
    /// Latched placeholder once scrambling has started for this position.
    pub(crate) glyph: Option<char>,
}

impl TransitionUnit {
    /// Whether this position has settled on its target character.
    pub fn is_complete(&self, frame: u64) -> bool {
        frame >= self.end_frame
    }

    /// Whether this position is inside its scramble window at `frame`.
    pub fn in_window(&self, frame: u64) -> bool {
        frame >= self.start_frame && frame < self.end_frame
    }
}

/// Build the per-character schedule for one run.
///
/// One unit per position over `max(chars(old), chars(new))`, in display
/// order. Each unit draws `start_frame` uniformly from `[0, jitter_width)`
/// and then its end offset from the same range, so `end_frame >= start_frame`
/// holds by construction. The draw order (start, then end, left to right) is
/// part of the deterministic contract: a fixed seed reproduces the schedule.
pub fn build_schedule(
    old_text: &str,
    new_text: &str,
    jitter_width: u64,
    rng: &mut Rng64,
) -> Vec<TransitionUnit> {
    let old: Vec<char> = old_text.chars().collect();
    let new: Vec<char> = new_text.chars().collect();
    let len = old.len().max(new.len());

    let mut units = Vec::with_capacity(len);
    for i in 0..len {
        let start_frame = rng.next_below(jitter_width);
        let end_frame = start_frame + rng.next_below(jitter_width);
        units.push(TransitionUnit {
            from: old.get(i).copied(),
            to: new.get(i).copied(),
            start_frame,
            end_frame,
            glyph: None,
        });
    }
    units
}

#[cfg(test)]
#[path = "../../tests/unit/animation/schedule.rs"]
mod tests;
