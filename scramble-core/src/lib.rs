//! Scramble is a deterministic text-scramble ("decode") animation engine.
//!
//! A [`Scrambler`] owns a [`TextSurface`] and animates its content from the
//! currently displayed string to a target string by progressively revealing
//! target characters through a window of randomized placeholder glyphs,
//! signalling completion exactly once per finished run.
//!
//! # Pipeline overview
//!
//! 1. **Schedule**: [`Scrambler::set_text`] samples a per-character transition
//!    window (`start_frame..=end_frame`) for every position of the longer of
//!    the two strings and renders frame 0 immediately.
//! 2. **Tick**: each [`Scrambler::tick`] renders every position in display
//!    order (settled characters stay settled, scrambling characters re-roll
//!    their placeholder with a fixed probability, untouched characters keep
//!    their original glyph) and commits the whole surface content at once.
//! 3. **Complete**: once every unit has passed its end frame, the run's
//!    [`Completion`] future resolves, exactly once.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: all randomness flows through an injected
//!   seeded [`Rng64`]; a fixed seed reproduces the exact frame sequence.
//! - **Pull-based scheduling**: the embedder drives `tick` once per animation
//!   frame; there is no hidden timer and at most one run is active at a time.
//! - **Supersession abandons**: starting a run while another is in flight
//!   permanently abandons the prior run's future: it never resolves and
//!   never errors. Callers chaining work on completion rely on at-most-once
//!   delivery per *finished* run, so this stays observable behavior.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod render;
mod script;

pub use animation::completion::Completion;
pub use animation::engine::{RunId, ScrambleParams, Scrambler, TickStatus};
pub use animation::glyphs::{DEFAULT_GLYPHS, GlyphSet};
pub use animation::schedule::{TransitionUnit, build_schedule};
pub use foundation::error::{ScrambleError, ScrambleResult};
pub use foundation::rng::Rng64;
pub use render::surface::{BufferSurface, TextSurface};
pub use script::{PlayerStatus, Script, ScriptPlayer, ScriptStep};
