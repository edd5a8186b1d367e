pub mod completion;
pub mod engine;
pub mod glyphs;
pub mod schedule;
