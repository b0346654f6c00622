pub mod automaton;
pub mod config;
pub mod palette;
pub mod preview;
pub mod render;
pub mod rule;
pub mod term;

/// State of a single cell, `0` (dead) or `1` (live).
pub type CellState = u8;
