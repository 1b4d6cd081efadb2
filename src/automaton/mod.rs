//! Cellular automaton core: cells, seed patterns, rules and the grid

pub mod cell;
pub mod grid;
pub mod pattern;
pub mod rules;

pub use cell::{Cell, Status};
pub use grid::{Grid, DEFAULT_RANDOM_CELLS};
pub use pattern::SeedPattern;
