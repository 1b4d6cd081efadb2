//! Conway's Game of Life simulation engine
//!
//! A fixed-size grid of three-state cells evolving generation-by-generation
//! under Conway's rules, with a family of named seed patterns, a
//! fixed-cadence runner and terminal rendering.

pub mod automaton;
pub mod config;
pub mod error;
pub mod runner;
pub mod utils;

pub use automaton::{Cell, Grid, SeedPattern, Status};
pub use config::Settings;
pub use error::EngineError;
pub use runner::SimulationRunner;

use anyhow::Result;

/// Build a grid from settings: fill to a known dead baseline, then apply
/// the configured seed pattern.
pub fn build_grid(settings: &Settings) -> Result<Grid> {
    let mut grid = Grid::new(settings.grid.rows, settings.grid.cols)?;
    grid.fill(Status::Dead);
    grid.seed(settings.simulation.pattern, settings.simulation.random_cells);
    Ok(grid)
}
