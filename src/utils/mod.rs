//! Display and output utilities

pub mod display;

pub use display::{save_snapshot, Color, ColorOutput, GridFormatter};
