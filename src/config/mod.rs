//! Configuration management for the simulation

pub mod settings;

pub use settings::{
    CliOverrides, GridConfig, OutputConfig, OutputFormat, Settings, SimulationConfig,
};
