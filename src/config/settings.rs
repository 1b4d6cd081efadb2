//! Configuration settings for the simulation

use crate::automaton::{SeedPattern, DEFAULT_RANDOM_CELLS};
use crate::error::EngineError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Pattern applied once before the run starts.
    pub pattern: SeedPattern,
    /// Cells placed when the pattern is `random`.
    pub random_cells: usize,
    /// Bound on the number of generations; `None` runs until stopped.
    pub generations: Option<usize>,
    /// Cadence of the evolution step, in milliseconds.
    pub interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// When set, every generation's snapshot is written to
    /// `snapshot_directory`.
    pub save_snapshots: bool,
    pub snapshot_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        // Patterns look best on a square grid, so the default keeps
        // rows == cols
        Self {
            grid: GridConfig { rows: 15, cols: 15 },
            simulation: SimulationConfig {
                pattern: SeedPattern::Random,
                random_cells: DEFAULT_RANDOM_CELLS,
                generations: None,
                interval_ms: 1000,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save_snapshots: false,
                snapshot_directory: PathBuf::from("output/snapshots"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file, creating parent directories as needed.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings.
    pub fn validate(&self) -> Result<()> {
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(EngineError::InvalidDimensions {
                rows: self.grid.rows,
                cols: self.grid.cols,
            }
            .into());
        }

        if self.simulation.interval_ms == 0 {
            anyhow::bail!("Step interval must be positive");
        }

        Ok(())
    }

    /// Merge settings with command line overrides.
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.grid.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.grid.cols = cols;
        }
        if let Some(pattern) = cli_overrides.pattern {
            self.simulation.pattern = pattern;
        }
        if let Some(random_cells) = cli_overrides.random_cells {
            self.simulation.random_cells = random_cells;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = Some(generations);
        }
        if let Some(interval_ms) = cli_overrides.interval_ms {
            self.simulation.interval_ms = interval_ms;
        }
        if let Some(ref snapshot_dir) = cli_overrides.snapshot_directory {
            self.output.save_snapshots = true;
            self.output.snapshot_directory = snapshot_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub pattern: Option<SeedPattern>,
    pub random_cells: Option<usize>,
    pub generations: Option<usize>,
    pub interval_ms: Option<u64>,
    pub snapshot_directory: Option<PathBuf>,
}
