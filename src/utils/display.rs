//! Display and snapshot output utilities

use crate::automaton::Status;
use crate::config::OutputFormat;
use anyhow::{Context, Result};
use itertools::Itertools;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Render status snapshots for the terminal.
pub struct GridFormatter;

impl GridFormatter {
    fn status_symbol(status: Status) -> char {
        match status {
            Status::Dead => '·',
            Status::Living => '█',
            Status::Emerging => '▓',
        }
    }

    /// Format a row-major snapshot in compact form, one character per cell.
    pub fn format_statuses(statuses: &[Status], cols: usize) -> String {
        let mut output = String::new();
        for row in &statuses.iter().chunks(cols) {
            for status in row {
                output.push(Self::status_symbol(*status));
            }
            output.push('\n');
        }
        output
    }

    /// Compact form with each cell colored: living cells blue, emerging
    /// cells green, dead cells red.
    pub fn format_statuses_colored(statuses: &[Status], cols: usize) -> String {
        let mut output = String::new();
        for row in &statuses.iter().chunks(cols) {
            for status in row {
                let color = match status {
                    Status::Dead => Color::Red,
                    Status::Living => Color::Blue,
                    Status::Emerging => Color::Green,
                };
                let symbol = Self::status_symbol(*status);
                output.push_str(&ColorOutput::colored(&symbol.to_string(), color));
            }
            output.push('\n');
        }
        output
    }

    /// Format a snapshot with row and column coordinates.
    pub fn format_with_coords(statuses: &[Status], cols: usize) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..cols {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for (row, chunk) in statuses.iter().chunks(cols).into_iter().enumerate() {
            output.push_str(&format!("{:2} ", row));
            for status in chunk {
                let symbol = Self::status_symbol(*status);
                output.push(symbol);
                output.push(symbol);
            }
            output.push('\n');
        }

        output
    }
}

/// Row-major snapshot of one generation, as written to disk.
#[derive(Debug, Serialize)]
struct SnapshotRecord<'a> {
    generation: u64,
    rows: usize,
    cols: usize,
    cells: &'a [Status],
}

/// Write one generation's snapshot into `directory`, named by generation
/// number. Returns the path written.
pub fn save_snapshot(
    statuses: &[Status],
    cols: usize,
    generation: u64,
    directory: &Path,
    format: OutputFormat,
) -> Result<PathBuf> {
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create directory: {}", directory.display()))?;

    let path = match format {
        OutputFormat::Text => {
            let path = directory.join(format!("gen_{:05}.txt", generation));
            std::fs::write(&path, GridFormatter::format_statuses(statuses, cols))
                .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;
            path
        }
        OutputFormat::Json => {
            let record = SnapshotRecord {
                generation,
                rows: statuses.len() / cols,
                cols,
                cells: statuses,
            };
            let json = serde_json::to_string_pretty(&record)
                .context("Failed to serialize snapshot")?;
            let path = directory.join(format!("gen_{:05}.json", generation));
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;
            path
        }
    };

    Ok(path)
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_statuses() -> Vec<Status> {
        vec![
            Status::Living,
            Status::Dead,
            Status::Emerging,
            Status::Dead,
            Status::Dead,
            Status::Living,
        ]
    }

    #[test]
    fn test_compact_formatting() {
        let rendered = GridFormatter::format_statuses(&sample_statuses(), 3);
        assert_eq!(rendered, "█·▓\n··█\n");
    }

    #[test]
    fn test_coords_formatting() {
        let rendered = GridFormatter::format_with_coords(&sample_statuses(), 3);
        assert!(rendered.contains(" 0 1 2"));
        assert!(rendered.contains(" 0 ██··▓▓"));
        assert!(rendered.contains(" 1 ····██"));
    }

    #[test]
    fn test_colored_formatting_keeps_symbols() {
        let rendered = GridFormatter::format_statuses_colored(&sample_statuses(), 3);
        assert!(rendered.contains('█'));
        assert!(rendered.contains('▓'));
        assert!(rendered.contains('·'));
        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn test_save_text_snapshot() {
        let dir = tempdir().unwrap();
        let path =
            save_snapshot(&sample_statuses(), 3, 7, dir.path(), OutputFormat::Text).unwrap();

        assert_eq!(path.file_name().unwrap(), "gen_00007.txt");
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, "█·▓\n··█\n");
    }

    #[test]
    fn test_save_json_snapshot() {
        let dir = tempdir().unwrap();
        let path =
            save_snapshot(&sample_statuses(), 3, 12, dir.path(), OutputFormat::Json).unwrap();

        assert_eq!(path.file_name().unwrap(), "gen_00012.json");
        let content = std::fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["generation"], 12);
        assert_eq!(parsed["rows"], 2);
        assert_eq!(parsed["cols"], 3);
        assert_eq!(parsed["cells"][0], "living");
        assert_eq!(parsed["cells"][2], "emerging");
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Either colored or plain, depending on the environment
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
