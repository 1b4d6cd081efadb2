//! Named seed patterns and their user-boundary parsing

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Initialization patterns recognized by [`Grid::seed`](super::Grid::seed).
///
/// Patterns are additive: they only ever turn cells on, layered over
/// whatever the grid already holds. `FilledSquare`, `EmptySquare` and
/// `LeftArrow` are reserved names that currently place nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPattern {
    Random,
    Plus,
    Cross,
    DiagonalUpDown,
    DiagonalReversed,
    HorizontalLine,
    VerticalLine,
    FilledSquare,
    EmptySquare,
    RightArrow,
    LeftArrow,
}

impl SeedPattern {
    /// Every recognized pattern, in declaration order.
    pub const ALL: [SeedPattern; 11] = [
        SeedPattern::Random,
        SeedPattern::Plus,
        SeedPattern::Cross,
        SeedPattern::DiagonalUpDown,
        SeedPattern::DiagonalReversed,
        SeedPattern::HorizontalLine,
        SeedPattern::VerticalLine,
        SeedPattern::FilledSquare,
        SeedPattern::EmptySquare,
        SeedPattern::RightArrow,
        SeedPattern::LeftArrow,
    ];

    /// Canonical name, matching the serde snake_case representation.
    pub fn name(self) -> &'static str {
        match self {
            SeedPattern::Random => "random",
            SeedPattern::Plus => "plus",
            SeedPattern::Cross => "cross",
            SeedPattern::DiagonalUpDown => "diagonal_up_down",
            SeedPattern::DiagonalReversed => "diagonal_reversed",
            SeedPattern::HorizontalLine => "horizontal_line",
            SeedPattern::VerticalLine => "vertical_line",
            SeedPattern::FilledSquare => "filled_square",
            SeedPattern::EmptySquare => "empty_square",
            SeedPattern::RightArrow => "right_arrow",
            SeedPattern::LeftArrow => "left_arrow",
        }
    }
}

impl fmt::Display for SeedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeedPattern {
    type Err = EngineError;

    /// Parse a pattern name. Unknown names fail with
    /// [`EngineError::InvalidPattern`] carrying the offending value; this is
    /// the only place an out-of-enumeration pattern can appear, so the grid
    /// is never touched by an invalid request.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|pattern| pattern.name() == s)
            .ok_or_else(|| EngineError::InvalidPattern(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_round_trips() {
        for pattern in SeedPattern::ALL {
            assert_eq!(pattern.name().parse::<SeedPattern>().unwrap(), pattern);
        }
    }

    #[test]
    fn test_unknown_name_is_invalid_pattern() {
        let err = "triangle".parse::<SeedPattern>().unwrap_err();
        assert_eq!(err, EngineError::InvalidPattern("triangle".to_string()));
    }

    #[test]
    fn test_serde_names_match_canonical_names() {
        for pattern in SeedPattern::ALL {
            let yaml = serde_yaml::to_string(&pattern).unwrap();
            assert_eq!(yaml.trim(), pattern.name());

            let parsed: SeedPattern = serde_yaml::from_str(pattern.name()).unwrap();
            assert_eq!(parsed, pattern);
        }
    }
}
