use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Words read per minute when estimating reading time.
pub const WORDS_PER_MINUTE: u32 = 200;

#[derive(Debug, Error, PartialEq)]
#[error("unknown length '{0}' (expected one of: short, medium, long)")]
pub struct UnknownLength(pub String);

/// Requested article length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    Medium,
    Long,
}

/// Word-count bounds for a length. Only `target` feeds the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthConfig {
    pub min: u32,
    pub max: u32,
    pub target: u32,
}

impl LengthConfig {
    /// Estimated reading time in whole minutes, rounded up.
    pub fn reading_minutes(&self) -> u32 {
        self.target.div_ceil(WORDS_PER_MINUTE)
    }
}

impl Length {
    pub const ALL: [Length; 3] = [Length::Short, Length::Medium, Length::Long];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    pub fn config(&self) -> LengthConfig {
        match self {
            Self::Short => LengthConfig {
                min: 300,
                max: 500,
                target: 400,
            },
            Self::Medium => LengthConfig {
                min: 500,
                max: 800,
                target: 650,
            },
            Self::Long => LengthConfig {
                min: 800,
                max: 1200,
                target: 950,
            },
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Length {
    type Err = UnknownLength;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Length::ALL
            .into_iter()
            .find(|l| l.name() == s)
            .ok_or_else(|| UnknownLength(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(Length::Short.config().reading_minutes(), 2);
        assert_eq!(Length::Medium.config().reading_minutes(), 4);
        assert_eq!(Length::Long.config().reading_minutes(), 5);
    }

    #[test]
    fn targets_sit_inside_bounds() {
        for length in Length::ALL {
            let c = length.config();
            assert!(c.min <= c.target && c.target <= c.max, "{length}");
        }
    }

    #[test]
    fn parse_lengths() {
        assert_eq!("long".parse::<Length>(), Ok(Length::Long));
        assert!("huge".parse::<Length>().is_err());
    }
}
