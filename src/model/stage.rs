//! The five fixed completion stages of a mini.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A completion milestone for a mini.
///
/// Stages are totally ordered: `Assembled < Primed < Painted < Based < Photographed`. The order
/// drives the cascade applied when toggling a stage, see [`crate::tracker::cascade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Assembled,
    Primed,
    Painted,
    Based,
    Photographed,
}

impl Stage {
    /// Every stage in progression order.
    pub const ALL: [Stage; 5] = [
        Stage::Assembled,
        Stage::Primed,
        Stage::Painted,
        Stage::Based,
        Stage::Photographed,
    ];

    /// Number of stages a mini must complete to be done.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of the stage within [`Stage::ALL`].
    pub fn index(self) -> usize {
        match self {
            Stage::Assembled => 0,
            Stage::Primed => 1,
            Stage::Painted => 2,
            Stage::Based => 3,
            Stage::Photographed => 4,
        }
    }

    /// Wire key of the stage flag, e.g. `"painted"`.
    pub fn key(self) -> &'static str {
        match self {
            Stage::Assembled => "assembled",
            Stage::Primed => "primed",
            Stage::Painted => "painted",
            Stage::Based => "based",
            Stage::Photographed => "photographed",
        }
    }

    /// Wire key of the timestamp paired with the stage flag, e.g. `"paintedAt"`.
    pub fn timestamp_key(self) -> &'static str {
        match self {
            Stage::Assembled => "assembledAt",
            Stage::Primed => "primedAt",
            Stage::Painted => "paintedAt",
            Stage::Based => "basedAt",
            Stage::Photographed => "photographedAt",
        }
    }

    /// Human readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Assembled => "Assembled",
            Stage::Primed => "Primed",
            Stage::Painted => "Painted",
            Stage::Based => "Based",
            Stage::Photographed => "Photographed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown stage key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStage(pub String);

impl fmt::Display for UnknownStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown stage {:?}", self.0)
    }
}

impl std::error::Error for UnknownStage {}

impl FromStr for Stage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.key() == s)
            .ok_or_else(|| UnknownStage(s.to_string()))
    }
}
