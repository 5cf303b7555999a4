use crate::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// METAVIR fibrosis stage, F0 (none) through F4 (cirrhosis).
///
/// Carried as a bare integer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum FibrosisStage {
    F0,
    F1,
    F2,
    F3,
    F4,
}

impl FibrosisStage {
    pub const ALL: [FibrosisStage; 5] = [Self::F0, Self::F1, Self::F2, Self::F3, Self::F4];

    pub fn value(&self) -> i64 {
        match self {
            Self::F0 => 0,
            Self::F1 => 1,
            Self::F2 => 2,
            Self::F3 => 3,
            Self::F4 => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::F0 => "No fibrosis",
            Self::F1 => "Portal fibrosis",
            Self::F2 => "Periportal fibrosis",
            Self::F3 => "Bridging fibrosis",
            Self::F4 => "Cirrhosis",
        }
    }
}

impl TryFrom<i64> for FibrosisStage {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::F0),
            1 => Ok(Self::F1),
            2 => Ok(Self::F2),
            3 => Ok(Self::F3),
            4 => Ok(Self::F4),
            _ => Err(CoreError::InvalidFibrosisStage {
                value,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl From<FibrosisStage> for i64 {
    fn from(stage: FibrosisStage) -> Self {
        stage.value()
    }
}

impl std::fmt::Display for FibrosisStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "F{}", self.value())
    }
}
