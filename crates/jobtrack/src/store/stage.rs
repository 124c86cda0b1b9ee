//! Production stages a job can be assigned to.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Production stage of a job.
///
/// Stages carry no ordering: a job may move from any stage to any other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    Estimating,
    Design,
    Cutting,
    Assembly,
    Install,
    Pickup,
    Touchups,
}

impl Stage {
    /// All stages in the order the stage buttons are shown.
    pub const ALL: [Stage; 7] = [
        Stage::Estimating,
        Stage::Design,
        Stage::Cutting,
        Stage::Assembly,
        Stage::Install,
        Stage::Pickup,
        Stage::Touchups,
    ];

    /// The upper-case label used for display and persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Estimating => "ESTIMATING",
            Stage::Design => "DESIGN",
            Stage::Cutting => "CUTTING",
            Stage::Assembly => "ASSEMBLY",
            Stage::Install => "INSTALL",
            Stage::Pickup => "PICKUP",
            Stage::Touchups => "TOUCHUPS",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| StoreError::UnknownStage(s.to_string()))
    }
}
