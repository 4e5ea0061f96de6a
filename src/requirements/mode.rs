//! Evaluation modes for requirement sets.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PrereqError;

/// How the entries of a [`RequirementSet`](super::RequirementSet) combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Every mandatory entry must pass.
    #[default]
    All,
    /// At least one entry must pass.
    Any,
}

impl Mode {
    /// Lowercase keyword used in manifests and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::Any => "any",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = PrereqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "and" => Ok(Mode::All),
            "any" | "or" => Ok(Mode::Any),
            _ => Err(PrereqError::InvalidMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Numeric mode codes: `0` is all, `1` is any.
impl TryFrom<u8> for Mode {
    type Error = PrereqError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Mode::All),
            1 => Ok(Mode::Any),
            _ => Err(PrereqError::InvalidMode {
                value: code.to_string(),
            }),
        }
    }
}
