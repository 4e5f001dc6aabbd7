//! Edge direction for property lookups

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of the arc relative to the requested node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Node is the subject of the triple
    #[default]
    #[serde(rename = "out")]
    Outgoing,
    /// Node is the object of the triple
    #[serde(rename = "in")]
    Incoming,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outgoing => "out",
            Self::Incoming => "in",
        }
    }

    /// Arrow form used in property expressions
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Outgoing => "->",
            Self::Incoming => "<-",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "out" | "outgoing" | "->" => Ok(Self::Outgoing),
            "in" | "incoming" | "<-" => Ok(Self::Incoming),
            _ => Err(CoreError::InvalidDirection(s.to_string())),
        }
    }
}
