//! Which address field a query belongs to

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The address field (start or end) that produced an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Departure address field
    Start,
    /// Destination address field
    End,
}

impl Origin {
    /// Both origins, start first
    pub const ALL: [Self; 2] = [Self::Start, Self::End];

    /// Lowercase name used in logs and the CLI
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Origin {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "start" | "from" => Ok(Self::Start),
            "end" | "to" => Ok(Self::End),
            other => Err(DomainError::UnknownOrigin(other.to_string())),
        }
    }
}
