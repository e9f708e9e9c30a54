//! The `(major, minor)` version pair.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MicroversionError;
use crate::version::parse::parse_version_string;

/// A single microversion, e.g. `2.53`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Inclusive range check against explicit bounds.
    ///
    /// A bare version has no bounds of its own, so a missing bound
    /// never matches.
    pub fn matches(&self, min_version: Option<Version>, max_version: Option<Version>) -> bool {
        match (min_version, max_version) {
            (Some(min), Some(max)) => min <= *self && *self <= max,
            _ => false,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = MicroversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version_string(s)
    }
}

impl TryFrom<String> for Version {
    type Error = MicroversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_version_string(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

impl From<(u32, u32)> for Version {
    fn from((major, minor): (u32, u32)) -> Self {
        Self::new(major, minor)
    }
}
