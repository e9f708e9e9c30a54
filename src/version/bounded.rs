//! A negotiated version annotated with its service's min/max.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use crate::version::Version;

/// The result of a successful negotiation.
///
/// Handlers use it for feature gating, e.g.
/// `if version >= Version::new(1, 2) { ... }` or
/// `version.matches(Some(Version::new(1, 2)), None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BoundedVersion {
    version: Version,
    min_version: Version,
    max_version: Version,
}

impl BoundedVersion {
    pub fn new(version: Version, min_version: Version, max_version: Version) -> Self {
        Self {
            version,
            min_version,
            max_version,
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn min_version(&self) -> Version {
        self.min_version
    }

    pub fn max_version(&self) -> Version {
        self.max_version
    }

    /// Inclusive range check; a missing bound falls back to the service's own.
    pub fn matches(&self, min_version: Option<Version>, max_version: Option<Version>) -> bool {
        self.version.matches(
            Some(min_version.unwrap_or(self.min_version)),
            Some(max_version.unwrap_or(self.max_version)),
        )
    }

    /// True when the caller asked for (or defaulted to) the newest version.
    pub fn is_latest(&self) -> bool {
        self.version == self.max_version
    }
}

impl Deref for BoundedVersion {
    type Target = Version;

    fn deref(&self) -> &Version {
        &self.version
    }
}

impl fmt::Display for BoundedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.version, f)
    }
}

impl PartialEq<Version> for BoundedVersion {
    fn eq(&self, other: &Version) -> bool {
        self.version == *other
    }
}

impl PartialOrd<Version> for BoundedVersion {
    fn partial_cmp(&self, other: &Version) -> Option<Ordering> {
        Some(self.version.cmp(other))
    }
}
