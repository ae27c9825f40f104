// crates/core/src/semver.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StampError;

/// Semantic version triple.
///
/// The derived string form is always the exact concatenation
/// `"{major}.{minor}.{patch}"` with no prefix or build suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemVer {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemVer {
    #[inline]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Four-component quad used by `FILEVERSION`/`PRODUCTVERSION` resource
    /// statements. The fourth component is always zero.
    #[inline]
    pub const fn resource_quad(self) -> (u32, u32, u32, u32) {
        (self.major, self.minor, self.patch, 0)
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemVer {
    type Err = StampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |details: &str| StampError::InvalidVersion {
            value: s.to_string(),
            details: details.to_string(),
        };

        let mut parts = s.trim().split('.');
        let mut next = |name: &str| -> Result<u32, StampError> {
            parts
                .next()
                .filter(|p| !p.is_empty())
                .ok_or_else(|| invalid(&format!("missing {name} component")))?
                .parse::<u32>()
                .map_err(|_| invalid(&format!("{name} component is not an integer")))
        };

        let major = next("major")?;
        let minor = next("minor")?;
        let patch = next("patch")?;

        if parts.next().is_some() {
            return Err(invalid("expected exactly three components"));
        }

        Ok(Self::new(major, minor, patch))
    }
}

impl Serialize for SemVer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemVer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
