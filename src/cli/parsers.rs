// src/cli/parsers.rs
use std::str::FromStr;

use verstamp_core::{ReleaseDate, SemVer};

/// Wrapper type to parse a version triple argument (e.g. 2.7.1).
#[derive(Debug, Clone, Copy)]
pub struct VersionArg(pub SemVer);

impl FromStr for VersionArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(VersionArg).map_err(|e| e.to_string())
    }
}

/// Wrapper type to parse release date arguments in both accepted formats.
#[derive(Debug, Clone, Copy)]
pub struct DateArg(pub ReleaseDate);

impl FromStr for DateArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(DateArg).map_err(|e| e.to_string())
    }
}
