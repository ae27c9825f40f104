// crates/core/src/verify.rs
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use regex::Regex;

use crate::error::{Result, StampError};
use crate::metadata::VersionMetadata;
use crate::render::{self, Target, header};

/// One field whose on-disk value disagrees with the current record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDrift {
    pub name: String,
    pub expected: String,
    pub found: Option<String>,
}

/// Result of checking one artifact against the current record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// On-disk artifact is byte-identical to a fresh render.
    UpToDate,
    /// Artifact has not been generated yet.
    Missing,
    /// Artifact differs. For header artifacts the drifted defines are
    /// listed; for other targets the list is empty.
    Stale(Vec<FieldDrift>),
}

impl CheckOutcome {
    #[inline]
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, Self::UpToDate)
    }
}

/// Compare the artifact at `path` against a fresh render of `meta`.
///
/// The comparison is byte-exact, so this doubles as the idempotence check:
/// running it immediately after generation always reports `UpToDate`.
pub fn check(meta: &VersionMetadata, target: Target, path: &Path) -> Result<CheckOutcome> {
    let actual = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CheckOutcome::Missing),
        Err(source) => {
            return Err(StampError::FileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let expected = render::render(meta, target)?;
    if actual == expected {
        return Ok(CheckOutcome::UpToDate);
    }

    log::debug!("artifact {} differs from a fresh render", path.display());

    let drift = match target {
        Target::Header => header_drift(meta, &actual)?,
        _ => Vec::new(),
    };
    Ok(CheckOutcome::Stale(drift))
}

/// Field-level drift report for a header artifact.
///
/// Scans `#define` lines in the stale file and diffs them against the
/// expected define table, so CI logs name the field that moved instead of
/// dumping both files.
fn header_drift(meta: &VersionMetadata, actual: &str) -> Result<Vec<FieldDrift>> {
    let define_re = Regex::new(r"(?m)^#define\s+(\w+)\s+(.*?)\s*$")?;

    let mut found: HashMap<String, String> = HashMap::new();
    for caps in define_re.captures_iter(actual) {
        found.insert(caps[1].to_string(), caps[2].to_string());
    }

    let mut drift = Vec::new();
    for (name, expected) in header::defines(meta) {
        let value = found.get(&name);
        if value != Some(&expected) {
            drift.push(FieldDrift {
                name,
                expected,
                found: value.cloned(),
            });
        }
    }
    Ok(drift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::VersionMetadataBuilder;
    use crate::release::ReleaseDate;
    use crate::semver::SemVer;

    fn sample(patch: u32) -> VersionMetadata {
        VersionMetadataBuilder::default()
            .version(SemVer::new(2, 7, patch))
            .release_date("11-19-2020".parse::<ReleaseDate>().unwrap())
            .product_name("Product-Name")
            .original_filename("app.exe")
            .build()
            .unwrap()
    }

    #[test]
    fn fresh_artifact_is_up_to_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("defines.hpp");
        std::fs::write(&path, render::render(&sample(1), Target::Header).unwrap()).unwrap();

        let outcome = check(&sample(1), Target::Header, &path).unwrap();
        assert!(outcome.is_up_to_date());
    }

    #[test]
    fn missing_artifact_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = check(&sample(1), Target::Header, &dir.path().join("nope.hpp")).unwrap();
        assert_eq!(outcome, CheckOutcome::Missing);
    }

    #[test]
    fn version_bump_names_the_drifted_defines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("defines.hpp");
        std::fs::write(&path, render::render(&sample(1), Target::Header).unwrap()).unwrap();

        let outcome = check(&sample(2), Target::Header, &path).unwrap();
        let CheckOutcome::Stale(drift) = outcome else {
            panic!("expected stale outcome");
        };

        let names: Vec<_> = drift.iter().map(|d| d.name.as_str()).collect();
        assert!(names.contains(&"APP_VERSION_PATCH"));
        assert!(names.contains(&"APP_VERSION"));
        assert!(names.contains(&"APP_RELEASE_VERSION"));
        assert!(!names.contains(&"APP_VERSION_MAJOR"));

        let patch = drift.iter().find(|d| d.name == "APP_VERSION_PATCH").unwrap();
        assert_eq!(patch.expected, "2");
        assert_eq!(patch.found.as_deref(), Some("1"));
    }

    #[test]
    fn non_header_targets_report_plain_staleness() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("version.json");
        std::fs::write(&path, "{}\n").unwrap();

        let outcome = check(&sample(1), Target::Json, &path).unwrap();
        assert_eq!(outcome, CheckOutcome::Stale(Vec::new()));
    }
}
