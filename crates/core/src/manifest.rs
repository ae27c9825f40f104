// crates/core/src/manifest.rs
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StampError};
use crate::metadata::{VersionMetadata, VersionMetadataBuilder};
use crate::release::ReleaseDate;
use crate::semver::SemVer;

/// Raw input set describing a product, before validation.
///
/// Every field is optional so that a partial manifest can be layered under
/// CLI overrides. `into_metadata` performs the fail-fast consistency checks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub major: Option<u32>,
    pub minor: Option<u32>,
    pub patch: Option<u32>,

    /// Declared composite version string. Must equal the numeric triple.
    pub version: Option<String>,
    /// Declared release string. Must equal `"{version} {date}"`.
    pub release: Option<String>,
    /// Release date token (MM-DD-YYYY or YYYY-MM-DD). Defaults to today.
    pub date: Option<String>,

    pub product: Option<String>,
    pub company: Option<String>,
    pub copyright: Option<String>,
    pub trademarks: Option<String>,
    pub domain: Option<String>,
    pub description: Option<String>,
    pub original_filename: Option<String>,
    pub prefix: Option<String>,
}

impl Manifest {
    /// Load a manifest from disk, dispatching on the file extension.
    /// `.json` is always supported; `.yaml`/`.yml` requires the `yaml`
    /// feature. Unknown extensions are treated as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| StampError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let manifest = match ext.as_str() {
            "yaml" | "yml" => Self::parse_yaml(&text, path)?,
            _ => serde_json::from_str(&text).map_err(|e| StampError::ManifestParse {
                format: "JSON".to_string(),
                path: path.to_path_buf(),
                details: e.to_string(),
            })?,
        };

        log::debug!("loaded manifest from {}", path.display());
        Ok(manifest)
    }

    #[cfg(feature = "yaml")]
    fn parse_yaml(text: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| StampError::ManifestParse {
            format: "YAML".to_string(),
            path: path.to_path_buf(),
            details: e.to_string(),
        })
    }

    #[cfg(not(feature = "yaml"))]
    fn parse_yaml(_text: &str, path: &Path) -> Result<Self> {
        Err(StampError::ManifestParse {
            format: "YAML".to_string(),
            path: path.to_path_buf(),
            details: "YAML support is not enabled in this build".to_string(),
        })
    }

    /// Layer `self` over `fallback`: fields present here win.
    ///
    /// A version given in the upper layer replaces the lower layer's whole
    /// triple and declared strings, otherwise a CLI `--set-version` would
    /// trip the consistency check against the manifest it overrides. A new
    /// date likewise invalidates a lower-layer declared release string.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        let version_overridden = self.version.is_some() || self.major.is_some();
        let (major, minor, patch) = if version_overridden {
            (self.major, self.minor, self.patch)
        } else {
            (
                self.major.or(fallback.major),
                self.minor.or(fallback.minor),
                self.patch.or(fallback.patch),
            )
        };
        let release = if version_overridden || self.date.is_some() {
            self.release
        } else {
            self.release.or(fallback.release)
        };

        Self {
            major,
            minor,
            patch,
            version: if version_overridden {
                self.version
            } else {
                fallback.version
            },
            release,
            date: self.date.or(fallback.date),
            product: self.product.or(fallback.product),
            company: self.company.or(fallback.company),
            copyright: self.copyright.or(fallback.copyright),
            trademarks: self.trademarks.or(fallback.trademarks),
            domain: self.domain.or(fallback.domain),
            description: self.description.or(fallback.description),
            original_filename: self.original_filename.or(fallback.original_filename),
            prefix: self.prefix.or(fallback.prefix),
        }
    }

    /// Validate the input set and build the immutable metadata record.
    ///
    /// # Errors
    /// Fails fast when a declared `version`/`release` string disagrees with
    /// the numeric triple, when the triple is incomplete, or when no product
    /// name is given.
    pub fn into_metadata(self) -> Result<VersionMetadata> {
        let version = self.resolve_version()?;

        let date = match &self.date {
            Some(raw) => raw.parse::<ReleaseDate>()?,
            None => ReleaseDate::today(),
        };

        let product = self
            .product
            .ok_or_else(|| StampError::Config("product name is required".to_string()))?;

        let meta = VersionMetadataBuilder::default()
            .version(version)
            .release_date(date)
            .product_name(product)
            .company_name(self.company.unwrap_or_default())
            .legal_copyright(self.copyright.unwrap_or_default())
            .legal_trademarks(self.trademarks.unwrap_or_default())
            .company_domain(self.domain.unwrap_or_default())
            .file_description(self.description.unwrap_or_default())
            .original_filename(self.original_filename.unwrap_or_default())
            .prefix(self.prefix)
            .build()
            .map_err(|e| StampError::Config(e.to_string()))?;

        if let Some(declared) = &self.release {
            let derived = meta.release_string();
            if declared != &derived {
                return Err(StampError::ReleaseMismatch {
                    declared: declared.clone(),
                    derived,
                });
            }
        }

        Ok(meta)
    }

    fn resolve_version(&self) -> Result<SemVer> {
        let triple = match (self.major, self.minor, self.patch) {
            (Some(major), Some(minor), Some(patch)) => Some(SemVer::new(major, minor, patch)),
            (None, None, None) => None,
            _ => {
                return Err(StampError::Config(
                    "major, minor and patch must be given together".to_string(),
                ));
            }
        };

        let declared = self
            .version
            .as_deref()
            .map(str::parse::<SemVer>)
            .transpose()?;

        match (triple, declared) {
            (Some(t), Some(d)) if t != d => Err(StampError::VersionMismatch {
                declared: d.to_string(),
                major: t.major,
                minor: t.minor,
                patch: t.patch,
            }),
            (Some(t), _) => Ok(t),
            (None, Some(d)) => Ok(d),
            (None, None) => Err(StampError::Config(
                "a version triple or version string is required".to_string(),
            )),
        }
    }
}
