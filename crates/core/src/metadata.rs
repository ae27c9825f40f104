// crates/core/src/metadata.rs
use derive_builder::Builder;
use serde::Serialize;

use crate::release::ReleaseDate;
use crate::semver::SemVer;

/// Immutable version/product metadata record for one build.
///
/// Produced once per build from a manifest and/or CLI flags, then consumed
/// read-only by the renderers. The composite strings are always derived from
/// the numeric triple and release date, never stored independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
#[builder(setter(into))]
pub struct VersionMetadata {
    pub version: SemVer,
    pub release_date: ReleaseDate,
    pub product_name: String,

    #[builder(default)]
    pub company_name: String,
    #[builder(default)]
    pub legal_copyright: String,
    #[builder(default)]
    pub legal_trademarks: String,
    #[builder(default)]
    pub company_domain: String,
    #[builder(default)]
    pub file_description: String,
    #[builder(default)]
    pub original_filename: String,

    /// Explicit macro prefix for header artifacts. When absent the prefix is
    /// derived from the original filename stem, falling back to the product
    /// name.
    #[builder(default)]
    pub prefix: Option<String>,
}

impl VersionMetadata {
    /// The exact `"{major}.{minor}.{patch}"` concatenation.
    pub fn version_string(&self) -> String {
        self.version.to_string()
    }

    /// Version string followed by a single space and the release date token,
    /// e.g. `2.7.1 11-19-2020`.
    pub fn release_string(&self) -> String {
        format!("{} {}", self.version, self.release_date)
    }

    /// Macro prefix used by the header renderer, e.g. `VIEWER` for an
    /// original filename of `viewer.exe`.
    pub fn macro_prefix(&self) -> String {
        if let Some(prefix) = &self.prefix {
            return sanitize_prefix(prefix);
        }

        let stem = self
            .original_filename
            .rsplit_once('.')
            .map_or(self.original_filename.as_str(), |(stem, _)| stem);
        if !stem.is_empty() {
            return sanitize_prefix(stem);
        }

        sanitize_prefix(&self.product_name)
    }
}

/// Uppercase and replace anything not valid in a preprocessor identifier.
fn sanitize_prefix(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push('_');
        }
    }
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VersionMetadata {
        VersionMetadataBuilder::default()
            .version(SemVer::new(2, 7, 1))
            .release_date("11-19-2020".parse::<ReleaseDate>().unwrap())
            .product_name("Product-Name")
            .original_filename("app.exe")
            .build()
            .unwrap()
    }

    #[test]
    fn version_string_is_derived() {
        assert_eq!(sample().version_string(), "2.7.1");
    }

    #[test]
    fn release_string_appends_date() {
        let meta = sample();
        let release = meta.release_string();
        assert_eq!(release, "2.7.1 11-19-2020");
        assert!(release.starts_with(&meta.version_string()));
    }

    #[test]
    fn prefix_defaults_to_filename_stem() {
        assert_eq!(sample().macro_prefix(), "APP");
    }

    #[test]
    fn prefix_falls_back_to_product_name() {
        let mut meta = sample();
        meta.original_filename = String::new();
        assert_eq!(meta.macro_prefix(), "PRODUCT_NAME");
    }

    #[test]
    fn explicit_prefix_wins() {
        let mut meta = sample();
        meta.prefix = Some("viewer".to_string());
        assert_eq!(meta.macro_prefix(), "VIEWER");
    }

    #[test]
    fn prefix_never_starts_with_digit() {
        let mut meta = sample();
        meta.prefix = Some("3dview".to_string());
        assert_eq!(meta.macro_prefix(), "_3DVIEW");
    }
}
