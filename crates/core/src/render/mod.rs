// crates/core/src/render/mod.rs
pub mod header;
pub mod json;
pub mod rc;
pub mod rust_src;

use crate::error::Result;
use crate::metadata::VersionMetadata;

/// Artifact formats a metadata record can be rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// C/C++ preprocessor header for resource files and about-dialogs.
    Header,
    /// Windows `VERSIONINFO` resource script.
    Rc,
    /// Rust constants source for `include!` from a build script.
    Rust,
    /// Pretty JSON for generic tooling.
    Json,
}

impl Target {
    /// Conventional file name for this artifact, derived from the macro
    /// prefix, e.g. `viewer_version_defines.hpp` for prefix `VIEWER`.
    pub fn default_file_name(self, meta: &VersionMetadata) -> String {
        let stem = meta.macro_prefix().to_ascii_lowercase();
        match self {
            Self::Header => format!("{stem}_version_defines.hpp"),
            Self::Rc => format!("{stem}_version.rc"),
            Self::Rust => "version.rs".to_string(),
            Self::Json => format!("{stem}_version.json"),
        }
    }
}

/// Render `meta` into the requested artifact format.
///
/// Output is fully determined by the record: rendering the same record twice
/// yields byte-identical text.
pub fn render(meta: &VersionMetadata, target: Target) -> Result<String> {
    match target {
        Target::Header => Ok(header::render(meta)),
        Target::Rc => Ok(rc::render(meta)),
        Target::Rust => Ok(rust_src::render(meta)),
        Target::Json => json::render(meta),
    }
}

/// Escape a string for use inside a double-quoted C or resource literal.
pub(crate) fn escape_c(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
