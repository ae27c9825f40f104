// crates/core/src/render/json.rs
use crate::error::Result;
use crate::metadata::VersionMetadata;

/// Render the record as pretty JSON, derived strings included.
///
/// Keys are emitted in a fixed order so regeneration stays byte-identical.
pub fn render(meta: &VersionMetadata) -> Result<String> {
    let value = serde_json::json!({
        "major": meta.version.major,
        "minor": meta.version.minor,
        "patch": meta.version.patch,
        "version": meta.version_string(),
        "release": meta.release_string(),
        "date": meta.release_date.to_string(),
        "company": meta.company_name,
        "copyright": meta.legal_copyright,
        "trademarks": meta.legal_trademarks,
        "domain": meta.company_domain,
        "description": meta.file_description,
        "original_filename": meta.original_filename,
        "product": meta.product_name,
        "prefix": meta.macro_prefix(),
    });

    let mut text = serde_json::to_string_pretty(&value)?;
    text.push('\n');
    Ok(text)
}
