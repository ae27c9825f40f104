// crates/core/src/render/header.rs
use std::fmt::Write;

use crate::metadata::VersionMetadata;
use crate::render::escape_c;

const BANNER_RULE: &str =
    "/////////////////////////////////////////////////////////////////////////////";

/// Minimum column at which define values start, matching the hand-tuned
/// alignment of the headers this replaces.
const MIN_VALUE_COLUMN: usize = 28;

/// Number of defines in the leading version section; the next section starts
/// with the resource aliases. See `defines` for the fixed ordering.
const VERSION_SECTION: usize = 5;
const RESOURCE_SECTION: usize = 14;

/// Every `#define` of the header, in emission order.
///
/// The composite and alias entries reference the primary defines by macro
/// name instead of repeating their literals, so the preprocessor is the only
/// place a value exists twice.
pub fn defines(meta: &VersionMetadata) -> Vec<(String, String)> {
    let p = meta.macro_prefix();
    let quoted = |s: &str| format!("\"{}\"", escape_c(s));

    vec![
        (format!("{p}_VERSION_MAJOR"), meta.version.major.to_string()),
        (format!("{p}_VERSION_MINOR"), meta.version.minor.to_string()),
        (format!("{p}_VERSION_PATCH"), meta.version.patch.to_string()),
        (format!("{p}_VERSION"), quoted(&meta.version_string())),
        (format!("{p}_RELEASE_VERSION"), quoted(&meta.release_string())),
        (
            format!("{p}_FILEVERSION"),
            format!("{p}_VERSION_MAJOR,{p}_VERSION_MINOR,{p}_VERSION_PATCH"),
        ),
        (format!("{p}_FILEVERSION_STR"), format!("{p}_VERSION")),
        (format!("{p}_PRODUCTVERSION"), format!("{p}_FILEVERSION")),
        (
            format!("{p}_PRODUCTVERSION_STR"),
            format!("{p}_RELEASE_VERSION"),
        ),
        (format!("{p}_COMPANYNAME_STR"), quoted(&meta.company_name)),
        (
            format!("{p}_LEGALCOPYRIGHT_STR"),
            quoted(&meta.legal_copyright),
        ),
        (
            format!("{p}_LEGALTRADEMARKS1_STR"),
            quoted(&meta.legal_trademarks),
        ),
        (
            format!("{p}_LEGALTRADEMARKS2_STR"),
            format!("{p}_LEGALTRADEMARKS1_STR"),
        ),
        (
            format!("{p}_COMPANYDOMAIN_STR"),
            quoted(&meta.company_domain),
        ),
        (
            format!("{p}_FILEDESCRIPTION_STR"),
            quoted(&meta.file_description),
        ),
        (
            format!("{p}_ORIGINALFILENAME_STR"),
            quoted(&meta.original_filename),
        ),
        (format!("{p}_PRODUCTNAME_STR"), quoted(&meta.product_name)),
    ]
}

pub fn render(meta: &VersionMetadata) -> String {
    let prefix = meta.macro_prefix();
    let guard = format!("{prefix}_VERSIONDEFINES_HPP");
    let defines = defines(meta);

    // Keep at least one space between the longest macro name and its value.
    let width = defines
        .iter()
        .map(|(name, _)| name.len() + 1)
        .max()
        .unwrap_or(0)
        .max(MIN_VALUE_COLUMN);

    let mut out = String::new();
    writeln!(out, "#ifndef {guard}").unwrap();
    writeln!(out, "#define {guard}").unwrap();
    out.push('\n');
    writeln!(out, "{BANNER_RULE}").unwrap();
    writeln!(out, "// This file is generated by verstamp.").unwrap();
    writeln!(out, "// Do not modify directly.").unwrap();
    writeln!(out, "{BANNER_RULE}").unwrap();
    out.push('\n');

    writeln!(
        out,
        "// Preprocessor definitions providing compile-time access to version information"
    )
    .unwrap();
    out.push('\n');
    for (name, value) in &defines[..VERSION_SECTION] {
        writeln!(out, "#define {name:<width$}{value}").unwrap();
    }

    out.push('\n');
    writeln!(
        out,
        "// Miscellaneous preprocessor definitions for use by resource files"
    )
    .unwrap();
    out.push('\n');
    for (name, value) in &defines[VERSION_SECTION..RESOURCE_SECTION] {
        writeln!(out, "#define {name:<width$}{value}").unwrap();
    }

    out.push('\n');
    writeln!(
        out,
        "// Application specific preprocessor definitions used by resource files"
    )
    .unwrap();
    out.push('\n');
    for (name, value) in &defines[RESOURCE_SECTION..] {
        writeln!(out, "#define {name:<width$}{value}").unwrap();
    }

    out.push('\n');
    writeln!(out, "#endif").unwrap();
    out
}
