// crates/core/src/render/rust_src.rs
use std::fmt::Write;

use crate::metadata::VersionMetadata;

/// Render a Rust constants source file.
///
/// Meant to be emitted into `OUT_DIR` by a build script and pulled in with
/// `include!(concat!(env!("OUT_DIR"), "/version.rs"))`, giving Rust consumers
/// the same single source of truth as the C header.
pub fn render(meta: &VersionMetadata) -> String {
    let mut out = String::new();
    writeln!(out, "// This file is generated by verstamp. Do not modify directly.").unwrap();
    out.push('\n');
    writeln!(out, "pub const VERSION_MAJOR: u32 = {};", meta.version.major).unwrap();
    writeln!(out, "pub const VERSION_MINOR: u32 = {};", meta.version.minor).unwrap();
    writeln!(out, "pub const VERSION_PATCH: u32 = {};", meta.version.patch).unwrap();
    writeln!(out, "pub const VERSION: &str = {:?};", meta.version_string()).unwrap();
    writeln!(
        out,
        "pub const RELEASE_VERSION: &str = {:?};",
        meta.release_string()
    )
    .unwrap();
    out.push('\n');
    writeln!(
        out,
        "pub const COMPANY_NAME: &str = {:?};",
        meta.company_name
    )
    .unwrap();
    writeln!(
        out,
        "pub const LEGAL_COPYRIGHT: &str = {:?};",
        meta.legal_copyright
    )
    .unwrap();
    writeln!(
        out,
        "pub const LEGAL_TRADEMARKS: &str = {:?};",
        meta.legal_trademarks
    )
    .unwrap();
    writeln!(
        out,
        "pub const COMPANY_DOMAIN: &str = {:?};",
        meta.company_domain
    )
    .unwrap();
    out.push('\n');
    writeln!(
        out,
        "pub const FILE_DESCRIPTION: &str = {:?};",
        meta.file_description
    )
    .unwrap();
    writeln!(
        out,
        "pub const ORIGINAL_FILENAME: &str = {:?};",
        meta.original_filename
    )
    .unwrap();
    writeln!(
        out,
        "pub const PRODUCT_NAME: &str = {:?};",
        meta.product_name
    )
    .unwrap();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::VersionMetadataBuilder;
    use crate::release::ReleaseDate;
    use crate::semver::SemVer;

    fn sample() -> VersionMetadata {
        VersionMetadataBuilder::default()
            .version(SemVer::new(2, 7, 1))
            .release_date("11-19-2020".parse::<ReleaseDate>().unwrap())
            .product_name("Product-Name")
            .build()
            .unwrap()
    }

    #[test]
    fn emits_numeric_and_string_constants() {
        let text = render(&sample());
        assert!(text.contains("pub const VERSION_MAJOR: u32 = 2;"));
        assert!(text.contains("pub const VERSION: &str = \"2.7.1\";"));
        assert!(text.contains("pub const RELEASE_VERSION: &str = \"2.7.1 11-19-2020\";"));
    }

    #[test]
    fn string_constants_use_rust_escaping() {
        let mut meta = sample();
        meta.file_description = "says \"hi\"".to_string();
        let text = render(&meta);
        assert!(text.contains(r#"pub const FILE_DESCRIPTION: &str = "says \"hi\"";"#));
    }
}
