// crates/core/src/render/rc.rs
use std::fmt::Write;

use crate::metadata::VersionMetadata;
use crate::render::escape_c;

/// Language/codepage block id: U.S. English, Unicode.
const LANG_BLOCK: &str = "040904b0";

/// Render a standalone Windows `VERSIONINFO` resource script.
///
/// Carries the same record as the header artifact but in the shape
/// `rc.exe` consumes directly, so a project can embed version resources
/// without the preprocessor indirection.
pub fn render(meta: &VersionMetadata) -> String {
    let (major, minor, patch, build) = meta.version.resource_quad();
    let quoted = |s: &str| format!("\"{}\"", escape_c(s));

    let values = [
        ("CompanyName", quoted(&meta.company_name)),
        ("FileDescription", quoted(&meta.file_description)),
        ("FileVersion", quoted(&meta.version_string())),
        ("LegalCopyright", quoted(&meta.legal_copyright)),
        ("LegalTrademarks", quoted(&meta.legal_trademarks)),
        ("OriginalFilename", quoted(&meta.original_filename)),
        ("ProductName", quoted(&meta.product_name)),
        ("ProductVersion", quoted(&meta.release_string())),
    ];

    let width = values
        .iter()
        .map(|(key, _)| key.len() + 3)
        .max()
        .unwrap_or(0)
        + 1;

    let mut out = String::new();
    writeln!(out, "// This file is generated by verstamp. Do not modify directly.").unwrap();
    out.push('\n');
    writeln!(out, "#include <winver.h>").unwrap();
    out.push('\n');
    writeln!(out, "VS_VERSION_INFO VERSIONINFO").unwrap();
    writeln!(out, "FILEVERSION     {major},{minor},{patch},{build}").unwrap();
    writeln!(out, "PRODUCTVERSION  {major},{minor},{patch},{build}").unwrap();
    writeln!(out, "FILEFLAGSMASK   VS_FFI_FILEFLAGSMASK").unwrap();
    writeln!(out, "FILEFLAGS       0x0L").unwrap();
    writeln!(out, "FILEOS          VOS__WINDOWS32").unwrap();
    writeln!(out, "FILETYPE        VFT_APP").unwrap();
    writeln!(out, "FILESUBTYPE     VFT2_UNKNOWN").unwrap();
    writeln!(out, "BEGIN").unwrap();
    writeln!(out, "    BLOCK \"StringFileInfo\"").unwrap();
    writeln!(out, "    BEGIN").unwrap();
    writeln!(out, "        BLOCK \"{LANG_BLOCK}\"").unwrap();
    writeln!(out, "        BEGIN").unwrap();
    for (key, value) in &values {
        let key = format!("\"{key}\",");
        writeln!(out, "            VALUE {key:<width$}{value}").unwrap();
    }
    writeln!(out, "        END").unwrap();
    writeln!(out, "    END").unwrap();
    writeln!(out, "    BLOCK \"VarFileInfo\"").unwrap();
    writeln!(out, "    BEGIN").unwrap();
    writeln!(out, "        VALUE \"Translation\", 0x409, 1200").unwrap();
    writeln!(out, "    END").unwrap();
    writeln!(out, "END").unwrap();
    out
}
