// src/presentation.rs
use std::path::Path;

use verstamp_core::verify::CheckOutcome;

/// Status line after writing (or skipping) one artifact.
pub fn report_write(path: &Path, changed: bool, quiet: bool) {
    if quiet {
        return;
    }
    if changed {
        eprintln!("[verstamp] wrote {}", path.display());
    } else {
        eprintln!("[verstamp] up to date: {}", path.display());
    }
}

/// Report one artifact's check outcome. Stale header artifacts list the
/// drifted defines so CI logs name the exact field that moved.
pub fn report_check(path: &Path, outcome: &CheckOutcome) {
    match outcome {
        CheckOutcome::UpToDate => eprintln!("[verstamp] up to date: {}", path.display()),
        CheckOutcome::Missing => eprintln!("[verstamp] missing: {}", path.display()),
        CheckOutcome::Stale(drift) => {
            eprintln!("[verstamp] stale: {}", path.display());
            for field in drift {
                match &field.found {
                    Some(found) => eprintln!(
                        "    {}: expected {}, found {}",
                        field.name, field.expected, found
                    ),
                    None => eprintln!("    {}: expected {}, not present", field.name, field.expected),
                }
            }
        }
    }
}
