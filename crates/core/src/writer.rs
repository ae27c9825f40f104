// crates/core/src/writer.rs
use std::{
    fs,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::{Result, StampError};

/// Helper utilities for writing generated artifacts.
pub struct ArtifactWriter;

impl ArtifactWriter {
    /// Write `data` to `path`, skipping the write when the file already has
    /// exactly this content. Returns `true` when the file changed.
    ///
    /// The skip keeps mtimes stable so downstream build systems do not
    /// rebuild on a no-op regeneration.
    pub fn write_if_changed(path: &Path, data: &str) -> Result<bool> {
        if let Ok(existing) = fs::read_to_string(path) {
            if existing == data {
                log::debug!("{} already up to date, skipping write", path.display());
                return Ok(false);
            }
        }

        Self::atomic_write(path, data.as_bytes()).map_err(|source| StampError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(true)
    }

    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => std::path::PathBuf::from("."),
        };

        // Unique temp file name in the same directory to allow atomic rename.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let file = File::create(&tmp)?;
        let mut w = BufWriter::new(file);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();

        fs::rename(&tmp, path)?;

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(&parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}
