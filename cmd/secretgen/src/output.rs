//! Writing the manifest to disk and cleaning up generated files.

use chrono::{DateTime, Utc};
use pkg_constants::paths::{GENERATED_NAME_EXT, GENERATED_NAME_SUFFIX};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::GenError;

/// Time-based output name: `<dir>/<unix-seconds>-secret.json`.
pub fn generated_path(dir: &Path, now: DateTime<Utc>) -> PathBuf {
    dir.join(format!(
        "{}{}{}",
        now.timestamp(),
        GENERATED_NAME_SUFFIX,
        GENERATED_NAME_EXT
    ))
}

/// Replace `path` with `bytes`.
///
/// Content goes to a temp file in the same directory and is renamed over the
/// destination, so the destination either keeps its old content or holds the
/// full new content.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), GenError> {
    let wrap = |source: std::io::Error| GenError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(wrap)?;
    tmp.write_all(bytes).map_err(wrap)?;
    tmp.as_file().sync_all().map_err(wrap)?;
    tmp.persist(path).map_err(|e| wrap(e.error))?;

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Removes an ephemeral output file when dropped.
///
/// Created right after a successful write, so the file goes away whether the
/// rest of the run succeeds or fails.
pub struct OutputGuard {
    path: PathBuf,
    ephemeral: bool,
}

impl OutputGuard {
    pub fn new(path: &Path, ephemeral: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            ephemeral,
        }
    }
}

impl Drop for OutputGuard {
    fn drop(&mut self) {
        if !self.ephemeral {
            return;
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => info!("Removed generated manifest {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove {}: {}", self.path.display(), e),
        }
    }
}
