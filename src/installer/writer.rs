//! Per-file writes into the install directory
//!
//! Each file is written to a temporary file next to its target and then
//! renamed into place, so a reader never observes a half-written component
//! file. Without overwrite the rename refuses to replace an existing file.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{GraftError, Result};

fn file_write_error(path: &Path, e: &std::io::Error) -> GraftError {
    GraftError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Ensure the install directory exists
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| file_write_error(dir, &e))
}

/// Write `content` to `dir/file_name`
///
/// Returns the final path. With `overwrite` off an existing target yields
/// [`GraftError::FileExists`] and is left untouched.
pub fn write_file(dir: &Path, file_name: &str, content: &str, overwrite: bool) -> Result<PathBuf> {
    let target = dir.join(file_name);
    if !overwrite && target.exists() {
        return Err(file_exists(&target));
    }

    ensure_dir(dir)?;
    let mut staged = NamedTempFile::new_in(dir).map_err(|e| file_write_error(&target, &e))?;
    staged
        .write_all(content.as_bytes())
        .and_then(|()| staged.flush())
        .map_err(|e| file_write_error(&target, &e))?;

    let persisted = if overwrite {
        staged.persist(&target)
    } else {
        staged.persist_noclobber(&target)
    };

    match persisted {
        Ok(_) => Ok(target),
        Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => Err(file_exists(&target)),
        Err(e) => Err(file_write_error(&target, &e.error)),
    }
}

fn file_exists(path: &Path) -> GraftError {
    GraftError::FileExists {
        path: path.display().to_string(),
    }
}
