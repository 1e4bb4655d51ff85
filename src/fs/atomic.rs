//! Atomic file write for stencil.
//!
//! Rendered output replaces the destination in one step: content is
//! written to a temporary file in the same directory, synced to disk,
//! then renamed over the target. A crash mid-write leaves the previous
//! destination intact (plus, at worst, a stray `.{filename}.tmp`).
//!
//! Source and target must be on the same filesystem for the rename to
//! be atomic. On POSIX, `rename()` replaces an existing destination
//! atomically; on Windows a pre-existing destination is removed first.

use crate::error::{Result, StencilError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// Writes the content to a temporary file in the target's directory,
/// syncs it, and renames it over the target. Parent directories are
/// created as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            StencilError::IoError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;
    replace_file(&temp_path, path)
}

/// Atomically write a string to a file.
///
/// Convenience wrapper around `atomic_write` for text content.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temp file path in the same directory as the target: `.{filename}.tmp`.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            StencilError::IoError(format!(
                "invalid destination path '{}'",
                target.display()
            ))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to a file and sync it to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        StencilError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|_| file.sync_all())
        .map_err(|e| {
            // Clean up temp file on error
            let _ = fs::remove_file(path);
            StencilError::IoError(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        })
}

#[cfg(unix)]
fn replace_file(source: &Path, target: &Path) -> Result<()> {
    // rename() replaces an existing destination atomically on POSIX
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        StencilError::IoError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })
}

#[cfg(windows)]
fn replace_file(source: &Path, target: &Path) -> Result<()> {
    // rename() fails on an existing destination on Windows; remove it
    // first. Not fully atomic, but the temp file holds the complete
    // content either way.
    if target.exists() {
        fs::remove_file(target).map_err(|e| {
            let _ = fs::remove_file(source);
            StencilError::IoError(format!(
                "failed to remove existing '{}': {}",
                target.display(),
                e
            ))
        })?;
    }

    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        StencilError::IoError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })
}
