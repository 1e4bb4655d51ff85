//! File I/O for templates and rendered output.

use crate::error::{Result, StencilError};
use std::path::Path;

/// Read a template file fully into memory as UTF-8 text.
///
/// Propagates an I/O error if the file is missing or unreadable.
pub fn load_template<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| {
        StencilError::IoError(format!(
            "failed to read template '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Write rendered text to the destination file, replacing any existing
/// content.
///
/// Uses an atomic write (temp file + rename) so the destination is never
/// left partially written. The destination is overwritten unconditionally;
/// the last writer wins.
pub fn write_rendered<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    crate::fs::atomic_write_file(path, text)
}
