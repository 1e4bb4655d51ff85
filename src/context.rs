//! Path resolution for render runs.
//!
//! This module decides which template, output, and config files a run
//! targets, applying precedence: command-line flag > config entry >
//! built-in default.
//!
//! Command-line paths resolve against the invocation directory.
//! Paths named inside the config file resolve against the config file's
//! directory, which plays the role the original script location played
//! for its neighboring resources.

use crate::config::Config;
use crate::error::{Result, StencilError};
use std::path::{Path, PathBuf};

/// Default template filename, looked up in the invocation directory.
pub const DEFAULT_TEMPLATE_FILE: &str = "template.html";

/// Default output filename, placed next to the template.
pub const DEFAULT_OUTPUT_FILE: &str = "index.html";

/// Default config filename, looked up in the invocation directory.
pub const DEFAULT_CONFIG_FILE: &str = "render.yaml";

/// Resolved input and destination paths for one render run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Path of the template file to read.
    pub template_path: PathBuf,

    /// Path of the destination file to write.
    pub output_path: PathBuf,
}

impl RenderContext {
    /// Resolve paths from explicit arguments, config entries, and
    /// defaults.
    ///
    /// `config_dir` anchors relative paths named inside the config file;
    /// `cwd` anchors relative paths given on the command line.
    pub fn resolve_from(
        cwd: &Path,
        template_arg: Option<&Path>,
        output_arg: Option<&Path>,
        config: &Config,
        config_dir: &Path,
    ) -> Self {
        let template_path = match (template_arg, config.template.as_deref()) {
            (Some(arg), _) => anchor(cwd, arg),
            (None, Some(entry)) => anchor(config_dir, Path::new(entry)),
            (None, None) => cwd.join(DEFAULT_TEMPLATE_FILE),
        };

        let output_path = match (output_arg, config.output.as_deref()) {
            (Some(arg), _) => anchor(cwd, arg),
            (None, Some(entry)) => anchor(config_dir, Path::new(entry)),
            (None, None) => template_path
                .parent()
                .unwrap_or(cwd)
                .join(DEFAULT_OUTPUT_FILE),
        };

        Self {
            template_path,
            output_path,
        }
    }
}

/// Join a relative path onto a base directory; absolute paths pass
/// through unchanged.
fn anchor(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Locate the config file for a run.
///
/// An explicitly passed path must exist (I/O error otherwise). The
/// default `render.yaml` is used only when present; its absence is not
/// an error.
pub fn locate_config(cwd: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            let path = anchor(cwd, path);
            if path.is_file() {
                Ok(Some(path))
            } else {
                Err(StencilError::IoError(format!(
                    "config file '{}' not found",
                    path.display()
                )))
            }
        }
        None => {
            let default = cwd.join(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                Ok(Some(default))
            } else {
                Ok(None)
            }
        }
    }
}
