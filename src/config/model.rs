//! Config struct definition and default implementation.

use crate::substitutions::SubstitutionMap;
use serde::Deserialize;

/// Configuration for a render run.
///
/// This struct represents the contents of `render.yaml`. Unknown fields
/// are ignored for forward compatibility. Every field is optional; a
/// missing config file behaves like `Config::default()`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Template file to render, resolved relative to the config file's
    /// directory.
    pub template: Option<String>,

    /// Destination file, resolved relative to the config file's
    /// directory.
    pub output: Option<String>,

    /// Substitution pairs, processed in document order.
    pub data: SubstitutionMap,
}
