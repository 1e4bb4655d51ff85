//! Command implementation for stencil.
//!
//! The CLI exposes a single operation, so the dispatcher is a thin
//! pass-through to the render pipeline.

mod render;

use crate::cli::Cli;
use crate::error::Result;

/// Dispatch the parsed CLI to the render pipeline.
pub fn dispatch(cli: Cli) -> Result<()> {
    render::cmd_render(cli)
}
