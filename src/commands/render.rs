//! The render pipeline.
//!
//! A single linear pass: locate and load the config, build the
//! substitution map, resolve paths, load the template, substitute,
//! persist the rendered output. Any failure aborts the run; there is no
//! retry or partial-failure recovery.

use crate::cli::Cli;
use crate::config::Config;
use crate::context::{self, RenderContext};
use crate::error::{Result, StencilError};
use crate::substitutions::{self, SubstitutionMap};
use crate::template;
use std::env;
use std::path::PathBuf;

/// Execute a render run.
pub fn cmd_render(cli: Cli) -> Result<()> {
    let cwd = env::current_dir().map_err(|e| {
        StencilError::IoError(format!("failed to get current working directory: {}", e))
    })?;

    // Load the config file, if there is one
    let (config, config_dir) = match context::locate_config(&cwd, cli.config.as_deref())? {
        Some(path) => {
            let dir = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| cwd.clone());
            (Config::load(&path)?, dir)
        }
        None => (Config::default(), cwd.clone()),
    };

    // Config data first, --set pairs on top. Overriding keeps the
    // original position in the map; new keys append.
    let mut subs: SubstitutionMap = config.data.clone();
    for raw in &cli.set {
        let (key, value) = substitutions::parse_assignment(raw)?;
        subs.insert(key, value);
    }

    let ctx = RenderContext::resolve_from(
        &cwd,
        cli.template.as_deref(),
        cli.output.as_deref(),
        &config,
        &config_dir,
    );

    // load -> substitute -> persist
    let template_text = template::load_template(&ctx.template_path)?;
    let rendered = template::substitute(&template_text, &subs);
    template::write_rendered(&ctx.output_path, &rendered)?;

    println!(
        "Rendered {} -> {} ({} pair{})",
        ctx.template_path.display(),
        ctx.output_path.display(),
        subs.len(),
        if subs.len() == 1 { "" } else { "s" }
    );

    if cli.print {
        println!("{}", rendered);
    }

    Ok(())
}
