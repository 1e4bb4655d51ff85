//! CLI argument parsing for stencil.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The render pipeline itself lives in the `commands` module.
//!
//! There is a single operation, so the surface is a flat argument list
//! rather than a subcommand tree. Every argument is optional: invoking
//! `stencil` with no arguments renders `template.html` to `index.html`
//! in the current directory.

use clap::Parser;
use std::path::PathBuf;

/// Stencil: minimal file-based template renderer.
///
/// Reads a template file, substitutes `{key}` placeholders with values
/// from a config file and/or `--set` pairs, and writes the result to the
/// destination file, overwriting any existing content.
#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Template file to render. Defaults to `template.html` in the
    /// current directory.
    pub template: Option<PathBuf>,

    /// Destination file. Defaults to `index.html` next to the template.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file with path overrides and substitution data.
    /// Defaults to `render.yaml` in the current directory if present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Add or override a substitution pair (repeatable).
    #[arg(short, long, value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Echo the rendered text to stdout after writing it.
    #[arg(long)]
    pub print: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::try_parse_from(["stencil"]).unwrap();
        assert!(cli.template.is_none());
        assert!(cli.output.is_none());
        assert!(cli.config.is_none());
        assert!(cli.set.is_empty());
        assert!(!cli.print);
    }

    #[test]
    fn parse_template_positional() {
        let cli = Cli::try_parse_from(["stencil", "page.html"]).unwrap();
        assert_eq!(cli.template, Some(PathBuf::from("page.html")));
    }

    #[test]
    fn parse_output_flag() {
        let cli = Cli::try_parse_from(["stencil", "-o", "out/index.html"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out/index.html")));

        let cli = Cli::try_parse_from(["stencil", "--output", "result.html"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("result.html")));
    }

    #[test]
    fn parse_config_flag() {
        let cli = Cli::try_parse_from(["stencil", "--config", "site.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("site.yaml")));
    }

    #[test]
    fn parse_set_repeatable() {
        let cli = Cli::try_parse_from([
            "stencil",
            "--set",
            "title=Hello",
            "-s",
            "body=World",
        ])
        .unwrap();
        assert_eq!(cli.set, vec!["title=Hello", "body=World"]);
    }

    #[test]
    fn parse_set_value_may_contain_equals() {
        let cli = Cli::try_parse_from(["stencil", "--set", "query=a=b"]).unwrap();
        assert_eq!(cli.set, vec!["query=a=b"]);
    }

    #[test]
    fn parse_print_flag() {
        let cli = Cli::try_parse_from(["stencil", "--print"]).unwrap();
        assert!(cli.print);
    }

    #[test]
    fn parse_full_invocation() {
        let cli = Cli::try_parse_from([
            "stencil",
            "page.html",
            "--output",
            "out.html",
            "--config",
            "render.yaml",
            "--set",
            "title=X",
            "--print",
        ])
        .unwrap();
        assert_eq!(cli.template, Some(PathBuf::from("page.html")));
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
        assert_eq!(cli.config, Some(PathBuf::from("render.yaml")));
        assert_eq!(cli.set, vec!["title=X"]);
        assert!(cli.print);
    }
}
