// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `treedoc`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "treedoc",
    version,
    about = "Keep a Markdown snapshot of a project's tree and file contents up to date.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory to scan and watch.
    ///
    /// Overrides `[config].target_directory`.
    #[arg(value_name = "TARGET_DIR")]
    pub target: Option<String>,

    /// Markdown file to (re)generate.
    ///
    /// Overrides `[config].output_markdown_path`.
    #[arg(value_name = "OUTPUT_MD")]
    pub output: Option<String>,

    /// Path to a config file (TOML).
    ///
    /// Default: `Treedoc.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Generate the document once and exit, no watching.
    #[arg(long)]
    pub once: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TREEDOC_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print settings and rules, but don't write anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
