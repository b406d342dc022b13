// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

/// Command-line arguments for `dag-traveler`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dag-traveler",
    version,
    about = "Walk a weighted DAG, visiting every reachable node after its edge delay.",
    long_about = None
)]
#[command(group(ArgGroup::new("input").required(true).args(["dag", "file"])))]
pub struct CliArgs {
    /// The directed acyclic graph in JSON format.
    ///
    /// Example: '{"A": {"start": true, "edges": {"B": 1}}, "B": {"edges": {}}}'
    #[arg(value_name = "DAG")]
    pub dag: Option<String>,

    /// Read the graph from a file instead (`.toml` is parsed as TOML,
    /// anything else as JSON).
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// Case-insensitive; `warning` and `critical` are accepted as aliases.
    /// If omitted, `DAG_TRAVELER_LOG` or a default level will be used.
    #[arg(long, value_enum, ignore_case = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Abort the traversal after this many seconds.
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Validate the graph and print the planned visit schedule without waiting.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    #[value(alias = "critical")]
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
