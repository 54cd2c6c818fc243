// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::HELPER_MARKER;

/// Command-line arguments for `fakerun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fakerun",
    version,
    about = "Inspect and replay scripted fake processes.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `FAKERUN_LOG` or a default level will be used.
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Parse + validate a script file and print its steps.
    Check {
        /// Path to the script file (TOML).
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,
    },

    /// Drive a script through a sequence responder and run every fake process.
    Replay {
        /// Path to the script file (TOML).
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Number of calls to make (default: one per step).
        #[arg(long, value_name = "N")]
        calls: Option<usize>,
    },

    /// Fake process entrypoint. Only acts with the activation variable set,
    /// which `main` handles before argument parsing.
    #[command(name = HELPER_MARKER, hide = true)]
    HelperProcess {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
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
