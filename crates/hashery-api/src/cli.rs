//! CLI definitions for the `hashery` binary.
//!
//! Uses clap derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Password, content and file hashing over HTTP.
#[derive(Parser)]
#[command(name = "hashery", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,hashery=debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve(ServeArgs),

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind (overrides the config file).
    #[arg(long, env = "HASHERY_HOST")]
    pub host: Option<String>,

    /// Port to bind (overrides the config file).
    #[arg(short, long, env = "HASHERY_PORT")]
    pub port: Option<u16>,

    /// Path to a TOML config file.
    #[arg(short, long, env = "HASHERY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long)]
    pub otel: bool,
}
