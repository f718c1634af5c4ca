//! CLI definition for the `maitre` binary.
//!
//! Uses clap derive macros for argument parsing. The binary has a
//! single job -- run the chat widget -- so there are no subcommands,
//! only configuration and verbosity flags.

pub mod chat;

use std::path::PathBuf;

use clap::Parser;

/// Terminal chat widget backed by a workflow webhook.
#[derive(Parser)]
#[command(name = "maitre", version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, env = "MAITRE_CONFIG", default_value = "maitre.toml")]
    pub config: PathBuf,

    /// Suppress all output except errors.
    #[arg(long)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
