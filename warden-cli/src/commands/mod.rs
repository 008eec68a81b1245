//! CLI command definitions and handlers.

mod coldcard;

use clap::{Parser, Subcommand};
pub use coldcard::ColdcardCommand;

/// Warden - import hardware wallet exports.
#[derive(Parser)]
#[command(name = "warden")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv). Ignored when `RUST_LOG` is set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Device to import from.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported devices.
#[derive(Subcommand)]
pub enum Commands {
    /// Coldcard export operations.
    #[command(name = "coldcard", alias = "cc")]
    Coldcard(ColdcardCommand),
}
