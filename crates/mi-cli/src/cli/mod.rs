use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `mi` binary.
#[derive(Debug, Parser)]
#[command(
    name = "mi",
    version,
    about = "Micro-integrator administration CLI"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: table, json, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Management API base URL (overrides config)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            base_url: self.base_url.clone(),
        }
    }
}
