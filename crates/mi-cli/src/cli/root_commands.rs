use clap::Subcommand;

use crate::cli::subcommands::ShowCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show information about artifacts deployed on the runtime.
    Show {
        #[command(subcommand)]
        action: ShowCommands,
    },
}
