use clap::{Args, Subcommand};

use crate::commands::show::task::task_help;

/// Read-only artifact commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ShowCommands {
    /// Get information about tasks.
    #[command(override_help = task_help())]
    Task(TaskArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TaskArgs {
    /// Task name, or `help`. Lists every task when omitted.
    #[arg(value_name = "task-name")]
    pub args: Vec<String>,
}
