use std::io::Write;

use mi_client::ManagementClient;

use crate::bootstrap;
use crate::cli::subcommands::ShowCommands;
use crate::cli::{Commands, GlobalFlags};
use crate::commands::show::task::{self, TaskRequest, TaskView};
use crate::output::table::TableOptions;

/// Run a parsed command.
///
/// Config is loaded and the client built only for requests that reach the
/// management API; help and usage errors print without either.
pub async fn dispatch(
    command: Commands,
    flags: &GlobalFlags,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Commands::Show { action } => match action {
            ShowCommands::Task(args) => match TaskRequest::from_args(&args.args) {
                TaskRequest::Help => task::print_help(out),
                TaskRequest::TooMany => task::print_usage_error(out, err),
                request => {
                    let config = bootstrap::load_config(flags)?;
                    tracing::debug!(
                        base_url = config.management.base(),
                        "management API configured"
                    );
                    let client = ManagementClient::new(&config)?;
                    let view = TaskView {
                        format: flags.format,
                        table: TableOptions::from_env(),
                    };
                    task::run(request, &client, view, out, err).await
                }
            },
        },
    }
}
