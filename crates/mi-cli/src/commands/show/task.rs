use std::io::Write;

use mi_client::{ClientError, TaskApi};
use mi_core::entities::{Task, TaskList};

use crate::cli::OutputFormat;
use crate::commands::shared::usage::{ERROR_PREFIX, cmd_flags, cmd_usage};
use crate::output::table::{TableOptions, render_table};
use crate::output::{render_fields, render_json};

const TASK_LONG_DESC: &str = "Get information about the Task specified by command line argument [task-name] If not specified, list all the tasks\n";

const TASK_EXAMPLES: &str = "Example:\n\
To get details about a specific task\n  \
mi show task SampleTask\n\n\
To list all the tasks\n  \
mi show task\n\n";

const GET_TASK_FAILED: &str = "Getting Information of the Task";
const LIST_TASKS_FAILED: &str = "Getting List of Tasks";
const TOO_MANY_ARGUMENTS: &str = "Too many arguments. See the usage below";
const NO_TASKS: &str = "No Tasks found";

const TABLE_HEADERS: [&str; 5] = ["NAME", "TRIGGER TYPE", "COUNT", "INTERVAL", "CRON EXPRESSION"];

/// What `show task <args...>` asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskRequest {
    List,
    Get(String),
    Help,
    TooMany,
}

impl TaskRequest {
    /// Classify the positional arguments that follow `show task`.
    #[must_use]
    pub fn from_args(args: &[String]) -> Self {
        match args {
            [] => Self::List,
            [only] if only == "help" => Self::Help,
            [name] => Self::Get(name.clone()),
            _ => Self::TooMany,
        }
    }
}

/// How fetched tasks are printed.
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskView {
    pub format: OutputFormat,
    pub table: TableOptions,
}

/// Full help text for `show task`.
#[must_use]
pub fn task_help() -> String {
    format!(
        "{TASK_LONG_DESC}{}{TASK_EXAMPLES}{}",
        cmd_usage("show", "task", "[task-name]"),
        cmd_flags("task(s)")
    )
}

/// Run `show task` against `api`.
///
/// API failures are reported on `err` and the call still returns `Ok`; only
/// failures to write output are propagated.
pub async fn run<A: TaskApi>(
    request: TaskRequest,
    api: &A,
    view: TaskView,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    tracing::debug!(?request, "show task called");

    match request {
        TaskRequest::List => list_tasks(api, view, out, err).await,
        TaskRequest::Get(name) => get_task(api, &name, view, out, err).await,
        TaskRequest::Help => print_help(out),
        TaskRequest::TooMany => print_usage_error(out, err),
    }
}

/// Print the `show task` help text. Needs neither config nor a client.
pub fn print_help(out: &mut impl Write) -> anyhow::Result<()> {
    write!(out, "{}", task_help())?;
    Ok(())
}

/// Report surplus arguments on `err` and print the help text.
pub fn print_usage_error(out: &mut impl Write, err: &mut impl Write) -> anyhow::Result<()> {
    writeln!(err, "{TOO_MANY_ARGUMENTS}")?;
    print_help(out)
}

async fn get_task<A: TaskApi>(
    api: &A,
    name: &str,
    view: TaskView,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    match api.get_task(name).await {
        Ok(task) => writeln!(out, "{}", render_task(&task, view.format)?)?,
        Err(error) => report_failure(GET_TASK_FAILED, &error, err)?,
    }
    Ok(())
}

async fn list_tasks<A: TaskApi>(
    api: &A,
    view: TaskView,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<()> {
    match api.list_tasks().await {
        Ok(list) => writeln!(out, "{}", render_task_list(&list, view)?)?,
        Err(error) => report_failure(LIST_TASKS_FAILED, &error, err)?,
    }
    Ok(())
}

/// Render one task as labeled fields, or as JSON for the JSON formats.
///
/// Cron tasks show the cron expression; every other kind shows count and
/// interval instead.
pub fn render_task(task: &Task, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render_json(task, format);
    }

    let kind = task.trigger_type.as_str();
    let mut fields = vec![("Name", task.name.as_str()), ("Trigger Type", kind)];
    if task.is_cron() {
        fields.push(("Cron Expression", task.trigger_cron.as_str()));
    } else {
        fields.push(("Trigger Count", task.trigger_count.as_str()));
        fields.push(("Trigger Interval", task.trigger_interval.as_str()));
    }
    Ok(render_fields(&fields))
}

/// Render the task listing as a five-column table in server order.
pub fn render_task_list(list: &TaskList, view: TaskView) -> anyhow::Result<String> {
    if view.format != OutputFormat::Table {
        return render_json(list, view.format);
    }
    if list.is_empty() {
        return Ok(NO_TASKS.to_string());
    }

    let rows = list
        .tasks
        .iter()
        .map(|task| {
            vec![
                task.name.clone(),
                task.trigger_type.to_string(),
                task.trigger_count.clone(),
                task.trigger_interval.clone(),
                task.trigger_cron.clone(),
            ]
        })
        .collect::<Vec<_>>();

    Ok(render_table(&TABLE_HEADERS, &rows, view.table))
}

fn report_failure(label: &str, error: &ClientError, err: &mut impl Write) -> std::io::Result<()> {
    tracing::debug!(%error, "{label}");
    writeln!(err, "{ERROR_PREFIX}{label} {error}")
}
