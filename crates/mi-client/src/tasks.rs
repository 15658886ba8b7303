//! Scheduled task endpoints.

use std::future::Future;

use mi_core::entities::{Task, TaskList};

use crate::{ClientError, ManagementClient};

/// Resource path of the tasks collection under the management API base.
pub const TASKS_PATH: &str = "/tasks";

/// Read access to deployed tasks.
///
/// Implemented by [`ManagementClient`]; command handlers are generic over it
/// so they can run against an in-memory source.
pub trait TaskApi {
    /// Fetch a single task by name.
    fn get_task(&self, name: &str) -> impl Future<Output = Result<Task, ClientError>> + Send;

    /// Fetch every deployed task.
    fn list_tasks(&self) -> impl Future<Output = Result<TaskList, ClientError>> + Send;
}

/// Path and query for a single task lookup.
///
/// The name is inserted as-is. Characters such as `&`, `#` or spaces are not
/// escaped, so names containing them may not round-trip through the server.
#[must_use]
pub fn task_query(name: &str) -> String {
    format!("{TASKS_PATH}?taskName={name}")
}

impl TaskApi for ManagementClient {
    async fn get_task(&self, name: &str) -> Result<Task, ClientError> {
        self.get_json(&self.url(&task_query(name))).await
    }

    async fn list_tasks(&self) -> Result<TaskList, ClientError> {
        self.get_json(&self.url(TASKS_PATH)).await
    }
}
