use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TriggerKind;

/// A scheduled trigger resource deployed on the runtime.
///
/// Only one trigger shape is meaningful per task: `trigger_cron` when the kind
/// is cron, otherwise `trigger_count` and `trigger_interval`. The server may
/// still send the unused fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    #[schemars(with = "String")]
    pub trigger_type: TriggerKind,
    #[serde(default)]
    pub trigger_cron: String,
    #[serde(default)]
    pub trigger_count: String,
    #[serde(default)]
    pub trigger_interval: String,
}

impl Task {
    #[must_use]
    pub fn is_cron(&self) -> bool {
        self.trigger_type.is_cron()
    }
}

/// Listing envelope returned by `GET /tasks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskList {
    #[serde(default)]
    pub count: u32,
    #[serde(rename = "list", default)]
    pub tasks: Vec<Task>,
}

impl TaskList {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}
