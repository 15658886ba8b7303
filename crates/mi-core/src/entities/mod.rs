//! Entity structs returned by the management API.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Field names
//! follow the server's camelCase wire format.

mod task;

pub use task::{Task, TaskList};
