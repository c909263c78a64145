//! ListTasks command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::read;
use crate::types::{sorted_tasks, ListId, SortOrder, Status};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{operation, Execute, ExecutionResult};

/// List the tasks of a list, sorted by creation time
#[operation(verb = "list", noun = "tasks", description = "List tasks of the active list, optionally filtered by status", read_only)]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListTasks {
    /// Only tasks with this status
    pub status: Option<Status>,
    /// newest (default) or oldest
    #[serde(default)]
    pub sort: SortOrder,
    /// List to read instead of the active one
    pub list_id: Option<ListId>,
}

impl ListTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn in_list(mut self, list_id: impl Into<ListId>) -> Self {
        self.list_id = Some(list_id.into());
        self
    }
}

impl Execute<BoardContext, BoardError> for ListTasks {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let state = ctx.state();
        let list_id = self.list_id.as_ref().unwrap_or(&state.active_list);
        let tasks = sorted_tasks(&state.tasks, list_id, self.status, self.sort);

        read(&json!({
            "list_id": list_id,
            "count": tasks.len(),
            "tasks": tasks,
        }))
    }
}
