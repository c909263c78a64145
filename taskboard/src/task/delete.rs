//! DeleteTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::{applied, ignored};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Delete a task
#[operation(verb = "delete", noun = "task", description = "Delete a task")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
}

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, BoardError> for DeleteTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let tasks = &mut ctx.state_mut().tasks;
        let Some(index) = tasks.iter().position(|t| t.id == self.id) else {
            return ignored(Self::OP, "task not found");
        };

        tasks.remove(index);
        tracing::info!(id = %self.id, "task deleted");
        applied(json!({
            "deleted": true,
            "id": self.id.to_string()
        }))
    }
}
