//! TagTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::{applied, ignored};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Add a tag to a task
#[operation(verb = "tag", noun = "task", description = "Add a tag to a task")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TagTask {
    /// The task ID to tag
    pub id: TaskId,
    /// The tag to add (trimmed)
    pub tag: String,
}

impl TagTask {
    pub fn new(id: impl Into<TaskId>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
        }
    }
}

impl Execute<BoardContext, BoardError> for TagTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let Some(task) = ctx.state_mut().find_task_mut(&self.id) else {
            return ignored(Self::OP, "task not found");
        };

        if !task.tags.add(&self.tag) {
            return ignored(Self::OP, "tag is empty or already present");
        }

        applied(json!({
            "tagged": true,
            "id": self.id.to_string(),
            "tag": self.tag.trim(),
            "tags": task.tags,
        }))
    }
}
