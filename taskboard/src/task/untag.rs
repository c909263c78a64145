//! UntagTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::{applied, ignored};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Remove a tag from a task
#[operation(verb = "untag", noun = "task", description = "Remove a tag from a task")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UntagTask {
    /// The task ID to untag
    pub id: TaskId,
    /// The tag to remove (exact match)
    pub tag: String,
}

impl UntagTask {
    pub fn new(id: impl Into<TaskId>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
        }
    }
}

impl Execute<BoardContext, BoardError> for UntagTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let Some(task) = ctx.state_mut().find_task_mut(&self.id) else {
            return ignored(Self::OP, "task not found");
        };

        if !task.tags.remove(&self.tag) {
            return ignored(Self::OP, "tag not present");
        }

        applied(json!({
            "untagged": true,
            "id": self.id.to_string(),
            "tag": self.tag,
            "tags": task.tags,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardState;

    #[test]
    fn test_untag_task() {
        let mut ctx = BoardContext::new(BoardState::sample());
        let value = UntagTask::new("3", "bug")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert_eq!(value["tags"], json!(["urgent"]));
    }

    #[test]
    fn test_untag_is_case_sensitive() {
        let mut ctx = BoardContext::new(BoardState::sample());
        assert!(!UntagTask::new("3", "BUG").execute(&mut ctx).is_applied());
    }
}
