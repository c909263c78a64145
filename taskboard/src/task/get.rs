//! GetTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::read;
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Get a task by ID; yields null when there is no such task
#[operation(verb = "get", noun = "task", description = "Get a task by ID", read_only)]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GetTask {
    /// The task ID to fetch
    pub id: TaskId,
}

impl GetTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, BoardError> for GetTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        read(&ctx.state().find_task(&self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardState;

    #[test]
    fn test_get_task() {
        let mut ctx = BoardContext::new(BoardState::sample());
        let value = GetTask::new("5").execute(&mut ctx).into_result().unwrap();
        assert_eq!(value["title"], "Clean garage");
        assert_eq!(value["assignedTo"], "2");
    }

    #[test]
    fn test_get_missing_task_is_null() {
        let mut ctx = BoardContext::new(BoardState::sample());
        let result = GetTask::new("ghost").execute(&mut ctx);
        assert!(!result.is_applied());
        assert!(result.into_result().unwrap().is_null());
    }
}
