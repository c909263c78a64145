//! MoveTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::{applied_record, ignored, read};
use crate::types::{Status, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Move a task to another status column
///
/// Any status may move to any other; only the status field changes.
#[operation(verb = "move", noun = "task", description = "Move a task to a different status column")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// Target status: todo, in-progress or done
    #[param(alias = "column")]
    pub status: Status,
}

impl MoveTask {
    pub fn new(id: impl Into<TaskId>, status: Status) -> Self {
        Self {
            id: id.into(),
            status,
        }
    }
}

impl Execute<BoardContext, BoardError> for MoveTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let Some(task) = ctx.state_mut().find_task_mut(&self.id) else {
            return ignored(Self::OP, "task not found");
        };

        if task.status == self.status {
            return read(task);
        }

        let from = task.status;
        task.status = self.status;
        tracing::info!(id = %task.id, %from, to = %self.status, "task moved");
        applied_record(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardState, Task};

    fn stored(ctx: &BoardContext, id: &str) -> Task {
        ctx.state().find_task(&id.into()).unwrap().clone()
    }

    #[test]
    fn test_move_changes_only_status() {
        let mut ctx = BoardContext::new(BoardState::sample());
        let before = stored(&ctx, "2");

        let result = MoveTask::new("2", Status::Done).execute(&mut ctx);

        assert!(result.is_applied());
        let after = stored(&ctx, "2");
        assert_eq!(after.status, Status::Done);
        assert_eq!(Task { status: before.status, ..after }, before);
    }

    #[test]
    fn test_any_transition_is_allowed() {
        let mut ctx = BoardContext::new(BoardState::sample());
        for status in [Status::Done, Status::Todo, Status::InProgress, Status::Done] {
            MoveTask::new("3", status).execute(&mut ctx);
            assert_eq!(stored(&ctx, "3").status, status);
        }
    }

    #[test]
    fn test_move_to_same_status_is_unchanged() {
        let mut ctx = BoardContext::new(BoardState::sample());
        let result = MoveTask::new("1", Status::InProgress).execute(&mut ctx);
        assert!(!result.is_applied());
    }

    #[test]
    fn test_move_unknown_task_is_noop() {
        let mut ctx = BoardContext::new(BoardState::sample());
        let before = ctx.state().clone();
        assert!(!MoveTask::new("ghost", Status::Done).execute(&mut ctx).is_applied());
        assert_eq!(ctx.state(), &before);
    }
}
