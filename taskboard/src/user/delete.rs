//! DeleteUser command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::{applied, ignored};
use crate::types::UserId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Delete a user (clears the assignment on every task assigned to them)
#[operation(verb = "delete", noun = "user", description = "Delete a user and unassign their tasks")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteUser {
    /// The user ID to delete
    pub id: UserId,
}

impl DeleteUser {
    pub fn new(id: impl Into<UserId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, BoardError> for DeleteUser {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let state = ctx.state_mut();
        let Some(index) = state.users.iter().position(|u| u.id == self.id) else {
            return ignored(Self::OP, "user not found");
        };

        state.users.remove(index);

        // Tasks stay; only the assignment goes
        let mut unassigned = 0;
        for task in &mut state.tasks {
            if task.assigned_to.as_ref() == Some(&self.id) {
                task.assigned_to = None;
                unassigned += 1;
            }
        }

        tracing::info!(id = %self.id, unassigned, "user deleted");
        applied(json!({
            "deleted": true,
            "id": self.id.to_string(),
            "unassigned": unassigned,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardState;

    #[test]
    fn test_delete_user_clears_assignments() {
        let mut ctx = BoardContext::new(BoardState::sample());
        let before = ctx.state().clone();

        let value = DeleteUser::new("2").execute(&mut ctx).into_result().unwrap();

        assert_eq!(value["unassigned"], 1);
        let state = ctx.state();
        assert_eq!(state.users.len(), before.users.len() - 1);
        assert!(state.find_user(&"2".into()).is_none());

        let garage = state.find_task(&"5".into()).unwrap();
        assert!(garage.assigned_to.is_none());
        let mut expected = before.find_task(&"5".into()).unwrap().clone();
        expected.assigned_to = None;
        assert_eq!(garage, &expected);

        // Other assignments are untouched
        let groceries = state.find_task(&"4".into()).unwrap();
        assert_eq!(groceries.assigned_to.as_ref().unwrap(), "1");
        assert_eq!(state.tasks.len(), before.tasks.len());
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_delete_nonexistent_user() {
        let mut ctx = BoardContext::new(BoardState::sample());
        let before = ctx.state().clone();
        assert!(!DeleteUser::new("ghost").execute(&mut ctx).is_applied());
        assert_eq!(ctx.state(), &before);
    }
}
