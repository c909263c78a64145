//! DeleteList command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::{applied, ignored};
use crate::types::ListId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Delete a list and every task it owns
///
/// The last remaining list is never deleted. When the active list goes, the
/// first remaining list becomes active.
#[operation(verb = "delete", noun = "list", description = "Delete a list and its tasks")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteList {
    /// The list ID to delete
    pub id: ListId,
}

impl DeleteList {
    pub fn new(id: impl Into<ListId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, BoardError> for DeleteList {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let state = ctx.state_mut();
        if state.lists.len() <= 1 {
            return ignored(Self::OP, "cannot delete the last list");
        }

        let Some(index) = state.lists.iter().position(|l| l.id == self.id) else {
            return ignored(Self::OP, "list not found");
        };

        state.lists.remove(index);

        let before = state.tasks.len();
        state.tasks.retain(|t| t.list_id != self.id);
        let tasks_removed = before - state.tasks.len();

        if state.active_list == self.id {
            if let Some(first) = state.lists.first() {
                state.active_list = first.id.clone();
            }
        }

        tracing::info!(id = %self.id, tasks_removed, "list deleted");
        applied(json!({
            "deleted": true,
            "id": self.id.to_string(),
            "tasks_removed": tasks_removed,
            "active_list": state.active_list,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardState, TodoList};

    #[test]
    fn test_delete_list_cascades_to_tasks() {
        let mut ctx = BoardContext::new(BoardState::sample());

        let value = DeleteList::new("2").execute(&mut ctx).into_result().unwrap();

        assert_eq!(value["tasks_removed"], 2);
        let state = ctx.state();
        assert!(state.find_list(&"2".into()).is_none());
        assert!(state.tasks.iter().all(|t| t.list_id != "2"));
        assert_eq!(state.tasks.len(), 4);
        assert_eq!(state.active_list, "1", "deleting an inactive list keeps the selection");
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_delete_active_list_selects_first_remaining() {
        let mut ctx = BoardContext::new(BoardState::sample());

        DeleteList::new("1").execute(&mut ctx);

        assert_eq!(ctx.state().active_list, "2");
        assert_eq!(ctx.state().active_tasks().count(), 2);
    }

    #[test]
    fn test_delete_last_list_is_noop() {
        let list = TodoList::new("Only", "📋", "from-indigo-200 to-blue-200").with_id("only");
        let mut ctx = BoardContext::new(BoardState::new(list));
        let before = ctx.state().clone();

        let result = DeleteList::new("only").execute(&mut ctx);

        assert!(!result.is_applied());
        assert_eq!(ctx.state(), &before);
    }

    #[test]
    fn test_delete_unknown_list_is_noop() {
        let mut ctx = BoardContext::new(BoardState::sample());
        assert!(!DeleteList::new("ghost").execute(&mut ctx).is_applied());
        assert_eq!(ctx.state().lists.len(), 3);
    }
}
