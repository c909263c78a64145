//! ListLists command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::read;
use crate::types::TodoList;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// A list with its task count, as shown in the sidebar
#[derive(Debug, Clone, Serialize)]
pub struct ListSummary<'a> {
    #[serde(flatten)]
    pub list: &'a TodoList,
    pub task_count: usize,
    pub active: bool,
}

/// List all lists with their task counts
#[operation(verb = "list", noun = "lists", description = "List all lists with task counts", read_only)]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListLists {}

impl ListLists {
    pub fn new() -> Self {
        Self {}
    }
}

impl Execute<BoardContext, BoardError> for ListLists {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let state = ctx.state();
        let lists: Vec<ListSummary> = state
            .lists
            .iter()
            .map(|list| ListSummary {
                list,
                task_count: state.tasks_in_list(&list.id).count(),
                active: list.id == state.active_list,
            })
            .collect();

        read(&lists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardState;

    #[test]
    fn test_list_lists_with_counts() {
        let mut ctx = BoardContext::new(BoardState::sample());
        let value = ListLists::new().execute(&mut ctx).into_result().unwrap();
        let lists = value.as_array().unwrap();

        assert_eq!(lists.len(), 3);
        assert_eq!(lists[0]["name"], "Work Projects");
        assert_eq!(lists[0]["task_count"], 3);
        assert_eq!(lists[0]["active"], true);
        assert_eq!(lists[2]["icon"], "🎯");
        assert_eq!(lists[2]["task_count"], 1);
        assert_eq!(lists[2]["active"], false);
    }
}
