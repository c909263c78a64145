//! SelectList command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::{applied, read};
use crate::types::ListId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Make a list the active one
///
/// Selecting an unknown ID is accepted; the active view is then empty.
#[operation(verb = "select", noun = "list", description = "Make a list the active one")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SelectList {
    /// The list ID to select
    pub id: ListId,
}

impl SelectList {
    pub fn new(id: impl Into<ListId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<BoardContext, BoardError> for SelectList {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let state = ctx.state_mut();
        let exists = state.list_exists(&self.id);
        let value = json!({ "active_list": self.id, "exists": exists });

        if state.active_list == self.id {
            return read(&value);
        }

        if !exists {
            tracing::debug!(id = %self.id, "selected a list that does not exist");
        }
        state.active_list = self.id.clone();
        applied(value)
    }
}
