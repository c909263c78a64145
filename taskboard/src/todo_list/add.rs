//! AddList command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::{applied_record, ignored};
use crate::palette::{random_list_color, random_list_icon};
use crate::types::TodoList;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Create a list and make it the active one
///
/// The icon and color theme are picked at random from the list palettes.
#[operation(verb = "add", noun = "list", description = "Create a list and select it")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddList {
    /// Display name (trimmed, must not be empty)
    pub name: String,
}

impl AddList {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Execute<BoardContext, BoardError> for AddList {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let name = self.name.trim();
        if name.is_empty() {
            return ignored(Self::OP, "empty name");
        }

        let (state, rng) = ctx.state_and_rng();
        let list = TodoList::new(name, random_list_icon(rng), random_list_color(rng));

        state.active_list = list.id.clone();
        tracing::info!(id = %list.id, name, "list added");
        let result = applied_record(&list);
        state.lists.push(list);
        result
    }
}
