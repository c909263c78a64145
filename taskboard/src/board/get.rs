//! GetBoard command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::read;
use crate::types::{BoardView, SortOrder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Get the active list as three sorted status columns
#[operation(verb = "get", noun = "board", description = "Retrieve the active list's columns with task counts", read_only)]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GetBoard {
    /// newest (default) or oldest
    #[serde(default)]
    pub sort: SortOrder,
}

impl GetBoard {
    pub fn new(sort: SortOrder) -> Self {
        Self { sort }
    }
}

impl Execute<BoardContext, BoardError> for GetBoard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        read(&BoardView::of(ctx.state(), self.sort))
    }
}
