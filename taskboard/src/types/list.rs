//! TodoList: a named board that owns tasks

use super::ids::ListId;
use serde::{Deserialize, Serialize};

/// A list of tasks, shown to the user as a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: ListId,
    pub name: String,
    /// Display glyph
    pub icon: String,
    /// Visual theme token
    pub color: String,
}

impl TodoList {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: ListId::new(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }

    /// Replace the generated identifier
    pub fn with_id(mut self, id: impl Into<ListId>) -> Self {
        self.id = id.into();
        self
    }
}
