//! AddUser command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::{applied_record, ignored};
use crate::palette::default_user_color;
use crate::types::User;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Add a user tasks can be assigned to
#[operation(verb = "add", noun = "user", description = "Add a user")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddUser {
    /// Display name (trimmed, must not be empty)
    pub name: String,
    /// Avatar color; defaults to the first palette color
    pub color: Option<String>,
}

impl AddUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Execute<BoardContext, BoardError> for AddUser {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let name = self.name.trim();
        if name.is_empty() {
            return ignored(Self::OP, "empty name");
        }

        let color = self
            .color
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(default_user_color());

        let user = User::new(name, color);
        tracing::info!(id = %user.id, name, "user added");
        let result = applied_record(&user);
        ctx.state_mut().users.push(user);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardState;

    #[test]
    fn test_add_user() {
        let mut ctx = BoardContext::new(BoardState::sample());

        let value = AddUser::new(" Alice ")
            .with_color("bg-teal-300")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(value["name"], "Alice");
        assert_eq!(value["color"], "bg-teal-300");
        assert_eq!(ctx.state().users.len(), 4);
        assert_eq!(ctx.state().users.last().unwrap().name, "Alice");
    }

    #[test]
    fn test_add_user_default_color() {
        let mut ctx = BoardContext::new(BoardState::default());
        let value = AddUser::new("Bob").execute(&mut ctx).into_result().unwrap();
        assert_eq!(value["color"], "bg-blue-300");
    }

    #[test]
    fn test_add_user_blank_color_falls_back() {
        let mut ctx = BoardContext::new(BoardState::default());
        let value = AddUser::new("Carol")
            .with_color("   ")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert_eq!(value["color"], "bg-blue-300");

        let value = AddUser::new("Dave")
            .with_color(" bg-rose-300 ")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert_eq!(value["color"], "bg-rose-300");
    }

    #[test]
    fn test_add_user_empty_name_is_noop() {
        let mut ctx = BoardContext::new(BoardState::default());
        assert!(!AddUser::new("   ").execute(&mut ctx).is_applied());
        assert!(ctx.state().users.is_empty());
    }
}
