//! UpdateUser command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::{applied_record, ignored, read};
use crate::types::{User, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Replace a user's name and color
#[operation(verb = "update", noun = "user", description = "Replace a user's name and color")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateUser {
    /// The user ID to update
    pub id: UserId,
    /// New display name (trimmed, must not be empty)
    pub name: String,
    /// New avatar color
    pub color: String,
}

impl UpdateUser {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

impl Execute<BoardContext, BoardError> for UpdateUser {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let name = self.name.trim();
        if name.is_empty() {
            return ignored(Self::OP, "empty name");
        }

        let Some(user) = ctx.state_mut().find_user_mut(&self.id) else {
            return ignored(Self::OP, "user not found");
        };

        let replacement = User {
            id: user.id.clone(),
            name: name.to_string(),
            color: self.color.trim().to_string(),
        };
        if *user == replacement {
            return read(user);
        }

        *user = replacement;
        tracing::info!(id = %user.id, "user updated");
        applied_record(user)
    }
}
