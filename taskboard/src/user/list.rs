//! ListUsers command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::read;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// List all users
#[operation(verb = "list", noun = "users", description = "List all users", read_only)]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListUsers {}

impl ListUsers {
    pub fn new() -> Self {
        Self {}
    }
}

impl Execute<BoardContext, BoardError> for ListUsers {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        read(&ctx.state().users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardState;

    #[test]
    fn test_list_users() {
        let mut ctx = BoardContext::new(BoardState::sample());
        let value = ListUsers::new().execute(&mut ctx).into_result().unwrap();
        let names: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["John Doe", "Jane Smith", "Mike Johnson"]);
    }
}
