//! User: someone tasks can be assigned to

use super::ids::UserId;
use serde::{Deserialize, Serialize};

/// A person tasks can be assigned to
///
/// `color` is an avatar token; it is expected, not enforced, to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub color: String,
}

impl User {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// Replace the generated identifier
    pub fn with_id(mut self, id: impl Into<UserId>) -> Self {
        self.id = id.into();
        self
    }

    /// First letter of the name, upper-cased, for avatars
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().and_then(|c| c.to_uppercase().next())
    }
}
