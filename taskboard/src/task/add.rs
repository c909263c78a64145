//! AddTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::{applied_record, ignored};
use crate::types::{Priority, Status, Task, TaskId, UserId};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Add a new task to the active list
#[operation(verb = "add", noun = "task", description = "Create a task in the active list")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddTask {
    /// The task title (required, trimmed)
    #[param(short = 't')]
    pub title: String,
    /// Detailed task description
    #[serde(default)]
    #[param(alias = "desc")]
    pub description: String,
    /// Initial status
    #[serde(default)]
    pub status: Status,
    /// Priority
    #[serde(default)]
    pub priority: Priority,
    /// Tags to apply; duplicates and blanks are dropped
    #[serde(default)]
    pub tags: Vec<String>,
    /// User to assign; ignored if no such user exists
    pub assigned_to: Option<UserId>,
}

impl AddTask {
    /// Create a new AddTask command with just a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: Status::default(),
            priority: Priority::default(),
            tags: Vec::new(),
            assigned_to: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_assigned_to(mut self, user: impl Into<UserId>) -> Self {
        self.assigned_to = Some(user.into());
        self
    }
}

impl Execute<BoardContext, BoardError> for AddTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let title = self.title.trim();
        if title.is_empty() {
            return ignored(Self::OP, "empty title");
        }

        let state = ctx.state_mut();
        if !state.list_exists(&state.active_list) {
            return ignored(Self::OP, "active list does not exist");
        }

        let assigned_to = self
            .assigned_to
            .clone()
            .filter(|user| state.user_exists(user));

        let task = Task {
            id: TaskId::new(),
            title: title.to_string(),
            description: self.description.trim().to_string(),
            status: self.status,
            priority: self.priority,
            tags: self.tags.iter().collect(),
            assigned_to,
            created_at: Utc::now(),
            list_id: state.active_list.clone(),
        };

        tracing::info!(id = %task.id, list = %task.list_id, "task added");
        state.tasks.push(task);
        match state.tasks.last() {
            Some(task) => applied_record(task),
            None => ignored(Self::OP, "task was not stored"),
        }
    }
}
