//! UpdateTask command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::{applied_record, ignored, read};
use crate::types::{Priority, Status, Tags, Task, TaskId, UserId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Replace a task record
///
/// This is a full replace, not a patch: every mutable field takes the value
/// given here. `id`, `created_at` and `list_id` are fixed at creation and
/// survive from the stored record.
#[operation(verb = "update", noun = "task", description = "Replace a task's fields")]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateTask {
    /// The task ID to update
    pub id: TaskId,
    /// New title (required, trimmed)
    pub title: String,
    /// New description
    #[serde(default)]
    pub description: String,
    /// New status
    pub status: Status,
    /// New priority
    pub priority: Priority,
    /// New tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// New assignee; absent or unknown means unassigned
    pub assigned_to: Option<UserId>,
}

impl UpdateTask {
    /// Start from a task's current values
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            priority: task.priority,
            tags: task.tags.as_slice().to_vec(),
            assigned_to: task.assigned_to.clone(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
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

    pub fn with_assigned_to(mut self, user: Option<UserId>) -> Self {
        self.assigned_to = user;
        self
    }
}

impl Execute<BoardContext, BoardError> for UpdateTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let title = self.title.trim();
        if title.is_empty() {
            return ignored(Self::OP, "empty title");
        }

        let state = ctx.state_mut();
        let assigned_to = self
            .assigned_to
            .clone()
            .filter(|user| state.user_exists(user));

        let Some(task) = state.find_task_mut(&self.id) else {
            return ignored(Self::OP, "task not found");
        };

        let replacement = Task {
            id: task.id.clone(),
            title: title.to_string(),
            description: self.description.trim().to_string(),
            status: self.status,
            priority: self.priority,
            tags: self.tags.iter().collect::<Tags>(),
            assigned_to,
            created_at: task.created_at,
            list_id: task.list_id.clone(),
        };

        if *task == replacement {
            return read(task);
        }

        *task = replacement;
        tracing::info!(id = %task.id, "task updated");
        applied_record(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoardState;

    fn setup() -> BoardContext {
        BoardContext::new(BoardState::sample())
    }

    fn stored(ctx: &BoardContext, id: &str) -> Task {
        ctx.state().find_task(&id.into()).unwrap().clone()
    }

    #[test]
    fn test_update_task_replaces_fields() {
        let mut ctx = setup();
        let original = stored(&ctx, "4");

        let cmd = UpdateTask::from_task(&original)
            .with_title("Grocery run")
            .with_status(Status::Done)
            .with_assigned_to(None);
        let result = cmd.execute(&mut ctx);

        assert!(result.is_applied());
        let task = stored(&ctx, "4");
        assert_eq!(task.title, "Grocery run");
        assert_eq!(task.status, Status::Done);
        assert!(task.assigned_to.is_none());
        assert_eq!(task.created_at, original.created_at);
        assert_eq!(task.list_id, original.list_id);
    }

    #[test]
    fn test_update_is_full_replace() {
        let mut ctx = setup();
        let cmd: UpdateTask = serde_json::from_value(serde_json::json!({
            "id": "1",
            "title": "Landing page",
            "status": "todo",
            "priority": "low"
        }))
        .unwrap();

        cmd.execute(&mut ctx).into_result().unwrap();

        let task = stored(&ctx, "1");
        assert_eq!(task.description, "");
        assert!(task.tags.is_empty());
        assert_eq!(task.priority, Priority::Low);
    }

    #[test]
    fn test_update_unknown_task_is_noop() {
        let mut ctx = setup();
        let before = ctx.state().clone();
        let mut cmd = UpdateTask::from_task(&stored(&ctx, "1"));
        cmd.id = TaskId::from_string("missing");

        let result = cmd.execute(&mut ctx);

        assert!(!result.is_applied());
        assert_eq!(ctx.state(), &before);
    }

    #[test]
    fn test_update_with_same_values_is_unchanged() {
        let mut ctx = setup();
        let cmd = UpdateTask::from_task(&stored(&ctx, "2"));
        assert!(!cmd.execute(&mut ctx).is_applied());
    }

    #[test]
    fn test_update_drops_unknown_assignee() {
        let mut ctx = setup();
        let cmd = UpdateTask::from_task(&stored(&ctx, "2")).with_assigned_to(Some("ghost".into()));
        cmd.execute(&mut ctx).into_result().unwrap();
        assert!(stored(&ctx, "2").assigned_to.is_none());
    }
}
