//! Derived read views: per-status columns sorted by creation time

use super::board::BoardState;
use super::ids::ListId;
use super::list::TodoList;
use super::task::{Status, Task};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Creation-time ordering for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// createdAt descending
    #[default]
    Newest,
    /// createdAt ascending
    Oldest,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" | "newest-first" | "desc" => Ok(SortOrder::Newest),
            "oldest" | "oldest-first" | "asc" => Ok(SortOrder::Oldest),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

/// One status column of the active list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardColumn {
    pub status: Status,
    pub title: &'static str,
    pub tasks: Vec<Task>,
}

/// The active list rendered as three status columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    /// Absent when the selection names a deleted list
    pub list: Option<TodoList>,
    pub sort: SortOrder,
    pub task_count: usize,
    pub columns: Vec<BoardColumn>,
}

impl BoardView {
    /// Build the view of the active list
    pub fn of(state: &BoardState, sort: SortOrder) -> Self {
        let columns = Status::ALL
            .iter()
            .map(|&status| BoardColumn {
                status,
                title: status.title(),
                tasks: column_tasks(&state.tasks, &state.active_list, status, sort),
            })
            .collect();

        Self {
            list: state.active().cloned(),
            sort,
            task_count: state.active_tasks().count(),
            columns,
        }
    }
}

/// Tasks of `list_id`, optionally only one status, sorted by creation time
///
/// The sort is stable, so tasks sharing a timestamp keep their stored order.
/// The input slice is never reordered.
pub fn sorted_tasks(
    tasks: &[Task],
    list_id: &ListId,
    status: Option<Status>,
    order: SortOrder,
) -> Vec<Task> {
    let mut selected: Vec<Task> = tasks
        .iter()
        .filter(|t| &t.list_id == list_id && status.is_none_or(|s| t.status == s))
        .cloned()
        .collect();

    match order {
        SortOrder::Newest => selected.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => selected.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }

    selected
}

/// One status column's tasks, sorted by creation time
pub fn column_tasks(tasks: &[Task], list_id: &ListId, status: Status, order: SortOrder) -> Vec<Task> {
    sorted_tasks(tasks, list_id, Some(status), order)
}
