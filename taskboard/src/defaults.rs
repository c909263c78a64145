//! Built-in boards.
//!
//! `BoardState::default()` is the smallest valid board: one empty list.
//! `BoardState::sample()` is the demo board a fresh server starts with: three
//! lists, three users and six tasks spread across them.

use crate::palette::{LIST_COLORS, LIST_ICONS};
use crate::types::{BoardState, Priority, Status, Tags, Task, TodoList, User};
use chrono::{DateTime, TimeZone, Utc};

/// Name of the list on a default board
pub const DEFAULT_LIST_NAME: &str = "My Tasks";

/// Midnight UTC on a built-in date
fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn tags(names: &[&str]) -> Tags {
    names.iter().collect()
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState::new(TodoList::new(DEFAULT_LIST_NAME, LIST_ICONS[0], LIST_COLORS[0]))
    }
}

impl BoardState {
    /// The demo board, with the first list active
    pub fn sample() -> Self {
        let users = vec![
            User::new("John Doe", "bg-blue-300").with_id("1"),
            User::new("Jane Smith", "bg-pink-300").with_id("2"),
            User::new("Mike Johnson", "bg-green-300").with_id("3"),
        ];

        let lists = vec![
            TodoList::new("Work Projects", "💼", "from-blue-200 to-purple-200").with_id("1"),
            TodoList::new("Family Tasks", "🏠", "from-pink-200 to-rose-200").with_id("2"),
            TodoList::new("Personal Goals", "🎯", "from-green-200 to-emerald-200").with_id("3"),
        ];

        let task = |id: &str, title: &str, list: &str| {
            let mut task = Task::new(title, list.into());
            task.id = id.into();
            task
        };

        let tasks = vec![
            task("1", "Design new landing page", "1")
                .with_description("Create mockups for the new landing page with updated branding")
                .with_status(Status::InProgress)
                .with_priority(Priority::High)
                .with_tags(tags(&["design", "urgent"]))
                .with_created_at(day(2024, 10, 28)),
            task("2", "Update documentation", "1")
                .with_description("Add examples and improve clarity in the API docs")
                .with_tags(tags(&["docs"]))
                .with_created_at(day(2024, 10, 29)),
            task("3", "Fix login bug", "1")
                .with_description("Users report issues with OAuth login on mobile")
                .with_priority(Priority::High)
                .with_tags(tags(&["bug", "urgent"]))
                .with_created_at(day(2024, 10, 30)),
            task("4", "Grocery shopping", "2")
                .with_description("Buy groceries for the week")
                .with_tags(tags(&["shopping"]))
                .with_assigned_to("1")
                .with_created_at(day(2024, 10, 29)),
            task("5", "Clean garage", "2")
                .with_description("Organize and clean the garage this weekend")
                .with_status(Status::InProgress)
                .with_priority(Priority::Low)
                .with_tags(tags(&["chores"]))
                .with_assigned_to("2")
                .with_created_at(day(2024, 10, 27)),
            task("6", "Learn Spanish", "3")
                .with_description("Practice Spanish for 30 minutes daily")
                .with_status(Status::InProgress)
                .with_tags(tags(&["learning"]))
                .with_created_at(day(2024, 10, 26)),
        ];

        BoardState {
            tasks,
            lists,
            users,
            active_list: "1".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board() {
        let state = BoardState::default();
        assert!(state.validate().is_ok());
        assert_eq!(state.lists.len(), 1);
        assert_eq!(state.lists[0].name, DEFAULT_LIST_NAME);
        assert!(state.tasks.is_empty());
        assert!(state.users.is_empty());
    }

    #[test]
    fn test_sample_board_is_valid() {
        let state = BoardState::sample();
        assert!(state.validate().is_ok());
        assert_eq!(state.lists.len(), 3);
        assert_eq!(state.users.len(), 3);
        assert_eq!(state.tasks.len(), 6);
        assert_eq!(state.active().unwrap().name, "Work Projects");
        assert_eq!(state.active_tasks().count(), 3);
    }

    #[test]
    fn test_sample_dates() {
        let state = BoardState::sample();
        let learn = state.find_task(&"6".into()).unwrap();
        assert_eq!(learn.created_at.to_rfc3339(), "2024-10-26T00:00:00+00:00");
    }
}
