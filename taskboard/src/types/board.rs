//! BoardState: the three entity collections and the active selection

use super::ids::{ListId, TaskId, UserId};
use super::list::TodoList;
use super::task::Task;
use super::user::User;
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Everything the board owns
///
/// Collections keep insertion order. Views sort copies and never reorder
/// these vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub tasks: Vec<Task>,
    pub lists: Vec<TodoList>,
    pub users: Vec<User>,
    /// May name a list that no longer exists; the active view is then empty
    pub active_list: ListId,
}

impl BoardState {
    /// A board with a single list and nothing else
    pub fn new(list: TodoList) -> Self {
        Self {
            active_list: list.id.clone(),
            tasks: Vec::new(),
            lists: vec![list],
            users: Vec::new(),
        }
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn find_task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    pub fn find_list(&self, id: &ListId) -> Option<&TodoList> {
        self.lists.iter().find(|l| &l.id == id)
    }

    pub fn find_user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    pub fn find_user_mut(&mut self, id: &UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| &u.id == id)
    }

    pub fn list_exists(&self, id: &ListId) -> bool {
        self.find_list(id).is_some()
    }

    pub fn user_exists(&self, id: &UserId) -> bool {
        self.find_user(id).is_some()
    }

    /// The active list, if the selection names an existing one
    pub fn active(&self) -> Option<&TodoList> {
        self.find_list(&self.active_list)
    }

    /// Tasks owned by a list, in stored order
    pub fn tasks_in_list<'a>(&'a self, list_id: &'a ListId) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks.iter().filter(move |t| &t.list_id == list_id)
    }

    /// Tasks owned by the active list, in stored order
    pub fn active_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks_in_list(&self.active_list)
    }

    /// Check the structural invariants: at least one list, unique
    /// identifiers, every task's list exists, every assignment names a user.
    pub fn validate(&self) -> Result<()> {
        if self.lists.is_empty() {
            return Err(BoardError::NoLists);
        }

        let mut list_ids = HashSet::new();
        for list in &self.lists {
            if !list_ids.insert(&list.id) {
                return Err(BoardError::duplicate_id("list", list.id.as_str()));
            }
        }

        let mut user_ids = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(&user.id) {
                return Err(BoardError::duplicate_id("user", user.id.as_str()));
            }
        }

        let mut task_ids = HashSet::new();
        for task in &self.tasks {
            if !task_ids.insert(&task.id) {
                return Err(BoardError::duplicate_id("task", task.id.as_str()));
            }
            if !list_ids.contains(&task.list_id) {
                return Err(BoardError::dangling("list", task.id.as_str(), task.list_id.as_str()));
            }
            if let Some(user) = &task.assigned_to {
                if !user_ids.contains(user) {
                    return Err(BoardError::dangling("user", task.id.as_str(), user.as_str()));
                }
            }
        }

        Ok(())
    }
}
