//! Board commands and the operation catalog

mod get;

pub use get::GetBoard;

use crate::task::{AddTask, DeleteTask, GetTask, ListTasks, MoveTask, TagTask, UntagTask, UpdateTask};
use crate::todo_list::{AddList, DeleteList, ListLists, SelectList};
use crate::types::{Status, Task};
use crate::user::{AddUser, DeleteUser, ListUsers, UpdateUser};
use serde_json::Value;
use taskboard_operations::Operation;

/// One instance of every operation, for metadata lookups
pub fn operations() -> Vec<Box<dyn Operation + Send + Sync>> {
    let sample_task = Task::new("", "".into());
    vec![
        Box::new(AddTask::new("")),
        Box::new(UpdateTask::from_task(&sample_task)),
        Box::new(DeleteTask::new("")),
        Box::new(MoveTask::new("", Status::Todo)),
        Box::new(GetTask::new("")),
        Box::new(ListTasks::new()),
        Box::new(TagTask::new("", "")),
        Box::new(UntagTask::new("", "")),
        Box::new(GetBoard::default()),
        Box::new(AddList::new("")),
        Box::new(DeleteList::new("")),
        Box::new(SelectList::new("")),
        Box::new(ListLists::new()),
        Box::new(AddUser::new("")),
        Box::new(UpdateUser::new("", "", "")),
        Box::new(DeleteUser::new("")),
        Box::new(ListUsers::new()),
    ]
}

/// Describe every operation: op string, description and parameters
pub fn catalog() -> Vec<Value> {
    operations().iter().map(|op| op.describe()).collect()
}
