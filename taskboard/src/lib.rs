//! Kanban board state model
//!
//! This crate owns a board made of three collections (tasks, lists and users)
//! and the operations that change them. It is the single writer: callers
//! read derived views and issue commands; nothing else mutates the state.
//!
//! ## Overview
//!
//! - **Tasks** live in exactly one list and sit in one of three status
//!   columns (todo, in-progress, done). Moving between columns is a status
//!   change with no guards.
//! - **Lists** are never empty as a collection: the last one cannot be
//!   deleted. Deleting a list deletes its tasks.
//! - **Users** can be assigned to tasks. Deleting a user unassigns them.
//! - **No-ops are not errors**: an empty title, an unknown id or deleting the
//!   last list leaves the state alone and reports `changed: false`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskboard::{BoardContext, BoardOperationProcessor, BoardState, OperationProcessor};
//! use taskboard::task::{AddTask, MoveTask};
//! use taskboard::types::Status;
//!
//! let mut ctx = BoardContext::new(BoardState::default());
//! let processor = BoardOperationProcessor::new();
//!
//! let task = processor.process(&AddTask::new("Write release notes"), &mut ctx)?;
//! let id = task["id"].as_str().unwrap_or_default();
//! processor.process(&MoveTask::new(id, Status::Done), &mut ctx)?;
//!
//! assert_eq!(ctx.activity(None).len(), 2);
//! # Ok::<(), taskboard::BoardError>(())
//! ```
//!
//! ## Forgiving input
//!
//! [`execute_input`] accepts the JSON the HTTP API receives: a single object
//! or a batch, with the operation given as `"op": "add task"`, as separate
//! `verb`/`noun` fields, as shorthand (`{"add": "task"}`), or inferred from
//! the fields present. camelCase keys are accepted.
//!
//! ## Persistence
//!
//! [`BoardContext::open`] backs the state with a JSON snapshot. The processor
//! rewrites it after every applied operation (temp file + rename, under an
//! exclusive lock on a sibling `.lock` file).

mod command;
mod context;
pub mod defaults;
mod error;
mod outcome;
pub mod palette;
pub mod parse;
mod processor;
pub mod types;

// Command modules
pub mod board;
pub mod task;
pub mod todo_list;
pub mod user;

// Re-export Execute trait and types from operations crate
pub use taskboard_operations::{
    Execute, ExecutionResult, LogEntry, Operation, OperationProcessor,
};

pub use command::{execute_input, Command};
pub use context::{BoardContext, DEFAULT_ACTIVITY_LIMIT};
pub use error::{BoardError, Result};
pub use processor::BoardOperationProcessor;

// Re-export commonly used types
pub use types::{
    BoardColumn, BoardState, BoardView, ListId, Priority, SortOrder, Status, Tags, Task, TaskId,
    TodoList, User, UserId,
};
