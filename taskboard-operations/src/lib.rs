//! # Taskboard Operations
//!
//! This crate provides the `Operation` trait for defining board operations.
//! Operations are structs where the fields ARE the parameters - no duplication.
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_operations::*;
//!
//! #[operation(verb = "add", noun = "task", description = "Create a new task")]
//! #[derive(Debug, Deserialize, Serialize)]
//! pub struct AddTask {
//!     /// The task title
//!     pub title: String,
//!     /// Optional description
//!     pub description: Option<String>,
//! }
//!
//! impl Execute<BoardContext, BoardError> for AddTask {
//!     fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
//!         // returns ExecutionResult::Applied, Unchanged or Failed
//!     }
//! }
//! ```

// Lets the proc-macro's `taskboard_operations::` paths resolve inside this crate
extern crate self as taskboard_operations;

mod execution_result;
mod log;
mod operation;
mod parameter;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use parameter::{ParamMeta, ParamType};
pub use processor::OperationProcessor;

// Re-export proc macros
pub use taskboard_operations_macros::{operation, param};

pub use serde_json::Value;
