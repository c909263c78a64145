//! Core types for the board state model

mod board;
mod ids;
mod list;
mod task;
mod user;
mod view;

// Re-export all types
pub use board::BoardState;
pub use ids::{ListId, TaskId, UserId};
pub use list::TodoList;
pub use task::{Priority, Status, Tags, Task};
pub use user::User;
pub use view::{column_tasks, sorted_tasks, BoardColumn, BoardView, SortOrder};
