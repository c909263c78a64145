//! List commands

mod add;
mod delete;
mod list;
mod select;

pub use add::AddList;
pub use delete::DeleteList;
pub use list::{ListLists, ListSummary};
pub use select::SelectList;
