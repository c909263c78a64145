//! User commands

mod add;
mod delete;
mod list;
mod update;

pub use add::AddUser;
pub use delete::DeleteUser;
pub use list::ListUsers;
pub use update::UpdateUser;
