//! Single-table to-do items in SQLite
//!
//! A flat list of titled items, kept in one `items` table and served as an
//! HTML page with add, edit and delete forms. Independent of the kanban
//! board model; the server mounts both.
//!
//! ```rust
//! use taskboard_items::{ItemStore, SqliteItemStore, Title};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = SqliteItemStore::open_in_memory()?;
//! store.create(&Title::parse("newItem", "Buy milk")?).await?;
//! assert_eq!(store.list().await?[0].title, "Buy milk");
//! # Ok::<(), taskboard_items::ItemError>(())
//! # }).unwrap();
//! ```

mod error;
mod routes;
mod store;
mod view;

pub use error::{ItemError, Result};
pub use routes::{router, ItemsState};
pub use store::{parse_id, Item, ItemStore, SqliteItemStore, Title, DEFAULT_DB_FILENAME};
pub use view::ListingView;

/// Items inserted into a fresh database
pub const SEED_ITEMS: &[&str] = &["Buy milk", "Finish homework"];

/// Insert [`SEED_ITEMS`] if the store holds no items yet
pub async fn seed_if_empty(store: &dyn ItemStore) -> Result<usize> {
    if !store.list().await?.is_empty() {
        return Ok(0);
    }
    for title in SEED_ITEMS {
        store.create(&Title::parse("newItem", title)?).await?;
    }
    tracing::info!(count = SEED_ITEMS.len(), "seeded item list");
    Ok(SEED_ITEMS.len())
}
