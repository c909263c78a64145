//! SQLite-backed item storage
//!
//! One table, one SQL statement per operation:
//!
//! - `items`: `(id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT NOT NULL)`
//!
//! `AUTOINCREMENT` keeps identifiers from being reused after a delete, so a
//! new item always sorts after every item that ever existed.

use crate::error::{ItemError, Result};
use async_trait::async_trait;
use rusqlite::{params, Connection};
use serde::Serialize;
use std::path::Path;
use tokio::sync::Mutex;

/// Default database filename
pub const DEFAULT_DB_FILENAME: &str = "taskboard.db";

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL
    );
"#;

/// A stored to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
}

/// A trimmed, non-empty item title
///
/// Storage methods take this rather than `&str`, so a blank title is
/// rejected before any statement runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    /// Trim `raw` and reject it if nothing is left; `field` names the form
    /// field in the error
    pub fn parse(field: &'static str, raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ItemError::EmptyField { field });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parse a form field holding an item id
pub fn parse_id(field: &'static str, raw: &str) -> Result<i64> {
    raw.trim().parse().map_err(|_| ItemError::InvalidId {
        field,
        value: raw.to_string(),
    })
}

/// Storage for to-do items
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Every item, ascending by id
    async fn list(&self) -> Result<Vec<Item>>;

    /// Insert a new item and return it with its assigned id
    async fn create(&self, title: &Title) -> Result<Item>;

    /// Set the title of `id`; returns whether a row matched
    async fn rename(&self, id: i64, title: &Title) -> Result<bool>;

    /// Remove `id`; returns whether a row matched
    async fn delete(&self, id: i64) -> Result<bool>;
}

/// [`ItemStore`] over a single SQLite connection
pub struct SqliteItemStore {
    conn: Mutex<Connection>,
}

impl SqliteItemStore {
    /// Open (or create) the database file and ensure the schema exists
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        tracing::debug!(path = %path.as_ref().display(), "opened item database");
        Self::with_connection(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

#[async_trait]
impl ItemStore for SqliteItemStore {
    async fn list(&self) -> Result<Vec<Item>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare_cached("SELECT id, title FROM items ORDER BY id ASC")?;
        let items = stmt
            .query_map([], |row| {
                Ok(Item {
                    id: row.get(0)?,
                    title: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    async fn create(&self, title: &Title) -> Result<Item> {
        let conn = self.conn.lock().await;
        let item = conn.query_row(
            "INSERT INTO items (title) VALUES (?1) RETURNING id, title",
            params![title.as_str()],
            |row| {
                Ok(Item {
                    id: row.get(0)?,
                    title: row.get(1)?,
                })
            },
        )?;
        tracing::debug!(id = item.id, "item created");
        Ok(item)
    }

    async fn rename(&self, id: i64, title: &Title) -> Result<bool> {
        let conn = self.conn.lock().await;
        let changed = conn.execute(
            "UPDATE items SET title = ?1 WHERE id = ?2",
            params![title.as_str(), id],
        )?;
        Ok(changed > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.conn.lock().await;
        let changed = conn.execute("DELETE FROM items WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn title(s: &str) -> Title {
        Title::parse("newItem", s).unwrap()
    }

    #[test]
    fn test_title_is_trimmed() {
        assert_eq!(title("  Buy milk \n").as_str(), "Buy milk");
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = Title::parse("newTitle", " \t ").unwrap_err();
        assert!(matches!(err, ItemError::EmptyField { field: "newTitle" }));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("newId", " 42 ").unwrap(), 42);
        assert!(parse_id("newId", "forty-two").is_err());
    }

    #[tokio::test]
    async fn test_create_and_list_in_id_order() {
        let store = SqliteItemStore::open_in_memory().unwrap();
        let milk = store.create(&title("Buy milk")).await.unwrap();
        let homework = store.create(&title("Finish homework")).await.unwrap();

        assert!(homework.id > milk.id);
        let items = store.list().await.unwrap();
        assert_eq!(items, vec![milk, homework]);
    }

    #[tokio::test]
    async fn test_rename() {
        let store = SqliteItemStore::open_in_memory().unwrap();
        let item = store.create(&title("Buy milk")).await.unwrap();

        assert!(store.rename(item.id, &title("Buy oat milk")).await.unwrap());
        assert!(!store.rename(item.id + 100, &title("Nothing")).await.unwrap());

        let items = store.list().await.unwrap();
        assert_eq!(items[0].title, "Buy oat milk");
        assert_eq!(items[0].id, item.id);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = SqliteItemStore::open_in_memory().unwrap();
        let item = store.create(&title("Buy milk")).await.unwrap();

        assert!(store.delete(item.id).await.unwrap());
        assert!(!store.delete(item.id).await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = SqliteItemStore::open_in_memory().unwrap();
        store.create(&title("one")).await.unwrap();
        let two = store.create(&title("two")).await.unwrap();
        store.delete(two.id).await.unwrap();

        let three = store.create(&title("three")).await.unwrap();
        assert!(three.id > two.id);
    }

    #[tokio::test]
    async fn test_file_database_persists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_DB_FILENAME);

        {
            let store = SqliteItemStore::open(&path).unwrap();
            store.create(&title("Buy milk")).await.unwrap();
        }

        let reopened = SqliteItemStore::open(&path).unwrap();
        let items = reopened.list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Buy milk");
    }
}
