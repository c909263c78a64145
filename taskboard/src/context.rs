//! BoardContext - the single owner of the board state
//!
//! The context holds the state, the activity log and the optional snapshot
//! location. It exposes access primitives; operations do all the work.

use crate::error::{BoardError, Result};
use crate::types::BoardState;
use fs2::FileExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use taskboard_operations::LogEntry;

/// Default number of activity entries kept in memory
pub const DEFAULT_ACTIVITY_LIMIT: usize = 200;

/// Context passed to every operation
pub struct BoardContext {
    state: BoardState,
    /// Newest first
    activity: VecDeque<LogEntry>,
    activity_limit: usize,
    /// Where the state is written when a transaction commits, if anywhere
    snapshot: Option<PathBuf>,
    rng: StdRng,
    /// Set while a [`BoardContext::transaction`] is running
    in_transaction: bool,
    /// An applied change is waiting for the snapshot write
    dirty: bool,
}

impl BoardContext {
    /// Create an in-memory context around the given state
    pub fn new(state: BoardState) -> Self {
        Self {
            state,
            activity: VecDeque::new(),
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
            snapshot: None,
            rng: StdRng::from_os_rng(),
            in_transaction: false,
            dirty: false,
        }
    }

    /// Open a context backed by a JSON snapshot file
    ///
    /// Loads the snapshot if the file exists, otherwise starts from `initial`
    /// and writes it out so the file exists from the first run.
    pub fn open(path: impl Into<PathBuf>, initial: BoardState) -> Result<Self> {
        let path = path.into();
        let state = if path.exists() {
            let state = read_snapshot(&path)?;
            tracing::info!(path = %path.display(), tasks = state.tasks.len(), "loaded board snapshot");
            state
        } else {
            write_snapshot(&path, &initial)?;
            tracing::info!(path = %path.display(), "created board snapshot");
            initial
        };

        let mut ctx = Self::new(state);
        ctx.snapshot = Some(path);
        Ok(ctx)
    }

    /// Use a deterministic random source (palette picks)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Cap the number of activity entries kept
    pub fn with_activity_limit(mut self, limit: usize) -> Self {
        self.activity_limit = limit;
        self.activity.truncate(limit);
        self
    }

    // =========================================================================
    // State access
    // =========================================================================

    /// Current board state
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut BoardState {
        &mut self.state
    }

    /// Borrow the state and the random source together
    pub(crate) fn state_and_rng(&mut self) -> (&mut BoardState, &mut StdRng) {
        (&mut self.state, &mut self.rng)
    }

    /// Snapshot path, if the context is file-backed
    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot.as_deref()
    }

    // =========================================================================
    // Activity
    // =========================================================================

    /// Record an entry at the front of the activity log
    pub fn append_activity(&mut self, entry: LogEntry) {
        self.activity.push_front(entry);
        self.activity.truncate(self.activity_limit);
    }

    /// The most recent entries, newest first
    pub fn activity(&self, limit: Option<usize>) -> Vec<LogEntry> {
        let limit = limit.unwrap_or(self.activity.len());
        self.activity.iter().take(limit).cloned().collect()
    }

    // =========================================================================
    // Transactions
    // =========================================================================

    /// Run `f` so that its changes are kept only if it and the snapshot write
    /// both succeed
    ///
    /// On any error the state and activity log are restored to what they were
    /// before `f` ran, so memory never holds a change the caller was told
    /// failed. The snapshot is written once, at commit, if anything was marked
    /// dirty. Nested calls join the outermost transaction.
    pub fn transaction<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.in_transaction {
            return f(self);
        }

        let state = self.state.clone();
        let activity = self.activity.clone();
        self.in_transaction = true;
        self.dirty = false;

        let mut result = f(self);
        if result.is_ok() && self.dirty {
            if let Err(e) = self.save() {
                tracing::error!(error = %e, "failed to write board snapshot");
                result = Err(e);
            }
        }

        self.in_transaction = false;
        self.dirty = false;
        if result.is_err() {
            self.state = state;
            self.activity = activity;
            tracing::warn!("board changes rolled back");
        }
        result
    }

    /// Record that the state changed and needs writing at commit
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    // =========================================================================
    // Snapshot I/O
    // =========================================================================

    /// Write the current state to the snapshot file, if there is one
    pub fn save(&self) -> Result<()> {
        match &self.snapshot {
            Some(path) => write_snapshot(path, &self.state),
            None => Ok(()),
        }
    }
}

/// Path of the lock file guarding a snapshot
fn lock_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

fn read_snapshot(path: &Path) -> Result<BoardState> {
    let content = fs::read_to_string(path)?;
    let state: BoardState = serde_json::from_str(&content)?;
    state
        .validate()
        .map_err(|e| BoardError::InvalidSnapshot {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(state)
}

fn write_snapshot(path: &Path, state: &BoardState) -> Result<()> {
    let content = serde_json::to_string_pretty(state)?;
    let _lock = SnapshotLock::acquire(path)?;
    atomic_write(path, content.as_bytes())
}

/// RAII lock guard - releases on drop
struct SnapshotLock {
    file: fs::File,
}

impl SnapshotLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = lock_path(path);
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&lock_path)?;

        // Blocks until any other writer is done
        file.lock_exclusive()?;
        Ok(Self { file })
    }
}

impl Drop for SnapshotLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

/// Atomic write via temp file and rename
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoList;
    use serde_json::json;
    use tempfile::TempDir;

    fn entry(op: &str) -> LogEntry {
        LogEntry::new(op, json!({}), json!({}), 0)
    }

    #[test]
    fn test_open_creates_snapshot() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.json");

        let ctx = BoardContext::open(&path, BoardState::default()).unwrap();

        assert!(path.exists());
        assert_eq!(ctx.snapshot_path(), Some(path.as_path()));
        assert_eq!(ctx.state().lists.len(), 1);
    }

    #[test]
    fn test_save_and_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("board.json");

        let mut ctx = BoardContext::open(&path, BoardState::default()).unwrap();
        ctx.state_mut()
            .lists
            .push(TodoList::new("Second", "🚀", "from-teal-200 to-cyan-200"));
        ctx.save().unwrap();

        let reopened = BoardContext::open(&path, BoardState::sample()).unwrap();
        assert_eq!(reopened.state(), ctx.state());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_open_rejects_invalid_snapshot() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.json");
        let mut state = BoardState::default();
        state.lists.clear();
        fs::write(&path, serde_json::to_string(&state).unwrap()).unwrap();

        let result = BoardContext::open(&path, BoardState::default());
        assert!(matches!(result, Err(BoardError::InvalidSnapshot { .. })));
    }

    #[test]
    fn test_in_memory_save_is_noop() {
        let ctx = BoardContext::new(BoardState::default());
        assert!(ctx.save().is_ok());
        assert!(ctx.snapshot_path().is_none());
    }

    /// Context backed by a snapshot whose temp file path is blocked
    fn unwritable(temp: &TempDir) -> BoardContext {
        let path = temp.path().join("board.json");
        let ctx = BoardContext::open(&path, BoardState::default()).unwrap();
        fs::create_dir(path.with_extension("tmp")).unwrap();
        ctx
    }

    #[test]
    fn test_transaction_commits_and_saves() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.json");
        let mut ctx = BoardContext::open(&path, BoardState::default()).unwrap();

        ctx.transaction(|ctx| {
            ctx.state_mut().lists.push(TodoList::new("Second", "🚀", "x"));
            ctx.append_activity(entry("add list"));
            ctx.mark_dirty();
            Ok(())
        })
        .unwrap();

        assert_eq!(ctx.state().lists.len(), 2);
        let reopened = BoardContext::open(&path, BoardState::default()).unwrap();
        assert_eq!(reopened.state().lists.len(), 2);
    }

    #[test]
    fn test_transaction_rolls_back_on_save_failure() {
        let temp = TempDir::new().unwrap();
        let mut ctx = unwritable(&temp);
        let before = ctx.state().clone();

        let result = ctx.transaction(|ctx| {
            ctx.state_mut().lists.push(TodoList::new("Second", "🚀", "x"));
            ctx.append_activity(entry("add list"));
            ctx.mark_dirty();
            Ok(())
        });

        assert!(result.is_err());
        assert_eq!(ctx.state(), &before);
        assert!(ctx.activity(None).is_empty());

        let on_disk = read_snapshot(&temp.path().join("board.json")).unwrap();
        assert_eq!(&on_disk, ctx.state());
    }

    #[test]
    fn test_transaction_rolls_back_on_error() {
        let mut ctx = BoardContext::new(BoardState::default());
        let result: Result<()> = ctx.transaction(|ctx| {
            ctx.state_mut().lists.clear();
            Err(BoardError::parse("stop"))
        });

        assert!(result.is_err());
        assert_eq!(ctx.state().lists.len(), 1);
    }

    #[test]
    fn test_clean_transaction_skips_save() {
        let temp = TempDir::new().unwrap();
        let mut ctx = unwritable(&temp);
        assert_eq!(ctx.transaction(|_| Ok(7)).unwrap(), 7);
    }

    #[test]
    fn test_activity_newest_first_and_capped() {
        let mut ctx = BoardContext::new(BoardState::default()).with_activity_limit(2);
        ctx.append_activity(entry("add task"));
        ctx.append_activity(entry("move task"));
        ctx.append_activity(entry("delete task"));

        let ops: Vec<_> = ctx.activity(None).into_iter().map(|e| e.op).collect();
        assert_eq!(ops, vec!["delete task", "move task"]);
        assert_eq!(ctx.activity(Some(1)).len(), 1);
    }
}
