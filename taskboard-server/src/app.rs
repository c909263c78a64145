//! Assemble the full router from configuration

use crate::api::{self, SharedBoard};
use crate::config::Config;
use anyhow::Context;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use taskboard::{BoardContext, BoardState};
use taskboard_items::{ItemStore, ItemsState, ListingView, SqliteItemStore};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

/// Open the board described by `config`
pub fn open_board(config: &Config) -> anyhow::Result<BoardContext> {
    let initial = if config.seed_board {
        BoardState::sample()
    } else {
        BoardState::default()
    };

    let ctx = match &config.board_snapshot {
        Some(path) => BoardContext::open(path, initial)
            .with_context(|| format!("failed to open board snapshot {}", path.display()))?,
        None => BoardContext::new(initial),
    };
    Ok(ctx.with_activity_limit(config.activity_limit))
}

/// Open the item database described by `config`
pub async fn open_items(config: &Config) -> anyhow::Result<Arc<dyn ItemStore>> {
    let store = SqliteItemStore::open(&config.database)
        .with_context(|| format!("failed to open item database {}", config.database.display()))?;
    if config.seed_items {
        taskboard_items::seed_if_empty(&store).await?;
    }
    Ok(Arc::new(store))
}

/// Item routes, board API and health check behind request tracing
pub fn router(items: Arc<dyn ItemStore>, view: ListingView, board: BoardContext) -> Router {
    let board: SharedBoard = Arc::new(Mutex::new(board));

    taskboard_items::router(ItemsState::new(items, view))
        .merge(api::router(board))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
}

/// Build the whole application from configuration
pub async fn build(config: &Config) -> anyhow::Result<Router> {
    let board = open_board(config)?;
    let items = open_items(config).await?;
    let view = ListingView::new(&config.list_title)?;

    tracing::info!(
        tasks = board.state().tasks.len(),
        lists = board.state().lists.len(),
        snapshot = ?config.board_snapshot,
        "board ready"
    );
    Ok(router(items, view, board))
}

async fn health_check() -> &'static str {
    "OK"
}
