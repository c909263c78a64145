//! JSON API over the board
//!
//! One mutex guards the [`BoardContext`]; every request holds it for its
//! whole batch, so writers never interleave.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use taskboard::board::{catalog, GetBoard};
use taskboard::{execute_input, BoardContext, BoardError, BoardOperationProcessor, LogEntry};
use taskboard::{OperationProcessor, SortOrder};
use tokio::sync::Mutex;

/// Board state shared by the API handlers
pub type SharedBoard = Arc<Mutex<BoardContext>>;

/// Board errors rendered as `{"error": ...}`
#[derive(Debug)]
pub struct ApiError(BoardError);

impl From<BoardError> for ApiError {
    fn from(error: BoardError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            tracing::debug!(error = %self.0, "rejected board request");
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(error = %self.0, "board request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
struct BoardQuery {
    sort: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ActivityQuery {
    limit: Option<usize>,
}

/// Build the board API router
pub fn router(board: SharedBoard) -> Router {
    Router::new()
        .route("/api/board", get(get_board))
        .route("/api/board/ops", post(run_operations))
        .route("/api/activity", get(activity))
        .route("/api/operations", get(operations))
        .with_state(board)
}

async fn get_board(
    State(board): State<SharedBoard>,
    Query(query): Query<BoardQuery>,
) -> ApiResult<Value> {
    let sort = match query.sort.as_deref() {
        Some(raw) => raw
            .parse::<SortOrder>()
            .map_err(|e| BoardError::invalid_value("sort", e))?,
        None => SortOrder::default(),
    };

    let mut ctx = board.lock().await;
    let view = BoardOperationProcessor::new().process(&GetBoard::new(sort), &mut *ctx)?;
    Ok(Json(view))
}

async fn run_operations(State(board): State<SharedBoard>, body: Bytes) -> ApiResult<Vec<Value>> {
    let input: Value = serde_json::from_slice(&body)
        .map_err(|e| BoardError::parse(format!("request body is not JSON: {e}")))?;

    let mut ctx = board.lock().await;
    let results = execute_input(&mut ctx, input)?;
    Ok(Json(results))
}

async fn activity(
    State(board): State<SharedBoard>,
    Query(query): Query<ActivityQuery>,
) -> Json<Vec<LogEntry>> {
    let ctx = board.lock().await;
    Json(ctx.activity(query.limit))
}

async fn operations() -> Json<Vec<Value>> {
    Json(catalog())
}
