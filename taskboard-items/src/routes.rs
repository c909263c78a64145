//! HTTP routes for the item list
//!
//! | Method | Path      | Form fields           |
//! |--------|-----------|-----------------------|
//! | GET    | `/`       |                       |
//! | POST   | `/add`    | `newItem`             |
//! | POST   | `/edit`   | `newId`, `newTitle`   |
//! | POST   | `/delete` | `deleteItem`          |
//!
//! Every successful write answers `303 See Other` back to `/`, including
//! edits and deletes of an id that no longer exists.

use crate::error::ItemError;
use crate::store::{parse_id, ItemStore, Title};
use crate::view::ListingView;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use std::sync::Arc;

/// Shared state for the item routes
#[derive(Clone)]
pub struct ItemsState {
    pub store: Arc<dyn ItemStore>,
    pub view: Arc<ListingView>,
}

impl ItemsState {
    pub fn new(store: Arc<dyn ItemStore>, view: ListingView) -> Self {
        Self {
            store,
            view: Arc::new(view),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AddForm {
    #[serde(rename = "newItem", default)]
    new_item: String,
}

#[derive(Debug, Deserialize)]
struct EditForm {
    #[serde(rename = "newId", default)]
    new_id: String,
    #[serde(rename = "newTitle", default)]
    new_title: String,
}

#[derive(Debug, Deserialize)]
struct DeleteForm {
    #[serde(rename = "deleteItem", default)]
    delete_item: String,
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            tracing::debug!(error = %self, "rejected item request");
            return (StatusCode::BAD_REQUEST, self.to_string()).into_response();
        }
        tracing::error!(error = %self, "item request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

/// Build the item router
pub fn router(state: ItemsState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", post(add_item))
        .route("/edit", post(edit_item))
        .route("/delete", post(delete_item))
        .with_state(state)
}

async fn index(State(state): State<ItemsState>) -> Result<Html<String>, ItemError> {
    let items = state.store.list().await?;
    Ok(Html(state.view.render(&items)?))
}

async fn add_item(
    State(state): State<ItemsState>,
    Form(form): Form<AddForm>,
) -> Result<Redirect, ItemError> {
    let title = Title::parse("newItem", &form.new_item)?;
    let item = state.store.create(&title).await?;
    tracing::info!(id = item.id, "item added");
    Ok(Redirect::to("/"))
}

async fn edit_item(
    State(state): State<ItemsState>,
    Form(form): Form<EditForm>,
) -> Result<Redirect, ItemError> {
    let id = parse_id("newId", &form.new_id)?;
    let title = Title::parse("newTitle", &form.new_title)?;
    if state.store.rename(id, &title).await? {
        tracing::info!(id, "item renamed");
    } else {
        tracing::debug!(id, "rename matched no item");
    }
    Ok(Redirect::to("/"))
}

async fn delete_item(
    State(state): State<ItemsState>,
    Form(form): Form<DeleteForm>,
) -> Result<Redirect, ItemError> {
    let id = parse_id("deleteItem", &form.delete_item)?;
    if state.store.delete(id).await? {
        tracing::info!(id, "item deleted");
    } else {
        tracing::debug!(id, "delete matched no item");
    }
    Ok(Redirect::to("/"))
}
