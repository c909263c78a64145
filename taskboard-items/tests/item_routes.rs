//! Route tests for the item list, driven through the router with `oneshot`

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rstest::rstest;
use std::sync::Arc;
use taskboard_items::{
    router, seed_if_empty, Item, ItemError, ItemStore, ItemsState, ListingView, SqliteItemStore,
    Title,
};
use tempfile::TempDir;
use tower::ServiceExt;

fn app(store: Arc<dyn ItemStore>) -> Router {
    router(ItemsState::new(store, ListingView::new("Today").unwrap()))
}

fn form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn assert_redirect_home(response: &axum::response::Response) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

async fn seeded_store() -> Arc<SqliteItemStore> {
    let store = Arc::new(SqliteItemStore::open_in_memory().unwrap());
    seed_if_empty(store.as_ref()).await.unwrap();
    store
}

#[test_log::test(tokio::test)]
async fn test_index_lists_items() {
    let store = seeded_store().await;

    let response = app(store)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h1>Today</h1>"));
    assert!(html.find("Buy milk").unwrap() < html.find("Finish homework").unwrap());
}

#[test_log::test(tokio::test)]
async fn test_add_appends_with_larger_id() {
    let store = seeded_store().await;
    let before = store.list().await.unwrap();

    let response = app(store.clone())
        .oneshot(form("/add", "newItem=++Call+mom++"))
        .await
        .unwrap();
    assert_redirect_home(&response);

    let items = store.list().await.unwrap();
    assert_eq!(items.len(), before.len() + 1);
    let added = items.last().unwrap();
    assert_eq!(added.title, "Call mom");
    assert!(before.iter().all(|item| item.id < added.id));
}

#[test_log::test(tokio::test)]
async fn test_edit_and_delete() {
    let store = seeded_store().await;
    let first = store.list().await.unwrap()[0].id;

    let response = app(store.clone())
        .oneshot(form("/edit", &format!("newId={first}&newTitle=Buy+bread")))
        .await
        .unwrap();
    assert_redirect_home(&response);
    assert_eq!(store.list().await.unwrap()[0].title, "Buy bread");

    let response = app(store.clone())
        .oneshot(form("/delete", &format!("deleteItem={first}")))
        .await
        .unwrap();
    assert_redirect_home(&response);
    let items = store.list().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Finish homework");
}

#[rstest]
#[case("/edit", "newId=999&newTitle=Ghost")]
#[case("/delete", "deleteItem=999")]
#[tokio::test]
async fn test_unknown_id_still_redirects(#[case] uri: &str, #[case] body: &str) {
    let store = seeded_store().await;
    let before = store.list().await.unwrap();

    let response = app(store.clone()).oneshot(form(uri, body)).await.unwrap();

    assert_redirect_home(&response);
    assert_eq!(store.list().await.unwrap(), before);
}

#[rstest]
#[case("/add", "newItem=+++")]
#[case("/add", "")]
#[case("/edit", "newId=1&newTitle=%20")]
#[case("/edit", "newId=one&newTitle=Bread")]
#[case("/delete", "deleteItem=")]
#[tokio::test]
async fn test_invalid_input_is_rejected(#[case] uri: &str, #[case] body: &str) {
    let store = seeded_store().await;
    let before = store.list().await.unwrap();

    let response = app(store.clone()).oneshot(form(uri, body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.list().await.unwrap(), before);
}

/// A store whose every call fails
struct BrokenStore;

#[async_trait]
impl ItemStore for BrokenStore {
    async fn list(&self) -> taskboard_items::Result<Vec<Item>> {
        Err(rusqlite::Error::InvalidQuery.into())
    }

    async fn create(&self, _title: &Title) -> taskboard_items::Result<Item> {
        Err(rusqlite::Error::InvalidQuery.into())
    }

    async fn rename(&self, _id: i64, _title: &Title) -> taskboard_items::Result<bool> {
        Err(ItemError::from(rusqlite::Error::InvalidQuery))
    }

    async fn delete(&self, _id: i64) -> taskboard_items::Result<bool> {
        Err(ItemError::from(rusqlite::Error::InvalidQuery))
    }
}

#[rstest]
#[case(Request::get("/").body(Body::empty()).unwrap())]
#[case(form("/add", "newItem=Milk"))]
#[case(form("/edit", "newId=1&newTitle=Milk"))]
#[case(form("/delete", "deleteItem=1"))]
#[tokio::test]
async fn test_storage_failure_is_500(#[case] request: Request<Body>) {
    let response = app(Arc::new(BrokenStore)).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test_log::test(tokio::test)]
async fn test_items_survive_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("items.db");

    {
        let store = Arc::new(SqliteItemStore::open(&path).unwrap());
        seed_if_empty(store.as_ref()).await.unwrap();
        let response = app(store).oneshot(form("/add", "newItem=Water+plants")).await.unwrap();
        assert_redirect_home(&response);
    }

    let store = SqliteItemStore::open(&path).unwrap();
    assert_eq!(seed_if_empty(&store).await.unwrap(), 0);
    let titles: Vec<_> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.title)
        .collect();
    assert_eq!(titles, ["Buy milk", "Finish homework", "Water plants"]);
}
