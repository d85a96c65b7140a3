//! HTTP facade over the in-memory item store.
//!
//! # Overview
//! An axum router exposing CRUD on `/items`:
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | GET | /items | 200 array | — |
//! | POST | /items | 201 item | 400 |
//! | GET | /items/{id} | 200 item | 404 / 400 |
//! | PUT | /items/{id} | 200 item | 404 / 400 |
//! | DELETE | /items/{id} | 200 message | 404 / 400 |
//!
//! Failures carry a `{"error": "..."}` body; see [`error`].
//!
//! # Design
//! The store is wrapped in a `tokio::sync::RwLock` — list/get take shared
//! reads, mutations take exclusive writes, which keeps id allocation
//! monotonic and rules out lost updates between concurrent requests.
//! Extractors are taken as `Result` so body and path rejections go through
//! `ApiError` and come back in the same envelope as every other failure.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::{net::TcpListener, sync::RwLock};

pub mod error;
pub mod store;

pub use error::ApiError;
pub use store::{Item, ItemInput, ItemStore};

/// Shared handle to the store; one per router.
pub type Db = Arc<RwLock<ItemStore>>;

/// Body of a successful DELETE.
#[derive(Serialize)]
struct Deleted {
    message: &'static str,
}

/// Router over the fixed seed (two items, counter at 3).
pub fn app() -> Router {
    app_with_store(ItemStore::seeded())
}

/// Router over an arbitrary store; tests use this for isolated instances.
pub fn app_with_store(store: ItemStore) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let store = db.read().await;
    Json(store.list_all())
}

async fn create_item(
    State(db): State<Db>,
    payload: Result<Json<ItemInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(input) = payload?;
    let item = db.write().await.create(input);
    tracing::debug!(id = item.id, "created item");
    Ok((StatusCode::CREATED, Json(item)))
}

async fn get_item(
    State(db): State<Db>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = id?;
    let store = db.read().await;
    store.get_by_id(id).cloned().map(Json).ok_or(ApiError::NotFound)
}

async fn update_item(
    State(db): State<Db>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ItemInput>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let mut store = db.write().await;
    let item = store.update(id, input).ok_or(ApiError::NotFound)?;
    tracing::debug!(id, "updated item");
    Ok(Json(item))
}

async fn delete_item(
    State(db): State<Db>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Deleted>, ApiError> {
    let Path(id) = id?;
    let mut store = db.write().await;
    if store.delete(id) {
        tracing::debug!(id, "deleted item");
        Ok(Json(Deleted {
            message: "Item deleted successfully",
        }))
    } else {
        Err(ApiError::NotFound)
    }
}
