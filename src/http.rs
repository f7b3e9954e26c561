//! HTTP transport - maps the workout REST API onto a [`WorkoutStore`].
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /api/workouts?page=N`: sorted page of records with paging metadata.
//! - `GET /api/workouts/:id`: one record, or 404.
//! - `POST /api/workouts`: create from a JSON body; 201 or 400 with `errors`.
//! - `PUT /api/workouts/:id`: replace a record; 200, 400 or 404.
//! - `DELETE /api/workouts/:id`: `{ "ok": true }` or 404.
//! - `GET /`: the landing page, from [`landing_page`].
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use workout_log::{http, JsonFileBackend, WorkoutStore};
//!
//! let store = Arc::new(WorkoutStore::new(JsonFileBackend::new("data/workouts.json")));
//!
//! // Compose with other axum routes
//! let app = http::router(store.clone()).merge(http::landing_page("static"));
//!
//! // Or serve directly
//! http::serve(store, "static", "0.0.0.0:5000").await?;
//! ```

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::error;

use crate::error::WorkoutError;
use crate::listing::{parse_page, Page};
use crate::store::{RecordBackend, WorkoutStore};
use crate::workout::WorkoutRecord;

/// Build an axum `Router` serving the workout API from the given store.
pub fn router<B: RecordBackend + 'static>(store: Arc<WorkoutStore<B>>) -> Router {
    Router::new()
        .route(
            "/api/workouts",
            get(list_handler::<B>).post(create_handler::<B>),
        )
        .route(
            "/api/workouts/:id",
            get(get_handler::<B>)
                .put(update_handler::<B>)
                .delete(delete_handler::<B>),
        )
        .with_state(store)
}

/// `GET /` serving `index.html` from `static_dir`.
pub fn landing_page(static_dir: impl Into<PathBuf>) -> Router {
    let index = Arc::new(static_dir.into().join("index.html"));
    Router::new().route("/", get(index_handler)).with_state(index)
}

/// Serve the API and landing page over HTTP at the given address (e.g. `"0.0.0.0:5000"`).
pub async fn serve<B: RecordBackend + 'static>(
    store: Arc<WorkoutStore<B>>,
    static_dir: impl Into<PathBuf>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(store).merge(landing_page(static_dir));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

/// `GET /api/workouts?page=N`
async fn list_handler<B: RecordBackend + 'static>(
    State(store): State<Arc<WorkoutStore<B>>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Page<WorkoutRecord>>, WorkoutError> {
    let page = parse_page(params.get("page").map(String::as_str));
    Ok(Json(store.list(page)?))
}

/// `GET /api/workouts/:id`
async fn get_handler<B: RecordBackend + 'static>(
    State(store): State<Arc<WorkoutStore<B>>>,
    Path(id): Path<String>,
) -> Result<Json<WorkoutRecord>, WorkoutError> {
    store
        .get(&id)?
        .map(Json)
        .ok_or(WorkoutError::NotFound(id))
}

/// `POST /api/workouts`
async fn create_handler<B: RecordBackend + 'static>(
    State(store): State<Arc<WorkoutStore<B>>>,
    body: Bytes,
) -> Result<(StatusCode, Json<WorkoutRecord>), WorkoutError> {
    let record = store.create(&payload_from_body(&body))?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `PUT /api/workouts/:id`
async fn update_handler<B: RecordBackend + 'static>(
    State(store): State<Arc<WorkoutStore<B>>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<WorkoutRecord>, WorkoutError> {
    let record = store.update(&id, &payload_from_body(&body))?;
    Ok(Json(record))
}

/// `DELETE /api/workouts/:id`
async fn delete_handler<B: RecordBackend + 'static>(
    State(store): State<Arc<WorkoutStore<B>>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, WorkoutError> {
    store.delete(&id)?;
    Ok(Json(json!({ "ok": true })))
}

/// `GET /`
async fn index_handler(State(index): State<Arc<PathBuf>>) -> Response {
    match tokio::fs::read_to_string(index.as_path()).await {
        Ok(body) => Html(body).into_response(),
        Err(_) => not_found(),
    }
}

/// Request body as JSON; an empty or malformed body reads as `null`, which
/// validation treats like `{}`.
fn payload_from_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}

impl IntoResponse for WorkoutError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        match self {
            WorkoutError::Invalid(errors) => (status, Json(json!({ "errors": errors }))).into_response(),
            WorkoutError::NotFound(_) => not_found(),
            WorkoutError::Store(e) => {
                error!(error = %e, "workout store failure");
                (status, Json(json!({ "error": e.to_string() }))).into_response()
            }
        }
    }
}
