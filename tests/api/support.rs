//! Test server: the router over a temp-dir JSON file, bound to port 0.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{json, Value};
use tempfile::TempDir;
use workout_log::{http, JsonFileBackend, WorkoutStore};

pub struct TestServer {
    pub base: String,
    pub client: reqwest::Client,
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
    _dir: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Bind to port 0 and return a handle with the actual address.
pub async fn start_server() -> TestServer {
    start_server_with_data(|dir| dir.join("data").join("workouts.json")).await
}

/// Like [`start_server`], with the data file placed by `data_file` inside the temp dir.
pub async fn start_server_with_data(data_file: impl FnOnce(&Path) -> PathBuf) -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    let data_file = data_file(dir.path());
    let static_dir = dir.path().join("static");
    std::fs::create_dir_all(&static_dir).unwrap();
    std::fs::write(
        static_dir.join("index.html"),
        "<!doctype html><title>Workout Log</title>",
    )
    .unwrap();

    let store = Arc::new(WorkoutStore::new(JsonFileBackend::new(&data_file)));
    let app = http::router(store).merge(http::landing_page(&static_dir));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base: format!("http://{addr}"),
        client: reqwest::Client::new(),
        data_file,
        static_dir,
        _dir: dir,
    }
}

pub fn run_payload() -> Value {
    json!({
        "date": "2026-02-01",
        "exercise": "Tempo Run",
        "type": "Cardio",
        "duration": 40
    })
}
