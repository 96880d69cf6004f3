#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{Local, TimeZone};
use disc_title::bluray::metadata_path;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// What the fake lookup service answers with
#[derive(Clone)]
pub enum Reply {
    Json(serde_json::Value),
    Status(u16),
    Body(&'static str),
}

#[derive(Clone)]
struct FakeState {
    reply: Reply,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// In-process stand-in for the OMDb endpoint
pub struct FakeOmdb {
    pub base_url: String,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FakeOmdb {
    pub async fn start(reply: Reply) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            reply,
            requests: requests.clone(),
        };
        let app = Router::new().route("/", get(handle)).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake OMDb");
        let addr = listener.local_addr().expect("Failed to get local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake OMDb stopped");
        });

        Self {
            base_url: format!("http://{}/", addr),
            requests,
        }
    }

    /// Query parameters of every request received so far
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle(
    State(state): State<FakeState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.requests.lock().unwrap().push(params);

    match state.reply {
        Reply::Json(value) => Json(value).into_response(),
        Reply::Status(code) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Reply::Body(body) => (
            StatusCode::OK,
            [("content-type", "application/json")],
            body,
        )
            .into_response(),
    }
}

/// Lay out `BDMV/META/DL/bdmt_eng.xml` under `root` with the given title,
/// modified mid-way through `year`.
pub fn write_bluray_metadata(root: &Path, title: &str, year: i32) {
    let path = metadata_path(root);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        format!(
            r#"<?xml version="1.0" encoding="utf-8" ?>
<disclib xmlns="urn:BDA:bdmv;disclib" xmlns:di="urn:BDA:bdmv;discinfo">
  <di:discinfo>
    <di:title>
      <di:name>{}</di:name>
    </di:title>
    <di:language>eng</di:language>
  </di:discinfo>
</disclib>"#,
            title
        ),
    )
    .unwrap();

    let mtime: SystemTime = Local
        .with_ymd_and_hms(year, 6, 15, 12, 0, 0)
        .unwrap()
        .into();
    std::fs::File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(mtime)
        .unwrap();
}
