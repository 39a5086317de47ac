//! Shared test harness: an in-process mock of the effigy backend.
//!
//! Stands up a real axum server on an ephemeral port so the client is
//! exercised over actual HTTP, and records everything the backend sees
//! (paths, bearer tokens, request bodies) for the tests to assert on.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Observable state of the mock backend.
#[derive(Clone, Default)]
pub struct MockApi {
    /// Every request seen, as `"METHOD /path"`.
    pub hits: Arc<Mutex<Vec<String>>>,
    /// Bearer token of every request (`None` when no auth header).
    pub bearer_tokens: Arc<Mutex<Vec<Option<String>>>>,
    /// Bodies received on `POST /incarnations`.
    pub create_bodies: Arc<Mutex<Vec<Value>>>,
    /// Bodies received on `PUT /incarnations/{id}`.
    pub update_bodies: Arc<Mutex<Vec<Value>>>,
    /// Ids received on `DELETE /incarnations/{id}`.
    pub deleted_ids: Arc<Mutex<Vec<String>>>,
}

impl MockApi {
    fn record(&self, method: &str, path: &str, headers: &HeaderMap) {
        self.hits.lock().unwrap().push(format!("{method} {path}"));
        let bearer = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_string);
        self.bearer_tokens.lock().unwrap().push(bearer);
    }
}

/// Start the mock backend; returns its `/api` base URL and the recorder.
pub async fn start() -> (String, MockApi) {
    let api = MockApi::default();

    let app = Router::new()
        .route(
            "/api/incarnations",
            get(list_incarnations).post(create_incarnation),
        )
        .route(
            "/api/incarnations/{id}",
            get(get_incarnation)
                .put(update_incarnation)
                .delete(delete_incarnation),
        )
        .with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock api");
    });

    (format!("http://{addr}/api"), api)
}

/// A collection row as the backend emits it.
fn summary_row(id: i64) -> Value {
    json!({
        "id": id,
        "incarnation_repository": format!("group/service-{id}"),
        "target_directory": ".",
        "template_repository": "group/template",
        "revision": 3,
        "type": "direct",
        "requested_version": "v1.0.0",
        "created_at": "2024-05-01T12:00:00Z",
        "commit_sha": "deadbeef",
        "commit_url": "https://git.example.com/c/deadbeef",
        "merge_request_id": null,
        "merge_request_url": null
    })
}

/// A detail payload with the given version and template data.
fn detail_body(id: i64, version: &str, template_data: Value) -> Value {
    let mut body = json!({
        "id": id,
        "incarnation_repository": "group/service",
        "target_directory": ".",
        "status": "success",
        "merge_request_status": "merged",
        "template_repository": "group/template",
        "template_repository_version": version,
        "template_repository_version_hash": "a1b2c3d",
        "commit_sha": "deadbeef",
        "commit_url": "https://git.example.com/c/deadbeef",
        "merge_request_id": "42",
        "merge_request_url": "https://git.example.com/mr/42"
    });
    if !template_data.is_null() {
        body["template_data"] = template_data;
    }
    body
}

async fn list_incarnations(State(api): State<MockApi>, headers: HeaderMap) -> Json<Value> {
    api.record("GET", "/incarnations", &headers);
    Json(json!([summary_row(1), summary_row(2), summary_row(3)]))
}

async fn get_incarnation(
    State(api): State<MockApi>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    api.record("GET", &format!("/incarnations/{id}"), &headers);
    match id.as_str() {
        // Simulated backend fault for error-propagation tests.
        "500" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        // An incarnation the backend knows no template data for.
        "2" => Json(detail_body(2, "v1.0.0", Value::Null)).into_response(),
        other => {
            let id = other.parse().unwrap_or(7);
            Json(detail_body(
                id,
                "v1.0.0",
                json!({"name": "Jon", "age": "18"}),
            ))
            .into_response()
        }
    }
}

async fn create_incarnation(
    State(api): State<MockApi>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    api.record("POST", "/incarnations", &headers);
    // Echo the submitted version and template data back, as the real
    // backend does after applying the template.
    let version = body["template_repository_version"].clone();
    let template_data = body["template_data"].clone();
    api.create_bodies.lock().unwrap().push(body);
    Json(detail_body(
        99,
        version.as_str().unwrap_or_default(),
        template_data,
    ))
}

async fn update_incarnation(
    State(api): State<MockApi>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    api.record("PUT", &format!("/incarnations/{id}"), &headers);
    let version = body["template_repository_version"].clone();
    let template_data = body["template_data"].clone();
    api.update_bodies.lock().unwrap().push(body);
    Json(detail_body(
        id.parse().unwrap_or(7),
        version.as_str().unwrap_or_default(),
        template_data,
    ))
}

async fn delete_incarnation(
    State(api): State<MockApi>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    api.record("DELETE", &format!("/incarnations/{id}"), &headers);
    api.deleted_ids.lock().unwrap().push(id);
    // The real backend answers deletes with an empty text body.
    (StatusCode::OK, "").into_response()
}
