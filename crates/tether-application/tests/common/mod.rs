//! In-process record, add and translate services for controller tests.

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const GOOD_TOKEN: &str = "good-token";

#[derive(Clone, Default)]
pub struct Received {
    pub bodies: Arc<Mutex<Vec<Value>>>,
}

impl Received {
    pub fn last(&self) -> Option<Value> {
        self.bodies.lock().unwrap().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.bodies.lock().unwrap().len()
    }
}

pub struct Backend {
    pub base_url: String,
    pub received: Received,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {GOOD_TOKEN}"))
}

async fn record(
    State(received): State<Received>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    received.bodies.lock().unwrap().push(body.clone());
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"})));
    }
    if body["first_name"] == "fail" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": "error", "message": "sheet locked"})),
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({"status": "ok", "message": "saved"})),
    )
}

async fn add_get(
    State(received): State<Received>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    received.bodies.lock().unwrap().push(json!(params));
    let a: f64 = params.get("a").and_then(|v| v.parse().ok()).unwrap_or(0.0);
    let b: f64 = params.get("b").and_then(|v| v.parse().ok()).unwrap_or(0.0);
    Json(json!({"a": a, "b": b, "result": a + b}))
}

async fn add_post(State(received): State<Received>, Json(body): Json<Value>) -> Json<Value> {
    received.bodies.lock().unwrap().push(body.clone());
    let a = body["a"].as_f64().unwrap_or(0.0);
    let b = body["b"].as_f64().unwrap_or(0.0);
    Json(json!({"a": a, "b": b, "result": a + b}))
}

async fn translate(
    State(received): State<Received>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    received.bodies.lock().unwrap().push(body.clone());
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"})));
    }
    let Some(text) = body["text"].as_str() else {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "No text provided"})));
    };
    (
        StatusCode::OK,
        Json(json!({"original_text": text, "translated_text": format!("zh:{text}")})),
    )
}

pub async fn spawn_backend() -> Backend {
    let received = Received::default();
    let app = Router::new()
        .route("/api/record", post(record))
        .route("/add", get(add_get).post(add_post))
        .route("/translate", post(translate))
        .with_state(received.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Backend {
        base_url: format!("http://{address}"),
        received,
    }
}

/// Base URL of a port nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{address}")
}
