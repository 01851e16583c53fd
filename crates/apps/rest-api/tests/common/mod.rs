#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use rest_api::build_router;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse the body as JSON
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    /// The `detail` field of an error response
    pub fn detail(&self) -> String {
        self.json()["detail"]
            .as_str()
            .expect("Expected detail string")
            .to_string()
    }
}

/// Send a raw request through a fresh router built on the test pool
pub async fn send_raw(
    pool: &PgPool,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(body.into()).expect("Failed to build request");

    let response = build_router(pool.clone())
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec();

    TestResponse { status, body }
}

/// Send a request with an optional JSON body
pub async fn send(pool: &PgPool, method: Method, uri: &str, json: Option<Value>) -> TestResponse {
    match json {
        Some(json) => send_raw(pool, method, uri, Some("application/json"), json.to_string()).await,
        None => send_raw(pool, method, uri, None, Body::empty()).await,
    }
}

/// Number of rows currently stored
pub async fn user_count(pool: &PgPool) -> i64 {
    domain::UserRepository::count(pool)
        .await
        .expect("Failed to count users")
}
