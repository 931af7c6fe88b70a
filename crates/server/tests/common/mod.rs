use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use server::store::{ConsultationStore, SharedStore};
use std::sync::{Arc, RwLock};
use tower::ServiceExt;

/// A fresh demo-seeded store, independent of the process-wide one.
pub fn demo_store() -> SharedStore {
    Arc::new(RwLock::new(ConsultationStore::demo(chrono::Utc::now())))
}

/// Full API router over the given store.
pub fn test_app(store: SharedStore) -> Router {
    server::openapi::api_router(store)
}

/// Issue a GET and return the status, headers of interest and body text.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8_lossy(&bytes).to_string())
}
