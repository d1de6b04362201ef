#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use blogpost_service::models::{BlogPost, PostFields};
use blogpost_service::services::{InMemoryStore, PostStore};
use blogpost_service::{build_router, AppState};
use mongodb::bson::oid::ObjectId;
use serde_json::Value;
use service_core::error::AppError;
use std::sync::Arc;
use tower::ServiceExt;

/// Router wired to a fresh in-memory store.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
}

impl TestApp {
    pub fn spawn() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let router = build_router(AppState::new(store.clone()));
        Self { router, store }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        send(&self.router, method, uri, body).await
    }

    pub async fn create_post(&self, title: &str, body: &str, reg_date: &str) -> String {
        let (status, response) = self
            .request(
                Method::POST,
                "/blogposts",
                Some(serde_json::json!({ "title": title, "body": body, "regDate": reg_date })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create failed: {response}");
        response["id"]
            .as_str()
            .expect("create response carries the new id")
            .to_string()
    }

    pub async fn store_is_empty(&self) -> bool {
        self.store.list().await.unwrap().is_empty()
    }
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_raw(router, request).await
}

async fn send_raw(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}

/// Store whose every operation fails the way an unreachable database would.
pub struct FailingStore;

#[async_trait]
impl PostStore for FailingStore {
    async fn list(&self) -> Result<Vec<BlogPost>, AppError> {
        Err(unreachable_db())
    }

    async fn insert(&self, _post: &BlogPost) -> Result<(), AppError> {
        Err(unreachable_db())
    }

    async fn find(&self, _id: &ObjectId) -> Result<Option<BlogPost>, AppError> {
        Err(unreachable_db())
    }

    async fn replace_fields(
        &self,
        _id: &ObjectId,
        _fields: &PostFields,
    ) -> Result<bool, AppError> {
        Err(unreachable_db())
    }

    async fn delete(&self, _id: &ObjectId) -> Result<(), AppError> {
        Err(unreachable_db())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(unreachable_db())
    }

    async fn close(&self) {}
}

fn unreachable_db() -> AppError {
    AppError::DatabaseError(anyhow::anyhow!("server selection timeout"))
}

pub fn failing_router() -> Router {
    build_router(AppState::new(Arc::new(FailingStore)))
}
