//! Visitor registration endpoint
//!
//! Received -> Validated -> Checked -> Persisted -> Responded. Each failing
//! step answers immediately through `ApiError`.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::validate;

/// Message returned on successful registration
pub const SUCCESS_MESSAGE: &str = "Registration successful! Data saved to database.";

/// Registration response
#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
}

/// POST / - register a visitor
///
/// The body is taken raw so malformed JSON gets the same error shape as
/// every other validation failure.
async fn register_visitor(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<RegisterResponse>, ApiError> {
    tracing::info!("processing visitor registration request");

    let visitor = validate(&body).inspect_err(|e| {
        tracing::warn!(reason = %e, "rejected registration payload");
    })?;

    if state.registrar.exists(visitor.email.as_str()).await {
        tracing::warn!(email = %visitor.email, "duplicate registration attempt");
        return Err(ApiError::DuplicateEmail);
    }

    let saved = state.registrar.insert(&visitor).await?;
    tracing::info!(name = %saved.name, email = %saved.email, "visitor registered");

    Ok(Json(RegisterResponse {
        message: SUCCESS_MESSAGE,
    }))
}

/// Registration routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(register_visitor))
        .route("/api/visitors", post(register_visitor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use chrono::Utc;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::http::server::build_router;
    use crate::models::{NewVisitor, Visitor};
    use crate::registrar::{MemoryRegistrar, Registrar, StorageError};

    fn app(registrar: Arc<MemoryRegistrar>) -> Router {
        build_router(AppState::new(registrar))
    }

    async fn post_json(app: Router, body: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn registers_new_visitor() {
        let registrar = Arc::new(MemoryRegistrar::new());
        let before = Utc::now();

        let response = post_json(
            app(registrar.clone()),
            r#"{"name":"Alice","email":"alice@example.com"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["message"], SUCCESS_MESSAGE);

        let rows = registrar.visitors().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Alice");
        assert_eq!(rows[0].email, "alice@example.com");
        assert!(rows[0].registered_at >= before);
    }

    #[tokio::test]
    async fn stores_lowercased_email() {
        let registrar = Arc::new(MemoryRegistrar::new());
        let response = post_json(
            app(registrar.clone()),
            r#"{"name":"Alice","email":"Alice@Example.COM"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(registrar.visitors().await[0].email, "alice@example.com");
    }

    #[tokio::test]
    async fn blank_name_is_400() {
        let registrar = Arc::new(MemoryRegistrar::new());
        let response = post_json(app(registrar.clone()), r#"{"name":"","email":"a@b.com"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Name and email are required");
        assert!(registrar.visitors().await.is_empty());
    }

    #[tokio::test]
    async fn digit_in_name_is_400() {
        let registrar = Arc::new(MemoryRegistrar::new());
        let response = post_json(app(registrar), r#"{"name":"Bob2","email":"b@b.com"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"],
            "Invalid name: please enter a single word with letters only."
        );
    }

    #[tokio::test]
    async fn bad_email_is_400() {
        let registrar = Arc::new(MemoryRegistrar::new());
        let response =
            post_json(app(registrar), r#"{"name":"Carl","email":"not-an-email"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"],
            "Invalid email: please enter a valid email address."
        );
    }

    #[tokio::test]
    async fn duplicate_email_is_409() {
        let registrar = Arc::new(MemoryRegistrar::new());
        let first = post_json(app(registrar.clone()), r#"{"name":"Dana","email":"dana@x.com"}"#).await;
        assert_eq!(first.status(), StatusCode::OK);

        let second = post_json(app(registrar.clone()), r#"{"name":"Dana","email":"DANA@x.com"}"#).await;
        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(
            json_body(second).await["error"],
            "A visitor with this email already exists."
        );
        assert_eq!(registrar.visitors().await.len(), 1);
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let registrar = Arc::new(MemoryRegistrar::new());
        let response = post_json(app(registrar), "{name: Alice").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "Invalid JSON format");
    }

    #[tokio::test]
    async fn content_type_not_required() {
        let registrar = Arc::new(MemoryRegistrar::new());
        let response = app(registrar)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/visitors")
                    .body(Body::from(r#"{"name":"Eve","email":"eve@example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn existence_check_fails_open() {
        let registrar = Arc::new(MemoryRegistrar::new());
        let body = r#"{"name":"Dana","email":"dana@x.com"}"#;
        post_json(app(registrar.clone()), body).await;

        registrar.fail_exists(true);
        let response = post_json(app(registrar.clone()), body).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(registrar.visitors().await.len(), 2);
    }

    #[tokio::test]
    async fn insert_failure_is_empty_500() {
        let registrar = Arc::new(MemoryRegistrar::new());
        registrar.fail_insert(true);

        let response = post_json(
            app(registrar),
            r#"{"name":"Alice","email":"alice@example.com"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    struct PanickingRegistrar;

    #[async_trait]
    impl Registrar for PanickingRegistrar {
        async fn exists(&self, _email: &str) -> bool {
            panic!("connection string rotated mid-request")
        }

        async fn insert(&self, visitor: &NewVisitor) -> Result<Visitor, StorageError> {
            Ok(Visitor::registered(visitor, Utc::now()))
        }
    }

    #[tokio::test]
    async fn panic_is_empty_500() {
        let app = build_router(AppState::new(Arc::new(PanickingRegistrar)));
        let response = post_json(app, r#"{"name":"Alice","email":"alice@example.com"}"#).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn get_is_405() {
        let registrar = Arc::new(MemoryRegistrar::new());
        let response = app(registrar)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
