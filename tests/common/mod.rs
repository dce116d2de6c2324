#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use bears_api::{config::Config, db, rest, AppState};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const SECRET: &str = "test-secret";

pub struct TestContext {
    pub app: Router,
    pub state: AppState,
}

impl TestContext {
    pub async fn new() -> Self {
        // One long-lived connection, otherwise each connection sees its own
        // empty in-memory database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        db::migrate(&pool).await.expect("migrations");

        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: SECRET.to_string(),
            port: 0,
            max_connections: 1,
        };
        let state = AppState::new(pool, &config);

        TestContext {
            app: rest::router(state.clone()),
            state,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.expect("infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        // Extractor rejections from axum come back as plain text.
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request(Method::GET, uri, token, None)).await
    }

    pub async fn with_body(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, Value) {
        self.send(request(method, uri, token, Some(body))).await
    }

    pub async fn with_form(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        form: &str,
    ) -> (StatusCode, Value) {
        self.send(raw_request(
            method,
            uri,
            token,
            "application/x-www-form-urlencoded",
            form.to_string(),
        ))
        .await
    }

    /// Runs `/setup` and logs in as the sample user.
    pub async fn login(&self) -> String {
        let (status, _) = self.get("/api/setup", None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = self
            .with_body(
                Method::POST,
                "/api/authenticate",
                None,
                serde_json::json!({"name": "Andre Martins", "password": "senha"}),
            )
            .await;
        body["token"].as_str().expect("token").to_string()
    }
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("x-access-token", token);
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

pub fn raw_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    content_type: &str,
    body: impl Into<Body>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type);
    if let Some(token) = token {
        builder = builder.header("x-access-token", token);
    }
    builder.body(body.into()).expect("request")
}
