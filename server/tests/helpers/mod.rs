//! Reusable test helpers for HTTP integration tests.
//!
//! Provides `TestApp` for sending requests through the full axum router via
//! `tower::ServiceExt::oneshot`, plus token and body helpers.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{self, header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use bh_server::api::{create_router, AppState};
use bh_server::auth::token::issue_token;
use bh_server::config::Config;
use bh_server::permissions::{Role, RoleAuthority, RoleTable};

/// Router wired with the builtin role table.
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_table(RoleTable::builtin())
    }

    /// Create a test app backed by a custom role table.
    pub fn with_table(table: RoleTable) -> Self {
        let state = AppState::new(Config::default_for_test(), RoleAuthority::new(table));
        Self {
            router: create_router(state),
        }
    }

    /// Wrap a router built by the test itself.
    pub fn from_router(router: Router) -> Self {
        Self { router }
    }

    /// Build an HTTP request with the given method and URI.
    pub fn request(method: Method, uri: &str) -> http::request::Builder {
        Request::builder().method(method).uri(uri)
    }

    /// Send a request through the router via `tower::ServiceExt::oneshot`.
    pub async fn oneshot(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot request failed")
    }

    /// GET without credentials.
    pub async fn get(&self, uri: &str) -> Response<Body> {
        let req = Self::request(Method::GET, uri)
            .body(Body::empty())
            .unwrap();
        self.oneshot(req).await
    }

    /// GET with a Bearer token for `role`.
    pub async fn get_as(&self, role: Role, uri: &str) -> Response<Body> {
        self.get_with_auth(&format!("Bearer {}", issue_token(role)), uri)
            .await
    }

    /// GET with a raw Authorization header value.
    pub async fn get_with_auth(&self, authorization: &str, uri: &str) -> Response<Body> {
        let req = Self::request(Method::GET, uri)
            .header(header::AUTHORIZATION, authorization)
            .body(Body::empty())
            .unwrap();
        self.oneshot(req).await
    }
}

/// Collect a response body and parse it as JSON.
pub async fn body_to_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to collect response body")
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        let preview = String::from_utf8_lossy(&bytes);
        panic!("Failed to parse response as JSON: {e}\nBody: {preview}")
    })
}
