//! HTTP tests for permission-gated routes.
//!
//! Mounts stub routes behind `with_requirement` + `enforce_access` the same
//! way `create_router` gates the admin endpoint.

mod helpers;

use axum::http::StatusCode;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use axum::Router;
use bh_server::api::AppState;
use bh_server::auth::{enforce_access, require_auth, with_requirement, AccessRequirement};
use bh_server::config::Config;
use bh_server::permissions::{Permission, Role, RoleAuthority};
use helpers::{body_to_json, TestApp};

const PUBLISH_URI: &str = "/publish";
const UNGATED_URI: &str = "/ungated";

async fn ok() -> &'static str {
    "ok"
}

fn gated_app() -> TestApp {
    let state = AppState::new(Config::default_for_test(), RoleAuthority::default());

    let publish = Router::new()
        .route(PUBLISH_URI, get(ok))
        .layer(from_fn_with_state(state.clone(), enforce_access))
        .layer(from_fn(with_requirement(AccessRequirement::Permission(
            Permission::CreateContent,
        ))))
        .layer(from_fn(require_auth));

    // Authenticated and enforced, but nothing says what is required
    let ungated = Router::new()
        .route(UNGATED_URI, get(ok))
        .layer(from_fn_with_state(state.clone(), enforce_access))
        .layer(from_fn(require_auth));

    TestApp::from_router(publish.merge(ungated).with_state(state))
}

#[tokio::test]
async fn test_holder_of_permission_passes() {
    let app = gated_app();
    let resp = app.get_as(Role::Creator, PUBLISH_URI).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_superadmin_bypasses_permission_gate() {
    let app = gated_app();
    let resp = app.get_as(Role::Superadmin, PUBLISH_URI).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_higher_level_without_permission_is_forbidden() {
    let app = gated_app();
    for role in [Role::Admin, Role::Moderator, Role::Reader] {
        let resp = app.get_as(role, PUBLISH_URI).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{role}");

        let json = body_to_json(resp).await;
        assert_eq!(json["error"], "missing_permission", "{role}");
    }
}

#[tokio::test]
async fn test_unknown_token_role_is_forbidden() {
    let app = gated_app();
    let resp = app
        .get_with_auth("Bearer mock-token-owner", PUBLISH_URI)
        .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_to_json(resp).await["error"], "missing_permission");
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = gated_app();
    let resp = app.get(PUBLISH_URI).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_route_without_requirement_is_denied() {
    let app = gated_app();
    for role in [Role::Superadmin, Role::Creator] {
        let resp = app.get_as(role, UNGATED_URI).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{role}");
        assert_eq!(body_to_json(resp).await["error"], "insufficient_level", "{role}");
    }
}
