//! HTTP tests for the level-gated admin endpoint.

mod helpers;

use axum::http::StatusCode;
use bh_server::permissions::{Role, RoleTable};
use helpers::{body_to_json, TestApp};

#[tokio::test]
async fn test_admin_levels_can_read_role_table() {
    let app = TestApp::new();
    for role in [Role::Superadmin, Role::Admin] {
        let resp = app.get_as(role, "/api/admin/role-table").await;
        assert_eq!(resp.status(), StatusCode::OK, "{role}");

        let json = body_to_json(resp).await;
        assert_eq!(json["version"], 1);
        assert_eq!(json["roles"]["superadmin"]["permissions"], serde_json::json!(["all"]));
    }
}

#[tokio::test]
async fn test_lower_levels_are_forbidden() {
    let app = TestApp::new();
    for role in [Role::Moderator, Role::Creator, Role::Reader] {
        let resp = app.get_as(role, "/api/admin/role-table").await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{role}");
        assert_eq!(body_to_json(resp).await["error"], "insufficient_level");
    }
}

#[tokio::test]
async fn test_unknown_token_role_is_forbidden() {
    let app = TestApp::new();
    let resp = app
        .get_with_auth("Bearer mock-token-root", "/api/admin/role-table")
        .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unauthenticated_is_unauthorized() {
    let app = TestApp::new();
    let resp = app.get("/api/admin/role-table").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_role_table_reflects_loaded_record() {
    let mut record = RoleTable::builtin().to_record();
    record.roles.get_mut("moderator").unwrap().permissions = vec!["manage_comments".into()];
    let app = TestApp::with_table(RoleTable::from_record(record).unwrap());

    let json = body_to_json(app.get_as(Role::Admin, "/api/admin/role-table").await).await;
    assert_eq!(
        json["roles"]["moderator"]["permissions"],
        serde_json::json!(["manage_comments"])
    );

    let json = body_to_json(
        app.get("/api/auth/check-permission?userRole=moderator&permission=moderate_content")
            .await,
    )
    .await;
    assert_eq!(json["hasPermission"], false);
}
