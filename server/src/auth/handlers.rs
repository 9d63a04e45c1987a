//! Authorization HTTP Handlers

use axum::extract::{Query, State};
use axum::Json;
use bh_common::{PermissionCheck, RoleInfo, RoleLevelCheck};
use serde::{Deserialize, Serialize};

use super::error::{AuthError, AuthResult};
use super::middleware::AuthRole;
use crate::api::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckPermissionQuery {
    pub permission: Option<String>,
    pub user_role: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRoleLevelQuery {
    pub required_level: Option<String>,
    pub user_role: Option<String>,
}

/// Profile of the authenticated caller.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub role: RoleInfo,
}

/// Empty query values count as missing.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/auth/check-permission?permission=...&userRole=...
#[tracing::instrument(skip(state))]
pub async fn check_permission(
    State(state): State<AppState>,
    Query(query): Query<CheckPermissionQuery>,
) -> AuthResult<Json<PermissionCheck>> {
    let (Some(permission), Some(user_role)) = (present(query.permission), present(query.user_role))
    else {
        return Err(AuthError::Validation(
            "permission and userRole are required".into(),
        ));
    };

    let has_permission = state.authority.has_permission(&user_role, &permission);

    Ok(Json(PermissionCheck {
        has_permission,
        permission,
        user_role,
    }))
}

/// GET /api/auth/check-role-level?requiredLevel=...&userRole=...
///
/// A `requiredLevel` that is not an integer answers `false` rather than 400.
/// Fractional values are not truncated: `requiredLevel=2.5` answers `false`
/// with `requiredLevel: null`.
#[tracing::instrument(skip(state))]
pub async fn check_role_level(
    State(state): State<AppState>,
    Query(query): Query<CheckRoleLevelQuery>,
) -> AuthResult<Json<RoleLevelCheck>> {
    let (Some(required_level), Some(user_role)) =
        (present(query.required_level), present(query.user_role))
    else {
        return Err(AuthError::Validation(
            "requiredLevel and userRole are required".into(),
        ));
    };

    let required_level = required_level.parse::<i64>().ok();
    let has_role_level = required_level
        .is_some_and(|level| state.authority.has_role_level(&user_role, level));
    let user_level = state
        .authority
        .get_role(&user_role)
        .map(|descriptor| descriptor.level().get());

    Ok(Json(RoleLevelCheck {
        has_role_level,
        required_level,
        user_role,
        user_level,
    }))
}

/// GET /api/auth/me
pub async fn get_me(State(state): State<AppState>, auth: AuthRole) -> Json<MeResponse> {
    Json(MeResponse {
        role: state.authority.describe(auth.role).info(),
    })
}
