//! Role Catalog Handlers
//!
//! The role table is a static closed set, so only reads are routed.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bh_common::{PermissionInfo, RoleInfo};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::AppState;
use crate::permissions::{Permission, RoleTableRecord};

/// Role catalog errors.
#[derive(Debug, Error)]
pub enum RolesError {
    #[error("Role not found: {0}")]
    NotFound(String),
}

impl IntoResponse for RolesError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "ROLE_NOT_FOUND"),
        };
        let body = crate::auth::ErrorResponse {
            error: code.to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// `permissions` selects the permission catalog; anything else lists roles.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CatalogResponse {
    Roles { roles: Vec<RoleInfo> },
    Permissions { permissions: Vec<PermissionInfo> },
}

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub role: RoleInfo,
}

/// GET /api/roles
///
/// Roles ordered by descending level, or with `?type=permissions` the
/// permission vocabulary in catalog order.
pub async fn list_roles(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<CatalogResponse> {
    if query.kind.as_deref() == Some("permissions") {
        return Json(CatalogResponse::Permissions {
            permissions: Permission::all().iter().map(Permission::info).collect(),
        });
    }

    Json(CatalogResponse::Roles {
        roles: state.authority.roles().map(|d| d.info()).collect(),
    })
}

/// GET /api/roles/{role_id}
pub async fn get_role(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> Result<Json<RoleResponse>, RolesError> {
    let descriptor = state
        .authority
        .get_role(&role_id)
        .ok_or(RolesError::NotFound(role_id))?;

    Ok(Json(RoleResponse {
        role: descriptor.info(),
    }))
}

/// GET /api/admin/role-table
///
/// The live table in its persisted form.
pub async fn get_role_table(State(state): State<AppState>) -> Json<RoleTableRecord> {
    Json(state.authority.table().to_record())
}
