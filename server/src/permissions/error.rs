//! Permission error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::permission::Permission;
use super::role::{Role, RoleLevel};

/// Errors raised by typed permission checks and identifier parsing.
///
/// The string-keyed queries on [`RoleAuthority`](super::RoleAuthority) never
/// return these; they absorb them into `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// Identifier is not one of the known roles.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Identifier is not in the permission vocabulary.
    #[error("Unknown permission: {0}")]
    UnknownPermission(String),

    /// Level outside 1 through 5.
    #[error("Invalid role level: {0}")]
    InvalidLevel(i64),

    /// Role does not grant the permission.
    #[error("Role {role} lacks permission {permission}")]
    MissingPermission { role: Role, permission: Permission },

    /// Role ranks below the required level.
    #[error("Role {role} is below required level {required}")]
    InsufficientLevel { role: Role, required: RoleLevel },
}

impl PermissionError {
    const fn code(&self) -> &'static str {
        match self {
            Self::UnknownRole(_) => "unknown_role",
            Self::UnknownPermission(_) => "unknown_permission",
            Self::InvalidLevel(_) => "invalid_level",
            Self::MissingPermission { .. } => "missing_permission",
            Self::InsufficientLevel { .. } => "insufficient_level",
        }
    }
}

impl IntoResponse for PermissionError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::UnknownRole(_) | Self::UnknownPermission(_) | Self::InvalidLevel(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::MissingPermission { .. } | Self::InsufficientLevel { .. } => {
                StatusCode::FORBIDDEN
            }
        };
        let body = serde_json::json!({"error": self.code(), "message": self.to_string()});
        (status, Json(body)).into_response()
    }
}
