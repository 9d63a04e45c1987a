//! Authentication and Authorization
//!
//! Resolves the caller's role from its Bearer token and gates routes on the
//! role authority.

mod error;
mod handlers;
mod middleware;
pub mod token;

use axum::{middleware as axum_middleware, routing::get, Router};

use crate::api::AppState;

pub use error::{AuthError, AuthResult, ErrorResponse};
pub use middleware::{enforce_access, require_auth, with_requirement, AccessRequirement, AuthRole};

/// Create authorization router.
///
/// Public routes:
/// - GET /check-permission - Does a role grant a permission
/// - GET /check-role-level - Does a role meet a minimum level
///
/// Protected routes (auth required):
/// - GET /me - Caller's role and grants
pub fn router() -> Router<AppState> {
    let public_routes = Router::new()
        .route("/check-permission", get(handlers::check_permission))
        .route("/check-role-level", get(handlers::check_role_level));

    let protected_routes = Router::new()
        .route("/me", get(handlers::get_me))
        .layer(axum_middleware::from_fn(require_auth));

    public_routes.merge(protected_routes)
}
