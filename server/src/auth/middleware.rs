//! Authentication and Access Middleware

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::future::Future;
use std::pin::Pin;

use super::error::AuthError;
use super::token::role_from_token;
use crate::api::AppState;
use crate::permissions::{Permission, Role, RoleLevel};

/// Caller's role, injected into request extensions by [`require_auth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRole {
    pub role: Role,
}

/// Access an endpoint demands beyond authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRequirement {
    Permission(Permission),
    Level(RoleLevel),
}

/// Middleware to require authentication.
///
/// Extracts the Bearer token from the Authorization header, resolves the role
/// it names, and injects [`AuthRole`] into request extensions.
///
/// # Usage
///
/// ```ignore
/// Router::new()
///     .route("/protected", get(handler))
///     .layer(axum::middleware::from_fn(require_auth))
/// ```
pub async fn require_auth(mut request: Request, next: Next) -> Result<Response, AuthError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingAuthHeader)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidAuthHeader)?;

    let role = role_from_token(token)?;
    tracing::debug!(%role, "Request authenticated");

    request.extensions_mut().insert(AuthRole { role });

    Ok(next.run(request).await)
}

/// Attach an [`AccessRequirement`] for [`enforce_access`] to check.
///
/// Layer this outside `enforce_access`, the same way
/// `from_fn(require_auth)` is layered outside both.
pub fn with_requirement(
    requirement: AccessRequirement,
) -> impl Fn(Request, Next) -> Pin<Box<dyn Future<Output = Response> + Send>>
       + Clone
       + Send
       + 'static {
    move |mut request: Request, next: Next| {
        request.extensions_mut().insert(requirement);
        Box::pin(async move { next.run(request).await })
    }
}

/// Middleware that rejects callers whose role does not meet the request's
/// [`AccessRequirement`]. A request without a requirement or without an
/// authenticated role is denied.
#[tracing::instrument(skip(state, request, next))]
pub async fn enforce_access(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(auth) = request.extensions().get::<AuthRole>().copied() else {
        return AuthError::MissingAuthHeader.into_response();
    };
    let Some(requirement) = request.extensions().get::<AccessRequirement>().copied() else {
        tracing::warn!(role = %auth.role, "No access requirement attached, denying");
        return crate::permissions::PermissionError::InsufficientLevel {
            role: auth.role,
            required: RoleLevel::MAX,
        }
        .into_response();
    };

    let decision = match requirement {
        AccessRequirement::Permission(permission) => {
            state.authority.require_permission(auth.role, permission)
        }
        AccessRequirement::Level(level) => state.authority.require_level(auth.role, level),
    };

    match decision {
        Ok(()) => next.run(request).await,
        Err(e) => {
            tracing::info!(role = %auth.role, ?requirement, "Access denied");
            e.into_response()
        }
    }
}

/// Extractor for the authenticated role in handlers behind [`require_auth`].
impl<S> FromRequestParts<S> for AuthRole
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Self>()
            .copied()
            .ok_or(AuthError::MissingAuthHeader)
    }
}
