//! API Router and Application State
//!
//! Central routing configuration and shared state.

pub mod roles;

use axum::{
    http::{header, HeaderValue, Method},
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::{
    auth::{self, enforce_access, require_auth, with_requirement, AccessRequirement},
    config::Config,
    permissions::{Role, RoleAuthority},
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
    /// Role authority, built once at startup
    pub authority: RoleAuthority,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(config: Config, authority: RoleAuthority) -> Self {
        Self {
            config: Arc::new(config),
            authority,
        }
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    // Admin routes (requires auth + administrator level)
    let admin_routes = Router::new()
        .route("/role-table", get(roles::get_role_table))
        .layer(from_fn_with_state(state.clone(), enforce_access))
        .layer(from_fn(with_requirement(AccessRequirement::Level(
            Role::Admin.level(),
        ))))
        .layer(from_fn(require_auth));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Role catalog (read-only)
        .route("/api/roles", get(roles::list_roles))
        .route("/api/roles/{role_id}", get(roles::get_role))
        // Permission and level checks
        .nest("/api/auth", auth::router())
        .nest("/api/admin", admin_routes)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=31536000; includeSubDomains"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("default-src 'self'"),
        ))
        // State
        .with_state(state)
}

/// CORS restricted to the configured origins. Unparseable origins are skipped;
/// a `*` entry allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origin_header_values(origins))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(std::time::Duration::from_secs(3600))
}

fn origin_header_values(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    /// Service status
    status: &'static str,
    /// Server version
    version: &'static str,
}

/// Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
