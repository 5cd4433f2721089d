//! Top-level router configuration combining JSON and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Landing page (public)
//! - `/login`, `/register`, `/logout`, `/contact` - Account pages (public)
//! - `/settings`, `/data`, `/delete/{id}` - Entry management (session required)
//! - `GET  /health`      - Record store health check (public)
//! - `/static/*`         - Static assets
//! - `GET  /{name}`      - Short-name redirect (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Sessions** - Cookie sessions (PostgreSQL or in-memory store)
//! - **Authentication** - Session principal required on protected routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use crate::web::middleware::web_auth;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;
use tower_sessions::{SessionManagerLayer, SessionStore};

/// Constructs the application router with all routes and middleware.
///
/// Static single-segment routes take precedence over `/{name}`.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `session_layer` - session manager over the configured store
pub fn build_router<Store>(state: AppState, session_layer: SessionManagerLayer<Store>) -> Router
where
    Store: SessionStore + Clone,
{
    let web_protected = web::routes::protected_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), web_auth::layer),
    );

    Router::new()
        .merge(api::routes::public_routes())
        .merge(web_protected)
        .merge(web::routes::public_routes())
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .layer(session_layer)
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps [`build_router`] so `/settings/` and `/settings` route alike.
pub fn app_router<Store>(
    state: AppState,
    session_layer: SessionManagerLayer<Store>,
) -> NormalizePath<Router>
where
    Store: SessionStore + Clone,
{
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, session_layer))
}
