//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Shortening page (`index.html`)
//! - `GET  /admin`       - Catalog admin page (`admin.html`)
//! - `GET  /{code}`      - Short link redirect
//! - `GET  /health`      - Health check: storage, match queue
//! - `POST /api/shorten` - Create a short link (rate limited)
//! - `/api/admin/*`      - Catalog and link admin (HTTP Basic auth)
//! - `/static/*`         - Static assets, including `redirect.html`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on shortening
//! - **Authentication** - HTTP Basic on admin routes
//! - **Path normalization** - Trailing slash handling

use std::path::Path;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{admin_auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
/// - `static_dir` - directory holding `index.html`, `admin.html` and
///   `redirect.html`
pub fn app_router(state: AppState, behind_proxy: bool, static_dir: &Path) -> NormalizePath<Router> {
    let public_api = if behind_proxy {
        api::routes::public_routes().layer(rate_limit::proxied_layer())
    } else {
        api::routes::public_routes().layer(rate_limit::layer())
    };

    let admin_api = api::routes::admin_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        admin_auth::layer,
    ));

    let api_router = Router::new()
        .merge(public_api)
        .nest("/admin", admin_api);

    let router = Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/admin", ServeFile::new(static_dir.join("admin.html")))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
