//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware, routing::get};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;

use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::config::settings::ServerConfig;

/// Creates the application router with all routes and middleware.
///
/// # Routes
/// - `GET /` - Welcome message
/// - `GET /api/v1/health` - Health check
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first): panic recovery wraps everything, then the request ID is
/// assigned, then logging (which needs the ID), and the request timeout
/// sits closest to the handlers so timed-out requests still get logged.
pub fn create_router(config: &ServerConfig) -> Router {
    let api_v1 = Router::new().route("/health", get(handlers::health::health_check));

    Router::new()
        .route("/", get(handlers::root::welcome))
        .nest("/api/v1", api_v1)
        .layer(TimeoutLayer::new(config.read_timeout))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CatchPanicLayer::new())
}
