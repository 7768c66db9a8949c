//! API module for HTTP handlers and middleware.
//!
//! This module provides the HTTP API layer for the application,
//! including request handlers, middleware components, and the router.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
