//! Middleware components for request processing.
//!
//! This module contains middleware for request ID tracking and
//! request/response logging. Panic recovery and request timeouts come
//! from `tower-http` layers wired up in the router.

mod logging;
mod request_id;

pub use logging::logging_middleware;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
