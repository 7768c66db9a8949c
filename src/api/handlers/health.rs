//! Health check endpoint handler.
//!
//! Used by monitoring and load balancer health checks. The process only
//! serves traffic after its configuration resolved and validated, so a
//! responding process is a healthy one.

use axum::response::Json;
use serde::{Deserialize, Serialize};

/// Health check response structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: String,
}

/// Health check endpoint.
///
/// # Responses
/// - `200 OK` - Service is healthy
///
/// # Example Response
/// ```json
/// { "status": "healthy" }
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_reports_healthy() {
        let Json(body) = health_check().await;
        assert_eq!(body.status, "healthy");
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, "{\"status\":\"healthy\"}");
    }
}
