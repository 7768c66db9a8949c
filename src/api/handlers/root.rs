//! Root endpoint handler.

use axum::response::Json;
use serde::{Deserialize, Serialize};

/// Welcome message returned at the service root.
#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    /// Human-readable greeting
    pub message: String,
    /// Running application version
    pub version: String,
}

/// Root endpoint.
///
/// # Responses
/// - `200 OK` - Welcome message and version
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to User Management API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_welcome_payload() {
        let Json(body) = welcome().await;
        assert_eq!(body.message, "Welcome to User Management API");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_welcome_serialization() {
        let response = WelcomeResponse {
            message: "Welcome to User Management API".to_string(),
            version: "1.0.0".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Welcome to User Management API");
        assert_eq!(json["version"], "1.0.0");
    }
}
