use serde::{Deserialize, Serialize};
use crate::models::domain::ScoreBreakdown;

/// Response for the score endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub breakdown: ScoreBreakdown,
    pub explanation: String,
}

/// Response for the explain endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_uses_camel_case() {
        let body = serde_json::to_value(ErrorResponse {
            error: "Invalid candidate".to_string(),
            message: "candidate e1 has a null tag list".to_string(),
            status_code: 400,
        })
        .unwrap();

        assert_eq!(body["statusCode"], 400);
        assert!(body.get("status_code").is_none());
    }
}
