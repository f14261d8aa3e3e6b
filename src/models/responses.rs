use crate::models::domain::Restaurant;
use serde::{Deserialize, Serialize};

/// Response for the recommend endpoint
///
/// The wrapper object shape is part of the wire contract and is also what
/// gets persisted to the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "restaurantRecommendation")]
    pub restaurant_recommendation: Restaurant,
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
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
