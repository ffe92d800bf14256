use serde::{Deserialize, Serialize};
use crate::models::domain::{Competitor, DrawSummary, Pairing, PairingMode};

/// Response for the draw endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawResponse {
    #[serde(rename = "drawId")]
    pub draw_id: String,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub mode: PairingMode,
    pub pairs: Vec<Pairing>,
    pub leftovers: Vec<Competitor>,
    #[serde(rename = "excludedFronts")]
    pub excluded_fronts: Vec<Competitor>,
    pub summary: DrawSummary,
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

impl ErrorResponse {
    pub fn bad_request(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            status_code: 400,
        }
    }
}
