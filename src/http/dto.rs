//! Data Transfer Objects for the HTTP API.
//!
//! The domain types in [`crate::api`] already derive Serialize/Deserialize
//! and are used directly on the wire; this module adds the endpoint
//! envelopes and query types.

use serde::{Deserialize, Serialize};

pub use crate::api::{NewSurveyResponse, SurveyResponse};

/// Response body for a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Confirmation message
    pub message: String,
    /// The persisted record, including its assigned id
    pub data: SurveyResponse,
}

/// Query parameters for the export endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExportQuery {
    /// Admin token to compare against the configured secret
    #[serde(rename = "adminToken")]
    pub admin_token: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}
