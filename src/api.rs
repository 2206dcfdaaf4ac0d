//! Domain types for survey responses.
//!
//! These types are shared by the repository layer and the HTTP API.
//! All types derive Serialize/Deserialize; wire names are camelCase to
//! match the survey frontend's payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Survey response identifier (database primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ResponseId(pub i64);

impl ResponseId {
    pub fn new(value: i64) -> Self {
        ResponseId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

/// One persisted survey response.
///
/// `name`, `email` and `locality` are always present for a stored record;
/// the nine answer fields are free-text and optional. Records are immutable
/// once created, so `updated_at` equals `created_at` in practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub id: ResponseId,
    pub name: String,
    pub email: String,
    pub locality: String,
    pub waste_collected_daily: Option<String>,
    pub segregate_waste: Option<String>,
    pub clean_drains: Option<String>,
    #[serde(rename = "awareRRR")]
    pub aware_rrr: Option<String>,
    pub used_public_toilet: Option<String>,
    pub clean_public_toilet: Option<String>,
    #[serde(rename = "awareCTLocation")]
    pub aware_ct_location: Option<String>,
    pub cleanliness_neighborhood: Option<String>,
    pub cleanliness_city: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Submission payload for a new survey response.
///
/// Every field is optional at the deserialization boundary; the repository
/// rejects submissions whose required fields are missing. Unrecognized
/// payload fields are ignored rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSurveyResponse {
    pub name: Option<String>,
    pub email: Option<String>,
    pub locality: Option<String>,
    pub waste_collected_daily: Option<String>,
    pub segregate_waste: Option<String>,
    pub clean_drains: Option<String>,
    #[serde(rename = "awareRRR")]
    pub aware_rrr: Option<String>,
    pub used_public_toilet: Option<String>,
    pub clean_public_toilet: Option<String>,
    #[serde(rename = "awareCTLocation")]
    pub aware_ct_location: Option<String>,
    pub cleanliness_neighborhood: Option<String>,
    pub cleanliness_city: Option<String>,
}

impl NewSurveyResponse {
    /// Names of the required fields that are absent from this submission.
    ///
    /// Empty when the submission is storable.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.email.is_none() {
            missing.push("email");
        }
        if self.locality.is_none() {
            missing.push("locality");
        }
        missing
    }
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
