//! Repository trait for survey response storage.
//!
//! The trait is the only seam between the HTTP/service layers and the
//! backing engine, so implementations are interchangeable and mockable.

mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{NewSurveyResponse, SurveyResponse};

/// Repository trait for survey response operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    /// Check that the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Insert a new survey response and return the persisted record.
    ///
    /// # Returns
    /// * `Ok(SurveyResponse)` - The stored record with assigned id and timestamps
    /// * `Err(RepositoryError::ValidationError)` - If name, email or locality is missing
    /// * `Err(RepositoryError)` - If the insert fails
    async fn create_response(
        &self,
        new_response: &NewSurveyResponse,
    ) -> RepositoryResult<SurveyResponse>;

    /// Fetch every stored response in insertion order.
    ///
    /// Returns an empty `Vec` (not an error) when nothing is stored.
    async fn list_responses(&self) -> RepositoryResult<Vec<SurveyResponse>>;
}

/// Reject a submission whose required fields are absent.
///
/// Shared by every repository implementation so the validation contract
/// does not depend on the backing engine.
pub(crate) fn check_required_fields(
    new_response: &NewSurveyResponse,
) -> RepositoryResult<()> {
    let missing = new_response.missing_required_fields();
    if missing.is_empty() {
        return Ok(());
    }

    Err(RepositoryError::validation_with_context(
        format!("Missing required fields: {}", missing.join(", ")),
        ErrorContext::new("create_response").with_details(missing.join(",")),
    ))
}
