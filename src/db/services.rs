//! Service layer for survey response storage.
//!
//! Thin async functions over the repository trait. Handlers call these
//! rather than the repository directly, so failures are logged in one
//! place and the storage backend stays swappable.

use crate::api::{NewSurveyResponse, SurveyResponse};
use crate::db::repository::{RepositoryResult, ResponseRepository};

/// Store one survey submission and return the persisted record.
pub async fn store_response(
    repo: &dyn ResponseRepository,
    new_response: &NewSurveyResponse,
) -> RepositoryResult<SurveyResponse> {
    match repo.create_response(new_response).await {
        Ok(response) => Ok(response),
        Err(e) => {
            log::error!("Failed to store survey response: {}", e);
            Err(e)
        }
    }
}

/// Fetch every stored response in insertion order.
pub async fn list_responses(
    repo: &dyn ResponseRepository,
) -> RepositoryResult<Vec<SurveyResponse>> {
    match repo.list_responses().await {
        Ok(responses) => Ok(responses),
        Err(e) => {
            log::error!("Failed to list survey responses: {}", e);
            Err(e)
        }
    }
}

/// Check that the backing store is reachable.
pub async fn health_check(repo: &dyn ResponseRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
