//! In-memory repository implementation.
//!
//! Used for unit testing and local development without a database. Rows
//! live in a `RwLock`-guarded vector; ids are assigned from a counter
//! starting at 1, matching the serial column of the Postgres backend.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use crate::api::{NewSurveyResponse, ResponseId, SurveyResponse};
use crate::db::repository::{
    check_required_fields, RepositoryResult, ResponseRepository,
};

#[derive(Debug, Default)]
struct LocalStore {
    next_id: i64,
    responses: Vec<SurveyResponse>,
}

/// In-memory implementation of [`ResponseRepository`].
#[derive(Debug, Default)]
pub struct LocalRepository {
    store: RwLock<LocalStore>,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored responses.
    pub fn len(&self) -> usize {
        self.store.read().responses.len()
    }

    /// True when nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.store.read().responses.is_empty()
    }
}

#[async_trait]
impl ResponseRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn create_response(
        &self,
        new_response: &NewSurveyResponse,
    ) -> RepositoryResult<SurveyResponse> {
        check_required_fields(new_response)?;

        let now = Utc::now();
        let mut store = self.store.write();
        store.next_id += 1;

        // Required fields were checked above; unwrap_or_default keeps the
        // lock section free of error paths.
        let response = SurveyResponse {
            id: ResponseId::new(store.next_id),
            name: new_response.name.clone().unwrap_or_default(),
            email: new_response.email.clone().unwrap_or_default(),
            locality: new_response.locality.clone().unwrap_or_default(),
            waste_collected_daily: new_response.waste_collected_daily.clone(),
            segregate_waste: new_response.segregate_waste.clone(),
            clean_drains: new_response.clean_drains.clone(),
            aware_rrr: new_response.aware_rrr.clone(),
            used_public_toilet: new_response.used_public_toilet.clone(),
            clean_public_toilet: new_response.clean_public_toilet.clone(),
            aware_ct_location: new_response.aware_ct_location.clone(),
            cleanliness_neighborhood: new_response.cleanliness_neighborhood.clone(),
            cleanliness_city: new_response.cleanliness_city.clone(),
            created_at: now,
            updated_at: now,
        };

        store.responses.push(response.clone());
        Ok(response)
    }

    async fn list_responses(&self) -> RepositoryResult<Vec<SurveyResponse>> {
        Ok(self.store.read().responses.clone())
    }
}
