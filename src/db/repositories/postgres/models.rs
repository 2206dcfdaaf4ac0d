use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::survey_responses;
use crate::api::{NewSurveyResponse, ResponseId, SurveyResponse};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = survey_responses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ResponseRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub locality: String,
    pub waste_collected_daily: Option<String>,
    pub segregate_waste: Option<String>,
    pub clean_drains: Option<String>,
    pub aware_rrr: Option<String>,
    pub used_public_toilet: Option<String>,
    pub clean_public_toilet: Option<String>,
    pub aware_ct_location: Option<String>,
    pub cleanliness_neighborhood: Option<String>,
    pub cleanliness_city: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert row; id and timestamps are assigned by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = survey_responses)]
pub struct NewResponseRow {
    pub name: String,
    pub email: String,
    pub locality: String,
    pub waste_collected_daily: Option<String>,
    pub segregate_waste: Option<String>,
    pub clean_drains: Option<String>,
    pub aware_rrr: Option<String>,
    pub used_public_toilet: Option<String>,
    pub clean_public_toilet: Option<String>,
    pub aware_ct_location: Option<String>,
    pub cleanliness_neighborhood: Option<String>,
    pub cleanliness_city: Option<String>,
}

impl NewResponseRow {
    /// Build an insert row from a validated submission.
    ///
    /// Callers must have checked required fields already; absent required
    /// values would otherwise be persisted as empty strings.
    pub fn from_submission(new_response: &NewSurveyResponse) -> Self {
        Self {
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
        }
    }
}

impl From<ResponseRow> for SurveyResponse {
    fn from(row: ResponseRow) -> Self {
        SurveyResponse {
            id: ResponseId::new(row.id),
            name: row.name,
            email: row.email,
            locality: row.locality,
            waste_collected_daily: row.waste_collected_daily,
            segregate_waste: row.segregate_waste,
            clean_drains: row.clean_drains,
            aware_rrr: row.aware_rrr,
            used_public_toilet: row.used_public_toilet,
            clean_public_toilet: row.clean_public_toilet,
            aware_ct_location: row.aware_ct_location,
            cleanliness_neighborhood: row.cleanliness_neighborhood,
            cleanliness_city: row.cleanliness_city,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
