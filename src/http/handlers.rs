//! HTTP handlers for the survey API.
//!
//! Each handler corresponds to one endpoint and delegates to the service
//! layer; store failures are mapped to HTTP statuses in [`super::error`].

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{ExportQuery, HealthResponse, NewSurveyResponse, SubmitResponse, SurveyResponse};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::services::csv_export;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// File name offered for the CSV download.
const EXPORT_FILE_NAME: &str = "survey_data.csv";

/// GET /health
///
/// Health check endpoint to verify the service is running and the database
/// is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

/// POST /submit
///
/// Store one survey submission. Unknown payload fields are ignored.
pub async fn submit_response(
    State(state): State<AppState>,
    Json(submission): Json<NewSurveyResponse>,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    let record = db_services::store_response(state.repository.as_ref(), &submission).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "Response submitted successfully".to_string(),
            data: record,
        }),
    ))
}

/// GET /data
///
/// List every stored response, unfiltered and unpaginated.
pub async fn list_responses(
    State(state): State<AppState>,
) -> HandlerResult<Vec<SurveyResponse>> {
    let responses = db_services::list_responses(state.repository.as_ref()).await?;
    Ok(Json(responses))
}

/// GET /export?adminToken=TOKEN
///
/// Export every stored response as a CSV file download. The token must
/// match the configured secret byte-for-byte; with no secret configured,
/// every request is denied. The store is only read after the token check.
pub async fn export_responses(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let authorized = matches!(
        (state.admin_token.as_deref(), query.admin_token.as_deref()),
        (Some(expected), Some(provided)) if expected == provided
    );
    if !authorized {
        return Err(AppError::Forbidden("Access denied".to_string()));
    }

    let responses = db_services::list_responses(state.repository.as_ref()).await?;
    if responses.is_empty() {
        return Err(AppError::NotFound(
            "No data available for export".to_string(),
        ));
    }

    let csv = csv_export::responses_to_csv(&responses);
    let disposition = format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}
