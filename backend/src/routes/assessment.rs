//! Assessment API routes

use crate::error::ApiError;
use crate::services::{AssessmentResponse, AssessmentService, SampleList};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use health_predictor_shared::{HealthInput, HealthReport, RecommendationSet};

/// Create assessment routes
pub fn assessment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_assessment))
        .route("/report", post(create_report))
        .route("/recommendations", post(create_recommendations))
        .route("/samples", get(list_samples))
        .route("/samples/:name", get(get_sample))
}

/// POST /api/v1/assessments - Run a full assessment
async fn create_assessment(
    State(state): State<AppState>,
    payload: Result<Json<HealthInput>, JsonRejection>,
) -> Result<(StatusCode, Json<AssessmentResponse>), ApiError> {
    let Json(input) = payload?;
    let response = AssessmentService::assess(&input, state.scoring())?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/assessments/report - Scores only
async fn create_report(
    State(state): State<AppState>,
    payload: Result<Json<HealthInput>, JsonRejection>,
) -> Result<Json<HealthReport>, ApiError> {
    let Json(input) = payload?;
    Ok(Json(AssessmentService::report(&input, state.scoring())?))
}

/// POST /api/v1/assessments/recommendations - Recommendations only
async fn create_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<HealthInput>, JsonRejection>,
) -> Result<Json<RecommendationSet>, ApiError> {
    let Json(input) = payload?;
    Ok(Json(AssessmentService::recommendations(&input, state.scoring())?))
}

/// GET /api/v1/assessments/samples - List sample profiles
async fn list_samples() -> Json<SampleList> {
    Json(AssessmentService::sample_names())
}

/// GET /api/v1/assessments/samples/:name - Assess a sample profile
async fn get_sample(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    Ok(Json(AssessmentService::assess_sample(&name, state.scoring())?))
}
