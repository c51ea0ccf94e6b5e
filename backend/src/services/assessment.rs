//! Assessment service
//!
//! Validates questionnaires, runs the scoring engine with the deployment's
//! weights and wraps the result in a response envelope.

use crate::error::ApiError;
use chrono::{DateTime, Utc};
use health_predictor_shared::{
    analyze_with, evaluate_with, recommend, samples, validate_health_input, AssessmentResult,
    HealthInput, HealthReport, RecommendationSet, ScoringConfig,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// A completed assessment as returned to API clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub result: AssessmentResult,
}

/// Names of the built-in sample profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleList {
    pub samples: Vec<String>,
}

/// Assessment service
pub struct AssessmentService;

impl AssessmentService {
    fn validate(input: &HealthInput) -> Result<(), ApiError> {
        validate_health_input(input).map_err(|errors| {
            debug!(
                invalid_fields = errors.len(),
                first_field = errors.first().map(|e| e.field.as_str()).unwrap_or_default(),
                "Rejected questionnaire"
            );
            ApiError::Validation(errors)
        })
    }

    /// Full assessment: metrics, scores and recommendations
    pub fn assess(input: &HealthInput, scoring: &ScoringConfig) -> Result<AssessmentResponse, ApiError> {
        Self::validate(input)?;

        let result = analyze_with(input, scoring);
        let response = AssessmentResponse {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            result,
        };

        info!(
            assessment_id = %response.id,
            overall_score = response.result.report.overall_score,
            category = %response.result.report.category.name,
            cardiovascular_risk = response.result.report.cardiovascular_risk.risk,
            diabetes_risk = response.result.report.diabetes_risk.risk,
            "Assessment completed"
        );

        Ok(response)
    }

    /// Scores only
    pub fn report(input: &HealthInput, scoring: &ScoringConfig) -> Result<HealthReport, ApiError> {
        Self::validate(input)?;
        let report = evaluate_with(input, scoring);
        debug!(overall_score = report.overall_score, "Report generated");
        Ok(report)
    }

    /// Recommendations only; the report they depend on is computed internally
    pub fn recommendations(
        input: &HealthInput,
        scoring: &ScoringConfig,
    ) -> Result<RecommendationSet, ApiError> {
        Self::validate(input)?;
        let report = evaluate_with(input, scoring);
        let set = recommend(input, &report);
        debug!(
            nutrition = set.nutrition.len(),
            exercise = set.exercise.len(),
            lifestyle = set.lifestyle.len(),
            "Recommendations generated"
        );
        Ok(set)
    }

    pub fn sample_names() -> SampleList {
        SampleList {
            samples: samples::SAMPLE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Assess one of the built-in sample profiles
    pub fn assess_sample(name: &str, scoring: &ScoringConfig) -> Result<AssessmentResponse, ApiError> {
        let input = samples::by_name(name)
            .ok_or_else(|| ApiError::NotFound(format!("Sample '{}' not found", name)))?;
        Self::assess(&input, scoring)
    }
}
