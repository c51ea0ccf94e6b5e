//! Error types for the health predictor

use crate::validation::ValidationError;
use thiserror::Error;

/// Errors raised while collecting or checking a questionnaire.
///
/// The scoring engine itself never fails; these come from the collector side.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssessmentError {
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("Questionnaire incomplete, missing: {}", .0.join(", "))]
    IncompleteSession(Vec<String>),

    #[error("Invalid answer for {question}: {message}")]
    InvalidAnswer { question: String, message: String },
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::user_message)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let err = AssessmentError::Validation(vec![
            ValidationError::new("height", "must be at least 50 cm"),
            ValidationError::new("weight", "must be at most 500 kg"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: Height: must be at least 50 cm; Weight: must be at most 500 kg"
        );
    }

    #[test]
    fn test_incomplete_message() {
        let err = AssessmentError::IncompleteSession(vec!["Age".into(), "Sleep".into()]);
        assert_eq!(err.to_string(), "Questionnaire incomplete, missing: Age, Sleep");
    }
}
