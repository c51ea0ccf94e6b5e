//! Health Predictor Shared Library
//!
//! The scoring engine, recommendation rules, questionnaire model and
//! validation used by both the HTTP backend and the WASM bindings.
//! Everything in this crate is pure: no I/O, no logging, no global state.

pub mod bands;
pub mod engine;
pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod recommendations;
pub mod risk;
pub mod samples;
pub mod scores;
pub mod session;
pub mod validation;
pub mod weights;

// Re-export commonly used items
pub use engine::{analyze, analyze_with, evaluate, evaluate_with, AssessmentResult, HealthReport};
pub use errors::AssessmentError;
pub use health_metrics::{calculate_metrics, HealthMetrics, MacroTargets};
pub use models::{Gender, HealthGoal, HealthInput};
pub use recommendations::{recommend, referrals, Priority, Recommendation, RecommendationSet};
pub use risk::{RiskAssessment, RiskCategory};
pub use scores::HealthCategory;
pub use session::{Answer, AssessmentSession, Question};
pub use validation::{validate_health_input, ValidationError};
pub use weights::ScoringConfig;
