//! Business logic services
//!
//! Services sit between the HTTP handlers and the scoring engine.

pub mod assessment;

pub use assessment::{AssessmentResponse, AssessmentService, SampleList};
