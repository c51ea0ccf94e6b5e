//! Reference questionnaires
//!
//! Two fixed profiles at opposite ends of the risk spectrum, used for demos
//! and as baselines in tests (`HealthInput { smoking: 2, ..low_risk() }`).

use crate::models::{Gender, HealthGoal, HealthInput};

/// Active 35-year-old non-smoker with good habits and normal vitals
pub fn low_risk() -> HealthInput {
    HealthInput {
        age: 35,
        gender: Gender::Male,
        height: 175.0,
        weight: 75.0,
        waist: None,
        neck: None,
        blood_pressure_sys: Some(115.0),
        blood_pressure_dia: Some(75.0),
        cholesterol: Some(180.0),
        blood_sugar: Some(85.0),
        activity_level: 1.55,
        exercise_freq: 5,
        diet_quality: 4,
        sleep: 7.5,
        water_intake: 8,
        stress_level: 1,
        smoking: 0,
        alcohol: 0,
        family_heart: false,
        family_hypertension: false,
        family_diabetes: false,
        health_goal: HealthGoal::Maintain,
    }
}

/// Sedentary 55-year-old heavy smoker with elevated vitals and family history
pub fn high_risk() -> HealthInput {
    HealthInput {
        age: 55,
        gender: Gender::Male,
        height: 175.0,
        weight: 105.0,
        waist: Some(110.0),
        neck: None,
        blood_pressure_sys: Some(155.0),
        blood_pressure_dia: Some(95.0),
        cholesterol: Some(260.0),
        blood_sugar: Some(115.0),
        activity_level: 1.2,
        exercise_freq: 0,
        diet_quality: 1,
        sleep: 5.0,
        water_intake: 3,
        stress_level: 4,
        smoking: 3,
        alcohol: 3,
        family_heart: true,
        family_hypertension: false,
        family_diabetes: true,
        health_goal: HealthGoal::LoseWeight,
    }
}

/// Names accepted by [`by_name`]
pub const SAMPLE_NAMES: [&str; 2] = ["low-risk", "high-risk"];

/// Look up a sample profile by name
pub fn by_name(name: &str) -> Option<HealthInput> {
    match name {
        "low-risk" => Some(low_risk()),
        "high-risk" => Some(high_risk()),
        _ => None,
    }
}
