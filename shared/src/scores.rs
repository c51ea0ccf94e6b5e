//! Metabolic, lifestyle, overall and biological-age scoring

use crate::bands::{first_match, HEALTH_BANDS};
use crate::health_metrics::is_normal_bmi;
use crate::models::HealthInput;
use crate::weights::{BiologicalAgeWeights, EnsembleWeights, LifestyleWeights, MetabolicWeights};
use serde::{Deserialize, Serialize};

/// Recommended nightly sleep window in hours (inclusive)
pub const RECOMMENDED_SLEEP: (f64, f64) = (7.0, 9.0);

fn sleep_in_window(hours: f64) -> bool {
    (RECOMMENDED_SLEEP.0..=RECOMMENDED_SLEEP.1).contains(&hours)
}

/// Metabolic health score, 0-100
pub fn metabolic_score(input: &HealthInput, bmi: f64, weights: &MetabolicWeights) -> i64 {
    let mut score = weights.baseline;

    if input.sleep < 6.0 {
        score += weights.sleep_severe_deficit;
    } else if input.sleep < RECOMMENDED_SLEEP.0 {
        score += weights.sleep_deficit;
    } else if input.sleep > RECOMMENDED_SLEEP.1 {
        score += weights.sleep_excess;
    }

    score += (f64::from(input.diet_quality) - 2.0) * weights.diet_per_level;
    score += (input.activity_level - 1.2) * weights.activity_per_unit;

    if input.water_intake < 4 {
        score += weights.water_low;
    } else if input.water_intake < 8 {
        score += weights.water_moderate;
    }

    score += if is_normal_bmi(bmi) {
        weights.bmi_normal_bonus
    } else {
        weights.bmi_abnormal_penalty
    };

    score += (f64::from(input.stress_level) - 1.0) * weights.stress_per_level;
    score += f64::from(input.alcohol) * weights.alcohol_per_level;
    score += f64::from(input.smoking) * weights.smoking_per_level;

    score.clamp(0.0, 100.0).round() as i64
}

/// Lifestyle habits score, additive from zero and capped at 100
pub fn lifestyle_score(input: &HealthInput, weights: &LifestyleWeights) -> i64 {
    let mut score = (f64::from(input.exercise_freq) * weights.exercise_per_session).min(weights.exercise_cap);
    score += f64::from(input.diet_quality) * weights.diet_per_level;

    if sleep_in_window(input.sleep) {
        score += weights.sleep_optimal;
    } else if (6.0..=10.0).contains(&input.sleep) {
        score += weights.sleep_adequate;
    }

    score += (f64::from(input.water_intake) * weights.water_per_glass).min(weights.water_cap);

    if input.smoking == 0 {
        score += weights.non_smoker;
    }
    match input.alcohol {
        0 => score += weights.alcohol_none,
        1 => score += weights.alcohol_light,
        _ => {}
    }
    match input.stress_level {
        1 => score += weights.stress_low,
        2 => score += weights.stress_moderate,
        _ => {}
    }

    score.min(100.0).round() as i64
}

/// Health band for the overall score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCategory {
    pub name: String,
    pub description: String,
    pub color: String,
}

pub fn categorize_health(score: i64) -> HealthCategory {
    let label = first_match(score as f64, &HEALTH_BANDS);
    HealthCategory {
        name: label.name.to_string(),
        description: label.description.to_string(),
        color: label.color.to_string(),
    }
}

/// Weighted ensemble of the four sub-scores, rounded
pub fn overall_score(
    metabolic: i64,
    cardiovascular_risk: f64,
    diabetes_risk: f64,
    lifestyle: i64,
    weights: &EnsembleWeights,
) -> i64 {
    let score = metabolic as f64 * weights.metabolic
        + (100.0 - cardiovascular_risk) * weights.cardiovascular
        + (100.0 - diabetes_risk) * weights.diabetes
        + lifestyle as f64 * weights.lifestyle;
    score.round() as i64
}

/// Chronological age adjusted by lifestyle and biometric modifiers, rounded.
///
/// The result is not clamped: a very young respondent with only protective
/// habits gets an age below zero, and callers that display it should decide
/// how to present that.
pub fn biological_age(input: &HealthInput, bmi: f64, weights: &BiologicalAgeWeights) -> i64 {
    let mut age = f64::from(input.age);

    if input.exercise_freq >= 5 {
        age += weights.exercise_frequent;
    } else if input.exercise_freq >= 3 {
        age += weights.exercise_regular;
    }

    match input.diet_quality {
        4 => age += weights.diet_excellent,
        3 => age += weights.diet_good,
        1 => age += weights.diet_poor,
        _ => {}
    }

    if sleep_in_window(input.sleep) {
        age += weights.sleep_optimal;
    } else if input.sleep < 6.0 {
        age += weights.sleep_short;
    }

    let smoking_level = usize::from(input.smoking);
    if let Some(years) = weights
        .smoking
        .get(smoking_level)
        .or_else(|| weights.smoking.last())
    {
        age += years;
    }

    if input.alcohol == 0 {
        age += weights.alcohol_abstinent;
    }
    if is_normal_bmi(bmi) {
        age += weights.bmi_normal;
    }

    match input.stress_level {
        4 => age += weights.stress_very_high,
        1 => age += weights.stress_low,
        _ => {}
    }

    if input
        .blood_pressure_sys
        .is_some_and(|systolic| systolic >= weights.hypertension_systolic)
    {
        age += weights.hypertension;
    }
    if input.exercise_freq == 0 {
        age += weights.sedentary;
    }

    age.round() as i64
}
