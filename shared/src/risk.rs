//! Cardiovascular and diabetes risk models
//!
//! Both models add up weighted points from threshold tiers, divide by a fixed
//! normalizer and scale to a clamped 0-100 percentage. The contributing
//! factor list is built separately by re-checking the same thresholds, so a
//! factor only appears when its tier actually adds points.

use crate::bands::{first_match, RISK_BANDS};
use crate::models::HealthInput;
use crate::weights::{tier_points, CardiovascularWeights, DiabetesWeights, Tier};
use serde::{Deserialize, Serialize};

/// Risk band label and display color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCategory {
    pub level: String,
    pub color: String,
}

/// Risk percentage with its band and the factors behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// 0-100
    pub risk: f64,
    pub category: RiskCategory,
    pub factors: Vec<String>,
}

/// Map a risk percentage onto the five-tier risk bands
pub fn categorize_risk(risk: f64) -> RiskCategory {
    let label = first_match(risk, &RISK_BANDS);
    RiskCategory {
        level: label.name.to_string(),
        color: label.color.to_string(),
    }
}

fn to_percentage(points: f64, normalizer: f64) -> f64 {
    (points / normalizer * 100.0).clamp(0.0, 100.0)
}

/// Lowest threshold at which a tier list starts adding risk
fn risk_threshold(tiers: &[Tier]) -> Option<f64> {
    tiers
        .iter()
        .filter(|t| t.points > 0.0)
        .map(|t| t.at_least)
        .reduce(f64::min)
}

/// Lowest threshold at which a tier list starts protecting
fn protective_threshold(tiers: &[Tier]) -> Option<f64> {
    tiers
        .iter()
        .filter(|t| t.points < 0.0)
        .map(|t| t.at_least)
        .reduce(f64::min)
}

fn reaches(value: f64, tiers: &[Tier]) -> bool {
    risk_threshold(tiers).is_some_and(|threshold| value >= threshold)
}

fn falls_short(value: f64, tiers: &[Tier]) -> bool {
    protective_threshold(tiers).is_some_and(|threshold| value < threshold)
}

// ============================================================================
// Cardiovascular
// ============================================================================

/// Raw cardiovascular point score before normalization
pub fn cardiovascular_points(input: &HealthInput, bmi: f64, weights: &CardiovascularWeights) -> f64 {
    let mut points = tier_points(f64::from(input.age), &weights.age);
    points += tier_points(bmi, &weights.bmi);
    points += f64::from(input.smoking) * weights.smoking_per_level;
    if let Some(systolic) = input.blood_pressure_sys {
        points += tier_points(systolic, &weights.systolic);
    }
    if let Some(cholesterol) = input.cholesterol {
        points += tier_points(cholesterol, &weights.cholesterol);
    }
    points += tier_points(f64::from(input.exercise_freq), &weights.exercise);
    if input.family_heart {
        points += weights.family_heart;
    }
    if input.family_hypertension {
        points += weights.family_hypertension;
    }
    points += f64::from(input.stress_level) * weights.stress_per_level;
    points
}

fn cardiovascular_factors(input: &HealthInput, bmi: f64, weights: &CardiovascularWeights) -> Vec<String> {
    let mut factors = Vec::new();

    if reaches(f64::from(input.age), &weights.age) {
        factors.push(format!("Age ({} years)", input.age));
    }
    if reaches(bmi, &weights.bmi) {
        factors.push(format!("Elevated BMI ({:.1})", bmi));
    }
    if input.smoking > 0 {
        factors.push("Smoking".to_string());
    }
    if let Some(systolic) = input.blood_pressure_sys {
        if reaches(systolic, &weights.systolic) {
            factors.push(format!("Elevated blood pressure ({:.0} mmHg)", systolic));
        }
    }
    if let Some(cholesterol) = input.cholesterol {
        if reaches(cholesterol, &weights.cholesterol) {
            factors.push(format!("High cholesterol ({:.0} mg/dL)", cholesterol));
        }
    }
    if falls_short(f64::from(input.exercise_freq), &weights.exercise) {
        factors.push("Low physical activity".to_string());
    }
    if input.family_heart {
        factors.push("Family history of heart disease".to_string());
    }
    if input.family_hypertension {
        factors.push("Family history of hypertension".to_string());
    }
    if input.stress_level >= 3 {
        factors.push("High stress levels".to_string());
    }

    factors
}

/// Estimate cardiovascular risk
pub fn cardiovascular_risk(input: &HealthInput, bmi: f64, weights: &CardiovascularWeights) -> RiskAssessment {
    let risk = to_percentage(cardiovascular_points(input, bmi, weights), weights.normalizer);
    RiskAssessment {
        risk,
        category: categorize_risk(risk),
        factors: cardiovascular_factors(input, bmi, weights),
    }
}

// ============================================================================
// Diabetes
// ============================================================================

fn waist_over_threshold(input: &HealthInput) -> bool {
    input
        .waist
        .is_some_and(|waist| waist > input.gender.waist_risk_threshold_cm())
}

/// Raw diabetes point score before normalization
pub fn diabetes_points(input: &HealthInput, bmi: f64, weights: &DiabetesWeights) -> f64 {
    let mut points = tier_points(bmi, &weights.bmi);
    if waist_over_threshold(input) {
        points += weights.waist_over_threshold;
    }
    points += tier_points(f64::from(input.age), &weights.age);
    if input.family_diabetes {
        points += weights.family_diabetes;
    }
    if let Some(sugar) = input.blood_sugar {
        points += tier_points(sugar, &weights.blood_sugar);
    }
    points += tier_points(f64::from(input.exercise_freq), &weights.exercise);
    points += f64::from(input.diet_quality.saturating_sub(1)) * weights.diet_per_level;
    points
}

fn diabetes_factors(input: &HealthInput, bmi: f64, weights: &DiabetesWeights) -> Vec<String> {
    let mut factors = Vec::new();

    if reaches(bmi, &weights.bmi) {
        factors.push(format!("Elevated BMI ({:.1})", bmi));
    }
    if waist_over_threshold(input) {
        factors.push(format!(
            "Waist circumference above {:.0} cm",
            input.gender.waist_risk_threshold_cm()
        ));
    }
    if reaches(f64::from(input.age), &weights.age) {
        factors.push(format!("Age ({} years)", input.age));
    }
    if input.family_diabetes {
        factors.push("Family history of diabetes".to_string());
    }
    if let Some(sugar) = input.blood_sugar {
        if reaches(sugar, &weights.blood_sugar) {
            factors.push(format!("Elevated fasting blood sugar ({:.0} mg/dL)", sugar));
        }
    }
    if falls_short(f64::from(input.exercise_freq), &weights.exercise) {
        factors.push("Low physical activity".to_string());
    }
    if input.diet_quality <= 2 {
        factors.push("Poor diet quality".to_string());
    }

    factors
}

/// Estimate type 2 diabetes risk
pub fn diabetes_risk(input: &HealthInput, bmi: f64, weights: &DiabetesWeights) -> RiskAssessment {
    let risk = to_percentage(diabetes_points(input, bmi, weights), weights.normalizer);
    RiskAssessment {
        risk,
        category: categorize_risk(risk),
        factors: diabetes_factors(input, bmi, weights),
    }
}
