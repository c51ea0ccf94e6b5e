//! Scoring weights
//!
//! Each sub-model gets its own weight struct so its coefficients can be tuned
//! and tested without touching the others. All structs implement `Default`
//! with the stock coefficients and use `#[serde(default)]`, so a config file
//! only needs to name the values it overrides.

use serde::{Deserialize, Serialize};

/// One threshold step: values at or above `at_least` earn `points`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub at_least: f64,
    pub points: f64,
}

impl Tier {
    pub const fn new(at_least: f64, points: f64) -> Self {
        Self { at_least, points }
    }
}

/// Points for the highest tier reached.
///
/// Tiers are checked in the order given, so list them from the highest
/// threshold down. A value below every tier scores zero.
pub fn tier_points(value: f64, tiers: &[Tier]) -> f64 {
    tiers
        .iter()
        .find(|tier| value >= tier.at_least)
        .map_or(0.0, |tier| tier.points)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardiovascularWeights {
    pub age: Vec<Tier>,
    pub bmi: Vec<Tier>,
    pub smoking_per_level: f64,
    pub systolic: Vec<Tier>,
    pub cholesterol: Vec<Tier>,
    /// Negative points: regular exercise is protective
    pub exercise: Vec<Tier>,
    pub family_heart: f64,
    pub family_hypertension: f64,
    pub stress_per_level: f64,
    /// Points that map to 100% risk
    pub normalizer: f64,
}

impl Default for CardiovascularWeights {
    fn default() -> Self {
        Self {
            age: vec![Tier::new(65.0, 3.0), Tier::new(55.0, 2.0), Tier::new(45.0, 1.0)],
            bmi: vec![Tier::new(30.0, 2.0), Tier::new(25.0, 1.0)],
            smoking_per_level: 2.5,
            systolic: vec![Tier::new(160.0, 3.0), Tier::new(140.0, 2.0), Tier::new(130.0, 1.0)],
            cholesterol: vec![Tier::new(240.0, 2.0), Tier::new(200.0, 1.0)],
            exercise: vec![Tier::new(5.0, -1.5), Tier::new(3.0, -1.0)],
            family_heart: 2.0,
            family_hypertension: 1.0,
            stress_per_level: 0.5,
            normalizer: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiabetesWeights {
    pub bmi: Vec<Tier>,
    /// Added when waist exceeds the gender-specific threshold
    pub waist_over_threshold: f64,
    pub age: Vec<Tier>,
    pub family_diabetes: f64,
    pub blood_sugar: Vec<Tier>,
    pub exercise: Vec<Tier>,
    /// Applied per diet-quality level above 1 (negative is protective)
    pub diet_per_level: f64,
    pub normalizer: f64,
}

impl Default for DiabetesWeights {
    fn default() -> Self {
        Self {
            bmi: vec![Tier::new(35.0, 3.0), Tier::new(30.0, 2.0), Tier::new(25.0, 1.0)],
            waist_over_threshold: 2.0,
            age: vec![Tier::new(60.0, 2.0), Tier::new(45.0, 1.0)],
            family_diabetes: 3.0,
            blood_sugar: vec![Tier::new(126.0, 4.0), Tier::new(100.0, 2.0)],
            exercise: vec![Tier::new(5.0, -1.5), Tier::new(3.0, -1.0)],
            diet_per_level: -0.5,
            normalizer: 14.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetabolicWeights {
    pub baseline: f64,
    /// Under 6 hours
    pub sleep_severe_deficit: f64,
    /// 6 to under 7 hours
    pub sleep_deficit: f64,
    /// Over 9 hours
    pub sleep_excess: f64,
    /// Per diet level relative to 2
    pub diet_per_level: f64,
    /// Per unit of activity multiplier above 1.2
    pub activity_per_unit: f64,
    /// Under 4 glasses
    pub water_low: f64,
    /// 4 to under 8 glasses
    pub water_moderate: f64,
    pub bmi_normal_bonus: f64,
    pub bmi_abnormal_penalty: f64,
    /// Per stress level above 1
    pub stress_per_level: f64,
    pub alcohol_per_level: f64,
    pub smoking_per_level: f64,
}

impl Default for MetabolicWeights {
    fn default() -> Self {
        Self {
            baseline: 100.0,
            sleep_severe_deficit: -15.0,
            sleep_deficit: -5.0,
            sleep_excess: -5.0,
            diet_per_level: 5.0,
            activity_per_unit: 20.0,
            water_low: -10.0,
            water_moderate: -5.0,
            bmi_normal_bonus: 5.0,
            bmi_abnormal_penalty: -10.0,
            stress_per_level: -5.0,
            alcohol_per_level: -3.0,
            smoking_per_level: -8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifestyleWeights {
    pub exercise_per_session: f64,
    pub exercise_cap: f64,
    pub diet_per_level: f64,
    /// 7-9 hours
    pub sleep_optimal: f64,
    /// 6-10 hours outside the optimal window
    pub sleep_adequate: f64,
    pub water_per_glass: f64,
    pub water_cap: f64,
    pub non_smoker: f64,
    pub alcohol_none: f64,
    pub alcohol_light: f64,
    pub stress_low: f64,
    pub stress_moderate: f64,
}

impl Default for LifestyleWeights {
    fn default() -> Self {
        Self {
            exercise_per_session: 5.0,
            exercise_cap: 25.0,
            diet_per_level: 5.0,
            sleep_optimal: 15.0,
            sleep_adequate: 8.0,
            water_per_glass: 1.25,
            water_cap: 10.0,
            non_smoker: 15.0,
            alcohol_none: 10.0,
            alcohol_light: 5.0,
            stress_low: 10.0,
            stress_moderate: 5.0,
        }
    }
}

/// Weights of the overall ensemble; they sum to 1.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnsembleWeights {
    pub metabolic: f64,
    pub cardiovascular: f64,
    pub diabetes: f64,
    pub lifestyle: f64,
}

impl Default for EnsembleWeights {
    fn default() -> Self {
        Self {
            metabolic: 0.35,
            cardiovascular: 0.25,
            diabetes: 0.20,
            lifestyle: 0.20,
        }
    }
}

/// Year adjustments applied to chronological age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiologicalAgeWeights {
    /// 5+ sessions per week
    pub exercise_frequent: f64,
    /// 3-4 sessions per week
    pub exercise_regular: f64,
    pub diet_excellent: f64,
    pub diet_good: f64,
    pub diet_poor: f64,
    pub sleep_optimal: f64,
    /// Under 6 hours
    pub sleep_short: f64,
    /// Indexed by smoking level 0..=3; higher levels use the last entry
    pub smoking: Vec<f64>,
    pub alcohol_abstinent: f64,
    pub bmi_normal: f64,
    pub stress_very_high: f64,
    pub stress_low: f64,
    pub hypertension: f64,
    pub hypertension_systolic: f64,
    /// No exercise at all
    pub sedentary: f64,
}

impl Default for BiologicalAgeWeights {
    fn default() -> Self {
        Self {
            exercise_frequent: -3.0,
            exercise_regular: -1.5,
            diet_excellent: -2.0,
            diet_good: -1.0,
            diet_poor: 2.0,
            sleep_optimal: -1.0,
            sleep_short: 2.0,
            smoking: vec![0.0, 3.0, 5.0, 8.0],
            alcohol_abstinent: -1.0,
            bmi_normal: -1.0,
            stress_very_high: 3.0,
            stress_low: -1.0,
            hypertension: 2.0,
            hypertension_systolic: 140.0,
            sedentary: 2.0,
        }
    }
}

/// Every sub-model's weights in one place
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub cardiovascular: CardiovascularWeights,
    pub diabetes: DiabetesWeights,
    pub metabolic: MetabolicWeights,
    pub lifestyle: LifestyleWeights,
    pub ensemble: EnsembleWeights,
    pub biological_age: BiologicalAgeWeights,
}
