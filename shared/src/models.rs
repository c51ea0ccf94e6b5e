//! Questionnaire input model
//!
//! `HealthInput` is the flat record a form collector hands to the engine.
//! All measurements are stored in SI units (cm, kg) and the serialized
//! field names follow the questionnaire (`bloodPressureSys`, `exerciseFreq`).

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sex used by the physiological formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Waist circumference (cm) above which abdominal obesity adds diabetes risk
    pub fn waist_risk_threshold_cm(&self) -> f64 {
        match self {
            Gender::Male => 102.0,
            Gender::Female => 88.0,
        }
    }
}

/// Primary goal selected at the end of the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    LoseWeight,
    GainMuscle,
    Maintain,
    #[default]
    ImproveHealth,
}

impl HealthGoal {
    /// Multiplier applied to TDEE to get the daily calorie target
    pub fn calorie_factor(&self) -> f64 {
        match self {
            HealthGoal::LoseWeight => 0.85,
            HealthGoal::GainMuscle => 1.10,
            HealthGoal::Maintain | HealthGoal::ImproveHealth => 1.0,
        }
    }

    /// Protein / carbs / fat share of calories
    pub fn macro_ratios(&self) -> (f64, f64, f64) {
        match self {
            HealthGoal::LoseWeight => (0.35, 0.35, 0.30),
            HealthGoal::GainMuscle => (0.35, 0.45, 0.20),
            HealthGoal::Maintain | HealthGoal::ImproveHealth => (0.30, 0.40, 0.30),
        }
    }
}

/// One completed questionnaire.
///
/// Optional vitals (`waist`, `neck`, blood pressure, lab values) only affect
/// body-fat estimation and the risk bands that read them; a missing value
/// contributes no points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HealthInput {
    /// Age in years
    #[validate(range(min = 1, max = 150))]
    pub age: u32,
    pub gender: Gender,
    /// Height in centimeters
    #[validate(range(min = 50.0, max = 300.0))]
    pub height: f64,
    /// Weight in kilograms
    #[validate(range(min = 20.0, max = 500.0))]
    pub weight: f64,
    /// Waist circumference in centimeters
    #[serde(default)]
    #[validate(range(min = 20.0, max = 300.0))]
    pub waist: Option<f64>,
    /// Neck circumference in centimeters
    #[serde(default)]
    #[validate(range(min = 10.0, max = 100.0))]
    pub neck: Option<f64>,
    /// Systolic blood pressure in mmHg
    #[serde(default)]
    #[validate(range(min = 50.0, max = 300.0))]
    pub blood_pressure_sys: Option<f64>,
    /// Diastolic blood pressure in mmHg
    #[serde(default)]
    #[validate(range(min = 30.0, max = 200.0))]
    pub blood_pressure_dia: Option<f64>,
    /// Total cholesterol in mg/dL
    #[serde(default)]
    #[validate(range(min = 50.0, max = 600.0))]
    pub cholesterol: Option<f64>,
    /// Fasting blood sugar in mg/dL
    #[serde(default)]
    #[validate(range(min = 20.0, max = 600.0))]
    pub blood_sugar: Option<f64>,
    /// Activity multiplier (1.2 sedentary .. 2.2 athlete)
    #[validate(range(min = 1.0, max = 2.5))]
    pub activity_level: f64,
    /// Exercise sessions per week
    #[validate(range(max = 21))]
    pub exercise_freq: u32,
    /// 1 (poor) .. 4 (excellent)
    #[validate(range(min = 1, max = 4))]
    pub diet_quality: u8,
    /// Hours of sleep per night
    #[validate(range(min = 0.0, max = 24.0))]
    pub sleep: f64,
    /// Glasses of water per day
    #[validate(range(max = 40))]
    pub water_intake: u32,
    /// 1 (low) .. 4 (very high)
    #[validate(range(min = 1, max = 4))]
    pub stress_level: u8,
    /// 0 (never) .. 3 (heavy)
    #[validate(range(max = 3))]
    pub smoking: u8,
    /// 0 (none) and up
    #[validate(range(max = 10))]
    pub alcohol: u8,
    #[serde(default)]
    pub family_heart: bool,
    #[serde(default)]
    pub family_hypertension: bool,
    #[serde(default)]
    pub family_diabetes: bool,
    #[serde(default)]
    pub health_goal: HealthGoal,
}

impl HealthInput {
    /// Height in meters
    #[inline]
    pub fn height_m(&self) -> f64 {
        self.height / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_questionnaire_names() {
        let json = r#"{
            "age": 42,
            "gender": "female",
            "height": 165,
            "weight": 62.5,
            "waist": 78,
            "bloodPressureSys": 118,
            "activityLevel": 1.375,
            "exerciseFreq": 2,
            "dietQuality": 3,
            "sleep": 6.5,
            "waterIntake": 6,
            "stressLevel": 2,
            "smoking": 0,
            "alcohol": 1,
            "familyDiabetes": true,
            "healthGoal": "lose_weight"
        }"#;

        let input: HealthInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.waist, Some(78.0));
        assert_eq!(input.neck, None);
        assert_eq!(input.blood_pressure_sys, Some(118.0));
        assert!(input.family_diabetes);
        assert!(!input.family_heart);
        assert_eq!(input.health_goal, HealthGoal::LoseWeight);
    }

    #[test]
    fn test_missing_goal_defaults_to_improve_health() {
        let json = r#"{
            "age": 30, "gender": "male", "height": 180, "weight": 80,
            "activityLevel": 1.2, "exerciseFreq": 0, "dietQuality": 2,
            "sleep": 7, "waterIntake": 8, "stressLevel": 1,
            "smoking": 0, "alcohol": 0
        }"#;
        let input: HealthInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.health_goal, HealthGoal::ImproveHealth);
    }

    #[test]
    fn test_goal_tables() {
        assert_eq!(HealthGoal::LoseWeight.calorie_factor(), 0.85);
        assert_eq!(HealthGoal::GainMuscle.calorie_factor(), 1.10);
        assert_eq!(HealthGoal::Maintain.calorie_factor(), 1.0);
        assert_eq!(HealthGoal::GainMuscle.macro_ratios(), (0.35, 0.45, 0.20));
        assert_eq!(HealthGoal::ImproveHealth.macro_ratios(), (0.30, 0.40, 0.30));
    }

    #[test]
    fn test_waist_thresholds() {
        assert_eq!(Gender::Male.waist_risk_threshold_cm(), 102.0);
        assert_eq!(Gender::Female.waist_risk_threshold_cm(), 88.0);
    }
}
