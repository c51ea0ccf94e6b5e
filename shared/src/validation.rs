//! Input validation functions
//!
//! The engine assumes a validated `HealthInput`; collectors call
//! [`validate_health_input`] before handing the record over. Range rules are
//! declared on the struct with the `validator` derive, while the numeric
//! checks below also reject NaN and infinities, which plain range rules let
//! through.

use crate::models::HealthInput;
use serde::Serialize;
use validator::Validate;

/// Validate age in whole years
pub fn validate_age(age: u32) -> Result<(), String> {
    if age < 1 {
        return Err("Age must be at least 1 year".to_string());
    }
    if age > 150 {
        return Err("Age cannot exceed 150 years".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate nightly sleep duration
pub fn validate_sleep_hours(hours: f64) -> Result<(), String> {
    if !hours.is_finite() {
        return Err("Sleep must be a valid number".to_string());
    }
    if !(0.0..=24.0).contains(&hours) {
        return Err("Sleep must be between 0 and 24 hours".to_string());
    }
    Ok(())
}

/// Validate the TDEE activity multiplier
pub fn validate_activity_multiplier(multiplier: f64) -> Result<(), String> {
    if !multiplier.is_finite() {
        return Err("Activity level must be a valid number".to_string());
    }
    if !(1.0..=2.5).contains(&multiplier) {
        return Err("Activity level must be between 1.0 and 2.5".to_string());
    }
    Ok(())
}

/// Validate an optional body measurement or lab value; absent is fine
pub fn validate_measurement(value: Option<f64>) -> Result<(), String> {
    match value {
        Some(v) if !v.is_finite() => Err("Must be a valid number".to_string()),
        Some(v) if v <= 0.0 => Err("Must be greater than zero".to_string()),
        _ => Ok(()),
    }
}

/// Validate a questionnaire ordinal (diet, stress, smoking, alcohol)
pub fn validate_ordinal(value: u8, min: u8, max: u8) -> Result<(), String> {
    if !(min..=max).contains(&value) {
        return Err(format!("must be between {} and {}", min, max));
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Fields in questionnaire order; used to sort reported errors
const FIELD_ORDER: &[&str] = &[
    "age",
    "gender",
    "height",
    "weight",
    "waist",
    "neck",
    "blood_pressure_sys",
    "blood_pressure_dia",
    "cholesterol",
    "blood_sugar",
    "activity_level",
    "exercise_freq",
    "diet_quality",
    "sleep",
    "water_intake",
    "stress_level",
    "smoking",
    "alcohol",
    "family_heart",
    "family_hypertension",
    "family_diabetes",
    "health_goal",
];

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "age" => "Age",
        "gender" => "Gender",
        "height" => "Height",
        "weight" => "Weight",
        "waist" => "Waist Circumference",
        "neck" => "Neck Circumference",
        "blood_pressure_sys" | "bloodPressureSys" => "Systolic Blood Pressure",
        "blood_pressure_dia" | "bloodPressureDia" => "Diastolic Blood Pressure",
        "cholesterol" => "Total Cholesterol",
        "blood_sugar" | "bloodSugar" => "Fasting Blood Sugar",
        "activity_level" | "activityLevel" => "Activity Level",
        "exercise_freq" | "exerciseFreq" => "Exercise Frequency",
        "diet_quality" | "dietQuality" => "Diet Quality",
        "sleep" => "Sleep",
        "water_intake" | "waterIntake" => "Water Intake",
        "stress_level" | "stressLevel" => "Stress Level",
        "smoking" => "Smoking",
        "alcohol" => "Alcohol",
        "family_heart" | "familyHeart" => "Family History of Heart Disease",
        "family_hypertension" | "familyHypertension" => "Family History of Hypertension",
        "family_diabetes" | "familyDiabetes" => "Family History of Diabetes",
        "health_goal" | "healthGoal" => "Health Goal",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

fn field_position(field: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|f| *f == field)
        .unwrap_or(FIELD_ORDER.len())
}

fn range_message(err: &validator::ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }
    let min = err.params.get("min").map(|v| v.to_string());
    let max = err.params.get("max").map(|v| v.to_string());
    match (min, max) {
        (Some(min), Some(max)) => format!("must be between {} and {}", min, max),
        (Some(min), None) => format!("must be at least {}", min),
        (None, Some(max)) => format!("must be at most {}", max),
        (None, None) => "is invalid".to_string(),
    }
}

/// Validate a complete questionnaire, collecting every failing field.
///
/// Errors are returned in questionnaire order, at most one per field.
pub fn validate_health_input(input: &HealthInput) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let checks: [(&str, Result<(), String>); 15] = [
        ("age", validate_age(input.age)),
        ("height", validate_height_cm(input.height)),
        ("weight", validate_weight(input.weight)),
        ("waist", validate_measurement(input.waist)),
        ("neck", validate_measurement(input.neck)),
        ("blood_pressure_sys", validate_measurement(input.blood_pressure_sys)),
        ("blood_pressure_dia", validate_measurement(input.blood_pressure_dia)),
        ("cholesterol", validate_measurement(input.cholesterol)),
        ("blood_sugar", validate_measurement(input.blood_sugar)),
        ("activity_level", validate_activity_multiplier(input.activity_level)),
        ("diet_quality", validate_ordinal(input.diet_quality, 1, 4)),
        ("sleep", validate_sleep_hours(input.sleep)),
        ("stress_level", validate_ordinal(input.stress_level, 1, 4)),
        ("smoking", validate_ordinal(input.smoking, 0, 3)),
        ("alcohol", validate_ordinal(input.alcohol, 0, 10)),
    ];
    for (field, result) in checks {
        if let Err(message) = result {
            errors.push(ValidationError::new(field, &message));
        }
    }

    if let Err(derived) = input.validate() {
        for (field, field_errors) in derived.field_errors() {
            let field = field.to_string();
            if errors.iter().any(|e| e.field == field) {
                continue;
            }
            if let Some(first) = field_errors.first() {
                errors.push(ValidationError::new(&field, &range_message(first)));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        errors.sort_by_key(|e| field_position(&e.field));
        Err(errors)
    }
}
