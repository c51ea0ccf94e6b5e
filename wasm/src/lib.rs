//! Health Predictor WASM Module
//!
//! Runs the scoring engine in the browser. Structured data crosses the JS
//! boundary as JSON strings using the questionnaire's camelCase field names;
//! errors surface as string `JsValue`s.

use health_predictor_shared::health_metrics::{self, calculate_bmr_mifflin};
use health_predictor_shared::{
    analyze, evaluate, recommend, validate_health_input, Answer, AssessmentError,
    AssessmentSession, Gender, HealthInput, Question,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn parse_input(input_json: &str) -> Result<HealthInput, String> {
    let input: HealthInput =
        serde_json::from_str(input_json).map_err(|e| format!("Invalid questionnaire: {}", e))?;
    validate_health_input(&input).map_err(|errors| AssessmentError::Validation(errors).to_string())?;
    Ok(input)
}

fn evaluate_inner(input_json: &str) -> Result<String, String> {
    to_json(&evaluate(&parse_input(input_json)?))
}

fn recommend_inner(input_json: &str) -> Result<String, String> {
    let input = parse_input(input_json)?;
    to_json(&recommend(&input, &evaluate(&input)))
}

fn analyze_inner(input_json: &str) -> Result<String, String> {
    to_json(&analyze(&parse_input(input_json)?))
}

/// Score a questionnaire; returns `HealthReport` JSON
#[wasm_bindgen(js_name = evaluateJson)]
pub fn evaluate_json(input_json: &str) -> Result<String, JsValue> {
    evaluate_inner(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Recommendations for a questionnaire; returns `RecommendationSet` JSON
#[wasm_bindgen(js_name = recommendJson)]
pub fn recommend_json(input_json: &str) -> Result<String, JsValue> {
    recommend_inner(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Metrics, scores and recommendations in one call
#[wasm_bindgen(js_name = analyzeJson)]
pub fn analyze_json(input_json: &str) -> Result<String, JsValue> {
    analyze_inner(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    health_metrics::calculate_bmi(weight_kg, height_cm)
}

/// Calculate TDEE (Total Daily Energy Expenditure)
/// Uses Mifflin-St Jeor equation
#[wasm_bindgen]
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    is_male: bool,
    activity_multiplier: f64,
) -> f64 {
    let gender = if is_male { Gender::Male } else { Gender::Female };
    let bmr = calculate_bmr_mifflin(weight_kg, height_cm, age_years, gender);
    health_metrics::calculate_tdee(bmr, activity_multiplier)
}

/// Step-by-step questionnaire held by the page
#[wasm_bindgen]
#[derive(Default)]
pub struct Questionnaire {
    session: AssessmentSession,
}

#[wasm_bindgen]
impl Questionnaire {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Field name of the question at the cursor
    #[wasm_bindgen(js_name = currentQuestion)]
    pub fn current_question(&self) -> Option<String> {
        self.session.current().map(|q| q.field().to_string())
    }

    /// Display label of the question at the cursor
    #[wasm_bindgen(js_name = currentLabel)]
    pub fn current_label(&self) -> Option<String> {
        self.session.current().map(|q| q.label().to_string())
    }

    pub fn progress(&self) -> u8 {
        self.session.progress()
    }

    /// Record an answer given as JSON (`42`, `"male"`, `true`, `null` to skip)
    pub fn answer(&mut self, question: &str, value_json: &str) -> Result<(), JsValue> {
        self.answer_inner(question, value_json)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn advance(&mut self) -> Result<Option<String>, JsValue> {
        self.session
            .advance()
            .map(|q| q.map(|q| q.field().to_string()))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn back(&mut self) -> Option<String> {
        self.session.back().map(|q| q.field().to_string())
    }

    #[wasm_bindgen(js_name = isComplete)]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    /// Validated `HealthInput` JSON
    pub fn finish(&self) -> Result<String, JsValue> {
        self.finish_inner().map_err(|e| JsValue::from_str(&e))
    }

    /// Finish and run the full assessment
    pub fn analyze(&self) -> Result<String, JsValue> {
        self.analyze_inner().map_err(|e| JsValue::from_str(&e))
    }
}

impl Questionnaire {
    fn answer_inner(&mut self, question: &str, value_json: &str) -> Result<(), String> {
        let question: Question = question.parse().map_err(|e: AssessmentError| e.to_string())?;
        let answer: Answer =
            serde_json::from_str(value_json).map_err(|e| format!("Invalid answer: {}", e))?;
        self.session.answer(question, answer).map_err(|e| e.to_string())
    }

    fn finish_inner(&self) -> Result<String, String> {
        let input = self.session.finish().map_err(|e| e.to_string())?;
        to_json(&input)
    }

    fn analyze_inner(&self) -> Result<String, String> {
        let input = self.session.finish().map_err(|e| e.to_string())?;
        to_json(&analyze(&input))
    }
}
