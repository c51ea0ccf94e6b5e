//! Health metrics calculations module
//!
//! Provides the closed-form body metrics every score builds on: BMI, BMR,
//! TDEE, the healthy weight range, US Navy body-fat estimation and goal-based
//! macro targets.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: Formulas from peer-reviewed research
//! 3. **Explicit Absence**: Estimates that need optional measurements return `Option`

use crate::bands::{first_match, BMI_BANDS, FEMALE_BODY_FAT_BANDS, MALE_BODY_FAT_BANDS};
use crate::models::{Gender, HealthGoal, HealthInput};
use serde::{Deserialize, Serialize};

// ============================================================================
// BMI Calculations
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    SeverelyUnderweight,
    Underweight,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

/// Lower and upper BMI of the range the scores treat as healthy
pub const NORMAL_BMI_RANGE: (f64, f64) = (18.5, 24.9);

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    *first_match(bmi, &BMI_BANDS)
}

/// True when BMI falls inside [`NORMAL_BMI_RANGE`] (inclusive)
pub fn is_normal_bmi(bmi: f64) -> bool {
    (NORMAL_BMI_RANGE.0..=NORMAL_BMI_RANGE.1).contains(&bmi)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Weight range (kg) that keeps BMI inside [`NORMAL_BMI_RANGE`], rounded to 0.1 kg
pub fn ideal_weight_range_kg(height_cm: f64) -> (f64, f64) {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    (
        round1(NORMAL_BMI_RANGE.0 * height_m_sq),
        round1(NORMAL_BMI_RANGE.1 * height_m_sq),
    )
}

// ============================================================================
// BMR and TDEE Calculations
// ============================================================================

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// TDEE = BMR × Activity Multiplier
pub fn calculate_tdee(bmr: f64, activity_multiplier: f64) -> f64 {
    bmr * activity_multiplier
}

// ============================================================================
// Body Fat Estimation
// ============================================================================

/// Estimate body fat percentage with the US Navy circumference method.
///
/// Uses waist and neck only for both sexes; the female variant keeps its own
/// coefficients but does not take a hip measurement. Returns `None` when
/// either measurement is missing, when `waist <= neck` (the logarithm would be
/// undefined), or when the formula otherwise produces a non-finite value.
///
/// Results are clamped to 5-50% for men and 10-50% for women.
pub fn estimate_body_fat_navy(
    gender: Gender,
    height_cm: f64,
    waist_cm: Option<f64>,
    neck_cm: Option<f64>,
) -> Option<f64> {
    let (waist, neck) = (waist_cm?, neck_cm?);
    let girth = waist - neck;
    if girth <= 0.0 || height_cm <= 0.0 {
        return None;
    }

    let (a, b, c, min) = match gender {
        Gender::Male => (1.0324, 0.19077, 0.15456, 5.0),
        Gender::Female => (1.29579, 0.35004, 0.22100, 10.0),
    };
    let density = a - b * girth.log10() + c * height_cm.log10();
    if density <= 0.0 {
        return None;
    }
    let body_fat = 495.0 / density - 450.0;

    if !body_fat.is_finite() {
        return None;
    }
    Some(body_fat.clamp(min, 50.0))
}

/// Body fat category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    Essential,
    Athletic,
    Fitness,
    Average,
    Obese,
}

/// Classify body fat percentage
pub fn classify_body_fat(body_fat_percent: f64, gender: Gender) -> BodyFatCategory {
    let bands = match gender {
        Gender::Male => &MALE_BODY_FAT_BANDS,
        Gender::Female => &FEMALE_BODY_FAT_BANDS,
    };
    *first_match(body_fat_percent, bands)
}

// ============================================================================
// Macro Targets
// ============================================================================

/// Daily calorie and macronutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// kcal per day
    pub calories: i64,
    /// grams of protein
    pub protein: i64,
    /// grams of carbohydrate
    pub carbs: i64,
    /// grams of fat
    pub fats: i64,
}

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Calculate calorie and macro targets for a goal.
///
/// The calorie target is rounded first and the gram amounts are derived from
/// the rounded value.
pub fn calculate_macros(tdee: f64, goal: HealthGoal) -> MacroTargets {
    let calories = (tdee * goal.calorie_factor()).round();
    let (protein, carbs, fat) = goal.macro_ratios();

    MacroTargets {
        calories: calories as i64,
        protein: (calories * protein / KCAL_PER_GRAM_PROTEIN).round() as i64,
        carbs: (calories * carbs / KCAL_PER_GRAM_CARBS).round() as i64,
        fats: (calories * fat / KCAL_PER_GRAM_FAT).round() as i64,
    }
}

// ============================================================================
// Combined intermediates
// ============================================================================

/// Raw metrics handed to renderers alongside the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub tdee: f64,
    pub ideal_weight_range: (f64, f64),
    pub body_fat: Option<f64>,
    pub body_fat_category: Option<BodyFatCategory>,
    pub macros: MacroTargets,
}

/// Compute every body metric for one questionnaire
pub fn calculate_metrics(input: &HealthInput) -> HealthMetrics {
    let bmi = calculate_bmi(input.weight, input.height);
    let bmr = calculate_bmr_mifflin(input.weight, input.height, input.age, input.gender);
    let tdee = calculate_tdee(bmr, input.activity_level);
    let body_fat = estimate_body_fat_navy(input.gender, input.height, input.waist, input.neck);

    HealthMetrics {
        bmi,
        bmi_category: classify_bmi(bmi),
        bmr,
        tdee,
        ideal_weight_range: ideal_weight_range_kg(input.height),
        body_fat,
        body_fat_category: body_fat.map(|bf| classify_body_fat(bf, input.gender)),
        macros: calculate_macros(tdee, input.health_goal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    // =========================================================================
    // BMI Tests
    // =========================================================================

    #[test]
    fn test_bmi_calculation() {
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.857).abs() < 0.001);
    }

    #[test]
    fn test_bmi_categories() {
        assert_eq!(classify_bmi(15.0), BmiCategory::SeverelyUnderweight);
        assert_eq!(classify_bmi(17.0), BmiCategory::Underweight);
        assert_eq!(classify_bmi(18.5), BmiCategory::Normal);
        assert_eq!(classify_bmi(22.0), BmiCategory::Normal);
        assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(classify_bmi(32.0), BmiCategory::ObeseClass1);
        assert_eq!(classify_bmi(37.0), BmiCategory::ObeseClass2);
        assert_eq!(classify_bmi(42.0), BmiCategory::ObeseClass3);
    }

    #[test]
    fn test_ideal_weight_range() {
        // 1.75² = 3.0625 -> 56.65625 and 76.25625
        assert_eq!(ideal_weight_range_kg(175.0), (56.7, 76.3));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Heavier weight = higher BMI (same height)
        #[test]
        fn prop_bmi_increases_with_weight(
            weight1 in 50.0f64..100.0,
            weight2 in 100.0f64..150.0,
            height in 150.0f64..200.0
        ) {
            prop_assert!(calculate_bmi(weight2, height) > calculate_bmi(weight1, height));
        }

        /// Property: the midpoint of the ideal range has a normal BMI
        #[test]
        fn prop_ideal_range_midpoint_is_normal(height in 150.0f64..200.0) {
            let (min, max) = ideal_weight_range_kg(height);
            let bmi = calculate_bmi((min + max) / 2.0, height);
            prop_assert!(is_normal_bmi(bmi), "BMI {} at height {}", bmi, height);
        }
    }

    // =========================================================================
    // BMR/TDEE Tests
    // =========================================================================

    #[test]
    fn test_bmr_mifflin() {
        assert_eq!(calculate_bmr_mifflin(70.0, 180.0, 30, Gender::Male), 1680.0);
        assert_eq!(calculate_bmr_mifflin(70.0, 175.0, 30, Gender::Male), 1648.75);
        assert_eq!(calculate_bmr_mifflin(60.0, 165.0, 30, Gender::Female), 1320.25);
    }

    #[test]
    fn test_tdee_calculation() {
        let bmr = calculate_bmr_mifflin(70.0, 180.0, 30, Gender::Male);
        assert!((calculate_tdee(bmr, 1.55) - 2604.0).abs() < 1e-9);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Male BMR exceeds female BMR by exactly 166 kcal
        #[test]
        fn prop_male_bmr_offset(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18u32..80
        ) {
            let male = calculate_bmr_mifflin(weight, height, age, Gender::Male);
            let female = calculate_bmr_mifflin(weight, height, age, Gender::Female);
            prop_assert!((male - female - 166.0).abs() < 1e-9);
        }
    }

    // =========================================================================
    // Body Fat Tests
    // =========================================================================

    #[rstest]
    #[case(Gender::Male, None, Some(38.0))]
    #[case(Gender::Male, Some(85.0), None)]
    #[case(Gender::Male, None, None)]
    #[case(Gender::Female, None, Some(32.0))]
    #[case(Gender::Female, Some(75.0), None)]
    #[case(Gender::Male, Some(38.0), Some(38.0))]
    #[case(Gender::Male, Some(30.0), Some(38.0))]
    #[case(Gender::Female, Some(32.0), Some(32.0))]
    #[case(Gender::Female, Some(20.0), Some(32.0))]
    fn test_body_fat_unavailable(
        #[case] gender: Gender,
        #[case] waist: Option<f64>,
        #[case] neck: Option<f64>,
    ) {
        assert_eq!(estimate_body_fat_navy(gender, 175.0, waist, neck), None);
    }

    #[test]
    fn test_body_fat_male() {
        // 495 / (1.0324 - 0.19077*log10(47) + 0.15456*log10(180)) - 450 ≈ 16.1
        let bf = estimate_body_fat_navy(Gender::Male, 180.0, Some(85.0), Some(38.0)).unwrap();
        assert!((bf - 16.1).abs() < 0.2, "got {}", bf);
    }

    #[test]
    fn test_body_fat_female() {
        // 495 / (1.29579 - 0.35004*log10(143) + 0.22100*log10(165)) - 450 ≈ 29.93
        let bf = estimate_body_fat_navy(Gender::Female, 165.0, Some(175.0), Some(32.0)).unwrap();
        assert!((bf - 29.93).abs() < 0.01, "got {}", bf);
        // male coefficients push the same girths past the 50% cap
        let male = estimate_body_fat_navy(Gender::Male, 165.0, Some(175.0), Some(32.0)).unwrap();
        assert_eq!(male, 50.0);
    }

    #[test]
    fn test_body_fat_clamped() {
        let lean = estimate_body_fat_navy(Gender::Male, 190.0, Some(40.0), Some(38.0)).unwrap();
        assert_eq!(lean, 5.0);
        let female = estimate_body_fat_navy(Gender::Female, 165.0, Some(150.0), Some(30.0)).unwrap();
        assert!((10.0..=50.0).contains(&female));
    }

    #[test]
    fn test_body_fat_classification() {
        assert_eq!(classify_body_fat(10.0, Gender::Male), BodyFatCategory::Athletic);
        assert_eq!(classify_body_fat(20.0, Gender::Male), BodyFatCategory::Average);
        assert_eq!(classify_body_fat(20.0, Gender::Female), BodyFatCategory::Athletic);
        assert_eq!(classify_body_fat(28.0, Gender::Female), BodyFatCategory::Average);
    }

    // =========================================================================
    // Macro Tests
    // =========================================================================

    #[test]
    fn test_macros_lose_weight() {
        let macros = calculate_macros(2604.0, HealthGoal::LoseWeight);
        assert_eq!(
            macros,
            MacroTargets {
                calories: 2213,
                protein: 194,
                carbs: 194,
                fats: 74,
            }
        );
    }

    #[test]
    fn test_macros_gain_muscle() {
        // 2100 * 1.1 = 2310 -> 202.1 / 259.9 / 51.3
        let macros = calculate_macros(2100.0, HealthGoal::GainMuscle);
        assert_eq!(macros.calories, 2310);
        assert_eq!(macros.protein, 202);
        assert_eq!(macros.carbs, 260);
        assert_eq!(macros.fats, 51);
    }

    #[test]
    fn test_macros_maintain_matches_improve_health() {
        assert_eq!(
            calculate_macros(2500.0, HealthGoal::Maintain),
            calculate_macros(2500.0, HealthGoal::ImproveHealth)
        );
    }

    #[test]
    fn test_metrics_without_measurements() {
        let input = crate::samples::low_risk();
        let metrics = calculate_metrics(&input);
        assert_eq!(metrics.body_fat, None);
        assert_eq!(metrics.body_fat_category, None);
        assert_eq!(metrics.bmi_category, BmiCategory::Normal);
    }
}
