//! Scoring engine entry points
//!
//! `evaluate` turns one questionnaire into a [`HealthReport`]; `analyze` also
//! runs the recommendation rules and referrals and attaches the raw body
//! metrics, which is the shape renderers consume. Everything here is a pure function of its
//! arguments, so evaluations can run side by side on any thread.

use crate::health_metrics::{calculate_bmi, calculate_metrics, HealthMetrics};
use crate::models::HealthInput;
use crate::recommendations::{recommend, referrals, Recommendation, RecommendationSet};
use crate::risk::{cardiovascular_risk, diabetes_risk, RiskAssessment};
use crate::scores::{
    biological_age, categorize_health, lifestyle_score, metabolic_score, overall_score,
    HealthCategory,
};
use crate::weights::ScoringConfig;
use serde::{Deserialize, Serialize};

/// Scores computed for one questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub overall_score: i64,
    pub cardiovascular_risk: RiskAssessment,
    pub diabetes_risk: RiskAssessment,
    pub metabolic_score: i64,
    pub lifestyle_score: i64,
    pub biological_age: i64,
    /// Biological minus chronological age; negative means younger
    pub age_gap: i64,
    pub category: HealthCategory,
}

/// Everything a renderer needs: metrics, scores and advice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub metrics: HealthMetrics,
    pub report: HealthReport,
    pub recommendations: RecommendationSet,
    /// Specialist and weight referrals, separate from the habit advice
    pub referrals: Vec<Recommendation>,
}

/// Evaluate with the stock weights
pub fn evaluate(input: &HealthInput) -> HealthReport {
    evaluate_with(input, &ScoringConfig::default())
}

/// Evaluate with explicit weights
pub fn evaluate_with(input: &HealthInput, config: &ScoringConfig) -> HealthReport {
    let bmi = calculate_bmi(input.weight, input.height);

    let cardiovascular = cardiovascular_risk(input, bmi, &config.cardiovascular);
    let diabetes = diabetes_risk(input, bmi, &config.diabetes);
    let metabolic = metabolic_score(input, bmi, &config.metabolic);
    let lifestyle = lifestyle_score(input, &config.lifestyle);

    let overall = overall_score(
        metabolic,
        cardiovascular.risk,
        diabetes.risk,
        lifestyle,
        &config.ensemble,
    );
    let bio_age = biological_age(input, bmi, &config.biological_age);

    HealthReport {
        overall_score: overall,
        cardiovascular_risk: cardiovascular,
        diabetes_risk: diabetes,
        metabolic_score: metabolic,
        lifestyle_score: lifestyle,
        biological_age: bio_age,
        age_gap: bio_age - i64::from(input.age),
        category: categorize_health(overall),
    }
}

/// Full assessment with the stock weights
pub fn analyze(input: &HealthInput) -> AssessmentResult {
    analyze_with(input, &ScoringConfig::default())
}

/// Full assessment with explicit weights
pub fn analyze_with(input: &HealthInput, config: &ScoringConfig) -> AssessmentResult {
    let report = evaluate_with(input, config);
    let recommendations = recommend(input, &report);
    let referrals = referrals(input, &report);
    AssessmentResult {
        metrics: calculate_metrics(input),
        report,
        recommendations,
        referrals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, HealthGoal};
    use crate::samples;
    use proptest::prelude::*;

    #[test]
    fn test_low_risk_report() {
        let report = evaluate(&samples::low_risk());
        assert_eq!(report.metabolic_score, 100);
        assert_eq!(report.lifestyle_score, 100);
        assert_eq!(report.overall_score, 100);
        assert_eq!(report.category.name, "Excellent");
        assert_eq!(report.biological_age, 26);
        assert_eq!(report.age_gap, -9);
    }

    #[test]
    fn test_high_risk_report() {
        let report = evaluate(&samples::high_risk());
        // 12*.35 + 0*.25 + (100 - 71.43)*.2 + 9*.2 = 4.2 + 5.71 + 1.8
        assert_eq!(report.overall_score, 12);
        assert_eq!(report.category.name, "Needs Improvement");
        assert_eq!(report.age_gap, 19);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let input = samples::high_risk();
        assert_eq!(evaluate(&input), evaluate(&input));
        assert_eq!(analyze(&input), analyze(&input));
    }

    #[test]
    fn test_custom_weights_flow_through() {
        let input = samples::high_risk();
        let mut config = ScoringConfig::default();
        config.cardiovascular.normalizer = 100.0;
        let report = evaluate_with(&input, &config);
        assert!((report.cardiovascular_risk.risk - 19.5).abs() < 1e-9);
        assert_eq!(report.cardiovascular_risk.category.level, "Low-Moderate");
    }

    #[test]
    fn test_analyze_bundles_metrics() {
        let input = HealthInput {
            height: 180.0,
            weight: 70.0,
            age: 30,
            activity_level: 1.55,
            health_goal: HealthGoal::LoseWeight,
            ..samples::low_risk()
        };
        let result = analyze(&input);
        assert_eq!(result.metrics.bmr, 1680.0);
        assert!((result.metrics.tdee - 2604.0).abs() < 1e-9);
        assert_eq!(result.metrics.macros.calories, 2213);
        assert_eq!(result.metrics.macros.protein, 194);
        assert_eq!(result.metrics.macros.fats, 74);
        assert_eq!(result.report, evaluate(&input));
    }

    #[test]
    fn test_analyze_keeps_referrals_apart() {
        let input = samples::high_risk();
        let result = analyze(&input);
        assert_eq!(result.recommendations, recommend(&input, &result.report));
        assert_eq!(result.referrals.len(), 3);
        assert!(analyze(&samples::low_risk()).referrals.is_empty());
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let json = serde_json::to_value(evaluate(&samples::low_risk())).unwrap();
        assert!(json.get("overallScore").is_some());
        assert!(json.get("ageGap").is_some());
        assert_eq!(json["cardiovascularRisk"]["category"]["level"], "Low");
    }

    fn arb_input() -> impl Strategy<Value = HealthInput> {
        (
            (1u32..100, prop_oneof![Just(Gender::Male), Just(Gender::Female)]),
            (140.0f64..210.0, 40.0f64..180.0),
            (
                proptest::option::of(60.0f64..150.0),
                proptest::option::of(90.0f64..200.0),
                proptest::option::of(120.0f64..320.0),
                proptest::option::of(70.0f64..250.0),
            ),
            (1.2f64..2.2, 0u32..14, 1u8..=4, 0.0f64..12.0),
            (0u32..16, 1u8..=4, 0u8..=3, 0u8..=6),
            (any::<bool>(), any::<bool>(), any::<bool>()),
        )
            .prop_map(
                |(
                    (age, gender),
                    (height, weight),
                    (waist, systolic, cholesterol, sugar),
                    (activity_level, exercise_freq, diet_quality, sleep),
                    (water_intake, stress_level, smoking, alcohol),
                    (family_heart, family_hypertension, family_diabetes),
                )| HealthInput {
                    age,
                    gender,
                    height,
                    weight,
                    waist,
                    neck: Some(38.0),
                    blood_pressure_sys: systolic,
                    blood_pressure_dia: None,
                    cholesterol,
                    blood_sugar: sugar,
                    activity_level,
                    exercise_freq,
                    diet_quality,
                    sleep,
                    water_intake,
                    stress_level,
                    smoking,
                    alcohol,
                    family_heart,
                    family_hypertension,
                    family_diabetes,
                    health_goal: HealthGoal::Maintain,
                },
            )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_report_fields_in_range(input in arb_input()) {
            let report = evaluate(&input);
            prop_assert!((0..=100).contains(&report.overall_score));
            prop_assert!((0..=100).contains(&report.metabolic_score));
            prop_assert!((0..=100).contains(&report.lifestyle_score));
            prop_assert!((0.0..=100.0).contains(&report.cardiovascular_risk.risk));
            prop_assert!((0.0..=100.0).contains(&report.diabetes_risk.risk));
            prop_assert_eq!(report.age_gap, report.biological_age - i64::from(input.age));
        }

        #[test]
        fn prop_evaluate_deterministic(input in arb_input()) {
            prop_assert_eq!(evaluate(&input), evaluate(&input));
        }
    }
}
