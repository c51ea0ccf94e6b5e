//! Recommendation generator
//!
//! An ordered rule table maps conditions on the questionnaire and report to
//! advice. Rules are checked top to bottom; each one that fires appends its
//! recommendation to its category and may add a one-line summary to the
//! priority list. Smoking is the only rule that goes to the front of that
//! list. When no rule adds a summary, the priority list falls back to
//! [`DEFAULT_PRIORITIES`].
//!
//! Referrals (high cardiovascular or diabetes risk, obesity) come from
//! [`referrals`] and are reported separately.

use crate::engine::HealthReport;
use crate::health_metrics::calculate_bmi;
use crate::models::HealthInput;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub nutrition: Vec<Recommendation>,
    pub exercise: Vec<Recommendation>,
    pub lifestyle: Vec<Recommendation>,
    pub priority: Vec<String>,
}

/// Priority list used when no rule contributes a summary
pub const DEFAULT_PRIORITIES: [&str; 3] = [
    "Maintain your current healthy habits",
    "Schedule regular preventive health check-ups",
    "Keep tracking your health metrics over time",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Nutrition,
    Exercise,
    Lifestyle,
}

#[derive(Debug, Clone, Copy)]
enum Summary {
    Append(&'static str),
    Prepend(&'static str),
    None,
}

/// Referral suggestion, kept apart from the habit rules so it never
/// touches the category lists or the priority summary
struct Referral {
    applies: fn(&HealthInput, &HealthReport) -> bool,
    priority: Priority,
    title: &'static str,
    description: fn(&HealthInput, &HealthReport) -> String,
    actions: &'static [&'static str],
}

struct Rule {
    applies: fn(&HealthInput, &HealthReport) -> bool,
    category: Category,
    priority: Priority,
    title: &'static str,
    description: fn(&HealthInput, &HealthReport) -> String,
    actions: &'static [&'static str],
    summary: Summary,
}

// ============================================================================
// Conditions
// ============================================================================

/// Risk percentage above which a specialist referral is suggested
const REFERRAL_RISK: f64 = 50.0;
/// BMI above which a weight management referral is suggested
const REFERRAL_BMI: f64 = 30.0;

fn poor_diet(input: &HealthInput, _: &HealthReport) -> bool {
    input.diet_quality <= 2
}

fn low_water(input: &HealthInput, _: &HealthReport) -> bool {
    input.water_intake < 8
}

fn low_exercise(input: &HealthInput, _: &HealthReport) -> bool {
    input.exercise_freq < 3
}

fn short_sleep(input: &HealthInput, _: &HealthReport) -> bool {
    input.sleep < 7.0
}

fn smokes(input: &HealthInput, _: &HealthReport) -> bool {
    input.smoking > 0
}

fn high_stress(input: &HealthInput, _: &HealthReport) -> bool {
    input.stress_level >= 3
}

fn elevated_cardiovascular_risk(_: &HealthInput, report: &HealthReport) -> bool {
    report.cardiovascular_risk.risk > REFERRAL_RISK
}

fn elevated_diabetes_risk(_: &HealthInput, report: &HealthReport) -> bool {
    report.diabetes_risk.risk > REFERRAL_RISK
}

fn obese(input: &HealthInput, _: &HealthReport) -> bool {
    calculate_bmi(input.weight, input.height) > REFERRAL_BMI
}

// ============================================================================
// Descriptions
// ============================================================================

fn diet_description(_: &HealthInput, _: &HealthReport) -> String {
    "Your diet quality has room for improvement. Whole foods, vegetables and lean \
     protein support every other health marker."
        .to_string()
}

fn water_description(input: &HealthInput, _: &HealthReport) -> String {
    format!(
        "You drink about {} glasses of water a day. Aim for at least 8 to support \
         metabolism and energy levels.",
        input.water_intake
    )
}

fn exercise_description(input: &HealthInput, _: &HealthReport) -> String {
    format!(
        "You exercise {} time(s) per week. At least 150 minutes of moderate activity \
         spread over 3 or more sessions lowers cardiovascular and diabetes risk.",
        input.exercise_freq
    )
}

fn sleep_description(input: &HealthInput, _: &HealthReport) -> String {
    format!(
        "You sleep about {:.1} hours a night. Adults need 7-9 hours for recovery, \
         hormone balance and metabolic health.",
        input.sleep
    )
}

fn smoking_description(_: &HealthInput, _: &HealthReport) -> String {
    "Smoking is the single largest modifiable risk factor for heart disease, cancer \
     and premature aging. Quitting at any age brings measurable benefits."
        .to_string()
}

fn stress_description(_: &HealthInput, _: &HealthReport) -> String {
    "Your reported stress level is high. Chronic stress raises blood pressure and \
     disrupts sleep and appetite."
        .to_string()
}

fn cardiovascular_description(_: &HealthInput, report: &HealthReport) -> String {
    format!(
        "Your estimated cardiovascular risk is {:.0}% ({}). A professional assessment \
         can confirm it and set up a risk reduction plan.",
        report.cardiovascular_risk.risk, report.cardiovascular_risk.category.level
    )
}

fn diabetes_description(_: &HealthInput, report: &HealthReport) -> String {
    format!(
        "Your estimated type 2 diabetes risk is {:.0}% ({}). Early dietary changes \
         are the most effective prevention.",
        report.diabetes_risk.risk, report.diabetes_risk.category.level
    )
}

fn weight_description(input: &HealthInput, _: &HealthReport) -> String {
    format!(
        "Your BMI of {:.1} is in the obese range. Gradual loss of 0.5-1 kg per week \
         through a modest calorie deficit and more activity is sustainable.",
        calculate_bmi(input.weight, input.height)
    )
}

// ============================================================================
// Rule table
// ============================================================================

const RULES: &[Rule] = &[
    Rule {
        applies: poor_diet,
        category: Category::Nutrition,
        priority: Priority::High,
        title: "Improve Diet Quality",
        description: diet_description,
        actions: &[
            "Fill half your plate with vegetables at each meal",
            "Replace processed snacks with fruit, nuts or yogurt",
            "Choose whole grains over refined carbohydrates",
            "Limit sugary drinks and added sugar",
        ],
        summary: Summary::Append("Improve diet quality with more whole foods"),
    },
    Rule {
        applies: low_water,
        category: Category::Nutrition,
        priority: Priority::Medium,
        title: "Increase Water Intake",
        description: water_description,
        actions: &[
            "Keep a water bottle with you during the day",
            "Drink a glass of water with every meal",
            "Set reminders to drink between meals",
        ],
        summary: Summary::None,
    },
    Rule {
        applies: low_exercise,
        category: Category::Exercise,
        priority: Priority::High,
        title: "Increase Physical Activity",
        description: exercise_description,
        actions: &[
            "Start with a 20-30 minute brisk walk on most days",
            "Add two strength training sessions per week",
            "Take the stairs and short walking breaks during work",
            "Build up gradually to 150 minutes of activity per week",
        ],
        summary: Summary::Append("Exercise at least 3 times per week"),
    },
    Rule {
        applies: short_sleep,
        category: Category::Lifestyle,
        priority: Priority::Critical,
        title: "Prioritize Sleep",
        description: sleep_description,
        actions: &[
            "Keep a consistent bedtime and wake time",
            "Avoid screens for an hour before bed",
            "Keep your bedroom cool, dark and quiet",
            "Avoid caffeine after early afternoon",
        ],
        summary: Summary::Append("Get 7-9 hours of sleep every night"),
    },
    Rule {
        applies: smokes,
        category: Category::Lifestyle,
        priority: Priority::Critical,
        title: "Quit Smoking",
        description: smoking_description,
        actions: &[
            "Set a quit date within the next two weeks",
            "Talk to your doctor about cessation aids",
            "Join a smoking cessation program or support line",
            "Identify and avoid your smoking triggers",
        ],
        summary: Summary::Prepend("Quit smoking: the most important change for your health"),
    },
    Rule {
        applies: high_stress,
        category: Category::Lifestyle,
        priority: Priority::High,
        title: "Manage Stress",
        description: stress_description,
        actions: &[
            "Practice 10 minutes of meditation or deep breathing daily",
            "Schedule regular breaks and time outdoors",
            "Stay connected with friends and family",
            "Consider talking to a counselor",
        ],
        summary: Summary::Append("Reduce stress with daily relaxation practice"),
    },
];

const REFERRALS: &[Referral] = &[
    Referral {
        applies: elevated_cardiovascular_risk,
        priority: Priority::Critical,
        title: "Cardiovascular Health Review",
        description: cardiovascular_description,
        actions: &[
            "Book a check-up with your doctor or a cardiologist",
            "Have blood pressure and cholesterol measured",
            "Ask about a structured cardiac risk reduction program",
        ],
    },
    Referral {
        applies: elevated_diabetes_risk,
        priority: Priority::Critical,
        title: "Diabetes Prevention",
        description: diabetes_description,
        actions: &[
            "Ask your doctor for a fasting glucose or HbA1c test",
            "Cut back on refined carbohydrates and sugary drinks",
            "Pair carbohydrates with protein and fiber",
        ],
    },
    Referral {
        applies: obese,
        priority: Priority::High,
        title: "Weight Management",
        description: weight_description,
        actions: &[
            "Aim for a calorie deficit of about 500 kcal per day",
            "Combine cardio with strength training to preserve muscle",
            "Track meals for two weeks to spot easy wins",
        ],
    },
];

/// Build recommendations for one questionnaire and its report
pub fn recommend(input: &HealthInput, report: &HealthReport) -> RecommendationSet {
    let mut set = RecommendationSet::default();

    for rule in RULES.iter().filter(|rule| (rule.applies)(input, report)) {
        let recommendation = Recommendation {
            priority: rule.priority,
            title: rule.title.to_string(),
            description: (rule.description)(input, report),
            actions: rule.actions.iter().map(|a| a.to_string()).collect(),
        };

        match rule.category {
            Category::Nutrition => set.nutrition.push(recommendation),
            Category::Exercise => set.exercise.push(recommendation),
            Category::Lifestyle => set.lifestyle.push(recommendation),
        }

        match rule.summary {
            Summary::Append(text) => set.priority.push(text.to_string()),
            Summary::Prepend(text) => set.priority.insert(0, text.to_string()),
            Summary::None => {}
        }
    }

    if set.priority.is_empty() {
        set.priority = DEFAULT_PRIORITIES.iter().map(|p| p.to_string()).collect();
    }

    set
}

/// Specialist and weight referrals driven by the report.
///
/// Independent of [`recommend`]: a referral never changes the habit lists
/// or the priority summary.
pub fn referrals(input: &HealthInput, report: &HealthReport) -> Vec<Recommendation> {
    REFERRALS
        .iter()
        .filter(|referral| (referral.applies)(input, report))
        .map(|referral| Recommendation {
            priority: referral.priority,
            title: referral.title.to_string(),
            description: (referral.description)(input, report),
            actions: referral.actions.iter().map(|a| a.to_string()).collect(),
        })
        .collect()
}
