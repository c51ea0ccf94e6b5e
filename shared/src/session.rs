//! Questionnaire session
//!
//! A caller-owned cursor over the questionnaire plus the answers collected so
//! far. Each session is an independent value: a browser tab, a CLI run or a
//! server request can each hold their own without sharing anything.
//! Answers are checked as they arrive, and [`AssessmentSession::finish`] runs
//! full validation before handing out a `HealthInput`.

use crate::errors::AssessmentError;
use crate::models::{Gender, HealthGoal, HealthInput};
use crate::validation::{get_field_display_label, validate_health_input};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Question {
    Age,
    Gender,
    Height,
    Weight,
    Waist,
    Neck,
    BloodPressureSys,
    BloodPressureDia,
    Cholesterol,
    BloodSugar,
    ActivityLevel,
    ExerciseFreq,
    DietQuality,
    Sleep,
    WaterIntake,
    StressLevel,
    Smoking,
    Alcohol,
    FamilyHeart,
    FamilyHypertension,
    FamilyDiabetes,
    HealthGoal,
}

impl Question {
    /// Questionnaire order
    pub const ALL: [Question; 22] = [
        Question::Age,
        Question::Gender,
        Question::Height,
        Question::Weight,
        Question::Waist,
        Question::Neck,
        Question::BloodPressureSys,
        Question::BloodPressureDia,
        Question::Cholesterol,
        Question::BloodSugar,
        Question::ActivityLevel,
        Question::ExerciseFreq,
        Question::DietQuality,
        Question::Sleep,
        Question::WaterIntake,
        Question::StressLevel,
        Question::Smoking,
        Question::Alcohol,
        Question::FamilyHeart,
        Question::FamilyHypertension,
        Question::FamilyDiabetes,
        Question::HealthGoal,
    ];

    /// Field name on `HealthInput`
    pub fn field(&self) -> &'static str {
        match self {
            Question::Age => "age",
            Question::Gender => "gender",
            Question::Height => "height",
            Question::Weight => "weight",
            Question::Waist => "waist",
            Question::Neck => "neck",
            Question::BloodPressureSys => "blood_pressure_sys",
            Question::BloodPressureDia => "blood_pressure_dia",
            Question::Cholesterol => "cholesterol",
            Question::BloodSugar => "blood_sugar",
            Question::ActivityLevel => "activity_level",
            Question::ExerciseFreq => "exercise_freq",
            Question::DietQuality => "diet_quality",
            Question::Sleep => "sleep",
            Question::WaterIntake => "water_intake",
            Question::StressLevel => "stress_level",
            Question::Smoking => "smoking",
            Question::Alcohol => "alcohol",
            Question::FamilyHeart => "family_heart",
            Question::FamilyHypertension => "family_hypertension",
            Question::FamilyDiabetes => "family_diabetes",
            Question::HealthGoal => "health_goal",
        }
    }

    pub fn label(&self) -> &'static str {
        get_field_display_label(self.field())
    }

    /// Optional questions may be skipped; the engine treats them as absent
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            Question::Waist
                | Question::Neck
                | Question::BloodPressureSys
                | Question::BloodPressureDia
                | Question::Cholesterol
                | Question::BloodSugar
                | Question::FamilyHeart
                | Question::FamilyHypertension
                | Question::FamilyDiabetes
        )
    }
}

impl FromStr for Question {
    type Err = AssessmentError;

    /// Accepts either the field name (`blood_pressure_sys`) or the
    /// questionnaire key (`bloodPressureSys`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Question::ALL
            .iter()
            .copied()
            .find(|q| q.field() == s || q.field().replace('_', "").eq_ignore_ascii_case(s))
            .ok_or_else(|| AssessmentError::InvalidAnswer {
                question: s.to_string(),
                message: "unknown question".to_string(),
            })
    }
}

/// A raw answer as a form delivers it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Flag(bool),
    Number(f64),
    Text(String),
    Skip,
}

fn number(answer: &Answer) -> Option<f64> {
    match answer {
        Answer::Number(n) => Some(*n),
        Answer::Text(text) => text.trim().parse().ok(),
        _ => None,
    }
    .filter(|n: &f64| n.is_finite())
}

fn whole(answer: &Answer) -> Option<u32> {
    number(answer)
        .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32)
}

fn ordinal(answer: &Answer) -> Option<u8> {
    whole(answer).and_then(|n| u8::try_from(n).ok())
}

fn flag(answer: &Answer) -> Option<bool> {
    match answer {
        Answer::Flag(b) => Some(*b),
        Answer::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" => Some(true),
            "no" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn text(answer: &Answer) -> Option<String> {
    match answer {
        Answer::Text(text) => Some(text.trim().to_ascii_lowercase()),
        _ => None,
    }
}

/// Record the answers are written into.
///
/// Required fields hold in-range stand-ins until answered; `finish` refuses
/// to hand the record out while any of them is still unanswered.
fn blank_input() -> HealthInput {
    HealthInput {
        age: 30,
        gender: Gender::Male,
        height: 170.0,
        weight: 70.0,
        waist: None,
        neck: None,
        blood_pressure_sys: None,
        blood_pressure_dia: None,
        cholesterol: None,
        blood_sugar: None,
        activity_level: 1.2,
        exercise_freq: 0,
        diet_quality: 1,
        sleep: 8.0,
        water_intake: 0,
        stress_level: 1,
        smoking: 0,
        alcohol: 0,
        family_heart: false,
        family_hypertension: false,
        family_diabetes: false,
        health_goal: HealthGoal::default(),
    }
}

/// Questionnaire state owned by whoever drives the form
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    position: usize,
    answered: HashSet<Question>,
    draft: HealthInput,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self {
            position: 0,
            answered: HashSet::new(),
            draft: blank_input(),
        }
    }
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Question at the cursor, `None` once past the last one
    pub fn current(&self) -> Option<Question> {
        Question::ALL.get(self.position).copied()
    }

    /// Percentage of the questionnaire behind the cursor
    pub fn progress(&self) -> u8 {
        (self.position * 100 / Question::ALL.len()) as u8
    }

    pub fn is_answered(&self, question: Question) -> bool {
        self.answered.contains(&question)
    }

    /// Record an answer. Optional questions accept [`Answer::Skip`].
    ///
    /// The answer is checked with the same rules as [`validate_health_input`],
    /// so anything accepted here is accepted by [`AssessmentSession::finish`].
    /// A rejected answer leaves the session unchanged.
    pub fn answer(&mut self, question: Question, answer: Answer) -> Result<(), AssessmentError> {
        let invalid = |message: &str| AssessmentError::InvalidAnswer {
            question: question.label().to_string(),
            message: message.to_string(),
        };

        if answer == Answer::Skip && !question.is_optional() {
            return Err(invalid("an answer is required"));
        }

        let measurement = |answer: &Answer| match answer {
            Answer::Skip => Ok(None),
            other => number(other).map(Some).ok_or_else(|| invalid("expected a number")),
        };
        let family = |answer: &Answer| match answer {
            Answer::Skip => Ok(false),
            other => flag(other).ok_or_else(|| invalid("expected yes or no")),
        };

        let mut d = self.draft.clone();
        match question {
            Question::Age => d.age = whole(&answer).ok_or_else(|| invalid("expected whole years"))?,
            Question::Gender => {
                d.gender = match text(&answer).as_deref() {
                    Some("male") => Gender::Male,
                    Some("female") => Gender::Female,
                    _ => return Err(invalid("expected male or female")),
                };
            }
            Question::Height => d.height = number(&answer).ok_or_else(|| invalid("expected a number"))?,
            Question::Weight => d.weight = number(&answer).ok_or_else(|| invalid("expected a number"))?,
            Question::Waist => d.waist = measurement(&answer)?,
            Question::Neck => d.neck = measurement(&answer)?,
            Question::BloodPressureSys => d.blood_pressure_sys = measurement(&answer)?,
            Question::BloodPressureDia => d.blood_pressure_dia = measurement(&answer)?,
            Question::Cholesterol => d.cholesterol = measurement(&answer)?,
            Question::BloodSugar => d.blood_sugar = measurement(&answer)?,
            Question::ActivityLevel => {
                d.activity_level = number(&answer).ok_or_else(|| invalid("expected a number"))?;
            }
            Question::ExerciseFreq => {
                d.exercise_freq = whole(&answer).ok_or_else(|| invalid("expected sessions per week"))?;
            }
            Question::DietQuality => d.diet_quality = ordinal(&answer).ok_or_else(|| invalid("expected 1-4"))?,
            Question::Sleep => d.sleep = number(&answer).ok_or_else(|| invalid("expected hours"))?,
            Question::WaterIntake => {
                d.water_intake = whole(&answer).ok_or_else(|| invalid("expected glasses per day"))?;
            }
            Question::StressLevel => d.stress_level = ordinal(&answer).ok_or_else(|| invalid("expected 1-4"))?,
            Question::Smoking => d.smoking = ordinal(&answer).ok_or_else(|| invalid("expected 0-3"))?,
            Question::Alcohol => d.alcohol = ordinal(&answer).ok_or_else(|| invalid("expected a whole number"))?,
            Question::FamilyHeart => d.family_heart = family(&answer)?,
            Question::FamilyHypertension => d.family_hypertension = family(&answer)?,
            Question::FamilyDiabetes => d.family_diabetes = family(&answer)?,
            Question::HealthGoal => {
                d.health_goal = match text(&answer).as_deref() {
                    Some("lose_weight") => HealthGoal::LoseWeight,
                    Some("gain_muscle") => HealthGoal::GainMuscle,
                    Some("maintain") => HealthGoal::Maintain,
                    Some("improve_health") => HealthGoal::ImproveHealth,
                    _ => return Err(invalid("unknown goal")),
                };
            }
        }

        // Other fields already passed on their own write; only this one can fail
        if let Err(errors) = validate_health_input(&d) {
            if let Some(error) = errors.iter().find(|e| e.field == question.field()) {
                return Err(invalid(&error.message));
            }
        }

        self.draft = d;
        self.answered.insert(question);
        Ok(())
    }

    /// Move to the next question.
    ///
    /// A required question must be answered before the cursor moves past it.
    pub fn advance(&mut self) -> Result<Option<Question>, AssessmentError> {
        if let Some(question) = self.current() {
            if !question.is_optional() && !self.is_answered(question) {
                return Err(AssessmentError::IncompleteSession(vec![question.label().to_string()]));
            }
            self.position += 1;
        }
        Ok(self.current())
    }

    /// Move to the previous question
    pub fn back(&mut self) -> Option<Question> {
        self.position = self.position.saturating_sub(1);
        self.current()
    }

    /// Required questions still unanswered, in questionnaire order
    pub fn missing(&self) -> Vec<Question> {
        Question::ALL
            .iter()
            .copied()
            .filter(|q| !q.is_optional() && !self.is_answered(*q))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Hand out the finished questionnaire
    pub fn finish(&self) -> Result<HealthInput, AssessmentError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(AssessmentError::IncompleteSession(
                missing.iter().map(|q| q.label().to_string()).collect(),
            ));
        }

        validate_health_input(&self.draft).map_err(AssessmentError::Validation)?;
        Ok(self.draft.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;
    use rstest::rstest;

    fn answer_all(session: &mut AssessmentSession, input: &HealthInput) {
        let num = Answer::Number;
        let opt = |v: Option<f64>| v.map_or(Answer::Skip, Answer::Number);
        let gender = match input.gender {
            Gender::Male => "male",
            Gender::Female => "female",
        };
        let goal = match input.health_goal {
            HealthGoal::LoseWeight => "lose_weight",
            HealthGoal::GainMuscle => "gain_muscle",
            HealthGoal::Maintain => "maintain",
            HealthGoal::ImproveHealth => "improve_health",
        };
        let answers = [
            (Question::Age, num(f64::from(input.age))),
            (Question::Gender, Answer::Text(gender.to_string())),
            (Question::Height, num(input.height)),
            (Question::Weight, num(input.weight)),
            (Question::Waist, opt(input.waist)),
            (Question::Neck, opt(input.neck)),
            (Question::BloodPressureSys, opt(input.blood_pressure_sys)),
            (Question::BloodPressureDia, opt(input.blood_pressure_dia)),
            (Question::Cholesterol, opt(input.cholesterol)),
            (Question::BloodSugar, opt(input.blood_sugar)),
            (Question::ActivityLevel, num(input.activity_level)),
            (Question::ExerciseFreq, num(f64::from(input.exercise_freq))),
            (Question::DietQuality, num(f64::from(input.diet_quality))),
            (Question::Sleep, num(input.sleep)),
            (Question::WaterIntake, num(f64::from(input.water_intake))),
            (Question::StressLevel, num(f64::from(input.stress_level))),
            (Question::Smoking, num(f64::from(input.smoking))),
            (Question::Alcohol, num(f64::from(input.alcohol))),
            (Question::FamilyHeart, Answer::Flag(input.family_heart)),
            (Question::FamilyHypertension, Answer::Flag(input.family_hypertension)),
            (Question::FamilyDiabetes, Answer::Flag(input.family_diabetes)),
            (Question::HealthGoal, Answer::Text(goal.to_string())),
        ];
        for (question, answer) in answers {
            assert_eq!(session.current(), Some(question));
            session.answer(question, answer).unwrap();
            session.advance().unwrap();
        }
    }

    #[test]
    fn test_full_walkthrough_reproduces_input() {
        for input in [samples::low_risk(), samples::high_risk()] {
            let mut session = AssessmentSession::new();
            answer_all(&mut session, &input);
            assert_eq!(session.current(), None);
            assert_eq!(session.progress(), 100);
            assert!(session.is_complete());
            assert_eq!(session.finish().unwrap(), input);
        }
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = AssessmentSession::new();
        let second = AssessmentSession::new();
        first.answer(Question::Age, Answer::Number(40.0)).unwrap();
        first.advance().unwrap();
        assert_eq!(first.current(), Some(Question::Gender));
        assert_eq!(second.current(), Some(Question::Age));
        assert!(!second.is_answered(Question::Age));
    }

    #[test]
    fn test_cannot_skip_required() {
        let mut session = AssessmentSession::new();
        assert!(matches!(
            session.advance(),
            Err(AssessmentError::IncompleteSession(ref missing)) if missing == &vec!["Age".to_string()]
        ));
        assert!(matches!(
            session.answer(Question::Age, Answer::Skip),
            Err(AssessmentError::InvalidAnswer { .. })
        ));
    }

    #[test]
    fn test_optional_skip_and_back() {
        let mut session = AssessmentSession::new();
        session.answer(Question::Waist, Answer::Number(90.0)).unwrap();
        session.answer(Question::Waist, Answer::Skip).unwrap();
        assert!(session.is_answered(Question::Waist));
        assert_eq!(session.back(), Some(Question::Age));
    }

    #[test]
    fn test_text_answers_are_parsed() {
        let mut session = AssessmentSession::new();
        session.answer(Question::Height, Answer::Text(" 172.5 ".into())).unwrap();
        session.answer(Question::Gender, Answer::Text("Female".into())).unwrap();
        session.answer(Question::FamilyHeart, Answer::Text("yes".into())).unwrap();
        assert_eq!(session.draft.height, 172.5);
        assert_eq!(session.draft.gender, Gender::Female);
        assert!(session.draft.family_heart);
    }

    #[test]
    fn test_rejects_out_of_range_answers() {
        let mut session = AssessmentSession::new();
        assert!(session.answer(Question::Height, Answer::Number(20.0)).is_err());
        assert!(session.answer(Question::DietQuality, Answer::Number(5.0)).is_err());
        assert!(session.answer(Question::Smoking, Answer::Number(1.5)).is_err());
        assert!(session.answer(Question::Gender, Answer::Text("other".into())).is_err());
        assert!(!session.is_answered(Question::Height));
    }

    #[rstest]
    #[case(Question::Waist, 5.0)]
    #[case(Question::Neck, 5.0)]
    #[case(Question::BloodPressureSys, 1.0)]
    #[case(Question::BloodPressureDia, 10.0)]
    #[case(Question::Cholesterol, 10.0)]
    #[case(Question::BloodSugar, 5.0)]
    #[case(Question::ExerciseFreq, 500.0)]
    #[case(Question::WaterIntake, 1000.0)]
    #[case(Question::Alcohol, 11.0)]
    fn test_answers_follow_input_ranges(#[case] question: Question, #[case] value: f64) {
        let mut session = AssessmentSession::new();
        let result = session.answer(question, Answer::Number(value));
        assert!(
            matches!(result, Err(AssessmentError::InvalidAnswer { ref message, .. }) if message.contains("between") || message.contains("at most")),
            "{:?} accepted {}: {:?}",
            question,
            value,
            result
        );
        assert!(!session.is_answered(question));
    }

    #[test]
    fn test_rejected_answer_never_reaches_finish() {
        let input = samples::low_risk();
        let mut session = AssessmentSession::new();
        answer_all(&mut session, &input);
        assert!(session.answer(Question::BloodPressureSys, Answer::Number(1.0)).is_err());
        assert!(session.answer(Question::WaterIntake, Answer::Number(1000.0)).is_err());
        assert_eq!(session.finish().unwrap(), input);
    }

    #[test]
    fn test_finish_reports_missing_labels() {
        let mut session = AssessmentSession::new();
        session.answer(Question::Age, Answer::Number(30.0)).unwrap();
        match session.finish() {
            Err(AssessmentError::IncompleteSession(missing)) => {
                assert_eq!(missing.first().map(String::as_str), Some("Gender"));
                assert!(missing.contains(&"Health Goal".to_string()));
                assert!(!missing.contains(&"Waist Circumference".to_string()));
            }
            other => panic!("expected incomplete session, got {:?}", other),
        }
    }

    #[test]
    fn test_question_from_str() {
        assert_eq!("bloodPressureSys".parse::<Question>().unwrap(), Question::BloodPressureSys);
        assert_eq!("water_intake".parse::<Question>().unwrap(), Question::WaterIntake);
        assert!("shoe_size".parse::<Question>().is_err());
    }

    #[test]
    fn test_answer_deserializes_untagged() {
        let answers: Vec<Answer> = serde_json::from_str(r#"[true, 42, "male", null]"#).unwrap();
        assert_eq!(
            answers,
            vec![
                Answer::Flag(true),
                Answer::Number(42.0),
                Answer::Text("male".into()),
                Answer::Skip
            ]
        );
    }
}
