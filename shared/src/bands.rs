//! Threshold band tables
//!
//! Every categorization in the engine (risk level, health category, BMI
//! class, body-fat class) is an ordered list of exclusive upper bounds
//! followed by an open-ended catch-all. The first band whose bound is
//! strictly greater than the value wins, so bands are contiguous and never
//! overlap, and every value lands somewhere.

use crate::health_metrics::{BmiCategory, BodyFatCategory};

/// One row of a band table: values below `upper` map to `value`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<T> {
    pub upper: f64,
    pub value: T,
}

impl<T> Band<T> {
    pub const fn new(upper: f64, value: T) -> Self {
        Self { upper, value }
    }
}

/// Risk level name and display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskLabel {
    pub name: &'static str,
    pub color: &'static str,
}

impl RiskLabel {
    const fn new(name: &'static str, color: &'static str) -> Self {
        Self { name, color }
    }
}

/// Health category label with its summary sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

/// Bounded bands in ascending order plus the value for everything above them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bands<T: 'static> {
    pub bounded: &'static [Band<T>],
    pub otherwise: T,
}

impl<T: 'static> Bands<T> {
    pub const fn new(bounded: &'static [Band<T>], otherwise: T) -> Self {
        Self { bounded, otherwise }
    }
}

/// First-match-wins lookup.
///
/// Values above every bound, and values that match no bound (NaN), fall into
/// the catch-all.
pub fn first_match<T: 'static>(value: f64, bands: &Bands<T>) -> &T {
    bands
        .bounded
        .iter()
        .find(|band| value < band.upper)
        .map_or(&bands.otherwise, |band| &band.value)
}

const GREEN: &str = "#4CAF50";
const LIGHT_GREEN: &str = "#8BC34A";
const AMBER: &str = "#FFC107";
const ORANGE: &str = "#FF9800";
const RED: &str = "#F44336";

/// Risk percentage bands shared by the cardiovascular and diabetes models
pub static RISK_BANDS: Bands<RiskLabel> = Bands::new(
    &[
        Band::new(15.0, RiskLabel::new("Low", GREEN)),
        Band::new(30.0, RiskLabel::new("Low-Moderate", LIGHT_GREEN)),
        Band::new(50.0, RiskLabel::new("Moderate", AMBER)),
        Band::new(70.0, RiskLabel::new("Moderate-High", ORANGE)),
    ],
    RiskLabel::new("High", RED),
);

/// Overall health score bands
pub static HEALTH_BANDS: Bands<Label> = Bands::new(
    &[
        Band::new(
            40.0,
            Label {
                name: "Needs Improvement",
                description: "Several areas need attention; small consistent changes will help",
                color: RED,
            },
        ),
        Band::new(
            55.0,
            Label {
                name: "Poor",
                description: "Your health markers show room for meaningful improvement",
                color: ORANGE,
            },
        ),
        Band::new(
            70.0,
            Label {
                name: "Fair",
                description: "A reasonable baseline with clear opportunities to improve",
                color: AMBER,
            },
        ),
        Band::new(
            85.0,
            Label {
                name: "Good",
                description: "You are in good health with a few areas to refine",
                color: LIGHT_GREEN,
            },
        ),
    ],
    Label {
        name: "Excellent",
        description: "Outstanding health markers; keep up your habits",
        color: GREEN,
    },
);

pub static BMI_BANDS: Bands<BmiCategory> = Bands::new(
    &[
        Band::new(16.0, BmiCategory::SeverelyUnderweight),
        Band::new(18.5, BmiCategory::Underweight),
        Band::new(25.0, BmiCategory::Normal),
        Band::new(30.0, BmiCategory::Overweight),
        Band::new(35.0, BmiCategory::ObeseClass1),
        Band::new(40.0, BmiCategory::ObeseClass2),
    ],
    BmiCategory::ObeseClass3,
);

pub static MALE_BODY_FAT_BANDS: Bands<BodyFatCategory> = Bands::new(
    &[
        Band::new(6.0, BodyFatCategory::Essential),
        Band::new(14.0, BodyFatCategory::Athletic),
        Band::new(18.0, BodyFatCategory::Fitness),
        Band::new(25.0, BodyFatCategory::Average),
    ],
    BodyFatCategory::Obese,
);

pub static FEMALE_BODY_FAT_BANDS: Bands<BodyFatCategory> = Bands::new(
    &[
        Band::new(14.0, BodyFatCategory::Essential),
        Band::new(21.0, BodyFatCategory::Athletic),
        Band::new(25.0, BodyFatCategory::Fitness),
        Band::new(32.0, BodyFatCategory::Average),
    ],
    BodyFatCategory::Obese,
);
