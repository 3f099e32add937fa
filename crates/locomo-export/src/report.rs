use serde::Serialize;

use locomo_core::models::level::LocomoLevel;
use locomo_instruments::advice::{AdviceBundle, DietGuidance, ExercisePlan};
use locomo_instruments::level::{AssessmentOutcome, AxisRating};

use crate::links::ReportLinks;

pub const REPORT_TITLE: &str = "Locomo Check Report";

pub const DISCLAIMER: &str =
    "This result is a simple screening and does not replace a diagnosis by a physician.";

/// One row of the test-results table.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    pub test: String,
    pub value: String,
    pub detail: String,
    pub rating: String,
}

impl ResultRow {
    fn new(test: &str, value: String, detail: &str, rating: &AxisRating) -> Self {
        Self {
            test: test.to_string(),
            value,
            detail: detail.to_string(),
            rating: rating.label.clone(),
        }
    }
}

/// Everything the report template can reference.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub title: String,
    pub created_on: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub height_cm: f64,
    pub level: u8,
    pub level_label: String,
    /// Hex colour used for the level badge.
    pub level_color: String,
    pub summary: String,
    pub results: Vec<ResultRow>,
    pub exercise: ExercisePlan,
    pub diet: DietGuidance,
    pub video_url: String,
    pub qr_code_url: String,
    pub disclaimer: String,
}

impl ReportContext {
    pub fn build(
        outcome: &AssessmentOutcome,
        advice: &AdviceBundle,
        links: &ReportLinks,
        created_on: jiff::civil::Date,
    ) -> Self {
        let ratings = &outcome.ratings;
        let results = vec![
            ResultRow::new(
                "Stand-up test",
                outcome.stand_up_label().to_string(),
                "Hardest platform and leg count managed",
                &ratings.stand_up,
            ),
            ResultRow::new(
                "Two-step test",
                format!("{:.2}", outcome.two_step.score()),
                "Two maximal strides divided by height",
                &ratings.two_step,
            ),
            ResultRow::new(
                "Locomo25",
                format!("{} points", outcome.locomo25.total_score()),
                "Total of the 25 questionnaire items",
                &ratings.locomo25,
            ),
        ];

        Self {
            title: REPORT_TITLE.to_string(),
            created_on: created_on.to_string(),
            name: outcome.profile.name().to_string(),
            age: outcome.profile.age(),
            gender: outcome.profile.gender().label().to_string(),
            height_cm: outcome.profile.height_cm(),
            level: outcome.level.as_u8(),
            level_label: outcome.level.to_string(),
            level_color: level_color(outcome.level).to_string(),
            summary: advice.summary.clone(),
            results,
            exercise: advice.exercise.clone(),
            diet: advice.diet.clone(),
            video_url: links.video_url.clone(),
            qr_code_url: links.qr_code_url.clone(),
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

pub fn level_color(level: LocomoLevel) -> &'static str {
    match level {
        LocomoLevel::Three => "#DC2626",
        LocomoLevel::Two => "#F97316",
        LocomoLevel::One | LocomoLevel::None => "#1D4ED8",
    }
}

/// File name for an exported report, e.g. `locomo-report_Hanako_2026-10-19.docx`.
pub fn report_file_name(name: &str, date: jiff::civil::Date, extension: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() || c.is_control() => '_',
            c => c,
        })
        .collect();
    let stem = if cleaned.is_empty() { "user" } else { &cleaned };
    format!("locomo-report_{stem}_{date}.{extension}")
}
