//! locomo-instruments
//!
//! The three locomotive-syndrome tests as instrument definitions, the
//! level classification over their results, and the advice shown for each
//! level. Pure data and pure functions, no I/O.

pub mod advice;
pub mod assets;
pub mod error;
pub mod instruments;
pub mod level;
pub mod scoring;

use locomo_core::models::level::LocomoLevel;
use scoring::{Cutoffs, Direction, ScoreRange, ValidationError};

/// Trait implemented by each of the three physical-function tests.
pub trait Instrument: Send + Sync {
    /// Unique identifier (e.g., "stand_up", "locomo25").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Two-Step Test").
    fn name(&self) -> &str;

    /// What the instrument measures, in one sentence.
    fn description(&self) -> &str;

    /// Whether a larger value means better function.
    fn direction(&self) -> Direction;

    /// The values this instrument can produce.
    fn range(&self) -> ScoreRange;

    /// Level boundaries for this axis.
    fn cutoffs(&self) -> Cutoffs;

    /// Check a raw value against [`Instrument::range`].
    fn validate(&self, value: f64) -> Result<(), ValidationError> {
        let range = self.range();
        if range.contains(value) {
            return Ok(());
        }
        Err(ValidationError {
            instrument_id: self.id().to_string(),
            value,
            expected_range: range,
            message: format!(
                "{}: score {} is outside range [{}, {}]",
                self.name(),
                value,
                range.min,
                range.max,
            ),
        })
    }

    /// The level this axis implies on its own.
    ///
    /// Higher-is-better axes fire when the value is strictly below a cutoff;
    /// lower-is-better axes fire when the value reaches it.
    fn axis_level(&self, value: f64) -> LocomoLevel {
        let cutoffs = self.cutoffs();
        let fires = |cutoff: f64| match self.direction() {
            Direction::HigherIsBetter => value < cutoff,
            Direction::LowerIsBetter => value >= cutoff,
        };

        if fires(cutoffs.level3) {
            LocomoLevel::Three
        } else if fires(cutoffs.level2) {
            LocomoLevel::Two
        } else if fires(cutoffs.level1) {
            LocomoLevel::One
        } else {
            LocomoLevel::None
        }
    }

    /// Qualitative label for an axis level, e.g. "moderate risk (level 2 equivalent)".
    fn rating_label(&self, level: LocomoLevel) -> String {
        let word = match (self.direction(), level) {
            (Direction::HigherIsBetter, LocomoLevel::Three) => "high risk",
            (Direction::HigherIsBetter, LocomoLevel::Two) => "moderate risk",
            (Direction::HigherIsBetter, LocomoLevel::One) => "mild risk",
            (Direction::HigherIsBetter, LocomoLevel::None) => "low risk",
            (Direction::LowerIsBetter, LocomoLevel::Three) => "severe",
            (Direction::LowerIsBetter, LocomoLevel::Two) => "moderate",
            (Direction::LowerIsBetter, LocomoLevel::One) => "mild",
            (Direction::LowerIsBetter, LocomoLevel::None) => "none",
        };
        match level {
            LocomoLevel::None => format!("{word} (good)"),
            other => format!("{word} (level {} equivalent)", other.as_u8()),
        }
    }
}

/// Return all registered instruments, in the order they are administered.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::stand_up::StandUpTest),
        Box::new(instruments::two_step::TwoStepTest),
        Box::new(instruments::locomo25::Locomo25),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
