use crate::scoring::{Cutoffs, Direction, ScoreRange};
use crate::Instrument;

/// Two-step test: length of two maximal strides divided by body height.
/// Higher = better.
pub struct TwoStepTest;

pub const CUTOFFS: Cutoffs = Cutoffs {
    level3: 0.9,
    level2: 1.1,
    level1: 1.3,
};

/// Upper bound accepted as plausible input; two strides rarely exceed
/// twice the subject's height.
const MAX_RATIO: f64 = 3.0;

impl Instrument for TwoStepTest {
    fn id(&self) -> &str {
        "two_step"
    }

    fn name(&self) -> &str {
        "Two-Step Test"
    }

    fn description(&self) -> &str {
        "Walking ability: two maximal strides normalised by body height"
    }

    fn direction(&self) -> Direction {
        Direction::HigherIsBetter
    }

    fn range(&self) -> ScoreRange {
        ScoreRange {
            min: 0.0,
            max: MAX_RATIO,
            step: None,
        }
    }

    fn cutoffs(&self) -> Cutoffs {
        CUTOFFS
    }
}
