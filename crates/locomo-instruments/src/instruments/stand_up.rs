use serde::Serialize;

use locomo_core::models::stand_up::StandUpScore;

use crate::scoring::{Cutoffs, Direction, ScoreRange};
use crate::Instrument;

/// Stand-up test: rising from 40/30/20/10 cm platforms with both legs or
/// one leg. Scored 0–8 by the hardest condition managed. Higher = better.
pub struct StandUpTest;

/// Level 3 below a both-legs 30 cm rise, level 2 below both legs 20 cm,
/// level 1 below one leg 40 cm.
pub const CUTOFFS: Cutoffs = Cutoffs {
    level3: 2.0,
    level2: 3.0,
    level1: 5.0,
};

impl Instrument for StandUpTest {
    fn id(&self) -> &str {
        "stand_up"
    }

    fn name(&self) -> &str {
        "Stand-Up Test"
    }

    fn description(&self) -> &str {
        "Lower-limb strength: the hardest platform height and leg count the subject can rise from"
    }

    fn direction(&self) -> Direction {
        Direction::HigherIsBetter
    }

    fn range(&self) -> ScoreRange {
        ScoreRange {
            min: f64::from(StandUpScore::MIN),
            max: f64::from(StandUpScore::MAX),
            step: Some(1.0),
        }
    }

    fn cutoffs(&self) -> Cutoffs {
        CUTOFFS
    }
}

/// One selectable answer on the stand-up step.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StandUpOption {
    pub score: u8,
    pub label: &'static str,
    pub description: &'static str,
}

/// Choices in presentation order, hardest condition first.
pub const OPTIONS: [StandUpOption; 9] = [
    StandUpOption {
        score: 8,
        label: "Rises on one leg from 10 cm",
        description: "Excellent: one leg from the lowest platform",
    },
    StandUpOption {
        score: 7,
        label: "Rises on one leg from 20 cm",
        description: "Strong: one leg from a low platform",
    },
    StandUpOption {
        score: 6,
        label: "Rises on one leg from 30 cm",
        description: "Good: one leg from a mid-height platform",
    },
    StandUpOption {
        score: 5,
        label: "Rises on one leg from 40 cm",
        description: "No concern: one leg from ordinary chair height",
    },
    StandUpOption {
        score: 4,
        label: "Rises on both legs from 10 cm",
        description: "Level 1: one leg from 40 cm is not possible, both legs from 10 cm is",
    },
    StandUpOption {
        score: 3,
        label: "Rises on both legs from 20 cm",
        description: "Level 1: both legs from a low platform",
    },
    StandUpOption {
        score: 2,
        label: "Rises on both legs from 30 cm",
        description: "Level 2: both legs from a mid-height platform",
    },
    StandUpOption {
        score: 1,
        label: "Rises on both legs from 40 cm",
        description: "Level 3: both legs from ordinary chair height only",
    },
    StandUpOption {
        score: 0,
        label: "Cannot rise on both legs from 40 cm",
        description: "Consult a professional: rising unaided is difficult",
    },
];

pub fn option_for(score: StandUpScore) -> &'static StandUpOption {
    // OPTIONS is ordered 8..=0, so the position is the distance from the top.
    &OPTIONS[usize::from(StandUpScore::MAX - score.value())]
}

pub fn label_for(score: StandUpScore) -> &'static str {
    option_for(score).label
}
