use serde::Serialize;

use locomo_core::models::locomo25::{MAX_ANSWER, QUESTION_COUNT};

use crate::scoring::{Cutoffs, Direction, ScoreRange};
use crate::Instrument;

/// Locomo25: 25-item self-report of difficulty with daily activities over
/// the last month. Each item 0–4, total 0–100. Lower = better.
pub struct Locomo25;

pub const CUTOFFS: Cutoffs = Cutoffs {
    level3: 24.0,
    level2: 16.0,
    level1: 7.0,
};

impl Instrument for Locomo25 {
    fn id(&self) -> &str {
        "locomo25"
    }

    fn name(&self) -> &str {
        "Locomo25"
    }

    fn description(&self) -> &str {
        "Daily-life difficulty: 25 self-reported items scored 0 (none) to 4 (unable)"
    }

    fn direction(&self) -> Direction {
        Direction::LowerIsBetter
    }

    fn range(&self) -> ScoreRange {
        ScoreRange {
            min: 0.0,
            max: (QUESTION_COUNT * usize::from(MAX_ANSWER)) as f64,
            step: Some(1.0),
        }
    }

    fn cutoffs(&self) -> Cutoffs {
        CUTOFFS
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnswerOption {
    pub value: u8,
    pub label: &'static str,
}

pub const ANSWER_OPTIONS: [AnswerOption; 5] = [
    AnswerOption {
        value: 0,
        label: "No difficulty",
    },
    AnswerOption {
        value: 1,
        label: "Slight difficulty",
    },
    AnswerOption {
        value: 2,
        label: "Moderate difficulty",
    },
    AnswerOption {
        value: 3,
        label: "Severe difficulty",
    },
    AnswerOption {
        value: 4,
        label: "Unable",
    },
];

/// Questions in administration order; answer `i` belongs to `QUESTIONS[i]`.
pub const QUESTIONS: [&str; QUESTION_COUNT] = [
    "Walking around inside the house",
    "Getting in and out of bed or a futon",
    "Putting on and taking off clothes (trousers, underwear, socks)",
    "Cleaning tatami mats or floors",
    "Using a (Western-style) toilet",
    "Bathing (getting in and out of the tub, washing yourself)",
    "Carrying home about 1 litre of shopping (one milk carton)",
    "Fastening buttons or tying laces",
    "Carrying home about 2 kg of shopping (two 1-litre milk cartons)",
    "Walking continuously for about 15 minutes",
    "Crossing a pedestrian crossing before the light changes",
    "Going up and down the stairs at home",
    "Going out by train or bus",
    "Going out by taxi",
    "Visiting a friend's house",
    "Going to the bank or post office",
    "Going shopping in the neighbourhood",
    "Getting from the first to the second floor without stairs (lift, etc.)",
    "Lifting or carrying something heavy, about 10 kg",
    "Tripping over steps inside the house",
    "Finding it hard to climb stairs",
    "Walking briskly",
    "Playing sports or dancing",
    "Gardening or farm work",
    "Going on trips",
];
