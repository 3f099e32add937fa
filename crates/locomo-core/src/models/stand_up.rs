use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Which legs the subject rose with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Legs {
    Both,
    One,
}

/// Seat height the subject rose from. Lower is harder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Platform {
    #[serde(rename = "40cm")]
    Cm40,
    #[serde(rename = "30cm")]
    Cm30,
    #[serde(rename = "20cm")]
    Cm20,
    #[serde(rename = "10cm")]
    Cm10,
}

impl Platform {
    /// Platforms ordered from easiest to hardest.
    pub const ALL: [Platform; 4] = [Platform::Cm40, Platform::Cm30, Platform::Cm20, Platform::Cm10];

    pub fn height_cm(self) -> u8 {
        match self {
            Platform::Cm40 => 40,
            Platform::Cm30 => 30,
            Platform::Cm20 => 20,
            Platform::Cm10 => 10,
        }
    }

    fn rank(self) -> u8 {
        match self {
            Platform::Cm40 => 0,
            Platform::Cm30 => 1,
            Platform::Cm20 => 2,
            Platform::Cm10 => 3,
        }
    }
}

/// The hardest condition the subject managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StandUpCondition {
    pub legs: Legs,
    pub platform: Platform,
}

/// Ordinal stand-up score, 0 (cannot rise from 40 cm with both legs) to
/// 8 (rises on one leg from 10 cm). Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u8", into = "u8")]
#[ts(export)]
pub struct StandUpScore(u8);

impl StandUpScore {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 8;

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > Self::MAX {
            return Err(CoreError::OutOfRange {
                field: "stand_up_score",
                value: f64::from(value),
                min: f64::from(Self::MIN),
                max: f64::from(Self::MAX),
            });
        }
        Ok(Self(value))
    }

    /// The score for a successfully performed condition.
    pub fn from_condition(condition: StandUpCondition) -> Self {
        let base = match condition.legs {
            Legs::Both => 1,
            Legs::One => 5,
        };
        Self(base + condition.platform.rank())
    }

    /// The condition this score stands for; `None` for score 0.
    pub fn condition(self) -> Option<StandUpCondition> {
        let (legs, offset) = match self.0 {
            0 => return None,
            v @ 1..=4 => (Legs::Both, v - 1),
            v => (Legs::One, v - 5),
        };
        Some(StandUpCondition {
            legs,
            platform: Platform::ALL[usize::from(offset)],
        })
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for StandUpScore {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StandUpScore> for u8 {
    fn from(score: StandUpScore) -> Self {
        score.0
    }
}

impl fmt::Display for StandUpScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
