use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Locomotive-syndrome severity. `None` means no impairment, `Three` is the
/// most severe. Serialized as the bare integer 0–3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LocomoLevel {
    None = 0,
    One = 1,
    Two = 2,
    Three = 3,
}

impl LocomoLevel {
    pub const ALL: [LocomoLevel; 4] = [
        LocomoLevel::None,
        LocomoLevel::One,
        LocomoLevel::Two,
        LocomoLevel::Three,
    ];

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for LocomoLevel {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LocomoLevel::None),
            1 => Ok(LocomoLevel::One),
            2 => Ok(LocomoLevel::Two),
            3 => Ok(LocomoLevel::Three),
            other => Err(CoreError::OutOfRange {
                field: "locomo_level",
                value: f64::from(other),
                min: 0.0,
                max: 3.0,
            }),
        }
    }
}

impl From<LocomoLevel> for u8 {
    fn from(level: LocomoLevel) -> Self {
        level.as_u8()
    }
}

impl fmt::Display for LocomoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Locomo level {}", self.as_u8())
    }
}
