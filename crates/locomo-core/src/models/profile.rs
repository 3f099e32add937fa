use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

pub const MAX_AGE: u32 = 120;
pub const MAX_HEIGHT_CM: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// The person taking the check. Captured once at the profile step.
///
/// Fields are read-only after construction; both [`UserProfile::new`] and
/// deserialization run the same validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(try_from = "ProfileRecord", into = "ProfileRecord")]
#[ts(export)]
pub struct UserProfile {
    name: String,
    age: u32,
    gender: Gender,
    height_cm: f64,
}

impl UserProfile {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gender: Gender,
        height_cm: f64,
    ) -> Result<Self, CoreError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(CoreError::InvalidProfile("name must not be blank".to_string()));
        }
        if age == 0 || age > MAX_AGE {
            return Err(CoreError::InvalidProfile(format!(
                "age {age} is outside 1..={MAX_AGE}"
            )));
        }
        if !height_cm.is_finite() || height_cm <= 0.0 || height_cm > MAX_HEIGHT_CM {
            return Err(CoreError::InvalidProfile(format!(
                "height {height_cm} cm is outside (0, {MAX_HEIGHT_CM}]"
            )));
        }

        Ok(Self {
            name,
            age,
            gender,
            height_cm,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

#[derive(Serialize, Deserialize)]
struct ProfileRecord {
    name: String,
    age: u32,
    gender: Gender,
    height_cm: f64,
}

impl TryFrom<ProfileRecord> for UserProfile {
    type Error = CoreError;

    fn try_from(r: ProfileRecord) -> Result<Self, Self::Error> {
        UserProfile::new(r.name, r.age, r.gender, r.height_cm)
    }
}

impl From<UserProfile> for ProfileRecord {
    fn from(p: UserProfile) -> Self {
        Self {
            name: p.name,
            age: p.age,
            gender: p.gender,
            height_cm: p.height_cm,
        }
    }
}
