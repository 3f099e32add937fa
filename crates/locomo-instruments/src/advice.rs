//! Level-specific guidance.
//!
//! The exercise and diet entries are shared by every level; only the summary
//! sentence and the exercise section title change. All of it is data, so a
//! catalog loaded from JSON can replace the built-in one.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use locomo_core::models::level::LocomoLevel;

use crate::assets;
use crate::error::InstrumentError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Exercise {
    pub name: String,
    /// Target repetitions or duration.
    pub goal: String,
    /// Form cues.
    pub points: Vec<String>,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExercisePlan {
    pub title: String,
    pub items: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DietGuidance {
    pub title: String,
    pub nutrients: Vec<String>,
    pub description: String,
    pub image_url: String,
}

/// Everything shown to the user for one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdviceBundle {
    #[ts(type = "number")]
    pub level: LocomoLevel,
    pub summary: String,
    pub exercise: ExercisePlan,
    pub diet: DietGuidance,
}

/// The part of the advice that differs per level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LevelMessage {
    #[ts(type = "number")]
    pub level: LocomoLevel,
    pub summary: String,
    pub exercise_title: String,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    exercises: Vec<Exercise>,
    diet: DietGuidance,
    messages: Vec<LevelMessage>,
}

/// Advice content for all four levels.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceCatalog {
    exercises: Vec<Exercise>,
    diet: DietGuidance,
    /// Indexed by level value.
    messages: [LevelMessage; 4],
}

static BUILTIN: LazyLock<AdviceCatalog> = LazyLock::new(|| AdviceCatalog {
    exercises: vec![
        Exercise {
            name: "1. One-leg stand (balance)".to_string(),
            goal: "1 minute per leg, 3 sets a day".to_string(),
            points: strings(&[
                "Always hold on to something (a desk or wall) so you cannot fall",
                "Lift one foot just clear of the floor",
                "Keep your posture upright",
                "The supporting knee may bend slightly",
            ]),
            image_url: assets::image_url(assets::ONE_LEG_STAND),
        },
        Exercise {
            name: "2. Squat (leg strength)".to_string(),
            goal: "5-6 repetitions, 3 sets a day".to_string(),
            points: strings(&[
                "Stand with feet slightly wider than shoulder width",
                "Lower yourself slowly as if pushing your hips back",
                "Keep your knees from moving past your toes",
                "Do not hold your breath; breathe at a relaxed pace",
            ]),
            image_url: assets::image_url(assets::SQUAT),
        },
    ],
    diet: DietGuidance {
        title: "Eating to get more from exercise: building blocks for bone and muscle".to_string(),
        nutrients: strings(&[
            "Protein (meat, fish, beans)",
            "Calcium (dairy, small fish)",
            "Vitamin D (mushrooms, fish)",
            "Vitamin K (green vegetables, natto)",
        ]),
        description: "Nutrients that build the body matter as much as exercise. \
            Three balanced meals a day are the basis; older adults in particular \
            should make sure they get enough protein, along with the calcium and \
            vitamins that keep bones strong."
            .to_string(),
        image_url: assets::image_url(assets::FOOD),
    },
    messages: [
        message(
            LocomoLevel::None,
            "No locomotive syndrome. Keep up your current level of function.",
            "Keep going for the years ahead",
        ),
        message(
            LocomoLevel::One,
            "Locomo level 1: mobility has started to decline.",
            "Start the exercises now as prevention",
        ),
        message(
            LocomoLevel::Two,
            "Locomo level 2: the decline in mobility is progressing.",
            "Make the exercises a daily habit",
        ),
        message(
            LocomoLevel::Three,
            "Locomo level 3: mobility is limiting participation in daily and social life.",
            "Start within what you can comfortably manage",
        ),
    ],
});

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn message(level: LocomoLevel, summary: &str, exercise_title: &str) -> LevelMessage {
    LevelMessage {
        level,
        summary: summary.to_string(),
        exercise_title: exercise_title.to_string(),
    }
}

impl AdviceCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> &'static AdviceCatalog {
        &BUILTIN
    }

    /// Load a catalog from JSON. Every level must have exactly one message.
    pub fn from_json(json: &str) -> Result<Self, InstrumentError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        if file.exercises.is_empty() {
            return Err(InstrumentError::Catalog("no exercises defined".to_string()));
        }

        let mut slots: [Option<LevelMessage>; 4] = Default::default();
        for msg in file.messages {
            let slot = &mut slots[usize::from(msg.level.as_u8())];
            if slot.is_some() {
                return Err(InstrumentError::Catalog(format!(
                    "duplicate message for level {}",
                    msg.level.as_u8()
                )));
            }
            *slot = Some(msg);
        }

        let [m0, m1, m2, m3] = slots;
        let missing = |level: u8| InstrumentError::Catalog(format!("no message for level {level}"));
        let messages = [
            m0.ok_or_else(|| missing(0))?,
            m1.ok_or_else(|| missing(1))?,
            m2.ok_or_else(|| missing(2))?,
            m3.ok_or_else(|| missing(3))?,
        ];

        Ok(Self {
            exercises: file.exercises,
            diet: file.diet,
            messages,
        })
    }

    pub fn advice_for(&self, level: LocomoLevel) -> AdviceBundle {
        let message = &self.messages[usize::from(level.as_u8())];
        AdviceBundle {
            level,
            summary: message.summary.clone(),
            exercise: ExercisePlan {
                title: message.exercise_title.clone(),
                items: self.exercises.clone(),
            },
            diet: self.diet.clone(),
        }
    }
}

/// Advice from the built-in catalog.
pub fn advice_for(level: LocomoLevel) -> AdviceBundle {
    AdviceCatalog::builtin().advice_for(level)
}
