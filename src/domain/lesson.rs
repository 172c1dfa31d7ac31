use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::state::{LoadSource, SystemState, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LessonCategory {
    Principle,
    Operation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Basic,
    Advanced,
    Expert,
}

/// One teaching frame: narrative text plus the breaker/subsystem snapshot the
/// diagram should show while it is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonStep {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Safety callout, rendered prominently when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub system_state: SystemState,
    /// Author-supplied narrative values. The evaluator re-derives both; a
    /// load-time validation pass flags any disagreement instead of silently
    /// preferring either side.
    pub expected_source: LoadSource,
    pub expected_powered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub category: LessonCategory,
    pub difficulty: Difficulty,
    pub view_mode: ViewMode,
    pub steps: Vec<LessonStep>,
}

impl Lesson {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

/// Catalogue entry for lesson listings; everything but the steps.
#[derive(Debug, Clone, Serialize)]
pub struct LessonSummary {
    pub id: String,
    pub title: String,
    pub category: LessonCategory,
    pub difficulty: Difficulty,
    pub view_mode: ViewMode,
    pub step_count: usize,
}

impl From<&Lesson> for LessonSummary {
    fn from(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id.clone(),
            title: lesson.title.clone(),
            category: lesson.category,
            difficulty: lesson.difficulty,
            view_mode: lesson.view_mode,
            step_count: lesson.step_count(),
        }
    }
}
