pub mod component;
pub mod lesson;
pub mod state;

pub use component::ComponentId;
pub use lesson::{Difficulty, Lesson, LessonCategory, LessonStep, LessonSummary};
pub use state::{LoadSource, SystemState, UnitLayout, UpsUnitState, ViewMode};
