//! Static content: courseware and the component knowledge base.

pub mod knowledge;
pub mod lessons;

use tracing::warn;

use crate::domain::Lesson;
use crate::power_flow;

pub use knowledge::{describe, NO_DATA};

/// The shipped lesson collection. Non-empty by construction.
pub fn lessons() -> &'static [Lesson] {
    &lessons::LESSONS
}

pub fn find(id: &str) -> Option<&'static Lesson> {
    lessons().iter().find(|l| l.id == id)
}

/// Cross-check authored `expected_*` values against the evaluator and log a
/// warning for every disagreement. Returns the mismatch count; the shipped
/// content must come back clean, and a non-zero result on custom content is an
/// authoring bug to fix, not a value to silently prefer either way.
pub fn validate(lessons: &[Lesson]) -> usize {
    let mut mismatches = 0;
    for lesson in lessons {
        if lesson.steps.is_empty() {
            warn!(lesson = %lesson.id, "lesson has no steps");
            mismatches += 1;
            continue;
        }
        for step in &lesson.steps {
            if lesson.view_mode != step.system_state.view_mode() {
                warn!(
                    lesson = %lesson.id,
                    step = step.id,
                    "step layout disagrees with lesson view mode"
                );
                mismatches += 1;
            }
            let flow = power_flow::evaluate(&step.system_state);
            if flow.load_source() != step.expected_source
                || flow.load_powered() != step.expected_powered
            {
                warn!(
                    lesson = %lesson.id,
                    step = step.id,
                    authored = %step.expected_source,
                    derived = %flow.load_source(),
                    "authored load source disagrees with evaluator"
                );
                mismatches += 1;
            }
        }
    }
    mismatches
}
