//! Lesson step sequencer.
//!
//! Owns the only meaningful mutable state in the system: which lesson is
//! active, which step index, and which component is highlighted. Everything it
//! cursors over is immutable authored content.

use tracing::debug;

use crate::domain::{ComponentId, Lesson, LessonStep};

pub struct LessonSequencer {
    lessons: &'static [Lesson],
    active: usize,
    step: usize,
    selection: Option<ComponentId>,
}

impl LessonSequencer {
    /// Content must be non-empty; the shipped collection guarantees it.
    pub fn new(lessons: &'static [Lesson]) -> Self {
        assert!(!lessons.is_empty(), "lesson collection must not be empty");
        Self {
            lessons,
            active: 0,
            step: 0,
            selection: None,
        }
    }

    pub fn lessons(&self) -> &'static [Lesson] {
        self.lessons
    }

    /// Select a lesson by id. Unknown ids fall back silently to the first
    /// lesson. Resets the step cursor and clears the component selection.
    pub fn select_lesson(&mut self, id: &str) -> &Lesson {
        let index = self.lessons.iter().position(|l| l.id == id);
        if index.is_none() {
            debug!(lesson = id, "unknown lesson id, falling back to default");
        }
        self.active = index.unwrap_or(0);
        self.step = 0;
        self.selection = None;
        self.current_lesson()
    }

    /// Clamped forward navigation; a no-op on the last step.
    pub fn next_step(&mut self) -> &LessonStep {
        let last = self.current_lesson().steps.len() - 1;
        self.step = (self.step + 1).min(last);
        self.current_step()
    }

    /// Clamped backward navigation; a no-op on step zero.
    pub fn prev_step(&mut self) -> &LessonStep {
        self.step = self.step.saturating_sub(1);
        self.current_step()
    }

    pub fn current_lesson(&self) -> &'static Lesson {
        &self.lessons[self.active]
    }

    /// Always defined: lessons carry at least one step by authoring invariant.
    pub fn current_step(&self) -> &'static LessonStep {
        &self.current_lesson().steps[self.step]
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn select_component(&mut self, component: Option<ComponentId>) {
        self.selection = component;
    }

    pub fn selection(&self) -> Option<ComponentId> {
        self.selection
    }

    /// Context string handed to the tutor capability: active lesson, step, and
    /// selection when present.
    pub fn tutor_context(&self) -> String {
        let lesson = self.current_lesson();
        let step = self.current_step();
        let mut ctx = format!(
            "Lesson: {}. Step: {}. Description: {}",
            lesson.title, step.title, step.description
        );
        if let Some(component) = self.selection {
            ctx.push_str(&format!(" Selected component: {component}."));
        }
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    fn sequencer() -> LessonSequencer {
        LessonSequencer::new(content::lessons())
    }

    #[test]
    fn starts_on_first_lesson_first_step() {
        let seq = sequencer();
        assert_eq!(seq.current_lesson().id, "principle-online");
        assert_eq!(seq.step_index(), 0);
    }

    #[test]
    fn unknown_lesson_falls_back_to_default() {
        let mut seq = sequencer();
        seq.select_lesson("op-single-maint");
        seq.next_step();

        seq.select_lesson("does-not-exist");
        assert_eq!(seq.current_lesson().id, "principle-online");
        assert_eq!(seq.step_index(), 0);
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut seq = sequencer();
        seq.select_lesson("op-single-start"); // 3 steps

        seq.prev_step();
        assert_eq!(seq.step_index(), 0, "prev at start stays put");

        seq.next_step();
        seq.next_step();
        assert_eq!(seq.step_index(), 2);
        seq.next_step();
        assert_eq!(seq.step_index(), 2, "next at end stays put");
    }

    #[test]
    fn selecting_a_lesson_clears_selection_and_cursor() {
        let mut seq = sequencer();
        seq.select_component(Some(ComponentId::Rectifier));
        seq.next_step();

        seq.select_lesson("principle-bypass");
        assert_eq!(seq.selection(), None);
        assert_eq!(seq.step_index(), 0);
    }

    #[test]
    fn tutor_context_mentions_lesson_step_and_selection() {
        let mut seq = sequencer();
        seq.select_lesson("principle-battery");
        seq.select_component(Some(ComponentId::Q5));

        let ctx = seq.tutor_context();
        assert!(ctx.contains("Battery Operation"));
        assert!(ctx.contains("Mains failure"));
        assert!(ctx.contains("Q5"));
    }
}
