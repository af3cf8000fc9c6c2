//! Wizard state machine driving the multi-step plan form.
//!
//! The session owns the draft and a step pointer. `next` validates only the
//! fields belonging to the current step; `back` never validates. The review
//! step is terminal and is reachable only by succeeding `next` through every
//! prior step.

use crate::plan::draft::PlanDraft;
use crate::plan::steps::{PlanStep, StepId, PLAN_STEPS};
use crate::plan::validation::{validate_draft, validate_step, ValidatedPlan, ValidationErrors};

/// Outcome of a transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    /// The step pointer moved.
    Moved,
    /// Validation failed; the step is unchanged and errors are exposed.
    Blocked,
    /// The request had no effect (terminal or first step).
    NoOp,
}

/// One in-progress run of the plan wizard.
#[derive(Debug, Clone)]
pub struct WizardSession {
    draft: PlanDraft,
    step: StepId,
    errors: ValidationErrors,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self::with_draft(PlanDraft::default())
    }

    /// Starts a session from existing values, e.g. when editing a persisted
    /// task.
    pub fn with_draft(draft: PlanDraft) -> Self {
        Self {
            draft,
            step: StepId::Task,
            errors: ValidationErrors::default(),
        }
    }

    pub fn step(&self) -> StepId {
        self.step
    }

    pub fn step_meta(&self) -> &'static PlanStep {
        crate::plan::steps::step_for(self.step)
    }

    pub fn draft(&self) -> &PlanDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut PlanDraft {
        &mut self.draft
    }

    /// Errors produced by the most recent blocked `next`.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Validates the current step and advances on success.
    pub fn next(&mut self) -> WizardEvent {
        if self.step.is_terminal() {
            return WizardEvent::NoOp;
        }
        match validate_step(&self.draft, self.step) {
            Ok(()) => {
                self.errors = ValidationErrors::default();
                if let Some(next) = self.step.next() {
                    self.step = next;
                    WizardEvent::Moved
                } else {
                    WizardEvent::NoOp
                }
            }
            Err(errors) => {
                tracing::debug!(step = %self.step, failures = errors.len(), "step blocked");
                self.errors = errors;
                WizardEvent::Blocked
            }
        }
    }

    /// Moves to the previous step unconditionally.
    pub fn back(&mut self) -> WizardEvent {
        match self.step.previous() {
            Some(previous) => {
                self.errors = ValidationErrors::default();
                self.step = previous;
                WizardEvent::Moved
            }
            None => WizardEvent::NoOp,
        }
    }

    /// Display-only completion percentage, clamped to `[0, 100]`.
    pub fn progress_percent(&self) -> u8 {
        let max = PLAN_STEPS.len() - 1;
        let index = self.step.index().min(max);
        ((index as f64 / max as f64) * 100.0).round() as u8
    }

    /// Whether every field of the draft currently satisfies its constraint.
    pub fn is_submittable(&self) -> bool {
        validate_draft(&self.draft).is_ok()
    }

    /// Typed view over the draft, available only when fully valid.
    pub fn validated(&self) -> Result<ValidatedPlan<'_>, ValidationErrors> {
        validate_draft(&self.draft)
    }
}

/// Label/value lines for the review summary, with a placeholder for blanks.
pub fn review_summary(draft: &PlanDraft) -> Vec<(String, String)> {
    fn or_dash(value: &str) -> String {
        if value.is_empty() {
            "—".to_string()
        } else {
            value.to_string()
        }
    }

    let mut lines = vec![
        ("Task".to_string(), or_dash(&draft.task)),
        ("Main goal".to_string(), or_dash(&draft.main_goal)),
    ];
    for (index, goal) in draft.minor_goals.iter().enumerate() {
        lines.push((format!("Minor goal #{}", index + 1), or_dash(goal)));
    }
    lines.push((
        "Importance".to_string(),
        draft.importance.map_or_else(|| "—".to_string(), |level| level.to_string()),
    ));
    lines.push((
        "Urgency".to_string(),
        draft.urgency.map_or_else(|| "—".to_string(), |level| level.to_string()),
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::validation::FieldKey;

    fn filled_session() -> WizardSession {
        WizardSession::with_draft(PlanDraft {
            task: "Finish essay".into(),
            main_goal: "Hand in a polished draft".into(),
            minor_goals: ["Outline".into(), "Write body".into(), "Proofread".into()],
            ..PlanDraft::default()
        })
    }

    #[test]
    fn short_task_blocks_and_exposes_error() {
        let mut session = WizardSession::new();
        session.draft_mut().task = "Fi".into();
        assert_eq!(session.next(), WizardEvent::Blocked);
        assert_eq!(session.step(), StepId::Task);
        assert_eq!(
            session.errors().get(FieldKey::Task),
            Some("Task should be at least 3 characters")
        );

        session.draft_mut().task = "Finish essay".into();
        assert_eq!(session.next(), WizardEvent::Moved);
        assert_eq!(session.step(), StepId::MainGoal);
        assert!(session.errors().is_empty());
    }

    #[test]
    fn review_is_reached_only_through_valid_steps() {
        let mut session = filled_session();
        for expected in [
            StepId::MainGoal,
            StepId::MinorGoals,
            StepId::Importance,
            StepId::Urgency,
            StepId::Review,
        ] {
            assert_eq!(session.next(), WizardEvent::Moved);
            assert_eq!(session.step(), expected);
        }
        assert_eq!(session.next(), WizardEvent::NoOp);
        assert_eq!(session.step(), StepId::Review);
    }

    #[test]
    fn back_never_validates_and_stops_at_first_step() {
        let mut session = WizardSession::new();
        assert_eq!(session.back(), WizardEvent::NoOp);
        assert_eq!(session.step(), StepId::Task);

        let mut session = filled_session();
        assert_eq!(session.next(), WizardEvent::Moved);
        // Invalidate the first step's field; back must still succeed.
        session.draft_mut().task = "x".into();
        assert_eq!(session.back(), WizardEvent::Moved);
        assert_eq!(session.step(), StepId::Task);
    }

    #[test]
    fn draft_values_survive_transitions() {
        let mut session = filled_session();
        session.next();
        session.next();
        session.back();
        session.back();
        assert_eq!(session.draft().task, "Finish essay");
        assert_eq!(session.draft().minor_goals[2], "Proofread");
    }

    #[test]
    fn progress_spans_zero_to_hundred_monotonically() {
        let mut session = filled_session();
        let mut last = session.progress_percent();
        assert_eq!(last, 0);
        while session.next() == WizardEvent::Moved {
            let current = session.progress_percent();
            assert!(current >= last);
            last = current;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn summary_uses_placeholder_for_blanks() {
        let lines = review_summary(&PlanDraft::default());
        assert_eq!(lines[0], ("Task".to_string(), "—".to_string()));
        assert_eq!(lines.last().unwrap().1, "Soon");
        assert_eq!(lines.len(), 7);
    }
}
