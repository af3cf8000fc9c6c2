//! Declarative field constraints for the plan schema.
//!
//! Validation is pure: the same draft always produces the same outcome, and
//! nothing here touches I/O or shared state. Errors are keyed per field, with
//! minor goals independently addressable by index so callers can attach a
//! message beside the right input.

use std::collections::BTreeMap;
use std::fmt;

use crate::plan::draft::{Importance, PlanDraft, Urgency, MINOR_GOAL_COUNT};
use crate::plan::steps::StepId;

pub const TASK_MIN: usize = 3;
pub const TASK_MAX: usize = 80;
pub const MAIN_GOAL_MIN: usize = 5;
pub const MAIN_GOAL_MAX: usize = 160;
pub const MINOR_GOAL_MIN: usize = 3;
pub const MINOR_GOAL_MAX: usize = 120;

/// Addressable location of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldKey {
    Task,
    MainGoal,
    MinorGoal(usize),
    Importance,
    Urgency,
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Task => f.write_str("task"),
            FieldKey::MainGoal => f.write_str("main goal"),
            FieldKey::MinorGoal(index) => write!(f, "minor goal #{}", index + 1),
            FieldKey::Importance => f.write_str("importance"),
            FieldKey::Urgency => f.write_str("urgency"),
        }
    }
}

/// Field-keyed mapping of human-readable messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<FieldKey, String>,
}

impl ValidationErrors {
    pub fn insert(&mut self, key: FieldKey, message: impl Into<String>) {
        self.entries.insert(key, message.into());
    }

    pub fn get(&self, key: FieldKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &str)> {
        self.entries.iter().map(|(key, msg)| (*key, msg.as_str()))
    }
}

/// Fully-checked view over a draft, produced only when every field passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedPlan<'a> {
    pub task: &'a str,
    pub main_goal: &'a str,
    pub minor_goals: &'a [String; MINOR_GOAL_COUNT],
    pub importance: Importance,
    pub urgency: Urgency,
}

fn check_task(draft: &PlanDraft, errors: &mut ValidationErrors) {
    let len = draft.task.chars().count();
    if len < TASK_MIN {
        errors.insert(FieldKey::Task, "Task should be at least 3 characters");
    } else if len > TASK_MAX {
        errors.insert(FieldKey::Task, "Task should be at most 80 characters");
    }
}

fn check_main_goal(draft: &PlanDraft, errors: &mut ValidationErrors) {
    let len = draft.main_goal.chars().count();
    if len < MAIN_GOAL_MIN {
        errors.insert(FieldKey::MainGoal, "Goal should be at least 5 characters");
    } else if len > MAIN_GOAL_MAX {
        errors.insert(FieldKey::MainGoal, "Goal should be at most 160 characters");
    }
}

fn check_minor_goals(draft: &PlanDraft, errors: &mut ValidationErrors) {
    for (index, goal) in draft.minor_goals.iter().enumerate() {
        let len = goal.chars().count();
        if len < MINOR_GOAL_MIN {
            errors.insert(FieldKey::MinorGoal(index), format!("Add goal #{}", index + 1));
        } else if len > MINOR_GOAL_MAX {
            errors.insert(
                FieldKey::MinorGoal(index),
                format!("Minor goal #{} should be at most 120 characters", index + 1),
            );
        }
    }
}

fn check_importance(draft: &PlanDraft, errors: &mut ValidationErrors) {
    if draft.importance.is_none() {
        errors.insert(FieldKey::Importance, "Choose an importance level");
    }
}

fn check_urgency(draft: &PlanDraft, errors: &mut ValidationErrors) {
    if draft.urgency.is_none() {
        errors.insert(FieldKey::Urgency, "Choose an urgency level");
    }
}

/// Validates only the fields belonging to one wizard step.
///
/// The review step gates nothing of its own; it is reachable only after every
/// prior step has passed.
pub fn validate_step(draft: &PlanDraft, step: StepId) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    match step {
        StepId::Task => check_task(draft, &mut errors),
        StepId::MainGoal => check_main_goal(draft, &mut errors),
        StepId::MinorGoals => check_minor_goals(draft, &mut errors),
        StepId::Importance => check_importance(draft, &mut errors),
        StepId::Urgency => check_urgency(draft, &mut errors),
        StepId::Review => {}
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the whole draft, yielding a typed view when submittable.
pub fn validate_draft(draft: &PlanDraft) -> Result<ValidatedPlan<'_>, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_task(draft, &mut errors);
    check_main_goal(draft, &mut errors);
    check_minor_goals(draft, &mut errors);
    check_importance(draft, &mut errors);
    check_urgency(draft, &mut errors);

    match (draft.importance, draft.urgency) {
        (Some(importance), Some(urgency)) if errors.is_empty() => Ok(ValidatedPlan {
            task: &draft.task,
            main_goal: &draft.main_goal,
            minor_goals: &draft.minor_goals,
            importance,
            urgency,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> PlanDraft {
        PlanDraft {
            task: "Finish essay".into(),
            main_goal: "Hand in a polished draft".into(),
            minor_goals: ["Outline".into(), "Write body".into(), "Proofread".into()],
            ..PlanDraft::default()
        }
    }

    #[test]
    fn valid_draft_passes_all_fields() {
        let draft = valid_draft();
        let plan = validate_draft(&draft).unwrap();
        assert_eq!(plan.task, "Finish essay");
        assert_eq!(plan.importance, Importance::Medium);
        assert_eq!(plan.urgency, Urgency::Soon);
    }

    #[test]
    fn validation_is_deterministic() {
        let mut draft = valid_draft();
        draft.task = "Fi".into();
        let first = validate_draft(&draft).unwrap_err();
        let second = validate_draft(&draft).unwrap_err();
        assert_eq!(first, second);
    }

    #[test]
    fn short_task_reports_its_own_message() {
        let mut draft = valid_draft();
        draft.task = "Fi".into();
        let errors = validate_step(&draft, StepId::Task).unwrap_err();
        assert_eq!(
            errors.get(FieldKey::Task),
            Some("Task should be at least 3 characters")
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let mut draft = valid_draft();
        // three characters, more than three bytes
        draft.task = "äöü".into();
        assert!(validate_step(&draft, StepId::Task).is_ok());
    }

    #[test]
    fn overlong_fields_are_rejected() {
        let mut draft = valid_draft();
        draft.task = "x".repeat(TASK_MAX + 1);
        draft.main_goal = "y".repeat(MAIN_GOAL_MAX + 1);
        draft.minor_goals[2] = "z".repeat(MINOR_GOAL_MAX + 1);
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(
            errors.get(FieldKey::Task),
            Some("Task should be at most 80 characters")
        );
        assert_eq!(
            errors.get(FieldKey::MainGoal),
            Some("Goal should be at most 160 characters")
        );
        assert_eq!(
            errors.get(FieldKey::MinorGoal(2)),
            Some("Minor goal #3 should be at most 120 characters")
        );
    }

    #[test]
    fn minor_goal_messages_are_indexed() {
        let mut draft = valid_draft();
        draft.minor_goals = ["".into(), "ok goal".into(), "no".into()];
        let errors = validate_step(&draft, StepId::MinorGoals).unwrap_err();
        assert_eq!(errors.get(FieldKey::MinorGoal(0)), Some("Add goal #1"));
        assert_eq!(errors.get(FieldKey::MinorGoal(1)), None);
        assert_eq!(errors.get(FieldKey::MinorGoal(2)), Some("Add goal #3"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn missing_levels_ask_for_a_choice() {
        let mut draft = valid_draft();
        draft.importance = None;
        draft.urgency = None;
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(
            errors.get(FieldKey::Importance),
            Some("Choose an importance level")
        );
        assert_eq!(errors.get(FieldKey::Urgency), Some("Choose an urgency level"));
    }

    #[test]
    fn step_validation_ignores_other_fields() {
        let mut draft = valid_draft();
        draft.main_goal = "no".into();
        // The main-goal error must not block the task step.
        assert!(validate_step(&draft, StepId::Task).is_ok());
        assert!(validate_step(&draft, StepId::MainGoal).is_err());
        assert!(validate_step(&draft, StepId::Review).is_ok());
    }
}
