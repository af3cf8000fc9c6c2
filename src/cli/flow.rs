//! Drives a [`WizardSession`] against a [`WizardInteraction`] and submits
//! the finished plan. The loop mirrors the step machine: field prompts feed
//! the draft, `next` gates advancement, review submits.

use crate::cli::interaction::{
    ChoiceAction, ReviewAction, StepContext, TextAction, WizardInteraction,
};
use crate::plan::draft::{Importance, PlanDraft, Urgency, MINOR_GOAL_COUNT};
use crate::plan::steps::{StepId, PLAN_STEPS};
use crate::plan::task::TaskId;
use crate::plan::validation::FieldKey;
use crate::submit::{SubmitError, Submitter};
use crate::wizard::{review_summary, WizardSession};

/// How the finished plan is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(TaskId),
}

/// Terminal result of one wizard run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardOutcome {
    Saved,
    Cancelled,
}

fn step_context(session: &WizardSession) -> StepContext {
    StepContext {
        step: session.step_meta(),
        index: session.step().index(),
        total: PLAN_STEPS.len(),
        progress: session.progress_percent(),
    }
}

/// Runs the wizard to completion, cancellation, or a saved plan.
///
/// A rejected submission attaches the server's message as a single
/// root-level error and keeps the session on the review step with every
/// entered value intact.
pub async fn run_wizard<I: WizardInteraction>(
    interaction: &mut I,
    submitter: &Submitter<'_>,
    target: SubmitTarget,
    initial: PlanDraft,
) -> WizardOutcome {
    let mut session = WizardSession::with_draft(initial);
    let mut root_error: Option<String> = None;

    loop {
        let context = step_context(&session);
        match session.step() {
            StepId::Task => {
                let current = session.draft().task.clone();
                let error = session.errors().get(FieldKey::Task).map(str::to_string);
                match interaction.prompt_text(&context, "Main task", &current, error.as_deref()) {
                    TextAction::Input(value) => {
                        session.draft_mut().task = value;
                        session.next();
                    }
                    TextAction::Back => {
                        session.back();
                    }
                    TextAction::Cancel => return WizardOutcome::Cancelled,
                }
            }
            StepId::MainGoal => {
                let current = session.draft().main_goal.clone();
                let error = session.errors().get(FieldKey::MainGoal).map(str::to_string);
                match interaction.prompt_text(&context, "Main goal", &current, error.as_deref()) {
                    TextAction::Input(value) => {
                        session.draft_mut().main_goal = value;
                        session.next();
                    }
                    TextAction::Back => {
                        session.back();
                    }
                    TextAction::Cancel => return WizardOutcome::Cancelled,
                }
            }
            StepId::MinorGoals => {
                if !collect_minor_goals(interaction, &mut session, &context) {
                    return WizardOutcome::Cancelled;
                }
            }
            StepId::Importance => {
                let options: Vec<(&str, &str)> = Importance::ALL
                    .iter()
                    .map(|level| (level.label(), level.hint()))
                    .collect();
                let current = session
                    .draft()
                    .importance
                    .and_then(|level| Importance::ALL.iter().position(|l| *l == level));
                let error = session.errors().get(FieldKey::Importance).map(str::to_string);
                match interaction.prompt_choice(&context, &options, current, error.as_deref()) {
                    ChoiceAction::Pick(index) => {
                        session.draft_mut().importance = Some(Importance::ALL[index]);
                        session.next();
                    }
                    ChoiceAction::Back => {
                        session.back();
                    }
                    ChoiceAction::Cancel => return WizardOutcome::Cancelled,
                }
            }
            StepId::Urgency => {
                let options: Vec<(&str, &str)> = Urgency::ALL
                    .iter()
                    .map(|level| (level.label(), level.hint()))
                    .collect();
                let current = session
                    .draft()
                    .urgency
                    .and_then(|level| Urgency::ALL.iter().position(|l| *l == level));
                let error = session.errors().get(FieldKey::Urgency).map(str::to_string);
                match interaction.prompt_choice(&context, &options, current, error.as_deref()) {
                    ChoiceAction::Pick(index) => {
                        session.draft_mut().urgency = Some(Urgency::ALL[index]);
                        session.next();
                    }
                    ChoiceAction::Back => {
                        session.back();
                    }
                    ChoiceAction::Cancel => return WizardOutcome::Cancelled,
                }
            }
            StepId::Review => {
                let summary = review_summary(session.draft());
                match interaction.review(&context, &summary, root_error.as_deref()) {
                    ReviewAction::Submit => {
                        let result = match &target {
                            SubmitTarget::Create => submitter.create(session.draft()).await,
                            SubmitTarget::Update(id) => {
                                submitter.update(id, session.draft()).await
                            }
                        };
                        match result {
                            Ok(()) => return WizardOutcome::Saved,
                            Err(SubmitError::Rejected(message)) => {
                                tracing::warn!(%message, "submission rejected");
                                root_error = Some(message);
                            }
                            Err(SubmitError::Invalid(_)) => {
                                // Review is only reachable through validated
                                // steps; a late mismatch sends the user back.
                                root_error = Some("Please fix the highlighted fields.".into());
                            }
                        }
                    }
                    ReviewAction::Back => {
                        root_error = None;
                        session.back();
                    }
                    ReviewAction::Cancel => return WizardOutcome::Cancelled,
                }
            }
        }
    }
}

/// Prompts the three minor goals in order, supporting back-navigation across
/// the trio. Returns `false` on cancel.
fn collect_minor_goals<I: WizardInteraction>(
    interaction: &mut I,
    session: &mut WizardSession,
    context: &StepContext,
) -> bool {
    let mut index = 0;
    while index < MINOR_GOAL_COUNT {
        let label = format!("Minor goal #{}", index + 1);
        let current = session.draft().minor_goals[index].clone();
        let error = session
            .errors()
            .get(FieldKey::MinorGoal(index))
            .map(str::to_string);
        match interaction.prompt_text(context, &label, &current, error.as_deref()) {
            TextAction::Input(value) => {
                session.draft_mut().minor_goals[index] = value;
                index += 1;
            }
            TextAction::Back => {
                if index > 0 {
                    index -= 1;
                } else {
                    session.back();
                    return true;
                }
            }
            TextAction::Cancel => return false,
        }
    }
    session.next();
    true
}
