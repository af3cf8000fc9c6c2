//! Interaction surface for the wizard.
//!
//! The flow driver talks to a trait so tests can script responses; the
//! interactive implementation leans on dialoguer for prompts and the shared
//! render helpers for headers.

use dialoguer::{Input, Select};

use crate::cli::render;
use crate::plan::steps::PlanStep;

/// Position and metadata of the step being prompted.
#[derive(Debug, Clone, Copy)]
pub struct StepContext {
    pub step: &'static PlanStep,
    pub index: usize,
    pub total: usize,
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextAction {
    Input(String),
    Back,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceAction {
    Pick(usize),
    Back,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Submit,
    Back,
    Cancel,
}

pub trait WizardInteraction {
    /// Prompts for one free-text field.
    fn prompt_text(
        &mut self,
        context: &StepContext,
        label: &str,
        current: &str,
        error: Option<&str>,
    ) -> TextAction;

    /// Prompts for one of an enumerated set; `options` pairs label and hint.
    fn prompt_choice(
        &mut self,
        context: &StepContext,
        options: &[(&str, &str)],
        current: Option<usize>,
        error: Option<&str>,
    ) -> ChoiceAction;

    /// Shows the review summary and asks what to do with it.
    fn review(
        &mut self,
        context: &StepContext,
        summary: &[(String, String)],
        root_error: Option<&str>,
    ) -> ReviewAction;
}

/// Literal a user types in a text prompt to revisit the previous field.
const BACK_COMMAND: &str = ":back";
/// Literal a user types to abort the wizard.
const CANCEL_COMMAND: &str = ":cancel";

/// Terminal implementation backed by dialoguer.
#[derive(Debug, Default)]
pub struct TerminalInteraction;

impl TerminalInteraction {
    pub fn new() -> Self {
        Self
    }
}

impl WizardInteraction for TerminalInteraction {
    fn prompt_text(
        &mut self,
        context: &StepContext,
        label: &str,
        current: &str,
        error: Option<&str>,
    ) -> TextAction {
        render::print_step_header(context);
        if let Some(message) = error {
            render::print_field_error(message);
        }
        render::print_hint(&format!(
            "Type {BACK_COMMAND} to revisit the previous field, {CANCEL_COMMAND} to abort."
        ));
        let result = Input::<String>::new()
            .with_prompt(label)
            .with_initial_text(current.to_string())
            .allow_empty(true)
            .interact_text();
        match result {
            Ok(value) if value.trim() == BACK_COMMAND => TextAction::Back,
            Ok(value) if value.trim() == CANCEL_COMMAND => TextAction::Cancel,
            Ok(value) => TextAction::Input(value),
            Err(_) => TextAction::Cancel,
        }
    }

    fn prompt_choice(
        &mut self,
        context: &StepContext,
        options: &[(&str, &str)],
        current: Option<usize>,
        error: Option<&str>,
    ) -> ChoiceAction {
        render::print_step_header(context);
        if let Some(message) = error {
            render::print_field_error(message);
        }
        let mut items: Vec<String> = options
            .iter()
            .map(|(label, hint)| format!("{label} — {hint}"))
            .collect();
        items.push("← Back".to_string());
        let result = Select::new()
            .with_prompt("Use ↑ ↓ and Enter to select")
            .items(&items)
            .default(current.unwrap_or(0))
            .interact_opt();
        match result {
            Ok(Some(index)) if index < options.len() => ChoiceAction::Pick(index),
            Ok(Some(_)) => ChoiceAction::Back,
            Ok(None) | Err(_) => ChoiceAction::Cancel,
        }
    }

    fn review(
        &mut self,
        context: &StepContext,
        summary: &[(String, String)],
        root_error: Option<&str>,
    ) -> ReviewAction {
        render::print_step_header(context);
        render::print_summary(summary);
        if let Some(message) = root_error {
            render::print_root_error(message);
        }
        let items = ["Save plan", "← Back", "Cancel"];
        let result = Select::new()
            .with_prompt("Ready?")
            .items(&items)
            .default(0)
            .interact_opt();
        match result {
            Ok(Some(0)) => ReviewAction::Submit,
            Ok(Some(1)) => ReviewAction::Back,
            _ => ReviewAction::Cancel,
        }
    }
}
