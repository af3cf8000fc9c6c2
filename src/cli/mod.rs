//! Interactive front end: main menu, task browsing, and the plan wizard.

pub mod flow;
pub mod interaction;
pub mod render;

use colored::Colorize;
use dialoguer::Select;

use crate::api::TaskApi;
use crate::cli::flow::{run_wizard, SubmitTarget, WizardOutcome};
use crate::cli::interaction::TerminalInteraction;
use crate::errors::PlannerError;
use crate::plan::draft::PlanDraft;
use crate::submit::Submitter;
use crate::views::detail::TaskDetailView;
use crate::views::list::{ListState, TaskListView, EMPTY_MESSAGE, LOADING_MESSAGE};

/// Runs the main menu loop until the user quits.
pub async fn run(api: &TaskApi) -> Result<(), PlannerError> {
    loop {
        let items = ["View tasks", "Plan a task", "Quit"];
        let choice = Select::new()
            .with_prompt("Study planner")
            .items(&items)
            .default(0)
            .interact_opt()?;
        match choice {
            Some(0) => browse_tasks(api).await?,
            Some(1) => plan_task(api).await?,
            _ => return Ok(()),
        }
    }
}

async fn fetch_into_view(api: &TaskApi, view: &mut TaskListView) {
    let token = view.begin_fetch();
    println!("{}", LOADING_MESSAGE.dimmed());
    let result = api.list_tasks().await;
    view.apply_fetch(token, result);
}

async fn browse_tasks(api: &TaskApi) -> Result<(), PlannerError> {
    let mut view = TaskListView::new();
    fetch_into_view(api, &mut view).await;

    loop {
        let tasks = match view.state() {
            ListState::Loading => {
                // Fetch already applied; loading here means nothing arrived.
                return Ok(());
            }
            ListState::Empty => {
                println!("{}", EMPTY_MESSAGE.dimmed());
                return Ok(());
            }
            ListState::Error(message) => {
                println!("{}", message.red());
                return Ok(());
            }
            ListState::Populated(tasks) => tasks.clone(),
        };

        println!();
        for (index, task) in tasks.iter().enumerate() {
            render::print_task_card(index + 1, task);
        }
        let mut items: Vec<String> = tasks.iter().map(|task| task.task.clone()).collect();
        items.push("← Back".to_string());
        let selection = Select::new()
            .with_prompt("Open a task")
            .items(&items)
            .default(0)
            .interact_opt()?;
        let Some(index) = selection.filter(|index| *index < tasks.len()) else {
            view.close();
            return Ok(());
        };
        let refreshed = show_detail(api, tasks[index].clone()).await?;
        if refreshed {
            fetch_into_view(api, &mut view).await;
        }
    }
}

/// Detail/edit loop for one task. Returns `true` when the caller should
/// refresh its list (a save went through).
async fn show_detail(api: &TaskApi, task: crate::plan::task::PersistedTask) -> Result<bool, PlannerError> {
    let mut view = TaskDetailView::new(task);
    let mut saved = false;

    loop {
        render::print_detail(&view);
        let items = ["Edit task", "Delete", "Close"];
        let choice = Select::new()
            .with_prompt("Task actions")
            .items(&items)
            .default(0)
            .interact_opt()?;
        match choice {
            Some(0) => {
                let Some(id) = view.task().id.clone() else {
                    println!("{}", "This task has no id; editing is unavailable.".yellow());
                    continue;
                };
                view.start_edit();
                let submitter = Submitter::new(api);
                let mut interaction = TerminalInteraction::new();
                let outcome = run_wizard(
                    &mut interaction,
                    &submitter,
                    SubmitTarget::Update(id),
                    view.form().clone(),
                )
                .await;
                match outcome {
                    WizardOutcome::Saved => {
                        println!("{}", "Task updated.".green());
                        // Close the modal and let the list re-fetch.
                        saved = true;
                        return Ok(saved);
                    }
                    WizardOutcome::Cancelled => view.cancel_edit(),
                }
            }
            Some(1) => {
                if let Err(error) = view.delete() {
                    println!("{}", error.to_string().yellow());
                }
            }
            _ => return Ok(saved),
        }
    }
}

async fn plan_task(api: &TaskApi) -> Result<(), PlannerError> {
    let submitter = Submitter::new(api);
    let mut interaction = TerminalInteraction::new();
    match run_wizard(
        &mut interaction,
        &submitter,
        SubmitTarget::Create,
        PlanDraft::default(),
    )
    .await
    {
        WizardOutcome::Saved => println!("{}", "Plan saved.".green()),
        WizardOutcome::Cancelled => println!("{}", "Plan discarded.".dimmed()),
    }
    Ok(())
}
