//! Detail view over a single persisted task, with an optional edit mode
//! that reuses the plan validation schema.

use crate::errors::PlannerError;
use crate::plan::draft::{PlanDraft, MINOR_GOAL_COUNT};
use crate::plan::task::PersistedTask;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMode {
    Read,
    Edit,
}

#[derive(Debug, Clone)]
pub struct TaskDetailView {
    task: PersistedTask,
    mode: DetailMode,
    form: PlanDraft,
}

impl TaskDetailView {
    pub fn new(task: PersistedTask) -> Self {
        let form = task.to_draft();
        Self {
            task,
            mode: DetailMode::Read,
            form,
        }
    }

    pub fn task(&self) -> &PersistedTask {
        &self.task
    }

    pub fn mode(&self) -> DetailMode {
        self.mode
    }

    /// Minor goals as display lines for read mode.
    pub fn minor_goal_lines(&self) -> [String; MINOR_GOAL_COUNT] {
        self.task.minor_goal_lines()
    }

    /// The in-progress edit form. Seeded from the task; only meaningful to
    /// mutate while in edit mode.
    pub fn form(&self) -> &PlanDraft {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PlanDraft {
        &mut self.form
    }

    pub fn start_edit(&mut self) {
        self.mode = DetailMode::Edit;
    }

    /// Leaves edit mode, dropping unsaved changes.
    pub fn cancel_edit(&mut self) {
        self.mode = DetailMode::Read;
        self.form = self.task.to_draft();
    }

    /// Swaps in a different task: resets to read mode and re-seeds the form.
    pub fn show_task(&mut self, task: PersistedTask) {
        self.form = task.to_draft();
        self.task = task;
        self.mode = DetailMode::Read;
    }

    /// Records a successful save: back to read mode with the task mirror
    /// updated from the saved form values.
    pub fn finish_save(&mut self) {
        self.task.task = self.form.task.clone();
        self.task.main_goal = self.form.main_goal.clone();
        self.task.minor_goals = self.form.joined_minor_goals();
        if let Some(level) = self.form.importance {
            self.task.importance = level.label().to_string();
        }
        if let Some(level) = self.form.urgency {
            self.task.urgency = level.label().to_string();
        }
        self.mode = DetailMode::Read;
    }

    /// The delete affordance exists in the UI but has no backing endpoint.
    pub fn delete(&self) -> Result<(), PlannerError> {
        Err(PlannerError::Unsupported(
            "task deletion is not wired to the backend",
        ))
    }
}
