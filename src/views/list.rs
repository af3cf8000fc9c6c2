//! List view over persisted tasks.
//!
//! Performs conceptually one fetch per open. Results are applied through a
//! generation token so a response that arrives after the view moved on (or
//! closed) is discarded rather than clobbering newer state. This is
//! cancellation by flag, not a true abort.

use crate::api::ApiError;
use crate::plan::task::PersistedTask;

/// Fixed copy shown while loading and when the collection is empty.
pub const LOADING_MESSAGE: &str = "Loading tasks…";
pub const EMPTY_MESSAGE: &str = "No tasks found yet. Create a plan to see it here.";

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Populated(Vec<PersistedTask>),
    Empty,
    Error(String),
}

/// Opaque handle tying a fetch result back to the request that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

#[derive(Debug, Clone)]
pub struct TaskListView {
    state: ListState,
    generation: u64,
    open: bool,
}

impl Default for TaskListView {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListView {
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
            generation: 0,
            open: true,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Tasks currently displayed, empty unless populated.
    pub fn tasks(&self) -> &[PersistedTask] {
        match &self.state {
            ListState::Populated(tasks) => tasks,
            _ => &[],
        }
    }

    /// Marks the start of a fetch and returns the token the result must
    /// present to be applied.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.generation += 1;
        self.state = ListState::Loading;
        FetchToken(self.generation)
    }

    /// Applies a fetch result. Returns `false` when the result was stale
    /// (superseded or view closed) and therefore discarded.
    pub fn apply_fetch(
        &mut self,
        token: FetchToken,
        result: Result<Vec<PersistedTask>, ApiError>,
    ) -> bool {
        if !self.open || token.0 != self.generation {
            tracing::debug!("discarding stale task fetch");
            return false;
        }
        self.state = match result {
            Ok(tasks) if tasks.is_empty() => ListState::Empty,
            Ok(tasks) => ListState::Populated(tasks),
            Err(error) => ListState::Error(error.message()),
        };
        true
    }

    /// Closes the view; any in-flight fetch result will be dropped.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(name: &str) -> PersistedTask {
        PersistedTask {
            id: None,
            task: name.into(),
            main_goal: "goal".into(),
            minor_goals: "a; b; c".into(),
            importance: "Low".into(),
            urgency: "Soon".into(),
            created_at: None,
        }
    }

    #[test]
    fn starts_loading_and_populates() {
        let mut view = TaskListView::new();
        assert_eq!(view.state(), &ListState::Loading);
        let token = view.begin_fetch();
        assert!(view.apply_fetch(token, Ok(vec![task("one")])));
        assert_eq!(view.tasks().len(), 1);
    }

    #[test]
    fn empty_and_error_states() {
        let mut view = TaskListView::new();
        let token = view.begin_fetch();
        view.apply_fetch(token, Ok(vec![]));
        assert_eq!(view.state(), &ListState::Empty);

        let token = view.begin_fetch();
        view.apply_fetch(
            token,
            Err(ApiError::from_error_body(500, r#"{"detail":"boom"}"#)),
        );
        assert_eq!(view.state(), &ListState::Error("boom".into()));
    }

    #[test]
    fn stale_result_is_discarded_after_close() {
        let mut view = TaskListView::new();
        let token = view.begin_fetch();
        view.close();
        assert!(!view.apply_fetch(token, Ok(vec![task("late")])));
        assert_eq!(view.state(), &ListState::Loading);
    }

    #[test]
    fn superseded_fetch_loses_to_the_newer_one() {
        let mut view = TaskListView::new();
        let first = view.begin_fetch();
        let second = view.begin_fetch();
        assert!(!view.apply_fetch(first, Ok(vec![task("old")])));
        assert!(view.apply_fetch(second, Ok(vec![task("new")])));
        assert_eq!(view.tasks()[0].task, "new");
    }
}
