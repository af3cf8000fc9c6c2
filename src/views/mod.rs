//! View-state machines for the task list and the detail/edit modal.
//! Rendering lives in the CLI layer; these types only track state.

pub mod detail;
pub mod list;

pub use detail::{DetailMode, TaskDetailView};
pub use list::{ListState, TaskListView};
