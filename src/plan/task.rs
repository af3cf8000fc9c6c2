//! Serde mirrors of the remote task records and the request body shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::plan::draft::split_minor_goals;
use crate::plan::draft::{PlanDraft, MINOR_GOAL_COUNT};
use crate::plan::validation::ValidatedPlan;

/// Task identifier as the backend emits it; both numeric and string forms
/// have been observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(value) => write!(f, "{value}"),
            TaskId::Text(value) => f.write_str(value),
        }
    }
}

/// A task record as persisted by the remote API.
///
/// Importance and urgency are mirrored as raw strings; rehydrating an edit
/// form re-checks them against the enumerated levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    pub task: String,
    pub main_goal: String,
    /// Minor goals flattened into a single `"; "`-delimited string.
    pub minor_goals: String,
    pub importance: String,
    pub urgency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl PersistedTask {
    /// Minor goals split back into display lines, trimmed, tolerating fewer
    /// than the expected number of segments.
    pub fn minor_goal_lines(&self) -> [String; MINOR_GOAL_COUNT] {
        split_minor_goals(&self.minor_goals)
    }

    /// Rehydrates an editable draft from the persisted record.
    pub fn to_draft(&self) -> PlanDraft {
        PlanDraft {
            task: self.task.clone(),
            main_goal: self.main_goal.clone(),
            minor_goals: self.minor_goal_lines(),
            importance: crate::plan::draft::Importance::from_label(&self.importance),
            urgency: crate::plan::draft::Urgency::from_label(&self.urgency),
        }
    }
}

/// Flat request body sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub task: String,
    pub main_goal: String,
    pub minor_goals: String,
    pub importance: String,
    pub urgency: String,
}

impl TaskPayload {
    pub fn from_plan(plan: &ValidatedPlan<'_>) -> Self {
        Self {
            task: plan.task.to_string(),
            main_goal: plan.main_goal.to_string(),
            minor_goals: plan
                .minor_goals
                .join(crate::plan::draft::MINOR_GOAL_SEPARATOR),
            importance: plan.importance.label().to_string(),
            urgency: plan.urgency.label().to_string(),
        }
    }
}

/// Fetch payload that may be a full collection or one bare record.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TaskCollection {
    Many(Vec<PersistedTask>),
    One(PersistedTask),
}

impl TaskCollection {
    /// Normalizes to a list; a bare object becomes a one-element list.
    pub fn into_vec(self) -> Vec<PersistedTask> {
        match self {
            TaskCollection::Many(tasks) => tasks,
            TaskCollection::One(task) => vec![task],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::draft::{Importance, Urgency};
    use crate::plan::validation::validate_draft;

    fn sample_json() -> &'static str {
        r#"{
            "id": 7,
            "task": "Finish essay",
            "mainGoal": "Hand in a polished draft",
            "minorGoals": "Outline; Write body; Proofread",
            "importance": "High",
            "urgency": "Urgent",
            "createdAt": "2024-05-01T10:00:00"
        }"#
    }

    #[test]
    fn deserializes_camel_case_record() {
        let task: PersistedTask = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(task.id, Some(TaskId::Number(7)));
        assert_eq!(task.main_goal, "Hand in a polished draft");
        assert_eq!(
            task.minor_goal_lines(),
            ["Outline".to_string(), "Write body".into(), "Proofread".into()]
        );
    }

    #[test]
    fn string_ids_are_tolerated() {
        let json = r#"{"id":"abc-1","task":"T","mainGoal":"G","minorGoals":"","importance":"Low","urgency":"Soon"}"#;
        let task: PersistedTask = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, Some(TaskId::Text("abc-1".into())));
        assert_eq!(task.created_at, None);
    }

    #[test]
    fn bare_object_normalizes_to_single_element_list() {
        let collection: TaskCollection = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(collection.into_vec().len(), 1);

        let many: TaskCollection =
            serde_json::from_str(&format!("[{0},{0}]", sample_json())).unwrap();
        assert_eq!(many.into_vec().len(), 2);
    }

    #[test]
    fn rehydrated_draft_round_trips_levels() {
        let task: PersistedTask = serde_json::from_str(sample_json()).unwrap();
        let draft = task.to_draft();
        assert_eq!(draft.importance, Some(Importance::High));
        assert_eq!(draft.urgency, Some(Urgency::Urgent));

        let mut unknown = task;
        unknown.importance = "Critical".into();
        assert_eq!(unknown.to_draft().importance, None);
    }

    #[test]
    fn payload_uses_camel_case_and_joined_goals() {
        let task: PersistedTask = serde_json::from_str(sample_json()).unwrap();
        let draft = task.to_draft();
        let plan = validate_draft(&draft).unwrap();
        let payload = TaskPayload::from_plan(&plan);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["mainGoal"], "Hand in a polished draft");
        assert_eq!(json["minorGoals"], "Outline; Write body; Proofread");
        assert_eq!(json["importance"], "High");
        assert!(json.get("id").is_none());
    }
}
