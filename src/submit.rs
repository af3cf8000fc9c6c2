//! Submission service: turns a valid draft into the flat wire body and
//! performs the create/update call, folding failures into a single
//! root-level form error. A failed submission never touches the draft.

use thiserror::Error;

use crate::api::{ApiError, TaskApi};
use crate::plan::draft::PlanDraft;
use crate::plan::task::{TaskId, TaskPayload};
use crate::plan::validation::{validate_draft, ValidationErrors};

/// Why a submission did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The draft does not satisfy the schema; field errors attached.
    #[error("plan is not ready to submit")]
    Invalid(ValidationErrors),

    /// The server or the transport rejected the request. The message is
    /// ready to display as the form's root error.
    #[error("{0}")]
    Rejected(String),
}

impl From<ApiError> for SubmitError {
    fn from(error: ApiError) -> Self {
        SubmitError::Rejected(error.message())
    }
}

/// Create/update operations over a borrowed API client.
pub struct Submitter<'a> {
    api: &'a TaskApi,
}

impl<'a> Submitter<'a> {
    pub fn new(api: &'a TaskApi) -> Self {
        Self { api }
    }

    fn payload(draft: &PlanDraft) -> Result<TaskPayload, SubmitError> {
        let plan = validate_draft(draft).map_err(SubmitError::Invalid)?;
        Ok(TaskPayload::from_plan(&plan))
    }

    /// Persists a new plan. Success feedback is left to the caller.
    pub async fn create(&self, draft: &PlanDraft) -> Result<(), SubmitError> {
        let payload = Self::payload(draft)?;
        self.api.create_task(&payload).await?;
        tracing::info!(task = %payload.task, "plan created");
        Ok(())
    }

    /// Replaces an existing task. The caller refreshes its view afterwards.
    pub async fn update(&self, id: &TaskId, draft: &PlanDraft) -> Result<(), SubmitError> {
        let payload = Self::payload(draft)?;
        self.api.update_task(id, &payload).await?;
        tracing::info!(%id, "plan updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::validation::FieldKey;

    #[tokio::test]
    async fn invalid_draft_is_rejected_before_any_request() {
        // Unroutable base URL: reaching the network would fail loudly.
        let api = TaskApi::with_config(crate::api::ApiConfig {
            base_url: "http://127.0.0.1:1".into(),
            ..Default::default()
        })
        .unwrap();
        let submitter = Submitter::new(&api);
        let draft = PlanDraft {
            task: "Fi".into(),
            ..PlanDraft::default()
        };
        match submitter.create(&draft).await {
            Err(SubmitError::Invalid(errors)) => {
                assert!(errors.get(FieldKey::Task).is_some());
            }
            other => panic!("expected validation rejection, got {other:?}"),
        }
        // The draft is still intact and editable.
        assert_eq!(draft.task, "Fi");
    }
}
