//! Reqwest-backed client for the remote task API.

use std::time::Duration;

use reqwest::{Client, Response};
use url::Url;

use crate::api::error::{ApiError, Result};
use crate::plan::task::{PersistedTask, TaskCollection, TaskId, TaskPayload};

/// Backend address used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Connection settings for the task API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for task records.
#[derive(Debug, Clone)]
pub struct TaskApi {
    http: Client,
    base_url: Url,
}

impl TaskApi {
    pub fn new() -> Result<Self> {
        Self::with_config(ApiConfig::default())
    }

    pub fn with_config(config: ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        let base_url = Url::parse(&config.base_url)?;
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Fetches the full task collection, normalizing a bare object into a
    /// one-element list.
    pub async fn list_tasks(&self) -> Result<Vec<PersistedTask>> {
        let url = self.endpoint("/tasks")?;
        tracing::debug!(%url, "fetching tasks");
        let response = self.http.get(url).send().await?;
        let response = Self::check_status(response).await?;
        let collection: TaskCollection = response.json().await?;
        Ok(collection.into_vec())
    }

    /// Creates a new task record.
    pub async fn create_task(&self, payload: &TaskPayload) -> Result<()> {
        let url = self.endpoint("/tasks")?;
        tracing::debug!(%url, task = %payload.task, "creating task");
        let response = self.http.post(url).json(payload).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Replaces an existing task record.
    pub async fn update_task(&self, id: &TaskId, payload: &TaskPayload) -> Result<()> {
        let url = self.endpoint(&format!("/tasks/{id}"))?;
        tracing::debug!(%url, "updating task");
        let response = self.http.put(url).json(payload).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_error_body(status.as_u16(), &body))
    }
}
