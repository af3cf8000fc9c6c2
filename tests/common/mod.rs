#![allow(dead_code)]

use plan_core::api::{ApiConfig, TaskApi};
use plan_core::plan::draft::PlanDraft;
use wiremock::MockServer;

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server.
pub fn api_for(server: &MockServer) -> TaskApi {
    TaskApi::with_config(ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    })
    .expect("client for mock server")
}

pub fn sample_task_json() -> serde_json::Value {
    serde_json::json!({
        "id": 7,
        "task": "Finish essay",
        "mainGoal": "Hand in a polished draft",
        "minorGoals": "Outline; Write body; Proofread",
        "importance": "High",
        "urgency": "Urgent",
        "createdAt": "2024-05-01T10:00:00"
    })
}

pub fn valid_draft() -> PlanDraft {
    PlanDraft {
        task: "Finish essay".into(),
        main_goal: "Hand in a polished draft".into(),
        minor_goals: ["Outline".into(), "Write body".into(), "Proofread".into()],
        ..PlanDraft::default()
    }
}
