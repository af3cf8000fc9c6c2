use std::process::ExitCode;
use std::time::Duration;

use plan_core::api::{ApiConfig, TaskApi};
use plan_core::cli;
use plan_core::config::ConfigManager;
use plan_core::errors::PlannerError;

#[tokio::main]
async fn main() -> ExitCode {
    plan_core::init();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), PlannerError> {
    let manager = ConfigManager::new()?;
    let config = manager.load()?;

    let mut api_config = ApiConfig {
        base_url: config.api_base_url.clone(),
        ..Default::default()
    };
    if let Some(secs) = config.request_timeout_secs {
        api_config.timeout = Duration::from_secs(secs);
    }
    let api = TaskApi::with_config(api_config)?;

    tracing::info!(base_url = %config.api_base_url, "study planner starting");
    cli::run(&api).await
}
