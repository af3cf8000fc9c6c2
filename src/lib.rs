//! Study-plan client: a multi-step wizard that collects a task, a main goal,
//! three minor goals, and importance/urgency levels, validates them, and
//! persists them through a remote task API; plus list and detail/edit views
//! over the persisted tasks.

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod plan;
pub mod submit;
pub mod views;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("plan_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
