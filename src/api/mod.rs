//! HTTP access to the remote task API (an external collaborator; list,
//! create, and update only — no delete endpoint exists).

pub mod client;
pub mod error;

pub use client::{ApiConfig, TaskApi, DEFAULT_BASE_URL};
pub use error::ApiError;
