//! EDGAR connectivity check

use super::EdgarService;
use crate::error::EdgarError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiHealth {
    Operational,
    Error,
}

/// Outcome of fetching the company ticker directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiStatus {
    pub status: ApiHealth,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_companies: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub last_checked: DateTime<Utc>,
}

impl EdgarService {
    /// Check that EDGAR answers; failures are reported, never returned
    pub async fn api_status(&self) -> ApiStatus {
        let started = Instant::now();
        let outcome = self.directory.fetch_directory().await;
        let elapsed_ms = (started.elapsed().as_secs_f64() * 100_000.0).round() / 100.0;
        let last_checked = Utc::now();

        match outcome {
            Ok(directory) => {
                tracing::info!(companies = directory.len(), elapsed_ms, "EDGAR operational");
                ApiStatus {
                    status: ApiHealth::Operational,
                    response_time_ms: Some(elapsed_ms),
                    total_companies: Some(directory.len()),
                    status_code: None,
                    error: None,
                    last_checked,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "EDGAR status check failed");
                let status_code = match &e {
                    EdgarError::HttpStatus { status, .. } => Some(*status),
                    _ => None,
                };
                ApiStatus {
                    status: ApiHealth::Error,
                    response_time_ms: None,
                    total_companies: None,
                    status_code,
                    error: Some(e.to_string()),
                    last_checked,
                }
            }
        }
    }
}
