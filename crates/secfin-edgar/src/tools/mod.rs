//! Assistant-facing tools over [`EdgarService`]
//!
//! Lookup failures (unknown tickers, missing filings or concepts, searches
//! with no matching company) come back as successful JSON payloads
//! with an `error` field so the assistant can retry with different input.
//! Malformed parameters are `ToolError::InvalidParameters`; transport and
//! parse failures are `ToolError::ExecutionFailed`.

mod filing_content;
mod filings;
mod metrics;
mod resolve;
mod search;
mod status;

pub use filing_content::FilingContentTool;
pub use filings::{BeneficialOwnershipTool, CompanyFilingsTool};
pub use metrics::{AvailableMetricsTool, CompanyConceptTool, FinancialMetricsTool};
pub use resolve::ResolveCikTool;
pub use search::SearchFilingsTool;
pub use status::ApiStatusTool;

use crate::error::EdgarError;
use crate::service::EdgarService;
use secfin_tools::{ToolError, ToolRegistry};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Register every EDGAR tool against one shared service
pub fn register_all(registry: &ToolRegistry, service: Arc<EdgarService>) {
    registry.register(Arc::new(ResolveCikTool::new(service.clone())));
    registry.register(Arc::new(CompanyFilingsTool::new(service.clone())));
    registry.register(Arc::new(FinancialMetricsTool::new(service.clone())));
    registry.register(Arc::new(AvailableMetricsTool::new(service.clone())));
    registry.register(Arc::new(FilingContentTool::new(service.clone())));
    registry.register(Arc::new(CompanyConceptTool::new(service.clone())));
    registry.register(Arc::new(BeneficialOwnershipTool::new(service.clone())));
    registry.register(Arc::new(SearchFilingsTool::new(service.clone())));
    registry.register(Arc::new(ApiStatusTool::new(service)));
}

/// Deserialize tool parameters
fn parse_params<T: DeserializeOwned>(tool: &str, params: Value) -> secfin_tools::Result<T> {
    serde_json::from_value(params).map_err(|e| ToolError::invalid_parameters(tool, e))
}

/// Turn a service outcome into a tool response
fn respond<T: Serialize>(tool: &str, outcome: crate::error::Result<T>) -> secfin_tools::Result<Value> {
    match outcome {
        Ok(report) => serde_json::to_value(report)
            .map_err(|e| ToolError::ExecutionFailed(format!("failed to serialize response: {e}"))),
        Err(e) if e.is_lookup_failure() => {
            tracing::info!(tool, error = %e, "returning lookup failure to assistant");
            Ok(e.to_payload())
        }
        Err(EdgarError::InvalidInput(reason)) => Err(ToolError::invalid_parameters(tool, reason)),
        Err(e) => {
            tracing::warn!(tool, error = %e, "tool execution failed");
            Err(e.into())
        }
    }
}
