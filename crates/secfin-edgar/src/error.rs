//! Error types for EDGAR operations

use serde_json::{Value, json};
use thiserror::Error;

/// EDGAR specific errors
#[derive(Debug, Error)]
pub enum EdgarError {
    /// No resolution tier produced a CIK for the ticker
    #[error("CIK not found for ticker: {ticker}")]
    CikNotFound {
        /// Ticker exactly as the caller supplied it
        ticker: String,
        /// Suggested remedy
        suggestion: String,
        /// Coverage note about the seed table
        note: String,
    },

    /// The company has no recent filing of the requested form
    #[error("No {form_type} filing found for {ticker}")]
    FilingNotFound {
        /// Normalized ticker
        ticker: String,
        /// Requested form type
        form_type: String,
    },

    /// The company reports no USD series for the concept
    #[error("No USD data found for concept {concept} ({ticker})")]
    ConceptNotFound {
        /// Normalized ticker
        ticker: String,
        /// Requested XBRL concept
        concept: String,
    },

    /// No directory entry matched a company search
    #[error("No companies found matching query: {query}")]
    NoMatchingCompanies {
        /// Search text as supplied
        query: String,
    },

    /// Caller supplied an unusable value
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// SEC answered with a non-success status
    #[error("SEC returned HTTP {status} for {url}")]
    HttpStatus {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload had an unexpected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for EDGAR operations
pub type Result<T> = std::result::Result<T, EdgarError>;

impl EdgarError {
    /// Whether a transport retry may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(err) => err.is_timeout() || err.is_connect() || err.is_request(),
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Lookups that found nothing; these are answers, not faults
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            Self::CikNotFound { .. }
                | Self::FilingNotFound { .. }
                | Self::ConceptNotFound { .. }
                | Self::NoMatchingCompanies { .. }
        )
    }

    /// Structured JSON error object handed to an assistant
    pub fn to_payload(&self) -> Value {
        match self {
            Self::CikNotFound {
                ticker,
                suggestion,
                note,
            } => json!({
                "error": "CIK lookup failed",
                "ticker": ticker,
                "message": format!("Could not find CIK for ticker '{ticker}'"),
                "suggestion": suggestion,
                "note": note,
            }),
            Self::FilingNotFound { ticker, form_type } => json!({
                "error": "Filing not found",
                "ticker": ticker,
                "form_type": form_type,
                "message": self.to_string(),
                "suggestion": "Try another form type or list recent filings with get_company_filings",
            }),
            Self::ConceptNotFound { ticker, concept } => json!({
                "error": "Concept not found",
                "ticker": ticker,
                "concept": concept,
                "message": self.to_string(),
                "suggestion": "Concept names are case-sensitive; list reported concepts with get_available_metrics",
            }),
            Self::NoMatchingCompanies { query } => json!({
                "error": "No matching companies",
                "query": query,
                "message": self.to_string(),
                "suggestion": "Search by a shorter part of the company name or by ticker",
            }),
            other => json!({
                "error": "Request failed",
                "message": other.to_string(),
            }),
        }
    }
}

/// Convert EdgarError to a tool execution error
impl From<EdgarError> for secfin_tools::ToolError {
    fn from(err: EdgarError) -> Self {
        secfin_tools::ToolError::ExecutionFailed(err.to_string())
    }
}
