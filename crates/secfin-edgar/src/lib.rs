//! SEC EDGAR data for AI assistants
//!
//! This crate turns the SEC EDGAR filing and XBRL services into compact,
//! structured JSON an assistant can consume without blowing its context
//! window. It includes:
//!
//! - Ticker → CIK resolution through a process-wide cache, a built-in seed
//!   table and the SEC company ticker directory
//! - Dual-mode metric selection: 13 essential concepts by default, or exactly
//!   the concepts the caller names, five most recent values per unit
//! - Metric discovery: every concept a company reports, grouped by statement
//! - Filing sizing: documents under 1 MB are inlined, larger ones are linked
//!   with an advisory note
//! - Single-concept history, beneficial ownership reports, company-name
//!   filing search and an EDGAR connectivity check
//! - A rate-limited, retrying EDGAR client and assistant tools on top
//!
//! # Example
//!
//! ```rust,ignore
//! use secfin_edgar::{EdgarConfig, EdgarService, MetricRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = EdgarConfig::builder()
//!         .contact("MyResearchApp", "ops@example.com")
//!         .build()?;
//!     let service = EdgarService::from_config(config)?;
//!
//!     let request = MetricRequest::from_concepts(Some(vec!["NetIncomeLoss".into()]));
//!     let report = service.financial_metrics("GME", &request).await?;
//!     println!("{}", serde_json::to_string_pretty(&report)?);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod filing;
pub mod metrics;
pub mod resolver;
pub mod service;
pub mod ticker;
pub mod tools;

// Re-export main types for convenience
pub use api::{
    CompanyFactsSource, DirectoryEntry, FilingSource, SecEdgarClient, SizeProbe, TickerDirectory,
};
pub use cache::ResolutionCache;
pub use config::EdgarConfig;
pub use error::{EdgarError, Result};
pub use filing::{FILING_SIZE_THRESHOLD, Filing, FilingSizeDecision, FilingSizer, FilingSubject, FilingType};
pub use metrics::{
    CompanyFacts, ConceptHistory, MetricCategory, MetricDiscovery, MetricRequest,
    MetricSelectionResult, SelectionMode, concept_history, discover_metrics, select_metrics,
};
pub use resolver::{CikResolver, Resolution, ResolutionSource, ResolverTier};
pub use service::{ApiHealth, ApiStatus, EdgarService, FilingQuery, FilingSearch};
pub use ticker::{Cik, Ticker};
pub use tools::register_all;
