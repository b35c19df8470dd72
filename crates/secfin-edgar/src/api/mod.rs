//! SEC EDGAR transport
//!
//! The core only talks to EDGAR through the collaborator traits below, so
//! resolution, selection and sizing can be exercised against mocks.
//! [`SecEdgarClient`] is the real implementation of all four.

pub mod retry;
pub mod sec_edgar;

pub use retry::RetryPolicy;
pub use sec_edgar::{CompanySubmissions, FilingsData, RecentFilings, SecEdgarClient};

use crate::error::Result;
use crate::metrics::CompanyFacts;
use crate::ticker::Cik;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

/// One row of the SEC company ticker directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub cik: Cik,
    pub ticker: String,
    pub title: String,
}

/// Bulk ticker → CIK listing
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TickerDirectory: Send + Sync {
    /// Fetch every listed company
    async fn fetch_directory(&self) -> Result<Vec<DirectoryEntry>>;
}

/// XBRL company facts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyFactsSource: Send + Sync {
    /// Fetch every reported concept for a company
    async fn company_facts(&self, cik: &Cik) -> Result<CompanyFacts>;
}

/// Filing index and documents
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilingSource: Send + Sync {
    /// Fetch the company's submission history
    async fn submissions(&self, cik: &Cik) -> Result<CompanySubmissions>;

    /// Download a filing document as text
    async fn fetch_document(&self, url: &Url) -> Result<String>;
}

/// Document size lookup without downloading the body
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SizeProbe: Send + Sync {
    /// `Ok(None)` when the server does not report a length
    async fn probe_size(&self, url: &Url) -> Result<Option<u64>>;
}
