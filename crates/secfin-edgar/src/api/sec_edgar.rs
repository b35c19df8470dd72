//! SEC EDGAR API client
//!
//! SEC EDGAR is the Electronic Data Gathering, Analysis, and Retrieval system
//! used by the U.S. Securities and Exchange Commission.
//!
//! Rate limit: 10 requests per second (as per SEC fair access policy)
//! User-Agent requirement: Must include company name and contact email

use super::retry::{RetryPolicy, check_status};
use super::{CompanyFactsSource, DirectoryEntry, FilingSource, SizeProbe, TickerDirectory};
use crate::config::EdgarConfig;
use crate::error::{EdgarError, Result};
use crate::filing::archive_url;
use crate::metrics::CompanyFacts;
use crate::ticker::Cik;
use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use reqwest::header::{ACCEPT_ENCODING, CONTENT_LENGTH};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use url::Url;

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

const SEC_BASE_URL: &str = "https://data.sec.gov";
const SEC_COMPANY_TICKERS_URL: &str = "https://www.sec.gov/files/company_tickers.json";

/// SEC submissions response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanySubmissions {
    #[serde(default)]
    pub cik: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tickers: Vec<String>,
    #[serde(default)]
    pub exchanges: Vec<String>,
    #[serde(default)]
    pub filings: FilingsData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilingsData {
    #[serde(default)]
    pub recent: RecentFilings,
}

/// Column-oriented recent filing index; row `i` spans every vector
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecentFilings {
    pub accession_number: Vec<String>,
    pub filing_date: Vec<String>,
    pub report_date: Vec<String>,
    pub form: Vec<String>,
    pub primary_document: Vec<String>,
    pub primary_doc_description: Vec<String>,
    pub size: Vec<u64>,
}

#[derive(Debug, Deserialize)]
struct RawDirectoryEntry {
    cik_str: u64,
    ticker: String,
    title: String,
}

/// SEC EDGAR API client
#[derive(Clone)]
pub struct SecEdgarClient {
    client: Client,
    /// Uncompressed transfers, so `Content-Length` is the document size
    head_client: Client,
    config: EdgarConfig,
    rate_limiter: SharedRateLimiter,
    retry: RetryPolicy,
}

impl SecEdgarClient {
    /// Create a client from validated configuration
    ///
    /// # Example
    /// ```ignore
    /// let config = EdgarConfig::builder().contact("MyApp", "contact@example.com").build()?;
    /// let client = SecEdgarClient::new(config)?;
    /// ```
    pub fn new(config: EdgarConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .gzip(true)
            .build()?;
        let head_client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .no_gzip()
            .build()?;

        let per_second = NonZeroU32::new(config.requests_per_second).ok_or_else(|| {
            EdgarError::Config("requests_per_second must be greater than 0".to_string())
        })?;
        let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_second(per_second)));
        let retry = RetryPolicy::from_config(&config);

        Ok(Self {
            client,
            head_client,
            config,
            rate_limiter,
            retry,
        })
    }

    /// Create from environment variables (`SEC_USER_AGENT`)
    pub fn from_env() -> Result<Self> {
        Self::new(EdgarConfig::from_env())
    }

    /// Replace the retry policy
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn config(&self) -> &EdgarConfig {
        &self.config
    }

    /// Build URL to access a filing document
    pub fn get_filing_url(&self, cik: &Cik, accession_number: &str, document: &str) -> String {
        archive_url(cik, accession_number, document)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.retry
            .execute(url, move || async move {
                self.rate_limiter.until_ready().await;
                tracing::debug!(url, "GET");

                let response = self.client.get(url).send().await?;
                check_status(url, response.status())?;
                Ok(response.json::<T>().await?)
            })
            .await
    }
}

#[async_trait]
impl TickerDirectory for SecEdgarClient {
    async fn fetch_directory(&self) -> Result<Vec<DirectoryEntry>> {
        let raw: HashMap<String, RawDirectoryEntry> = self.get_json(SEC_COMPANY_TICKERS_URL).await?;
        Ok(directory_entries(raw))
    }
}

#[async_trait]
impl CompanyFactsSource for SecEdgarClient {
    async fn company_facts(&self, cik: &Cik) -> Result<CompanyFacts> {
        let url = format!("{SEC_BASE_URL}/api/xbrl/companyfacts/CIK{cik}.json");
        let value: Value = self.get_json(&url).await?;
        CompanyFacts::from_value(&value)
    }
}

#[async_trait]
impl FilingSource for SecEdgarClient {
    async fn submissions(&self, cik: &Cik) -> Result<CompanySubmissions> {
        let url = format!("{SEC_BASE_URL}/submissions/CIK{cik}.json");
        self.get_json(&url).await
    }

    async fn fetch_document(&self, url: &Url) -> Result<String> {
        let url = url.as_str();
        self.retry
            .execute(url, move || async move {
                self.rate_limiter.until_ready().await;
                tracing::debug!(url, "GET document");

                let response = self.client.get(url).send().await?;
                check_status(url, response.status())?;
                Ok(response.text().await?)
            })
            .await
    }
}

#[async_trait]
impl SizeProbe for SecEdgarClient {
    async fn probe_size(&self, url: &Url) -> Result<Option<u64>> {
        let url = url.as_str();
        self.retry
            .execute(url, move || async move {
                self.rate_limiter.until_ready().await;
                tracing::debug!(url, "HEAD");

                let response = self
                    .head_client
                    .head(url)
                    .header(ACCEPT_ENCODING, "identity")
                    .send()
                    .await?;
                check_status(url, response.status())?;

                // HEAD bodies are empty, so read the header rather than the body hint
                Ok(response
                    .headers()
                    .get(CONTENT_LENGTH)
                    .and_then(|length| length.to_str().ok())
                    .and_then(|length| length.trim().parse::<u64>().ok()))
            })
            .await
    }
}

/// Directory rows ordered by their position in the SEC listing
fn directory_entries(raw: HashMap<String, RawDirectoryEntry>) -> Vec<DirectoryEntry> {
    let mut rows: Vec<(u64, RawDirectoryEntry)> = raw
        .into_iter()
        .map(|(key, entry)| (key.parse().unwrap_or(u64::MAX), entry))
        .collect();
    rows.sort_by_key(|(position, _)| *position);

    rows.into_iter()
        .filter_map(|(_, entry)| match Cik::from_number(entry.cik_str) {
            Ok(cik) => Some(DirectoryEntry {
                cik,
                ticker: entry.ticker,
                title: entry.title,
            }),
            Err(e) => {
                tracing::warn!(ticker = %entry.ticker, error = %e, "skipping directory row");
                None
            }
        })
        .collect()
}
