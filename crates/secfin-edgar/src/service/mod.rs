//! Response assembly: resolution, selection, discovery and sizing over EDGAR data

mod search;
mod status;

pub use search::{DEFAULT_SEARCH_LIMIT, FilingSearch, MAX_SEARCH_COMPANIES, SearchHit, SearchResults};
pub use status::{ApiHealth, ApiStatus};

use crate::api::{CompanyFactsSource, FilingSource, SecEdgarClient, SizeProbe, TickerDirectory};
use crate::cache::ResolutionCache;
use crate::config::EdgarConfig;
use crate::error::{EdgarError, Result};
use crate::filing::{Filing, FilingSizeDecision, FilingSizer, FilingSubject, FilingType, extract_text};
use crate::metrics::{
    CompanyFacts, ConceptHistory, MetricDiscovery, MetricRequest, MetricSelectionResult,
    concept_history, discover_metrics, select_metrics,
};
use crate::resolver::{CikResolver, Resolution};
use crate::ticker::{Cik, Ticker};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use url::Url;

/// Filings returned when the caller gives no limit
pub const DEFAULT_FILING_LIMIT: usize = 10;

/// Ownership reports returned when the caller gives no limit
pub const DEFAULT_OWNERSHIP_LIMIT: usize = 10;

/// Filter for [`EdgarService::company_filings`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingQuery {
    pub ticker: String,
    pub form_type: Option<FilingType>,
    /// Inclusive lower bound on the filing date
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the filing date
    pub end_date: Option<NaiveDate>,
    pub limit: usize,
}

impl FilingQuery {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            form_type: None,
            start_date: None,
            end_date: None,
            limit: DEFAULT_FILING_LIMIT,
        }
    }

    pub fn form_type(mut self, form_type: FilingType) -> Self {
        self.form_type = Some(form_type);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    fn validate(&self) -> Result<()> {
        validate_limit(self.limit)?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(EdgarError::InvalidInput(format!(
                    "start_date {start} is after end_date {end}"
                )));
            }
        }
        Ok(())
    }

    fn matches(&self, filing: &Filing) -> bool {
        self.form_type
            .is_none_or(|form_type| filing.form == form_type.as_str())
            && self.start_date.is_none_or(|start| filing.filing_date >= start)
            && self.end_date.is_none_or(|end| filing.filing_date <= end)
    }
}

fn validate_limit(limit: usize) -> Result<()> {
    if limit == 0 {
        return Err(EdgarError::InvalidInput("limit must be at least 1".to_string()));
    }
    Ok(())
}

/// Recent filings for a company
#[derive(Debug, Clone, Serialize)]
pub struct CompanyFilings {
    pub ticker: Ticker,
    pub cik: Cik,
    pub company_name: String,
    pub total_filings: usize,
    pub filings: Vec<Filing>,
}

/// Selected financial metrics for a company
#[derive(Debug, Clone, Serialize)]
pub struct FinancialMetricsReport {
    pub ticker: Ticker,
    pub cik: Cik,
    pub company_name: String,
    #[serde(flatten)]
    pub selection: MetricSelectionResult,
}

/// Annual and quarterly history of one concept
#[derive(Debug, Clone, Serialize)]
pub struct ConceptReport {
    pub ticker: Ticker,
    pub cik: Cik,
    pub company_name: String,
    #[serde(flatten)]
    pub history: ConceptHistory,
}

/// Every metric a company reports
#[derive(Debug, Clone, Serialize)]
pub struct AvailableMetricsReport {
    pub ticker: Ticker,
    pub cik: Cik,
    pub company_name: String,
    #[serde(flatten)]
    pub discovery: MetricDiscovery,
}

/// Latest filing of a form with its metrics and, when small enough, its text
#[derive(Debug, Clone, Serialize)]
pub struct FilingContentReport {
    pub ticker: Ticker,
    pub cik: Cik,
    pub company_name: String,
    pub filing_type: FilingType,
    pub filing_date: NaiveDate,
    pub accession_number: String,
    #[serde(flatten)]
    pub selection: MetricSelectionResult,
    #[serde(flatten)]
    pub size: FilingSizeDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// EDGAR operations for an assistant
pub struct EdgarService {
    resolver: CikResolver,
    directory: Arc<dyn TickerDirectory>,
    facts: Arc<dyn CompanyFactsSource>,
    filings: Arc<dyn FilingSource>,
    sizer: FilingSizer,
}

impl EdgarService {
    pub fn new(
        resolver: CikResolver,
        directory: Arc<dyn TickerDirectory>,
        facts: Arc<dyn CompanyFactsSource>,
        filings: Arc<dyn FilingSource>,
        probe: Arc<dyn SizeProbe>,
    ) -> Self {
        Self {
            resolver,
            directory,
            facts,
            filings,
            sizer: FilingSizer::new(probe),
        }
    }

    /// Wire every collaborator to one shared client
    pub fn from_client(client: SecEdgarClient, cache: Arc<ResolutionCache>) -> Self {
        let client = Arc::new(client);
        Self::new(
            CikResolver::with_directory(cache, client.clone()),
            client.clone(),
            client.clone(),
            client.clone(),
            client,
        )
    }

    /// Build a client from configuration and wire the service to it
    pub fn from_config(config: EdgarConfig) -> Result<Self> {
        let client = SecEdgarClient::new(config)?;
        Ok(Self::from_client(client, Arc::new(ResolutionCache::new())))
    }

    pub fn resolver(&self) -> &CikResolver {
        &self.resolver
    }

    /// Resolve a ticker to its CIK
    pub async fn resolve(&self, ticker: &str) -> Result<Resolution> {
        self.resolver.resolve(ticker).await
    }

    /// Recent filings, filtered and capped by the query
    pub async fn company_filings(&self, query: &FilingQuery) -> Result<CompanyFilings> {
        query.validate()?;
        let resolution = self.resolver.resolve(&query.ticker).await?;
        let submissions = self.filings.submissions(&resolution.cik).await?;

        let filings: Vec<Filing> = Filing::from_recent(&resolution.cik, &submissions.filings.recent)
            .into_iter()
            .filter(|filing| query.matches(filing))
            .take(query.limit)
            .collect();

        tracing::info!(
            ticker = %resolution.ticker,
            form = ?query.form_type.map(|f| f.as_str()),
            returned = filings.len(),
            "listed filings"
        );

        Ok(CompanyFilings {
            ticker: resolution.ticker,
            cik: resolution.cik,
            company_name: submissions.name,
            total_filings: filings.len(),
            filings,
        })
    }

    /// Financial metrics in generic or specific mode
    pub async fn financial_metrics(
        &self,
        ticker: &str,
        request: &MetricRequest,
    ) -> Result<FinancialMetricsReport> {
        let resolution = self.resolver.resolve(ticker).await?;
        let facts = self.facts.company_facts(&resolution.cik).await?;
        let selection = select_metrics(&facts, request);

        Ok(FinancialMetricsReport {
            ticker: resolution.ticker,
            cik: resolution.cik,
            company_name: facts.entity_name,
            selection,
        })
    }

    /// Every concept the company reports, optionally filtered
    pub async fn available_metrics(
        &self,
        ticker: &str,
        search_term: Option<&str>,
    ) -> Result<AvailableMetricsReport> {
        let resolution = self.resolver.resolve(ticker).await?;
        let facts = self.facts.company_facts(&resolution.cik).await?;
        let discovery = discover_metrics(&facts, search_term);

        Ok(AvailableMetricsReport {
            ticker: resolution.ticker,
            cik: resolution.cik,
            company_name: facts.entity_name,
            discovery,
        })
    }

    /// One concept's annual and quarterly USD values
    pub async fn company_concept(&self, ticker: &str, concept: &str) -> Result<ConceptReport> {
        let concept = concept.trim();
        if concept.is_empty() {
            return Err(EdgarError::InvalidInput("concept must not be empty".to_string()));
        }

        let resolution = self.resolver.resolve(ticker).await?;
        let facts = self.facts.company_facts(&resolution.cik).await?;
        let history = concept_history(&facts, concept).ok_or_else(|| EdgarError::ConceptNotFound {
            ticker: resolution.ticker.to_string(),
            concept: concept.to_string(),
        })?;

        Ok(ConceptReport {
            ticker: resolution.ticker,
            cik: resolution.cik,
            company_name: facts.entity_name,
            history,
        })
    }

    /// Schedule 13D and 13G filings about the company, newest first
    pub async fn beneficial_ownership(&self, ticker: &str, limit: usize) -> Result<CompanyFilings> {
        validate_limit(limit)?;
        let resolution = self.resolver.resolve(ticker).await?;
        let submissions = self.filings.submissions(&resolution.cik).await?;

        let mut filings: Vec<Filing> = Filing::from_recent(&resolution.cik, &submissions.filings.recent)
            .into_iter()
            .filter(|filing| FilingType::is_beneficial_ownership(&filing.form))
            .collect();
        filings.sort_by(|a, b| b.filing_date.cmp(&a.filing_date));
        filings.truncate(limit);

        tracing::info!(ticker = %resolution.ticker, returned = filings.len(), "listed ownership reports");

        Ok(CompanyFilings {
            ticker: resolution.ticker,
            cik: resolution.cik,
            company_name: submissions.name,
            total_filings: filings.len(),
            filings,
        })
    }

    /// Latest filing of `form_type` with selected metrics and its text if small
    pub async fn filing_content(
        &self,
        ticker: &str,
        form_type: FilingType,
        request: &MetricRequest,
    ) -> Result<FilingContentReport> {
        let resolution = self.resolver.resolve(ticker).await?;
        let (submissions, facts) = tokio::join!(
            self.filings.submissions(&resolution.cik),
            self.facts.company_facts(&resolution.cik),
        );
        let submissions = submissions?;

        // Without XBRL data the filing is still served; every concept is reported missing
        let facts = facts.unwrap_or_else(|e| {
            tracing::warn!(ticker = %resolution.ticker, error = %e, "company facts unavailable");
            CompanyFacts::empty(resolution.cik.clone())
        });

        let filing = Filing::from_recent(&resolution.cik, &submissions.filings.recent)
            .into_iter()
            .find(|filing| filing.form == form_type.as_str())
            .ok_or_else(|| EdgarError::FilingNotFound {
                ticker: resolution.ticker.to_string(),
                form_type: form_type.to_string(),
            })?;

        let company_name = if submissions.name.is_empty() {
            facts.entity_name.clone()
        } else {
            submissions.name
        };

        let selection = select_metrics(&facts, request);
        let mut size = self
            .sizer
            .decide(
                &filing.filing_url,
                &FilingSubject::new(company_name.as_str(), form_type.as_str()),
            )
            .await;

        let content = if size.inline() {
            match self.download_text(&filing.filing_url).await {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::warn!(url = %filing.filing_url, error = %e, "filing download failed");
                    size.advisory_note = Some(format!(
                        "The filing could not be downloaded ({e}). Open it from {}",
                        filing.filing_url
                    ));
                    None
                }
            }
        } else {
            None
        };

        Ok(FilingContentReport {
            ticker: resolution.ticker,
            cik: resolution.cik,
            company_name,
            filing_type: form_type,
            filing_date: filing.filing_date,
            accession_number: filing.accession_number,
            selection,
            size,
            content,
        })
    }

    async fn download_text(&self, url: &str) -> Result<String> {
        let url = Url::parse(url).map_err(|e| EdgarError::Parse(format!("invalid filing URL: {e}")))?;
        let document = self.filings.fetch_document(&url).await?;
        Ok(extract_text(&document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{
        CompanySubmissions, MockCompanyFactsSource, MockFilingSource, MockSizeProbe,
        MockTickerDirectory,
    };
    use crate::api::DirectoryEntry;
    use crate::metrics::{CompanyFacts, MetricCategory, SelectionMode};
    use serde_json::json;

    fn submissions() -> CompanySubmissions {
        serde_json::from_value(json!({
            "cik": "320193",
            "name": "Apple Inc.",
            "filings": {"recent": {
                "accessionNumber": [
                    "0000320193-24-000123", "0000320193-24-000081",
                    "0000320193-24-000069", "0000320193-24-000050"
                ],
                "filingDate": ["2024-11-01", "2024-08-02", "2024-05-03", "2024-02-02"],
                "reportDate": ["2024-09-28", "2024-06-29", "2024-03-30", "2023-12-30"],
                "form": ["10-K", "10-Q", "10-Q", "10-Q"],
                "primaryDocument": ["aapl-20240928.htm", "aapl-20240629.htm", "aapl-20240330.htm", "aapl-20231230.htm"],
                "size": [9_759_383, 5_000_000, 5_000_000, 5_000_000]
            }}
        }))
        .unwrap()
    }

    fn facts() -> CompanyFacts {
        CompanyFacts::from_value(&json!({
            "cik": 320193,
            "entityName": "Apple Inc.",
            "facts": {"us-gaap": {
                "NetIncomeLoss": {"units": {"USD": [
                    {"end": "2024-06-29", "val": 21_448_000_000_u64, "form": "10-Q"},
                    {"end": "2024-09-28", "val": 14_736_000_000_u64, "form": "10-K"}
                ]}},
                "Revenues": {"units": {"USD": [{"end": "2024-09-28", "val": 1}]}}
            }}
        }))
        .unwrap()
    }

    struct Mocks {
        directory: MockTickerDirectory,
        facts: MockCompanyFactsSource,
        filings: MockFilingSource,
        probe: MockSizeProbe,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                directory: MockTickerDirectory::new(),
                facts: MockCompanyFactsSource::new(),
                filings: MockFilingSource::new(),
                probe: MockSizeProbe::new(),
            }
        }

        fn service(self) -> EdgarService {
            let directory = Arc::new(self.directory);
            let resolver =
                CikResolver::with_directory(Arc::new(ResolutionCache::new()), directory.clone());
            EdgarService::new(
                resolver,
                directory,
                Arc::new(self.facts),
                Arc::new(self.filings),
                Arc::new(self.probe),
            )
        }
    }

    #[tokio::test]
    async fn test_company_filings_filters() {
        let mut mocks = Mocks::new();
        mocks
            .filings
            .expect_submissions()
            .times(1)
            .returning(|_| Ok(submissions()));

        let query = FilingQuery::new("aapl")
            .form_type(FilingType::Form10Q)
            .start_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
            .limit(5);
        let result = mocks.service().company_filings(&query).await.unwrap();

        assert_eq!(result.ticker.as_str(), "AAPL");
        assert_eq!(result.company_name, "Apple Inc.");
        assert_eq!(result.total_filings, 2);
        assert!(result.filings.iter().all(|f| f.form == "10-Q"));
        assert_eq!(result.filings[0].description, "Quarterly Report");
    }

    #[tokio::test]
    async fn test_company_filings_rejects_bad_range() {
        let mut mocks = Mocks::new();
        mocks.filings.expect_submissions().times(0);

        let query = FilingQuery::new("AAPL")
            .start_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .end_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let err = mocks.service().company_filings(&query).await.unwrap_err();
        assert!(matches!(err, EdgarError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_unknown_ticker_skips_fetches() {
        let mut mocks = Mocks::new();
        mocks.directory.expect_fetch_directory().returning(|| Ok(vec![]));
        mocks.facts.expect_company_facts().times(0);

        let err = mocks
            .service()
            .financial_metrics("ZZZZZ", &MetricRequest::Generic)
            .await
            .unwrap_err();
        assert!(matches!(err, EdgarError::CikNotFound { .. }));
    }

    #[tokio::test]
    async fn test_financial_metrics_report_shape() {
        let mut mocks = Mocks::new();
        mocks
            .facts
            .expect_company_facts()
            .withf(|cik| cik.as_str() == "0000320193")
            .times(1)
            .returning(|_| Ok(facts()));

        let request = MetricRequest::from_concepts(Some(vec!["NetIncomeLoss".to_string()]));
        let report = mocks
            .service()
            .financial_metrics("AAPL", &request)
            .await
            .unwrap();

        assert_eq!(report.selection.mode, SelectionMode::Specific);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ticker"], "AAPL");
        assert_eq!(json["cik"], "0000320193");
        assert_eq!(json["metrics_returned"], 1);
        assert_eq!(json["values_per_metric"], 2);
        assert_eq!(
            json["financial_metrics"]["NetIncomeLoss"]["units"]["USD"][0]["end"],
            "2024-09-28"
        );
    }

    #[tokio::test]
    async fn test_filing_content_inlines_small_documents() {
        let mut mocks = Mocks::new();
        mocks.filings.expect_submissions().returning(|_| Ok(submissions()));
        mocks.facts.expect_company_facts().returning(|_| Ok(facts()));
        mocks
            .probe
            .expect_probe_size()
            .times(1)
            .returning(|_| Ok(Some(400_000)));
        mocks
            .filings
            .expect_fetch_document()
            .withf(|url| url.as_str().ends_with("/000032019324000081/aapl-20240629.htm"))
            .times(1)
            .returning(|_| Ok("<html><body><p>Quarterly   report</p></body></html>".to_string()));

        let report = mocks
            .service()
            .filing_content("AAPL", FilingType::Form10Q, &MetricRequest::Generic)
            .await
            .unwrap();

        assert_eq!(report.accession_number, "0000320193-24-000081");
        assert_eq!(report.selection.mode, SelectionMode::Generic);
        assert_eq!(report.selection.metrics_returned, 2);
        assert!(report.size.inline());
        assert_eq!(report.content.as_deref(), Some("Quarterly report"));
    }

    #[tokio::test]
    async fn test_filing_content_links_large_documents() {
        let mut mocks = Mocks::new();
        mocks.filings.expect_submissions().returning(|_| Ok(submissions()));
        mocks.facts.expect_company_facts().returning(|_| Ok(facts()));
        mocks
            .probe
            .expect_probe_size()
            .returning(|_| Ok(Some(9_759_383)));
        mocks.filings.expect_fetch_document().times(0);

        let report = mocks
            .service()
            .filing_content("AAPL", FilingType::Form10K, &MetricRequest::Generic)
            .await
            .unwrap();

        assert!(report.size.too_large);
        assert!(report.content.is_none());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["filing_type"], "10-K");
        assert_eq!(json["too_large"], true);
        assert!(json["advisory_note"].as_str().unwrap().contains("Apple Inc."));
    }

    #[tokio::test]
    async fn test_failed_download_degrades_to_link() {
        let mut mocks = Mocks::new();
        mocks.filings.expect_submissions().returning(|_| Ok(submissions()));
        mocks.facts.expect_company_facts().returning(|_| Ok(facts()));
        mocks.probe.expect_probe_size().returning(|_| Ok(Some(10_000)));
        mocks.filings.expect_fetch_document().returning(|url| {
            Err(EdgarError::HttpStatus {
                url: url.to_string(),
                status: 500,
            })
        });

        let report = mocks
            .service()
            .filing_content("AAPL", FilingType::Form10Q, &MetricRequest::Generic)
            .await
            .unwrap();

        assert!(report.content.is_none());
        assert!(report.size.advisory_note.unwrap().contains("could not be downloaded"));
    }

    #[tokio::test]
    async fn test_missing_form_is_filing_not_found() {
        let mut mocks = Mocks::new();
        mocks.filings.expect_submissions().returning(|_| Ok(submissions()));
        mocks.facts.expect_company_facts().returning(|_| Ok(facts()));
        mocks.probe.expect_probe_size().times(0);

        let err = mocks
            .service()
            .filing_content("aapl", FilingType::DefProxy, &MetricRequest::Generic)
            .await
            .unwrap_err();

        match err {
            EdgarError::FilingNotFound { ticker, form_type } => {
                assert_eq!(ticker, "AAPL");
                assert_eq!(form_type, "DEF 14A");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_filing_content_without_company_facts() {
        let mut mocks = Mocks::new();
        mocks.filings.expect_submissions().returning(|_| Ok(submissions()));
        mocks.facts.expect_company_facts().times(1).returning(|cik| {
            Err(EdgarError::HttpStatus {
                url: format!("https://data.sec.gov/api/xbrl/companyfacts/CIK{cik}.json"),
                status: 404,
            })
        });
        mocks.probe.expect_probe_size().times(1).returning(|_| Ok(Some(400_000)));
        mocks
            .filings
            .expect_fetch_document()
            .times(1)
            .returning(|_| Ok("<p>Quarterly report</p>".to_string()));

        let request = MetricRequest::from_concepts(Some(vec![
            "NetIncomeLoss".to_string(),
            "Revenues".to_string(),
        ]));
        let report = mocks
            .service()
            .filing_content("AAPL", FilingType::Form10Q, &request)
            .await
            .unwrap();

        assert_eq!(report.company_name, "Apple Inc.");
        assert_eq!(report.accession_number, "0000320193-24-000081");
        assert_eq!(report.selection.metrics_returned, 0);
        assert_eq!(report.selection.missing, vec!["NetIncomeLoss", "Revenues"]);
        assert!(report.size.inline());
        assert_eq!(report.content.as_deref(), Some("Quarterly report"));
    }

    #[tokio::test]
    async fn test_filing_content_needs_submissions() {
        let mut mocks = Mocks::new();
        mocks.filings.expect_submissions().returning(|_| {
            Err(EdgarError::HttpStatus {
                url: "https://data.sec.gov/submissions/CIK0000320193.json".to_string(),
                status: 503,
            })
        });
        mocks.facts.expect_company_facts().returning(|_| Ok(facts()));
        mocks.probe.expect_probe_size().times(0);

        let err = mocks
            .service()
            .filing_content("AAPL", FilingType::Form10Q, &MetricRequest::Generic)
            .await
            .unwrap_err();
        assert!(matches!(err, EdgarError::HttpStatus { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_company_concept_history() {
        let mut mocks = Mocks::new();
        mocks.facts.expect_company_facts().returning(|_| Ok(facts()));

        let report = mocks
            .service()
            .company_concept("aapl", " NetIncomeLoss ")
            .await
            .unwrap();

        assert_eq!(report.ticker.as_str(), "AAPL");
        assert_eq!(report.history.concept, "NetIncomeLoss");
        assert_eq!(report.history.category, MetricCategory::IncomeStatement);
        assert_eq!(report.history.annual_data.len(), 1);
        assert_eq!(report.history.quarterly_data.len(), 1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["company_name"], "Apple Inc.");
        assert_eq!(json["annual_data"][0]["end"], "2024-09-28");
        assert_eq!(json["quarterly_data"][0]["end"], "2024-06-29");
    }

    #[tokio::test]
    async fn test_company_concept_lookup_failures() {
        let mut mocks = Mocks::new();
        mocks.facts.expect_company_facts().times(1).returning(|_| Ok(facts()));
        let service = mocks.service();

        let err = service.company_concept("AAPL", "   ").await.unwrap_err();
        assert!(matches!(err, EdgarError::InvalidInput(_)));

        let err = service.company_concept("AAPL", "GrossProfit").await.unwrap_err();
        match err {
            EdgarError::ConceptNotFound { ticker, concept } => {
                assert_eq!(ticker, "AAPL");
                assert_eq!(concept, "GrossProfit");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    fn ownership_submissions() -> CompanySubmissions {
        serde_json::from_value(json!({
            "cik": "1326380",
            "name": "GameStop Corp.",
            "filings": {"recent": {
                "accessionNumber": ["a-1", "a-2", "a-3", "a-4", "a-5", "a-6"],
                "filingDate": ["2024-11-14", "2024-09-10", "2024-02-14", "2024-10-01", "2023-02-10", "2022-03-01"],
                "form": ["SCHEDULE 13G", "10-Q", "SC 13G/A", "4", "SC 13D", "SC 13D/A"],
                "primaryDocument": ["a.xml", "b.htm", "c.htm", "d.xml", "e.htm", "f.htm"]
            }}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_beneficial_ownership_merges_schedules() {
        let mut mocks = Mocks::new();
        mocks
            .filings
            .expect_submissions()
            .times(1)
            .returning(|_| Ok(ownership_submissions()));

        let report = mocks.service().beneficial_ownership("GME", 3).await.unwrap();

        assert_eq!(report.company_name, "GameStop Corp.");
        assert_eq!(report.total_filings, 3);
        let forms: Vec<&str> = report.filings.iter().map(|f| f.form.as_str()).collect();
        assert_eq!(forms, vec!["SCHEDULE 13G", "SC 13G/A", "SC 13D"]);
        assert_eq!(report.filings[1].description, "Schedule 13G");
    }

    #[tokio::test]
    async fn test_beneficial_ownership_rejects_zero_limit() {
        let mut mocks = Mocks::new();
        mocks.filings.expect_submissions().times(0);

        let err = mocks.service().beneficial_ownership("GME", 0).await.unwrap_err();
        assert!(matches!(err, EdgarError::InvalidInput(_)));
    }

    fn directory() -> Vec<DirectoryEntry> {
        vec![
            DirectoryEntry {
                cik: Cik::from_number(1_326_380).unwrap(),
                ticker: "GME".to_string(),
                title: "GameStop Corp.".to_string(),
            },
            DirectoryEntry {
                cik: Cik::from_number(320_193).unwrap(),
                ticker: "AAPL".to_string(),
                title: "Apple Inc.".to_string(),
            },
            DirectoryEntry {
                cik: Cik::from_number(1_018_724).unwrap(),
                ticker: "AMZN".to_string(),
                title: "AMAZON COM INC".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn test_search_filings_by_name() {
        let mut mocks = Mocks::new();
        mocks.directory.expect_fetch_directory().times(1).returning(|| Ok(directory()));
        mocks
            .filings
            .expect_submissions()
            .withf(|cik| cik.as_str() == "0000320193")
            .returning(|_| Ok(submissions()));
        mocks
            .filings
            .expect_submissions()
            .withf(|cik| cik.as_str() == "0001326380")
            .returning(|_| Ok(ownership_submissions()));
        mocks.filings.expect_submissions().returning(|_| Ok(CompanySubmissions::default()));

        let search = FilingSearch::new("Inc")
            .form_type(FilingType::Form10Q)
            .limit(4);
        let results = mocks.service().search_filings(&search).await.unwrap();

        assert_eq!(results.total_matches, 2);
        let tickers: Vec<&str> = results.matching_companies.iter().map(|c| c.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["AAPL", "AMZN"]);
        assert_eq!(results.total_results, 2);
        assert!(results.results.iter().all(|hit| hit.company.ticker == "AAPL"));
        assert_eq!(results.results[0].filing.filing_date.to_string(), "2024-08-02");
    }

    #[tokio::test]
    async fn test_search_skips_failing_companies() {
        let mut mocks = Mocks::new();
        mocks.directory.expect_fetch_directory().returning(|| Ok(directory()));
        mocks
            .filings
            .expect_submissions()
            .withf(|cik| cik.as_str() == "0001326380")
            .returning(|_| Ok(ownership_submissions()));
        mocks
            .filings
            .expect_submissions()
            .returning(|cik| {
                Err(EdgarError::HttpStatus {
                    url: format!("https://data.sec.gov/submissions/CIK{cik}.json"),
                    status: 500,
                })
            });

        let results = mocks
            .service()
            .search_filings(&FilingSearch::new("m"))
            .await
            .unwrap();
        let tickers: Vec<&str> = results.matching_companies.iter().map(|c| c.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["GME", "AMZN"]);
        assert_eq!(results.results.len(), 6);
        assert_eq!(results.results[0].filing.form, "SCHEDULE 13G");
        assert_eq!(results.results[0].company.title, "GameStop Corp.");

        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["results"][0]["company"]["ticker"], "GME");
        assert_eq!(json["results"][0]["accession_number"], "a-1");
    }

    #[tokio::test]
    async fn test_search_lookup_failures() {
        let mut mocks = Mocks::new();
        mocks.directory.expect_fetch_directory().times(1).returning(|| Ok(directory()));
        mocks.filings.expect_submissions().times(0);
        let service = mocks.service();

        let err = service.search_filings(&FilingSearch::new("  ")).await.unwrap_err();
        assert!(matches!(err, EdgarError::InvalidInput(_)));

        let err = service.search_filings(&FilingSearch::new("zzqx")).await.unwrap_err();
        assert!(matches!(err, EdgarError::NoMatchingCompanies { .. }));
    }

    #[tokio::test]
    async fn test_api_status_operational() {
        let mut mocks = Mocks::new();
        mocks.directory.expect_fetch_directory().times(1).returning(|| Ok(directory()));

        let status = mocks.service().api_status().await;
        assert_eq!(status.status, ApiHealth::Operational);
        assert_eq!(status.total_companies, Some(3));
        assert!(status.response_time_ms.is_some());

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "operational");
        assert!(json.get("error").is_none());
    }

    #[tokio::test]
    async fn test_api_status_reports_failures() {
        let mut mocks = Mocks::new();
        mocks.directory.expect_fetch_directory().returning(|| {
            Err(EdgarError::HttpStatus {
                url: "https://www.sec.gov/files/company_tickers.json".to_string(),
                status: 403,
            })
        });

        let status = mocks.service().api_status().await;
        assert_eq!(status.status, ApiHealth::Error);
        assert_eq!(status.status_code, Some(403));
        assert!(status.error.unwrap().contains("403"));
        assert_eq!(status.total_companies, None);
    }
}
