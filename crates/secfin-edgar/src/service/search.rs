//! Filing search by company name or ticker

use super::{EdgarService, FilingQuery};
use crate::api::DirectoryEntry;
use crate::error::{EdgarError, Result};
use crate::filing::{Filing, FilingType};
use chrono::NaiveDate;
use futures::future::join_all;
use serde::Serialize;

/// Results returned when the caller gives no limit
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Matching companies whose filings are fetched
pub const MAX_SEARCH_COMPANIES: usize = 5;

/// Company search with the same filters as [`FilingQuery`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilingSearch {
    /// Case-insensitive fragment of a company name or ticker
    pub query: String,
    pub form_type: Option<FilingType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: usize,
}

impl FilingSearch {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            form_type: None,
            start_date: None,
            end_date: None,
            limit: DEFAULT_SEARCH_LIMIT,
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

    fn filter(&self, ticker: &str, limit: usize) -> FilingQuery {
        FilingQuery {
            ticker: ticker.to_string(),
            form_type: self.form_type,
            start_date: self.start_date,
            end_date: self.end_date,
            limit,
        }
    }

    /// Per-company filter; the result limit is shared out between companies
    fn company_query(&self, company: &DirectoryEntry, companies: usize) -> FilingQuery {
        self.filter(&company.ticker, (self.limit / companies.max(1)).max(1))
    }
}

/// A filing with the company it belongs to
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub filing: Filing,
    pub company: DirectoryEntry,
}

/// Companies matching a search and their filings, newest first
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query: String,
    /// Every directory entry that matched
    pub total_matches: usize,
    /// The matches whose filings were fetched
    pub matching_companies: Vec<DirectoryEntry>,
    /// Filings found before the limit was applied
    pub total_results: usize,
    pub results: Vec<SearchHit>,
}

/// Directory entries whose name or ticker contains `needle`, exact tickers first
fn matching_companies(directory: Vec<DirectoryEntry>, needle: &str) -> Vec<DirectoryEntry> {
    let needle = needle.to_lowercase();
    let (mut exact, partial): (Vec<_>, Vec<_>) = directory
        .into_iter()
        .filter(|entry| {
            entry.ticker.to_lowercase().contains(&needle) || entry.title.to_lowercase().contains(&needle)
        })
        .partition(|entry| entry.ticker.eq_ignore_ascii_case(&needle));

    exact.extend(partial);
    exact
}

impl EdgarService {
    /// Find companies by name or ticker and list their recent filings
    ///
    /// A company whose submissions cannot be fetched is skipped.
    pub async fn search_filings(&self, search: &FilingSearch) -> Result<SearchResults> {
        let needle = search.query.trim();
        if needle.is_empty() {
            return Err(EdgarError::InvalidInput("query must not be empty".to_string()));
        }
        search.filter(needle, search.limit).validate()?;

        let directory = self.directory.fetch_directory().await?;
        let matches = matching_companies(directory, needle);
        if matches.is_empty() {
            return Err(EdgarError::NoMatchingCompanies {
                query: search.query.clone(),
            });
        }

        let total_matches = matches.len();
        let searched: Vec<DirectoryEntry> = matches.into_iter().take(MAX_SEARCH_COMPANIES).collect();
        let queries: Vec<FilingQuery> = searched
            .iter()
            .map(|company| search.company_query(company, searched.len()))
            .collect();

        let fetched = join_all(searched.iter().zip(&queries).map(|(company, query)| async move {
            match self.filings.submissions(&company.cik).await {
                Ok(submissions) => Filing::from_recent(&company.cik, &submissions.filings.recent)
                    .into_iter()
                    .filter(|filing| query.matches(filing))
                    .take(query.limit)
                    .map(|filing| SearchHit {
                        filing,
                        company: company.clone(),
                    })
                    .collect::<Vec<_>>(),
                Err(e) => {
                    tracing::warn!(ticker = %company.ticker, error = %e, "skipping company in search");
                    Vec::new()
                }
            }
        }))
        .await;

        let mut results: Vec<SearchHit> = fetched.into_iter().flatten().collect();
        results.sort_by(|a, b| b.filing.filing_date.cmp(&a.filing.filing_date));
        let total_results = results.len();
        results.truncate(search.limit);

        tracing::info!(
            query = needle,
            total_matches,
            returned = results.len(),
            "searched filings"
        );

        Ok(SearchResults {
            query: search.query.clone(),
            total_matches,
            matching_companies: searched,
            total_results,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::Cik;

    fn entry(cik: u64, ticker: &str, title: &str) -> DirectoryEntry {
        DirectoryEntry {
            cik: Cik::from_number(cik).unwrap(),
            ticker: ticker.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_matches_name_or_ticker_with_exact_ticker_first() {
        let directory = vec![
            entry(1_045_810, "NVDA", "NVIDIA CORP"),
            entry(1_652_044, "GOOGL", "Alphabet Inc."),
            entry(1_326_380, "GME", "GameStop Corp."),
            entry(2_488, "AMD", "ADVANCED MICRO DEVICES INC"),
        ];

        let found = matching_companies(directory.clone(), "gamestop");
        assert_eq!(found, vec![directory[2].clone()]);

        let found = matching_companies(directory.clone(), "goog");
        assert_eq!(found[0].ticker, "GOOGL");

        let found = matching_companies(directory.clone(), "amd");
        assert_eq!(found[0].ticker, "AMD");

        assert!(matching_companies(directory, "zzqx").is_empty());
    }

    #[test]
    fn test_limit_is_shared_between_companies() {
        let search = FilingSearch::new("corp").limit(20);
        let company = entry(1, "A", "A Corp");
        assert_eq!(search.company_query(&company, 5).limit, 4);
        assert_eq!(search.company_query(&company, 1).limit, 20);

        let search = FilingSearch::new("corp").limit(3);
        assert_eq!(search.company_query(&company, 5).limit, 1);
    }
}
