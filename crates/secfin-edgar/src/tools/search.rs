//! Company-name filing search tool

use super::{parse_params, respond};
use crate::filing::FilingType;
use crate::service::{DEFAULT_SEARCH_LIMIT, EdgarService, FilingSearch, MAX_SEARCH_COMPANIES};
use async_trait::async_trait;
use chrono::NaiveDate;
use secfin_tools::{Result, Tool, ToolError, schema};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Finds companies by name or ticker and lists their filings
pub struct SearchFilingsTool {
    service: Arc<EdgarService>,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    query: String,
    #[serde(default)]
    form_type: Option<String>,
    #[serde(default)]
    start_date: Option<NaiveDate>,
    #[serde(default)]
    end_date: Option<NaiveDate>,
    #[serde(default)]
    limit: Option<usize>,
}

impl SearchFilingsTool {
    pub fn new(service: Arc<EdgarService>) -> Self {
        Self { service }
    }

    fn search(&self, params: SearchParams) -> Result<FilingSearch> {
        let mut search =
            FilingSearch::new(params.query).limit(params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT));

        if let Some(form) = params.form_type.filter(|form| !form.trim().is_empty()) {
            let form_type: FilingType = form
                .parse()
                .map_err(|e| ToolError::invalid_parameters(self.name(), e))?;
            search = search.form_type(form_type);
        }
        search.start_date = params.start_date;
        search.end_date = params.end_date;

        Ok(search)
    }
}

#[async_trait]
impl Tool for SearchFilingsTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: SearchParams = parse_params(self.name(), params)?;
        let search = self.search(params)?;
        respond(self.name(), self.service.search_filings(&search).await)
    }

    fn name(&self) -> &str {
        "search_filings"
    }

    fn description(&self) -> &str {
        "Search SEC filings by company name or ticker fragment. Lists the matching companies \
         and the recent filings of the first few, newest first."
    }

    fn input_schema(&self) -> Value {
        let forms: Vec<&str> = FilingType::ALL.iter().map(FilingType::as_str).collect();
        schema::object(
            json!({
                "query": schema::string(&format!(
                    "Company name or ticker fragment; filings are fetched for the first {MAX_SEARCH_COMPANIES} matches"
                )),
                "form_type": schema::string_enum("SEC form type to keep", &forms),
                "start_date": schema::string("Earliest filing date, YYYY-MM-DD"),
                "end_date": schema::string("Latest filing date, YYYY-MM-DD"),
                "limit": schema::integer("Maximum number of filings to return (default 20)"),
            }),
            vec!["query"],
        )
    }
}
