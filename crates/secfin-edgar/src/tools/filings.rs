//! Company filing index tools

use super::{parse_params, respond};
use crate::filing::FilingType;
use crate::service::{DEFAULT_FILING_LIMIT, DEFAULT_OWNERSHIP_LIMIT, EdgarService, FilingQuery};
use async_trait::async_trait;
use chrono::NaiveDate;
use secfin_tools::{Result, Tool, ToolError, schema};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Lists a company's recent SEC filings
pub struct CompanyFilingsTool {
    service: Arc<EdgarService>,
}

#[derive(Debug, Deserialize)]
struct FilingsParams {
    ticker: String,
    #[serde(default)]
    form_type: Option<String>,
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    start_date: Option<NaiveDate>,
    #[serde(default)]
    end_date: Option<NaiveDate>,
}

impl CompanyFilingsTool {
    pub fn new(service: Arc<EdgarService>) -> Self {
        Self { service }
    }

    fn query(&self, params: FilingsParams) -> Result<FilingQuery> {
        let mut query = FilingQuery::new(params.ticker)
            .limit(params.limit.unwrap_or(DEFAULT_FILING_LIMIT));

        if let Some(form) = params.form_type.filter(|form| !form.trim().is_empty()) {
            let form_type: FilingType = form
                .parse()
                .map_err(|e| ToolError::invalid_parameters(self.name(), e))?;
            query = query.form_type(form_type);
        }
        if let Some(start) = params.start_date {
            query = query.start_date(start);
        }
        if let Some(end) = params.end_date {
            query = query.end_date(end);
        }

        Ok(query)
    }
}

#[async_trait]
impl Tool for CompanyFilingsTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: FilingsParams = parse_params(self.name(), params)?;
        let query = self.query(params)?;
        respond(self.name(), self.service.company_filings(&query).await)
    }

    fn name(&self) -> &str {
        "get_company_filings"
    }

    fn description(&self) -> &str {
        "List a company's recent SEC filings with links to each document. \
         Optionally filter by form type and an inclusive filing date range."
    }

    fn input_schema(&self) -> Value {
        let forms: Vec<&str> = FilingType::ALL.iter().map(FilingType::as_str).collect();
        schema::object(
            json!({
                "ticker": schema::string("Stock ticker symbol"),
                "form_type": schema::string_enum("SEC form type to keep", &forms),
                "limit": schema::integer("Maximum number of filings to return (default 10)"),
                "start_date": schema::string("Earliest filing date, YYYY-MM-DD"),
                "end_date": schema::string("Latest filing date, YYYY-MM-DD"),
            }),
            vec!["ticker"],
        )
    }
}

/// Lists Schedule 13D and 13G beneficial ownership reports
pub struct BeneficialOwnershipTool {
    service: Arc<EdgarService>,
}

#[derive(Debug, Deserialize)]
struct OwnershipParams {
    ticker: String,
    #[serde(default)]
    limit: Option<usize>,
}

impl BeneficialOwnershipTool {
    pub fn new(service: Arc<EdgarService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for BeneficialOwnershipTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: OwnershipParams = parse_params(self.name(), params)?;
        let limit = params.limit.unwrap_or(DEFAULT_OWNERSHIP_LIMIT);
        respond(
            self.name(),
            self.service.beneficial_ownership(&params.ticker, limit).await,
        )
    }

    fn name(&self) -> &str {
        "get_beneficial_ownership"
    }

    fn description(&self) -> &str {
        "List beneficial ownership reports (Schedule 13D and 13G, amendments included) \
         filed about a company, newest first."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "ticker": schema::string("Stock ticker symbol"),
                "limit": schema::integer("Maximum number of reports to return (default 10)"),
            }),
            vec!["ticker"],
        )
    }
}
