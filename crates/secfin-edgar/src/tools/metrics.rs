//! XBRL metric tools: selection and discovery

use super::{parse_params, respond};
use crate::metrics::MetricRequest;
use crate::service::EdgarService;
use async_trait::async_trait;
use secfin_tools::{Result, Tool, schema};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Returns essential or caller-named financial metrics
pub struct FinancialMetricsTool {
    service: Arc<EdgarService>,
}

#[derive(Debug, Deserialize)]
struct MetricsParams {
    ticker: String,
    #[serde(default)]
    specific_metrics: Option<Vec<String>>,
}

impl FinancialMetricsTool {
    pub fn new(service: Arc<EdgarService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for FinancialMetricsTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: MetricsParams = parse_params(self.name(), params)?;
        let request = MetricRequest::from_concepts(params.specific_metrics);
        respond(
            self.name(),
            self.service.financial_metrics(&params.ticker, &request).await,
        )
    }

    fn name(&self) -> &str {
        "get_financial_metrics"
    }

    fn description(&self) -> &str {
        "Get XBRL financial metrics for a company, five most recent values per unit. \
         Without specific_metrics, returns 13 essential metrics (revenue, net income, assets, \
         liabilities, equity, cash, EPS...). With specific_metrics, returns exactly those \
         concepts; use get_available_metrics to find their names."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "ticker": schema::string("Stock ticker symbol"),
                "specific_metrics": schema::array(
                    "Exact XBRL concept names, e.g. NetIncomeLoss, InterestExpense",
                    schema::string("XBRL concept name"),
                ),
            }),
            vec!["ticker"],
        )
    }
}

/// Lists every metric a company reports, grouped by statement
pub struct AvailableMetricsTool {
    service: Arc<EdgarService>,
}

#[derive(Debug, Deserialize)]
struct DiscoveryParams {
    ticker: String,
    #[serde(default)]
    search_term: Option<String>,
}

impl AvailableMetricsTool {
    pub fn new(service: Arc<EdgarService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for AvailableMetricsTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: DiscoveryParams = parse_params(self.name(), params)?;
        respond(
            self.name(),
            self.service
                .available_metrics(&params.ticker, params.search_term.as_deref())
                .await,
        )
    }

    fn name(&self) -> &str {
        "get_available_metrics"
    }

    fn description(&self) -> &str {
        "List every XBRL concept a company reports, grouped into income_statement, \
         balance_sheet, cash_flow and other. Pass search_term to filter names by substring."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "ticker": schema::string("Stock ticker symbol"),
                "search_term": schema::string("Case-insensitive substring, e.g. Depreciation"),
            }),
            vec!["ticker"],
        )
    }
}

/// Returns one concept's annual and quarterly history
pub struct CompanyConceptTool {
    service: Arc<EdgarService>,
}

#[derive(Debug, Deserialize)]
struct ConceptParams {
    ticker: String,
    concept: String,
}

impl CompanyConceptTool {
    pub fn new(service: Arc<EdgarService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for CompanyConceptTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: ConceptParams = parse_params(self.name(), params)?;
        respond(
            self.name(),
            self.service
                .company_concept(&params.ticker, &params.concept)
                .await,
        )
    }

    fn name(&self) -> &str {
        "get_company_concept"
    }

    fn description(&self) -> &str {
        "Get the USD history of one XBRL concept: the 5 most recent annual (10-K) values \
         and the 8 most recent quarterly (10-Q) values."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({
                "ticker": schema::string("Stock ticker symbol"),
                "concept": schema::string("Exact XBRL concept name, e.g. Revenues, NetIncomeLoss, Assets"),
            }),
            vec!["ticker", "concept"],
        )
    }
}
