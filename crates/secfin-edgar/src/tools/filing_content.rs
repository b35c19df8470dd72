//! Latest-filing content tool

use super::{parse_params, respond};
use crate::filing::FilingType;
use crate::metrics::MetricRequest;
use crate::service::EdgarService;
use async_trait::async_trait;
use secfin_tools::{Result, Tool, ToolError, schema};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Returns the latest filing of a form with its metrics and text
pub struct FilingContentTool {
    service: Arc<EdgarService>,
}

#[derive(Debug, Deserialize)]
struct ContentParams {
    ticker: String,
    #[serde(default = "default_filing_type")]
    filing_type: String,
    #[serde(default)]
    specific_metrics: Option<Vec<String>>,
}

fn default_filing_type() -> String {
    FilingType::Form10K.as_str().to_string()
}

impl FilingContentTool {
    pub fn new(service: Arc<EdgarService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for FilingContentTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: ContentParams = parse_params(self.name(), params)?;
        let form_type: FilingType = params
            .filing_type
            .parse()
            .map_err(|e| ToolError::invalid_parameters(self.name(), e))?;
        let request = MetricRequest::from_concepts(params.specific_metrics);

        respond(
            self.name(),
            self.service
                .filing_content(&params.ticker, form_type, &request)
                .await,
        )
    }

    fn name(&self) -> &str {
        "get_filing_content"
    }

    fn description(&self) -> &str {
        "Get a company's latest filing of a form type (default 10-K) together with its \
         financial metrics. The document text is included when it is under 1 MB; larger \
         documents come back as a link with a note to download them manually."
    }

    fn input_schema(&self) -> Value {
        let forms: Vec<&str> = FilingType::ALL.iter().map(FilingType::as_str).collect();
        schema::object(
            json!({
                "ticker": schema::string("Stock ticker symbol"),
                "filing_type": schema::string_enum("SEC form type (default 10-K)", &forms),
                "specific_metrics": schema::array(
                    "Exact XBRL concept names; omit for the 13 essential metrics",
                    schema::string("XBRL concept name"),
                ),
            }),
            vec!["ticker"],
        )
    }
}
