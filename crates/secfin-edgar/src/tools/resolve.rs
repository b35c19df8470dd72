//! Ticker → CIK lookup tool

use super::{parse_params, respond};
use crate::service::EdgarService;
use async_trait::async_trait;
use secfin_tools::{Result, Tool, schema};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Resolves a ticker symbol to its SEC CIK
pub struct ResolveCikTool {
    service: Arc<EdgarService>,
}

#[derive(Debug, Deserialize)]
struct ResolveParams {
    ticker: String,
}

impl ResolveCikTool {
    pub fn new(service: Arc<EdgarService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for ResolveCikTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: ResolveParams = parse_params(self.name(), params)?;
        respond(self.name(), self.service.resolve(&params.ticker).await)
    }

    fn name(&self) -> &str {
        "resolve_cik"
    }

    fn description(&self) -> &str {
        "Resolve a US stock ticker symbol (e.g. AAPL, GME, BRK.B) to the company's 10-digit \
         SEC Central Index Key (CIK)."
    }

    fn input_schema(&self) -> Value {
        schema::object(
            json!({ "ticker": schema::string("Stock ticker symbol") }),
            vec!["ticker"],
        )
    }
}
