//! EDGAR connectivity tool

use super::respond;
use crate::service::EdgarService;
use async_trait::async_trait;
use secfin_tools::{Result, Tool, schema};
use serde_json::{Value, json};
use std::sync::Arc;

/// Reports whether SEC EDGAR is reachable
pub struct ApiStatusTool {
    service: Arc<EdgarService>,
}

impl ApiStatusTool {
    pub fn new(service: Arc<EdgarService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Tool for ApiStatusTool {
    async fn execute(&self, _params: Value) -> Result<Value> {
        respond(self.name(), Ok(self.service.api_status().await))
    }

    fn name(&self) -> &str {
        "get_sec_api_status"
    }

    fn description(&self) -> &str {
        "Check that SEC EDGAR is reachable. Reports the response time and the number of \
         listed companies, or the error."
    }

    fn input_schema(&self) -> Value {
        schema::object(json!({}), vec![])
    }
}
