//! Tool trait definition

use crate::Result;
use crate::definition::ToolDefinition;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for tools an assistant can execute
///
/// Each tool provides a name, a description and a JSON schema for its input.
/// Expected "no data" outcomes (an unknown ticker, a company without the
/// requested filing) are returned as `Ok` JSON payloads carrying an `error`
/// field, so the assistant can react to them; `Err` is reserved for bad
/// parameters and failures the caller cannot act on.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with given parameters
    ///
    /// # Arguments
    ///
    /// * `params` - Tool input as JSON value (should match input_schema)
    async fn execute(&self, params: Value) -> Result<Value>;

    /// Get the tool's name
    ///
    /// Must be unique within a ToolRegistry
    fn name(&self) -> &str;

    /// Get the tool's description
    ///
    /// This description helps the assistant decide when to use this tool
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    ///
    /// # Example
    ///
    /// ```
    /// use secfin_tools::schema;
    /// use serde_json::json;
    ///
    /// let schema = schema::object(
    ///     json!({
    ///         "ticker": schema::string("Stock ticker symbol"),
    ///         "limit": schema::integer("Maximum filings to return"),
    ///     }),
    ///     vec!["ticker"],
    /// );
    /// assert_eq!(schema["required"][0], "ticker");
    /// ```
    fn input_schema(&self) -> Value;

    /// Definition advertised to the assistant
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.input_schema())
    }
}
