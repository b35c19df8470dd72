//! Tool definition types advertised to an assistant

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool definition
///
/// Describes a tool an assistant can use: its name, description and input
/// schema in JSON Schema format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (matches the name in ToolRegistry)
    pub name: String,

    /// Description of what the tool does
    pub description: String,

    /// JSON schema for the tool's input parameters
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Create a new tool definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Helpers to build JSON schemas for tool inputs
pub mod schema {
    use serde_json::{Value, json};

    /// Object schema with properties and required keys
    pub fn object(properties: Value, required: Vec<&str>) -> Value {
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// String property schema
    pub fn string(description: &str) -> Value {
        json!({
            "type": "string",
            "description": description,
        })
    }

    /// String property restricted to a set of values
    pub fn string_enum(description: &str, values: &[&str]) -> Value {
        json!({
            "type": "string",
            "description": description,
            "enum": values,
        })
    }

    /// Integer property schema
    pub fn integer(description: &str) -> Value {
        json!({
            "type": "integer",
            "description": description,
        })
    }

    /// Array property schema
    pub fn array(description: &str, items: Value) -> Value {
        json!({
            "type": "array",
            "description": description,
            "items": items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_definition_creation() {
        let schema = schema::object(
            json!({
                "ticker": schema::string("Ticker symbol"),
            }),
            vec!["ticker"],
        );

        let tool = ToolDefinition::new("resolve_cik", "Resolve a ticker", schema.clone());
        assert_eq!(tool.name, "resolve_cik");
        assert_eq!(tool.description, "Resolve a ticker");
        assert_eq!(tool.input_schema, schema);
    }

    #[test]
    fn test_schema_builders() {
        assert_eq!(schema::string("t")["type"], "string");
        assert_eq!(schema::integer("n")["type"], "integer");

        let list = schema::array("concepts", schema::string("concept"));
        assert_eq!(list["items"]["type"], "string");

        let forms = schema::string_enum("form", &["10-K", "10-Q"]);
        assert_eq!(forms["enum"][1], "10-Q");
    }
}
