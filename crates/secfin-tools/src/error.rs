//! Error types for tool execution

use thiserror::Error;

/// Result type alias for tool operations
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type for tool operations
#[derive(Error, Debug)]
pub enum ToolError {
    /// Parameters did not match the tool's input schema
    #[error("Invalid parameters for {tool}: {reason}")]
    InvalidParameters {
        /// Tool name
        tool: String,
        /// What was wrong
        reason: String,
    },

    /// The tool ran but could not produce a result
    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),

    /// No tool is registered under this name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl ToolError {
    /// Build an `InvalidParameters` error
    pub fn invalid_parameters(tool: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::InvalidParameters {
            tool: tool.into(),
            reason: reason.to_string(),
        }
    }
}
