//! Tool framework for sec-finance
//!
//! A [`Tool`] is a named, self-describing async function that takes and
//! returns JSON. An AI assistant discovers tools through their
//! [`ToolDefinition`]s and calls them by name through a [`ToolRegistry`].

pub mod definition;
pub mod error;
pub mod registry;
pub mod tool;

pub use definition::{ToolDefinition, schema};
pub use error::{Result, ToolError};
pub use registry::ToolRegistry;
pub use tool::Tool;
