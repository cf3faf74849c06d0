//! The tool capability interface

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;
use crate::result::ToolResult;
use crate::schema::ObjectSchema;

/// A named capability exposed to a calling agent
///
/// Implementations supply metadata and a handler. Handlers either produce
/// content or fail naturally with an [`Error`](crate::Error); the dispatcher
/// owns the catch, so implementations do not wrap their own failures.
///
/// Arguments arrive already checked against [`Tool::schema`], but handlers
/// still deserialize into a typed struct before doing any work.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name of the tool within a registry
    fn name(&self) -> &str;

    /// Human/agent-facing description
    fn description(&self) -> &str;

    /// Declarative schema of the accepted arguments
    fn schema(&self) -> &ObjectSchema;

    /// Execute the tool
    async fn call(&self, arguments: Value) -> Result<ToolResult>;
}

/// Public projection of a tool, as reported by `tools/list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Build the listing entry for a tool
    pub fn for_tool(tool: &dyn Tool) -> Self {
        Self {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            input_schema: tool.schema().to_json_schema(),
        }
    }
}
