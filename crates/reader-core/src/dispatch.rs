//! Call dispatch and the error-translating boundary

use serde_json::Value;

use crate::error::Error;
use crate::registry::ToolRegistry;
use crate::result::ToolResult;
use crate::tool::ToolDefinition;

/// Routes inbound list/call requests to the registry and normalizes results
///
/// [`Dispatcher::call_tool`] is total: lookup misses, rejected arguments,
/// and handler failures all come back as failure results carrying the
/// `isError` flag, never as `Err` and never as a panic. Centralizing the
/// catch here keeps handlers free of their own error wrapping.
pub struct Dispatcher {
    registry: ToolRegistry,
}

impl Dispatcher {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Listing projections for every registered tool, in registration order
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.registry.definitions()
    }

    /// Look up, validate, and invoke a tool.
    ///
    /// Validation happens before the handler runs; a call with rejected
    /// arguments never reaches the handler.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> ToolResult {
        let Some(tool) = self.registry.lookup(name) else {
            tracing::warn!(tool = name, "Unknown tool requested");
            return failure(&Error::UnknownTool(name.to_string()));
        };

        if let Err(detail) = tool.schema().validate(&arguments) {
            tracing::debug!(tool = name, detail = %detail, "Arguments rejected");
            return failure(&Error::InvalidArguments(detail));
        }

        match tool.call(arguments).await {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(tool = name, error = %e, "Tool call failed");
                failure(&e)
            }
        }
    }

    /// The registry backing this dispatcher
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

fn failure(error: &Error) -> ToolResult {
    ToolResult::error(format!("Error: {}", error))
}
