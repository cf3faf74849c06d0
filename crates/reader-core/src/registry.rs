//! The read-only collection of tools known to the server

use std::sync::Arc;

use crate::tool::{Tool, ToolDefinition};

/// Ordered mapping from tool name to implementation
///
/// Built once at startup and never mutated while serving, so concurrent
/// lookups need no synchronization. Listings preserve registration order
/// for reproducible `tools/list` responses.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Register a tool under its name.
    ///
    /// Names are expected to be unique; if two tools share one, the first
    /// registration wins on lookup.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        tracing::debug!(tool = tool.name(), "Registering tool");
        self.tools.push(tool);
    }

    /// Find a tool by name
    pub fn lookup(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    /// Listing projections for all tools, in registration order
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .iter()
            .map(|tool| ToolDefinition::for_tool(tool.as_ref()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
