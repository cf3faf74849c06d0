//! Built-in tool implementations

pub mod read_file;

pub use read_file::ReadFileTool;

use std::sync::Arc;

use crate::registry::ToolRegistry;

/// Registry holding every built-in tool
pub fn builtin_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(ReadFileTool::new()));
    registry
}
