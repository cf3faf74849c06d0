//! Tool registry and dispatch core for the file-reader MCP server
//!
//! This crate knows nothing about the wire protocol. It models tools as
//! named capabilities (description, declarative input schema, handler) and
//! routes calls to them through a single error-translating boundary:
//!
//! ```text
//! [ reader-mcp (protocol layer) ]
//!        | list_tools / call_tool
//!        v
//! [ Dispatcher ]
//!        | lookup -> validate -> invoke
//!        v
//! [ ToolRegistry ] --> [ dyn Tool ] --> ToolResult
//! ```
//!
//! Every call produces a [`ToolResult`], success or failure; the `isError`
//! flag is the only discriminator. Lookup misses, rejected arguments, and
//! handler failures never escape [`Dispatcher::call_tool`] as errors.

pub mod dispatch;
pub mod error;
pub mod registry;
pub mod result;
pub mod schema;
pub mod tool;
pub mod tools;

pub use dispatch::Dispatcher;
pub use error::{Error, Result};
pub use registry::ToolRegistry;
pub use result::{ToolContent, ToolResult};
pub use schema::{FieldKind, ObjectSchema};
pub use tool::{Tool, ToolDefinition};
pub use tools::{ReadFileTool, builtin_registry};
