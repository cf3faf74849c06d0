//! MCP server for file reading
//!
//! This crate exposes the `reader-core` toolset via the Model Context
//! Protocol (MCP), allowing agentic clients (Claude Desktop, Windsurf,
//! Cursor) to read files on the machine the server runs on.
//!
//! # Architecture
//!
//! The `reader-mcp` crate is the transport/protocol layer over the
//! protocol-free dispatch core:
//!
//! ```text
//! [ MCP Client (Claude/IDE) ]
//!        | (JSON-RPC over stdio)
//!        v
//! [ reader-mcp (wire types + serve loop) ]
//!        | (Rust API)
//!        v
//! [ reader-core (registry + dispatcher) ]
//!        |
//!        +--> [ read_file -> filesystem ]
//! ```
//!
//! # Tools
//!
//! A single tool is served:
//! - `read_file` - whole-file UTF-8 read of a given path

pub mod error;
pub mod protocol;
pub mod server;

pub use error::{Error, Result};
pub use server::ReaderMcpServer;
