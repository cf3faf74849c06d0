//! file-reader MCP server
//!
//! A Model Context Protocol server that exposes file reading to agentic
//! clients like Claude Desktop, Windsurf, and Cursor.
//!
//! # Usage
//!
//! ```bash
//! reader-mcp
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `reader_mcp=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout
//! - Logs go to stderr (to avoid interfering with the protocol)

use clap::Parser;
use reader_mcp::ReaderMcpServer;

/// MCP server exposing file reading tools
///
/// No flags beyond --help/--version; the server is driven entirely by its
/// MCP client over stdio.
#[derive(Parser)]
#[command(name = "reader-mcp")]
#[command(about = "MCP server exposing file reading tools")]
#[command(version)]
struct Args {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reader_mcp=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let _args = Args::parse();

    tracing::info!("Starting file-reader MCP server");

    let server = ReaderMcpServer::new();
    server.run().await?;

    Ok(())
}
