//! MCP Server implementation
//!
//! Routes JSON-RPC messages to the tool dispatcher and runs the stdio
//! serve loop.

use std::io::{BufRead, Write};

use serde_json::{Value, json};

use reader_core::{Dispatcher, builtin_registry};

use crate::protocol::{
    InitializeResult, JsonRpcRequest, JsonRpcResponse, ServerCapabilities, ServerInfo,
    ToolCallParams, ToolsCapability,
};
use crate::{Error, Result};

/// Name reported to clients during the initialize handshake
const SERVER_NAME: &str = "file-reader";

/// MCP protocol revision this server speaks
const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP server exposing the file-reader toolset over stdio
///
/// One request is processed at a time: a line is read from stdin, handled
/// to completion, and answered on stdout before the next line is read.
/// Tool failures are successful JSON-RPC responses carrying `isError`;
/// JSON-RPC errors are reserved for protocol-level problems.
///
/// # Example
///
/// ```ignore
/// use reader_mcp::ReaderMcpServer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let server = ReaderMcpServer::new();
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct ReaderMcpServer {
    dispatcher: Dispatcher,
}

impl ReaderMcpServer {
    /// Create a server exposing the built-in tools
    pub fn new() -> Self {
        Self {
            dispatcher: Dispatcher::new(builtin_registry()),
        }
    }

    /// Create a server around a custom dispatcher
    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Run the server over stdin/stdout.
    ///
    /// Reads newline-delimited JSON-RPC messages until stdin closes. A
    /// message that cannot be parsed or answered is reported as a -32603
    /// response; the loop itself only ends with the transport.
    pub async fn run(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();

        tracing::info!(
            tools = self.dispatcher.list_tools().len(),
            "MCP server ready, listening on stdio"
        );

        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            tracing::debug!(request = %line, "Received message");

            match self.handle_message(&line).await {
                Ok(response) if !response.is_empty() => {
                    writeln!(stdout, "{}", response)?;
                    stdout.flush()?;
                }
                Ok(_) => {} // No response needed (notifications)
                Err(e) => {
                    let error_response =
                        JsonRpcResponse::error(None, -32603, format!("Internal error: {}", e));
                    let json_str = serde_json::to_string(&error_response)?;
                    writeln!(stdout, "{}", json_str)?;
                    stdout.flush()?;
                }
            }
        }

        Ok(())
    }

    /// Handle a single MCP message.
    ///
    /// Parses the JSON-RPC request and dispatches by method. Returns the
    /// serialized response, or an empty string for notifications.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let request: JsonRpcRequest = serde_json::from_str(message)?;

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id)?,
            "initialized" | "notifications/initialized" => return Ok(String::new()),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await?,
            _ => JsonRpcResponse::error(
                request.id,
                -32601,
                format!("Method not found: {}", request.method),
            ),
        };

        serde_json::to_string(&response).map_err(Error::from)
    }

    /// Handle the initialize request: report capabilities and server info.
    fn handle_initialize(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    /// Handle tools/list: project every registered tool for the wire.
    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let tools: Vec<Value> = self
            .dispatcher
            .list_tools()
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema,
                })
            })
            .collect();

        JsonRpcResponse::success(id, json!({ "tools": tools }))
    }

    /// Handle tools/call: delegate to the dispatcher.
    ///
    /// The dispatcher's result, failure or not, is a successful JSON-RPC
    /// response; the calling agent discriminates on `isError`.
    async fn handle_tools_call(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let params: ToolCallParams = serde_json::from_value(params)?;

        let result = self
            .dispatcher
            .call_tool(&params.name, params.arguments)
            .await;

        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    /// Dispatcher serving this server's calls
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

impl Default for ReaderMcpServer {
    fn default() -> Self {
        Self::new()
    }
}
