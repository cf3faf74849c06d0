//! End-to-end tests for the file-reader MCP server
//!
//! These drive the full server through `handle_message`, the same entry
//! point the stdio loop uses, against real files on disk.

use reader_core::{Dispatcher, builtin_registry};
use reader_mcp::ReaderMcpServer;
use rstest::rstest;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

fn request(id: u64, method: &str, params: Value) -> String {
    serde_json::to_string(&json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params,
    }))
    .unwrap()
}

fn call_read_file(id: u64, arguments: Value) -> String {
    request(
        id,
        "tools/call",
        json!({ "name": "read_file", "arguments": arguments }),
    )
}

async fn respond(server: &ReaderMcpServer, message: &str) -> Value {
    let response = server.handle_message(message).await.unwrap();
    serde_json::from_str(&response).unwrap()
}

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[tokio::test]
async fn full_session_handshake_list_and_call() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "note.txt", "hello");
    let server = ReaderMcpServer::new();

    // initialize
    let init = respond(
        &server,
        &request(
            1,
            "initialize",
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "integration", "version": "1.0"}
            }),
        ),
    )
    .await;
    assert_eq!(init["result"]["serverInfo"]["name"], "file-reader");
    assert!(init["result"]["capabilities"]["tools"].is_object());

    // the initialized notification draws no response
    let notification = server
        .handle_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
        .await
        .unwrap();
    assert!(notification.is_empty());

    // tools/list
    let list = respond(&server, &request(2, "tools/list", json!({}))).await;
    let tools = list["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["name"], "read_file");

    // tools/call
    let call = respond(&server, &call_read_file(3, json!({ "path": path }))).await;
    assert_eq!(
        call["result"]["content"],
        json!([{ "type": "text", "text": "hello" }])
    );
    assert!(call["result"].get("isError").is_none());
}

#[tokio::test]
async fn listing_matches_the_registry() {
    let registry = builtin_registry();
    let dispatcher = Dispatcher::new(registry);

    let listed: Vec<String> = dispatcher
        .list_tools()
        .into_iter()
        .map(|t| t.name)
        .collect();

    // one entry per registered name, no duplicates
    assert_eq!(listed.len(), dispatcher.registry().len());
    for name in &listed {
        assert!(dispatcher.registry().lookup(name).is_some());
    }
    let mut deduped = listed.clone();
    deduped.dedup();
    assert_eq!(deduped, listed);
}

#[rstest]
#[case::empty_object(json!({}))]
#[case::wrong_type(json!({ "path": 42 }))]
#[case::non_object(json!("path=/tmp/a"))]
#[tokio::test]
async fn bad_arguments_are_rejected_before_any_read(#[case] arguments: Value) {
    let server = ReaderMcpServer::new();

    let call = respond(&server, &call_read_file(1, arguments)).await;
    assert_eq!(call["result"]["isError"], true);
    let text = call["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("Error: Invalid arguments:"), "{text}");
}

#[tokio::test]
async fn missing_file_is_a_tool_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.txt");
    let server = ReaderMcpServer::new();

    let call = respond(
        &server,
        &call_read_file(1, json!({ "path": path.to_str().unwrap() })),
    )
    .await;

    assert!(call.get("error").is_none());
    assert_eq!(call["result"]["isError"], true);
    let text = call["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("Error:"), "{text}");
    assert!(text.contains("No such file"), "{text}");
    assert!(!path.exists());
}

#[tokio::test]
async fn unknown_tool_is_a_tool_failure() {
    let server = ReaderMcpServer::new();

    let call = respond(
        &server,
        &request(
            1,
            "tools/call",
            json!({ "name": "delete_file", "arguments": {} }),
        ),
    )
    .await;

    assert_eq!(call["result"]["isError"], true);
    assert_eq!(
        call["result"]["content"][0]["text"],
        "Error: Unknown tool: delete_file"
    );
}

#[tokio::test]
async fn repeated_reads_return_identical_payloads() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "stable.txt", "same every time\n");
    let server = ReaderMcpServer::new();

    let first = respond(&server, &call_read_file(1, json!({ "path": path }))).await;
    let second = respond(&server, &call_read_file(2, json!({ "path": path }))).await;

    assert_eq!(first["result"], second["result"]);
}

#[tokio::test]
async fn listed_schema_is_a_usable_validator() {
    let server = ReaderMcpServer::new();

    let list = respond(&server, &request(1, "tools/list", json!({}))).await;
    let schema = &list["result"]["tools"][0]["inputSchema"];

    assert_eq!(schema["type"], "object");
    assert_eq!(schema["properties"]["path"]["type"], "string");
    let required: Vec<&str> = schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(required, vec!["path"]);

    // A validator rebuilt from the listed schema agrees with the server:
    // every required field present, with the declared type.
    let conforms = |args: &Value| {
        required.iter().all(|field| {
            let declared = &schema["properties"][*field]["type"];
            args.get(*field)
                .is_some_and(|v| declared != "string" || v.is_string())
        })
    };
    assert!(conforms(&json!({ "path": "/a" })));
    assert!(!conforms(&json!({})));
}
