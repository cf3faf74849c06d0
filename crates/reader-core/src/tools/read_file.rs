//! Whole-file read tool

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::result::ToolResult;
use crate::schema::{FieldKind, ObjectSchema};
use crate::tool::Tool;

/// Arguments for read_file
#[derive(Debug, Deserialize)]
struct ReadFileArgs {
    path: PathBuf,
}

/// Reads a file's contents and returns them as a single text block.
///
/// The path is documented as absolute but not checked; a relative path is
/// handed to the filesystem as-is and resolves against the server's working
/// directory. Filesystem and UTF-8 decoding failures propagate to the
/// dispatch boundary uncaught.
pub struct ReadFileTool {
    schema: ObjectSchema,
}

impl ReadFileTool {
    pub fn new() -> Self {
        Self {
            schema: ObjectSchema::new().required(
                "path",
                FieldKind::String,
                "Absolute path to the file to read. e.g. /Users/user/Desktop/test.txt",
            ),
        }
    }
}

impl Default for ReadFileTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for ReadFileTool {
    fn name(&self) -> &str {
        "read_file"
    }

    fn description(&self) -> &str {
        "Read file contents"
    }

    fn schema(&self) -> &ObjectSchema {
        &self.schema
    }

    async fn call(&self, arguments: Value) -> Result<ToolResult> {
        let args: ReadFileArgs = serde_json::from_value(arguments)
            .map_err(|e| Error::InvalidArguments(e.to_string()))?;

        let text = tokio::fs::read_to_string(&args.path).await?;
        Ok(ToolResult::text(text))
    }
}
