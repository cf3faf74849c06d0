//! Declarative input schemas for tools
//!
//! A schema is data. The same [`ObjectSchema`] value validates inbound
//! untyped arguments and projects into the JSON Schema object published by
//! `tools/list`, so the accepted shape is defined exactly once.

use serde_json::{Map, Value, json};

/// Accepted type of a single schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Boolean,
    Integer,
    Number,
    StringArray,
}

impl FieldKind {
    /// JSON Schema `type` keyword for this kind
    fn type_name(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Boolean => "boolean",
            FieldKind::Integer => "integer",
            FieldKind::Number => "number",
            FieldKind::StringArray => "array",
        }
    }

    /// Phrase used in validation detail messages
    fn expected(self) -> &'static str {
        match self {
            FieldKind::String => "a string",
            FieldKind::Boolean => "a boolean",
            FieldKind::Integer => "an integer",
            FieldKind::Number => "a number",
            FieldKind::StringArray => "an array of strings",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
            FieldKind::Number => value.is_number(),
            FieldKind::StringArray => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
        }
    }
}

/// A single named field in an object schema
#[derive(Debug, Clone)]
struct FieldSpec {
    name: String,
    kind: FieldKind,
    description: String,
    required: bool,
}

/// Declarative schema for a tool's arguments
///
/// Fields are ordered as declared; the projection lists them in the same
/// order. Unknown keys in the arguments are tolerated, matching the
/// permissive object semantics agents expect from MCP servers.
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    fields: Vec<FieldSpec>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a required field
    pub fn required(mut self, name: &str, kind: FieldKind, description: &str) -> Self {
        self.fields.push(FieldSpec {
            name: name.to_string(),
            kind,
            description: description.to_string(),
            required: true,
        });
        self
    }

    /// Add an optional field
    pub fn optional(mut self, name: &str, kind: FieldKind, description: &str) -> Self {
        self.fields.push(FieldSpec {
            name: name.to_string(),
            kind,
            description: description.to_string(),
            required: false,
        });
        self
    }

    /// Validate raw arguments against this schema.
    ///
    /// Fail-soft: rejections come back as a human-readable detail string
    /// naming the offending field, never as a panic. Absent arguments
    /// (`null`) are treated as an empty object so tools without required
    /// fields accept calls that omit `arguments` entirely.
    pub fn validate(&self, arguments: &Value) -> std::result::Result<(), String> {
        let empty = Map::new();
        let object = match arguments {
            Value::Object(map) => map,
            Value::Null => &empty,
            other => return Err(format!("expected an object, got {}", json_type_name(other))),
        };

        for field in &self.fields {
            match object.get(&field.name) {
                Some(value) => {
                    if !field.kind.matches(value) {
                        return Err(format!(
                            "field \"{}\" must be {}, got {}",
                            field.name,
                            field.kind.expected(),
                            json_type_name(value)
                        ));
                    }
                }
                None if field.required => {
                    return Err(format!("missing required field \"{}\"", field.name));
                }
                None => {}
            }
        }

        Ok(())
    }

    /// Project this schema into its JSON Schema wire form.
    ///
    /// Produces `{"type":"object","properties":{..}}` with a `required`
    /// array only when at least one field is required.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in &self.fields {
            let mut property = json!({
                "type": field.kind.type_name(),
                "description": field.description,
            });
            if field.kind == FieldKind::StringArray {
                property["items"] = json!({ "type": "string" });
            }
            properties.insert(field.name.clone(), property);
        }

        let mut schema = json!({
            "type": "object",
            "properties": Value::Object(properties),
        });

        let required: Vec<Value> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| Value::String(f.name.clone()))
            .collect();
        if !required.is_empty() {
            schema["required"] = Value::Array(required);
        }

        schema
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
