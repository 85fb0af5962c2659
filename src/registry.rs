// Tool definitions and the registry that dispatches to them

use async_trait::async_trait;
use rmcp::model::{JsonObject, Tool};
use schemars::JsonSchema;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::dispatch::{validate, Arguments, Invocation};
use crate::error::ToolError;

/// Type of a tool parameter as advertised in its input schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Number,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
        }
    }

    fn from_schema(ty: &Value) -> Option<Self> {
        match ty.as_str()? {
            "string" => Some(ParamType::String),
            "number" => Some(ParamType::Number),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: String,
    pub param_type: ParamType,
    pub description: Option<String>,
    pub required: bool,
}

/// Name, description and input schema of a callable tool
#[derive(Debug, Clone, PartialEq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub params: Vec<ParamSpec>,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
        }
    }

    pub fn param(
        mut self,
        name: impl Into<String>,
        param_type: ParamType,
        description: Option<&str>,
        required: bool,
    ) -> Self {
        self.params.push(ParamSpec {
            name: name.into(),
            param_type,
            description: description.map(str::to_string),
            required,
        });
        self
    }

    /// Builds the parameter list from a request type's JSON schema, so the
    /// advertised schema always matches the struct handlers deserialize into.
    pub fn for_input<T: JsonSchema>(name: impl Into<String>, description: impl Into<String>) -> Self {
        let schema = schemars::schema_for!(T);
        let schema = schema.as_value();

        let required: Vec<&str> = schema
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let mut definition = Self::new(name, description);
        if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
            for (param, spec) in properties {
                let param_type = spec
                    .get("type")
                    .and_then(ParamType::from_schema)
                    .unwrap_or(ParamType::String);
                let description = spec.get("description").and_then(Value::as_str);
                definition = definition.param(
                    param.as_str(),
                    param_type,
                    description,
                    required.contains(&param.as_str()),
                );
            }
        }
        definition
    }

    pub fn required_params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().filter(|p| p.required)
    }

    /// JSON Schema object advertised to MCP clients
    pub fn input_schema(&self) -> JsonObject {
        let mut properties = JsonObject::new();
        for param in &self.params {
            let mut spec = json!({ "type": param.param_type.as_str() });
            if let Some(description) = &param.description {
                spec["description"] = json!(description);
            }
            properties.insert(param.name.clone(), spec);
        }

        let required: Vec<&str> = self.required_params().map(|p| p.name.as_str()).collect();

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), json!(required));
        schema
    }

    pub fn to_tool(&self) -> Tool {
        Tool::new(
            self.name.clone(),
            self.description.clone(),
            Arc::new(self.input_schema()),
        )
    }
}

/// Tool executor
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Runs the tool with arguments that already passed schema validation
    async fn call(&self, arguments: Arguments) -> Result<Vec<String>, ToolError>;
}

struct RegisteredTool {
    definition: ToolDefinition,
    handler: Arc<dyn ToolHandler>,
}

/// Ordered set of tools; names are unique
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. A second tool with the same name is rejected.
    pub fn register(
        &mut self,
        definition: ToolDefinition,
        handler: Arc<dyn ToolHandler>,
    ) -> Result<(), ToolError> {
        if self.contains(&definition.name) {
            return Err(ToolError::DuplicateTool(definition.name));
        }
        self.tools.push(RegisteredTool {
            definition,
            handler,
        });
        Ok(())
    }

    /// Tool definitions in registration order
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition.clone()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    fn find(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.iter().find(|t| t.definition.name == name)
    }

    /// Validates the invocation against the tool's schema and runs it.
    ///
    /// A missing or malformed required argument is not a failure: the caller
    /// gets a single text block describing what was expected.
    pub async fn dispatch(&self, invocation: Invocation) -> Result<Vec<String>, ToolError> {
        let tool = self
            .find(&invocation.tool_name)
            .ok_or_else(|| ToolError::UnknownTool(invocation.tool_name.clone()))?;

        tracing::info!("Calling tool: {}", invocation.tool_name);

        match validate(&tool.definition, &invocation.arguments) {
            Ok(arguments) => tool.handler.call(arguments).await,
            Err(ToolError::MissingParameter(message)) => {
                tracing::warn!("Rejected {} call: {}", invocation.tool_name, message);
                Ok(vec![message])
            }
            Err(e) => Err(e),
        }
    }
}
