//! Tool system for agents

use crate::errors::{RelayError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Tool trait for agent tools
///
/// Tools are synchronous, CPU-only functions. They must not touch session
/// state; everything they produce comes back as the returned string.
pub trait Tool: Send + Sync {
    /// The name of the tool
    fn name(&self) -> &str;

    /// A description of what the tool does
    fn description(&self) -> &str;

    /// JSON schema for the tool's parameters
    fn json_schema(&self) -> Value;

    /// Invoke the tool with structured arguments
    fn invoke(&self, args: &Value) -> Result<String>;
}

type Handler = Arc<dyn Fn(&Value) -> Result<String> + Send + Sync>;

/// A function-based tool implementation
pub struct FunctionTool {
    name: String,
    description: String,
    json_schema: Value,
    handler: Handler,
}

impl FunctionTool {
    /// Create a new function tool
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        json_schema: Value,
        handler: impl Fn(&Value) -> Result<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            json_schema,
            handler: Arc::new(handler),
        }
    }

    /// Builder for creating function tools
    pub fn builder(name: impl Into<String>) -> FunctionToolBuilder {
        FunctionToolBuilder {
            name: name.into(),
            description: String::new(),
            json_schema: serde_json::json!({ "type": "object" }),
            handler: None,
        }
    }
}

impl Tool for FunctionTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn json_schema(&self) -> Value {
        self.json_schema.clone()
    }

    fn invoke(&self, args: &Value) -> Result<String> {
        (self.handler)(args)
    }
}

impl std::fmt::Debug for FunctionTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Builder for FunctionTool
pub struct FunctionToolBuilder {
    name: String,
    description: String,
    json_schema: Value,
    handler: Option<Handler>,
}

impl FunctionToolBuilder {
    /// Set the tool description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Set the JSON schema
    pub fn schema(mut self, schema: Value) -> Self {
        self.json_schema = schema;
        self
    }

    /// Set the handler function
    pub fn handler<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Result<String> + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(f));
        self
    }

    /// Build the function tool
    pub fn build(self) -> Result<FunctionTool> {
        let handler = self.handler.ok_or_else(|| RelayError::ToolError {
            tool_name: self.name.clone(),
            message: "Tool handler not set".to_string(),
        })?;

        Ok(FunctionTool {
            name: self.name,
            description: self.description,
            json_schema: self.json_schema,
            handler,
        })
    }
}

/// Central registry for all tools available to a roster
///
/// Built once at startup and then shared read-only, so lookups need no lock.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, rejecting duplicate names
    pub fn register(&mut self, tool: impl Tool + 'static) -> Result<()> {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(RelayError::DuplicateTool(name));
        }
        debug!("Registering tool: {}", name);
        self.tools.insert(name, Arc::new(tool));
        Ok(())
    }

    /// Register a plain function under `name`
    pub fn register_fn<F>(&mut self, name: &str, description: &str, f: F) -> Result<()>
    where
        F: Fn(&Value) -> Result<String> + Send + Sync + 'static,
    {
        self.register(FunctionTool::new(
            name,
            description,
            serde_json::json!({ "type": "object" }),
            f,
        ))
    }

    /// Execute a tool by name
    pub fn invoke(&self, name: &str, args: &Value) -> Result<String> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| RelayError::UnknownTool(name.to_string()))?;

        debug!("Invoking tool: {}", name);
        tool.invoke(args)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all registered tool names, sorted
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.list())
            .finish()
    }
}

/// Read a string argument, falling back to `default` when absent or blank
pub fn str_arg<'a>(args: &'a Value, key: &str, default: &'a str) -> &'a str {
    match args.get(key).and_then(Value::as_str).map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => default,
    }
}
