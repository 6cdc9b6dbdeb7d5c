//! Runtime context handed to agents while they handle a turn

use crate::backend::ReasoningBackend;
use crate::errors::{RelayError, Result};
use crate::tool::ToolRegistry;
use crate::types::History;
use serde_json::Value;

/// What an agent can reach while handling a turn
///
/// The context borrows the roster's tool registry and the session's backend;
/// it cannot reach the session's history or active agent.
pub struct AgentContext<'a> {
    tools: &'a ToolRegistry,
    backend: Option<&'a dyn ReasoningBackend>,
    turn_index: usize,
}

impl<'a> AgentContext<'a> {
    /// Create a new agent context
    pub fn new(tools: &'a ToolRegistry) -> Self {
        Self {
            tools,
            backend: None,
            turn_index: 0,
        }
    }

    pub fn with_backend(mut self, backend: Option<&'a dyn ReasoningBackend>) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_turn_index(mut self, turn_index: usize) -> Self {
        self.turn_index = turn_index;
        self
    }

    /// Position of the current user turn in the history
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    pub fn tools(&self) -> &ToolRegistry {
        self.tools
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Invoke a tool on behalf of the agent
    ///
    /// A missing tool here means the agent references something the roster
    /// never registered, reported as [`RelayError::ToolDispatch`].
    pub fn invoke_tool(&self, name: &str, args: &Value) -> Result<String> {
        self.tools.invoke(name, args).map_err(|e| match e {
            RelayError::UnknownTool(tool_name) => RelayError::ToolDispatch {
                tool_name,
                message: "Tool not found".to_string(),
            },
            other => other,
        })
    }

    /// Ask the reasoning backend, if one is attached
    pub async fn generate(&self, prompt: &str, history: &History) -> Option<Result<String>> {
        match self.backend {
            Some(backend) => Some(backend.generate(prompt, history).await),
            None => None,
        }
    }
}
