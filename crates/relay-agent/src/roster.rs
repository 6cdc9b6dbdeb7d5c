//! Immutable wiring of agents, tools and routing shared by sessions

use crate::agent::Agent;
use crate::errors::{RelayError, Result};
use crate::router::{KeywordRouter, Router};
use crate::tool::ToolRegistry;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// A validated, read-only set of agents with their tools
///
/// Agent order is registration order, which is also routing priority.
/// Rosters are built once at startup and shared between sessions behind an
/// `Arc`.
pub struct Roster<A> {
    agents: Vec<A>,
    tools: ToolRegistry,
    router: Box<dyn Router<A>>,
    default_agent: usize,
}

impl<A: Agent> Roster<A> {
    /// Create a builder for a roster
    pub fn builder() -> RosterBuilder<A> {
        RosterBuilder::new()
    }

    pub fn agents(&self) -> &[A] {
        &self.agents
    }

    pub fn agent(&self, index: usize) -> &A {
        &self.agents[index]
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn router(&self) -> &dyn Router<A> {
        self.router.as_ref()
    }

    pub fn default_agent(&self) -> usize {
        self.default_agent
    }

    /// Position of the agent called `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.agents.iter().position(|a| a.name() == name)
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl<A: Agent> std::fmt::Debug for Roster<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.agents.iter().map(|a| a.name()).collect();
        f.debug_struct("Roster")
            .field("agents", &names)
            .field("tools", &self.tools)
            .field("default_agent", &self.default_agent)
            .finish()
    }
}

/// Builder for creating rosters
pub struct RosterBuilder<A> {
    agents: Vec<A>,
    tools: ToolRegistry,
    router: Option<Box<dyn Router<A>>>,
    default_agent: Option<String>,
}

impl<A: Agent> RosterBuilder<A> {
    pub fn new() -> Self {
        Self {
            agents: Vec::new(),
            tools: ToolRegistry::new(),
            router: None,
            default_agent: None,
        }
    }

    /// Add an agent; earlier agents win routing ties
    pub fn agent(mut self, agent: A) -> Self {
        self.agents.push(agent);
        self
    }

    /// Add several agents in priority order
    pub fn agents(mut self, agents: impl IntoIterator<Item = A>) -> Self {
        self.agents.extend(agents);
        self
    }

    /// Set the tool registry
    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    /// Replace the default keyword router
    pub fn router(mut self, router: impl Router<A> + 'static) -> Self {
        self.router = Some(Box::new(router));
        self
    }

    /// Name the agent a new session starts with (defaults to the first agent)
    pub fn default_agent(mut self, name: impl Into<String>) -> Self {
        self.default_agent = Some(name.into());
        self
    }

    /// Validate the wiring and build the roster
    ///
    /// Fails on an empty roster, duplicate agent names, an unknown default
    /// agent, or a tool binding that names an unregistered tool.
    pub fn build(self) -> Result<Roster<A>> {
        if self.agents.is_empty() {
            return Err(RelayError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for agent in &self.agents {
            if !seen.insert(agent.name()) {
                return Err(RelayError::DuplicateAgent(agent.name().to_string()));
            }
            for binding in agent.tools() {
                if !self.tools.contains(binding.tool) {
                    return Err(RelayError::UnknownTool(binding.tool.to_string()));
                }
            }
        }

        let default_agent = match &self.default_agent {
            Some(name) => self
                .agents
                .iter()
                .position(|a| a.name() == name)
                .ok_or_else(|| RelayError::UnknownAgent(name.clone()))?,
            None => 0,
        };

        info!(
            "Roster ready: {} agents, {} tools, starting with {}",
            self.agents.len(),
            self.tools.len(),
            self.agents[default_agent].name()
        );

        Ok(Roster {
            agents: self.agents,
            tools: self.tools,
            router: self.router.unwrap_or_else(|| Box::new(KeywordRouter)),
            default_agent,
        })
    }
}

impl<A: Agent> Default for RosterBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}
