//! Agent capability interface

use crate::context::AgentContext;
use crate::errors::Result;
use crate::types::History;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A tool attached to an agent, with the phrases that make a turn tool-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolBinding {
    pub tool: &'static str,
    pub triggers: &'static [&'static str],
}

impl ToolBinding {
    pub const fn new(tool: &'static str, triggers: &'static [&'static str]) -> Self {
        Self { tool, triggers }
    }

    /// Whether any trigger phrase appears in `text`
    pub fn triggered_by(&self, text: &str) -> bool {
        contains_any(text, self.triggers)
    }
}

/// A direct tool invocation derived from a turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    pub args: Value,
}

/// What an agent produced for a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,

    /// Set when the agent reached a terminal condition (e.g. the player lost)
    pub ends_session: bool,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ends_session: false,
        }
    }

    pub fn terminal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ends_session: true,
        }
    }
}

/// A named, stateless handler for one category of user intent
///
/// Implementors are closed enums of specialist roles; all conversation state
/// lives in the session's [`History`].
#[async_trait]
pub trait Agent: Send + Sync {
    /// Unique name of the agent within its roster
    fn name(&self) -> &str;

    /// One-line description, shown when the session hands off to this agent
    fn description(&self) -> &str;

    /// Intent keywords, matched case-insensitively as substrings
    fn capabilities(&self) -> &'static [&'static str];

    /// Tools this agent may trigger directly
    fn tools(&self) -> &'static [ToolBinding] {
        &[]
    }

    /// Prompt used when the turn is delegated to a reasoning backend
    fn instructions(&self) -> &str {
        self.description()
    }

    fn matches(&self, text: &str) -> bool {
        contains_any(text, self.capabilities())
    }

    /// Arguments for a triggered tool
    fn tool_args(&self, _tool: &str, text: &str, _history: &History) -> Value {
        json!({ "input": text })
    }

    /// The first attached tool whose trigger appears in the turn, if any
    fn tool_call(&self, text: &str, history: &History) -> Option<ToolCall> {
        self.tools()
            .iter()
            .find(|binding| binding.triggered_by(text))
            .map(|binding| ToolCall {
                name: binding.tool.to_string(),
                args: self.tool_args(binding.tool, text, history),
            })
    }

    /// Produce a reply for a turn that was not tool-shaped
    ///
    /// `history` holds the conversation before this turn.
    async fn handle(&self, ctx: &AgentContext<'_>, text: &str, history: &History) -> Result<Reply>;
}

/// Case-insensitive substring match against any keyword
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let text = text.to_lowercase();
    keywords
        .iter()
        .any(|keyword| text.contains(&keyword.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::ToolRegistry;

    struct Booking;

    #[async_trait]
    impl Agent for Booking {
        fn name(&self) -> &str {
            "BookingAgent"
        }

        fn description(&self) -> &str {
            "Books flights and hotels"
        }

        fn capabilities(&self) -> &'static [&'static str] {
            &["book", "flight", "hotel"]
        }

        fn tools(&self) -> &'static [ToolBinding] {
            &[
                ToolBinding { tool: "get_flights", triggers: &["flight"] },
                ToolBinding { tool: "suggest_hotels", triggers: &["hotel"] },
            ]
        }

        async fn handle(&self, _ctx: &AgentContext<'_>, text: &str, _history: &History) -> Result<Reply> {
            Ok(Reply::text(format!("Booking: {}", text)))
        }
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        assert!(Booking.matches("Please BOOK something"));
        assert!(Booking.matches("any Flights?"));
        assert!(!Booking.matches("what food should I try"));
    }

    #[test]
    fn test_tool_call_uses_first_triggered_binding() {
        let history = History::new();
        let call = Booking.tool_call("a flight and a hotel", &history).unwrap();
        assert_eq!(call.name, "get_flights");
        assert_eq!(call.args["input"], "a flight and a hotel");

        assert!(Booking.tool_call("book something", &history).is_none());
    }

    #[tokio::test]
    async fn test_handle() {
        let tools = ToolRegistry::new();
        let ctx = AgentContext::new(&tools);
        let reply = Booking.handle(&ctx, "book it", &History::new()).await.unwrap();
        assert_eq!(reply, Reply::text("Booking: book it"));
        assert!(!reply.ends_session);
        assert_eq!(Booking.instructions(), "Books flights and hotels");
    }
}
