//! Relay Agent - multi-agent handoff orchestration
//!
//! This crate provides the core of the relay demos: a roster of specialized
//! agents sharing one conversation, a router that picks which agent handles
//! each turn, and a session that keeps history and narrates handoffs when the
//! active agent changes.
//!
//! # Example
//!
//! ```no_run
//! use relay_agent::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn demo<A: Agent>(roster: Arc<Roster<A>>) -> Result<()> {
//! let mut session = Session::new(roster);
//! let mut source = ScriptSource::new(["I want a beach vacation", "book a hotel"]);
//! let mut sink = JsonLinesSink::new(std::io::stdout());
//!
//! session.run(&mut source, &mut sink).await?;
//! println!("{} turns recorded", session.history().len());
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod backend;
pub mod context;
pub mod errors;
pub mod handoff;
pub mod output;
pub mod roster;
pub mod router;
pub mod session;
pub mod source;
pub mod tool;
pub mod types;

pub use agent::{Agent, Reply, ToolBinding, ToolCall};
pub use backend::{ReasoningBackend, ScriptedBackend};
pub use context::AgentContext;
pub use errors::{RelayError, Result};
pub use handoff::HandoffEvent;
pub use output::{JsonLinesSink, MemorySink, OutputSink, TextSink, TurnReport, TurnStatus};
pub use roster::{Roster, RosterBuilder};
pub use router::{KeywordRouter, Router};
pub use session::{Session, SessionState, TurnOutcome};
pub use source::{LineSource, ScriptSource, TurnSource};
pub use tool::{FunctionTool, Tool, ToolRegistry};
pub use types::{History, Role, Turn, TurnError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Agent, AgentContext, HandoffEvent, History, JsonLinesSink, KeywordRouter, OutputSink,
        ReasoningBackend, RelayError, Reply, Result, Roster, ScriptSource, Session, TextSink,
        ToolBinding, ToolRegistry, TurnOutcome, TurnReport, TurnSource,
    };
}
