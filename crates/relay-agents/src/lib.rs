//! Relay Agents - demo rosters for the relay handoff orchestrator
//!
//! Each demo is a small roster of specialists that share one conversation.
//! The session routes every turn to the first specialist whose keywords match
//! and narrates the handoff when the active specialist changes.
//!
//! # Demos
//!
//! - **travel**: Destination, Booking and Explore agents with mock flights and hotels
//! - **career**: Career, Skill and Job agents with skill roadmaps
//! - **adventure**: Monster, Item and Narrator agents with seeded dice and loot
//! - **study**: Scheduler, Research and Summarizer agents with study plans
//!
//! # Example
//!
//! ```no_run
//! use relay_agents::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let roster = Demo::Travel.roster(None)?;
//!     let mut session = Session::new(roster);
//!     let mut source = ScriptSource::new(["I want a beach vacation", "book a hotel"]);
//!     let mut sink = TextSink::new(std::io::stdout());
//!
//!     session.run(&mut source, &mut sink).await?;
//!     Ok(())
//! }
//! ```

pub mod agents;
pub mod prompts;
pub mod registry;
pub mod tools;

pub use agents::Specialist;
pub use registry::Demo;

/// Re-exports from relay-agent for convenience
pub mod prelude {
    pub use crate::agents::Specialist;
    pub use crate::registry::Demo;
    pub use relay_agent::prelude::*;
}
