//! Demo registry: which specialists and tools make up each demo

use crate::agents::Specialist;
use crate::tools;
use relay_agent::{Agent, Result, Roster, ToolRegistry};
use std::sync::Arc;

/// The demos that ship with relay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Demo {
    /// Destination ideas, bookings and local exploration
    Travel,
    /// Career fields, skill roadmaps and job roles
    Career,
    /// Text adventure with dice combat and loot
    Adventure,
    /// Study schedules, research links and summaries
    Study,
}

impl Demo {
    /// Get the string name of this demo
    pub fn name(&self) -> &'static str {
        match self {
            Demo::Travel => "travel",
            Demo::Career => "career",
            Demo::Adventure => "adventure",
            Demo::Study => "study",
        }
    }

    /// Parse a demo from its name or a close alias
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "travel" | "trip" => Some(Demo::Travel),
            "career" | "mentor" => Some(Demo::Career),
            "adventure" | "game" => Some(Demo::Adventure),
            "study" | "planner" => Some(Demo::Study),
            _ => None,
        }
    }

    pub fn all() -> [Demo; 4] {
        [Demo::Travel, Demo::Career, Demo::Adventure, Demo::Study]
    }

    pub fn description(&self) -> &'static str {
        match self {
            Demo::Travel => "AI travel designer: destinations, flights, hotels and things to do",
            Demo::Career => "Career mentor: fields, skill roadmaps and job roles",
            Demo::Adventure => "Fantasy adventure: narration, dice combat and loot",
            Demo::Study => "Study planner: schedules, research links and summaries",
        }
    }

    /// Specialists in routing priority order
    pub fn specialists(&self) -> &'static [Specialist] {
        match self {
            Demo::Travel => &[Specialist::Destination, Specialist::Booking, Specialist::Explore],
            Demo::Career => &[Specialist::Career, Specialist::Skill, Specialist::Job],
            Demo::Adventure => &[Specialist::Monster, Specialist::Item, Specialist::Narrator],
            Demo::Study => &[Specialist::Scheduler, Specialist::Researcher, Specialist::Summarizer],
        }
    }

    /// The specialist that takes the first turn
    pub fn default_agent(&self) -> Specialist {
        match self {
            Demo::Travel => Specialist::Destination,
            Demo::Career => Specialist::Career,
            Demo::Adventure => Specialist::Narrator,
            Demo::Study => Specialist::Scheduler,
        }
    }

    /// Mock tools for this demo; `seed` only affects the adventure dice
    pub fn tools(&self, seed: Option<u64>) -> Result<ToolRegistry> {
        match self {
            Demo::Travel => tools::travel_tools(),
            Demo::Career => tools::career_tools(),
            Demo::Adventure => tools::adventure_tools(seed),
            Demo::Study => tools::study_tools(),
        }
    }

    /// Build the shared roster for this demo
    pub fn roster(&self, seed: Option<u64>) -> Result<Arc<Roster<Specialist>>> {
        let roster = Roster::builder()
            .agents(self.specialists().iter().copied())
            .tools(self.tools(seed)?)
            .default_agent(self.default_agent().name())
            .build()?;

        tracing::info!(
            demo = self.name(),
            agents = roster.agents().len(),
            tools = roster.tools().len(),
            "Built demo roster"
        );
        Ok(roster.into_shared())
    }

    /// List all demos with descriptions
    pub fn list() -> Vec<(Demo, &'static str)> {
        Self::all().into_iter().map(|d| (d, d.description())).collect()
    }
}

impl std::fmt::Display for Demo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
