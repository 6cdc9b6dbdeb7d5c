//! Specialist agents for the demo rosters

pub mod adventure;
pub mod career;
pub mod study;
pub mod travel;

use crate::prompts::*;
use async_trait::async_trait;
use relay_agent::{Agent, AgentContext, History, Reply, Result, ToolBinding};
use serde_json::{json, Value};

/// Every specialist role across the demos
///
/// Agents carry no state; whatever they need to remember (destination,
/// career field, inventory) is read back from the conversation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specialist {
    Destination,
    Booking,
    Explore,
    Career,
    Skill,
    Job,
    Narrator,
    Monster,
    Item,
    Scheduler,
    Researcher,
    Summarizer,
}

impl Specialist {
    pub fn all() -> [Specialist; 12] {
        [
            Specialist::Destination,
            Specialist::Booking,
            Specialist::Explore,
            Specialist::Career,
            Specialist::Skill,
            Specialist::Job,
            Specialist::Narrator,
            Specialist::Monster,
            Specialist::Item,
            Specialist::Scheduler,
            Specialist::Researcher,
            Specialist::Summarizer,
        ]
    }

    /// Look up a specialist by its agent name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Conversational specialists hand their turns to the reasoning backend
    /// when one is attached; the rest always answer from their tools.
    pub fn is_conversational(&self) -> bool {
        matches!(
            self,
            Specialist::Destination | Specialist::Explore | Specialist::Career | Specialist::Job | Specialist::Narrator
        )
    }

    async fn converse(&self, ctx: &AgentContext<'_>, text: &str, history: &History) -> Option<Result<Reply>> {
        let prompt = format!("{}\n\nUser: {}", self.instructions(), text);
        ctx.generate(&prompt, history)
            .await
            .map(|generated| generated.map(Reply::text))
    }
}

impl std::fmt::Display for Specialist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[async_trait]
impl Agent for Specialist {
    fn name(&self) -> &str {
        match self {
            Specialist::Destination => "DestinationAgent",
            Specialist::Booking => "BookingAgent",
            Specialist::Explore => "ExploreAgent",
            Specialist::Career => "CareerAgent",
            Specialist::Skill => "SkillAgent",
            Specialist::Job => "JobAgent",
            Specialist::Narrator => "NarratorAgent",
            Specialist::Monster => "MonsterAgent",
            Specialist::Item => "ItemAgent",
            Specialist::Scheduler => "SchedulerAgent",
            Specialist::Researcher => "ResearchAgent",
            Specialist::Summarizer => "SummarizerAgent",
        }
    }

    fn description(&self) -> &str {
        match self {
            Specialist::Destination => "🌍 I'll help you pick a destination that fits your mood!",
            Specialist::Booking => "✈️ I'll find flights and hotels for your trip!",
            Specialist::Explore => "🗺️ I'll suggest attractions and local food to try!",
            Specialist::Career => "🎯 I'll suggest career fields that match your interests!",
            Specialist::Skill => {
                "📚 I'll create a detailed skill roadmap to help you succeed in your chosen field!"
            }
            Specialist::Job => {
                "💼 I'll help you explore job roles, salaries, and career preparation strategies!"
            }
            Specialist::Narrator => "📖 I'll narrate your adventure and guide you through the story!",
            Specialist::Monster => "⚔️ I'll handle combat encounters and dice-based battles!",
            Specialist::Item => "🎁 I'll manage your inventory and distribute rewards!",
            Specialist::Scheduler => "🗓️ I'll turn your topics into a day-by-day study plan!",
            Specialist::Researcher => "🔎 I'll find resources to get you started on a topic!",
            Specialist::Summarizer => "📝 I'll recap what we've found so far!",
        }
    }

    fn capabilities(&self) -> &'static [&'static str] {
        match self {
            Specialist::Destination => &[
                "beach",
                "mountain",
                "destination",
                "where should",
                "culture",
                "romantic",
                "adventure",
            ],
            Specialist::Booking => &["book", "flight", "hotel", "stay"],
            Specialist::Explore => &["food", "attraction", "explore", "things to do", "visit"],
            Specialist::Career => &["career", "field", "interest", "study"],
            Specialist::Skill => &["skill", "roadmap", "learn"],
            Specialist::Job => &["job", "role", "salary", "hiring", "work as"],
            Specialist::Narrator => &["explore", "walk", "enter", "look around", "continue", "journey"],
            Specialist::Monster => &["attack", "defend", "monster", "fight", "battle", "combat", "enemy"],
            Specialist::Item => &["item", "chest", "reward", "loot", "inventory", "collect", "treasure"],
            Specialist::Scheduler => &["schedule", "deadline", "study plan"],
            Specialist::Researcher => &["research", "resources", "learn about"],
            Specialist::Summarizer => &["summarize", "summary", "recap"],
        }
    }

    fn tools(&self) -> &'static [ToolBinding] {
        match self {
            Specialist::Booking => &[
                ToolBinding { tool: "get_flights", triggers: &["flight", "fly"] },
                ToolBinding { tool: "suggest_hotels", triggers: &["hotel", "stay"] },
            ],
            Specialist::Skill => &[ToolBinding { tool: "get_career_roadmap", triggers: &["roadmap", "skills"] }],
            Specialist::Scheduler => &[ToolBinding { tool: "build_study_plan", triggers: &["plan"] }],
            Specialist::Researcher => &[ToolBinding { tool: "research_links", triggers: &["research", "resources"] }],
            _ => &[],
        }
    }

    fn instructions(&self) -> &str {
        match self {
            Specialist::Destination => DESTINATION_PROMPT,
            Specialist::Booking => BOOKING_PROMPT,
            Specialist::Explore => EXPLORE_PROMPT,
            Specialist::Career => CAREER_PROMPT,
            Specialist::Skill => SKILL_PROMPT,
            Specialist::Job => JOB_PROMPT,
            Specialist::Narrator => NARRATOR_PROMPT,
            Specialist::Monster => MONSTER_PROMPT,
            Specialist::Item => ITEM_PROMPT,
            Specialist::Scheduler => SCHEDULER_PROMPT,
            Specialist::Researcher => RESEARCH_PROMPT,
            Specialist::Summarizer => SUMMARIZER_PROMPT,
        }
    }

    // Each specialist binds tools that share one argument shape.
    fn tool_args(&self, _tool: &str, text: &str, history: &History) -> Value {
        match self {
            Specialist::Booking => travel::booking_args(text, history),
            Specialist::Skill => career::roadmap_args(text, history),
            Specialist::Scheduler => study::plan_args(text),
            Specialist::Researcher => study::research_args(text),
            _ => json!({ "input": text }),
        }
    }

    async fn handle(&self, ctx: &AgentContext<'_>, text: &str, history: &History) -> Result<Reply> {
        if self.is_conversational() {
            if let Some(generated) = self.converse(ctx, text, history).await {
                return generated;
            }
        }

        match self {
            Specialist::Destination => Ok(travel::suggest(text)),
            Specialist::Booking => travel::book(ctx, text, history),
            Specialist::Explore => Ok(travel::explore(text, history)),
            Specialist::Career => Ok(career::mentor(text)),
            Specialist::Skill => career::skills(ctx, text, history),
            Specialist::Job => Ok(career::jobs(text, history)),
            Specialist::Narrator => adventure::narrate(ctx, text),
            Specialist::Monster => adventure::fight(ctx),
            Specialist::Item => adventure::loot(ctx, text, history, Specialist::Item.name()),
            Specialist::Scheduler => Ok(study::schedule()),
            Specialist::Researcher => study::research(ctx, text),
            Specialist::Summarizer => Ok(study::summarize(history, Specialist::Researcher.name())),
        }
    }
}
