//! Study planner: schedules, research links and summaries

use regex::Regex;
use relay_agent::{AgentContext, History, Reply, Result};
use serde_json::{json, Value};

/// Topics and deadline from a request like `"plan: Rust, Tokio by 2026-12-01"`
///
/// Topics follow the first colon and are split on commas and "and". A missing
/// part comes back empty and is left to the tool to reject.
pub fn parse_plan_request(text: &str) -> (Vec<String>, String) {
    let deadline = Regex::new(r"(?i)\bby\s+(\S+)")
        .ok()
        .and_then(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end_matches(['.', '!', '?']).to_string())
        .unwrap_or_default();

    let topics = text
        .split_once(':')
        .map(|(_, rest)| {
            let rest = match Regex::new(r"(?i)\s+by\s+\S+\s*$") {
                Ok(re) => re.replace(rest, "").into_owned(),
                Err(_) => rest.to_string(),
            };
            rest.split(',')
                .flat_map(|part| part.split(" and "))
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    (topics, deadline)
}

/// Topic of a research request, e.g. "research on quantum computing"
pub fn research_topic(text: &str) -> Option<String> {
    let re = Regex::new(r"(?i)(?:research|resources|learn about)\s+(?:(?:on|about|for)\s+)?(.+)").ok()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().trim_end_matches(['.', '!', '?']).to_string())
        .filter(|topic| !topic.is_empty())
}

pub(crate) fn plan_args(text: &str) -> Value {
    let (topics, deadline) = parse_plan_request(text);
    json!({ "topics": topics, "deadline": deadline })
}

pub(crate) fn research_args(text: &str) -> Value {
    json!({ "topic": research_topic(text).unwrap_or_default() })
}

pub(crate) fn schedule() -> Reply {
    Reply::text("🗓️ Send me your topics and deadline, like: plan: Rust, Tokio by 2026-12-01")
}

pub(crate) fn research(ctx: &AgentContext<'_>, text: &str) -> Result<Reply> {
    match research_topic(text) {
        Some(topic) => Ok(Reply::text(
            ctx.invoke_tool("research_links", &json!({ "topic": topic }))?,
        )),
        None => Ok(Reply::text("🔎 Which topic should I look into?")),
    }
}

/// Latest research results, one line each, joined into a single line
pub(crate) fn summarize(history: &History, research_agent: &str) -> Reply {
    let latest = history
        .replies_from(research_agent)
        .find(|turn| turn.content.lines().count() > 1);

    match latest {
        Some(turn) => {
            let lines: Vec<&str> = turn.content.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
            Reply::text(format!("📝 Summary: {}", lines.join(" | ")))
        }
        None => Reply::text("📝 Nothing to summarize yet. Ask me to research a topic first."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_agent::Turn;

    #[test]
    fn test_parse_plan_request() {
        let (topics, deadline) = parse_plan_request("Make a study plan: Rust, async and Tokio by 2026-12-01.");
        assert_eq!(topics, vec!["Rust", "async", "Tokio"]);
        assert_eq!(deadline, "2026-12-01");

        let (topics, deadline) = parse_plan_request("plan my week");
        assert!(topics.is_empty());
        assert!(deadline.is_empty());
    }

    #[test]
    fn test_research_topic() {
        assert_eq!(research_topic("research on quantum computing?").as_deref(), Some("quantum computing"));
        assert_eq!(research_topic("I want to learn about photosynthesis").as_deref(), Some("photosynthesis"));
        assert_eq!(research_topic("research"), None);
    }

    #[test]
    fn test_summarize_latest_research() {
        let history: History = [
            Turn::agent("ResearchAgent", "old - a\nold - b"),
            Turn::agent("ResearchAgent", "new - a\nnew - b"),
            Turn::agent("ResearchAgent", "🔎 Which topic should I look into?"),
        ]
        .into_iter()
        .collect();
        assert_eq!(summarize(&history, "ResearchAgent").text, "📝 Summary: new - a | new - b");
        assert!(summarize(&History::new(), "ResearchAgent").text.contains("Nothing to summarize"));
    }
}
