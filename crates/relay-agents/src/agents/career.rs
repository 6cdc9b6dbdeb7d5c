//! Career mentor: fields, skill roadmaps and job roles

use regex::Regex;
use relay_agent::{AgentContext, History, Reply, Result};
use serde_json::{json, Value};

/// Interest words and the career field they point to
const FIELDS: [(&[&str], &str); 6] = [
    (&["code", "coding", "programming", "software", "computers", "apps"], "Software Engineering"),
    (&["data", "math", "statistics", "numbers", "analytics"], "Data Science"),
    (&["biology", "health", "medicine", "doctor", "patients"], "Medicine"),
    (&["ai", "robots", "robotics", "ml", "artificial"], "Artificial Intelligence"),
    (&["web", "websites", "frontend", "design"], "Web Development"),
    (&["security", "hacking", "networks", "cybersecurity"], "Cybersecurity"),
];

fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Career fields matching the interests in `text`, in table order
///
/// Interests are matched as whole words so that short ones like "ai" do not
/// fire inside other words.
pub fn suggest_fields(text: &str) -> Vec<&'static str> {
    let words = words(text);
    FIELDS
        .iter()
        .filter(|(interests, _)| interests.iter().any(|i| words.iter().any(|w| w == i)))
        .map(|(_, field)| *field)
        .collect()
}

fn named_field(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    FIELDS
        .iter()
        .map(|(_, field)| *field)
        .find(|field| lower.contains(&field.to_lowercase()))
}

/// The field the conversation is about: the turn first, then earlier turns
pub fn resolve_field(text: &str, history: &History) -> Option<&'static str> {
    named_field(text)
        .or_else(|| suggest_fields(text).first().copied())
        .or_else(|| {
            history
                .iter()
                .rev()
                .find_map(|turn| named_field(&turn.content))
        })
}

/// Job title asked about in `text`, e.g. "work as a data analyst"
pub fn job_title(text: &str) -> Option<String> {
    let re = Regex::new(r"(?i)(?:work as|jobs? as|roles? as|become)\s+(?:an?\s+)?([a-z][a-z ]*[a-z])").ok()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Job search link for a title
pub fn job_search_link(title: &str) -> String {
    let slug = title.split_whitespace().collect::<Vec<_>>().join("-");
    format!("https://www.indeed.com/q-{}--jobs.html", slug)
}

pub(crate) fn roadmap_args(text: &str, history: &History) -> Value {
    match resolve_field(text, history) {
        Some(field) => json!({ "field": field }),
        None => json!({ "field": text.trim() }),
    }
}

pub(crate) fn mentor(text: &str) -> Reply {
    let fields = suggest_fields(text);
    if fields.is_empty() {
        return Reply::text(
            "🎯 Tell me what you enjoy (coding, data, biology, design, security...) and I'll suggest a career field.",
        );
    }
    Reply::text(format!(
        "🎯 Based on your interests, consider: {}. Ask me for a skill roadmap or job roles next!",
        fields.join(", ")
    ))
}

/// Skill turns that did not ask for a roadmap outright still get one once
/// the field is known
pub(crate) fn skills(ctx: &AgentContext<'_>, text: &str, history: &History) -> Result<Reply> {
    match resolve_field(text, history) {
        Some(field) => Ok(Reply::text(
            ctx.invoke_tool("get_career_roadmap", &json!({ "field": field }))?,
        )),
        None => Ok(Reply::text(
            "📚 Which field should I build a roadmap for? Software, data, medicine, AI, web or cybersecurity?",
        )),
    }
}

pub(crate) fn jobs(text: &str, history: &History) -> Reply {
    let title = job_title(text).or_else(|| resolve_field(text, history).map(str::to_string));
    match title {
        Some(title) => Reply::text(format!(
            "💼 {} roles are hiring across startups and large companies. Build a small portfolio, \
             practice interviews and compare salaries by region.\nSearch openings: {}",
            title,
            job_search_link(&title)
        )),
        None => Reply::text("💼 Which role are you curious about? Try \"I want to work as a data analyst\"."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_agent::Turn;

    #[test]
    fn test_suggest_fields_whole_words() {
        assert_eq!(suggest_fields("I love coding and math"), vec!["Software Engineering", "Data Science"]);
        assert_eq!(suggest_fields("I like AI"), vec!["Artificial Intelligence"]);
        // "said" must not count as "ai"
        assert!(suggest_fields("my friend said so").is_empty());
    }

    #[test]
    fn test_resolve_field_from_history() {
        let history: History = [
            Turn::user("I love biology"),
            Turn::agent("CareerAgent", "🎯 Based on your interests, consider: Medicine."),
        ]
        .into_iter()
        .collect();
        assert_eq!(resolve_field("show me the roadmap", &history), Some("Medicine"));
        assert_eq!(resolve_field("roadmap for data science", &history), Some("Data Science"));
    }

    #[test]
    fn test_job_title_and_link() {
        assert_eq!(job_title("I want to work as a Data Analyst").as_deref(), Some("Data Analyst"));
        assert_eq!(job_title("salary?"), None);
        assert_eq!(
            job_search_link("Data Analyst"),
            "https://www.indeed.com/q-Data-Analyst--jobs.html"
        );
    }

    #[test]
    fn test_jobs_without_title_asks() {
        let reply = jobs("what about salary", &History::new());
        assert!(reply.text.starts_with("💼 Which role"));
    }
}
