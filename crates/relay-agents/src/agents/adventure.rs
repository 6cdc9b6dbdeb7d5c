//! Fantasy adventure: narration, dice combat and loot

use relay_agent::agent::contains_any;
use relay_agent::{AgentContext, History, RelayError, Reply, Result};
use serde_json::{json, Value};

pub const AREAS: [&str; 3] = ["forest", "dungeon", "village"];

const RECEIVED: &str = "You received: ";

/// First known area mentioned in `text`
pub fn area(text: &str) -> Option<&'static str> {
    AREAS.iter().copied().find(|a| contains_any(text, &[*a]))
}

/// Items handed out so far, oldest first
pub fn inventory(history: &History, item_agent: &str) -> Vec<String> {
    let mut items: Vec<String> = history
        .replies_from(item_agent)
        .filter_map(|turn| {
            turn.content
                .split_once(RECEIVED)
                .map(|(_, item)| item.trim().to_string())
        })
        .collect();
    items.reverse();
    items
}

/// Arguments for `generate_event`, keyed to the turn so seeded games replay
pub(crate) fn event_args(text: &str, turn: usize) -> Value {
    json!({ "context": area(text).unwrap_or(""), "turn": turn })
}

fn roll(ctx: &AgentContext<'_>, draw: u64) -> Result<u64> {
    let rolled = ctx.invoke_tool(
        "roll_dice",
        &json!({ "sides": 20, "turn": ctx.turn_index(), "draw": draw }),
    )?;
    rolled.trim().parse().map_err(|_| RelayError::ToolError {
        tool_name: "roll_dice".to_string(),
        message: format!("not a number: {}", rolled),
    })
}

/// One round of combat; losing the roll ends the game
///
/// Ties go to the player.
pub(crate) fn fight(ctx: &AgentContext<'_>) -> Result<Reply> {
    let player = roll(ctx, 0)?;
    let monster = roll(ctx, 1)?;
    tracing::debug!(player, monster, "combat round");

    if player >= monster {
        Ok(Reply::text(format!(
            "⚔️ You rolled {}, the monster rolled {}. You defeat the monster! Search the area for loot.",
            player, monster
        )))
    } else {
        Ok(Reply::terminal(format!(
            "💀 You rolled {}, the monster rolled {}. The monster overpowers you. Game over.",
            player, monster
        )))
    }
}

pub(crate) fn loot(ctx: &AgentContext<'_>, text: &str, history: &History, item_agent: &str) -> Result<Reply> {
    if contains_any(text, &["inventory"]) {
        let items = inventory(history, item_agent);
        return Ok(Reply::text(if items.is_empty() {
            "🎒 Your inventory is empty.".to_string()
        } else {
            format!("🎒 Inventory: {}", items.join(", "))
        }));
    }

    let item = ctx.invoke_tool("find_loot", &json!({ "turn": ctx.turn_index() }))?;
    Ok(Reply::text(format!("🎁 {}{}", RECEIVED, item)))
}

pub(crate) fn narrate(ctx: &AgentContext<'_>, text: &str) -> Result<Reply> {
    let event = ctx.invoke_tool("generate_event", &event_args(text, ctx.turn_index()))?;
    Ok(Reply::text(format!("📖 {} What will you do next?", event)))
}
