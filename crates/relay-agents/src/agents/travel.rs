//! Travel designer: destinations, bookings and local exploration

use relay_agent::agent::contains_any;
use relay_agent::{AgentContext, History, Reply, Result};
use serde_json::{json, Value};

/// Mood keywords, the destination they suggest, and a one-line pitch
const MOODS: [(&[&str], &str, &str); 5] = [
    (&["beach", "sun", "tropical"], "Bali", "sunny beaches, rice terraces and temples"),
    (&["mountain", "snow", "ski", "hiking"], "Swiss Alps", "snowy peaks and alpine villages"),
    (&["culture", "history", "temple"], "Kyoto", "ancient temples and quiet tea houses"),
    (&["adventure", "thrill", "extreme"], "Queenstown", "bungee jumps and lake adventures"),
    (&["romantic", "honeymoon", "love"], "Paris", "candlelit dinners and the Eiffel Tower"),
];

pub const GENERIC_CITY: &str = "Generic City";

/// Destination suggested by the mood expressed in `text`
pub fn destination_for(text: &str) -> Option<(&'static str, &'static str)> {
    MOODS
        .iter()
        .find(|(moods, _, _)| contains_any(text, moods))
        .map(|(_, destination, pitch)| (*destination, *pitch))
}

/// A destination named outright in `text`
pub fn named_destination(text: &str) -> Option<&'static str> {
    MOODS
        .iter()
        .map(|(_, destination, _)| *destination)
        .find(|destination| contains_any(text, &[*destination]))
}

/// The destination the conversation is about
///
/// A name in the turn wins, then the most recent name mentioned earlier in the
/// conversation, then a mood in the turn.
pub fn resolve_destination(text: &str, history: &History) -> Option<&'static str> {
    named_destination(text)
        .or_else(|| {
            history
                .iter()
                .rev()
                .find_map(|turn| named_destination(&turn.content))
        })
        .or_else(|| destination_for(text).map(|(destination, _)| destination))
}

pub fn attractions(destination: &str) -> [&'static str; 3] {
    match destination {
        "Bali" => ["Ubud Monkey Forest", "Beach Clubs", "Balinese Food"],
        "Swiss Alps" => ["Skiing", "Mountain Hiking", "Swiss Chocolate"],
        "Kyoto" => ["Fushimi Inari Shrine", "Tea Ceremony", "Sushi Tasting"],
        "Queenstown" => ["Bungee Jumping", "Lake Wakatipu", "Local BBQ"],
        "Paris" => ["Eiffel Tower", "Louvre Museum", "French Pastries"],
        _ => ["Museum Visit", "City Park", "Local Cuisine"],
    }
}

pub(crate) fn booking_args(text: &str, history: &History) -> Value {
    match resolve_destination(text, history) {
        Some(destination) => json!({ "destination": destination }),
        None => json!({}),
    }
}

pub(crate) fn suggest(text: &str) -> Reply {
    match destination_for(text) {
        Some((destination, pitch)) => Reply::text(format!(
            "🌍 How about {}? Think {}. Want me to look at flights and hotels?",
            destination, pitch
        )),
        None => Reply::text(
            "🌍 Tell me a bit more about the trip: beach, mountains, culture, adventure or romance?",
        ),
    }
}

/// Flights and hotels together, for booking turns that name neither
pub(crate) fn book(ctx: &AgentContext<'_>, text: &str, history: &History) -> Result<Reply> {
    let args = booking_args(text, history);
    let flights = ctx.invoke_tool("get_flights", &args)?;
    let hotels = ctx.invoke_tool("suggest_hotels", &args)?;
    Ok(Reply::text(format!("{}\n\n{}", flights, hotels)))
}

pub(crate) fn explore(text: &str, history: &History) -> Reply {
    let destination = resolve_destination(text, history).unwrap_or(GENERIC_CITY);
    let [first, second, third] = attractions(destination);
    Reply::text(format!(
        "🗺️ In {}, try: {}, {} and {}.",
        destination, first, second, third
    ))
}
