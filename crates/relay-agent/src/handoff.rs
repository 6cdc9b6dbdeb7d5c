//! Handoff events
//!
//! A handoff is emitted whenever a turn moves the session to a different
//! agent. Events are derived from the transition and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandoffEvent {
    /// Agent active before the turn
    pub from: String,

    /// Agent active after the turn
    pub to: String,

    /// History length once the turn was committed
    pub turn_index: usize,
}

impl HandoffEvent {
    pub fn new(from: impl Into<String>, to: impl Into<String>, turn_index: usize) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            turn_index,
        }
    }
}

impl fmt::Display for HandoffEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_json() {
        let event = HandoffEvent::new("DestinationAgent", "BookingAgent", 4);
        assert_eq!(event.to_string(), "DestinationAgent -> BookingAgent");

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"from": "DestinationAgent", "to": "BookingAgent", "turn_index": 4})
        );
    }
}
