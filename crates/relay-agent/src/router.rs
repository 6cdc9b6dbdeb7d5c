//! Turn routing between agents
//!
//! A router picks which agent of a roster handles the next turn. Routers
//! return positions into the candidate slice, so the selected agent is always
//! a member of the roster.

use crate::agent::Agent;
use tracing::debug;

/// Strategy that selects the agent for a turn
///
/// Routing never fails: when nothing fits, a router keeps the current agent.
pub trait Router<A>: Send + Sync {
    /// Index into `candidates` of the agent that should handle `text`
    fn route(&self, current: usize, text: &str, candidates: &[A]) -> usize;
}

/// First-match-wins keyword routing
///
/// Candidates are tried in registration order and the first one whose
/// capability keywords appear in the turn wins. Unmatched turns stay with
/// the current agent.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordRouter;

impl KeywordRouter {
    pub fn new() -> Self {
        Self
    }
}

impl<A: Agent> Router<A> for KeywordRouter {
    fn route(&self, current: usize, text: &str, candidates: &[A]) -> usize {
        match candidates.iter().position(|agent| agent.matches(text)) {
            Some(index) => {
                debug!("Routed turn to {}", candidates[index].name());
                index
            }
            None => {
                debug!("No agent matched, staying with current agent");
                current
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Reply;
    use crate::context::AgentContext;
    use crate::errors::Result;
    use crate::types::History;
    use async_trait::async_trait;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Desk {
        Billing,
        Refunds,
        General,
    }

    #[async_trait]
    impl Agent for Desk {
        fn name(&self) -> &str {
            match self {
                Desk::Billing => "Billing",
                Desk::Refunds => "Refunds",
                Desk::General => "General",
            }
        }

        fn description(&self) -> &str {
            "test desk"
        }

        fn capabilities(&self) -> &'static [&'static str] {
            match self {
                Desk::Billing => &["invoice", "payment"],
                // Overlaps with Billing on "payment".
                Desk::Refunds => &["refund", "payment"],
                Desk::General => &["hello"],
            }
        }

        async fn handle(&self, _ctx: &AgentContext<'_>, _text: &str, _history: &History) -> Result<Reply> {
            Ok(Reply::text(""))
        }
    }

    const DESKS: [Desk; 3] = [Desk::Billing, Desk::Refunds, Desk::General];

    #[test]
    fn test_first_match_wins_on_overlap() {
        let router = KeywordRouter::new();
        for _ in 0..10 {
            assert_eq!(router.route(2, "a payment question", &DESKS), 0);
        }
        assert_eq!(router.route(0, "I want a REFUND", &DESKS), 1);
    }

    #[test]
    fn test_unmatched_turn_is_sticky() {
        let router = KeywordRouter::new();
        assert_eq!(router.route(1, "what's the weather", &DESKS), 1);
        assert_eq!(router.route(2, "", &DESKS), 2);
    }

    proptest! {
        #[test]
        fn prop_unmatched_turns_keep_current(text in "[0-9 ]{0,40}", current in 0usize..3) {
            let router = KeywordRouter::new();
            prop_assert_eq!(router.route(current, &text, &DESKS), current);
        }

        #[test]
        fn prop_route_is_deterministic(text in "(invoice|refund|payment|hello|other| ){0,6}", current in 0usize..3) {
            let router = KeywordRouter::new();
            let first = router.route(current, &text, &DESKS);
            prop_assert_eq!(first, router.route(current, &text, &DESKS));
            prop_assert!(first < DESKS.len());
        }
    }
}
