use async_trait::async_trait;
use proptest::prelude::*;
use relay_agent::prelude::*;
use relay_agent::{Router, ToolCall, TurnStatus};
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Travel {
    Destination,
    Booking,
    Explore,
    Ghost,
}

#[async_trait]
impl Agent for Travel {
    fn name(&self) -> &str {
        match self {
            Travel::Destination => "Destination",
            Travel::Booking => "Booking",
            Travel::Explore => "Explore",
            Travel::Ghost => "Ghost",
        }
    }

    fn description(&self) -> &str {
        "travel desk"
    }

    fn capabilities(&self) -> &'static [&'static str] {
        match self {
            Travel::Destination => &["beach", "mountain"],
            Travel::Booking => &["book", "flight", "hotel"],
            Travel::Explore => &["food", "attraction"],
            Travel::Ghost => &["boo!"],
        }
    }

    fn tools(&self) -> &'static [ToolBinding] {
        match self {
            Travel::Booking => &[ToolBinding { tool: "get_flights", triggers: &["flight"] }],
            _ => &[],
        }
    }

    // Ghost reaches for a tool nobody registered.
    fn tool_call(&self, text: &str, history: &History) -> Option<ToolCall> {
        match self {
            Travel::Ghost => Some(ToolCall {
                name: "haunt".to_string(),
                args: json!({ "input": text }),
            }),
            _ => self
                .tools()
                .iter()
                .find(|b| b.triggered_by(text))
                .map(|b| ToolCall {
                    name: b.tool.to_string(),
                    args: self.tool_args(b.tool, text, history),
                }),
        }
    }

    async fn handle(&self, _ctx: &AgentContext<'_>, text: &str, _history: &History) -> Result<Reply> {
        Ok(Reply::text(format!("{} handled: {}", self.name(), text)))
    }
}

fn roster() -> Arc<Roster<Travel>> {
    let mut tools = ToolRegistry::new();
    tools
        .register_fn("get_flights", "List flights", |_args: &Value| {
            Ok("AirX $300".to_string())
        })
        .unwrap();
    Roster::builder()
        .agents([Travel::Destination, Travel::Booking, Travel::Explore, Travel::Ghost])
        .tools(tools)
        .default_agent("Destination")
        .build()
        .unwrap()
        .into_shared()
}

async fn submit(session: &mut Session<Travel>, text: &str) -> TurnReport {
    match session.submit(text).await.unwrap() {
        TurnOutcome::Processed(report) => report,
        TurnOutcome::Exited => panic!("unexpected exit on {:?}", text),
    }
}

#[tokio::test]
async fn test_travel_scenario_handoffs() {
    let mut session = Session::new(roster());

    let first = submit(&mut session, "I want a beach vacation").await;
    assert_eq!(first.agent, "Destination");
    assert!(first.handoff.is_none());

    let second = submit(&mut session, "book a hotel").await;
    assert_eq!(second.handoff, Some(HandoffEvent::new("Destination", "Booking", 4)));

    let third = submit(&mut session, "what food should I try").await;
    assert_eq!(third.handoff, Some(HandoffEvent::new("Booking", "Explore", 6)));

    assert_eq!(session.history().len(), 6);
    assert_eq!(session.active_agent(), Some(&Travel::Explore));
}

#[tokio::test]
async fn test_exit_first_dispatches_nothing() {
    let mut session = Session::new(roster());
    assert_eq!(session.submit("exit").await.unwrap(), TurnOutcome::Exited);
    assert!(session.is_ended());
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_first_registered_agent_wins_overlap() {
    for _ in 0..5 {
        let mut session = Session::new(roster());
        submit(&mut session, "book a flight").await;
        let report = submit(&mut session, "beach hotel with good food").await;
        assert_eq!(report.agent, "Destination");
        assert_eq!(report.handoff, Some(HandoffEvent::new("Booking", "Destination", 4)));
    }
}

#[tokio::test]
async fn test_unregistered_tool_only_adds_marker() {
    let mut session = Session::new(roster());
    submit(&mut session, "beach").await;

    let report = submit(&mut session, "boo! said the ghost").await;
    assert_eq!(report.status, TurnStatus::Failed);
    assert_eq!(report.text, "Unknown tool: haunt");
    assert_eq!(report.agent, "Ghost");

    assert_eq!(session.history().len(), 3);
    assert!(session.history().last().unwrap().is_failed());
    assert_eq!(session.active_agent(), Some(&Travel::Destination));
}

#[tokio::test]
async fn test_history_round_trip_after_session() {
    let mut session = Session::new(roster());
    for text in ["beach", "any flight?", "", "food"] {
        submit(&mut session, text).await;
    }

    let json = session.history().to_json().unwrap();
    let restored = History::from_json(&json).unwrap();
    assert_eq!(&restored, session.history());

    let contents: Vec<&str> = restored.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(
        contents,
        vec![
            "beach",
            "Destination handled: beach",
            "any flight?",
            "AirX $300",
            "",
            "food",
            "Explore handled: food",
        ]
    );
}

fn turn_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("beach please".to_string()),
        Just("book a flight".to_string()),
        Just("food tour".to_string()),
        Just("boo! again".to_string()),
        Just("".to_string()),
        Just("just chatting".to_string()),
        // No `i`, so never an exit command.
        "[a-hj-z ]{0,12}",
    ]
}

proptest! {
    #[test]
    fn prop_history_growth_and_handoffs(turns in prop::collection::vec(turn_text(), 0..20)) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        runtime.block_on(async {
            let roster = roster();
            let mut session = Session::new(Arc::clone(&roster));

            for text in &turns {
                let before_len = session.history().len();
                let before_agent = *session.active_agent().unwrap();
                let target = roster.agents()[roster.router().route(
                    roster.position(before_agent.name()).unwrap(),
                    text,
                    roster.agents(),
                )];

                let report = submit(&mut session, text).await;
                let after_len = session.history().len();
                let after_agent = *session.active_agent().unwrap();

                if report.is_ok() {
                    prop_assert_eq!(after_len, before_len + 2);
                    prop_assert_eq!(after_agent, target);
                    match &report.handoff {
                        Some(event) => {
                            prop_assert!(target != before_agent);
                            prop_assert_eq!(event.from.as_str(), before_agent.name());
                            prop_assert_eq!(event.to.as_str(), after_agent.name());
                            prop_assert_eq!(event.turn_index, after_len);
                        }
                        None => prop_assert_eq!(target, before_agent),
                    }
                } else {
                    prop_assert_eq!(after_len, before_len + 1);
                    prop_assert_eq!(after_agent, before_agent);
                    prop_assert!(report.handoff.is_none());
                }

                if !Travel::Destination.matches(text)
                    && !Travel::Booking.matches(text)
                    && !Travel::Explore.matches(text)
                    && !Travel::Ghost.matches(text)
                {
                    prop_assert_eq!(after_agent, before_agent);
                }
            }
            Ok::<(), proptest::test_runner::TestCaseError>(())
        })?;
    }
}
