use relay_agent::{LineSource, MemorySink, ScriptedBackend, TurnStatus};
use relay_agents::prelude::*;
use std::sync::Arc;

async fn play(demo: Demo, seed: Option<u64>, script: &[&str]) -> (Session<Specialist>, MemorySink) {
    let mut session = Session::new(demo.roster(seed).unwrap());
    let mut source = ScriptSource::new(script.iter().copied());
    let mut sink = MemorySink::new();
    session.run(&mut source, &mut sink).await.unwrap();
    (session, sink)
}

#[tokio::test]
async fn test_travel_demo() {
    let (session, sink) = play(
        Demo::Travel,
        None,
        &["I want a beach vacation", "book a hotel", "what food should I try"],
    )
    .await;

    let reports = &sink.reports;
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].agent, "DestinationAgent");
    assert!(reports[0].text.contains("Bali"));
    assert!(reports[0].handoff.is_none());

    assert_eq!(reports[1].handoff, Some(HandoffEvent::new("DestinationAgent", "BookingAgent", 4)));
    assert!(reports[1].text.starts_with("🏨 Hotels in Bali:"));
    assert_eq!(
        reports[1].handoff_note.as_deref(),
        Some("✈️ I'll find flights and hotels for your trip!")
    );

    assert_eq!(reports[2].handoff, Some(HandoffEvent::new("BookingAgent", "ExploreAgent", 6)));
    assert_eq!(
        reports[2].text,
        "🗺️ In Bali, try: Ubud Monkey Forest, Beach Clubs and Balinese Food."
    );

    assert_eq!(session.history().len(), 6);
    assert!(sink.finished);
}

#[tokio::test]
async fn test_booking_without_tool_trigger_lists_both() {
    let (_, sink) = play(Demo::Travel, None, &["somewhere romantic", "book it"]).await;
    let booking = &sink.reports[1];
    assert_eq!(booking.agent, "BookingAgent");
    assert!(booking.text.contains("✈️ Flights to Paris:"));
    assert!(booking.text.contains("🏨 Hotels in Paris:"));
}

#[tokio::test]
async fn test_career_demo() {
    let (session, sink) = play(
        Demo::Career,
        None,
        &[
            "I'm interested in coding",
            "show me the skills roadmap",
            "I want to work as a backend developer",
        ],
    )
    .await;

    let reports = &sink.reports;
    assert!(reports[0].text.contains("Software Engineering"));
    assert_eq!(reports[1].agent, "SkillAgent");
    assert!(reports[1].text.contains("Data Structures"));
    assert_eq!(reports[2].agent, "JobAgent");
    assert!(reports[2]
        .text
        .contains("https://www.indeed.com/q-backend-developer--jobs.html"));
    assert_eq!(sink.handoffs().len(), 2);
    assert_eq!(session.history().len(), 6);
}

#[tokio::test]
async fn test_seeded_adventure_replays() {
    let script = [
        "I enter the forest",
        "open the chest",
        "check my inventory",
        "attack the monster",
    ];
    let (first, first_sink) = play(Demo::Adventure, Some(99), &script).await;
    let (second, _) = play(Demo::Adventure, Some(99), &script).await;
    assert_eq!(first.history(), second.history());

    let reports = &first_sink.reports;
    assert_eq!(reports[0].agent, "NarratorAgent");
    assert!(reports[0].text.starts_with("📖 "));

    let received = reports[1].text.strip_prefix("🎁 You received: ").unwrap();
    assert_eq!(reports[2].text, format!("🎒 Inventory: {}", received));

    let combat = &reports[3];
    assert_eq!(combat.agent, "MonsterAgent");
    assert_eq!(combat.ended, combat.text.contains("Game over"));
    assert!(first.is_ended());
}

#[tokio::test]
async fn test_sessions_sharing_a_roster_replay_independently() {
    let script = ["open the chest", "open the chest", "open the chest", "open the chest"];
    let (alone, _) = play(Demo::Adventure, Some(99), &script).await;

    let roster = Demo::Adventure.roster(Some(99)).unwrap();
    let mut a = Session::new(Arc::clone(&roster));
    let mut b = Session::new(roster);
    for text in script {
        a.submit(text).await.unwrap();
        b.submit(text).await.unwrap();
        b.submit("loot the room").await.unwrap();
    }

    assert_eq!(a.history(), alone.history());
}

#[tokio::test]
async fn test_malformed_line_fails_one_turn() {
    let input: &[u8] = b"I want a beach vacation\n\xff\xfe bad\nbook a hotel\n";
    let mut session = Session::new(Demo::Travel.roster(None).unwrap());
    let mut source = LineSource::new(input);
    let mut sink = MemorySink::new();
    session.run(&mut source, &mut sink).await.unwrap();

    let reports = &sink.reports;
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[1].status, TurnStatus::Failed);
    assert_eq!(reports[1].agent, "DestinationAgent");
    assert!(reports[1].text.starts_with("Invalid turn:"));
    assert_eq!(reports[2].agent, "BookingAgent");
    assert_eq!(session.history().len(), 5);
}

#[tokio::test]
async fn test_losing_a_fight_ends_the_game() {
    // Keep fighting until the dice go against the player
    let script = vec!["fight"; 200];
    let (session, sink) = play(Demo::Adventure, Some(5), &script).await;

    let last = sink.reports.last().unwrap();
    assert!(last.ended);
    assert!(last.text.contains("Game over"));
    assert!(sink.reports.len() < 200);
    assert_eq!(session.history().len(), sink.reports.len() * 2);
}

#[tokio::test]
async fn test_study_demo() {
    let (session, sink) = play(
        Demo::Study,
        None,
        &[
            "make a study plan: Rust, Tokio by 2099-01-10",
            "research on async rust",
            "summarize that",
            "study plan: Rust by 2000-01-01",
        ],
    )
    .await;

    let reports = &sink.reports;
    assert!(reports[0].text.starts_with("🗓️ Study plan:"));
    assert_eq!(reports[0].text.matches("📘").count(), 2);

    assert_eq!(reports[1].agent, "ResearchAgent");
    assert_eq!(reports[1].text.lines().count(), 4);

    assert_eq!(reports[2].agent, "SummarizerAgent");
    assert!(reports[2].text.starts_with("📝 Summary: What is async rust?"));
    assert_eq!(reports[2].text.matches(" | ").count(), 3);

    // A past deadline fails the turn without a handoff
    assert_eq!(reports[3].status, TurnStatus::Failed);
    assert_eq!(reports[3].agent, "SchedulerAgent");
    assert!(reports[3].handoff.is_none());
    assert_eq!(session.history().len(), 7);
    assert!(session.history().last().unwrap().is_failed());
}

#[tokio::test]
async fn test_backend_drives_conversational_turns() {
    let backend = Arc::new(ScriptedBackend::new(["How about Lisbon in spring?"]));
    let mut session = Session::new(Demo::Travel.roster(None).unwrap()).with_backend(backend);

    let TurnOutcome::Processed(first) = session.submit("where should I go?").await.unwrap() else {
        panic!("unexpected exit");
    };
    assert_eq!(first.text, "How about Lisbon in spring?");

    // The script is spent, so the next conversational turn fails
    let TurnOutcome::Processed(second) = session.submit("somewhere with culture").await.unwrap() else {
        panic!("unexpected exit");
    };
    assert_eq!(second.status, TurnStatus::Failed);
    assert_eq!(session.history().len(), 3);
}
