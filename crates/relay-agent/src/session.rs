//! Session turn loop
//!
//! A session owns one conversation: its history and the active agent. Each
//! submitted turn goes through the same steps:
//!
//! 1. Route the turn to a target agent
//! 2. Dispatch it, either straight to a triggered tool or to the agent's
//!    `handle`
//! 3. Commit the user turn and the reply to history
//! 4. Hand off to the target agent if it differs from the active one
//!
//! Dispatch failures are local to the turn: the user turn is recorded with an
//! error marker, the active agent does not change, and the next turn is
//! accepted normally.

use crate::agent::{Agent, Reply};
use crate::backend::ReasoningBackend;
use crate::context::AgentContext;
use crate::errors::{RelayError, Result};
use crate::handoff::HandoffEvent;
use crate::output::{OutputSink, TurnReport, TurnStatus};
use crate::roster::Roster;
use crate::source::TurnSource;
use crate::types::{History, Turn};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting turns; holds the roster position of the active agent
    Active(usize),
    Ended,
}

/// Result of submitting one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The turn was dispatched; the report tells whether it succeeded
    Processed(TurnReport),

    /// The turn was an exit command; nothing was dispatched
    Exited,
}

/// Whether `text` is an exit command
pub fn is_exit_command(text: &str) -> bool {
    let text = text.trim();
    text.eq_ignore_ascii_case("exit") || text.eq_ignore_ascii_case("quit")
}

/// One conversation driven over a shared roster
pub struct Session<A: Agent> {
    roster: Arc<Roster<A>>,
    history: History,
    state: SessionState,
    backend: Option<Arc<dyn ReasoningBackend>>,
    turn_timeout: Option<Duration>,
}

impl<A: Agent> Session<A> {
    /// Start a session on the roster's default agent
    pub fn new(roster: Arc<Roster<A>>) -> Self {
        let state = SessionState::Active(roster.default_agent());
        Self {
            roster,
            history: History::new(),
            state,
            backend: None,
            turn_timeout: None,
        }
    }

    /// Attach a reasoning backend available to agents
    pub fn with_backend(mut self, backend: Arc<dyn ReasoningBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Cancel a turn whose dispatch runs longer than `timeout`
    pub fn with_turn_timeout(mut self, timeout: Duration) -> Self {
        self.turn_timeout = Some(timeout);
        self
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_ended(&self) -> bool {
        self.state == SessionState::Ended
    }

    pub fn roster(&self) -> &Roster<A> {
        &self.roster
    }

    /// The active agent, or `None` once the session has ended
    pub fn active_agent(&self) -> Option<&A> {
        match self.state {
            SessionState::Active(index) => Some(self.roster.agent(index)),
            SessionState::Ended => None,
        }
    }

    /// End the session; later turns are rejected
    pub fn end(&mut self) {
        if !self.is_ended() {
            info!("Session ended after {} turns", self.history.len());
        }
        self.state = SessionState::Ended;
    }

    /// Process one user turn
    ///
    /// Turn-local failures (see [`RelayError::is_turn_local`]) come back as a
    /// processed turn with a failed status. [`RelayError::SessionEnded`] is
    /// returned once the session no longer accepts turns; any other error
    /// propagates without touching the history.
    pub async fn submit(&mut self, text: &str) -> Result<TurnOutcome> {
        let active = match self.state {
            SessionState::Active(index) => index,
            SessionState::Ended => return Err(RelayError::SessionEnded),
        };

        if is_exit_command(text) {
            self.end();
            return Ok(TurnOutcome::Exited);
        }

        if text.trim().is_empty() {
            let err = RelayError::InvalidTurn("empty input".to_string());
            return Ok(TurnOutcome::Processed(self.record_failure(text, active, err)));
        }

        let roster = Arc::clone(&self.roster);
        let target = roster.router().route(active, text, roster.agents());
        debug!(
            "Turn {} routed: {} -> {}",
            self.history.len(),
            roster.agent(active).name(),
            roster.agent(target).name()
        );

        let dispatch = self.dispatch(&roster, target, text);
        let result = match self.turn_timeout {
            Some(limit) => match tokio::time::timeout(limit, dispatch).await {
                Ok(result) => result,
                Err(_) => {
                    warn!("Turn cancelled after {:?}", limit);
                    return Ok(TurnOutcome::Processed(TurnReport {
                        agent: roster.agent(target).name().to_string(),
                        text: format!("Turn cancelled after {:?}", limit),
                        handoff: None,
                        status: TurnStatus::Cancelled,
                        ended: false,
                        handoff_note: None,
                    }));
                }
            },
            None => dispatch.await,
        };

        let report = match result {
            Ok(reply) => self.commit(text, active, target, reply),
            Err(err) if err.is_turn_local() => self.record_failure(text, target, err),
            Err(err) => return Err(err),
        };
        Ok(TurnOutcome::Processed(report))
    }

    /// Pull turns from `source` until end of input or the session ends
    pub async fn run<S, O>(&mut self, source: &mut S, sink: &mut O) -> Result<()>
    where
        S: TurnSource + ?Sized,
        O: OutputSink + ?Sized,
    {
        while !self.is_ended() {
            let text = match source.next_turn().await {
                Ok(Some(text)) => text,
                Ok(None) => {
                    debug!("Turn source exhausted");
                    self.end();
                    break;
                }
                Err(err) if err.is_turn_local() => {
                    let report = self.reject(err)?;
                    sink.emit(&report)?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            match self.submit(&text).await? {
                TurnOutcome::Processed(report) => sink.emit(&report)?,
                TurnOutcome::Exited => break,
            }
        }
        sink.finish()
    }

    /// Record input the source could not turn into text
    fn reject(&mut self, err: RelayError) -> Result<TurnReport> {
        match self.state {
            SessionState::Active(index) => Ok(self.record_failure("", index, err)),
            SessionState::Ended => Err(RelayError::SessionEnded),
        }
    }

    async fn dispatch(&self, roster: &Roster<A>, target: usize, text: &str) -> Result<Reply> {
        let agent = roster.agent(target);

        if let Some(call) = agent.tool_call(text, &self.history) {
            debug!("{} dispatching tool {}", agent.name(), call.name);
            let output = roster.tools().invoke(&call.name, &call.args)?;
            return Ok(Reply::text(output));
        }

        let ctx = AgentContext::new(roster.tools())
            .with_backend(self.backend.as_deref())
            .with_turn_index(self.history.len());
        agent.handle(&ctx, text, &self.history).await
    }

    fn commit(&mut self, text: &str, active: usize, target: usize, reply: Reply) -> TurnReport {
        let roster = Arc::clone(&self.roster);
        let agent = roster.agent(target);

        self.history.push(Turn::user(text));
        self.history.push(Turn::agent(agent.name(), reply.text.clone()));

        let handoff = (target != active).then(|| {
            let event = HandoffEvent::new(roster.agent(active).name(), agent.name(), self.history.len());
            info!("Handoff: {}", event);
            event
        });

        self.state = SessionState::Active(target);
        if reply.ends_session {
            self.end();
        }

        TurnReport {
            agent: agent.name().to_string(),
            handoff_note: handoff.as_ref().map(|_| agent.description().to_string()),
            text: reply.text,
            handoff,
            status: TurnStatus::Ok,
            ended: self.is_ended(),
        }
    }

    fn record_failure(&mut self, text: &str, attempted_by: usize, err: RelayError) -> TurnReport {
        let name = self.roster.agent(attempted_by).name().to_string();
        let message = err.to_string();
        warn!("Turn failed in {}: {}", name, message);

        self.history.push(Turn::failed(text, name.clone(), message.clone()));

        TurnReport {
            agent: name,
            text: message,
            handoff: None,
            status: TurnStatus::Failed,
            ended: false,
            handoff_note: None,
        }
    }
}
