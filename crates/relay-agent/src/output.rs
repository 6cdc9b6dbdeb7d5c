//! Per-turn reports and the sinks that render them

use crate::errors::Result;
use crate::handoff::HandoffEvent;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// How a turn finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnStatus {
    Ok,
    Failed,
    Cancelled,
}

/// What the session surfaces for one processed turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Agent the turn is attributed to
    pub agent: String,

    /// Reply text, or the error message for a failed turn
    pub text: String,

    pub handoff: Option<HandoffEvent>,

    pub status: TurnStatus,

    /// The session ended with this turn
    pub ended: bool,

    /// Description of the agent taken over, for narrating the handoff
    #[serde(skip)]
    pub handoff_note: Option<String>,
}

impl TurnReport {
    pub fn is_ok(&self) -> bool {
        self.status == TurnStatus::Ok
    }
}

/// Receives one report per processed turn
pub trait OutputSink {
    fn emit(&mut self, report: &TurnReport) -> Result<()>;

    /// Called once when the session stops accepting turns
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes one JSON object per line
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for JsonLinesSink<W> {
    fn emit(&mut self, report: &TurnReport) -> Result<()> {
        serde_json::to_writer(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Console narration in the style of the demo scripts
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for TextSink<W> {
    fn emit(&mut self, report: &TurnReport) -> Result<()> {
        if let Some(handoff) = &report.handoff {
            writeln!(self.writer, "🔁 Switching to {}...", handoff.to)?;
            if let Some(note) = &report.handoff_note {
                writeln!(self.writer, "{}", note)?;
            }
            writeln!(self.writer)?;
        }

        match report.status {
            TurnStatus::Ok => writeln!(self.writer, "🤖 {}: {}", report.agent, report.text)?,
            TurnStatus::Failed => writeln!(self.writer, "❌ {}: {}", report.agent, report.text)?,
            TurnStatus::Cancelled => writeln!(self.writer, "⏱️ {}: {}", report.agent, report.text)?,
        }
        self.writer.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "👋 Goodbye!")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Collects reports in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub reports: Vec<TurnReport>,
    pub finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handoffs(&self) -> Vec<&HandoffEvent> {
        self.reports.iter().filter_map(|r| r.handoff.as_ref()).collect()
    }
}

impl OutputSink for MemorySink {
    fn emit(&mut self, report: &TurnReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        Ok(())
    }
}
