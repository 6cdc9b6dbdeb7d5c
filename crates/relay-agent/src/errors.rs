//! Error types for the handoff orchestrator

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Tool dispatch failed: {tool_name}: {message}")]
    ToolDispatch { tool_name: String, message: String },

    #[error("Tool error: {tool_name}: {message}")]
    ToolError { tool_name: String, message: String },

    #[error("Reasoning backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Invalid turn: {0}")]
    InvalidTurn(String),

    #[error("Agent already registered: {0}")]
    DuplicateAgent(String),

    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    #[error("Roster has no agents")]
    EmptyRoster,

    #[error("Session has ended")]
    SessionEnded,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RelayError {
    /// Errors the session absorbs as a failed turn instead of propagating.
    pub fn is_turn_local(&self) -> bool {
        matches!(
            self,
            RelayError::UnknownTool(_)
                | RelayError::ToolDispatch { .. }
                | RelayError::ToolError { .. }
                | RelayError::BackendUnavailable(_)
                | RelayError::InvalidTurn(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_local_classification() {
        assert!(RelayError::InvalidTurn("empty".into()).is_turn_local());
        assert!(RelayError::BackendUnavailable("down".into()).is_turn_local());
        assert!(!RelayError::DuplicateTool("x".into()).is_turn_local());
        assert!(!RelayError::SessionEnded.is_turn_local());
    }
}
