//! Reasoning backend interface
//!
//! An agent may hand its turn to a language-model style backend instead of
//! computing the reply itself. The session treats backend failures as a
//! failed turn, never as a fatal error.

use crate::errors::{RelayError, Result};
use crate::types::History;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

#[async_trait]
pub trait ReasoningBackend: Send + Sync {
    /// Generate a reply for `prompt` given the conversation so far
    ///
    /// Fails with [`RelayError::BackendUnavailable`] when the backend cannot
    /// be reached.
    async fn generate(&self, prompt: &str, history: &History) -> Result<String>;
}

/// Backend that replays canned replies in order
///
/// Once the script runs out every call reports the backend as unavailable.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<String>>,
}

impl ScriptedBackend {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
        }
    }

    /// Replies not yet consumed
    pub fn remaining(&self) -> usize {
        self.replies.lock().map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl ReasoningBackend for ScriptedBackend {
    async fn generate(&self, _prompt: &str, _history: &History) -> Result<String> {
        let mut replies = self
            .replies
            .lock()
            .map_err(|_| RelayError::BackendUnavailable("script lock poisoned".to_string()))?;
        replies
            .pop_front()
            .ok_or_else(|| RelayError::BackendUnavailable("no scripted replies left".to_string()))
    }
}
