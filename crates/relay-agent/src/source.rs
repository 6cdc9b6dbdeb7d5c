//! Turn sources feeding a session

use crate::errors::{RelayError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Supplier of user turns
#[async_trait]
pub trait TurnSource: Send {
    /// The next user text, or `None` at end of input
    ///
    /// A turn that cannot be read as text is an [`RelayError::InvalidTurn`];
    /// the session records it and keeps reading.
    async fn next_turn(&mut self) -> Result<Option<String>>;
}

/// A fixed script of turns
#[derive(Debug, Clone, Default)]
pub struct ScriptSource {
    turns: VecDeque<String>,
}

impl ScriptSource {
    pub fn new<I, S>(turns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            turns: turns.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl TurnSource for ScriptSource {
    async fn next_turn(&mut self) -> Result<Option<String>> {
        Ok(self.turns.pop_front())
    }
}

/// Line-oriented reader, one turn per line
pub struct LineSource<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
}

impl<R: AsyncBufRead + Unpin> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> TurnSource for LineSource<R> {
    async fn next_turn(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
            return Ok(None);
        }
        self.line += 1;

        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }

        match std::str::from_utf8(&self.buf) {
            Ok(text) => Ok(Some(text.to_string())),
            Err(_) => Err(RelayError::InvalidTurn(format!(
                "line {} is not valid UTF-8: {}",
                self.line,
                String::from_utf8_lossy(&self.buf)
            ))),
        }
    }
}
