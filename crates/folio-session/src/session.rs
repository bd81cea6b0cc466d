// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-session orchestration of a single conversation.
//!
//! The session glues the pieces together the way the chat surface expects:
//! user message appended immediately, responder consulted, typing delay
//! awaited, bot message appended. The responder itself is synchronous and
//! pure; the only asynchrony here is the presentation delay.

use std::sync::Arc;

use folio_core::{Message, Responder, SessionId};
use tracing::debug;

use crate::transcript::Transcript;
use crate::typing::TypingDelay;

/// States a chat session moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for user input.
    Idle,
    /// A user message is in, the typing delay is running.
    AwaitingReply,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::AwaitingReply => write!(f, "awaiting-reply"),
        }
    }
}

/// Manages the transcript and message flow for one conversation.
pub struct ChatSession {
    id: SessionId,
    state: SessionState,
    transcript: Transcript,
    responder: Arc<dyn Responder>,
    delay: Arc<dyn TypingDelay>,
}

impl ChatSession {
    pub fn new(responder: Arc<dyn Responder>, delay: Arc<dyn TypingDelay>) -> Self {
        Self {
            id: SessionId::generate(),
            state: SessionState::Idle,
            transcript: Transcript::new(),
            responder,
            delay,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Seeds a fresh transcript with the bot greeting.
    ///
    /// Only the first call has any effect; a greeting never interrupts an
    /// ongoing conversation.
    pub fn greet(&mut self, greeting: &str) -> Option<&Message> {
        if !self.transcript.is_empty() {
            return None;
        }
        self.transcript.append(Message::bot(greeting));
        self.transcript.last()
    }

    /// Handles one user submission end to end.
    ///
    /// Blank input is ignored entirely: nothing is appended and the
    /// responder is not consulted. Otherwise the user message is appended
    /// immediately (text verbatim), the reply is computed, the typing delay
    /// runs, and the bot message is appended. Returns the bot message, or
    /// `None` for ignored input.
    pub async fn submit(&mut self, input: &str) -> Option<&Message> {
        if input.trim().is_empty() {
            debug!(session_id = self.id.0.as_str(), "ignoring blank submission");
            return None;
        }

        self.transcript.append(Message::user(input));
        self.state = SessionState::AwaitingReply;

        // The responder is pure, so computing before or after the delay is
        // equivalent; computing first keeps the await tail-positioned.
        let reply = self.responder.respond(input);

        self.delay.wait().await;

        self.transcript.append(Message::bot(reply));
        self.state = SessionState::Idle;

        debug!(
            session_id = self.id.0.as_str(),
            turns = self.transcript.len(),
            "exchange complete"
        );

        self.transcript.last()
    }
}
