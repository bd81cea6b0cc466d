// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation state for the Folio concierge.
//!
//! One [`ChatSession`] owns an append-only [`Transcript`] and drives each
//! exchange: user message in, responder consulted, simulated-typing delay,
//! bot message out. The delay is injectable through [`TypingDelay`] so the
//! flow stays deterministic under test.

mod session;
mod transcript;
mod typing;

pub use session::{ChatSession, SessionState};
pub use transcript::Transcript;
pub use typing::{FixedDelay, JitterDelay, NoDelay, TypingDelay};
