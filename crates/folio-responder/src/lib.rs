// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-scoring response engine.
//!
//! Maps free-text input to the best-matching catalog topic using two scoring
//! signals: a key-substring bonus and per-bucket trigger bonuses. The engine
//! is pure and total; every input produces exactly one reply.

mod buckets;
pub mod scorer;

pub use scorer::{KeywordResponder, ReplyDecision, tokenize};
