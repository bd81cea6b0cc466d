// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Topic and catalog types.
//!
//! A [`Catalog`] is an ordered, immutable set of `(key, body)` topics fixed
//! at construction time. Declaration order is significant: the scorer breaks
//! ties in favor of the topic declared first, so the catalog must iterate in
//! a stable, documented order.

use folio_config::model::CatalogConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One canned-answer category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Short lowercase identifier, unique within the catalog.
    pub key: String,
    /// Multi-line body text, fixed at construction time.
    pub body: String,
}

impl Topic {
    pub fn new(key: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            body: body.into(),
        }
    }
}

/// The fixed set of topics plus the fallback and greeting texts.
///
/// Constructed once at startup and never mutated afterwards. Holds no
/// external resources, so it needs no teardown.
#[derive(Debug, Clone)]
pub struct Catalog {
    topics: Vec<Topic>,
    fallback: String,
    greeting: String,
}

impl Catalog {
    /// Creates a catalog from topics in declaration order.
    pub fn new(
        topics: Vec<Topic>,
        fallback: impl Into<String>,
        greeting: impl Into<String>,
    ) -> Self {
        Self {
            topics,
            fallback: fallback.into(),
            greeting: greeting.into(),
        }
    }

    /// Iterates `(key, body)` pairs in declaration order.
    ///
    /// This order is the scorer's tie-break order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.topics.iter().map(|t| (t.key.as_str(), t.body.as_str()))
    }

    /// Iterates topic keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.key.as_str())
    }

    /// Looks up a topic body by exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.topics
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.body.as_str())
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// The text returned when no topic scores above zero.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// The bot message that seeds a fresh transcript.
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Applies configuration overrides to this catalog.
    ///
    /// A configured key matching an existing topic replaces its body in
    /// place (declaration position, and therefore tie-break rank, is
    /// preserved). A new key is appended after the existing topics in the
    /// order it appears in the config. A configured fallback replaces the
    /// built-in one.
    pub fn with_overrides(mut self, overrides: &CatalogConfig) -> Self {
        for configured in &overrides.topics {
            match self.topics.iter_mut().find(|t| t.key == configured.key) {
                Some(existing) => {
                    debug!(key = configured.key.as_str(), "overriding topic body");
                    existing.body = configured.body.clone();
                }
                None => {
                    debug!(key = configured.key.as_str(), "appending configured topic");
                    self.topics.push(Topic::new(&configured.key, &configured.body));
                }
            }
        }

        if let Some(fallback) = &overrides.fallback {
            self.fallback = fallback.clone();
        }

        self
    }
}
