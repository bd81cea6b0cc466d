// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed trigger-bucket table.
//!
//! Each bucket awards a flat bonus to exactly one target topic when any of
//! its trigger tokens appears in the input. Buckets are checked
//! independently: more than one can fire for the same input, and `contact`
//! deliberately appears in two trigger sets (the `communication` bucket and
//! the `contact` bucket). That duplication is part of the shipped scoring
//! behavior and must not be collapsed.

/// Bonus for a token appearing as a substring of a topic key.
pub(crate) const KEY_SUBSTRING_BONUS: u32 = 5;

/// Bonus for a trigger bucket firing on its target topic.
pub(crate) const BUCKET_BONUS: u32 = 10;

/// A group of trigger tokens that boosts one specific topic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TriggerBucket {
    /// Tokens that fire this bucket. Matched by exact token equality, so
    /// punctuation-attached tokens such as `pricing?` do not fire.
    pub triggers: &'static [&'static str],
    /// The topic key this bucket boosts.
    pub target: &'static str,
}

pub(crate) const TRIGGER_BUCKETS: &[TriggerBucket] = &[
    TriggerBucket {
        triggers: &["price", "cost", "pricing", "rates"],
        target: "pricing",
    },
    TriggerBucket {
        triggers: &["service", "services", "what", "do"],
        target: "services",
    },
    TriggerBucket {
        triggers: &["process", "workflow", "how", "work"],
        target: "workflow",
    },
    TriggerBucket {
        triggers: &["communication", "contact", "talk", "updates"],
        target: "communication",
    },
    TriggerBucket {
        triggers: &["delivery", "timeline", "time", "when"],
        target: "delivery",
    },
    TriggerBucket {
        triggers: &["contact", "email", "reach", "connect"],
        target: "contact",
    },
];

/// Buckets that boost `key`, in table order.
pub(crate) fn buckets_for(key: &str) -> impl Iterator<Item = &'static TriggerBucket> + '_ {
    TRIGGER_BUCKETS.iter().filter(move |b| b.target == key)
}
