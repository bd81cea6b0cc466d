// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Folio concierge.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Folio configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// Assistant identity and presentation settings.
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Chat pacing settings (simulated typing).
    #[serde(default)]
    pub chat: ChatConfig,

    /// Response catalog overrides.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Assistant identity and presentation configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssistantConfig {
    /// Display name of the assistant.
    #[serde(default = "default_assistant_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Greeting appended to a fresh transcript before any user input.
    /// `None` uses the built-in greeting.
    #[serde(default)]
    pub greeting: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_assistant_name(),
            log_level: default_log_level(),
            greeting: None,
        }
    }
}

fn default_assistant_name() -> String {
    "folio".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Chat pacing configuration.
///
/// The bot reply is appended only after a presentation delay that simulates
/// typing. The delay is `typing_delay_ms` plus a uniformly random extra of up
/// to `typing_jitter_ms`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Base typing delay in milliseconds before a bot reply appears.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    /// Maximum random jitter in milliseconds added to the base delay.
    #[serde(default = "default_typing_jitter_ms")]
    pub typing_jitter_ms: u64,

    /// Show a typing indicator in the shell while the delay runs.
    #[serde(default = "default_show_typing_indicator")]
    pub show_typing_indicator: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay_ms(),
            typing_jitter_ms: default_typing_jitter_ms(),
            show_typing_indicator: default_show_typing_indicator(),
        }
    }
}

fn default_typing_delay_ms() -> u64 {
    1000
}

fn default_typing_jitter_ms() -> u64 {
    1000
}

fn default_show_typing_indicator() -> bool {
    true
}

/// Response catalog overrides.
///
/// Topics listed here are merged into the built-in catalog: a key that matches
/// a built-in topic replaces its body, a new key is appended after the
/// built-ins in declaration order. Declaration order matters -- it is the
/// tie-break order used by the scorer.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Topic overrides and additions, in declaration order.
    #[serde(default)]
    pub topics: Vec<TopicConfig>,

    /// Replacement for the zero-score fallback text. `None` uses the built-in.
    #[serde(default)]
    pub fallback: Option<String>,
}

/// A single topic override.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TopicConfig {
    /// Topic key. Must be lowercase with no whitespace -- the scorer compares
    /// lowercased input tokens against it.
    pub key: String,

    /// Multi-line body text returned when this topic wins.
    pub body: String,
}
