// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as well-formed topic keys and sane typing delays.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::FolioConfig;

/// Upper bound for the typing delay and jitter, in milliseconds.
/// Anything longer makes the shell look hung rather than "typing".
const MAX_TYPING_MS: u64 = 60_000;

/// Known logging levels accepted for `assistant.log_level`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &FolioConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.assistant.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "assistant.name must not be empty".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.assistant.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "assistant.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.assistant.log_level
            ),
        });
    }

    if config.chat.typing_delay_ms > MAX_TYPING_MS {
        errors.push(ConfigError::Validation {
            message: format!(
                "chat.typing_delay_ms must be at most {MAX_TYPING_MS}, got {}",
                config.chat.typing_delay_ms
            ),
        });
    }

    if config.chat.typing_jitter_ms > MAX_TYPING_MS {
        errors.push(ConfigError::Validation {
            message: format!(
                "chat.typing_jitter_ms must be at most {MAX_TYPING_MS}, got {}",
                config.chat.typing_jitter_ms
            ),
        });
    }

    // Topic keys must be usable by the scorer: lowercase, no whitespace,
    // non-empty, unique within the override list.
    let mut seen_keys = HashSet::new();
    for (i, topic) in config.catalog.topics.iter().enumerate() {
        let key = topic.key.as_str();

        if key.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("catalog.topics[{i}].key must not be empty"),
            });
            continue;
        }

        if key.chars().any(|c| c.is_whitespace()) {
            errors.push(ConfigError::Validation {
                message: format!(
                    "catalog.topics[{i}].key `{key}` must not contain whitespace"
                ),
            });
        }

        if key != key.to_lowercase() {
            errors.push(ConfigError::Validation {
                message: format!(
                    "catalog.topics[{i}].key `{key}` must be lowercase (input tokens are lowercased before matching)"
                ),
            });
        }

        if topic.body.is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("catalog.topics[{i}].body must not be empty"),
            });
        }

        if !seen_keys.insert(key) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate topic key `{key}` in [[catalog.topics]] array"),
            });
        }
    }

    if let Some(fallback) = &config.catalog.fallback {
        if fallback.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "catalog.fallback must not be empty when set".to_string(),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
