// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Folio concierge.

use thiserror::Error;

/// The primary error type used across Folio crates.
///
/// The responder itself is total (it always yields either a topic body or the
/// fallback text), so most variants here cover the surrounding machinery:
/// configuration, catalog lookups, and terminal plumbing.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// A topic key was requested that the catalog does not contain.
    #[error("unknown topic `{key}`")]
    UnknownTopic { key: String },

    /// Internal or unexpected errors (readline setup, terminal I/O).
    #[error("internal error: {0}")]
    Internal(String),
}
