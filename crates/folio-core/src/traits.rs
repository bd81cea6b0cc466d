// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The responder seam between the presentation layer and the scoring engine.

/// Produces a reply body for a user utterance.
///
/// Implementations must be total and pure: the same input always yields the
/// same output, and no input may fail. A zero-match input is answered with a
/// fallback body, not an error.
pub trait Responder: Send + Sync {
    /// Returns the reply body to display for `input`.
    ///
    /// The returned text may contain embedded line breaks; the presentation
    /// layer is responsible for rendering them.
    fn respond(&self, input: &str) -> String;
}
