// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `folio ask` command implementation.
//!
//! One-shot question answering: score the input against the catalog and
//! print the winning body. No session, no transcript, no typing delay.

use folio_config::FolioConfig;
use folio_core::FolioError;
use folio_responder::KeywordResponder;
use tracing::debug;

/// Runs `folio ask TEXT...`: prints the reply for a single question.
///
/// Blank input is rejected rather than silently ignored; in a one-shot
/// command there is no conversation to fall back to.
pub fn run_ask(config: &FolioConfig, text: &str) -> Result<(), FolioError> {
    if text.trim().is_empty() {
        return Err(FolioError::Internal(
            "ask requires a non-empty question".to_string(),
        ));
    }

    let catalog = folio_catalog::builtin().with_overrides(&config.catalog);
    let responder = KeywordResponder::new(catalog);
    let decision = responder.decide(text);

    debug!(
        topic = decision.topic.as_deref().unwrap_or("<fallback>"),
        score = decision.score,
        "ask decided"
    );

    println!("{}", decision.body);
    Ok(())
}
