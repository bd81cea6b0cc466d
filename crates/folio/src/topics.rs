// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `folio topics` command implementation.

use folio_config::FolioConfig;
use folio_core::FolioError;

/// Runs `folio topics [KEY]`.
///
/// Without a key, lists every topic key in catalog order. With a key, prints
/// that topic's body, or fails with [`FolioError::UnknownTopic`].
pub fn run_topics(config: &FolioConfig, key: Option<&str>) -> Result<(), FolioError> {
    let catalog = folio_catalog::builtin().with_overrides(&config.catalog);

    match key {
        Some(key) => {
            let body = catalog.get(key).ok_or_else(|| FolioError::UnknownTopic {
                key: key.to_string(),
            })?;
            println!("{body}");
        }
        None => {
            for key in catalog.keys() {
                println!("{key}");
            }
        }
    }

    Ok(())
}
