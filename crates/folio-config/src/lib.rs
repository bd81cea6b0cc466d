// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration for the Folio concierge.
//!
//! Config is merged from three optional TOML files (system, XDG user, local
//! `folio.toml`) plus `FOLIO_`-prefixed environment variables, deserialized
//! with `deny_unknown_fields`, and semantically validated before use. Load
//! failures come back as miette diagnostics with source spans and typo
//! suggestions rather than bare serde strings.
//!
//! The usual entry point is [`load_and_validate`]; tests and embedders that
//! hold their own TOML text use [`load_and_validate_str`].

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::FolioConfig;

/// Loads from the standard file hierarchy and env vars, then validates.
pub fn load_and_validate() -> Result<FolioConfig, Vec<ConfigError>> {
    finish(loader::load_config(), read_toml_sources())
}

/// Loads from a single TOML string (no file hierarchy), then validates.
pub fn load_and_validate_str(toml: &str) -> Result<FolioConfig, Vec<ConfigError>> {
    let sources = vec![("<inline>".to_string(), toml.to_string())];
    finish(loader::load_config_from_str(toml), sources)
}

/// Shared tail of the load paths: diagnose figment failures, then validate.
fn finish(
    loaded: Result<FolioConfig, figment::Error>,
    sources: Vec<(String, String)>,
) -> Result<FolioConfig, Vec<ConfigError>> {
    let config = loaded.map_err(|err| diagnostic::figment_to_config_errors(err, &sources))?;
    validation::validate_config(&config)?;
    Ok(config)
}

/// Reads whichever candidate config files exist, so diagnostics can point
/// into the file that defined an offending key.
fn read_toml_sources() -> Vec<(String, String)> {
    loader::config_file_candidates()
        .into_iter()
        .filter_map(|path| {
            let content = std::fs::read_to_string(&path).ok()?;
            Some((path.display().to_string(), content))
        })
        .collect()
}
