// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration diagnostics.
//!
//! Converts figment load failures into miette reports shaped around folio's
//! config layout: three flat sections (`[assistant]`, `[chat]`, `[catalog]`)
//! plus the `[[catalog.topics]]` array of tables. Unknown keys get a
//! Jaro-Winkler "did you mean" suggestion and a highlighted line in the file
//! that defined them; type mismatches name the full dotted key.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
/// 0.75 catches `greting` -> `greeting` and `typing_dely_ms` ->
/// `typing_delay_ms` without suggesting for unrelated keys.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error, rendered through miette.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// A key that no folio config section defines.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(folio::config::unknown_key),
        help("{}", unknown_key_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        key: String,
        /// Closest valid key, when one is similar enough.
        suggestion: Option<String>,
        /// Keys the enclosing section accepts.
        valid_keys: Vec<String>,
        #[label("not a recognized key")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    /// A value that does not match the key's declared type.
    #[error("invalid value for `{key}`: {detail}")]
    #[diagnostic(code(folio::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        /// Full dotted key, e.g. `chat.typing_delay_ms`.
        key: String,
        detail: String,
        expected: String,
    },

    /// A `[[catalog.topics]]` entry left out `key` or `body` -- the only
    /// required fields anywhere in the config.
    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(folio::config::missing_key),
        help("every [[catalog.topics]] entry must set both `key` and `body`")
    )]
    MissingKey { key: String },

    /// A semantic constraint violated by an otherwise well-formed config.
    #[error("validation error: {message}")]
    #[diagnostic(code(folio::config::validation))]
    Validation { message: String },

    /// Anything figment reports that has no specialized variant.
    #[error("configuration error: {0}")]
    #[diagnostic(code(folio::config::other))]
    Other(String),
}

fn unknown_key_help(suggestion: Option<&str>, valid_keys: &[String]) -> String {
    let listed = valid_keys.join(", ");
    match suggestion {
        Some(s) => format!("did you mean `{s}`? valid keys: {listed}"),
        None => format!("valid keys: {listed}"),
    }
}

/// Converts every error inside a `figment::Error` into a [`ConfigError`].
///
/// `toml_sources` carries `(path, content)` pairs for the config files that
/// were actually read, so unknown-key errors can point into them.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| {
            let path: Vec<String> = error.path.iter().map(ToString::to_string).collect();
            match &error.kind {
                Kind::UnknownField(field, expected) => {
                    let valid_keys: Vec<String> =
                        expected.iter().map(ToString::to_string).collect();
                    let suggestion = suggest_key(field, &valid_keys);
                    let (span, src) = locate_in_sources(&error, &path, field, toml_sources);
                    ConfigError::UnknownKey {
                        key: field.clone(),
                        suggestion,
                        valid_keys,
                        span,
                        src,
                    }
                }
                Kind::MissingField(field) => ConfigError::MissingKey {
                    key: field.clone().into_owned(),
                },
                Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                    key: path.join("."),
                    detail: format!("found {actual}"),
                    expected: expected.to_string(),
                },
                _ => ConfigError::Other(error.to_string()),
            }
        })
        .collect()
}

/// Finds the offending key's span in whichever source file figment blames.
fn locate_in_sources(
    error: &figment::error::Error,
    path: &[String],
    field: &str,
    toml_sources: &[(String, String)],
) -> (Option<SourceSpan>, Option<NamedSource<String>>) {
    let blamed = error
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_ref())
        .and_then(|s| match s {
            figment::Source::File(p) => Some(p.display().to_string()),
            _ => None,
        });
    let Some(blamed) = blamed else {
        return (None, None);
    };

    // Figment may record the path relative or absolute; accept either.
    let source = toml_sources
        .iter()
        .find(|(p, _)| *p == blamed || p.ends_with(blamed.as_str()) || blamed.ends_with(p.as_str()));
    let Some((source_path, content)) = source else {
        return (None, None);
    };

    match locate_key(content, path, field) {
        Some(offset) => (
            Some(SourceSpan::new(offset.into(), field.len())),
            Some(NamedSource::new(source_path, content.clone())),
        ),
        None => (None, None),
    }
}

/// Byte offset of `field` within the section or `[[catalog.topics]]` entry
/// that `path` points at.
///
/// `path` is figment's error path: empty for a top-level key, `["chat"]` for
/// a section key, `["catalog", "topics", "1"]` for a field in the second
/// topic entry.
pub fn locate_key(content: &str, path: &[String], field: &str) -> Option<usize> {
    let start = match path {
        [] => 0,
        [section, rest @ ..] if rest.first().map(String::as_str) == Some("topics") => {
            let index: usize = rest.get(1).and_then(|i| i.parse().ok()).unwrap_or(0);
            let header = format!("[[{section}.topics]]");
            nth_occurrence(content, &header, index)? + header.len()
        }
        [section, ..] => {
            let header = format!("[{section}]");
            content.find(&header)? + header.len()
        }
    };

    let mut offset = start;
    for line in content[start..].lines() {
        let key_part = line.trim_start();
        if let Some(rest) = key_part.strip_prefix(field) {
            // The field name must be followed by '=' or whitespace, not be a
            // prefix of a longer key.
            if rest.starts_with('=') || rest.starts_with(' ') || rest.starts_with('\t') {
                return Some(offset + (line.len() - key_part.len()));
            }
        }
        offset += line.len() + 1;
    }
    None
}

/// Byte offset of the `n`-th (zero-based) occurrence of `needle`.
fn nth_occurrence(content: &str, needle: &str, n: usize) -> Option<usize> {
    let mut pos = 0;
    let mut seen = 0;
    while let Some(found) = content[pos..].find(needle) {
        let at = pos + found;
        if seen == n {
            return Some(at);
        }
        seen += 1;
        pos = at + needle.len();
    }
    None
}

/// Suggests the closest valid key by Jaro-Winkler similarity, if any clears
/// the threshold.
pub fn suggest_key<S: AsRef<str>>(unknown: &str, valid: &[S]) -> Option<String> {
    valid
        .iter()
        .map(|k| (strsim::jaro_winkler(unknown, k.as_ref()), k.as_ref()))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, k)| k.to_string())
}

/// Renders diagnostics to stderr with miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = miette::GraphicalReportHandler::new();
    let mut out = String::new();
    for error in errors {
        out.clear();
        if handler.render_report(&mut out, error).is_err() {
            out = format!("error: {error}\n");
        }
        eprint!("{out}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_the_closest_section_key() {
        let valid = &["name", "log_level", "greeting"];
        assert_eq!(suggest_key("greting", valid), Some("greeting".to_string()));
    }

    #[test]
    fn prefers_the_best_of_several_close_keys() {
        // `typing_dely_ms` is close to both the delay and jitter keys; the
        // delay one scores higher and must win.
        let valid = &["typing_delay_ms", "typing_jitter_ms", "show_typing_indicator"];
        assert_eq!(
            suggest_key("typing_dely_ms", valid),
            Some("typing_delay_ms".to_string())
        );
    }

    #[test]
    fn stays_silent_for_unrelated_keys() {
        let valid = &["name", "log_level", "greeting"];
        assert_eq!(suggest_key("zzzzzz", valid), None);
    }

    #[test]
    fn locates_a_key_inside_its_section() {
        let content = "[assistant]\ngreting = \"hi\"\n";
        let path = vec!["assistant".to_string()];
        let offset = locate_key(content, &path, "greting").expect("key is present");
        assert_eq!(&content[offset..offset + 7], "greting");
    }

    #[test]
    fn locates_a_key_in_the_second_topics_entry() {
        let content = "\
[[catalog.topics]]
key = \"availability\"
body = \"Booking from next month.\"

[[catalog.topics]]
key = \"press\"
weight = 3
";
        let path: Vec<String> = ["catalog", "topics", "1"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let offset = locate_key(content, &path, "weight").expect("key is present");
        assert_eq!(&content[offset..offset + 6], "weight");
        // The offset must land in the second entry, past the first one.
        let second_entry = content.rfind("[[catalog.topics]]").unwrap();
        assert!(offset > second_entry);
    }

    #[test]
    fn key_prefix_of_a_longer_key_does_not_match() {
        let content = "[chat]\ntyping_delay_ms = 500\n";
        let path = vec!["chat".to_string()];
        assert_eq!(locate_key(content, &path, "typing_delay"), None);
    }

    #[test]
    fn missing_section_yields_no_offset() {
        let content = "[assistant]\nname = \"x\"\n";
        let path = vec!["chat".to_string()];
        assert_eq!(locate_key(content, &path, "typing_delay_ms"), None);
    }
}
