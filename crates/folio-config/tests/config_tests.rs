// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Folio configuration system.

use folio_config::diagnostic::{ConfigError, suggest_key};
use folio_config::loader::load_config_from_path;
use folio_config::model::FolioConfig;
use folio_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_folio_config() {
    let toml = r#"
[assistant]
name = "test-concierge"
log_level = "debug"
greeting = "Welcome!"

[chat]
typing_delay_ms = 500
typing_jitter_ms = 250
show_typing_indicator = false

[catalog]
fallback = "Try asking about pricing."

[[catalog.topics]]
key = "availability"
body = "Booking from next month."
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.assistant.name, "test-concierge");
    assert_eq!(config.assistant.log_level, "debug");
    assert_eq!(config.assistant.greeting.as_deref(), Some("Welcome!"));
    assert_eq!(config.chat.typing_delay_ms, 500);
    assert_eq!(config.chat.typing_jitter_ms, 250);
    assert!(!config.chat.show_typing_indicator);
    assert_eq!(
        config.catalog.fallback.as_deref(),
        Some("Try asking about pricing.")
    );
    assert_eq!(config.catalog.topics.len(), 1);
    assert_eq!(config.catalog.topics[0].key, "availability");
    assert_eq!(config.catalog.topics[0].body, "Booking from next month.");
}

/// Unknown field in [assistant] section produces an UnknownField error.
#[test]
fn unknown_field_in_assistant_produces_error() {
    let toml = r#"
[assistant]
greting = "hello"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    // Figment wraps serde's deny_unknown_fields error
    assert!(
        err_str.contains("unknown field") || err_str.contains("greting"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let toml = "";
    let config = load_config_from_str(toml).expect("empty TOML should use defaults");

    assert_eq!(config.assistant.name, "folio");
    assert_eq!(config.assistant.log_level, "info");
    assert!(config.assistant.greeting.is_none());
    assert_eq!(config.chat.typing_delay_ms, 1000);
    assert_eq!(config.chat.typing_jitter_ms, 1000);
    assert!(config.chat.show_typing_indicator);
    assert!(config.catalog.topics.is_empty());
    assert!(config.catalog.fallback.is_none());
}

/// Overrides merged after TOML (as env vars would be) win over file values.
#[test]
fn merged_override_wins_over_toml() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let toml_content = r#"
[assistant]
name = "from-toml"
"#;

    // Simulate a FOLIO_ASSISTANT_NAME env var by merging a dotted key.
    let config: FolioConfig = Figment::new()
        .merge(Serialized::defaults(FolioConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("assistant.name", "from-env"))
        .extract()
        .expect("should merge env override");

    assert_eq!(config.assistant.name, "from-env");
}

/// Dotted key override maps to chat.typing_delay_ms, not chat.typing.delay.ms.
#[test]
fn dotted_override_for_underscore_key() {
    use figment::{Figment, providers::Serialized};

    let config: FolioConfig = Figment::new()
        .merge(Serialized::defaults(FolioConfig::default()))
        .merge(("chat.typing_delay_ms", 50u64))
        .extract()
        .expect("should set typing_delay_ms via dot notation");

    assert_eq!(config.chat.typing_delay_ms, 50);
}

/// Missing config files are silently skipped (Figment's Toml::file() behavior).
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: FolioConfig = Figment::new()
        .merge(Serialized::defaults(FolioConfig::default()))
        .merge(Toml::file("/nonexistent/path/folio.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    assert_eq!(config.assistant.name, "folio");
}

/// A config file on disk loads through the path-based loader.
#[test]
fn load_config_from_a_file_on_disk() {
    use std::io::Write;

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("folio.toml");
    let mut file = std::fs::File::create(&path).expect("create config file");
    writeln!(file, "[assistant]\nname = \"from-file\"").expect("write config");

    let config = load_config_from_path(&path).expect("file config should load");
    assert_eq!(config.assistant.name, "from-file");
    // Unspecified sections still come from defaults.
    assert_eq!(config.chat.typing_delay_ms, 1000);
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[logging]
level = "debug"
"#;

    let err =
        load_config_from_str(toml).expect_err("unknown top-level section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("logging"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// A misspelled [assistant] key comes back as an UnknownKey diagnostic with
/// a "did you mean" suggestion and the section's valid keys.
#[test]
fn misspelled_assistant_key_gets_a_suggestion() {
    let toml = r#"
[assistant]
greting = "hello"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    assert!(!errors.is_empty(), "should have at least one error");

    let has_unknown_key = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "greting"
                && suggestion.as_deref() == Some("greeting")
                && valid_keys.iter().any(|k| k == "name")
        })
    });
    assert!(
        has_unknown_key,
        "should have UnknownKey error for 'greting' with suggestion 'greeting', got: {errors:?}"
    );
}

/// A misspelled [chat] key is suggested against the chat section's keys, not
/// some other section's.
#[test]
fn misspelled_chat_key_suggests_within_its_section() {
    let toml = r#"
[chat]
typing_dely_ms = 500
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    let suggested = errors.iter().find_map(|e| match e {
        ConfigError::UnknownKey { suggestion, .. } => suggestion.clone(),
        _ => None,
    });
    assert_eq!(suggested.as_deref(), Some("typing_delay_ms"));
}

/// Direct suggestion lookups: a near miss suggests, a distant key does not.
#[test]
fn suggestion_threshold_filters_distant_keys() {
    let valid_keys = &["name", "log_level", "greeting"];
    assert_eq!(
        suggest_key("greting", valid_keys),
        Some("greeting".to_string())
    );
    assert!(suggest_key("zzzzzz", valid_keys).is_none());
}

/// Invalid type (string where number expected) produces a clear message.
#[test]
fn diagnostic_invalid_type_message() {
    let toml = r#"
[chat]
typing_delay_ms = "slow"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("typing_delay_ms"),
        "error should mention type mismatch, got: {err_str}"
    );
}

/// A topics entry without a body surfaces as MissingKey with topic-entry help.
#[test]
fn topic_entry_missing_body_names_the_field() {
    use miette::Diagnostic;

    let toml = r#"
[[catalog.topics]]
key = "availability"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    let missing = errors
        .iter()
        .find(|e| matches!(e, ConfigError::MissingKey { key } if key == "body"))
        .expect("should report the missing body field");
    let help = missing.help().expect("missing-key help text").to_string();
    assert!(help.contains("[[catalog.topics]]"), "got help: {help}");
}

/// UnknownKey renders through miette with code, help, and the key name.
#[test]
fn unknown_key_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "greting".to_string(),
        suggestion: Some("greeting".to_string()),
        valid_keys: vec![
            "name".to_string(),
            "log_level".to_string(),
            "greeting".to_string(),
        ],
        span: None,
        src: None,
    };

    assert!(error.code().is_some(), "should have diagnostic code");
    let help = error.help().expect("help text").to_string();
    assert!(
        help.contains("did you mean `greeting`"),
        "help should contain suggestion, got: {help}"
    );

    let handler = GraphicalReportHandler::new();
    let mut buf = String::new();
    handler
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(buf.contains("greting"), "rendered report should mention the key");
}

/// load_and_validate_str with valid TOML returns Ok config.
#[test]
fn load_and_validate_valid_toml() {
    let toml = r#"
[assistant]
name = "test"
"#;

    let config = load_and_validate_str(toml).expect("valid TOML should validate");
    assert_eq!(config.assistant.name, "test");
}

/// Validation catches a duplicate topic key through the full load path.
#[test]
fn validation_catches_duplicate_topic_key() {
    let toml = r#"
[[catalog.topics]]
key = "pricing"
body = "one"

[[catalog.topics]]
key = "pricing"
body = "two"
"#;

    let errors = load_and_validate_str(toml).expect_err("duplicate key should fail");
    let has_validation_error = errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("duplicate topic key"))
    });
    assert!(
        has_validation_error,
        "should have validation error for duplicate topic key"
    );
}
