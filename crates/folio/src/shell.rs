// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `folio shell` command implementation.
//!
//! Launches an interactive chat with colored prompt, readline history, and a
//! simulated-typing indicator. Creates a new session per invocation; the
//! transcript lives only for the life of the process.

use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use folio_config::FolioConfig;
use folio_core::FolioError;
use folio_responder::KeywordResponder;
use folio_session::{ChatSession, JitterDelay, TypingDelay};
use indicatif::{ProgressBar, ProgressStyle};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::info;

/// Runs the `folio shell` interactive chat loop.
///
/// Builds the catalog with config overrides applied, seeds the transcript
/// with the greeting, and answers each line until `/quit` or EOF.
pub async fn run_shell(config: &FolioConfig) -> Result<(), FolioError> {
    let catalog = folio_catalog::builtin().with_overrides(&config.catalog);
    let greeting = config
        .assistant
        .greeting
        .clone()
        .unwrap_or_else(|| catalog.greeting().to_string());

    let responder = Arc::new(KeywordResponder::new(catalog));
    let delay: Arc<dyn TypingDelay> = Arc::new(JitterDelay::from_millis(
        config.chat.typing_delay_ms,
        config.chat.typing_jitter_ms,
    ));
    let mut session = ChatSession::new(responder, delay);

    info!(session_id = session.id().0.as_str(), "shell session started");

    let mut rl = DefaultEditor::new()
        .map_err(|e| FolioError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", config.assistant.name.bold().green());
    println!("Type {} to exit.\n", "/quit".yellow());

    if let Some(msg) = session.greet(&greeting) {
        print_reply(&config.assistant.name, &msg.text);
    }

    let prompt = format!("{}> ", "you".cyan());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == "/quit" || trimmed == "/exit" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                let spinner = if config.chat.show_typing_indicator {
                    Some(typing_spinner(&config.assistant.name))
                } else {
                    None
                };

                let reply = session
                    .submit(trimmed)
                    .await
                    .map(|m| m.text.clone());

                if let Some(spinner) = spinner {
                    spinner.finish_and_clear();
                }

                if let Some(text) = reply {
                    print_reply(&config.assistant.name, &text);
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    info!(
        session_id = session.id().0.as_str(),
        messages = session.transcript().len(),
        "shell session ended"
    );

    println!("{}", "goodbye".dimmed());
    Ok(())
}

/// Prints a bot reply, indenting continuation lines under the name tag.
fn print_reply(name: &str, text: &str) {
    let tag = format!("{name}> ").green();
    let mut lines = text.lines();
    if let Some(first) = lines.next() {
        println!("{tag}{first}");
    }
    let indent = " ".repeat(name.len() + 2);
    for line in lines {
        println!("{indent}{line}");
    }
    println!();
}

/// Spinner shown while the typing delay runs.
fn typing_spinner(name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("{name} is typing..."));
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_prefers_configured_text() {
        let config: FolioConfig =
            folio_config::load_and_validate_str("[assistant]\ngreeting = \"custom hello\"\n")
                .expect("valid config");
        let catalog = folio_catalog::builtin().with_overrides(&config.catalog);
        let greeting = config
            .assistant
            .greeting
            .clone()
            .unwrap_or_else(|| catalog.greeting().to_string());
        assert_eq!(greeting, "custom hello");
    }

    #[test]
    fn greeting_falls_back_to_builtin() {
        let config = FolioConfig::default();
        let catalog = folio_catalog::builtin().with_overrides(&config.catalog);
        let greeting = config
            .assistant
            .greeting
            .clone()
            .unwrap_or_else(|| catalog.greeting().to_string());
        assert_eq!(greeting, folio_catalog::builtin().greeting());
    }
}
