// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Folio - a keyword-scored portfolio concierge.
//!
//! This is the binary entry point for the Folio CLI.

use clap::{Parser, Subcommand};

mod ask;
mod shell;
mod topics;

/// Folio - a keyword-scored portfolio concierge.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch an interactive chat session.
    Shell,
    /// Answer a single question and exit.
    Ask {
        /// The question text (joined with spaces).
        text: Vec<String>,
    },
    /// List catalog topics, or print one topic's response.
    Topics {
        /// Topic key to print; omit to list all keys.
        key: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match folio_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            folio_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.assistant.log_level);

    let result = match cli.command {
        Some(Commands::Shell) | None => shell::run_shell(&config).await,
        Some(Commands::Ask { text }) => ask::run_ask(&config, &text.join(" ")),
        Some(Commands::Topics { key }) => topics::run_topics(&config, key.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level so ad-hoc debugging
/// never requires editing the config file. Logs go to stderr to keep stdout
/// clean for chat output.
fn init_tracing(configured_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(configured_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed).
        let config = folio_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.assistant.name, "folio");
        assert_eq!(config.chat.typing_delay_ms, 1000);
    }
}
