mod ai;
mod app;
mod config;
mod constants;
mod credentials;
mod input;
mod task;
mod ui;

use anyhow::Result;
use std::env;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::config::Config;
use crate::credentials::api_key_from_env;

fn setup_logging() {
    use std::fs::OpenOptions;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,quill=debug"));

    // Log to a file in the config directory; the terminal belongs to the TUI
    let log_file = Config::config_dir()
        .ok()
        .map(|dir| dir.join("quill.log"))
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
                .ok()
        });

    if let Some(file) = log_file {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        // Fallback to stderr if file logging fails
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_usage() {
    eprintln!(
        r#"quill - Terminal AI writing assistant

Usage: quill [command]

Commands:
    (none)      Start the assistant
    help        Show this help message

The Gemini API key is read from the GEMINI_API_KEY environment variable:
    export GEMINI_API_KEY='your-key'
    quill

Configuration file (optional): ~/.config/quill/config.toml
"#
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
        None => {
            setup_logging();

            let config = Config::load()?;
            config.ensure_dirs()?;

            // Initialize theme from config
            crate::ui::theme::init_theme(config.ui.theme);

            // The credential is resolved exactly once, here. A missing key
            // still starts the app, but only the config-error screen renders.
            let api_key = api_key_from_env();

            let mut app = App::new(config, api_key)?;
            app.run().await
        }
    }
}
