mod actions;
mod app;
mod catalog;
mod config;
mod error;
mod panel;
mod request;
mod search;
mod state;
mod types;
mod ui;
mod view;

use app::App;
use color_eyre::Result;
use std::fs::OpenOptions;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "api-console-tui.log";

/// Log to a file; the terminal belongs to the UI
fn init_logging() -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(std::env::temp_dir().join(LOG_FILE))?;

    let filter =
        EnvFilter::try_from_env("API_CONSOLE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging()?;

    let app = App::new()?;
    let terminal = ratatui::init();
    let app_result = app.run(terminal).await;
    ratatui::restore();
    app_result
}
