//! CareSeek binary entrypoint kept minimal. The full runtime lives in `app`.

mod app;
mod args;
mod config;
mod events;
mod logic;
mod sources;
mod state;
mod ui;
mod util;

use std::sync::OnceLock;

use clap::Parser;

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initialize tracing writing to `~/.config/careseek/logs/careseek.log`,
/// falling back to stderr when the log file cannot be opened.
fn init_logging(default_filter: &str) {
    let mut log_path = config::logs_dir();
    log_path.push("careseek.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(cli.log_filter());

    let mut settings = config::load_settings();
    if let Some(url) = cli.backend_url.clone() {
        settings.backend_url = url;
    }
    tracing::info!(backend = %settings.backend_url, "CareSeek starting");
    if let Err(err) = app::run(&settings, cli.headless).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("CareSeek exited");
}
