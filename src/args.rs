//! Command-line argument definition.

use clap::Parser;

/// CareSeek - A fast TUI for finding doctors and clinics by specialty and location
#[derive(Parser, Debug)]
#[command(name = "careseek")]
#[command(version)]
#[command(about = "A fast TUI for finding doctors and clinics by specialty and location", long_about = None)]
pub struct Args {
    /// Base URL of the provider backend (overrides config and env)
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Run without a terminal UI (used by tests and CI)
    #[arg(long, hide = true)]
    pub headless: bool,
}

impl Args {
    /// Effective log filter directive, with `--verbose` winning over
    /// `--log-level`.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        if self.verbose { "debug" } else { &self.log_level }
    }
}
