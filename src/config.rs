//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::{countdown::DEFAULT_INPUT_MINUTES, Mode};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "timepiece")]
#[command(about = "A clock, stopwatch and countdown widget served over HTTP")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Mode shown at startup (clock, stopwatch or countdown)
    #[arg(short, long, default_value = "clock")]
    pub mode: Mode,

    /// Minutes pre-filled in the countdown input
    #[arg(long, default_value_t = DEFAULT_INPUT_MINUTES, allow_negative_numbers = true)]
    pub minutes: i64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
