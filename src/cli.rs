//! Command-line argument parsing for routerlab.
//!
//! Uses clap to select the front end (interactive console, headless, batch
//! or line server) and to override configuration values.

use crate::config::{Config, WireFormat};
use crate::error::{Result, SimError};
use crate::tui::headless::{parse_size, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

/// A branch-office router CLI simulator.
#[derive(Parser, Debug)]
#[command(name = "routerlab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH", env = "ROUTERLAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Initial device hostname (overrides config)
    #[arg(long, value_name = "NAME")]
    pub hostname: Option<String>,

    // === Batch and server options ===
    /// Run each line of FILE through one session and print the transcript ("-" for stdin)
    #[arg(long, value_name = "FILE", conflicts_with_all = ["serve", "headless"])]
    pub batch: Option<String>,

    /// Serve isolated sessions over TCP on ADDR (e.g., 127.0.0.1:2323)
    #[arg(
        long,
        value_name = "ADDR",
        num_args = 0..=1,
        default_missing_value = "",
        conflicts_with = "headless"
    )]
    pub serve: Option<String>,

    /// Use JSON framing for the line server
    #[arg(long)]
    pub json: bool,

    // === Headless mode options ===
    /// Run in headless mode (no terminal UI, for testing/automation)
    #[arg(long)]
    pub headless: bool,

    /// Comma-separated events to execute in headless mode (e.g., "line:enable,key:pageup")
    #[arg(long, value_name = "EVENTS")]
    pub events: Option<String>,

    /// Path to script file with events (use "-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub script: Option<String>,

    /// Screen size for headless mode (WIDTHxHEIGHT, e.g., "100x30")
    #[arg(long, value_name = "SIZE", default_value = "100x30")]
    pub size: String,

    /// Output format for headless mode (text, json, frames)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: String,

    /// Write output to file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Stop on first assertion failure
    #[arg(long)]
    pub fail_fast: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Applies command-line overrides on top of a loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref hostname) = self.hostname {
            config.device.hostname = hostname.clone();
        }
        if let Some(ref bind) = self.serve {
            if !bind.is_empty() {
                config.server.bind = bind.clone();
            }
        }
        if self.json {
            config.server.format = WireFormat::Json;
        }
    }

    /// Returns true if the line server was requested.
    pub fn is_server(&self) -> bool {
        self.serve.is_some()
    }

    /// Parses the screen size from the --size argument.
    pub fn parse_screen_size(&self) -> Result<(u16, u16)> {
        parse_size(&self.size)
    }

    /// Parses the output format from the --output argument.
    pub fn parse_output_format(&self) -> Result<OutputFormat> {
        self.output.parse().map_err(SimError::config)
    }

    /// Validates headless mode arguments.
    pub fn validate_headless(&self) -> Result<()> {
        if !self.headless {
            return Ok(());
        }

        if self.events.is_none() && self.script.is_none() {
            return Err(SimError::config("--headless requires --events or --script"));
        }

        self.parse_screen_size()?;
        self.parse_output_format()?;

        Ok(())
    }
}
