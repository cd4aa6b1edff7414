//! # Client Configuration
//!
//! Loads settings for talking to the dashboard REST API and for laying out
//! the weekly grid.
//!
//! ## Environment Variables
//!
//! - `SLOTDESK_API_URL`: Base URL of the REST API (required)
//! - `SLOTDESK_API_TOKEN`: Bearer token sent with every request
//! - `SLOTDESK_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `SLOTDESK_START_HOUR`: First hour of the grid (default: 0)
//! - `SLOTDESK_END_HOUR`: Hour the grid ends at (default: 24)
//! - `SLOTDESK_SLOT_MINUTES`: Slot duration in minutes (default: 60)
//! - `LOG_LEVEL`: Logging level (default: "info")

use eyre::{Result, WrapErr};
use slotdesk_core::grid::SlotGrid;
use std::{env, time::Duration};
use tracing::Level;

/// Configuration for the SlotDesk API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API, without a trailing slash
    pub api_url: String,

    /// Bearer token (optional)
    pub api_token: Option<String>,

    /// Request timeout in seconds
    pub timeout_seconds: u64,

    pub start_hour: u32,
    pub end_hour: u32,
    pub slot_minutes: u32,

    /// Log level for the application
    pub log_level: Level,
}

impl ClientConfig {
    /// Creates a new ClientConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `SLOTDESK_API_URL` is not set
    /// - one of the grid settings is not a number
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("SLOTDESK_API_URL")
            .wrap_err("SLOTDESK_API_URL environment variable must be set")?;

        let api_token = env::var("SLOTDESK_API_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());

        let timeout_seconds = env::var("SLOTDESK_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        let start_hour = env::var("SLOTDESK_START_HOUR")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .wrap_err("Invalid SLOTDESK_START_HOUR value")?;
        let end_hour = env::var("SLOTDESK_END_HOUR")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .wrap_err("Invalid SLOTDESK_END_HOUR value")?;
        let slot_minutes = env::var("SLOTDESK_SLOT_MINUTES")
            .unwrap_or_else(|_| "60".to_string())
            .parse()
            .wrap_err("Invalid SLOTDESK_SLOT_MINUTES value")?;

        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_default());

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_token,
            timeout_seconds,
            start_hour,
            end_hour,
            slot_minutes,
            log_level,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Grid built from the configured hours; out-of-range hours are clamped.
    pub fn grid(&self) -> Result<SlotGrid> {
        SlotGrid::new(self.start_hour, self.end_hour, self.slot_minutes)
            .wrap_err("Invalid grid configuration")
    }
}

/// Unknown levels fall back to `info`.
pub fn parse_log_level(raw: &str) -> Level {
    match raw {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
