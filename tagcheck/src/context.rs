//! Application context that holds resolved configuration
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Environment variables (`GITHUB_*`)
//! 3. CLI flags
//!
//! Once built, the context is passed as read-only throughout the application.

use crate::format::ColorChoice;
use libtagcheck::{ClientConfig, Result, Settings};

/// How much diagnostic output to produce, from repeated `-v` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Warnings and errors only
    Normal,
    /// Informational messages (-v)
    Verbose,
    /// Request details (-vv)
    Debug,
    /// Everything, including response bodies (-vvv)
    Trace,
}

impl VerbosityLevel {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Default `env_logger` filter for this level
    pub fn log_filter(self) -> &'static str {
        match self {
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Install the logger. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(color: ColorChoice, verbosity: VerbosityLevel) {
    let write_style = match color {
        ColorChoice::Auto => env_logger::WriteStyle::Auto,
        ColorChoice::Always => env_logger::WriteStyle::Always,
        ColorChoice::Never => env_logger::WriteStyle::Never,
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(verbosity.log_filter()),
    )
    .format_timestamp(None)
    .target(env_logger::Target::Stderr)
    .write_style(write_style)
    .init();
}

/// Application context with resolved configuration
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Repository, token, API URL and output file
    pub settings: Settings,
    /// HTTP client configuration
    pub client_config: ClientConfig,
    /// Resolved color choice for diagnostics
    pub color: ColorChoice,
}

impl AppContext {
    /// Build context from the process environment and CLI flags
    pub fn build(
        color: ColorChoice,
        api_url: Option<&str>,
        timeout: Option<u64>,
    ) -> Result<Self> {
        let settings = Settings::from_env()?;
        Ok(Self::from_settings(settings, color, api_url, timeout))
    }

    /// Apply CLI flag overrides on top of already resolved settings
    pub fn from_settings(
        mut settings: Settings,
        color: ColorChoice,
        api_url: Option<&str>,
        timeout: Option<u64>,
    ) -> Self {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            settings.api_url = url.to_string();
        }

        let mut client_config = ClientConfig::new();
        if let Some(seconds) = timeout {
            client_config = client_config.with_timeout(seconds);
        }

        Self {
            settings,
            client_config,
            color,
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
