//! Run settings resolved from the environment.
//!
//! GitHub Actions hands a step its context through `GITHUB_*` environment
//! variables. This module reads them once, at the process boundary, into a
//! [`Settings`] value that is passed explicitly from then on.

use crate::auth::{Credentials, REDACTED};
use crate::client::DEFAULT_API_URL;
use crate::error::{Result, TagCheckError};
use config::{Config as ConfigRs, Environment};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

#[cfg(test)]
mod tests;

/// Repository identifier in `owner/name` form (required).
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
/// Access token (required).
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
/// Base URL of the REST API, set on GitHub Enterprise Server (optional).
pub const API_URL_VAR: &str = "GITHUB_API_URL";
/// Path of the step output file (optional).
pub const OUTPUT_VAR: &str = "GITHUB_OUTPUT";

const ENV_PREFIX: &str = "GITHUB";

/// The only variables read, matched by exact (case-sensitive) name.
const KNOWN_VARS: [&str; 4] = [REPOSITORY_VAR, TOKEN_VAR, API_URL_VAR, OUTPUT_VAR];

/// Raw view of the `GITHUB_*` variables, keys lowercased with the prefix stripped.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    #[serde(default)]
    repository: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    api_url: Option<String>,
    #[serde(default)]
    output: Option<PathBuf>,
}

/// Resolved settings for a single tag lookup.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Repository identifier, `owner/name`
    pub repository: String,
    /// Access token
    pub token: String,
    /// Base URL of the REST API
    pub api_url: String,
    /// File that receives `key=value` step outputs, if any
    pub output_file: Option<PathBuf>,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming both `GITHUB_REPOSITORY` and
    /// `GITHUB_TOKEN` if either is unset or empty.
    pub fn from_env() -> Result<Self> {
        let vars = KNOWN_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok().map(|value| (name.to_string(), value)))
            .collect();
        Self::from_vars(vars)
    }

    /// Reads settings from an explicit variable map instead of the process environment.
    ///
    /// Names are matched exactly; `github_token` does not stand in for `GITHUB_TOKEN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagcheck::config::Settings;
    ///
    /// let mut vars = config::Map::new();
    /// vars.insert("GITHUB_REPOSITORY".to_string(), "acme/widget".to_string());
    /// vars.insert("GITHUB_TOKEN".to_string(), "abc123".to_string());
    ///
    /// let settings = Settings::from_vars(vars).unwrap();
    /// assert_eq!(settings.repository, "acme/widget");
    /// assert_eq!(settings.api_url, "https://api.github.com");
    /// ```
    pub fn from_vars(vars: config::Map<String, String>) -> Result<Self> {
        let vars = vars
            .into_iter()
            .filter(|(name, _)| KNOWN_VARS.contains(&name.as_str()))
            .collect();
        Self::from_environment(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn from_environment(environment: Environment) -> Result<Self> {
        let raw: RawSettings = ConfigRs::builder()
            .add_source(environment)
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| TagCheckError::config_with_source("Failed to read environment", e))?;

        raw.resolve()
    }

    /// Credentials derived from the access token.
    pub fn credentials(&self) -> Credentials {
        Credentials::token(self.token.as_str())
    }
}

impl RawSettings {
    fn resolve(self) -> Result<Settings> {
        let repository = non_empty(self.repository);
        let token = non_empty(self.token);

        let (repository, token) = match (repository, token) {
            (Some(repository), Some(token)) => (repository, token),
            (repository, token) => {
                let missing: Vec<&str> = [
                    repository.is_none().then_some(REPOSITORY_VAR),
                    token.is_none().then_some(TOKEN_VAR),
                ]
                .into_iter()
                .flatten()
                .collect();

                return Err(TagCheckError::config(format!(
                    "{} or {} environment variables are not set (missing: {})",
                    REPOSITORY_VAR,
                    TOKEN_VAR,
                    missing.join(", ")
                )));
            }
        };

        let api_url = non_empty(self.api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let output_file = self.output.filter(|path| !path.as_os_str().is_empty());

        Ok(Settings {
            repository,
            token,
            api_url,
            output_file,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("repository", &self.repository)
            .field("token", &REDACTED)
            .field("api_url", &self.api_url)
            .field("output_file", &self.output_file)
            .finish()
    }
}
