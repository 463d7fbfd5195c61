//! High-level API for tag existence checks.
//!
//! # Examples
//!
//! ```no_run
//! use libtagcheck::{Credentials, TagChecker};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let checker = TagChecker::builder()
//!         .credentials(Credentials::token("ghp_example"))
//!         .build()?;
//!
//!     if checker.exists("acme/widget", "v1.2.3")? {
//!         println!("already released");
//!     }
//!     Ok(())
//! }
//! ```

use crate::auth::Credentials;
use crate::client::{Client, ClientConfig, DEFAULT_API_URL, TagStatus};
use crate::config::Settings;
use crate::error::Result;
use log::info;

/// Checks whether tags exist in repositories hosted behind one API.
#[derive(Debug, Clone)]
pub struct TagChecker {
    client: Client,
    credentials: Credentials,
}

impl TagChecker {
    /// Creates a checker for the public GitHub API.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::builder().credentials(credentials).build()
    }

    /// Creates a builder for advanced configuration.
    pub fn builder() -> TagCheckerBuilder {
        TagCheckerBuilder::new()
    }

    /// Creates a checker from resolved settings.
    pub fn from_settings(settings: &Settings, config: ClientConfig) -> Result<Self> {
        Self::builder()
            .api_url(settings.api_url.as_str())
            .credentials(settings.credentials())
            .client_config(config)
            .build()
    }

    /// Returns the base API URL this checker talks to.
    pub fn api_url(&self) -> &str {
        self.client.api_url()
    }

    /// Looks up `tag` in `repository`.
    pub fn check(&self, repository: &str, tag: &str) -> Result<TagStatus> {
        let status = self.client.check_tag(repository, tag, &self.credentials)?;
        info!("tag '{}' in {}: {:?}", tag, repository, status);
        Ok(status)
    }

    /// Returns whether `tag` exists in `repository`.
    pub fn exists(&self, repository: &str, tag: &str) -> Result<bool> {
        self.check(repository, tag).map(TagStatus::exists)
    }
}

/// Builder for [`TagChecker`].
#[derive(Debug, Clone)]
pub struct TagCheckerBuilder {
    api_url: String,
    credentials: Credentials,
    config: ClientConfig,
}

impl Default for TagCheckerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TagCheckerBuilder {
    /// Creates a builder targeting the public GitHub API without credentials.
    pub fn new() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            credentials: Credentials::anonymous(),
            config: ClientConfig::default(),
        }
    }

    /// Sets the API base URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Sets the credentials sent with every lookup.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Sets the HTTP client configuration.
    pub fn client_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the checker.
    ///
    /// # Errors
    ///
    /// Fails if the API URL is empty or the HTTP client cannot be created.
    pub fn build(self) -> Result<TagChecker> {
        let client = Client::with_config(&self.api_url, self.config)?;
        Ok(TagChecker {
            client,
            credentials: self.credentials,
        })
    }
}

/// Returns whether `tag_name` exists in `repository` on the public GitHub API.
///
/// The token is sent as `Authorization: token <token>`. Any answer other than
/// 200 or 404 is an error carrying the status code and response body.
///
/// # Examples
///
/// ```no_run
/// let exists = libtagcheck::check_tag_exists("acme/widget", "v1.2.3", "ghp_example")?;
/// println!("{}", exists);
/// # Ok::<(), libtagcheck::TagCheckError>(())
/// ```
pub fn check_tag_exists(repository: &str, tag_name: &str, token: &str) -> Result<bool> {
    TagChecker::new(Credentials::token(token))?.exists(repository, tag_name)
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
