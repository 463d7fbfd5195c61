//! HTTP client for the GitHub REST API.
//!
//! This module provides a thin blocking HTTP client built on reqwest. It knows
//! exactly one endpoint, the git tag reference lookup
//! `GET /repos/{owner}/{repo}/git/refs/tags/{tag}`, and classifies its
//! answer into a [`TagStatus`].

use crate::auth::Credentials;
use crate::error::{Result, TagCheckError};
use log::{debug, trace};
use reqwest::StatusCode;
use reqwest::blocking::Client as ReqwestClient;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use std::time::Duration;


/// Base URL of the public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type GitHub recommends for REST v3 requests.
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Whether a tag reference exists in a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStatus {
    /// The API answered 200: the tag reference exists
    Exists,
    /// The API answered 404: the tag reference does not exist
    Absent,
}

impl TagStatus {
    /// Returns `true` for [`TagStatus::Exists`].
    pub fn exists(self) -> bool {
        matches!(self, Self::Exists)
    }

    /// Classifies an HTTP status code.
    ///
    /// Only 200 and 404 carry an answer; every other status yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagcheck::client::TagStatus;
    /// use reqwest::StatusCode;
    ///
    /// assert_eq!(TagStatus::from_status(StatusCode::OK), Some(TagStatus::Exists));
    /// assert_eq!(TagStatus::from_status(StatusCode::NOT_FOUND), Some(TagStatus::Absent));
    /// assert_eq!(TagStatus::from_status(StatusCode::FORBIDDEN), None);
    /// ```
    pub fn from_status(status: StatusCode) -> Option<Self> {
        match status {
            StatusCode::OK => Some(Self::Exists),
            StatusCode::NOT_FOUND => Some(Self::Absent),
            _ => None,
        }
    }
}

impl From<TagStatus> for bool {
    fn from(status: TagStatus) -> Self {
        status.exists()
    }
}

/// Configuration for the HTTP client.
///
/// # Examples
///
/// ```
/// use libtagcheck::client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_timeout(60)
///     .with_user_agent("release-bot/1.0");
/// assert_eq!(config.timeout_seconds, Some(60));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: none, the request blocks until answered)
    pub timeout_seconds: Option<u64>,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: None,
            user_agent: format!("tagcheck/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Sets the User-Agent header value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP client for tag reference lookups.
#[derive(Debug, Clone)]
pub struct Client {
    /// The underlying HTTP client
    http_client: ReqwestClient,
    /// Base API URL (e.g., "https://api.github.com")
    api_url: String,
}

impl Client {
    /// Creates a new client for the given API base URL with default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagcheck::client::Client;
    ///
    /// let client = Client::new("https://api.github.com").unwrap();
    /// assert_eq!(client.api_url(), "https://api.github.com");
    /// ```
    pub fn new(api_url: &str) -> Result<Self> {
        Self::with_config(api_url, ClientConfig::default())
    }

    /// Creates a new client for the given API base URL with custom configuration.
    pub fn with_config(api_url: &str, config: ClientConfig) -> Result<Self> {
        let normalized_url = Self::normalize_url(api_url)?;

        let http_client = ReqwestClient::builder()
            .timeout(config.timeout_seconds.map(Duration::from_secs))
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| TagCheckError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            http_client,
            api_url: normalized_url,
        })
    }

    /// Normalizes an API URL by ensuring it has a scheme and removing trailing slashes.
    fn normalize_url(url: &str) -> Result<String> {
        let url = url.trim();

        if url.is_empty() {
            return Err(TagCheckError::validation("API URL cannot be empty"));
        }

        let url = if !url.starts_with("http://") && !url.starts_with("https://") {
            format!("https://{}", url)
        } else {
            url.to_string()
        };

        Ok(url.trim_end_matches('/').to_string())
    }

    /// Returns the base API URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Builds the tag reference URL for a repository and tag.
    ///
    /// Neither value is validated or escaped.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagcheck::client::Client;
    ///
    /// let client = Client::new("https://api.github.com").unwrap();
    /// assert_eq!(
    ///     client.tag_ref_url("acme/widget", "v1.2.3"),
    ///     "https://api.github.com/repos/acme/widget/git/refs/tags/v1.2.3"
    /// );
    /// ```
    pub fn tag_ref_url(&self, repository: &str, tag: &str) -> String {
        format!("{}/repos/{}/git/refs/tags/{}", self.api_url, repository, tag)
    }

    /// Checks whether `tag` exists in `repository`.
    ///
    /// Issues exactly one GET request. There is no retry.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API is unreachable or the request times out
    /// - The credentials cannot be encoded as a header value
    /// - The API answers with any status other than 200 or 404
    pub fn check_tag(
        &self,
        repository: &str,
        tag: &str,
        credentials: &Credentials,
    ) -> Result<TagStatus> {
        let url = self.tag_ref_url(repository, tag);
        debug!("GET {}", url);

        let mut request = self
            .http_client
            .get(&url)
            .header(ACCEPT, GITHUB_MEDIA_TYPE);

        if let Some(value) = credentials.to_header_value() {
            let mut header = HeaderValue::from_str(&value).map_err(|_| {
                TagCheckError::validation("Access token contains characters not allowed in a header")
            })?;
            header.set_sensitive(true);
            request = request.header(AUTHORIZATION, header);
        }

        let response = request
            .send()
            .map_err(|e| Self::translate_reqwest_error(e, &self.api_url))?;

        let status = response.status();
        debug!("{} answered {}", url, status.as_u16());

        if let Some(tag_status) = TagStatus::from_status(status) {
            return Ok(tag_status);
        }

        let body = response
            .text()
            .unwrap_or_else(|_| String::from("(unable to read response body)"));
        trace!("unexpected response body: {}", body);

        Err(TagCheckError::unexpected_status(status.as_u16(), body))
    }

    /// Translates a reqwest error into a TagCheckError.
    fn translate_reqwest_error(error: reqwest::Error, api_url: &str) -> TagCheckError {
        if error.is_timeout() {
            TagCheckError::network_with_source(format!("Request to {} timed out", api_url), error)
        } else if error.is_connect() {
            TagCheckError::network_with_source(format!("Failed to connect to {}", api_url), error)
        } else if error.is_builder() {
            TagCheckError::validation(format!("Invalid request URL for {}", api_url))
        } else {
            TagCheckError::network_with_source(
                format!("Network error communicating with {}", api_url),
                error,
            )
        }
    }
}
