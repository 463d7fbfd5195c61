//! Error types for tagcheck
//!
//! Every failure a tag lookup can hit is represented here. The binary turns
//! any of these into a diagnostic line and a non-zero exit code; nothing in
//! the library terminates the process.

use std::path::PathBuf;
use thiserror::Error;


/// Main error type for tag lookups
#[derive(Error, Debug)]
pub enum TagCheckError {
    /// Network-related errors (connection, timeout, DNS, TLS)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The API answered with a status other than 200 or 404
    #[error("Error: {status_code} - {body}")]
    UnexpectedStatus { status_code: u16, body: String },

    /// Configuration errors (missing or unreadable environment settings)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors (malformed API URL, empty inputs)
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Failure writing the pipeline output file
    #[error("Output error: {message} ({})", .path.display())]
    Output {
        message: String,
        path: PathBuf,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for tagcheck operations
pub type Result<T> = std::result::Result<T, TagCheckError>;

impl TagCheckError {
    /// Creates a new network error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagcheck::error::TagCheckError;
    ///
    /// let err = TagCheckError::network("connection refused");
    /// assert!(matches!(err, TagCheckError::Network { .. }));
    /// ```
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new network error with a source error.
    pub fn network_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an error for a status the lookup does not understand.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagcheck::error::TagCheckError;
    ///
    /// let err = TagCheckError::unexpected_status(403, "Resource not accessible");
    /// assert_eq!(err.to_string(), "Error: 403 - Resource not accessible");
    /// ```
    pub fn unexpected_status<S: Into<String>>(status_code: u16, body: S) -> Self {
        Self::UnexpectedStatus {
            status_code,
            body: body.into(),
        }
    }

    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagcheck::error::TagCheckError;
    ///
    /// let err = TagCheckError::config("GITHUB_TOKEN is not set");
    /// assert!(matches!(err, TagCheckError::Config { .. }));
    /// ```
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    pub fn config_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a new output error with a source error.
    pub fn output_with_source<S, P, E>(message: S, path: P, source: E) -> Self
    where
        S: Into<String>,
        P: Into<PathBuf>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Output {
            message: message.into(),
            path: path.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the HTTP status code carried by the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}
