//! Authentication handling for the GitHub REST API.
//!
//! The access token is an opaque secret. It only ever leaves this module as
//! the value of an `Authorization` header, and the `Debug` output of
//! [`Credentials`] never contains it.

use std::fmt;


/// Credentials for API authentication.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// No authentication (public repositories only)
    Anonymous,

    /// Classic GitHub token scheme: `Authorization: token <token>`
    Token {
        /// The access token
        token: String,
    },

    /// OAuth2-style bearer scheme: `Authorization: Bearer <token>`
    Bearer {
        /// The bearer token
        token: String,
    },
}

impl Credentials {
    /// Creates anonymous credentials.
    pub fn anonymous() -> Self {
        Self::Anonymous
    }

    /// Creates credentials that authenticate with the `token` scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagcheck::auth::Credentials;
    ///
    /// let creds = Credentials::token("abc123");
    /// assert_eq!(creds.to_header_value().as_deref(), Some("token abc123"));
    /// ```
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token {
            token: token.into(),
        }
    }

    /// Creates Bearer token credentials.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtagcheck::auth::Credentials;
    ///
    /// let creds = Credentials::bearer("abc123");
    /// assert_eq!(creds.to_header_value().as_deref(), Some("Bearer abc123"));
    /// ```
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Returns the Authorization header value for these credentials.
    pub fn to_header_value(&self) -> Option<String> {
        match self {
            Self::Anonymous => None,
            Self::Token { token } => Some(format!("token {}", token)),
            Self::Bearer { token } => Some(format!("Bearer {}", token)),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("Anonymous"),
            Self::Token { .. } => f.debug_struct("Token").field("token", &REDACTED).finish(),
            Self::Bearer { .. } => f.debug_struct("Bearer").field("token", &REDACTED).finish(),
        }
    }
}

/// Placeholder printed wherever a secret would otherwise appear.
pub(crate) const REDACTED: Redacted = Redacted;

#[derive(Clone, Copy)]
pub(crate) struct Redacted;

impl fmt::Debug for Redacted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}
