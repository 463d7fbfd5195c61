//! tagcheck - Git Tag Existence Checks
//!
//! libtagcheck asks the GitHub REST API whether a tag reference exists in a
//! repository. It is the engine behind the `tagcheck` CLI, which release
//! pipelines use to skip work for versions that were already tagged.
//!
//! # Quick Start
//!
//! ```no_run
//! use libtagcheck::{Credentials, TagChecker, TagStatus};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let checker = TagChecker::new(Credentials::token("ghp_example"))?;
//!
//!     match checker.check("acme/widget", "v1.2.3")? {
//!         TagStatus::Exists => println!("tag exists"),
//!         TagStatus::Absent => println!("tag is free"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`TagChecker`] - Main entry point for lookups
//! - [`TagStatus`] - The answer of a lookup
//! - [`Settings`] - Settings resolved from `GITHUB_*` environment variables
//! - [`Credentials`] - Authentication credentials
//! - [`TagCheckError`] - Everything that can go wrong

#![warn(clippy::all)]

/// Returns the libtagcheck crate version.
///
/// # Examples
///
/// ```
/// let version = libtagcheck::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

mod checker;
pub use checker::{TagChecker, TagCheckerBuilder, check_tag_exists};

pub use auth::Credentials;
pub use client::{ClientConfig, TagStatus};
pub use config::Settings;
pub use error::{Result, TagCheckError};

#[doc(hidden)]
pub mod auth;
#[doc(hidden)]
pub mod client;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod error;
