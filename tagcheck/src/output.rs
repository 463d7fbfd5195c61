//! Step outputs for GitHub Actions.
//!
//! The result is always printed as a legacy `::set-output` workflow command on
//! stdout. When the runner provides a `GITHUB_OUTPUT` file, the same value is
//! also appended there as `name=value`.

use libtagcheck::{Result, TagCheckError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Name of the step output carrying the answer
pub const OUTPUT_NAME: &str = "exists";

/// Render a legacy `::set-output` workflow command
pub fn set_output_command(name: &str, value: &str) -> String {
    format!("::set-output name={}::{}", name, value)
}

/// Append `name=value` to a step output file
pub fn append_output_file(path: &Path, name: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TagCheckError::output_with_source("Failed to open output file", path, e))?;

    writeln!(file, "{}={}", name, value)
        .map_err(|e| TagCheckError::output_with_source("Failed to write output file", path, e))
}

/// Emit the lookup result to `out` and, if given, to the output file
pub fn emit<W: Write>(out: &mut W, output_file: Option<&Path>, exists: bool) -> Result<()> {
    let value = if exists { "true" } else { "false" };

    writeln!(out, "{}", set_output_command(OUTPUT_NAME, value))
        .map_err(|e| TagCheckError::output_with_source("Failed to write to stdout", "<stdout>", e))?;

    if let Some(path) = output_file {
        log::debug!("appending {}={} to {}", OUTPUT_NAME, value, path.display());
        append_output_file(path, OUTPUT_NAME, value)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
