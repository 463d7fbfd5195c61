//! Basic usage example for libtagcheck.
//!
//! Looks up a tag using the same environment variables the CLI reads.
//!
//! Run with: GITHUB_REPOSITORY=owner/name GITHUB_TOKEN=... cargo run --example check_tag -- v1.0.0

use libtagcheck::{ClientConfig, Settings, TagChecker, TagStatus};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tag = std::env::args().nth(1).unwrap_or_else(|| "v0.1.0".to_string());

    let settings = Settings::from_env()?;
    let checker = TagChecker::from_settings(&settings, ClientConfig::new().with_timeout(10))?;

    println!("Checking {} for tag '{}'...", settings.repository, tag);
    match checker.check(&settings.repository, &tag) {
        Ok(TagStatus::Exists) => println!("✓ Tag exists"),
        Ok(TagStatus::Absent) => println!("✓ Tag does not exist"),
        Err(e) => {
            eprintln!("✗ Lookup failed: {}", e);
            if let Some(code) = e.status_code() {
                eprintln!("  The API answered with HTTP {}", code);
            }
        }
    }

    Ok(())
}
