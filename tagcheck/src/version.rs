/// Get the version string for tagcheck and libtagcheck
pub fn get_version_string() -> String {
    format!(
        "tagcheck {}\nlibtagcheck {}",
        env!("CARGO_PKG_VERSION"),
        libtagcheck::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
