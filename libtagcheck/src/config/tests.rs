use super::*;
use std::path::Path;

fn vars(pairs: &[(&str, &str)]) -> config::Map<String, String> {
    let mut map = config::Map::new();
    for (key, value) in pairs {
        map.insert(key.to_string(), value.to_string());
    }
    map
}

#[test]
fn test_settings_from_required_vars() {
    let settings = Settings::from_vars(vars(&[
        ("GITHUB_REPOSITORY", "acme/widget"),
        ("GITHUB_TOKEN", "abc123"),
    ]))
    .unwrap();

    assert_eq!(settings.repository, "acme/widget");
    assert_eq!(settings.token, "abc123");
    assert_eq!(settings.api_url, DEFAULT_API_URL);
    assert_eq!(settings.output_file, None);
}

#[test]
fn test_settings_with_optional_vars() {
    let settings = Settings::from_vars(vars(&[
        ("GITHUB_REPOSITORY", "acme/widget"),
        ("GITHUB_TOKEN", "abc123"),
        ("GITHUB_API_URL", "https://github.example.com/api/v3"),
        ("GITHUB_OUTPUT", "/tmp/step-output"),
    ]))
    .unwrap();

    assert_eq!(settings.api_url, "https://github.example.com/api/v3");
    assert_eq!(
        settings.output_file.as_deref(),
        Some(Path::new("/tmp/step-output"))
    );
}

#[test]
fn test_settings_ignore_unrelated_vars() {
    let settings = Settings::from_vars(vars(&[
        ("GITHUB_REPOSITORY", "acme/widget"),
        ("GITHUB_TOKEN", "abc123"),
        ("GITHUB_RUN_ID", "42"),
        ("GITHUB_ACTIONS", "true"),
        ("HOME", "/root"),
    ]))
    .unwrap();

    assert_eq!(settings.repository, "acme/widget");
}

#[test]
fn test_settings_values_are_not_parsed() {
    // A numeric-looking token must stay a string
    let settings = Settings::from_vars(vars(&[
        ("GITHUB_REPOSITORY", "acme/widget"),
        ("GITHUB_TOKEN", "0012345"),
    ]))
    .unwrap();

    assert_eq!(settings.token, "0012345");
}

#[test]
fn test_settings_missing_token() {
    let err = Settings::from_vars(vars(&[("GITHUB_REPOSITORY", "acme/widget")])).unwrap_err();

    assert!(matches!(err, TagCheckError::Config { .. }));
    let message = err.to_string();
    assert!(message.contains("GITHUB_REPOSITORY"));
    assert!(message.contains("GITHUB_TOKEN"));
    assert!(message.ends_with("(missing: GITHUB_TOKEN)"));
}

#[test]
fn test_settings_missing_repository() {
    let err = Settings::from_vars(vars(&[("GITHUB_TOKEN", "abc123")])).unwrap_err();

    assert!(err.to_string().ends_with("(missing: GITHUB_REPOSITORY)"));
}

#[test]
fn test_settings_missing_both() {
    let err = Settings::from_vars(vars(&[])).unwrap_err();

    assert!(
        err.to_string()
            .ends_with("(missing: GITHUB_REPOSITORY, GITHUB_TOKEN)")
    );
}

#[test]
fn test_settings_empty_values_count_as_missing() {
    let err = Settings::from_vars(vars(&[
        ("GITHUB_REPOSITORY", ""),
        ("GITHUB_TOKEN", "abc123"),
    ]))
    .unwrap_err();

    assert!(matches!(err, TagCheckError::Config { .. }));
    assert!(err.to_string().contains("missing: GITHUB_REPOSITORY"));
}

#[test]
fn test_settings_empty_api_url_falls_back_to_default() {
    let settings = Settings::from_vars(vars(&[
        ("GITHUB_REPOSITORY", "acme/widget"),
        ("GITHUB_TOKEN", "abc123"),
        ("GITHUB_API_URL", ""),
        ("GITHUB_OUTPUT", ""),
    ]))
    .unwrap();

    assert_eq!(settings.api_url, DEFAULT_API_URL);
    assert_eq!(settings.output_file, None);
}

#[test]
fn test_settings_credentials_use_token_scheme() {
    let settings = Settings::from_vars(vars(&[
        ("GITHUB_REPOSITORY", "acme/widget"),
        ("GITHUB_TOKEN", "abc123"),
    ]))
    .unwrap();

    assert_eq!(settings.credentials(), Credentials::token("abc123"));
}

#[test]
fn test_settings_debug_redacts_token() {
    let settings = Settings::from_vars(vars(&[
        ("GITHUB_REPOSITORY", "acme/widget"),
        ("GITHUB_TOKEN", "super-secret-value"),
    ]))
    .unwrap();

    let debug = format!("{:?}", settings);
    assert!(debug.contains("acme/widget"));
    assert!(!debug.contains("super-secret-value"));
}

#[test]
fn test_settings_lowercase_token_does_not_count() {
    let err = Settings::from_vars(vars(&[
        ("GITHUB_REPOSITORY", "acme/widget"),
        ("github_token", "abc123"),
    ]))
    .unwrap_err();

    assert!(matches!(err, TagCheckError::Config { .. }));
    assert!(err.to_string().ends_with("(missing: GITHUB_TOKEN)"));
}

#[test]
fn test_settings_mixed_case_names_are_ignored() {
    let err = Settings::from_vars(vars(&[
        ("Github_Repository", "acme/widget"),
        ("GitHub_Token", "abc123"),
    ]))
    .unwrap_err();

    assert!(
        err.to_string()
            .ends_with("(missing: GITHUB_REPOSITORY, GITHUB_TOKEN)")
    );
}

#[test]
fn test_settings_lowercase_api_url_is_ignored() {
    let settings = Settings::from_vars(vars(&[
        ("GITHUB_REPOSITORY", "acme/widget"),
        ("GITHUB_TOKEN", "abc123"),
        ("github_api_url", "http://127.0.0.1:9"),
    ]))
    .unwrap();

    assert_eq!(settings.api_url, DEFAULT_API_URL);
}
