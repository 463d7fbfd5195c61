use libtagcheck::{ClientConfig, Credentials, TagCheckError, TagChecker, TagStatus};

#[test]
fn test_tag_checker_builder_chaining() {
    let checker = TagChecker::builder()
        .api_url("http://localhost:8080")
        .credentials(Credentials::token("abc123"))
        .client_config(ClientConfig::new().with_timeout(5))
        .build()
        .unwrap();

    assert_eq!(checker.api_url(), "http://localhost:8080");
}

#[test]
fn test_version_is_exposed() {
    assert_eq!(libtagcheck::version(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_lookup_through_public_api() {
    let mut server = mockito::Server::new();
    let exists = server
        .mock("GET", "/repos/acme/widget/git/refs/tags/v1.2.3")
        .with_status(200)
        .create();
    let missing = server
        .mock("GET", "/repos/acme/widget/git/refs/tags/v2.0.0")
        .with_status(404)
        .create();
    let forbidden = server
        .mock("GET", "/repos/acme/private/git/refs/tags/v1.2.3")
        .with_status(403)
        .with_body("forbidden")
        .create();

    let checker = TagChecker::builder()
        .api_url(server.url())
        .credentials(Credentials::token("abc123"))
        .build()
        .unwrap();

    assert_eq!(
        checker.check("acme/widget", "v1.2.3").unwrap(),
        TagStatus::Exists
    );
    assert_eq!(
        checker.check("acme/widget", "v2.0.0").unwrap(),
        TagStatus::Absent
    );
    let err = checker.check("acme/private", "v1.2.3").unwrap_err();
    assert!(matches!(
        err,
        TagCheckError::UnexpectedStatus {
            status_code: 403,
            ..
        }
    ));

    exists.assert();
    missing.assert();
    forbidden.assert();
}
