use aisweb_lib::AisError;

#[test]
fn config_error_display_includes_message() {
    let err = AisError::config("missing base_url");

    assert_eq!(format!("{}", err), "Configuration error: missing base_url");
}

#[test]
fn io_error_display_wraps_source() {
    let io_err = std::io::Error::other("disk full");
    let err: AisError = io_err.into();
    let rendered = format!("{}", err);

    assert!(rendered.starts_with("IO error: "));
    assert!(rendered.contains("disk full"));
}

#[test]
fn navigation_error_names_endpoint_and_attempts() {
    let err = AisError::Navigation {
        endpoint: "?i=cartas".to_string(),
        attempts: 3,
    };

    assert_eq!(
        format!("{}", err),
        "navigation to '?i=cartas' failed after 3 attempts"
    );
}

#[test]
fn element_access_helper_uses_message() {
    let err = AisError::element_access("xpath=//sunrise: timed out");

    assert_eq!(
        format!("{}", err),
        "element access failed: xpath=//sunrise: timed out"
    );
}

#[test]
fn invalid_icao_quotes_the_input() {
    let err = AisError::InvalidIcao("SB".to_string());

    assert_eq!(format!("{}", err), "invalid ICAO code: 'SB'");
}

#[test]
fn exit_codes_split_usage_from_runtime_failures() {
    assert_eq!(AisError::InvalidIcao(String::new()).exit_code(), 2);
    assert_eq!(AisError::config("bad").exit_code(), 2);
    assert_eq!(AisError::Connectivity("refused".to_string()).exit_code(), 1);
    assert_eq!(AisError::SessionClosed.exit_code(), 1);
}
