use super::*;

#[test]
fn parse_accepts_username_body() {
    let resp = parse_is_logged_in(r#"{"Response":"carol"}"#).unwrap();
    assert_eq!(resp.username(), Some("carol"));
}

#[test]
fn parse_rejects_non_json() {
    let err = parse_is_logged_in("<html>login</html>").unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
    assert!(err.to_string().starts_with("response parse failed"));
}

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status(401).to_string(), "unexpected status: 401");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn is_logged_in_is_unavailable_off_browser() {
    let result = futures::executor::block_on(RestClient::new("/x").is_logged_in());
    assert!(matches!(result, Err(ApiError::Unavailable)));
}
