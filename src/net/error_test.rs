use super::*;

#[test]
fn rejected_displays_backend_detail_verbatim() {
    let detail = "Authentication failed: Invalid credentials";
    let err = AuthError::Rejected(detail.to_owned());
    assert_eq!(err.to_string(), detail);
}

#[test]
fn unreachable_displays_generic_connectivity_message() {
    assert_eq!(AuthError::Unreachable.to_string(), CONNECTIVITY_MESSAGE);
}

#[test]
fn malformed_response_displays_generic_message() {
    let rendered = AuthError::MalformedResponse.to_string();
    assert_eq!(rendered, UNEXPECTED_RESPONSE_MESSAGE);
}

#[test]
fn api_error_message_prefers_detail() {
    let err = ApiError::Status {
        status: 500,
        detail: Some("System Error: model missing".to_owned()),
    };
    assert_eq!(err.message(), "System Error: model missing");
}

#[test]
fn api_error_message_without_detail_is_generic() {
    let bare_status = ApiError::Status {
        status: 502,
        detail: None,
    };
    assert_eq!(bare_status.message(), SERVER_ERROR_MESSAGE);
    let decode = ApiError::Decode("eof".to_owned());
    assert_eq!(decode.message(), SERVER_ERROR_MESSAGE);
    let network = ApiError::Network("offline".to_owned());
    assert_eq!(network.message(), CONNECTIVITY_MESSAGE);
}
