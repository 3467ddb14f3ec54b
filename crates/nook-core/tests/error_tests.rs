use nook_core::NookError;

#[test]
fn test_upstream_error_prefers_error_field() {
    let body = r#"{"error": "Model vennify/t5-base-grammar-correction is currently loading"}"#;
    let error = NookError::from_response_body(503, body);

    match error {
        NookError::Upstream { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(
                message,
                "Model vennify/t5-base-grammar-correction is currently loading"
            );
        }
        _ => panic!("Expected Upstream error, got: {:?}", error),
    }
}

#[test]
fn test_upstream_error_keeps_plain_body() {
    let error = NookError::from_response_body(502, "Bad Gateway");

    match error {
        NookError::Upstream { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        _ => panic!("Expected Upstream error, got: {:?}", error),
    }
}

#[test]
fn test_json_error_envelope() {
    let error = NookError::InvalidBody("Expected request with `Content-Type: application/json`".to_string());
    let json = error.to_json_error();

    assert_eq!(json["success"], false);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}

#[test]
fn test_json_error_envelope_has_only_two_keys() {
    let json = NookError::Internal("boom".to_string()).to_json_error();
    assert_eq!(json.as_object().unwrap().len(), 2);
    assert_eq!(json["error"], "Internal error: boom");
}

#[test]
fn test_serde_error_converts_to_invalid_body() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: NookError = err.into();

    assert!(matches!(error, NookError::InvalidBody(_)));
}
