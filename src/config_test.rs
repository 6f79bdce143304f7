use super::*;

#[test]
fn default_points_at_rag_chat() {
    let cfg = ChatConfig::default();
    assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(cfg.greeting, DEFAULT_GREETING);
    assert_eq!(cfg.fallback_message, DEFAULT_FALLBACK_MESSAGE);
    assert_eq!(cfg.request_timeout_ms, None);
    assert!(cfg.validate().is_ok());
}

#[test]
fn from_json_empty_object_is_default() {
    let cfg = ChatConfig::from_json("{}").unwrap();
    assert_eq!(cfg, ChatConfig::default());
}

#[test]
fn from_json_keeps_defaults_for_missing_fields() {
    let cfg = ChatConfig::from_json(r#"{"endpoint": "https://answers.example.test/ask", "request_timeout_ms": 15000}"#)
        .unwrap();
    assert_eq!(cfg.endpoint, "https://answers.example.test/ask");
    assert_eq!(cfg.request_timeout_ms, Some(15000));
    assert_eq!(cfg.title, DEFAULT_TITLE);
    assert_eq!(cfg.placeholder, DEFAULT_PLACEHOLDER);
}

#[test]
fn from_json_overrides_fallback_wording() {
    let cfg = ChatConfig::from_json(
        r#"{"fallback_message": "Sorry, there was an error connecting to the server. Please try again."}"#,
    )
    .unwrap();
    assert_eq!(cfg.fallback_message, "Sorry, there was an error connecting to the server. Please try again.");
}

#[test]
fn from_json_rejects_malformed_document() {
    let err = ChatConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("config parse failed"));
}

#[test]
fn from_json_rejects_wrong_field_type() {
    let err = ChatConfig::from_json(r#"{"request_timeout_ms": "soon"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn validate_rejects_relative_or_protocol_relative_endpoint() {
    for endpoint in ["api/rag_chat", "//evil.test/api", "ftp://host/x", "/api/rag chat", ""] {
        let cfg = ChatConfig { endpoint: endpoint.to_owned(), ..ChatConfig::default() };
        assert!(
            matches!(cfg.validate(), Err(ConfigError::InvalidEndpoint(_))),
            "endpoint {endpoint:?} should be rejected"
        );
    }
}

#[test]
fn validate_rejects_blank_fallback() {
    let cfg = ChatConfig { fallback_message: "  \n".to_owned(), ..ChatConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::EmptyFallback)));
}

#[test]
fn validated_or_default_keeps_valid_config() {
    let cfg = ChatConfig { title: "Textbook Helper".to_owned(), request_timeout_ms: Some(20_000), ..ChatConfig::default() };
    assert_eq!(cfg.clone().validated_or_default(), cfg);
}

#[test]
fn validated_or_default_replaces_blank_fallback() {
    let cfg = ChatConfig { fallback_message: "   ".to_owned(), ..ChatConfig::default() };
    let cfg = cfg.validated_or_default();
    assert_eq!(cfg, ChatConfig::default());
    assert_eq!(cfg.fallback_message, DEFAULT_FALLBACK_MESSAGE);
}

#[test]
fn validated_or_default_replaces_protocol_relative_endpoint() {
    let cfg = ChatConfig { endpoint: "//elsewhere.test/api".to_owned(), ..ChatConfig::default() };
    assert_eq!(cfg.validated_or_default().endpoint, DEFAULT_ENDPOINT);
}
