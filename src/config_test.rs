use super::*;

#[test]
fn from_values_defaults_when_unset() {
    let cfg = ClientConfig::from_values(None, None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.session_storage_key, DEFAULT_SESSION_STORAGE_KEY);
}

#[test]
fn from_values_strips_trailing_slashes() {
    let cfg = ClientConfig::from_values(Some("https://triage.example.test/"), None);
    assert_eq!(cfg.api_base_url, "https://triage.example.test");
}

#[test]
fn from_values_treats_blank_as_unset() {
    let cfg = ClientConfig::from_values(Some("   "), Some(""));
    assert_eq!(cfg, ClientConfig::default());
}

#[test]
fn from_values_keeps_custom_storage_key() {
    let cfg = ClientConfig::from_values(None, Some(" ward_session "));
    assert_eq!(cfg.session_storage_key, "ward_session");
}
