use super::*;

#[test]
fn normalize_trims_trailing_slashes() {
    assert_eq!(normalize_base("/api/").as_deref(), Some("/api"));
    assert_eq!(
        normalize_base("  https://ojek.example/api//  ").as_deref(),
        Some("https://ojek.example/api")
    );
}

#[test]
fn normalize_blank_is_unset() {
    assert_eq!(normalize_base(""), None);
    assert_eq!(normalize_base("   "), None);
}

#[test]
fn normalize_root_is_empty_prefix() {
    assert_eq!(normalize_base("/").as_deref(), Some(""));
}

#[test]
fn with_api_base_falls_back_to_default() {
    assert_eq!(AppConfig::with_api_base(" ").api_base, DEFAULT_API_BASE);
    assert_eq!(AppConfig::with_api_base("/v2/api/").api_base, "/v2/api");
}
