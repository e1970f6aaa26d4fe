use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn server_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.assets_dir.ends_with("../public"));
}

#[test]
fn server_reads_port_and_assets_dir() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("SITE_ASSETS_DIR", "/srv/site")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/site"));
}

#[test]
fn server_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidValue { var: "PORT", value: "http".to_owned() });
}

#[test]
fn blank_assets_dir_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup(&[("SITE_ASSETS_DIR", "  ")])).unwrap();
    assert!(cfg.assets_dir.ends_with("../public"));
}

// =============================================================================
// RelayConfig
// =============================================================================

#[test]
fn relay_requires_all_three_vars() {
    let full = [("RESEND_API_KEY", "re_123"), ("CONTACT_FROM", "site@sebatgroup.com"), ("CONTACT_TO", "info@sebatgroup.com")];
    let cfg = RelayConfig::from_lookup(lookup(&full)).unwrap();
    assert_eq!(cfg.to, "info@sebatgroup.com");

    let err = RelayConfig::from_lookup(lookup(&full[..2])).unwrap_err();
    assert_eq!(err, ConfigError::MissingVar { var: "CONTACT_TO" });
}

#[test]
fn relay_treats_blank_as_missing() {
    let err = RelayConfig::from_lookup(lookup(&[("RESEND_API_KEY", " ")])).unwrap_err();
    assert_eq!(err, ConfigError::MissingVar { var: "RESEND_API_KEY" });
}

#[test]
fn relay_debug_redacts_api_key() {
    let cfg = RelayConfig { api_key: "re_secret".into(), from: "a@b.co".into(), to: "c@d.co".into() };
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("re_secret"));
    assert!(rendered.contains("<redacted>"));
}

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn parse_or_falls_back_on_missing_or_garbage() {
    assert_eq!(parse_or::<u64>(None, 7), 7);
    assert_eq!(parse_or::<u64>(Some("x"), 7), 7);
    assert_eq!(parse_or::<u64>(Some(" 42 "), 7), 42);
}

#[test]
fn env_parse_reads_process_env() {
    let key = "__TEST_SEBAT_ENV_PARSE_5521__";
    unsafe { std::env::set_var(key, "12") };
    assert_eq!(env_parse::<usize>(key, 3), 12);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_parse::<usize>(key, 3), 3);
}
