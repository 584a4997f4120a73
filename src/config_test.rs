use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn from_vars_uses_defaults_when_unset() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_origin, DEFAULT_BACKEND_ORIGIN);
    assert_eq!(
        cfg.timeouts,
        ProxyTimeouts {
            request_secs: DEFAULT_PROXY_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_PROXY_CONNECT_TIMEOUT_SECS
        }
    );
    assert_eq!(cfg.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("BACKEND_ORIGIN", "http://127.0.0.1:9000/"),
        ("PROXY_REQUEST_TIMEOUT_SECS", "5"),
        ("PROXY_CONNECT_TIMEOUT_SECS", "2"),
        ("MAX_UPLOAD_BYTES", "1024"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_origin, "http://127.0.0.1:9000");
    assert_eq!(cfg.timeouts, ProxyTimeouts { request_secs: 5, connect_secs: 2 });
    assert_eq!(cfg.max_upload_bytes, 1024);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[("PORT", "  "), ("BACKEND_ORIGIN", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_origin, DEFAULT_BACKEND_ORIGIN);
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(
        config_from(&[("PORT", "eighty")]),
        Err(ConfigError::InvalidNumber { var: "PORT", value: "eighty".to_owned() })
    );
    assert!(config_from(&[("PORT", "70000")]).is_err());
}

#[test]
fn invalid_upload_cap_is_rejected() {
    assert!(matches!(
        config_from(&[("MAX_UPLOAD_BYTES", "-1")]),
        Err(ConfigError::InvalidNumber { var: "MAX_UPLOAD_BYTES", .. })
    ));
}

#[test]
fn origin_requires_http_scheme_and_host() {
    assert_eq!(
        config_from(&[("BACKEND_ORIGIN", "backend.local")]),
        Err(ConfigError::InvalidOrigin("backend.local".to_owned()))
    );
    assert!(config_from(&[("BACKEND_ORIGIN", "ftp://backend.local")]).is_err());
    assert!(config_from(&[("BACKEND_ORIGIN", "https://")]).is_err());
}

#[test]
fn origin_trailing_slashes_are_trimmed() {
    assert_eq!(parse_origin("https://api.test///").unwrap(), "https://api.test");
}
