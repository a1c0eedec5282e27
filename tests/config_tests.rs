// Config loading and validation tests

use sysdash::config::AppConfig;

const VALID_CONFIG: &str = r#"
[server]
port = 8015
host = "0.0.0.0"

[dashboard]
endpoint = "http://10.0.0.5:8015/api/sysinfo"
poll_interval_ms = 8000
window_capacity = 20
request_timeout_ms = 5000
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8015);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.dashboard.endpoint, "http://10.0.0.5:8015/api/sysinfo");
    assert_eq!(config.dashboard.poll_interval_ms, 8000);
    assert_eq!(config.dashboard.window_capacity, 20);
    assert_eq!(config.dashboard.request_timeout_ms, 5000);
}

#[test]
fn test_config_dashboard_defaults_when_omitted() {
    let config = AppConfig::load_from_str("[server]\nport = 9000\nhost = \"127.0.0.1\"\n")
        .expect("valid");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.dashboard.endpoint, "http://127.0.0.1:8015/api/sysinfo");
    assert_eq!(config.dashboard.poll_interval_ms, 8000);
    assert_eq!(config.dashboard.window_capacity, 20);
}

#[test]
fn test_config_empty_file_is_all_defaults() {
    let config = AppConfig::load_from_str("").expect("valid");
    assert_eq!(config.server.port, 8015);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.dashboard.request_timeout_ms, 5000);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8015", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_host() {
    let bad = VALID_CONFIG.replace("host = \"0.0.0.0\"", "host = \"\"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.host"));
}

#[test]
fn test_config_validation_rejects_non_http_endpoint() {
    let bad = VALID_CONFIG.replace(
        "endpoint = \"http://10.0.0.5:8015/api/sysinfo\"",
        "endpoint = \"10.0.0.5:8015\"",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("dashboard.endpoint"));
}

#[test]
fn test_config_endpoint_override_is_validated() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("valid");
    let err = config.clone().with_endpoint("foo").unwrap_err();
    assert!(err.to_string().contains("dashboard.endpoint"));

    let config = config
        .with_endpoint("https://nas.local/api/sysinfo")
        .expect("https override accepted");
    assert_eq!(config.dashboard.endpoint, "https://nas.local/api/sysinfo");
}

#[test]
fn test_config_validation_rejects_poll_interval_zero() {
    let bad = VALID_CONFIG.replace("poll_interval_ms = 8000", "poll_interval_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("poll_interval_ms"));
}

#[test]
fn test_config_validation_rejects_window_capacity_zero() {
    let bad = VALID_CONFIG.replace("window_capacity = 20", "window_capacity = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("window_capacity"));
}

#[test]
fn test_config_validation_rejects_request_timeout_zero() {
    let bad = VALID_CONFIG.replace("request_timeout_ms = 5000", "request_timeout_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("request_timeout_ms"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

// Both env-var tests run in one function: CONFIG_FILE is process-global.
#[test]
fn test_config_load_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    let missing = dir.path().join("missing.toml");
    unsafe { std::env::set_var("CONFIG_FILE", missing.to_str().unwrap()) };
    let strict = AppConfig::load();
    let lenient = AppConfig::load_or_default();
    unsafe { std::env::remove_var("CONFIG_FILE") };

    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.dashboard.endpoint, "http://10.0.0.5:8015/api/sysinfo");
    assert!(strict.is_err());
    let defaults = lenient.expect("missing file falls back to defaults");
    assert_eq!(defaults.dashboard.poll_interval_ms, 8000);
}
