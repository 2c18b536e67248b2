//! Environment layering for `AppConfig::load`.
//!
//! Kept to a single test in its own binary since it mutates process env.

use std::io::Write;

use stockpulse::config::{AppConfig, LogFormat};

#[test]
fn env_overrides_file_and_keeps_underscored_keys() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(
        br#"
[server]
host = "127.0.0.1"
port = 9000

[cors]
allowed_origin = "http://localhost:3033"

[logging]
format = "json"
"#,
    )
    .unwrap();

    std::env::set_var("STOCKPULSE_CONFIG", file.path());

    // File alone
    let config = AppConfig::load().expect("config should load from file");
    assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    assert_eq!(config.cors.allowed_origin, "http://localhost:3033");
    assert_eq!(config.logging.format, LogFormat::Json);

    // Env layered on top
    std::env::set_var("STOCKPULSE_SERVER__PORT", "8080");
    std::env::set_var("STOCKPULSE_CORS__ALLOWED_ORIGIN", "https://a.example.com");

    let result = AppConfig::load();

    std::env::remove_var("STOCKPULSE_SERVER__PORT");
    std::env::remove_var("STOCKPULSE_CORS__ALLOWED_ORIGIN");
    std::env::remove_var("STOCKPULSE_CONFIG");

    let config = result.expect("config should load from file + env");
    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.cors.allowed_origin, "https://a.example.com");
    assert_eq!(config.logging.format, LogFormat::Json);
}
