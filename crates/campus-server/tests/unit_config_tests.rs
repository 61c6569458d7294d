//! Unit tests for ServerConfig loading

use campus_server::config::{LogFormat, ServerConfig, DEFAULT_BANNER};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent");

    let config = ServerConfig::load_from(path.to_str().unwrap()).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.banner, DEFAULT_BANNER);
}

#[test]
fn test_yaml_file_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("server.yaml");
    std::fs::write(
        &path,
        r#"
host: 127.0.0.1
port: 8081
seed_path: data/seed.yaml
enable_cors: true
log_format: json
"#,
    )
    .unwrap();

    let config = ServerConfig::load_from(path.to_str().unwrap()).unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8081);
    assert_eq!(config.seed_path, Some(PathBuf::from("data/seed.yaml")));
    assert!(config.enable_cors);
    assert_eq!(config.log_format, LogFormat::Json);
    // Unset keys keep their defaults
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_toml_file_without_extension_in_name() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("server.toml"),
        "banner = \"registry up\"\nport = 9000\n",
    )
    .unwrap();

    let base = temp_dir.path().join("server");
    let config = ServerConfig::load_from(base.to_str().unwrap()).unwrap();
    assert_eq!(config.banner, "registry up");
    assert_eq!(config.port, 9000);
}

#[test]
fn test_invalid_value_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("server.yaml");
    std::fs::write(&path, "port: not-a-port\n").unwrap();

    let err = ServerConfig::load_from(path.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("Failed to load config"));
}
