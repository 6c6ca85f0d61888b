use memento_config::AppConfig;

#[test]
fn test_load_creates_default_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memento.json");
    assert!(!path.exists());

    let config = AppConfig::load_or_create(&path);
    assert!(path.exists());
    assert_eq!(config, AppConfig::default());

    // File should contain valid JSON
    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(parsed.is_object());
    assert_eq!(parsed["max_history_depth"], 10_000);
}

#[test]
fn test_load_existing_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memento.json");
    let json = r#"{
        "max_history_depth": 25,
        "group_timeout_ms": 400,
        "initial_text": "Version 0",
        "show_depths": true
    }"#;
    std::fs::write(&path, json).unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config.max_history_depth, 25);
    assert_eq!(config.group_timeout_ms, 400);
    assert_eq!(config.initial_text, "Version 0");
    assert!(config.show_depths);
}

#[test]
fn test_broken_json_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memento.json");
    std::fs::write(&path, "{ this is not valid json }}}").unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config, AppConfig::default());

    // Broken file is left alone
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "{ this is not valid json }}}");
}

#[test]
fn test_strict_load_reports_broken_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memento.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config"));
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memento.json");
    std::fs::write(&path, r#"{"initial_text": "hello"}"#).unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config.initial_text, "hello");
    assert_eq!(config.max_history_depth, 10_000);
    assert_eq!(config.group_timeout_ms, 0);
    assert!(!config.show_depths);
}

#[test]
fn test_loaded_config_is_sanitized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memento.json");
    std::fs::write(&path, r#"{"group_timeout_ms": 999999999}"#).unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config.group_timeout_ms, 60_000);
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memento.json");

    let config = AppConfig {
        max_history_depth: 7,
        group_timeout_ms: 0,
        initial_text: "seed".to_string(),
        show_depths: true,
    };
    config.save(&path).unwrap();

    let loaded = AppConfig::load_or_create(&path);
    assert_eq!(loaded, config);
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("memento.json");
    assert!(AppConfig::default().save(&path).is_err());
}
