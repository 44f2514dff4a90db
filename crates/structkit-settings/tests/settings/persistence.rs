use structkit_designer::{PlannerKind, ViewMode};
use structkit_settings::{Config, ConfigError, SettingsError};
use tempfile::tempdir;

fn customized() -> Config {
    let mut config = Config::default();
    config.planner.default_kind = PlannerKind::Kitchen;
    config.planner.grid_size_in = 3.0;
    config.planner.default_view = ViewMode::ThreeD;
    config.takeoff.currency = "CAD".to_string();
    config.takeoff.prices.insert("concrete-yd".to_string(), 210.0);
    config.add_recent_design("garage.json".into());
    config
}

#[test]
fn test_toml_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let config = customized();
    config.save_to_file(&path).unwrap();

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.takeoff.price_book().price("concrete-yd"), Some(210.0));
}

#[test]
fn test_json_round_trip_creates_parent_dir() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = customized();
    config.save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let err = Config::default().save_to_file(&dir.path().join("config.yaml")).unwrap_err();
    assert!(matches!(err, SettingsError::Config(ConfigError::UnsupportedFormat(_))));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_file_is_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[planner]\ngrid_size_in = -1.0\nsnap_enabled = true\nshow_grid = true\nhandle_radius_in = 4.0\ncanvas_width = 800.0\ncanvas_height = 600.0\ncanvas_padding = 40.0\n").unwrap();
    assert!(matches!(Config::load_from_file(&path), Err(SettingsError::InvalidSetting { .. })));

    std::fs::write(&path, "not = [valid").unwrap();
    assert!(matches!(Config::load_from_file(&path), Err(SettingsError::TomlError(_))));
}

#[test]
fn test_partial_file_uses_section_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"takeoff": {"currency": "EUR"}}"#).unwrap();
    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.takeoff.currency, "EUR");
    assert!(config.takeoff.use_builtin_prices);
    assert_eq!(config.planner, Default::default());
}
