//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use zaranthis::config::AppConfig;
use zaranthis_core::{SessionBuilder, WorldId, WorldLayout};

/// Fresh config directory under the system temp dir
fn temp_config_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("zaranthis_config_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

// ==================== Environment ====================

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("ZAR_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("ZAR_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_numeric() {
    std::env::set_var("ZAR_TELEPORT__COOLDOWN_SECONDS", "3.5");
    std::env::set_var("ZAR_PLAYER__RUN_SPEED", "9");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.teleport.cooldown_seconds, 3.5);
    assert_eq!(config.player.run_speed, 9.0);
    std::env::remove_var("ZAR_TELEPORT__COOLDOWN_SECONDS");
    std::env::remove_var("ZAR_PLAYER__RUN_SPEED");
}

// ==================== Files ====================

#[test]
#[serial]
fn test_shipped_default_config_loads() {
    let config = AppConfig::load().unwrap();
    assert_eq!(config.player.walk_speed, 2.0);
    assert_eq!(config.player.run_speed, 6.0);
    assert_eq!(config.teleport.trigger_radius, 1.5);
    assert_eq!(config.physics.max_frame_time, 0.25);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = temp_config_dir("layering");
    fs::write(
        dir.join("default.toml"),
        "[player]\nwalk_speed = 2.0\nrun_speed = 6.0\n\n[teleport]\ncooldown_seconds = 2.0\n",
    )
    .unwrap();
    fs::write(dir.join("user.toml"), "[teleport]\ncooldown_seconds = 4.0\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.teleport.cooldown_seconds, 4.0);
    assert_eq!(config.player.run_speed, 6.0);
    // Keys missing from both files fall back to the serde defaults
    assert_eq!(config.player.dead_zone, 0.1);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let dir = std::env::temp_dir().join("zaranthis_config_does_not_exist");
    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.debug.log_level, "info");
}

#[test]
#[serial]
fn test_invalid_value_is_an_error() {
    let dir = temp_config_dir("invalid");
    fs::write(dir.join("default.toml"), "[player]\nwalk_speed = \"fast\"\n").unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_toml_round_trip() {
    let mut config = AppConfig::default();
    config.teleport.trigger_radius = 2.25;
    config.camera.free_position = [1.0, 2.0, 3.0];

    let text = toml::to_string(&config).unwrap();
    let parsed: AppConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed.teleport.trigger_radius, 2.25);
    assert_eq!(parsed.camera.free_position, [1.0, 2.0, 3.0]);
}

// ==================== Session ====================

#[test]
#[serial]
fn test_config_drives_session() {
    let mut config = AppConfig::default();
    config.teleport.cooldown_seconds = 5.0;

    let session = SessionBuilder::new()
        .with_config(config.to_session_config())
        .with_layout(&WorldLayout::builtin())
        .build()
        .unwrap();
    assert_eq!(session.switcher().cooldown_duration(), 5.0);
    assert_eq!(session.current_world(), WorldId::Labo);
}

#[test]
#[serial]
fn test_shipped_layout_matches_builtin() {
    let layout = WorldLayout::load("assets/worlds/default.ron").unwrap();
    assert_eq!(layout, WorldLayout::builtin());
}
