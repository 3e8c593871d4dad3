use serial_test::serial;
use std::fs;
use tempfile::tempdir;

use cmdfm::config::{config_path, load_config, CONFIG_ENV};
use cmdfm::{Config, LogLevel, SessionMode};

struct EnvGuard;

impl EnvGuard {
    fn set(value: &std::path::Path) -> Self {
        unsafe {
            std::env::set_var(CONFIG_ENV, value);
        }
        EnvGuard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            std::env::remove_var(CONFIG_ENV);
        }
    }
}

#[test]
#[serial]
fn env_var_selects_config_file() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("custom.xml");
    fs::write(
        &cfg,
        "<config><log_level>info</log_level><session_mode>once</session_mode></config>",
    )
    .unwrap();
    let _g = EnvGuard::set(&cfg);

    assert_eq!(config_path().unwrap(), cfg);
    let loaded = load_config().unwrap().expect("config present");
    assert_eq!(loaded.log_level, LogLevel::Info);
    assert_eq!(loaded.session_mode, SessionMode::Once);
    assert!(!loaded.json_logs);
}

#[test]
#[serial]
fn missing_file_means_defaults() {
    let td = tempdir().unwrap();
    let _g = EnvGuard::set(&td.path().join("absent.xml"));
    assert!(load_config().unwrap().is_none());
    assert_eq!(Config::default().session_mode, SessionMode::Loop);
    assert_eq!(Config::default().log_level, LogLevel::Quiet);
}

#[test]
#[serial]
fn relative_env_path_resolves_against_cwd() {
    let _g = EnvGuard::set(std::path::Path::new("rel/config.xml"));
    let resolved = config_path().unwrap();
    assert!(resolved.is_absolute());
    assert!(resolved.ends_with("rel/config.xml"));
}

#[test]
#[serial]
fn log_file_pointing_at_directory_is_rejected() {
    let td = tempdir().unwrap();
    let cfg = Config {
        log_file: Some(td.path().to_path_buf()),
        ..Default::default()
    };
    assert!(cfg.validate().is_err());
}
