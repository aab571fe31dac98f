// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;
use std::io::Write;

fn clear_env() {
    std::env::remove_var("SR_CRAWL_WINDOW_MS");
    std::env::remove_var("SR_HEADLESS");
    std::env::remove_var("SR_REPORT_DIR");
}

#[test]
fn defaults() {
    let config = ControlConfig::default();
    assert_eq!(config.crawl_window(), Duration::ZERO);
    assert!(config.headless);
    assert!(config.report_dir.is_none());
}

#[test]
fn load_partial_toml_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "crawl_window_ms = 250").unwrap();

    let config = ControlConfig::load(file.path()).unwrap();
    assert_eq!(config.crawl_window_ms, 250);
    assert!(config.headless);
}

#[test]
fn load_full_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "crawl_window_ms = 0\nheadless = false\nreport_dir = \"/var/tmp/reports\""
    )
    .unwrap();

    let config = ControlConfig::load(file.path()).unwrap();
    assert_eq!(
        config,
        ControlConfig {
            crawl_window_ms: 0,
            headless: false,
            report_dir: Some(PathBuf::from("/var/tmp/reports")),
        }
    );
}

#[test]
fn load_rejects_unknown_keys() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "crawl_window = 10").unwrap();

    let err = ControlConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ControlError::Config(_)));
}

#[test]
fn load_missing_file_is_config_error() {
    let err = ControlConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(err.to_string().contains("here.toml"));
}

#[test]
#[serial(env)]
fn env_overrides_apply() {
    clear_env();
    std::env::set_var("SR_CRAWL_WINDOW_MS", "75");
    std::env::set_var("SR_HEADLESS", "false");
    std::env::set_var("SR_REPORT_DIR", "/tmp/sr-reports");

    let config = ControlConfig::from_env();
    clear_env();

    assert_eq!(config.crawl_window(), Duration::from_millis(75));
    assert!(!config.headless);
    assert_eq!(config.report_dir, Some(PathBuf::from("/tmp/sr-reports")));
}

#[test]
#[serial(env)]
fn invalid_env_values_are_ignored() {
    clear_env();
    std::env::set_var("SR_CRAWL_WINDOW_MS", "soon");
    std::env::set_var("SR_HEADLESS", "maybe");

    let config = ControlConfig::from_env();
    clear_env();

    assert_eq!(config, ControlConfig::default());
}
