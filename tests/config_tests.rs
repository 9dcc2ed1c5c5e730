mod common;
use common::{temp_config, write_config};
use petlog::config::Config;
use petlog::errors::ErrorKind;

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load(&temp_config(&dir)).unwrap();

    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.timezone, "America/Recife");
    assert_eq!(cfg.locale, "pt_BR");
    assert_eq!(cfg.credentials, "service-account.json");
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_config(&dir);
    write_config(&path, "sheet_id: 1AbC\nlocale: en_US\n");

    let cfg = Config::load(&path).unwrap();
    assert_eq!(cfg.sheet_id.as_deref(), Some("1AbC"));
    assert_eq!(cfg.locale, "en_US");
    assert_eq!(cfg.timezone, "America/Recife");
    assert_eq!(cfg.settings().locale, "en_US");
}

#[test]
fn test_require_sheet_id() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_config(&dir);

    let err = Config::default().require_sheet_id(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);

    let blank = Config {
        sheet_id: Some("   ".into()),
        ..Config::default()
    };
    assert!(blank.require_sheet_id(&path).is_err());

    let set = Config {
        sheet_id: Some(" 1AbC ".into()),
        ..Config::default()
    };
    assert_eq!(set.require_sheet_id(&path).unwrap(), "1AbC");
}

#[test]
fn test_save_and_init_all() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("petlog.conf");

    let template = Config {
        sheet_id: Some("1AbC".into()),
        ..Config::default()
    };
    assert!(Config::init_all(&path, &template, false).unwrap());
    assert_eq!(Config::load(&path).unwrap(), template);

    // Kept unless forced.
    assert!(!Config::init_all(&path, &Config::default(), false).unwrap());
    assert_eq!(Config::load(&path).unwrap().sheet_id.as_deref(), Some("1AbC"));

    assert!(Config::init_all(&path, &Config::default(), true).unwrap());
    assert_eq!(Config::load(&path).unwrap().sheet_id, None);
}

#[test]
fn test_invalid_yaml_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_config(&dir);
    write_config(&path, "sheet_id: [unterminated\n");

    let err = Config::load(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn test_timezone_validation() {
    let bad = Config {
        timezone: "Mars/Olympus".into(),
        ..Config::default()
    };
    assert!(bad.tz().is_err());
    assert_eq!(Config::default().tz().unwrap(), chrono_tz::America::Recife);
}
