use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{petlog, temp_config, write_config};

#[test]
fn test_types_lists_bristol_scale() {
    petlog()
        .arg("types")
        .assert()
        .success()
        .stdout(contains("1. duro e separado"))
        .stdout(contains("4. alongado e mole"))
        .stdout(contains("7. diarreia liquida"));
}

#[test]
fn test_provision_rejects_bad_folder_reference() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    petlog()
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "provision",
            "--folder-id",
            "not a folder",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid folder reference"));
}

#[test]
fn test_provision_requires_folder_id() {
    petlog()
        .args(["provision"])
        .assert()
        .failure()
        .stderr(contains("--folder-id"));
}

#[test]
fn test_provision_with_missing_credentials_fails() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);
    let creds = dir.path().join("nope.json");

    petlog()
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "provision",
            "--folder-id",
            "https://drive.google.com/drive/folders/1AbCdEfGhIjKlMnOpQrStUvWxYz",
            "--credentials",
            creds.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid service account credentials"));
}

#[test]
fn test_add_without_sheet_id_halts() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    petlog()
        .args(["--config", cfg.to_str().unwrap(), "add", "3"])
        .assert()
        .failure()
        .stderr(contains("sheet_id"));
}

#[test]
fn test_serve_without_sheet_id_halts() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);
    write_config(&cfg, "sheet_id: \"  \"\n");

    petlog()
        .args(["--config", cfg.to_str().unwrap(), "serve"])
        .assert()
        .failure()
        .stderr(contains("sheet_id"));
}

#[test]
fn test_add_rejects_unknown_type_before_any_remote_call() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);
    write_config(&cfg, "sheet_id: abc123\ncredentials: /definitely/missing.json\n");

    petlog()
        .args(["--config", cfg.to_str().unwrap(), "add", "9"])
        .assert()
        .failure()
        .stderr(contains("Invalid stool type").and(contains("credentials").not()));
}

#[test]
fn test_add_rejects_bad_date() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);
    write_config(&cfg, "sheet_id: abc123\n");

    petlog()
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "add",
            "4",
            "--date",
            "2024-13-45",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_init_then_print_config() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    petlog()
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "init",
            "--sheet-id",
            "1xYzSheet",
        ])
        .assert()
        .success()
        .stdout(contains("Config file"));

    petlog()
        .args(["--config", cfg.to_str().unwrap(), "config", "--print"])
        .assert()
        .success()
        .stdout(contains("sheet_id: 1xYzSheet"))
        .stdout(contains("America/Recife"))
        .stdout(contains("pt_BR"));

    // A second init keeps the existing file.
    petlog()
        .args(["--config", cfg.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));
}

#[test]
fn test_config_check_reports_problems() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);
    write_config(&cfg, "timezone: Mars/Olympus\nbind: nowhere\n");

    petlog()
        .args(["--config", cfg.to_str().unwrap(), "config", "--check"])
        .assert()
        .success()
        .stdout(contains("`sheet_id` is not set"))
        .stdout(contains("Invalid timezone"))
        .stdout(contains("`bind` is not a socket address"));
}

#[cfg(unix)]
#[test]
fn test_config_edit_uses_requested_editor() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    petlog()
        .env("EDITOR", "false")
        .args(["--config", cfg.to_str().unwrap(), "config", "--edit", "--editor", "true"])
        .assert()
        .success()
        .stdout(contains("edited successfully using 'true'"));
    // Missing file is created before the editor runs.
    assert!(cfg.exists());
}

#[cfg(unix)]
#[test]
fn test_config_edit_falls_back_to_default_editor() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    petlog()
        .env("EDITOR", "true")
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "config",
            "--edit",
            "--editor",
            "/nonexistent/editor",
        ])
        .assert()
        .success()
        .stdout(contains("Falling back to 'true'"))
        .stdout(contains("edited successfully using 'true'"));
}

#[cfg(unix)]
#[test]
fn test_config_edit_without_usable_editor_fails() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = temp_config(&dir);

    petlog()
        .env("EDITOR", "false")
        .args(["--config", cfg.to_str().unwrap(), "config", "--edit", "--editor", "false"])
        .assert()
        .failure()
        .stderr(contains("No usable editor (tried false)"));
}
