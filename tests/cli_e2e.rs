use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn folio(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env_remove("FOLIO_DATA_DIR")
        .env_remove("FOLIO_LOG")
        .env("NO_COLOR", "1")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

#[test]
fn test_page_lifecycle() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path();

    folio(data)
        .args(["new", "Test", "Page"])
        .args(["-p", "This is a test paragraph."])
        .args(["-p", "This is another test paragraph."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page created (1): Test Page"));

    folio(data)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Test Page\n"))
        .stdout(predicate::str::contains(
            "This is a test paragraph.\n\nThis is another test paragraph.\n",
        ));

    folio(data)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page deleted (1): Test Page"));

    folio(data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pages yet."));
}

#[test]
fn test_bare_invocation_lists_pages() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path();

    folio(data)
        .args(["n", "Groceries", "-p", "milk and eggs"])
        .assert()
        .success();
    folio(data).args(["n", "Empty"]).assert().success();

    folio(data)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Groceries  milk and eggs"))
        .stdout(predicate::str::contains("2. Empty"));
}

#[test]
fn test_compose_from_stdin() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path();

    folio(data)
        .args(["compose", "Draft", "Title"])
        .write_stdin("add first\nadd second\nadd third\nmv 3 1\nrm 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page created (1): Draft Title"));

    folio(data)
        .args(["v", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("third\n\nfirst\n"))
        .stdout(predicate::str::contains("second").not());
}

#[test]
fn test_compose_abort_writes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path();

    folio(data)
        .arg("c")
        .write_stdin("title Scratch\nadd nope\nabort\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft discarded."));

    folio(data)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pages yet."));
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path();

    folio(data).args(["new", "A"]).assert().success();
    folio(data).args(["new", "B"]).assert().success();
    folio(data).args(["rm", "2"]).assert().success();

    folio(data)
        .args(["new", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page created (3): C"));
}

#[test]
fn test_view_missing_page_is_not_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();

    folio(temp_dir.path())
        .args(["view", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 9 not found"));
}

#[test]
fn test_delete_missing_page_succeeds() {
    let temp_dir = tempfile::tempdir().unwrap();

    folio(temp_dir.path())
        .args(["delete", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"));
}

#[test]
fn test_invalid_id_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    folio(temp_dir.path())
        .args(["view", "first"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid page id: first"));
}

#[test]
fn test_unusable_data_dir_is_storage_unavailable() {
    let temp_dir = tempfile::tempdir().unwrap();
    let not_a_dir = temp_dir.path().join("plain-file");
    std::fs::write(&not_a_dir, "occupied").unwrap();

    folio(&not_a_dir)
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Storage unavailable"));
}

#[test]
fn test_corrupt_table_is_storage_unavailable() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("pages.json"), "{ not json").unwrap();

    folio(temp_dir.path())
        .args(["new", "Lost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage unavailable"));
}

#[test]
fn test_legacy_table_is_readable() {
    let temp_dir = tempfile::tempdir().unwrap();
    let table = r#"{"version":1,"next_id":3,"pages":[{"id":2,"title":"Old","content":"legacy body"}]}"#;
    std::fs::write(temp_dir.path().join("pages.json"), table).unwrap();

    folio(temp_dir.path())
        .args(["view", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Old"))
        .stdout(predicate::str::contains("legacy body"));

    folio(temp_dir.path())
        .args(["new", "Fresh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page created (3): Fresh"));

    let rewritten = std::fs::read_to_string(temp_dir.path().join("pages.json")).unwrap();
    assert!(rewritten.contains("\"paragraphs\""));
    assert!(!rewritten.contains("\"content\""));
}

#[test]
fn test_path_points_at_the_table() {
    let temp_dir = tempfile::tempdir().unwrap();

    folio(temp_dir.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("pages.json"));

    assert!(temp_dir.path().join("pages.json").exists());
}

#[test]
fn test_data_dir_from_env() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env("FOLIO_DATA_DIR", temp_dir.path())
        .env("NO_COLOR", "1")
        .args(["new", "From", "Env"])
        .assert()
        .success();

    assert!(temp_dir.path().join("pages.json").exists());
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path();

    folio(data)
        .args(["config", "preview-width", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("preview-width set to 5"));

    folio(data)
        .args(["config", "preview-width"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5"));

    folio(data)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("preview-width = 5"))
        .stdout(predicate::str::contains("log-level = warn"));

    folio(data)
        .args(["new", "T", "-p", "abcdefghij"])
        .assert()
        .success();
    folio(data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("abcd…"))
        .stdout(predicate::str::contains("abcdefghij").not());
}

#[test]
fn test_config_rejects_bad_values() {
    let temp_dir = tempfile::tempdir().unwrap();

    folio(temp_dir.path())
        .args(["config", "log-level", "loud"])
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid log-level: loud"));
}
