//! Integration tests for listing and reading letters

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{capsule_cmd, init_capsule, write_letter, write_letter_with_message};

#[test]
fn test_list_empty_capsule() {
    let temp = TempDir::new().unwrap();
    init_capsule(temp.path());

    capsule_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No letters found"));
}

#[test]
fn test_list_shows_delivery_state() {
    let temp = TempDir::new().unwrap();
    init_capsule(temp.path());

    write_letter(temp.path(), "old one", "happy", "01-01-2020");
    write_letter(temp.path(), "new one", "calm", "in 2 years");

    capsule_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("delivered"))
        .stdout(predicate::str::contains("%"));
}

#[test]
fn test_list_scope_flags_partition_letters() {
    let temp = TempDir::new().unwrap();
    init_capsule(temp.path());

    write_letter(temp.path(), "old one", "happy", "01-01-2020");
    write_letter(temp.path(), "new one", "calm", "in 2 years");

    capsule_cmd()
        .current_dir(temp.path())
        .args(["list", "--delivered"])
        .assert()
        .success()
        .stdout(predicate::str::contains("old one"))
        .stdout(predicate::str::contains("new one").not());

    capsule_cmd()
        .current_dir(temp.path())
        .args(["list", "--locked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new one"))
        .stdout(predicate::str::contains("old one").not());
}

#[test]
fn test_list_delivered_and_locked_conflict() {
    let temp = TempDir::new().unwrap();
    init_capsule(temp.path());

    capsule_cmd()
        .current_dir(temp.path())
        .args(["list", "--delivered", "--locked"])
        .assert()
        .failure();
}

#[test]
fn test_list_mood_filter() {
    let temp = TempDir::new().unwrap();
    init_capsule(temp.path());

    write_letter(temp.path(), "a grateful one", "grateful", "in 1 week");
    write_letter(temp.path(), "a happy one", "happy", "in 1 week");

    capsule_cmd()
        .current_dir(temp.path())
        .args(["list", "--mood", "grateful"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a grateful one"))
        .stdout(predicate::str::contains("a happy one").not());
}

#[test]
fn test_list_date_range() {
    let temp = TempDir::new().unwrap();
    init_capsule(temp.path());

    write_letter(temp.path(), "december", "happy", "25-12-2030");
    write_letter(temp.path(), "january", "happy", "05-01-2031");

    capsule_cmd()
        .current_dir(temp.path())
        .args(["list", "--from", "01-12-2030", "--to", "31-12-2030"])
        .assert()
        .success()
        .stdout(predicate::str::contains("december"))
        .stdout(predicate::str::contains("january").not());
}

#[test]
fn test_list_limit() {
    let temp = TempDir::new().unwrap();
    init_capsule(temp.path());

    write_letter(temp.path(), "first", "happy", "in 1 week");
    write_letter(temp.path(), "second", "happy", "in 1 week");
    write_letter(temp.path(), "third", "happy", "in 1 week");

    let output = capsule_cmd()
        .current_dir(temp.path())
        .args(["list", "--limit", "2"])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("first"));
    assert!(stdout.contains("second"));
}

#[test]
fn test_read_delivered_letter_shows_body() {
    let temp = TempDir::new().unwrap();
    init_capsule(temp.path());

    let id = write_letter_with_message(
        temp.path(),
        "From the past",
        "reflective",
        "01-01-2020",
        "did you water the plants?",
    );

    capsule_cmd()
        .current_dir(temp.path())
        .args(["read", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# From the past"))
        .stdout(predicate::str::contains("Mood: 🤔 Reflective"))
        .stdout(predicate::str::contains("did you water the plants?"));
}

#[test]
fn test_read_locked_letter_is_refused_with_countdown() {
    let temp = TempDir::new().unwrap();
    init_capsule(temp.path());

    let id = write_letter(temp.path(), "not yet", "hopeful", "in 2 years");

    capsule_cmd()
        .current_dir(temp.path())
        .args(["read", &id])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("still sealed"))
        .stderr(predicate::str::contains("unlocks in"));
}

#[test]
fn test_read_accepts_id_prefix() {
    let temp = TempDir::new().unwrap();
    init_capsule(temp.path());

    let id = write_letter(temp.path(), "prefixed", "calm", "01-01-2020");
    let prefix = &id[..4];

    capsule_cmd()
        .current_dir(temp.path())
        .args(["read", prefix])
        .assert()
        .success()
        .stdout(predicate::str::contains("prefixed"));
}

#[test]
fn test_read_unknown_id() {
    let temp = TempDir::new().unwrap();
    init_capsule(temp.path());

    capsule_cmd()
        .current_dir(temp.path())
        .args(["read", "ffffffff"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("No letter found"));
}
