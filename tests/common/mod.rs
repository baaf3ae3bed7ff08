#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn capsule_cmd() -> Command {
    let mut cmd = Command::cargo_bin("capsule").unwrap();
    cmd.env_remove("CAPSULE_ROOT");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Initialize a capsule for user "alice" in the given directory
pub fn init_capsule(dir: &Path) {
    capsule_cmd()
        .arg("init")
        .arg(dir)
        .arg("--user")
        .arg("alice")
        .assert()
        .success();
}

/// Write a letter and return its short id as printed by the command
pub fn write_letter(dir: &Path, title: &str, mood: &str, deliver: &str) -> String {
    write_letter_with_message(dir, title, mood, deliver, "hello from the past")
}

pub fn write_letter_with_message(
    dir: &Path,
    title: &str,
    mood: &str,
    deliver: &str,
    message: &str,
) -> String {
    let output = capsule_cmd()
        .current_dir(dir)
        .args([
            "write",
            "--title",
            title,
            "--mood",
            mood,
            "--deliver",
            deliver,
            "--message",
            message,
        ])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "write failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // Output shape: "Sealed letter <id> for delivery on <date>"
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout.split_whitespace().nth(2).unwrap().to_string()
}
