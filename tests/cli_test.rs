use pretty_assertions::assert_eq;
use std::fs;
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

/// Run the binary with its config directory isolated in `home`
fn run(home: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_berlin-clock"))
        .args(args)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run berlin-clock")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_single_time() {
    let home = tempdir().unwrap();
    let output = run(&home, &["13:17:01"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "0\nRR00\nRRR0\nYYR00000000\nYY00\n");
}

#[test]
fn test_blank_line_between_displays() {
    let home = tempdir().unwrap();
    let output = run(&home, &["00:00:00", "23:59:59"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Y\n0000\n0000\n00000000000\n0000\n\n0\nRRRR\nRRR0\nYYRYYRYYRYY\nYYYY\n"
    );
}

#[test]
fn test_line_ending_override() {
    let home = tempdir().unwrap();
    let output = run(&home, &["--line-ending", "crlf", "12:56:01"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "0\r\nRR00\r\nRR00\r\nYYRYYRYYRYY\r\nY000\n");
}

#[test]
fn test_invalid_time_exits_non_zero() {
    let home = tempdir().unwrap();
    let output = run(&home, &["12:00:00", "24:00:00", "13:00:00"]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Hours out of bounds."), "stderr was: {}", stderr);
}

#[test]
fn test_malformed_config_does_not_block_conversion() {
    let home = tempdir().unwrap();
    let config_dir = home.path().join("berlin-clock");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[display]\nline_ending = \"sideways\"\n").unwrap();

    let output = run(&home, &["00:00:01"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "0\n0000\n0000\n00000000000\n0000\n");
}

#[test]
fn test_config_line_ending_is_used() {
    let home = tempdir().unwrap();
    let config_dir = home.path().join("berlin-clock");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[display]\nline_ending = \"crlf\"\n").unwrap();

    let output = run(&home, &["00:00:01"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "0\r\n0000\r\n0000\r\n00000000000\r\n0000\n");
}
