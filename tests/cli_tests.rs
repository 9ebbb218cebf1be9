//! Integration tests for the CLI interface
//!
//! Tests the main entry point, command parsing and output formats

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn drills() -> Command {
    let mut cmd = Command::cargo_bin("drills").unwrap();
    // Keep the user's environment and config file out of the tests
    cmd.env_remove("DRILLS_LOG_LEVEL")
        .env_remove("DRILLS_OUTPUT")
        .env("HOME", env!("CARGO_TARGET_TMPDIR"))
        .env("XDG_CONFIG_HOME", env!("CARGO_TARGET_TMPDIR"));
    cmd
}

#[test]
fn test_cli_help_default() {
    // Running without arguments shows help
    drills()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_invalid_command() {
    drills()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_lucky_sample_input() {
    drills().arg("lucky").assert().success().stdout(
        "7 is a lucky number\n\
         15 is a lucky number\n\
         21 is a lucky number\n\
         31 is a lucky number\n\
         33 is a lucky number\n\
         49 is a lucky number\n",
    );
}

#[test]
fn test_lucky_custom_numbers_with_negatives() {
    drills()
        .args(["lucky", "-3", "10", "1"])
        .assert()
        .success()
        .stdout("-3 is a lucky number\n1 is a lucky number\n");
}

#[test]
fn test_lucky_all_even_prints_nothing() {
    drills()
        .args(["lucky", "2", "4"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_sqrt_outcomes() {
    drills()
        .args(["sqrt", "100"])
        .assert()
        .success()
        .stdout("Square root of 100 is 10.\n");

    drills()
        .args(["sqrt", "99"])
        .assert()
        .success()
        .stdout("99 is not a perfect square root.\n");

    drills()
        .args(["sqrt", "10001"])
        .assert()
        .success()
        .stdout("10001 is out of bounds\n");
}

#[test]
fn test_sqrt_json() {
    let output = drills()
        .args(["sqrt", "0", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["input"], 0);
    assert_eq!(json["error"]["kind"], "OutOfBounds");
    assert_eq!(json["error"]["upper"], 10_000);
}

#[test]
fn test_fizzbuzz_range() {
    drills()
        .args(["fizzbuzz", "--start", "9", "--end", "15"])
        .assert()
        .success()
        .stdout("Fizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz\n");
}

#[test]
fn test_fizzbuzz_reversed_range_fails_validation() {
    drills()
        .args(["fizzbuzz", "--start", "10", "--end", "1"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("Start 10 is after end 1"));
}

#[test]
fn test_temperature() {
    drills()
        .args(["temperature", "32"])
        .assert()
        .success()
        .stdout("32.0°C\n89.6°F\n");

    drills()
        .args(["temp", "-40"])
        .assert()
        .success()
        .stdout("-40.0°C\n-40.0°F\n");
}

#[test]
fn test_gearbox_checkpoint_sequence() {
    drills()
        .args(["gearbox", "up", "up", "down"])
        .assert()
        .success()
        .stdout(
            "Mazda with 3 seats, starting in gear 3\n\
             You are now in gear 4\n\
             You are now in gear 5\n\
             You are now in gear 4\n",
        );
}

#[test]
fn test_gearbox_invalid_settings() {
    drills()
        .args(["gearbox", "--seats", "0", "--gear", "11"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("Seats must be greater than 0"))
        .stderr(predicate::str::contains("Gear 11 is outside 1..=10"));
}

#[test]
fn test_pick_from_single_number() {
    drills()
        .args(["pick", "42"])
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn test_pick_seeded_is_reproducible() {
    let run = || {
        drills()
            .args(["pick", "1", "2", "3", "4", "5", "--seed", "7"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_pick_fallback_in_range() {
    let output = drills().args(["pick", "--seed", "3"]).output().unwrap();
    let value: i64 = String::from_utf8(output.stdout)
        .unwrap()
        .trim()
        .parse()
        .unwrap();
    assert!((1..=100).contains(&value));
}

#[test]
fn test_config_file_changes_behavior() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("drills.toml");
    std::fs::write(&path, "[square_root]\nupper = 50\n\n[gearbox]\ntop_gear = 5\n").unwrap();

    drills()
        .arg("--config")
        .arg(&path)
        .args(["sqrt", "64"])
        .assert()
        .success()
        .stdout("64 is out of bounds\n");

    drills()
        .arg("-c")
        .arg(&path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("top_gear = 5"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();
    drills()
        .arg("--config")
        .arg(temp.path().join("nope.toml"))
        .arg("lucky")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration problem"));
}

#[test]
fn test_env_output_override() {
    let output = drills()
        .env("DRILLS_OUTPUT", "json")
        .args(["lucky", "3"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["lucky"][0], "3 is a lucky number");
}

#[test]
fn test_format_flag_beats_env() {
    drills()
        .env("DRILLS_OUTPUT", "json")
        .args(["--format", "text", "sqrt", "4"])
        .assert()
        .success()
        .stdout("Square root of 4 is 2.\n");
}

#[test]
fn test_invalid_env_output_fails() {
    drills()
        .env("DRILLS_OUTPUT", "yaml")
        .args(["sqrt", "4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("yaml"));
}
