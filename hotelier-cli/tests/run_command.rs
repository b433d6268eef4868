//! Integration tests for the `run` and `simulate` commands.

mod common;

use common::TestEnv;
use predicates::prelude::*;

const JOURNEY: &str = r#"
steps:
  - book: { guest: g1, room: 101, check_in: 2024-01-01, check_out: 2024-01-03, as: ada }
  - book: { guest: g1, room: 101, check_in: 2024-01-05, check_out: 2024-01-06 }
    expect: resource_unavailable
  - check_in: { reservation: ada }
  - check_in: { reservation: ada }
    expect: invalid_state
  - check_out: { reservation: ada, payment: { cash: 150 } }
    expect: payment_failed
  - check_out: { reservation: ada, payment: { cash: 200 } }
  - book: { guest: g1, room: 102, check_in: 2024-02-01, check_out: 2024-02-02, as: bob }
"#;

/// Runs a full guest journey whose every outcome matches its expectation.
///
/// **What this tests:**
/// - Aliases issued by `as:` resolve in later steps
/// - Declined payments and duplicate bookings are expected outcomes
/// - The final room table reflects the end state
#[test]
fn test_run_journey() {
    let env = TestEnv::new();
    let script = env.write_file("journey.yaml", JOURNEY);

    env.command()
        .arg("run")
        .arg(&script)
        .assert()
        .success()
        .stderr(predicate::str::contains("[1] book 101 for g1"))
        .stderr(predicate::str::contains("booked RES00000001"))
        .stderr(predicate::str::contains("checked out, paid 200.00"))
        .stdout(predicate::str::contains("101\tsingle\t100.00\tavailable\t-"))
        .stdout(predicate::str::contains(
            "102\tsuite\t250.50\treserved\tRES00000002",
        ));
}

/// A step whose outcome differs from its expectation fails the run.
#[test]
fn test_run_expectation_mismatch() {
    let env = TestEnv::new();
    let script = env.write_file(
        "mismatch.yaml",
        "steps:\n  - book: { guest: g1, room: 999, check_in: 2024-01-01, check_out: 2024-01-02 }\n",
    );

    env.command()
        .arg("run")
        .arg(&script)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected ok, got not_found"))
        .stderr(predicate::str::contains("1 of 1 step(s) did not match"));
}

/// `--dry-run` prints plans and leaves every room available.
#[test]
fn test_run_dry_run() {
    let env = TestEnv::new();
    let script = env.write_file("journey.yaml", JOURNEY);

    env.command()
        .args(["run", "--dry-run"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Book room 101"))
        .stdout(predicate::str::contains("would fail"))
        .stdout(predicate::str::contains("reserved").not());
}

/// `--format json` applies to the final room listing.
#[test]
fn test_run_json_output() {
    let env = TestEnv::new();
    let script = env.write_file("journey.yaml", JOURNEY);

    let output = env
        .command()
        .args(["--quiet", "run", "--format", "json"])
        .arg(&script)
        .output()
        .unwrap();
    assert!(output.status.success());

    let rooms: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rooms[1]["status"], "reserved");
    assert_eq!(rooms[1]["reservation"], "RES00000002");
}

/// Scripts that do not parse are invalid arguments.
#[test]
fn test_run_invalid_script() {
    let env = TestEnv::new();
    let script = env.write_file("bad.yaml", "steps:\n  - teleport: { to: moon }\n");

    env.command()
        .arg("run")
        .arg(&script)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid script"));
}

/// A missing script is an invalid argument.
#[test]
fn test_run_missing_script() {
    let env = TestEnv::new();

    env.command()
        .args(["run", "nope.yaml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Script not found"));
}

/// The reservation id prefix comes from configuration.
#[test]
fn test_run_uses_configured_prefix() {
    let env = TestEnv::new();
    let script = env.write_file(
        "one.yaml",
        "steps:\n  - book: { guest: g1, room: 101, check_in: 2024-01-01, check_out: 2024-01-02 }\n",
    );

    env.command()
        .env("HOTELIER_RESERVATION_ID_PREFIX", "INN")
        .arg("run")
        .arg(&script)
        .assert()
        .success()
        .stderr(predicate::str::contains("booked INN00000001"));
}

/// Many bookers race for one room and exactly one wins.
///
/// **Invariant verified:**
/// N concurrent bookings of one room yield one id and N-1 rejections.
#[test]
fn test_simulate_single_winner() {
    let env = TestEnv::new();

    env.command()
        .args(["simulate", "--room", "101", "--bookers", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 winner(s), 11 rejected"))
        .stdout(predicate::str::contains("won RES00000001"));
}

/// Simulating against an unknown room is a library error.
#[test]
fn test_simulate_unknown_room() {
    let env = TestEnv::new();

    env.command()
        .args(["simulate", "--room", "404"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("room not found: 404"));
}

/// A missing `--config` file is a configuration error.
#[test]
fn test_missing_config_file() {
    let env = TestEnv::new();

    env.command()
        .args(["--config", "absent.yaml", "rooms"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("File not found"));
}

/// Malformed discovered configuration is a configuration error.
#[test]
fn test_malformed_discovered_config() {
    let env = TestEnv::empty();
    env.write_file("hotelier.yaml", "rooms: [ {");

    env.command().arg("rooms").assert().code(7);
}

/// Bad argument values are rejected by clap.
#[test]
fn test_invalid_bookers() {
    let env = TestEnv::new();

    env.command()
        .args(["simulate", "--room", "101", "--bookers", "0"])
        .assert()
        .failure();
}
