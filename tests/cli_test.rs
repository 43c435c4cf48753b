mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::{TEST_SETTINGS, snapshot, write_temp};
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_redirect_prints_gateway_url() -> Result<(), Box<dyn std::error::Error>> {
    let settings = write_temp(TEST_SETTINGS)?;
    let snapshot = write_temp(&snapshot(true))?;

    let mut cmd = Command::new(cargo_bin!("bitcoinus"));
    cmd.arg("redirect")
        .arg("--settings")
        .arg(settings.path())
        .arg("--snapshot")
        .arg(snapshot.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("https://pay.bitcoinus.io/do?data="))
        .stdout(predicate::str::contains("&items="))
        .stdout(predicate::str::contains("&signature="));

    Ok(())
}

#[test]
fn test_redirect_refuses_unconfigured_method() {
    let settings = write_temp(r#"{"projectid": "1001", "secretkey": ""}"#).unwrap();
    let snapshot = write_temp(&snapshot(true)).unwrap();

    let mut cmd = Command::new(cargo_bin!("bitcoinus"));
    cmd.arg("redirect")
        .arg("--settings")
        .arg(settings.path())
        .arg("--snapshot")
        .arg(snapshot.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Gateway not configured"));
}

#[test]
fn test_malformed_snapshot_fails() {
    let settings = write_temp(TEST_SETTINGS).unwrap();
    let snapshot = write_temp("{\"currency\": ").unwrap();

    let mut cmd = Command::new(cargo_bin!("bitcoinus"));
    cmd.arg("redirect")
        .arg("--settings")
        .arg(settings.path())
        .arg("--snapshot")
        .arg(snapshot.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_cancel_callback_cli() {
    let settings = write_temp(TEST_SETTINGS).unwrap();
    let snapshot = write_temp(&snapshot(true)).unwrap();

    let mut cmd = Command::new(cargo_bin!("bitcoinus"));
    cmd.arg("callback")
        .arg("--settings")
        .arg(settings.path())
        .arg("--snapshot")
        .arg(snapshot.path())
        .arg("--query")
        .arg("cancel=1&data=%7B%22status%22%3A1%7D&signature=whatever");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"status\":\"canceled\""))
        .stdout(predicate::str::contains("\"note\":\"Payment Cancelled\""))
        .stdout(predicate::str::contains("\"order_payment_status\":\"queued\""));
}
