use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn teller(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("teller").unwrap();
    cmd.env("TELLER_CLI_DATA_DIR", data_dir.path())
        .env_remove("TELLER_ENDPOINT");
    cmd
}

#[test]
fn test_config_shows_defaults() {
    let dir = TempDir::new().unwrap();
    teller(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost/cgi-bin/bank.cgi"))
        .stdout(predicate::str::contains("₹"));
}

#[test]
fn test_endpoint_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    teller(&dir)
        .args(["--endpoint", "http://ledger.test/bank.cgi", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://ledger.test/bank.cgi"));
}

#[test]
fn test_init_writes_config() {
    let dir = TempDir::new().unwrap();
    teller(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn test_zero_deposit_warns_without_network() {
    let dir = TempDir::new().unwrap();
    teller(&dir)
        .args(["--endpoint", "http://127.0.0.1:9/bank.cgi", "deposit", "7", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter valid values"));
}

#[test]
fn test_negative_withdraw_warns() {
    let dir = TempDir::new().unwrap();
    teller(&dir)
        .args(["--endpoint", "http://127.0.0.1:9/bank.cgi", "withdraw", "7", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter valid values"));
}

#[test]
fn test_bad_balance_account_warns() {
    let dir = TempDir::new().unwrap();
    teller(&dir)
        .args(["--endpoint", "http://127.0.0.1:9/bank.cgi", "account", "balance", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid account number"));
}

#[test]
fn test_unreachable_endpoint_reports_generic_error() {
    let dir = TempDir::new().unwrap();
    teller(&dir)
        .args(["--endpoint", "http://127.0.0.1:9/bank.cgi", "deposit", "7", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "An error occurred. Please try again later.",
        ));
}
