//! Integration tests for the remittance CLI.
//!
//! These tests run the actual binary in a temporary working directory and
//! inspect the generated `.REM` file.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PAYER_CSV: &str = "tax_id,name,account_number,account_check_digit,street,number,complement,city,postal_code,state\n\
                         53914002000152,FURQUIM FISIOTERAPIA LTDA,34242533,1,RUA DO SOL,368,,CURITIBA,81910350,PR\n";

const PAYMENTS_CSV: &str = "name,key_type,key_value,amount\n\
                            Joao da Silva,EMAIL,joao@example.com,1250.50\n\
                            Maria Souza,CPF,11122233344,980.00\n";

/// Write payer and payment CSV inputs into the temporary directory.
fn write_inputs(dir: &TempDir, payments: &str) {
    fs::write(dir.path().join("payer.csv"), PAYER_CSV).unwrap();
    fs::write(dir.path().join("payments.csv"), payments).unwrap();
}

/// A command running in the temporary directory with both input paths set.
fn cmd_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cnab240-pix").unwrap();
    cmd.current_dir(dir.path())
        .arg("payer.csv")
        .arg("payments.csv");
    cmd
}

/// Names of `.REM` files left in the directory.
fn rem_files(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".REM"))
        .collect();
    names.sort();
    names
}

#[test]
fn test_generates_remittance_file() {
    let dir = TempDir::new().unwrap();
    write_inputs(&dir, PAYMENTS_CSV);

    cmd_in(&dir)
        .arg("7")
        .assert()
        .success()
        .stdout(predicate::str::contains("C1240_001_0000007.REM"));

    assert_eq!(rem_files(&dir), vec!["C1240_001_0000007.REM"]);

    let contents = fs::read_to_string(dir.path().join("C1240_001_0000007.REM")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    // File header + batch header + 2 A/B pairs + batch trailer + file trailer
    assert_eq!(lines.len(), 8);
    for line in &lines {
        assert_eq!(line.len(), 240);
        assert!(line.is_ascii());
    }
    assert!(lines[0].starts_with("07700000"));
    assert!(lines[7].starts_with("07799999"));
}

#[test]
fn test_batch_trailer_totals_in_generated_file() {
    let dir = TempDir::new().unwrap();
    write_inputs(&dir, PAYMENTS_CSV);

    cmd_in(&dir).arg("1").assert().success();

    let contents = fs::read_to_string(dir.path().join("C1240_001_0000001.REM")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    // 125050 + 98000 cents
    assert_eq!(&lines[6][17..23], "000006");
    assert_eq!(&lines[6][23..41], "000000000000223050");
    assert_eq!(&lines[7][23..29], "000008");
}

#[test]
fn test_empty_payment_list_yields_structural_records_only() {
    let dir = TempDir::new().unwrap();
    write_inputs(&dir, "name,key_type,key_value,amount\n");

    cmd_in(&dir).arg("3").assert().success();

    let contents = fs::read_to_string(dir.path().join("C1240_001_0000003.REM")).unwrap();
    assert_eq!(contents.lines().count(), 4);
}

#[test]
fn test_unknown_key_type_leaves_no_partial_file() {
    let dir = TempDir::new().unwrap();
    let payments = "name,key_type,key_value,amount\n\
                    Joao,EMAIL,joao@example.com,10.00\n\
                    Maria,BOLETO,123,20.00\n";
    write_inputs(&dir, payments);

    cmd_in(&dir)
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("BOLETO"));

    assert!(rem_files(&dir).is_empty());
}

#[test]
fn test_non_positive_amount_leaves_no_partial_file() {
    let dir = TempDir::new().unwrap();
    let payments = "name,key_type,key_value,amount\n\
                    Joao,EMAIL,joao@example.com,0.00\n";
    write_inputs(&dir, payments);

    cmd_in(&dir)
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Non-positive amount"));

    assert!(rem_files(&dir).is_empty());
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("cnab240-pix").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_invalid_sequence_error() {
    let dir = TempDir::new().unwrap();
    write_inputs(&dir, PAYMENTS_CSV);

    cmd_in(&dir)
        .arg("seven")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid file sequence number"));
}

#[test]
fn test_missing_input_file_error() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("cnab240-pix").unwrap();
    cmd.current_dir(dir.path())
        .args(["nope.csv", "nada.csv", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
