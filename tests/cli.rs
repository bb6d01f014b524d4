//! CLI tests for the `proccsv` and `testfilegen` binaries.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[allow(deprecated)]
fn proccsv() -> Command {
    Command::cargo_bin("proccsv").unwrap()
}

#[allow(deprecated)]
fn testfilegen() -> Command {
    Command::cargo_bin("testfilegen").unwrap()
}

// ============================================================================
// proccsv
// ============================================================================

#[test]
fn processes_explicit_input_into_output_dir() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("report.csv");
    let out_dir = dir.path().join("out");
    fs::write(
        &input,
        "01/02/2020,California,100,5%\n01/02/2020,Nevada,50,10%\n13/40/2020,Texas,10,5%\n",
    )
    .unwrap();

    proccsv()
        .args(["--input", input.to_str().unwrap()])
        .args(["--output-dir", out_dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total number of invalid lines in the input file: 1",
        ))
        .stdout(predicate::str::contains("File processed!"))
        .stderr(predicate::str::contains("Error in line 3: invalid date '13/40/2020'"));

    let out = fs::read_to_string(out_dir.join("report_processed.csv")).unwrap();
    assert_eq!(out.lines().collect::<Vec<_>>(), vec!["2020-01-02,USA,150,10"]);
}

#[test]
fn writes_json_summary() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("r.csv");
    let output = dir.path().join("r_out.csv");
    let summary = dir.path().join("summary.json");
    fs::write(&input, "01/02/2020,Atlantis,10,10%\nbad line\n").unwrap();

    proccsv()
        .args(["-i", input.to_str().unwrap()])
        .args(["-o", output.to_str().unwrap()])
        .args(["--summary", summary.to_str().unwrap()])
        .args(["--preview", "0"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&summary).unwrap()).unwrap();
    assert_eq!(json["encoding"], "UTF-8");
    assert_eq!(json["total_lines"], 2);
    assert_eq!(json["accepted_rows"], 1);
    assert_eq!(json["rejected_rows"], 1);
    assert_eq!(json["unknown_country_rows"], 1);
    assert_eq!(json["output_rows"], 1);
    assert_eq!(fs::read_to_string(&output).unwrap().trim_end(), "2020-01-02,XXX,10,1");
}

#[test]
fn interactive_selection_and_quit() {
    let dir = tempdir().unwrap();
    let in_dir = dir.path().join("input");
    fs::create_dir(&in_dir).unwrap();
    fs::write(in_dir.join("a.csv"), "01/02/2020,Texas,10,10%\n").unwrap();

    proccsv()
        .args(["--input-dir", in_dir.to_str().unwrap()])
        .args(["--output-dir", dir.path().join("output").to_str().unwrap()])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] a.csv"))
        .stdout(predicate::str::contains("File processed!").not());

    proccsv()
        .args(["--input-dir", in_dir.to_str().unwrap()])
        .args(["--output-dir", dir.path().join("output").to_str().unwrap()])
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File processed!"));
    assert!(dir.path().join("output").join("a_processed.csv").exists());
}

#[test]
fn bad_encoding_fails_run() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("latin1.csv");
    fs::write(&input, b"01/02/2020,Z\xfcrich,1,1%\n").unwrap();

    proccsv()
        .args(["-i", input.to_str().unwrap()])
        .args(["--output-dir", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid encoding of the input file"));
}

// ============================================================================
// testfilegen -> proccsv
// ============================================================================

#[test]
fn generated_utf16_file_processes_cleanly() {
    let dir = tempdir().unwrap();
    let in_dir = dir.path().join("input");

    testfilegen()
        .args(["--rows", "300", "--encoding", "utf-16", "--seed", "42"])
        .args(["--output-dir", in_dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test csv file created!"));

    let generated = in_dir.join("test_300_16.csv");
    assert!(generated.exists());

    proccsv()
        .args(["-i", generated.to_str().unwrap()])
        .args(["--output-dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total number of invalid lines in the input file: 0",
        ))
        .stderr(predicate::str::contains("Error in line").not());
}

#[test]
fn generator_rejects_reversed_dates() {
    let dir = tempdir().unwrap();
    testfilegen()
        .args(["--date-from", "2020-01-01", "--date-to", "2019-01-01"])
        .args(["--output-dir", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid generator settings"));
}
