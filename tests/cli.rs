//! Command line tests for the headless `--print` mode.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const SEA_LEVEL: &str = "\
Year, Month, Monthly_MSL, Linear_Trend, High_Conf., Low_Conf.
 1995 ,  12 , -0.080 , -0.075 , -0.050 , -0.110
 1996 ,  1 , -0.112 , -0.074 , -0.081 , -0.143
 1996 ,  2 , -0.090 , -0.074 , -0.060 , -0.120
 1997 ,  1 , -0.020 , -0.071 ,  0.010 , -0.050
";

const STORMS: &str = "\
EVENT_ID,BEGIN_DATE,EVENT_TYPE,EVENT_NARRATIVE,EPISODE_NARRATIVE
5001,2/20/96,Coastal Flood,\"Minor flooding, Key Biscayne.\",Nor'easter
5002,1/9/96,High Surf,,
5003,1/2/96,Coastal Flood,,
5004,10/3/97,Storm Surge/Tide,,
";

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn prints_the_opening_year() {
    let sea = csv_file(SEA_LEVEL);
    let storms = csv_file(STORMS);

    Command::cargo_bin("tideline")
        .unwrap()
        .arg(sea.path())
        .arg(storms.path())
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sea level 1996"))
        .stdout(predicate::str::contains("Monthly mean: Jan -0.112, Feb -0.090"))
        .stdout(predicate::str::contains(
            "  Feb 1996\n    1996-02-20 5001 Coastal Flood\n  Jan 1996\n    1996-01-02 5003 Coastal Flood\n    1996-01-09 5002 High Surf\n",
        ));
}

#[test]
fn year_flag_overrides_the_opening_year() {
    let sea = csv_file(SEA_LEVEL);
    let storms = csv_file(STORMS);

    Command::cargo_bin("tideline")
        .unwrap()
        .arg(sea.path())
        .arg(storms.path())
        .args(["--year", "1997", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sea level 1997"))
        .stdout(predicate::str::contains("Oct 1997"));
}

#[test]
fn malformed_rows_do_not_stop_the_chart() {
    let sea = csv_file(&format!("{SEA_LEVEL}nineteen, 3, 0.1, 0.1, 0.1, 0.1\n  ,  ,,,,\n 1996 , 3 , n/a , -0.073 , -0.050 , -0.110\n   \n"));
    let storms = csv_file(&format!("{STORMS}5001,3/1/96,Duplicate,,\n5005,,High Surf,,\nabc,3/2/96,High Surf,,\n"));

    Command::cargo_bin("tideline")
        .unwrap()
        .arg(sea.path())
        .arg(storms.path())
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sea level 1996"))
        .stdout(predicate::str::contains("Monthly mean: Jan -0.112, Feb -0.090, Mar NaN"))
        .stdout(predicate::str::contains("1996-02-20 5001 Coastal Flood"))
        .stdout(predicate::str::contains("Duplicate").not())
        .stdout(predicate::str::contains("Mar 1996").not());
}

#[test]
fn load_failure_prints_nothing() {
    let storms = csv_file(STORMS);

    Command::cargo_bin("tideline")
        .unwrap()
        .arg("missing-sea-level.csv")
        .arg(storms.path())
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn load_failure_is_logged() {
    let storms = csv_file(STORMS);
    let log = NamedTempFile::new().unwrap();

    Command::cargo_bin("tideline")
        .unwrap()
        .arg("missing-sea-level.csv")
        .arg(storms.path())
        .arg("--print")
        .arg("--log")
        .arg(log.path())
        .env_remove("RUST_LOG")
        .assert()
        .success();

    let contents = std::fs::read_to_string(log.path()).unwrap();
    assert!(contents.contains("Error loading chart data"), "log was: {contents}");
    assert!(contents.contains("missing-sea-level.csv"), "log was: {contents}");
    assert!(contents.contains("os error"), "log was: {contents}");
}

#[test]
fn missing_arguments_show_usage() {
    Command::cargo_bin("tideline")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
