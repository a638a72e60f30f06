// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs;

use tempfile::TempDir;

use mieze_capacity::mieze::SCHEDULE_HEADER;

use crate::{get_cmd_output, mieze_capacity};

#[test]
fn test_frequency_table() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let schedule = tmp_dir.path().join("schedule.csv");

    let cmd = mieze_capacity()
        .args(["frequency-table", "--start", "30kHz", "--stop", "100kHz", "-o"])
        .arg(&schedule)
        .ok();
    assert!(cmd.is_ok(), "frequency-table failed: {}", cmd.err().unwrap());

    let contents = fs::read_to_string(&schedule).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], SCHEDULE_HEADER);
    assert_eq!(lines.len(), 8);
    assert!(lines[1].starts_with("0.118,30000,"), "{}", lines[1]);
    assert!(lines[1].ends_with(",12000,192000"), "{}", lines[1]);
}

#[test]
fn test_frequency_table_default_range() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let schedule = tmp_dir.path().join("schedule.csv");

    let cmd = mieze_capacity()
        .args(["frequency-table", "-o"])
        .arg(&schedule)
        .ok();
    assert!(cmd.is_ok(), "frequency-table failed: {}", cmd.err().unwrap());

    let contents = fs::read_to_string(&schedule).unwrap();
    assert_eq!(contents.lines().count(), 21);
}

#[test]
fn test_frequency_table_bad_ratio() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let schedule = tmp_dir.path().join("schedule.csv");

    let cmd = mieze_capacity()
        .args(["frequency-table", "--ratio", "0.5", "-o"])
        .arg(&schedule)
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("ratio"), "{stderr}");
    assert!(!schedule.exists());
}
