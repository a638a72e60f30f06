// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs;

use tempfile::TempDir;

use mieze_capacity::{
    capacity::{BankSet, CapacityTable},
    io::{read_capacity_table_file, TableRead, CAPACITY_TABLE_HEADER},
};

use crate::{get_cmd_output, mieze_capacity};

#[test]
fn test_build_table() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let table = tmp_dir.path().join("table.csv");

    let cmd = mieze_capacity()
        .args(["build-table", "-o"])
        .arg(&table)
        .ok();
    assert!(cmd.is_ok(), "build-table failed: {}", cmd.err().unwrap());

    let contents = fs::read_to_string(&table).unwrap();
    assert_eq!(contents.lines().next(), Some(CAPACITY_TABLE_HEADER));

    let TableRead {
        table: read,
        num_skipped,
    } = read_capacity_table_file(&table).unwrap();
    assert_eq!(num_skipped, 0);
    assert_eq!(read, CapacityTable::build(&BankSet::default()));
}

#[test]
fn test_build_table_custom_banks() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let table = tmp_dir.path().join("table.csv");

    let cmd = mieze_capacity()
        .args([
            "build-table",
            "--c1-weights", "1,2",
            "--c2-weights", "1",
            "--c3-weights", "1",
            "-o",
        ])
        .arg(&table)
        .ok();
    assert!(cmd.is_ok(), "build-table failed: {}", cmd.err().unwrap());

    let TableRead { table, .. } = read_capacity_table_file(&table).unwrap();
    // 4 * 2 * 2 * 2 combinations, but many coincide.
    assert!(table.len() < 32);
    assert!(!table.is_empty());
}

#[test]
fn test_build_table_without_output_fails() {
    let output = mieze_capacity().arg("build-table").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No output file"), "{stderr}");
}

#[test]
fn test_build_table_bad_weights_fail() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let table = tmp_dir.path().join("table.csv");

    let cmd = mieze_capacity()
        .args(["build-table", "--c2-weights", "1,-2", "-o"])
        .arg(&table)
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.starts_with("Error: Bank 2"), "{stderr}");
    assert!(!table.exists());
}
