// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests to ensure there is no stderr output for successful commands.

use tempfile::TempDir;

use crate::{get_cmd_output, mieze_capacity};

#[test]
fn test_resolve_no_stderr() {
    #[rustfmt::skip]
    let cmd = mieze_capacity()
        .args([
            "resolve", "200kHz",
            "-vv",
        ])
        .ok();
    assert!(cmd.is_ok(), "resolve failed: {}", cmd.err().unwrap());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_build_table_no_stderr() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let table = tmp_dir.path().join("table.csv");

    #[rustfmt::skip]
    let cmd = mieze_capacity()
        .args([
            "build-table",
            "-o", &format!("{}", table.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "build-table failed: {}", cmd.err().unwrap());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_frequency_table_no_stderr() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let schedule = tmp_dir.path().join("schedule.csv");

    #[rustfmt::skip]
    let cmd = mieze_capacity()
        .args([
            "frequency-table",
            "-o", &format!("{}", schedule.display()),
        ])
        .ok();
    assert!(cmd.is_ok(), "frequency-table failed: {}", cmd.err().unwrap());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}
