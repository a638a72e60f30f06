// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{get_cmd_output, mieze_capacity};

#[test]
fn test_capacity_of_setting() {
    let cmd = mieze_capacity()
        .args(["capacity", "5", "4", "--series"])
        .ok();
    assert!(cmd.is_ok(), "capacity failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Capacitance: 1.96551724"), "{stdout}");
    assert!(stdout.contains("Connection: series"), "{stdout}");

    let cmd = mieze_capacity().args(["capacity", "5", "4", "0"]).ok();
    assert!(cmd.is_ok(), "capacity failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Capacitance: 1.1"), "{stdout}");
    assert!(stdout.contains("Connection: parallel"), "{stdout}");
    assert!(stdout.contains("Eigenfrequency: "), "{stdout}");
}

#[test]
fn test_capacity_index_out_of_range() {
    let cmd = mieze_capacity().args(["capacity", "64", "0"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.starts_with("Error:"), "{stderr}");
    assert!(stderr.contains("64"), "{stderr}");
}

#[test]
fn test_capacity_missing_index() {
    let cmd = mieze_capacity().args(["capacity", "5"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("bank-2 index"), "{stderr}");
}
