// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs;

use tempfile::TempDir;

use crate::{get_116_nf_frequency, get_cmd_output, mieze_capacity};

#[test]
fn test_check_fit_of_modelled_frequency() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let measurements = tmp_dir.path().join("measurements.csv");
    fs::write(
        &measurements,
        format!(
            "frequency,capacity_1,capacity_2,connection_type\n{},5,4,0\n,,,\n",
            get_116_nf_frequency()
        ),
    )
    .unwrap();

    let cmd = mieze_capacity()
        .arg("check-fit")
        .arg(&measurements)
        .ok();
    assert!(cmd.is_ok(), "check-fit failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("RMS residual: 0.0 Hz"), "{stdout}");
}

#[test]
fn test_check_fit_without_measurements_fails() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let measurements = tmp_dir.path().join("measurements.csv");
    fs::write(
        &measurements,
        "frequency,capacity_1,capacity_2,connection_type\nbad,5,4,0\n",
    )
    .unwrap();

    let cmd = mieze_capacity()
        .arg("check-fit")
        .arg(&measurements)
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("No usable measurements"), "{stderr}");
}
