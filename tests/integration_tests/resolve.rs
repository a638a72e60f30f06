// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs;

use indoc::indoc;
use tempfile::TempDir;

use crate::{get_116_nf_frequency, get_cmd_output, mieze_capacity};

#[test]
fn test_resolve_exact_setting() {
    let frequency = format!("{}", get_116_nf_frequency());
    for extra in [None, Some("--sorted")] {
        let mut cmd = mieze_capacity();
        cmd.args(["resolve", &frequency]);
        if let Some(extra) = extra {
            cmd.arg(extra);
        }
        let cmd = cmd.ok();
        assert!(cmd.is_ok(), "resolve failed: {}", cmd.err().unwrap());
        let (stdout, _) = get_cmd_output(cmd);

        assert!(stdout.contains("C1 index: 5"), "{stdout}");
        assert!(stdout.contains("C2 index: 4"), "{stdout}");
        assert!(stdout.contains("C3 index: 0"), "{stdout}");
        assert!(stdout.contains("Connection: parallel (0)"), "{stdout}");
        assert!(stdout.contains("Achieved eigenfrequency"), "{stdout}");
    }
}

#[test]
fn test_resolve_greedy() {
    let frequency = format!("{}", get_116_nf_frequency());
    let cmd = mieze_capacity()
        .args(["resolve", &frequency, "--greedy"])
        .ok();
    assert!(cmd.is_ok(), "resolve failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("C1 index: 5"), "{stdout}");
    assert!(stdout.contains("C2 index: 4"), "{stdout}");
    // The greedy decomposition doesn't choose a connection.
    assert!(!stdout.contains("Connection:"), "{stdout}");
}

#[test]
fn test_resolve_greedy_warns_about_unused_options() {
    let frequency = format!("{}", get_116_nf_frequency());
    let cmd = mieze_capacity()
        .args([
            "resolve",
            &frequency,
            "--greedy",
            "--sorted",
            "--table",
            "unused_table.csv",
        ])
        .ok();
    assert!(cmd.is_ok(), "resolve failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Warnings"), "{stdout}");
    assert!(stdout.contains("--sorted has no effect with --greedy"), "{stdout}");
    assert!(
        stdout.contains("The table unused_table.csv is not used with --greedy"),
        "{stdout}"
    );
    assert!(stdout.contains("C1 index: 5"), "{stdout}");
}

#[test]
fn test_resolve_with_units() {
    let cmd = mieze_capacity().args(["resolve", "200kHz"]).ok();
    assert!(cmd.is_ok(), "resolve failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Eigenfrequency:       200000 Hz"), "{stdout}");
}

#[test]
fn test_resolve_dry_run() {
    let cmd = mieze_capacity()
        .args(["resolve", "200kHz", "--dry-run"])
        .ok();
    assert!(cmd.is_ok(), "resolve failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Dry run -- exiting now."), "{stdout}");
    assert!(!stdout.contains("Best bank settings"), "{stdout}");
}

#[test]
fn test_resolve_empty_table_fails() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let table = tmp_dir.path().join("table.csv");
    fs::write(
        &table,
        "capacity,c1_box_index,c2_box_index,c3_box_index,connection_type\n",
    )
    .unwrap();

    let output = mieze_capacity()
        .args(["resolve", "200kHz", "--table"])
        .arg(&table)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error:"), "{stderr}");
    assert!(stderr.contains("empty"), "{stderr}");
}

#[test]
fn test_resolve_bad_frequency_fails() {
    let output = mieze_capacity()
        .args(["resolve", "20GHz"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error:"), "{stderr}");
    assert!(stderr.contains("20GHz"), "{stderr}");
}

#[test]
fn test_resolve_without_frequency_or_terminal_fails() {
    let output = mieze_capacity().arg("resolve").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No eigenfrequency was given"), "{stderr}");
}

#[test]
fn test_resolve_args_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let args_file = tmp_dir.path().join("args.toml");
    fs::write(
        &args_file,
        indoc! {r#"
            frequency = "200kHz"
            greedy = true

            [circuit]
            inductance = 22.45e-6
        "#},
    )
    .unwrap();

    let cmd = mieze_capacity()
        .args(["resolve", "--args-file"])
        .arg(&args_file)
        .ok();
    assert!(cmd.is_ok(), "resolve failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Eigenfrequency:       200000 Hz"), "{stdout}");
    assert!(!stdout.contains("Connection:"), "{stdout}");

    // CLI arguments win over file arguments.
    let cmd = mieze_capacity()
        .args(["resolve", "100kHz", "--args-file"])
        .arg(&args_file)
        .ok();
    assert!(cmd.is_ok(), "resolve failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Eigenfrequency:       100000 Hz"), "{stdout}");
}

#[test]
fn test_resolve_save_toml() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let toml = tmp_dir.path().join("saved.toml");

    let cmd = mieze_capacity()
        .args(["resolve", "200kHz", "--sorted", "--dry-run", "--save-toml"])
        .arg(&toml)
        .ok();
    assert!(cmd.is_ok(), "resolve failed: {}", cmd.err().unwrap());

    let saved = fs::read_to_string(&toml).unwrap();
    assert!(saved.contains(r#"frequency = "200kHz""#), "{saved}");
    assert!(saved.contains("sorted = true"), "{saved}");

    // The saved arguments reproduce the run.
    let cmd = mieze_capacity()
        .args(["resolve", "--args-file"])
        .arg(&toml)
        .ok();
    assert!(cmd.is_ok(), "resolve failed: {}", cmd.err().unwrap());
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("Eigenfrequency:       200000 Hz"), "{stdout}");
}

#[test]
fn test_unrecognised_args_file_extension() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let args_file = tmp_dir.path().join("args.yaml");
    fs::write(&args_file, "frequency: 200kHz\n").unwrap();

    let output = mieze_capacity()
        .args(["resolve", "--args-file"])
        .arg(&args_file)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("recognised file extension"), "{stderr}");
}
