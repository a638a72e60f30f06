// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod build_table;
mod capacity;
mod check_fit;
mod frequency_table;
mod no_stderr;
mod resolve;

use std::{process::Output, str::from_utf8};

use assert_cmd::{output::OutputError, Command};

use mieze_capacity::{
    capacity::{BankSet, ConnectionMode},
    eigenfrequency::EigenfrequencyModel,
};

fn mieze_capacity() -> Command {
    Command::cargo_bin("mieze-capacity").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

/// The eigenfrequency of the default circuit with banks 1 and 2 set to 5 and
/// 4 (116 nF in parallel).
fn get_116_nf_frequency() -> f64 {
    let capacitance = BankSet::default()
        .compute_capacity(5, 4, 0, ConnectionMode::Parallel)
        .unwrap();
    EigenfrequencyModel::default()
        .frequency_from_capacitance(capacitance)
        .unwrap()
}
