// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Coil measurement CSV files.
//!
//! Each row holds a measured eigenfrequency, the bank-1 and bank-2 indices
//! that were set and how the two banks were connected. Any further columns
//! are ignored. Rows without values for the indices or connection type are
//! incomplete and silently skipped; the first complete row is the header.

use std::{io::BufRead, path::Path};

use log::{debug, warn};

use super::{
    open, parse_connection, parse_float, parse_index, split_fields, CsvReadError, MalformedRow,
};
use crate::capacity::{BankError, BankSet, ConnectionMode};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// The measured eigenfrequency [Hz].
    pub frequency: f64,
    pub c1_index: u32,
    pub c2_index: u32,
    pub mode: ConnectionMode,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    pub rows: Vec<Measurement>,

    /// The number of complete rows that couldn't be interpreted.
    pub num_skipped: usize,
}

pub fn read_measurements<T: BufRead>(buf: &mut T) -> Result<Measurements, CsvReadError> {
    let mut line = String::new();
    let mut line_num = 0;
    let mut seen_header = false;
    let mut measurements = Measurements::default();

    while buf.read_line(&mut line)? > 0 {
        line_num += 1;
        let fields = split_fields(&line);
        let complete = fields.len() >= 4 && fields[1..4].iter().all(|f| !f.is_empty());
        if !complete {
            line.clear();
            continue;
        }
        if !seen_header {
            seen_header = true;
            line.clear();
            continue;
        }

        match parse_row(line_num, &fields) {
            Ok(m) => measurements.rows.push(m),
            Err(e) => {
                warn!("Skipping measurement: {e}");
                measurements.num_skipped += 1;
            }
        }
        line.clear();
    }

    if measurements.num_skipped > 0 {
        warn!("Skipped {} malformed measurements", measurements.num_skipped);
    }
    debug!("Read {} measurements", measurements.rows.len());
    Ok(measurements)
}

pub fn read_measurements_file(file: &Path) -> Result<Measurements, CsvReadError> {
    let mut buf = open(file)?;
    read_measurements(&mut buf)
}

fn parse_row(line: usize, fields: &[&str]) -> Result<Measurement, MalformedRow> {
    Ok(Measurement {
        frequency: parse_float(line, "frequency", fields[0])?,
        c1_index: parse_index(line, "capacity_1", fields[1])?,
        c2_index: parse_index(line, "capacity_2", fields[2])?,
        mode: parse_connection(line, fields[3])?,
    })
}

/// The capacitances [F] of the measured bank settings. Bank 3 wasn't used for
/// the measurements.
pub fn measurement_capacitances(
    banks: &BankSet,
    measurements: &[Measurement],
) -> Result<Vec<f64>, BankError> {
    measurements
        .iter()
        .map(|m| banks.compute_capacity(m.c1_index, m.c2_index, 0, m.mode))
        .collect()
}
