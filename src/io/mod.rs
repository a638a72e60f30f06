// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reading and writing capacity tables and coil measurements.
//!
//! Both are plain comma-separated files. Rows that can't be interpreted are
//! skipped (and reported), so one bad line doesn't throw away a whole
//! measurement campaign.

mod error;
mod measurements;
mod table;

pub use error::{CsvReadError, CsvWriteError, MalformedRow};
pub use measurements::{
    measurement_capacitances, read_measurements, read_measurements_file, Measurement,
    Measurements,
};
pub use table::{
    read_capacity_table, read_capacity_table_file, write_capacity_table,
    write_capacity_table_file, TableRead, CAPACITY_TABLE_HEADER,
};

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::capacity::ConnectionMode;

/// Split a CSV line into trimmed fields. Quoting isn't supported; none of
/// these files need it.
fn split_fields(line: &str) -> Vec<&str> {
    line.trim_end_matches(['\r', '\n']).split(',').map(str::trim).collect()
}

/// Parse a bank index. Indices written by spreadsheet software sometimes look
/// like floats ("5.0"), which is fine as long as they are whole numbers.
fn parse_index(line: usize, column: &'static str, value: &str) -> Result<u32, MalformedRow> {
    if let Ok(index) = value.parse::<u32>() {
        return Ok(index);
    }
    let bad_index = || MalformedRow::BadIndex {
        line,
        column,
        value: value.to_string(),
    };
    let float: f64 = value.parse().map_err(|_| bad_index())?;
    if float.is_finite() && float >= 0.0 && float.fract() == 0.0 && float <= u32::MAX as f64 {
        Ok(float as u32)
    } else {
        Err(bad_index())
    }
}

fn parse_float(line: usize, column: &'static str, value: &str) -> Result<f64, MalformedRow> {
    value.parse().map_err(|_| MalformedRow::BadNumber {
        line,
        column,
        value: value.to_string(),
    })
}

fn parse_connection(line: usize, value: &str) -> Result<ConnectionMode, MalformedRow> {
    parse_index(line, "connection_type", value)
        .ok()
        .and_then(|code| u8::try_from(code).ok())
        .and_then(ConnectionMode::from_code)
        .ok_or_else(|| MalformedRow::BadConnection {
            line,
            value: value.to_string(),
        })
}

fn open(file: &Path) -> Result<BufReader<File>, CsvReadError> {
    File::open(file)
        .map(BufReader::new)
        .map_err(|err| CsvReadError::Open {
            file: file.to_path_buf(),
            err,
        })
}

pub(crate) fn create(file: &Path) -> Result<BufWriter<File>, CsvWriteError> {
    File::create(file)
        .map(BufWriter::new)
        .map_err(|err| CsvWriteError::Create {
            file: file.to_path_buf(),
            err,
        })
}
