// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Capacity table CSV files.

use std::{
    io::{BufRead, Write},
    path::Path,
};

use log::{debug, warn};

use super::{
    create, open, parse_connection, parse_float, parse_index, split_fields, CsvReadError,
    CsvWriteError, MalformedRow,
};
use crate::capacity::{CapacityTable, CapacityTableEntry};

pub const CAPACITY_TABLE_HEADER: &str =
    "capacity,c1_box_index,c2_box_index,c3_box_index,connection_type";

const NUM_FIELDS: usize = 5;

/// Write a capacity table as CSV. Capacitances are written in exponent form
/// with as many digits as needed to read back exactly the same value.
pub fn write_capacity_table<T: Write>(
    buf: &mut T,
    table: &CapacityTable,
) -> Result<(), CsvWriteError> {
    writeln!(buf, "{CAPACITY_TABLE_HEADER}")?;
    for entry in table.entries() {
        writeln!(
            buf,
            "{:e},{},{},{},{}",
            entry.capacity,
            entry.c1_index,
            entry.c2_index,
            entry.c3_index,
            entry.mode.code()
        )?;
    }
    buf.flush()?;
    Ok(())
}

pub fn write_capacity_table_file(file: &Path, table: &CapacityTable) -> Result<(), CsvWriteError> {
    let mut buf = create(file)?;
    write_capacity_table(&mut buf, table)?;
    debug!("Wrote {} capacity table entries to {}", table.len(), file.display());
    Ok(())
}

/// A capacity table read from a file, and the number of rows that were
/// skipped because they couldn't be interpreted.
#[derive(Debug, Clone)]
pub struct TableRead {
    pub table: CapacityTable,
    pub num_skipped: usize,
}

/// Read a capacity table. The first non-blank line is a header if its first
/// field isn't a number. Malformed rows are skipped with a warning.
pub fn read_capacity_table<T: BufRead>(buf: &mut T) -> Result<TableRead, CsvReadError> {
    let mut line = String::new();
    let mut line_num = 0;
    let mut seen_first_row = false;
    let mut entries = vec![];
    let mut num_skipped = 0;

    while buf.read_line(&mut line)? > 0 {
        line_num += 1;
        if line.trim().is_empty() {
            line.clear();
            continue;
        }

        let fields = split_fields(&line);
        if !seen_first_row {
            seen_first_row = true;
            if fields[0].parse::<f64>().is_err() {
                line.clear();
                continue;
            }
        }

        match parse_row(line_num, &fields) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                warn!("Skipping capacity table row: {e}");
                num_skipped += 1;
            }
        }
        line.clear();
    }

    if num_skipped > 0 {
        warn!("Skipped {num_skipped} malformed capacity table rows");
    }
    debug!("Read {} capacity table entries", entries.len());
    Ok(TableRead {
        table: CapacityTable::from_entries(entries),
        num_skipped,
    })
}

pub fn read_capacity_table_file(file: &Path) -> Result<TableRead, CsvReadError> {
    let mut buf = open(file)?;
    read_capacity_table(&mut buf)
}

fn parse_row(line: usize, fields: &[&str]) -> Result<CapacityTableEntry, MalformedRow> {
    if fields.len() != NUM_FIELDS {
        return Err(MalformedRow::WrongNumberOfFields {
            line,
            expected: NUM_FIELDS,
            found: fields.len(),
        });
    }
    let capacity = parse_float(line, "capacity", fields[0])?;
    if !capacity.is_finite() {
        return Err(MalformedRow::BadNumber {
            line,
            column: "capacity",
            value: fields[0].to_string(),
        });
    }
    Ok(CapacityTableEntry {
        capacity,
        c1_index: parse_index(line, "c1_box_index", fields[1])?,
        c2_index: parse_index(line, "c2_box_index", fields[2])?,
        c3_index: parse_index(line, "c3_box_index", fields[3])?,
        mode: parse_connection(line, fields[4])?,
    })
}
