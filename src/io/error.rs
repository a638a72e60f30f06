// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with reading or writing CSV files.

use std::path::PathBuf;

use thiserror::Error;

/// A single row of a CSV file that couldn't be interpreted. Readers skip these
/// rows rather than giving up on the whole file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedRow {
    #[error("Line {line}: Expected {expected} fields, but found {found}")]
    WrongNumberOfFields {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: Couldn't parse {column} value '{value}' as a number")]
    BadNumber {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("Line {line}: {column} value '{value}' isn't a non-negative integer")]
    BadIndex {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("Line {line}: Connection type '{value}' is neither 0 (parallel) nor 1 (series)")]
    BadConnection { line: usize, value: String },
}

#[derive(Error, Debug)]
pub enum CsvReadError {
    #[error("Couldn't open '{}' for reading: {err}", file.display())]
    Open {
        file: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum CsvWriteError {
    #[error("Couldn't create '{}': {err}", file.display())]
    Create {
        file: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
