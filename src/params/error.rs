// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

use crate::{
    capacity::{BankError, ResolveError},
    eigenfrequency::EigenfrequencyError,
    io::{CsvReadError, CsvWriteError},
    mieze::MiezeError,
};

#[derive(Error, Debug)]
pub(crate) enum ParamsError {
    #[error(transparent)]
    Bank(#[from] BankError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Eigenfrequency(#[from] EigenfrequencyError),

    #[error(transparent)]
    Mieze(#[from] MiezeError),

    #[error(transparent)]
    CsvRead(#[from] CsvReadError),

    #[error(transparent)]
    CsvWrite(#[from] CsvWriteError),

    #[error("No usable measurements were found in {}", .0.display())]
    NoMeasurements(PathBuf),
}
