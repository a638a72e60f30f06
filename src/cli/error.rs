// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all mieze-capacity-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

use super::common::ArgsError;
use crate::{
    capacity::{BankError, ResolveError},
    eigenfrequency::EigenfrequencyError,
    io::{CsvReadError, CsvWriteError},
    mieze::MiezeError,
    params::ParamsError,
    unit_parsing::UnitParseError,
};

/// The *only* publicly visible error from mieze-capacity.
#[derive(Error, Debug)]
pub enum CapacityError {
    /// An error related to the capacitor banks or their indices.
    #[error("{0}\n\nBank weights are set with --c1-weights, --c2-weights and --c3-weights [nF]")]
    Bank(String),

    /// An error related to finding the best bank settings.
    #[error("{0}")]
    Resolve(String),

    /// An error related to the eigenfrequency model.
    #[error("{0}\n\nThe model is f = a (C + b)^(-n) / (2π√L) + d; the fit parameters (a, n, b, d) are set with --fit-params and L with --inductance")]
    Eigenfrequency(String),

    /// An error related to MIEZE frequency schedules.
    #[error("{0}")]
    Schedule(String),

    /// An error related to reading or writing CSV files.
    #[error("{0}")]
    Csv(String),

    /// An error related to argument files.
    #[error("{0}\n\nArgument files are TOML or JSON, with the same field names as the long command-line arguments (using underscores)")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<ArgsError> for CapacityError {
    fn from(e: ArgsError) -> Self {
        match e {
            ArgsError::Bank { .. } => Self::Bank(e.to_string()),
            ArgsError::Eigenfrequency(_) | ArgsError::FitParamsLength(_) => {
                Self::Eigenfrequency(e.to_string())
            }
            ArgsError::NoOutput
            | ArgsError::NoFrequency
            | ArgsError::InvalidFrequency { .. }
            | ArgsError::ParseFrequency(_)
            | ArgsError::MissingIndices
            | ArgsError::NoMeasurementsFile
            | ArgsError::Prompt(_) => Self::Generic(e.to_string()),
        }
    }
}

impl From<ParamsError> for CapacityError {
    fn from(e: ParamsError) -> Self {
        match e {
            ParamsError::Bank(e) => Self::from(e),
            ParamsError::Resolve(e) => Self::from(e),
            ParamsError::Eigenfrequency(e) => Self::from(e),
            ParamsError::Mieze(e) => Self::from(e),
            ParamsError::CsvRead(e) => Self::from(e),
            ParamsError::CsvWrite(e) => Self::from(e),
            ParamsError::NoMeasurements(_) => Self::Csv(e.to_string()),
        }
    }
}

impl From<BankError> for CapacityError {
    fn from(e: BankError) -> Self {
        Self::Bank(e.to_string())
    }
}

impl From<ResolveError> for CapacityError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::Bank(e) => Self::from(e),
            ResolveError::EmptyTable | ResolveError::NonFiniteTarget(_) => {
                Self::Resolve(e.to_string())
            }
        }
    }
}

impl From<EigenfrequencyError> for CapacityError {
    fn from(e: EigenfrequencyError) -> Self {
        Self::Eigenfrequency(e.to_string())
    }
}

impl From<MiezeError> for CapacityError {
    fn from(e: MiezeError) -> Self {
        match e {
            MiezeError::Resolve(e) => Self::from(e),
            MiezeError::Eigenfrequency { .. } => Self::Eigenfrequency(e.to_string()),
            MiezeError::InvalidStart(_) | MiezeError::InvalidStop(_) | MiezeError::InvalidRatio(_) => {
                Self::Schedule(e.to_string())
            }
        }
    }
}

impl From<CsvReadError> for CapacityError {
    fn from(e: CsvReadError) -> Self {
        Self::Csv(e.to_string())
    }
}

impl From<CsvWriteError> for CapacityError {
    fn from(e: CsvWriteError) -> Self {
        Self::Csv(e.to_string())
    }
}

impl From<UnitParseError> for CapacityError {
    fn from(e: UnitParseError) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<toml::ser::Error> for CapacityError {
    fn from(e: toml::ser::Error) -> Self {
        Self::ArgFile(e.to_string())
    }
}

impl From<log::SetLoggerError> for CapacityError {
    fn from(e: log::SetLoggerError) -> Self {
        Self::Generic(e.to_string())
    }
}

impl From<std::io::Error> for CapacityError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
