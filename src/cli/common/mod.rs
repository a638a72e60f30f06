// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Common arguments for command-line interfaces. Every subcommand needs to
//! know about the circuit (the capacitor banks, the inductance and the
//! eigenfrequency fit), so the same circuit arguments are shared between them.

mod printers;

pub(crate) use printers::{display_warnings, InfoPrinter, Warn};

use clap::Parser;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::{
    capacity::{BankError, BankSet, CapacitorBank},
    constants::{C1_WEIGHTS_NF, C2_WEIGHTS_NF, C3_WEIGHTS_NF, DEFAULT_FIT_PARAMS, INDUCTANCE},
    eigenfrequency::{EigenfrequencyError, EigenfrequencyModel, FitParameters},
    params::CircuitParams,
    unit_parsing::{parse_freq_hz, UnitParseError},
};

lazy_static::lazy_static! {
    pub(super) static ref ARG_FILE_TYPES_COMMA_SEPARATED: String = ArgFileTypes::iter().join(", ");

    pub(super) static ref ARG_FILE_HELP: String =
        format!("All arguments may be specified in a file. Any CLI arguments override arguments set in the file. Supported formats: {}", *ARG_FILE_TYPES_COMMA_SEPARATED);

    static ref C1_WEIGHTS_HELP: String =
        format!("Comma-separated bank-1 switch weights, least-significant bit first [nF]. Default: {}", C1_WEIGHTS_NF.iter().join(","));

    static ref C2_WEIGHTS_HELP: String =
        format!("Comma-separated bank-2 switch weights, least-significant bit first [nF]. Default: {}", C2_WEIGHTS_NF.iter().join(","));

    static ref C3_WEIGHTS_HELP: String =
        format!("Comma-separated bank-3 switch weights, least-significant bit first [nF]. Default: {}", C3_WEIGHTS_NF.iter().join(","));

    static ref INDUCTANCE_HELP: String =
        format!("The inductance of the coil circuit [H]. Default: {INDUCTANCE:e}");

    static ref FIT_PARAMS_HELP: String =
        format!("The four comma-separated eigenfrequency fit parameters a, n, b [F] and d [Hz]. Default: {}", DEFAULT_FIT_PARAMS.iter().join(","));
}

#[derive(Debug, Display, EnumIter, EnumString)]
pub(super) enum ArgFileTypes {
    #[strum(serialize = "toml")]
    Toml,
    #[strum(serialize = "json")]
    Json,
}

macro_rules! unpack_arg_file {
    ($arg_file:expr) => ({
        use std::{fs::File, io::Read, str::FromStr};

        use crate::cli::{common::{ArgFileTypes, ARG_FILE_TYPES_COMMA_SEPARATED}, CapacityError};

        debug!("Attempting to parse argument file {}", $arg_file.display());

        let mut contents = String::new();
        let arg_file_type = $arg_file
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .and_then(|e| ArgFileTypes::from_str(&e).ok());

        match arg_file_type {
            Some(ArgFileTypes::Toml) => {
                debug!("Parsing toml file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match toml::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(CapacityError::ArgFile(format!(
                            "Couldn't decode toml structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }
            Some(ArgFileTypes::Json) => {
                debug!("Parsing json file...");
                let mut fh = File::open(&$arg_file)?;
                fh.read_to_string(&mut contents)?;
                match serde_json::from_str(&contents) {
                    Ok(p) => p,
                    Err(err) => {
                        return Err(CapacityError::ArgFile(format!(
                            "Couldn't decode json structure from {:?}:\n{err}",
                            $arg_file
                        )))
                    }
                }
            }

            _ => {
                return Err(CapacityError::ArgFile(format!(
                    "Argument file '{:?}' doesn't have a recognised file extension! Valid extensions are: {}", $arg_file, *ARG_FILE_TYPES_COMMA_SEPARATED)
                ))
            }
        }
    });
}

/// The circuit: capacitor banks, inductance and eigenfrequency fit.
#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct CircuitArgs {
    #[clap(long, use_value_delimiter = true, require_value_delimiter = true, help = C1_WEIGHTS_HELP.as_str(), help_heading = "CIRCUIT")]
    pub(super) c1_weights: Option<Vec<f64>>,

    #[clap(long, use_value_delimiter = true, require_value_delimiter = true, help = C2_WEIGHTS_HELP.as_str(), help_heading = "CIRCUIT")]
    pub(super) c2_weights: Option<Vec<f64>>,

    #[clap(long, use_value_delimiter = true, require_value_delimiter = true, help = C3_WEIGHTS_HELP.as_str(), help_heading = "CIRCUIT")]
    pub(super) c3_weights: Option<Vec<f64>>,

    #[clap(long, help = INDUCTANCE_HELP.as_str(), help_heading = "CIRCUIT")]
    pub(super) inductance: Option<f64>,

    #[clap(
        long,
        use_value_delimiter = true,
        require_value_delimiter = true,
        allow_hyphen_values = true,
        help = FIT_PARAMS_HELP.as_str(),
        help_heading = "CIRCUIT"
    )]
    pub(super) fit_params: Option<Vec<f64>>,
}

impl CircuitArgs {
    /// Prefer `self` (CLI) values over `other` (file) values.
    pub(super) fn merge(self, other: CircuitArgs) -> CircuitArgs {
        CircuitArgs {
            c1_weights: self.c1_weights.or(other.c1_weights),
            c2_weights: self.c2_weights.or(other.c2_weights),
            c3_weights: self.c3_weights.or(other.c3_weights),
            inductance: self.inductance.or(other.inductance),
            fit_params: self.fit_params.or(other.fit_params),
        }
    }

    pub(super) fn parse(self) -> Result<CircuitParams, ArgsError> {
        let CircuitArgs {
            c1_weights,
            c2_weights,
            c3_weights,
            inductance,
            fit_params,
        } = self;

        let banks = BankSet::new(
            make_bank(1, c1_weights, &C1_WEIGHTS_NF)?,
            make_bank(2, c2_weights, &C2_WEIGHTS_NF)?,
            make_bank(3, c3_weights, &C3_WEIGHTS_NF)?,
        );
        let params = match fit_params {
            Some(v) => {
                let array: [f64; 4] = v
                    .as_slice()
                    .try_into()
                    .map_err(|_| ArgsError::FitParamsLength(v.len()))?;
                FitParameters::from_array(array)
            }
            None => FitParameters::default(),
        };
        let model = EigenfrequencyModel::new(params, inductance.unwrap_or(INDUCTANCE))?;

        let mut printer = InfoPrinter::new("Circuit".into());
        printer.push_block(
            [&banks.c1, &banks.c2, &banks.c3]
                .into_iter()
                .enumerate()
                .map(|(i, bank)| {
                    format!("Bank {} weights: [{}] nF", i + 1, bank.weights().iter().join(", ")).into()
                })
                .collect(),
        );
        printer.push_line(format!("Inductance: {:e} H", model.inductance()).into());
        let FitParameters { a, n, b, d } = model.params();
        printer.push_line(format!("Fit parameters: a = {a}, n = {n}, b = {b:e} F, d = {d} Hz").into());
        printer.display();

        Ok(CircuitParams { banks, model })
    }
}

fn make_bank(bank: u8, weights: Option<Vec<f64>>, default: &[f64]) -> Result<CapacitorBank, ArgsError> {
    CapacitorBank::new(weights.unwrap_or_else(|| default.to_vec()))
        .map_err(|err| ArgsError::Bank { bank, err })
}

/// Parse a user-supplied frequency (e.g. "200kHz") into Hz. `what` describes
/// the frequency in error messages.
pub(super) fn parse_frequency(s: &str, what: &'static str) -> Result<f64, ArgsError> {
    let value = parse_freq_hz(s)?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ArgsError::InvalidFrequency { what, value })
    }
}

/// Ask for an eigenfrequency on the terminal. If nobody is there to answer,
/// give up.
pub(super) fn prompt_for_frequency() -> Result<String, ArgsError> {
    if !console::user_attended() {
        return Err(ArgsError::NoFrequency);
    }
    let term = console::Term::stdout();
    term.write_str("Desired eigenfrequency (e.g. 200kHz): ")?;
    let line = term.read_line()?;
    Ok(line)
}

/// Errors from command-line arguments that can't be made sense of.
#[derive(Error, Debug)]
pub(super) enum ArgsError {
    #[error("Bank {bank}: {err}")]
    Bank {
        bank: u8,
        #[source]
        err: BankError,
    },

    #[error(transparent)]
    Eigenfrequency(#[from] EigenfrequencyError),

    #[error("Exactly 4 fit parameters (a, n, b, d) are needed, but {0} were given")]
    FitParamsLength(usize),

    #[error("No output file was specified (use -o)")]
    NoOutput,

    #[error("No eigenfrequency was given, and there's no terminal to ask for one")]
    NoFrequency,

    #[error("The {what} frequency must be positive and finite, but it is {value} Hz")]
    InvalidFrequency { what: &'static str, value: f64 },

    #[error(transparent)]
    ParseFrequency(#[from] UnitParseError),

    #[error("Both a bank-1 and a bank-2 index are needed")]
    MissingIndices,

    #[error("No measurements file was specified")]
    NoMeasurementsFile,

    #[error("Couldn't read the eigenfrequency from the terminal: {0}")]
    Prompt(#[from] std::io::Error),
}
