// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::{
    common::{display_warnings, parse_frequency, ArgsError, CircuitArgs, ARG_FILE_HELP},
    CapacityError,
};
use crate::{
    constants::{DEFAULT_FREQUENCY_RATIO, DEFAULT_SCHEDULE_START_HZ, DEFAULT_SCHEDULE_STOP_HZ},
    params::FrequencyTableParams,
};

lazy_static::lazy_static! {
    static ref START_HELP: String =
        format!("The first coil-1 frequency of the schedule. Units are allowed (e.g. 30kHz). Default: {DEFAULT_SCHEDULE_START_HZ} Hz");

    static ref STOP_HELP: String =
        format!("The schedule stops once the coil-1 frequency reaches this. Units are allowed (e.g. 1MHz). Default: {DEFAULT_SCHEDULE_STOP_HZ} Hz");

    static ref RATIO_HELP: String =
        format!("The ratio of the coil-2 frequency to the coil-1 frequency. Default: {DEFAULT_FREQUENCY_RATIO}");
}

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct FrequencyTableArgs {
    #[clap(long, help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// Path to the CSV file to write the MIEZE schedule to.
    #[clap(short = 'o', long, parse(from_os_str), help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,

    #[clap(long, help = START_HELP.as_str(), help_heading = "SCHEDULE")]
    pub(super) start: Option<String>,

    #[clap(long, help = STOP_HELP.as_str(), help_heading = "SCHEDULE")]
    pub(super) stop: Option<String>,

    #[clap(long, help = RATIO_HELP.as_str(), help_heading = "SCHEDULE")]
    pub(super) ratio: Option<f64>,

    #[clap(flatten)]
    #[serde(default)]
    pub(super) circuit: CircuitArgs,
}

impl FrequencyTableArgs {
    pub(super) fn merge(self) -> Result<FrequencyTableArgs, CapacityError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let FrequencyTableArgs {
                args_file: _,
                output,
                start,
                stop,
                ratio,
                circuit,
            } = unpack_arg_file!(arg_file);

            Ok(FrequencyTableArgs {
                args_file: None,
                output: cli_args.output.or(output),
                start: cli_args.start.or(start),
                stop: cli_args.stop.or(stop),
                ratio: cli_args.ratio.or(ratio),
                circuit: cli_args.circuit.merge(circuit),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<FrequencyTableParams, CapacityError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            output,
            start,
            stop,
            ratio,
            circuit,
        } = self;

        let output = output.ok_or(ArgsError::NoOutput)?;
        let start = match start {
            Some(s) => parse_frequency(&s, "start")?,
            None => DEFAULT_SCHEDULE_START_HZ,
        };
        let stop = match stop {
            Some(s) => parse_frequency(&s, "stop")?,
            None => DEFAULT_SCHEDULE_STOP_HZ,
        };
        let circuit = circuit.parse()?;

        display_warnings();

        Ok(FrequencyTableParams {
            circuit,
            output,
            start,
            stop,
            ratio: ratio.unwrap_or(DEFAULT_FREQUENCY_RATIO),
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), CapacityError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- exiting now.");
            return Ok(());
        }

        params.run()?;
        Ok(())
    }
}
