// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::{
    common::{display_warnings, ArgsError, CircuitArgs, ARG_FILE_HELP},
    CapacityError,
};
use crate::params::CheckFitParams;

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct CheckFitArgs {
    #[clap(long, help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// A CSV file of measured eigenfrequencies, with the columns frequency,
    /// capacity_1, capacity_2 and connection_type (0 parallel, 1 series).
    /// The capacity columns are bank-1 and bank-2 indices.
    #[clap(name = "MEASUREMENTS", parse(from_os_str))]
    pub(super) measurements: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(default)]
    pub(super) circuit: CircuitArgs,
}

impl CheckFitArgs {
    pub(super) fn merge(self) -> Result<CheckFitArgs, CapacityError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let CheckFitArgs {
                args_file: _,
                measurements,
                circuit,
            } = unpack_arg_file!(arg_file);

            Ok(CheckFitArgs {
                args_file: None,
                measurements: cli_args.measurements.or(measurements),
                circuit: cli_args.circuit.merge(circuit),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<CheckFitParams, CapacityError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            measurements,
            circuit,
        } = self;

        let measurements = measurements.ok_or(ArgsError::NoMeasurementsFile)?;
        let circuit = circuit.parse()?;

        display_warnings();

        Ok(CheckFitParams {
            circuit,
            measurements,
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
