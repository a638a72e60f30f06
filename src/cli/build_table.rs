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
use crate::params::BuildTableParams;

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct BuildTableArgs {
    #[clap(long, help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// Path to the CSV file to write the capacity table to.
    #[clap(short = 'o', long, parse(from_os_str), help_heading = "OUTPUT FILES")]
    pub(super) output: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(default)]
    pub(super) circuit: CircuitArgs,
}

impl BuildTableArgs {
    pub(super) fn merge(self) -> Result<BuildTableArgs, CapacityError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let BuildTableArgs {
                args_file: _,
                output,
                circuit,
            } = unpack_arg_file!(arg_file);

            Ok(BuildTableArgs {
                args_file: None,
                output: cli_args.output.or(output),
                circuit: cli_args.circuit.merge(circuit),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<BuildTableParams, CapacityError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            output,
            circuit,
        } = self;

        let output = output.ok_or(ArgsError::NoOutput)?;
        let circuit = circuit.parse()?;

        display_warnings();

        Ok(BuildTableParams { circuit, output })
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
