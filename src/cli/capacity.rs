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
use crate::{capacity::ConnectionMode, params::CapacityParams};

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct CapacityArgs {
    #[clap(long, help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// The bank-1 switch index.
    #[clap(name = "C1_INDEX")]
    pub(super) c1_index: Option<u32>,

    /// The bank-2 switch index.
    #[clap(name = "C2_INDEX")]
    pub(super) c2_index: Option<u32>,

    /// The bank-3 switch index. Default: 0
    #[clap(name = "C3_INDEX")]
    pub(super) c3_index: Option<u32>,

    /// Banks 1 and 2 are connected in series (their capacitances combine
    /// reciprocally) rather than in parallel.
    #[clap(long)]
    #[serde(default)]
    pub(super) series: bool,

    #[clap(flatten)]
    #[serde(default)]
    pub(super) circuit: CircuitArgs,
}

impl CapacityArgs {
    pub(super) fn merge(self) -> Result<CapacityArgs, CapacityError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let CapacityArgs {
                args_file: _,
                c1_index,
                c2_index,
                c3_index,
                series,
                circuit,
            } = unpack_arg_file!(arg_file);

            Ok(CapacityArgs {
                args_file: None,
                c1_index: cli_args.c1_index.or(c1_index),
                c2_index: cli_args.c2_index.or(c2_index),
                c3_index: cli_args.c3_index.or(c3_index),
                series: cli_args.series || series,
                circuit: cli_args.circuit.merge(circuit),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<CapacityParams, CapacityError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            c1_index,
            c2_index,
            c3_index,
            series,
            circuit,
        } = self;

        let (c1_index, c2_index) = match (c1_index, c2_index) {
            (Some(c1), Some(c2)) => (c1, c2),
            _ => return Err(ArgsError::MissingIndices.into()),
        };
        let circuit = circuit.parse()?;

        display_warnings();

        Ok(CapacityParams {
            circuit,
            c1_index,
            c2_index,
            c3_index: c3_index.unwrap_or(0),
            mode: if series {
                ConnectionMode::Series
            } else {
                ConnectionMode::Parallel
            },
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
