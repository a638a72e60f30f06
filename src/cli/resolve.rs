// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::{
    common::{
        display_warnings, parse_frequency, prompt_for_frequency, CircuitArgs, Warn, ARG_FILE_HELP,
    },
    CapacityError,
};
use crate::params::{ResolveMethod, ResolveParams, TableSource};

#[derive(Parser, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(super) struct ResolveArgs {
    #[clap(long, help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    pub(super) args_file: Option<PathBuf>,

    /// The desired eigenfrequency. Units are allowed (e.g. 200kHz, 0.2MHz);
    /// without a unit, the value is in Hz. If not given, it is asked for on
    /// the terminal.
    #[clap(name = "FREQUENCY")]
    pub(super) frequency: Option<String>,

    /// Read the capacity table from this CSV file rather than enumerating the
    /// banks.
    #[clap(long, parse(from_os_str), help_heading = "TABLE")]
    pub(super) table: Option<PathBuf>,

    /// Don't use a capacity table; decompose the target capacitance
    /// bank-by-bank instead, as if the three bank capacitances simply added
    /// up.
    #[clap(long, help_heading = "TABLE")]
    #[serde(default)]
    pub(super) greedy: bool,

    /// Binary-search a sorted copy of the table rather than scanning it.
    #[clap(long, help_heading = "TABLE")]
    #[serde(default)]
    pub(super) sorted: bool,

    #[clap(flatten)]
    #[serde(default)]
    pub(super) circuit: CircuitArgs,
}

impl ResolveArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified into
    /// a single struct. Where applicable, it will prefer CLI parameters over
    /// those in the file.
    pub(super) fn merge(self) -> Result<ResolveArgs, CapacityError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            let ResolveArgs {
                args_file: _,
                frequency,
                table,
                greedy,
                sorted,
                circuit,
            } = unpack_arg_file!(arg_file);

            Ok(ResolveArgs {
                args_file: None,
                frequency: cli_args.frequency.or(frequency),
                table: cli_args.table.or(table),
                greedy: cli_args.greedy || greedy,
                sorted: cli_args.sorted || sorted,
                circuit: cli_args.circuit.merge(circuit),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<ResolveParams, CapacityError> {
        debug!("{:#?}", self);

        let Self {
            args_file: _,
            frequency,
            table,
            greedy,
            sorted,
            circuit,
        } = self;

        let circuit = circuit.parse()?;
        let frequency = match frequency {
            Some(f) => f,
            None => prompt_for_frequency()?,
        };
        let frequency = parse_frequency(&frequency, "target")?;

        let method = match (greedy, sorted) {
            (true, true) => {
                "--sorted has no effect with --greedy".warn();
                ResolveMethod::Greedy
            }
            (true, false) => ResolveMethod::Greedy,
            (false, true) => ResolveMethod::Sorted,
            (false, false) => ResolveMethod::Linear,
        };
        let table = match table {
            Some(file) => {
                if method == ResolveMethod::Greedy {
                    format!("The table {} is not used with --greedy", file.display()).warn();
                }
                TableSource::File(file)
            }
            None => TableSource::Build,
        };

        display_warnings();

        Ok(ResolveParams {
            circuit,
            frequency,
            table,
            method,
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
