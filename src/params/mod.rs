// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Parameters for `mieze-capacity` subcommands.
//!
//! The code here is kind of "mirroring" the code within the `cli` module; the
//! idea is that `cli` is unparsed, user-facing code, whereas parameters have
//! been parsed and are ready to be used directly.

mod build_table;
mod capacity;
mod check_fit;
mod error;
mod frequency_table;
mod resolve;

pub(crate) use build_table::BuildTableParams;
pub(crate) use capacity::CapacityParams;
pub(crate) use check_fit::CheckFitParams;
pub(crate) use error::ParamsError;
pub(crate) use frequency_table::FrequencyTableParams;
pub(crate) use resolve::{ResolveMethod, ResolveParams, TableSource};

use log::info;

use crate::{
    capacity::{BankSet, CapacityTable},
    eigenfrequency::EigenfrequencyModel,
    io::{read_capacity_table_file, TableRead},
};

/// The circuit that every subcommand works with.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CircuitParams {
    pub(crate) banks: BankSet,
    pub(crate) model: EigenfrequencyModel,
}

impl CircuitParams {
    /// Get a capacity table, either from a file or by enumerating the banks.
    pub(crate) fn get_table(&self, source: &TableSource) -> Result<CapacityTable, ParamsError> {
        match source {
            TableSource::File(file) => {
                let TableRead { table, num_skipped } = read_capacity_table_file(file)?;
                info!(
                    "Read {} table entries from {} ({num_skipped} rows skipped)",
                    table.len(),
                    file.display()
                );
                Ok(table)
            }

            TableSource::Build => {
                let table = CapacityTable::build(&self.banks);
                info!(
                    "Built a capacity table with {} unique capacitances from {} combinations",
                    table.len(),
                    self.banks.num_combinations()
                );
                Ok(table)
            }
        }
    }
}
