// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use log::info;

use super::{CircuitParams, ParamsError, TableSource};
use crate::io::write_capacity_table_file;

pub(crate) struct BuildTableParams {
    pub(crate) circuit: CircuitParams,
    pub(crate) output: PathBuf,
}

impl BuildTableParams {
    pub(crate) fn run(&self) -> Result<(), ParamsError> {
        let table = self.circuit.get_table(&TableSource::Build)?;
        write_capacity_table_file(&self.output, &table)?;
        info!("Wrote {}", self.output.display());
        Ok(())
    }
}
