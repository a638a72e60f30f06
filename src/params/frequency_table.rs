// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use log::info;

use super::{CircuitParams, ParamsError, TableSource};
use crate::mieze::{compute_schedule, write_schedule_file, FrequencySchedule};

pub(crate) struct FrequencyTableParams {
    pub(crate) circuit: CircuitParams,
    pub(crate) output: PathBuf,
    pub(crate) start: f64,
    pub(crate) stop: f64,
    pub(crate) ratio: f64,
}

impl FrequencyTableParams {
    pub(crate) fn run(&self) -> Result<(), ParamsError> {
        let schedule = FrequencySchedule::new(self.start, self.stop, self.ratio)?;
        let table = self.circuit.get_table(&TableSource::Build)?.sorted();
        let rows = compute_schedule(schedule, &self.circuit.model, &table)?;
        write_schedule_file(&self.output, &rows)?;
        info!("Wrote {} schedule rows to {}", rows.len(), self.output.display());
        Ok(())
    }
}
