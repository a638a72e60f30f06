// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use log::{debug, warn};

use super::{CircuitParams, ParamsError};
use crate::{
    capacity::{CapacityTableEntry, ConnectionMode},
    cli::InfoPrinter,
};

/// The relative tolerance for the forward/inverse check of the eigenfrequency
/// model.
const ROUND_TRIP_TOLERANCE: f64 = 1e-6;

/// Where the capacity table comes from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TableSource {
    File(PathBuf),
    Build,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ResolveMethod {
    /// Decompose bank-by-bank without a table.
    Greedy,

    /// Scan the table in order.
    Linear,

    /// Binary-search a sorted copy of the table.
    Sorted,
}

pub(crate) struct ResolveParams {
    pub(crate) circuit: CircuitParams,
    pub(crate) frequency: f64,
    pub(crate) table: TableSource,
    pub(crate) method: ResolveMethod,
}

/// What `resolve` found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Resolution {
    pub(crate) target: f64,
    pub(crate) capacity: f64,
    pub(crate) error: f64,
    pub(crate) c1_index: u32,
    pub(crate) c2_index: u32,
    pub(crate) c3_index: u32,
    /// The greedy decomposition doesn't pick a connection.
    pub(crate) mode: Option<ConnectionMode>,
    pub(crate) frequency: Option<f64>,
}

impl ResolveParams {
    pub(crate) fn resolve(&self) -> Result<Resolution, ParamsError> {
        let Self {
            circuit,
            frequency,
            table,
            method,
        } = self;

        let target = circuit.model.check_round_trip(*frequency, ROUND_TRIP_TOLERANCE)?;
        debug!("{frequency} Hz needs {target:e} F");

        let resolution = match method {
            ResolveMethod::Greedy => {
                let greedy = circuit.banks.resolve_greedy(target)?;
                Resolution {
                    target,
                    capacity: greedy.capacity,
                    error: (greedy.capacity - target).abs(),
                    c1_index: greedy.c1_index,
                    c2_index: greedy.c2_index,
                    c3_index: greedy.c3_index,
                    mode: None,
                    frequency: None,
                }
            }

            ResolveMethod::Linear | ResolveMethod::Sorted => {
                let table = circuit.get_table(table)?;
                let best = if *method == ResolveMethod::Sorted {
                    table.sorted().find_best_capacity(target)?
                } else {
                    table.find_best_capacity(target)?
                };
                let CapacityTableEntry {
                    c1_index,
                    c2_index,
                    c3_index,
                    mode,
                    ..
                } = best.entry;
                // A zero capacitance has no eigenfrequency.
                let frequency = match circuit.model.frequency_from_capacitance(best.capacity) {
                    Ok(f) => Some(f),
                    Err(e) => {
                        warn!("{e}");
                        None
                    }
                };
                Resolution {
                    target,
                    capacity: best.capacity,
                    error: best.error,
                    c1_index,
                    c2_index,
                    c3_index,
                    mode: Some(mode),
                    frequency,
                }
            }
        };

        Ok(resolution)
    }

    pub(crate) fn run(&self) -> Result<(), ParamsError> {
        let Resolution {
            target,
            capacity,
            error,
            c1_index,
            c2_index,
            c3_index,
            mode,
            frequency,
        } = self.resolve()?;

        let mut printer = InfoPrinter::new("Best bank settings".into());
        printer.push_block(vec![
            format!("Eigenfrequency:       {} Hz", self.frequency).into(),
            format!("Target capacitance:   {target:e} F").into(),
            format!("Achieved capacitance: {capacity:e} F").into(),
            format!("Error:                {error:e} F").into(),
        ]);
        printer.push_block(vec![
            format!("C1 index: {c1_index}").into(),
            format!("C2 index: {c2_index}").into(),
            format!("C3 index: {c3_index}").into(),
        ]);
        if let Some(mode) = mode {
            printer.push_line(format!("Connection: {mode} ({})", mode.code()).into());
        }
        if let Some(frequency) = frequency {
            printer.push_line(format!("Achieved eigenfrequency: {frequency:.1} Hz").into());
        }
        printer.display();

        Ok(())
    }
}
