// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use log::{info, warn};

use super::{CircuitParams, ParamsError};
use crate::{
    capacity::ConnectionMode,
    cli::InfoPrinter,
    eigenfrequency::parasitic_capacity,
    io::{measurement_capacitances, read_measurements_file, Measurement, Measurements},
};

/// The parasitic capacitance is taken to add to the banks' capacitance, like
/// an extra capacitor in the line. This is unrelated to how banks 1 and 2 of a
/// measurement are wired.
pub(crate) const PARASITIC_MODE: ConnectionMode = ConnectionMode::Parallel;

pub(crate) struct CheckFitParams {
    pub(crate) circuit: CircuitParams,
    pub(crate) measurements: PathBuf,
}

/// How one measurement compares with the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FitResidual {
    pub(crate) measurement: Measurement,

    /// [F]
    pub(crate) capacitance: f64,

    /// The model's eigenfrequency for `capacitance` [Hz].
    pub(crate) modelled: f64,

    /// Measured minus modelled [Hz].
    pub(crate) residual: f64,

    /// The capacitance that, combined with `capacitance` per
    /// [`PARASITIC_MODE`], makes an ideal circuit resonate at the measured
    /// frequency [F].
    pub(crate) parasitic: Option<f64>,
}

/// Compare each measurement with the model. Measurements whose capacitance is
/// outside the model's domain are skipped with a warning.
pub(crate) fn fit_residuals(
    circuit: &CircuitParams,
    measurements: &[Measurement],
) -> Result<Vec<FitResidual>, ParamsError> {
    let capacitances = measurement_capacitances(&circuit.banks, measurements)?;
    let mut residuals = Vec::with_capacity(measurements.len());
    for (measurement, capacitance) in measurements.iter().zip(capacitances) {
        let modelled = match circuit.model.frequency_from_capacitance(capacitance) {
            Ok(f) => f,
            Err(e) => {
                warn!("Skipping the {} Hz measurement: {e}", measurement.frequency);
                continue;
            }
        };
        let parasitic = parasitic_capacity(
            capacitance,
            measurement.frequency,
            PARASITIC_MODE,
            circuit.model.inductance(),
        )
        .ok();
        residuals.push(FitResidual {
            measurement: *measurement,
            capacitance,
            modelled,
            residual: measurement.frequency - modelled,
            parasitic,
        });
    }
    Ok(residuals)
}

/// The root-mean-square of the residuals [Hz]. `None` if there are none.
pub(crate) fn rms(residuals: &[FitResidual]) -> Option<f64> {
    if residuals.is_empty() {
        return None;
    }
    let sum_sq = residuals
        .iter()
        .fold(0.0, |acc, r| acc + r.residual * r.residual);
    Some((sum_sq / residuals.len() as f64).sqrt())
}

impl CheckFitParams {
    pub(crate) fn run(&self) -> Result<(), ParamsError> {
        let Measurements { rows, num_skipped } = read_measurements_file(&self.measurements)?;
        info!(
            "Read {} measurements from {} ({num_skipped} rows skipped)",
            rows.len(),
            self.measurements.display()
        );

        let residuals = fit_residuals(&self.circuit, &rows)?;
        let rms = rms(&residuals)
            .ok_or_else(|| ParamsError::NoMeasurements(self.measurements.clone()))?;

        let mut printer = InfoPrinter::new("Fit residuals".into());
        printer.push_block(
            residuals
                .iter()
                .map(|r| {
                    let m = &r.measurement;
                    let parasitic = match r.parasitic {
                        Some(p) => format!("{p:e} F"),
                        None => "-".to_string(),
                    };
                    format!(
                        "{:>9.0} Hz (C1 {:>2}, C2 {:>2}, {:>8}): model {:>9.0} Hz, residual {:>+8.0} Hz, parasitic {parasitic}",
                        m.frequency, m.c1_index, m.c2_index, m.mode, r.modelled, r.residual
                    )
                    .into()
                })
                .collect(),
        );
        printer.push_line(format!("RMS residual: {rms:.1} Hz").into());
        printer.display();

        Ok(())
    }
}
