// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::{CircuitParams, ParamsError};
use crate::{capacity::ConnectionMode, cli::InfoPrinter};

pub(crate) struct CapacityParams {
    pub(crate) circuit: CircuitParams,
    pub(crate) c1_index: u32,
    pub(crate) c2_index: u32,
    pub(crate) c3_index: u32,
    pub(crate) mode: ConnectionMode,
}

impl CapacityParams {
    /// The capacitance [F] of the setting and, unless the capacitance is
    /// outside the model's domain, its eigenfrequency [Hz].
    pub(crate) fn evaluate(&self) -> Result<(f64, Option<f64>), ParamsError> {
        let capacitance = self.circuit.banks.compute_capacity(
            self.c1_index,
            self.c2_index,
            self.c3_index,
            self.mode,
        )?;
        let frequency = self.circuit.model.frequency_from_capacitance(capacitance).ok();
        Ok((capacitance, frequency))
    }

    pub(crate) fn run(&self) -> Result<(), ParamsError> {
        let (capacitance, frequency) = self.evaluate()?;

        let mut printer = InfoPrinter::new("Bank setting".into());
        printer.push_block(vec![
            format!(
                "Indices: C1 {}, C2 {}, C3 {}",
                self.c1_index, self.c2_index, self.c3_index
            )
            .into(),
            format!("Connection: {}", self.mode).into(),
        ]);
        printer.push_line(format!("Capacitance: {capacitance:e} F").into());
        match frequency {
            Some(f) => printer.push_line(format!("Eigenfrequency: {f:.1} Hz").into()),
            None => printer.push_line("Eigenfrequency: outside the model's domain".into()),
        }
        printer.display();

        Ok(())
    }
}
