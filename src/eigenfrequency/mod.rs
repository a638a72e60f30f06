// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Converting between a circuit's capacitance and its eigenfrequency.
//!
//! An ideal LC circuit resonates at 1 / (2π√(LC)). The real circuit has cable
//! and parasitic capacitances, so an empirical power law is used instead:
//!
//! f = a (C + b)^(-n) / (2π√L) + d
//!
//! with the fit parameters (a, n, b, d). The inverse is
//!
//! C = ((f - d) 2π√L / a)^(-1/n) - b

mod error;

pub use error::EigenfrequencyError;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    capacity::ConnectionMode,
    constants::{DEFAULT_FIT_PARAMS, INDUCTANCE, TAU},
};

/// The parameters of the eigenfrequency power law.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitParameters {
    /// Amplitude.
    pub a: f64,

    /// Power-law exponent.
    pub n: f64,

    /// Capacitance offset [F].
    pub b: f64,

    /// Frequency offset [Hz].
    pub d: f64,
}

impl FitParameters {
    /// The parameters that give the textbook 1 / (2π√(LC)).
    pub const IDEAL: FitParameters = FitParameters {
        a: 1.0,
        n: 0.5,
        b: 0.0,
        d: 0.0,
    };

    /// Parameters in the order (a, n, b, d).
    pub fn from_array([a, n, b, d]: [f64; 4]) -> FitParameters {
        FitParameters { a, n, b, d }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.a, self.n, self.b, self.d]
    }

    pub fn validate(&self) -> Result<(), EigenfrequencyError> {
        for (name, value) in [("a", self.a), ("n", self.n), ("b", self.b), ("d", self.d)] {
            if !value.is_finite() {
                return Err(EigenfrequencyError::NonFiniteParameter { name, value });
            }
        }
        if self.a == 0.0 {
            return Err(EigenfrequencyError::ZeroAmplitude);
        }
        if self.n == 0.0 {
            return Err(EigenfrequencyError::ZeroExponent);
        }
        Ok(())
    }
}

impl Default for FitParameters {
    /// The parameters fitted to the coil measurements.
    fn default() -> Self {
        FitParameters::from_array(DEFAULT_FIT_PARAMS)
    }
}

/// The eigenfrequency model of a precession coil circuit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenfrequencyModel {
    params: FitParameters,

    /// [H]
    inductance: f64,

    /// 2π√L
    prefactor: f64,
}

impl EigenfrequencyModel {
    pub fn new(
        params: FitParameters,
        inductance: f64,
    ) -> Result<EigenfrequencyModel, EigenfrequencyError> {
        params.validate()?;
        validate_inductance(inductance)?;
        Ok(EigenfrequencyModel {
            params,
            inductance,
            prefactor: TAU * inductance.sqrt(),
        })
    }

    pub fn params(&self) -> FitParameters {
        self.params
    }

    pub fn inductance(&self) -> f64 {
        self.inductance
    }

    /// The eigenfrequency [Hz] of a circuit with capacitance `capacitance`
    /// [F].
    pub fn frequency_from_capacitance(&self, capacitance: f64) -> Result<f64, EigenfrequencyError> {
        let FitParameters { a, n, b, d } = self.params;
        let sum = capacitance + b;
        // Also catches NaN.
        if !(sum > 0.0) {
            return Err(EigenfrequencyError::NonPositiveCapacitance { capacitance, b, sum });
        }
        Ok(a * sum.powf(-n) / self.prefactor + d)
    }

    /// The capacitance [F] needed for an eigenfrequency of `frequency` [Hz].
    pub fn capacity_from_frequency(&self, frequency: f64) -> Result<f64, EigenfrequencyError> {
        let FitParameters { a, n, b, d } = self.params;
        let base = (frequency - d) * self.prefactor / a;
        if !(base > 0.0) {
            return Err(EigenfrequencyError::FrequencyOutOfDomain { frequency, base });
        }
        let capacitance = base.powf(-n.recip()) - b;
        trace!("{frequency} Hz needs {capacitance:e} F");
        Ok(capacitance)
    }

    /// Take `frequency` to a capacitance and back again, and check that the
    /// result is within `tolerance` (relative) of `frequency`. The capacitance
    /// is returned.
    pub fn check_round_trip(
        &self,
        frequency: f64,
        tolerance: f64,
    ) -> Result<f64, EigenfrequencyError> {
        let capacitance = self.capacity_from_frequency(frequency)?;
        let round_trip = self.frequency_from_capacitance(capacitance)?;
        if (round_trip - frequency).abs() > tolerance * frequency.abs() {
            return Err(EigenfrequencyError::InconsistentForwardInverse {
                frequency,
                capacitance,
                round_trip,
            });
        }
        Ok(capacitance)
    }
}

impl Default for EigenfrequencyModel {
    fn default() -> Self {
        let params = FitParameters::default();
        EigenfrequencyModel {
            params,
            inductance: INDUCTANCE,
            prefactor: TAU * INDUCTANCE.sqrt(),
        }
    }
}

fn validate_inductance(inductance: f64) -> Result<(), EigenfrequencyError> {
    if inductance.is_finite() && inductance > 0.0 {
        Ok(())
    } else {
        Err(EigenfrequencyError::InvalidInductance(inductance))
    }
}

/// Estimate the parasitic capacitance [F] of a circuit from a capacitance
/// `capacitance` [F] that was measured to resonate at `effective_frequency`
/// [Hz]. `mode` is how the parasitic capacitance joins the measured one, with
/// the same meaning as in [`ConnectionMode::combine`], so
/// `mode.combine(capacitance, parasitic)` gives back the ideal capacitance.
///
/// The ideal circuit needs C_theo = (2πf)⁻² / L. If the parasitic capacitance
/// adds to the measured one (`Parallel`), it is C_theo - C; otherwise it
/// combines reciprocally (`Series`), giving C_theo C / (C - C_theo).
pub fn parasitic_capacity(
    capacitance: f64,
    effective_frequency: f64,
    mode: ConnectionMode,
    inductance: f64,
) -> Result<f64, EigenfrequencyError> {
    validate_inductance(inductance)?;
    let theoretical = (TAU * effective_frequency).powi(-2) / inductance;
    match mode {
        ConnectionMode::Parallel => Ok(theoretical - capacitance),
        ConnectionMode::Series => {
            let denominator = capacitance - theoretical;
            if denominator == 0.0 {
                return Err(EigenfrequencyError::DegenerateParasitic {
                    capacitance,
                    frequency: effective_frequency,
                });
            }
            Ok(theoretical * capacitance / denominator)
        }
    }
}
