// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EigenfrequencyError {
    #[error("Capacitance {capacitance:e} F plus the fit offset b = {b:e} F is {sum:e} F, but it must be positive")]
    NonPositiveCapacitance { capacitance: f64, b: f64, sum: f64 },

    #[error("Frequency {frequency} Hz is at or below what the fit can produce (the base (f - d)·2π√L/a is {base:e}, but it must be positive)")]
    FrequencyOutOfDomain { frequency: f64, base: f64 },

    #[error("The fit amplitude 'a' must not be 0")]
    ZeroAmplitude,

    #[error("The fit exponent 'n' must not be 0")]
    ZeroExponent,

    #[error("Fit parameter '{name}' must be finite, but it is {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    #[error("Inductance must be positive and finite, but it is {0} H")]
    InvalidInductance(f64),

    #[error("The forward and inverse transforms disagree: {frequency} Hz -> {capacitance:e} F -> {round_trip} Hz")]
    InconsistentForwardInverse {
        frequency: f64,
        capacitance: f64,
        round_trip: f64,
    },

    #[error("Capacitance {capacitance:e} F and effective frequency {frequency} Hz give no parasitic capacitance; the measured capacitance equals the theoretical one")]
    DegenerateParasitic { capacitance: f64, frequency: f64 },
}
