// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Combining capacitances.
//!
//! The two helpers are named after the identity they apply, as for resistors:
//! [`add_parallel`] is the reciprocal sum and [`add_series`] is the direct sum.
//! For *capacitors* the physics is the other way around, which is why
//! [`ConnectionMode::Series`] uses [`add_parallel`].

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Combine two values with the reciprocal-sum identity, (a⁻¹ + b⁻¹)⁻¹.
///
/// If either value is exactly zero, the result is zero. Physically, a zero
/// capacitance in series is an open circuit, so this is only the legacy
/// convention that existing bank tables were generated with.
pub fn add_parallel(a: f64, b: f64) -> f64 {
    if a != 0.0 && b != 0.0 {
        (a.recip() + b.recip()).recip()
    } else {
        0.0
    }
}

/// Combine two values with a direct sum.
pub fn add_series(a: f64, b: f64) -> f64 {
    a + b
}

/// How banks 1 and 2 are wired together. The numeric codes are those used in
/// capacity tables and measurement files.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum ConnectionMode {
    /// The capacitances add.
    #[strum(serialize = "parallel")]
    #[serde(rename = "parallel")]
    Parallel = 0,

    /// The capacitances combine reciprocally.
    #[strum(serialize = "series")]
    #[serde(rename = "series")]
    Series = 1,
}

impl ConnectionMode {
    pub fn from_code(code: u8) -> Option<ConnectionMode> {
        match code {
            0 => Some(ConnectionMode::Parallel),
            1 => Some(ConnectionMode::Series),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Combine the capacitances of banks 1 and 2 according to this mode.
    pub fn combine(self, c1: f64, c2: f64) -> f64 {
        match self {
            ConnectionMode::Parallel => add_series(c1, c2),
            ConnectionMode::Series => add_parallel(c1, c2),
        }
    }
}

/// The total capacitance of three capacitances [F], with the first two wired
/// according to `mode` and the third always in series. Unlike
/// [`BankSet::compute_capacity`](super::BankSet::compute_capacity), an unused
/// third bank (zero) is not special-cased, so the zero convention of
/// [`add_parallel`] applies.
pub fn total_capacitance(c1: f64, c2: f64, c3: f64, mode: ConnectionMode) -> f64 {
    add_parallel(mode.combine(c1, c2), c3)
}
