// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. Bank weights are in nanofarads, as
printed on the capacitor boxes; everything else is in SI units.
 */

pub use std::f64::consts::{PI, TAU};

/// Bank-1 weights [nF]. Bit 0 of a bank-1 index selects the first value.
pub const C1_WEIGHTS_NF: [f64; 6] = [20.0, 44.0, 94.0, 200.0, 440.0, 940.0];

/// Bank-2 weights [nF].
pub const C2_WEIGHTS_NF: [f64; 5] = [0.44, 0.94, 2.0, 4.4, 9.40];

/// Bank-3 weights [nF]. These are *not* superincreasing (0.094 < 0.044 +
/// 0.066), so greedy decomposition isn't exact for this bank.
pub const C3_WEIGHTS_NF: [f64; 4] = [0.044, 0.066, 0.094, 0.200];

/// Multiply a value in nanofarads by this to get farads.
pub const NANOFARAD: f64 = 1e-9;

/// The maximum number of switches a single bank may have. Beyond this, the
/// exhaustive table gets silly.
pub const MAX_BANK_BITS: usize = 16;

/// Inductance of the precession coil circuit [H].
pub const INDUCTANCE: f64 = 22.45e-6;

/// Empirically fitted eigenfrequency power-law parameters (a, n, b, d).
pub const DEFAULT_FIT_PARAMS: [f64; 4] = [
    1.68514381e+00,
    4.72453838e-01,
    1.42870779e-10,
    -1.14410010e+04,
];

/// Relative tolerance used when deciding whether a weight "fits" into a
/// remaining capacitance during greedy decomposition.
pub const GREEDY_TOLERANCE: f64 = 1e-9;

/// Neutron mass [kg].
pub const MASS_NEUTRON: f64 = 1.674927471e-27;

/// Planck's constant [m^2 kg / s].
pub const H_PLANCK: f64 = 6.62607004e-34;

/// Neutron wavelength used for MIEZE echo times [m].
pub const NEUTRON_WAVELENGTH: f64 = 4.3e-10;

/// Sample-detector length used for MIEZE echo times.
pub const SAMPLE_DETECTOR_LENGTH: f64 = 193.0;

/// The second coil runs at this multiple of the first coil's frequency.
pub const DEFAULT_FREQUENCY_RATIO: f64 = 1.2;

/// Number of chopper periods per detector time bin.
pub const PERIODS_PER_TIMEBIN: f64 = 16.0;

/// Default first frequency of a MIEZE schedule [Hz].
pub const DEFAULT_SCHEDULE_START_HZ: f64 = 30_000.0;

/// Default (exclusive) upper frequency of a MIEZE schedule [Hz].
pub const DEFAULT_SCHEDULE_STOP_HZ: f64 = 1_000_000.0;
