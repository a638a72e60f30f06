// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Conversion between the eigenfrequencies of MIEZE precession coils and the
switch settings of their capacitor banks.
 */

pub mod capacity;
mod cli;
pub mod constants;
pub mod eigenfrequency;
pub mod io;
pub mod mieze;
mod params;
pub mod unit_parsing;

// Re-exports.
pub use cli::{CapacityError, MiezeCapacity};
