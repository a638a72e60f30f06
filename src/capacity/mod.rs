// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Capacitor banks, and how their switch indices map to capacitances.
//!
//! There are three binary-weighted banks. Banks 1 and 2 may be connected in
//! parallel or in series; bank 3 is always in series with whatever banks 1 and
//! 2 produce. Every combination of switch settings is enumerable, which is what
//! makes the exhaustive [`CapacityTable`] and its nearest-value search
//! possible.

mod bank;
mod combine;
mod error;
mod resolve;
mod table;

pub use bank::{BankSet, CapacitorBank};
pub use combine::{add_parallel, add_series, total_capacitance, ConnectionMode};
pub use error::{BankError, ResolveError};
pub use resolve::{find_best_capacity, BestCapacity, GreedyResolution, SortedCapacityTable};
pub use table::{CapacityTable, CapacityTableEntry};
