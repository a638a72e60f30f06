// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::constants::MAX_BANK_BITS;

/// Errors associated with a single capacitor bank.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BankError {
    #[error("Bank index {index} is out of range; this bank has {num_bits} switches, so the index must be <= {max_index}")]
    IndexOutOfRange {
        index: u32,
        max_index: u32,
        num_bits: usize,
    },

    #[error("A capacitor bank needs at least one weight")]
    NoWeights,

    #[error("A capacitor bank may have at most {MAX_BANK_BITS} weights, but {0} were given")]
    TooManyWeights(usize),

    #[error("Bank weight {weight} (bit {bit}) is invalid; weights must be finite and positive")]
    InvalidWeight { bit: usize, weight: f64 },
}

/// Errors associated with finding the best bank settings for a capacitance.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("The capacity table is empty; build it or load a non-empty table before resolving")]
    EmptyTable,

    #[error("Cannot resolve a non-finite target capacitance ({0})")]
    NonFiniteTarget(f64),

    #[error(transparent)]
    Bank(#[from] BankError),
}
