// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A single binary-weighted capacitor bank, and the set of three banks driving
//! a precession coil.

use log::trace;

use super::BankError;
use crate::constants::{
    C1_WEIGHTS_NF, C2_WEIGHTS_NF, C3_WEIGHTS_NF, GREEDY_TOLERANCE, MAX_BANK_BITS,
};

/// A capacitor bank. Each switch adds one weight [nF]; bit `i` of an index
/// (counting from the least-significant bit) selects `weights[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacitorBank {
    weights: Vec<f64>,

    /// Is greedy (largest-weight-first) decomposition exact for these weights?
    /// This is only true if the weights are superincreasing.
    greedy_exact: bool,
}

impl CapacitorBank {
    pub fn new(weights: Vec<f64>) -> Result<CapacitorBank, BankError> {
        if weights.is_empty() {
            return Err(BankError::NoWeights);
        }
        if weights.len() > MAX_BANK_BITS {
            return Err(BankError::TooManyWeights(weights.len()));
        }
        if let Some((bit, &weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w <= 0.0)
        {
            return Err(BankError::InvalidWeight { bit, weight });
        }

        Ok(Self::from_valid_weights(weights))
    }

    fn from_valid_weights(weights: Vec<f64>) -> CapacitorBank {
        let greedy_exact = is_superincreasing(&weights);
        if !greedy_exact {
            trace!("Bank weights {weights:?} aren't superincreasing; using exhaustive decomposition");
        }
        CapacitorBank {
            weights,
            greedy_exact,
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The number of switches in this bank.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The largest valid index, i.e. all switches on.
    pub fn max_index(&self) -> u32 {
        (1 << self.weights.len()) - 1
    }

    pub fn is_greedy_exact(&self) -> bool {
        self.greedy_exact
    }

    /// Convert a bank index to its capacitance [nF].
    pub fn index_to_capacitance(&self, index: u32) -> Result<f64, BankError> {
        if index > self.max_index() {
            return Err(BankError::IndexOutOfRange {
                index,
                max_index: self.max_index(),
                num_bits: self.weights.len(),
            });
        }
        Ok(self.capacitance_unchecked(index))
    }

    pub(super) fn capacitance_unchecked(&self, index: u32) -> f64 {
        // Don't use `Iterator::sum` here; an empty float sum may be -0.0,
        // and table keys are bit patterns.
        self.weights
            .iter()
            .enumerate()
            .filter(|&(bit, _)| index & (1 << bit) != 0)
            .fold(0.0, |acc, (_, w)| acc + w)
    }

    /// Convert a capacitance [nF] to the index that best represents it
    /// without exceeding it. The remaining capacitance that couldn't be
    /// represented is also returned; for non-negative input it is never
    /// negative.
    pub fn capacity_to_index(&self, capacitance: f64) -> (u32, f64) {
        let (index, remainder) = if self.greedy_exact {
            self.greedy_decomposition(capacitance)
        } else {
            self.exhaustive_decomposition(capacitance)
        };

        if capacitance >= 0.0 {
            (index, remainder.max(0.0))
        } else {
            (index, remainder)
        }
    }

    fn greedy_decomposition(&self, capacitance: f64) -> (u32, f64) {
        let mut index = 0;
        let mut remainder = capacitance;
        for (bit, &weight) in self.weights.iter().enumerate().rev() {
            if remainder >= weight * (1.0 - GREEDY_TOLERANCE) {
                index |= 1 << bit;
                remainder -= weight;
            }
        }
        (index, remainder)
    }

    fn exhaustive_decomposition(&self, capacitance: f64) -> (u32, f64) {
        let mut best: Option<(u32, f64)> = None;
        for index in 0..=self.max_index() {
            let value = self.capacitance_unchecked(index);
            let fits = value * (1.0 - GREEDY_TOLERANCE) <= capacitance;
            // Strictly greater; the lowest index wins ties.
            if fits && best.map_or(true, |(_, b)| value > b) {
                best = Some((index, value));
            }
        }
        let (index, value) = best.unwrap_or((0, 0.0));
        (index, capacitance - value)
    }
}

/// Is every weight larger than the sum of all the weights before it?
fn is_superincreasing(weights: &[f64]) -> bool {
    let mut sum = 0.0;
    for &weight in weights {
        if weight <= sum {
            return false;
        }
        sum += weight;
    }
    true
}

/// The three banks of a coil's capacitor box. Construct this once and pass it
/// around; nothing about the banks is global.
#[derive(Debug, Clone, PartialEq)]
pub struct BankSet {
    pub c1: CapacitorBank,
    pub c2: CapacitorBank,
    pub c3: CapacitorBank,
}

impl BankSet {
    pub fn new(c1: CapacitorBank, c2: CapacitorBank, c3: CapacitorBank) -> BankSet {
        BankSet { c1, c2, c3 }
    }

    /// The number of switch combinations (including both connection modes)
    /// before any de-duplication.
    pub fn num_combinations(&self) -> usize {
        (self.c1.max_index() as usize + 1)
            * (self.c2.max_index() as usize + 1)
            * (self.c3.max_index() as usize + 1)
            * 2
    }
}

impl Default for BankSet {
    /// The banks as documented on the capacitor boxes.
    fn default() -> Self {
        BankSet {
            c1: CapacitorBank::from_valid_weights(C1_WEIGHTS_NF.to_vec()),
            c2: CapacitorBank::from_valid_weights(C2_WEIGHTS_NF.to_vec()),
            c3: CapacitorBank::from_valid_weights(C3_WEIGHTS_NF.to_vec()),
        }
    }
}
