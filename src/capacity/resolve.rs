// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Finding the bank settings closest to a target capacitance.
//!
//! There are two ways of doing this. The table-based search
//! ([`find_best_capacity`], [`SortedCapacityTable`]) considers every setting
//! and gives the globally nearest capacitance. The direct path
//! ([`BankSet::resolve_greedy`]) needs no table, but decomposes the target
//! additively bank by bank, so it ignores how the banks are actually wired.

use std::cmp::Ordering;

use log::trace;

use super::{BankSet, CapacityTableEntry, ResolveError};
use crate::constants::NANOFARAD;

/// The result of a table search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestCapacity {
    /// The achieved capacitance [F].
    pub capacity: f64,

    /// The absolute difference between the achieved and target capacitances
    /// [F].
    pub error: f64,

    /// The settings that achieve `capacity`.
    pub entry: CapacityTableEntry,
}

/// Linearly scan `entries` for the capacitance closest to `target` [F].
///
/// An entry only replaces the current best if it is *strictly* closer, so the
/// first entry in iteration order wins ties.
pub fn find_best_capacity(
    target: f64,
    entries: &[CapacityTableEntry],
) -> Result<BestCapacity, ResolveError> {
    if !target.is_finite() {
        return Err(ResolveError::NonFiniteTarget(target));
    }
    let (first, rest) = entries.split_first().ok_or(ResolveError::EmptyTable)?;

    let mut best = BestCapacity {
        capacity: first.capacity,
        error: (first.capacity - target).abs(),
        entry: *first,
    };
    for entry in rest {
        let error = (entry.capacity - target).abs();
        if error < best.error {
            best = BestCapacity {
                capacity: entry.capacity,
                error,
                entry: *entry,
            };
        }
    }
    trace!("Best capacity for {target:e} F is {:e} F", best.capacity);

    Ok(best)
}

/// Capacity table entries sorted by capacitance, for logarithmic-time lookups.
/// Each entry remembers its position in the unsorted table, so that lookups
/// break ties exactly like [`find_best_capacity`] does.
#[derive(Debug, Clone)]
pub struct SortedCapacityTable {
    /// (position in the original table, entry)
    entries: Vec<(usize, CapacityTableEntry)>,
}

impl SortedCapacityTable {
    pub fn new(entries: &[CapacityTableEntry]) -> SortedCapacityTable {
        let mut entries: Vec<(usize, CapacityTableEntry)> =
            entries.iter().copied().enumerate().collect();
        // A stable sort keeps equal capacitances in their original order.
        entries.sort_by(|(_, a), (_, b)| {
            a.capacity
                .partial_cmp(&b.capacity)
                .unwrap_or(Ordering::Equal)
        });
        SortedCapacityTable { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the capacitance closest to `target` [F].
    pub fn find_best_capacity(&self, target: f64) -> Result<BestCapacity, ResolveError> {
        if !target.is_finite() {
            return Err(ResolveError::NonFiniteTarget(target));
        }
        if self.entries.is_empty() {
            return Err(ResolveError::EmptyTable);
        }

        // The first entry that isn't below the target...
        let above = self
            .entries
            .partition_point(|(_, e)| e.capacity < target);
        // ... and the first entry of the run of equal capacitances just below
        // the target.
        let below = above.checked_sub(1).map(|i| {
            let c = self.entries[i].1.capacity;
            self.entries.partition_point(|(_, e)| e.capacity < c)
        });

        let candidates = [below, (above < self.entries.len()).then_some(above)];
        let (_, entry, error) = candidates
            .into_iter()
            .flatten()
            .map(|i| {
                let (pos, entry) = self.entries[i];
                (pos, entry, (entry.capacity - target).abs())
            })
            .min_by(|(pos_a, _, err_a), (pos_b, _, err_b)| {
                err_a
                    .partial_cmp(err_b)
                    .unwrap_or(Ordering::Equal)
                    .then(pos_a.cmp(pos_b))
            })
            .ok_or(ResolveError::EmptyTable)?;

        Ok(BestCapacity {
            capacity: entry.capacity,
            error,
            entry,
        })
    }
}

/// The result of the direct (table-less) decomposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreedyResolution {
    pub c1_index: u32,
    pub c2_index: u32,
    pub c3_index: u32,

    /// The target capacitance that couldn't be represented [F]. Never
    /// negative for a non-negative target.
    pub remainder: f64,

    /// The sum of the selected weights [F]. Within the decomposition tolerance
    /// this may be a little larger than the target.
    pub capacity: f64,
}

impl BankSet {
    /// Decompose `target` [F] into bank indices without a table. Bank 1 takes
    /// as much as it can, then bank 2 takes what's left, then bank 3.
    pub fn resolve_greedy(&self, target: f64) -> Result<GreedyResolution, ResolveError> {
        if !target.is_finite() {
            return Err(ResolveError::NonFiniteTarget(target));
        }

        let target_nf = target / NANOFARAD;
        let (c1_index, remainder) = self.c1.capacity_to_index(target_nf);
        let (c2_index, remainder) = self.c2.capacity_to_index(remainder);
        let (c3_index, remainder) = self.c3.capacity_to_index(remainder);
        let capacity_nf = self.c1.capacitance_unchecked(c1_index)
            + self.c2.capacitance_unchecked(c2_index)
            + self.c3.capacitance_unchecked(c3_index);

        Ok(GreedyResolution {
            c1_index,
            c2_index,
            c3_index,
            remainder: remainder * NANOFARAD,
            capacity: capacity_nf * NANOFARAD,
        })
    }
}
