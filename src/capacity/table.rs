// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The exhaustive table of every capacitance the banks can produce.

use indexmap::IndexMap;
use itertools::iproduct;
use log::debug;
use strum::IntoEnumIterator;

use super::{
    add_parallel, find_best_capacity, BankError, BankSet, BestCapacity, CapacitorBank,
    ConnectionMode, ResolveError, SortedCapacityTable,
};
use crate::constants::NANOFARAD;

/// A capacitance [F] and the bank settings that produce it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityTableEntry {
    pub capacity: f64,
    pub c1_index: u32,
    pub c2_index: u32,
    pub c3_index: u32,
    pub mode: ConnectionMode,
}

impl BankSet {
    /// The total capacitance [F] of a bank setting.
    ///
    /// Bank 3 is in series with banks 1 and 2, except that if either side is
    /// zero, the other side is used as-is (an unused bank doesn't force the
    /// total to zero).
    pub fn compute_capacity(
        &self,
        c1_index: u32,
        c2_index: u32,
        c3_index: u32,
        mode: ConnectionMode,
    ) -> Result<f64, BankError> {
        let c1 = self.c1.index_to_capacitance(c1_index)?;
        let c2 = self.c2.index_to_capacitance(c2_index)?;
        let c3 = self.c3.index_to_capacitance(c3_index)?;
        Ok(combine_banks(c1, c2, c3, mode))
    }
}

/// Inputs are in nF, the output is in F.
fn combine_banks(c1: f64, c2: f64, c3: f64, mode: ConnectionMode) -> f64 {
    let c12 = mode.combine(c1, c2);
    if c3 == 0.0 {
        c12 * NANOFARAD
    } else if c12 == 0.0 {
        c3 * NANOFARAD
    } else {
        add_parallel(c12 * NANOFARAD, c3 * NANOFARAD)
    }
}

fn all_capacitances(bank: &CapacitorBank) -> Vec<f64> {
    (0..=bank.max_index())
        .map(|i| bank.capacitance_unchecked(i))
        .collect()
}

/// Capacity table entries, in the order they were enumerated or read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapacityTable {
    entries: Vec<CapacityTableEntry>,
}

impl CapacityTable {
    /// Every combination of bank indices and connection modes, in enumeration
    /// order (bank 1 outermost, connection mode innermost). Capacitances may
    /// repeat.
    pub fn enumerate(banks: &BankSet) -> impl Iterator<Item = CapacityTableEntry> {
        let c1s = all_capacitances(&banks.c1);
        let c2s = all_capacitances(&banks.c2);
        let c3s = all_capacitances(&banks.c3);
        let (m1, m2, m3) = (
            banks.c1.max_index(),
            banks.c2.max_index(),
            banks.c3.max_index(),
        );

        iproduct!(0..=m1, 0..=m2, 0..=m3, ConnectionMode::iter()).map(
            move |(c1_index, c2_index, c3_index, mode)| CapacityTableEntry {
                capacity: combine_banks(
                    c1s[c1_index as usize],
                    c2s[c2_index as usize],
                    c3s[c3_index as usize],
                    mode,
                ),
                c1_index,
                c2_index,
                c3_index,
                mode,
            },
        )
    }

    /// Build the table of unique capacitances. Where several settings give
    /// exactly the same capacitance, the capacitance keeps the position it
    /// was first enumerated at, but the setting enumerated *last* is kept.
    /// Bank tables have always been generated this way.
    pub fn build(banks: &BankSet) -> CapacityTable {
        let mut map: IndexMap<u64, CapacityTableEntry> =
            IndexMap::with_capacity(banks.num_combinations());
        let mut num_enumerated = 0;
        for entry in Self::enumerate(banks) {
            map.insert(entry.capacity.to_bits(), entry);
            num_enumerated += 1;
        }
        debug!(
            "Enumerated {num_enumerated} bank combinations; {} unique capacitances",
            map.len()
        );

        CapacityTable {
            entries: map.into_iter().map(|(_, entry)| entry).collect(),
        }
    }

    pub fn from_entries(entries: Vec<CapacityTableEntry>) -> CapacityTable {
        CapacityTable { entries }
    }

    pub fn entries(&self) -> &[CapacityTableEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Linear nearest-value search; see [`find_best_capacity`].
    pub fn find_best_capacity(&self, target: f64) -> Result<BestCapacity, ResolveError> {
        find_best_capacity(target, &self.entries)
    }

    /// Get a copy of this table that is sorted for binary-search lookups.
    pub fn sorted(&self) -> SortedCapacityTable {
        SortedCapacityTable::new(&self.entries)
    }
}

impl FromIterator<CapacityTableEntry> for CapacityTable {
    fn from_iter<I: IntoIterator<Item = CapacityTableEntry>>(iter: I) -> Self {
        CapacityTable {
            entries: iter.into_iter().collect(),
        }
    }
}
