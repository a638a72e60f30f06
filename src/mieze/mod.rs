// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! MIEZE frequency schedules.
//!
//! In MIEZE, two precession coils run at slightly different frequencies. The
//! neutron intensity at the detector then oscillates at the chopping frequency
//! 2 (f2 - f1), which sets the echo time. A schedule steps the first coil's
//! frequency geometrically and works out the bank settings for both coils at
//! each step.

mod error;
#[cfg(test)]
mod tests;

pub use error::MiezeError;

use std::{io::Write, path::Path};

use log::{debug, trace};

use crate::{
    capacity::{BestCapacity, SortedCapacityTable},
    constants::{
        H_PLANCK, MASS_NEUTRON, NEUTRON_WAVELENGTH, PERIODS_PER_TIMEBIN,
        SAMPLE_DETECTOR_LENGTH,
    },
    eigenfrequency::EigenfrequencyModel,
    io::{create, CsvWriteError},
};

/// Echo times are written in units of 10 ns.
const ECHO_TIME_SCALE: f64 = 1e8;

pub const SCHEDULE_HEADER: &str = "echo_time,freq1,c1_1,c2_1,c3_1,serial_1,freq2,c1_2,c2_2,c3_2,serial_2,chopping_freq,timebin_freq";

/// The second coil's frequency [Hz], given the first coil's [Hz] and the
/// ratio between them (usually
/// [`DEFAULT_FREQUENCY_RATIO`](crate::constants::DEFAULT_FREQUENCY_RATIO)).
pub fn second_frequency(frequency1: f64, ratio: f64) -> f64 {
    ratio * frequency1
}

/// [Hz]
pub fn chopping_frequency(frequency1: f64, frequency2: f64) -> f64 {
    2.0 * (frequency2 - frequency1)
}

/// The detector time-bin frequency [Hz].
pub fn time_bin(chopping_frequency: f64) -> f64 {
    PERIODS_PER_TIMEBIN * chopping_frequency
}

/// The MIEZE (echo) time [s] for a chopping frequency [Hz].
pub fn mieze_time(chopping_frequency: f64) -> f64 {
    (MASS_NEUTRON / H_PLANCK).powi(2)
        * NEUTRON_WAVELENGTH.powi(3)
        * chopping_frequency
        * SAMPLE_DETECTOR_LENGTH
}

/// Pairs of coil frequencies (f1, f2) [Hz]. Each pair's f2 is `ratio` times
/// its f1, and the next pair starts at the previous f2. Iteration stops once
/// f1 reaches `stop`.
#[derive(Debug, Clone)]
pub struct FrequencySchedule {
    next: f64,
    stop: f64,
    ratio: f64,
}

impl FrequencySchedule {
    pub fn new(start: f64, stop: f64, ratio: f64) -> Result<FrequencySchedule, MiezeError> {
        if !(start.is_finite() && start > 0.0) {
            return Err(MiezeError::InvalidStart(start));
        }
        if !stop.is_finite() {
            return Err(MiezeError::InvalidStop(stop));
        }
        if !(ratio.is_finite() && ratio > 1.0) {
            return Err(MiezeError::InvalidRatio(ratio));
        }
        Ok(FrequencySchedule {
            next: start,
            stop,
            ratio,
        })
    }
}

impl Iterator for FrequencySchedule {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.stop {
            return None;
        }
        let frequency1 = self.next;
        let frequency2 = second_frequency(frequency1, self.ratio);
        self.next = frequency2;
        Some((frequency1, frequency2))
    }
}

/// The bank settings for one coil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilSetting {
    /// [Hz]
    pub frequency: f64,

    /// The capacitance the coil needs for `frequency` [F].
    pub target_capacity: f64,

    pub best: BestCapacity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleRow {
    /// [s]
    pub echo_time: f64,
    pub coil1: CoilSetting,
    pub coil2: CoilSetting,
    pub chopping_frequency: f64,
    pub time_bin: f64,
}

fn coil_setting(
    frequency: f64,
    model: &EigenfrequencyModel,
    table: &SortedCapacityTable,
) -> Result<CoilSetting, MiezeError> {
    let target_capacity = model
        .capacity_from_frequency(frequency)
        .map_err(|err| MiezeError::Eigenfrequency { frequency, err })?;
    let best = table.find_best_capacity(target_capacity)?;
    Ok(CoilSetting {
        frequency,
        target_capacity,
        best,
    })
}

/// Work out the bank settings for both coils at every step of `schedule`.
pub fn compute_schedule(
    schedule: FrequencySchedule,
    model: &EigenfrequencyModel,
    table: &SortedCapacityTable,
) -> Result<Vec<ScheduleRow>, MiezeError> {
    let rows = schedule
        .map(|(frequency1, frequency2)| {
            let coil1 = coil_setting(frequency1, model, table)?;
            let coil2 = coil_setting(frequency2, model, table)?;
            let chop = chopping_frequency(frequency1, frequency2);
            let row = ScheduleRow {
                echo_time: mieze_time(chop),
                coil1,
                coil2,
                chopping_frequency: chop,
                time_bin: time_bin(chop),
            };
            trace!("{row:?}");
            Ok(row)
        })
        .collect::<Result<Vec<_>, MiezeError>>()?;
    debug!("Computed {} schedule rows", rows.len());
    Ok(rows)
}

fn write_coil<T: Write>(buf: &mut T, coil: &CoilSetting) -> std::io::Result<()> {
    let entry = &coil.best.entry;
    write!(
        buf,
        "{:.0},{},{},{},{}",
        coil.frequency,
        entry.c1_index,
        entry.c2_index,
        entry.c3_index,
        entry.mode.code()
    )
}

/// Write schedule rows as CSV. Echo times are in units of 10 ns, rounded to 3
/// decimal places; frequencies are rounded to whole Hz.
pub fn write_schedule<T: Write>(buf: &mut T, rows: &[ScheduleRow]) -> Result<(), CsvWriteError> {
    writeln!(buf, "{SCHEDULE_HEADER}")?;
    for row in rows {
        write!(buf, "{:.3},", row.echo_time * ECHO_TIME_SCALE)?;
        write_coil(buf, &row.coil1)?;
        write!(buf, ",")?;
        write_coil(buf, &row.coil2)?;
        writeln!(buf, ",{:.0},{:.0}", row.chopping_frequency, row.time_bin)?;
    }
    buf.flush()?;
    Ok(())
}

pub fn write_schedule_file(file: &Path, rows: &[ScheduleRow]) -> Result<(), CsvWriteError> {
    let mut buf = create(file)?;
    write_schedule(&mut buf, rows)
}
