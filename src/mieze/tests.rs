// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_relative_eq;

use super::*;
use crate::{
    capacity::{BankSet, CapacityTable},
    constants::{DEFAULT_FREQUENCY_RATIO, DEFAULT_SCHEDULE_START_HZ, DEFAULT_SCHEDULE_STOP_HZ},
};

#[test]
fn test_derived_frequencies() {
    let f2 = second_frequency(30e3, DEFAULT_FREQUENCY_RATIO);
    assert_relative_eq!(f2, 36e3, max_relative = 1e-12);
    assert_relative_eq!(second_frequency(30e3, 1.5), 45e3, max_relative = 1e-12);
    let chop = chopping_frequency(30e3, f2);
    assert_relative_eq!(chop, 12e3, max_relative = 1e-9);
    assert_relative_eq!(time_bin(chop), 192e3, max_relative = 1e-9);
}

#[test]
fn test_schedule_uses_its_ratio() {
    let schedule = FrequencySchedule::new(10e3, 100e3, 2.0).unwrap();
    let pairs: Vec<_> = schedule.collect();
    assert_eq!(pairs.len(), 4);
    for &(f1, f2) in &pairs {
        assert_eq!(f2, second_frequency(f1, 2.0));
    }
    assert_relative_eq!(pairs[3].0, 80e3);
}

#[test]
fn test_mieze_time() {
    assert_relative_eq!(
        mieze_time(12e3),
        1.1765865746605475e-9,
        max_relative = 1e-12
    );
    assert_eq!(mieze_time(0.0), 0.0);
    // Linear in the chopping frequency.
    assert_relative_eq!(mieze_time(24e3), 2.0 * mieze_time(12e3));
}

#[test]
fn test_schedule_steps() {
    let schedule = FrequencySchedule::new(
        DEFAULT_SCHEDULE_START_HZ,
        DEFAULT_SCHEDULE_STOP_HZ,
        DEFAULT_FREQUENCY_RATIO,
    )
    .unwrap();
    let pairs: Vec<_> = schedule.collect();
    assert_eq!(pairs.len(), 20);
    assert_relative_eq!(pairs[0].0, 30e3);
    assert_relative_eq!(pairs[0].1, 36e3, max_relative = 1e-12);
    for window in pairs.windows(2) {
        assert_eq!(window[1].0, window[0].1);
    }
    assert!(pairs.iter().all(|&(f1, _)| f1 < DEFAULT_SCHEDULE_STOP_HZ));

    // Starting at or above the stop gives nothing.
    assert_eq!(FrequencySchedule::new(2e6, 1e6, 1.2).unwrap().count(), 0);
}

#[test]
fn test_schedule_validation() {
    assert_eq!(
        FrequencySchedule::new(0.0, 1e6, 1.2).unwrap_err(),
        MiezeError::InvalidStart(0.0)
    );
    assert_eq!(
        FrequencySchedule::new(30e3, 1e6, 1.0).unwrap_err(),
        MiezeError::InvalidRatio(1.0)
    );
    assert!(matches!(
        FrequencySchedule::new(30e3, f64::NAN, 1.2),
        Err(MiezeError::InvalidStop(_))
    ));
}

#[test]
fn test_compute_and_write_schedule() {
    let table = CapacityTable::build(&BankSet::default()).sorted();
    let model = EigenfrequencyModel::default();
    let schedule = FrequencySchedule::new(30e3, 100e3, 1.2).unwrap();
    let rows = compute_schedule(schedule, &model, &table).unwrap();
    // 30, 36, 43.2, 51.84, 62.208, 74.65, 89.58 kHz
    assert_eq!(rows.len(), 7);

    for row in &rows {
        assert!(row.coil1.best.error >= 0.0);
        assert!(row.coil2.target_capacity < row.coil1.target_capacity);
        assert_relative_eq!(row.coil2.frequency, 1.2 * row.coil1.frequency);
        assert_relative_eq!(row.time_bin, 16.0 * row.chopping_frequency);
    }

    let mut buf = vec![];
    write_schedule(&mut buf, &rows).unwrap();
    let written = String::from_utf8(buf).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some(SCHEDULE_HEADER));
    let first = lines.next().unwrap();
    assert!(first.starts_with("0.118,30000,"), "{first}");
    assert!(first.ends_with(",12000,192000"), "{first}");
    assert_eq!(first.split(',').count(), SCHEDULE_HEADER.split(',').count());
    assert_eq!(lines.count(), 6);
}

#[test]
fn test_schedule_columns_follow_header() {
    let table = CapacityTable::build(&BankSet::default()).sorted();
    let model = EigenfrequencyModel::default();
    let schedule = FrequencySchedule::new(30e3, 31e3, 1.2).unwrap();
    let rows = compute_schedule(schedule, &model, &table).unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];

    let mut buf = vec![];
    write_schedule(&mut buf, &rows).unwrap();
    let written = String::from_utf8(buf).unwrap();
    let mut lines = written.lines();
    let header: Vec<&str> = lines.next().unwrap().split(',').collect();
    let values: Vec<&str> = lines.next().unwrap().split(',').collect();
    let column = |name: &str| {
        let i = header.iter().position(|&h| h == name).unwrap();
        values[i].to_string()
    };

    assert_eq!(header[0], "echo_time");
    assert_eq!(column("freq1"), "30000");
    assert_eq!(column("freq2"), "36000");
    for (coil, suffix) in [(&row.coil1, "1"), (&row.coil2, "2")] {
        let entry = &coil.best.entry;
        assert_eq!(column(&format!("c1_{suffix}")), entry.c1_index.to_string());
        assert_eq!(column(&format!("c2_{suffix}")), entry.c2_index.to_string());
        assert_eq!(column(&format!("c3_{suffix}")), entry.c3_index.to_string());
        assert_eq!(column(&format!("serial_{suffix}")), entry.mode.code().to_string());
    }
    assert_eq!(column("chopping_freq"), "12000");
    assert_eq!(column("timebin_freq"), "192000");
}

#[test]
fn test_schedule_with_empty_table() {
    let table = CapacityTable::default().sorted();
    let model = EigenfrequencyModel::default();
    let schedule = FrequencySchedule::new(30e3, 100e3, 1.2).unwrap();
    assert_eq!(
        compute_schedule(schedule, &model, &table),
        Err(MiezeError::Resolve(crate::capacity::ResolveError::EmptyTable))
    );
}
