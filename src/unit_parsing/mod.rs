// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to parse strings into plain numbers or some quantity with a unit.

mod error;

pub use error::UnitParseError;

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, IntoStaticStr)]
#[allow(non_camel_case_types)]
pub enum FreqFormat {
    /// Hertz
    Hz,

    /// kiloHertz
    kHz,

    /// MegaHertz
    MHz,
}

impl FreqFormat {
    /// Multiply by this to get Hz.
    pub fn to_hz(self) -> f64 {
        match self {
            FreqFormat::Hz => 1.0,
            FreqFormat::kHz => 1e3,
            FreqFormat::MHz => 1e6,
        }
    }
}

/// Parse a string that may have a unit of frequency attached to it. Units are
/// case insensitive (there's no use for millihertz here, so "mhz" is MHz).
pub fn parse_freq(s: &str) -> Result<(f64, Option<FreqFormat>), UnitParseError> {
    // Try to parse a naked number.
    let maybe_number: Option<f64> = s.trim().parse().ok();
    if let Some(number) = maybe_number {
        return Ok((number, None));
    };

    // That didn't work; let's search over our supported formats.
    let prefix = s.trim().trim_end_matches(char::is_alphabetic);
    let suffix = &s.trim()[prefix.len()..];
    for freq_format in FreqFormat::iter() {
        let freq_format_str: &'static str = freq_format.into();
        if suffix.to_uppercase() == freq_format_str.to_uppercase() {
            let number: f64 = match prefix.trim().parse() {
                Ok(n) => n,
                Err(_) => {
                    return Err(UnitParseError::GotFreqUnitButCantParse {
                        input: s.to_string(),
                        unit: freq_format_str,
                    })
                }
            };
            return Ok((number, Some(freq_format)));
        }
    }

    // If we made it this far, we don't know how to parse the string.
    Err(UnitParseError::Unknown(s.to_string()))
}

/// Parse a frequency into Hz. A naked number is already in Hz.
pub fn parse_freq_hz(s: &str) -> Result<f64, UnitParseError> {
    let (number, unit) = parse_freq(s)?;
    Ok(number * unit.map(FreqFormat::to_hz).unwrap_or(1.0))
}
