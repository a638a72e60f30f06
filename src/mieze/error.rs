// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::{capacity::ResolveError, eigenfrequency::EigenfrequencyError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MiezeError {
    #[error("The first frequency of a schedule must be positive and finite, but it is {0} Hz")]
    InvalidStart(f64),

    #[error("The schedule's stop frequency must be finite, but it is {0} Hz")]
    InvalidStop(f64),

    #[error("The ratio between the coil frequencies must be greater than 1 and finite, but it is {0}")]
    InvalidRatio(f64),

    #[error("Coil frequency {frequency} Hz: {err}")]
    Eigenfrequency {
        frequency: f64,
        #[source]
        err: EigenfrequencyError,
    },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
