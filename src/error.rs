// This file is part of the ieee754b16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Reason an `f64` has no exact `binary16` counterpart
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NarrowingError {
    /// A finite value would saturate to infinity
    #[error("finite value is out of binary16 range")]
    Overflow,

    /// A nonzero value would flush to zero
    #[error("nonzero value underflows binary16")]
    Underflow,

    /// A value would round to a different finite value
    #[error("value is not exactly representable in binary16")]
    Inexact,
}
