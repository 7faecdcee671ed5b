// This file is part of the ieee754b16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! `num-traits` conversions for [`Half`]
//!
//! Everything goes through `f64`, which holds every `binary16` value exactly
//! and rounds every integer that `binary16` could hold exactly.

use crate::Half;
use num_traits::{Bounded, FromPrimitive, NumCast, ToPrimitive};

impl Bounded for Half {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl ToPrimitive for Half {
    fn to_i64(&self) -> Option<i64> {
        Half::to_f64(*self).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        Half::to_f64(*self).to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Half::to_f64(*self))
    }
}

impl FromPrimitive for Half {
    #[allow(clippy::cast_precision_loss)]
    fn from_i64(n: i64) -> Option<Self> {
        Some(Half::from_f64(n as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_u64(n: u64) -> Option<Self> {
        Some(Half::from_f64(n as f64))
    }

    fn from_f32(n: f32) -> Option<Self> {
        Some(Half::from_f64(n.into()))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Some(Half::from_f64(n))
    }
}

impl NumCast for Half {
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        n.to_f64().map(Half::from_f64)
    }
}
