// This file is part of the ieee754b16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Round trips over evenly spaced inputs
//!
//! The `sweep` binary prints [`Sweep::unit`] and [`Sweep::integers`] line by
//! line.  The inputs accumulate by repeated addition, so the unit sweep picks
//! up the usual decimal drift (`-0.999`, `-0.998`, ... are not exact).

use core::fmt;
use core::iter::FusedIterator;

/// One input pushed through [`pack`](crate::pack) and
/// [`unpack`](crate::unpack)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundTrip {
    pub input: f64,
    pub packed: u16,
    pub output: f64,
}

impl RoundTrip {
    #[must_use]
    pub const fn new(input: f64) -> Self {
        let packed = crate::pack(input);

        Self {
            input,
            packed,
            output: crate::unpack(packed),
        }
    }
}

impl fmt::Display for RoundTrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.8} → 0x{:04x} → {:.8}",
            self.input, self.packed, self.output
        )
    }
}

/// Iterator over `start`, `start + step`, ... up to and including `end`
#[derive(Debug, Clone)]
pub struct Sweep {
    next: f64,
    end: f64,
    step: f64,
}

impl Sweep {
    /// Sweep from `start` to `end` inclusive
    ///
    /// The iterator is empty if `step` is not positive or either bound is
    /// NaN, so it always terminates on finite bounds.
    #[must_use]
    pub const fn new(start: f64, end: f64, step: f64) -> Self {
        Self {
            next: start,
            end,
            step,
        }
    }

    /// `[-1, 1]` in steps of 0.001
    #[must_use]
    pub const fn unit() -> Self {
        Self::new(-1.0, 1.0, 0.001)
    }

    /// `[-32767, 32767]` in steps of 1
    #[must_use]
    pub const fn integers() -> Self {
        Self::new(-32767.0, 32767.0, 1.0)
    }
}

impl Iterator for Sweep {
    type Item = RoundTrip;

    fn next(&mut self) -> Option<RoundTrip> {
        if !(self.step > 0.0 && self.next <= self.end) {
            return None;
        }

        let x = self.next;
        let advanced = x + self.step;

        // A step below half an ulp of `x` would never move.
        self.next = if advanced > x { advanced } else { f64::NAN };
        Some(RoundTrip::new(x))
    }
}

impl FusedIterator for Sweep {}
