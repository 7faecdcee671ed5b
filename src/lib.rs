// This file is part of the ieee754b16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversion between `f64` and IEEE 754 `binary16` bit patterns
//!
//! [`pack`] narrows an `f64` to the 16-bit layout with round-to-nearest-even
//! and saturation to infinity.  [`unpack`] widens it back exactly.  [`Half`]
//! wraps the same bits in a type with constants and predicates.
#![no_std]

pub mod binary16;
pub mod binary64;
mod convert;
mod error;
mod num;
pub mod round;
pub mod sweep;

use core::cmp::Ordering;
use core::num::FpCategory;

pub use convert::{pack, unpack};
pub use error::NarrowingError;

/// IEEE 754 `binary16` value stored as its bit pattern
///
/// Equality and hashing compare bits, so `NaN == NaN` when the payloads
/// match and `0.0 != -0.0`.  Compare values with [`Half::to_f64`] or order
/// them with [`Half::total_cmp`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Half(u16);

impl Half {
    pub const RADIX: u32 = 2;
    pub const MANTISSA_DIGITS: u32 = binary16::SIGNIFICAND_BITS + 1;
    pub const DIGITS: u32 = 3;
    pub const MAX_EXP: i32 = 1 << (binary16::EXPONENT_BITS - 1);
    pub const MIN_EXP: i32 = 3 - Self::MAX_EXP;

    pub const ZERO: Self = Self(binary16::POSITIVE_ZERO);
    pub const NEG_ZERO: Self = Self(binary16::NEGATIVE_ZERO);
    pub const ONE: Self = Self(0x3C00);
    pub const NEG_ONE: Self = Self(0xBC00);
    pub const INFINITY: Self = Self(binary16::POSITIVE_INFINITY);
    pub const NEG_INFINITY: Self = Self(binary16::NEGATIVE_INFINITY);
    pub const NAN: Self = Self(binary16::NAN);

    /// Largest finite value, 65504
    pub const MAX: Self = Self(binary16::MAX);

    /// Smallest finite value, -65504
    pub const MIN: Self = Self(binary16::SIGN_MASK | binary16::MAX);

    /// Smallest positive normal value, 2<sup>-14</sup>
    pub const MIN_POSITIVE: Self = Self(0x0400);

    /// Smallest positive subnormal value, 2<sup>-24</sup>
    pub const MIN_POSITIVE_SUBNORMAL: Self = Self(0x0001);

    /// Difference between 1 and the next larger value, 2<sup>-10</sup>
    pub const EPSILON: Self = Self(0x1400);

    #[must_use]
    pub const fn from_bits(v: u16) -> Self {
        Self(v)
    }

    #[must_use]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Round `x` to the nearest `binary16` value
    ///
    /// See [`pack`] for the rounding and saturation rules.  Use the
    /// [`TryFrom`] conversion to reject lossy conversions instead.
    #[must_use]
    pub const fn from_f64(x: f64) -> Self {
        Self(pack(x))
    }

    /// Exact value as `f64`
    #[must_use]
    pub const fn to_f64(self) -> f64 {
        unpack(self.0)
    }

    #[must_use]
    pub const fn classify(self) -> FpCategory {
        binary16::classify(self.0)
    }

    #[must_use]
    pub const fn is_nan(self) -> bool {
        self.0 & !binary16::SIGN_MASK > binary16::POSITIVE_INFINITY
    }

    #[must_use]
    pub const fn is_infinite(self) -> bool {
        self.0 & !binary16::SIGN_MASK == binary16::POSITIVE_INFINITY
    }

    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0 & binary16::EXPONENT_MASK != binary16::EXPONENT_MASK
    }

    #[must_use]
    pub const fn is_normal(self) -> bool {
        matches!(self.classify(), FpCategory::Normal)
    }

    #[must_use]
    pub const fn is_subnormal(self) -> bool {
        matches!(self.classify(), FpCategory::Subnormal)
    }

    /// Whether this is +0 or -0
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 & !binary16::SIGN_MASK == 0
    }

    #[must_use]
    pub const fn is_sign_positive(self) -> bool {
        !self.is_sign_negative()
    }

    #[must_use]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & binary16::SIGN_MASK != 0
    }

    /// Total order on bit patterns
    ///
    /// The order is sign-magnitude:
    /// -NaN < -∞ < ... < -0 < +0 < ... < +∞ < +NaN.  Finite values compare
    /// the same way as their `f64` counterparts, except that -0 < +0.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub const fn total_cmp(&self, other: &Self) -> Ordering {
        const fn key(x: Half) -> i16 {
            let x = x.0 as i16;
            x ^ (((x >> 15) as u16) >> 1) as i16
        }

        let (x, y) = (key(*self), key(*other));

        if x < y {
            Ordering::Less
        } else if x > y {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl From<Half> for f64 {
    fn from(x: Half) -> Self {
        x.to_f64()
    }
}

impl TryFrom<f64> for Half {
    type Error = NarrowingError;

    /// Convert `x` only if no information is lost
    ///
    /// NaNs are always accepted, since their payload is not a value.
    fn try_from(x: f64) -> Result<Self, Self::Error> {
        let h = Self::from_f64(x);

        if x.is_nan() || h.to_f64().to_bits() == x.to_bits() {
            return Ok(h);
        }

        Err(if h.is_infinite() {
            NarrowingError::Overflow
        } else if h.is_zero() {
            NarrowingError::Underflow
        } else {
            NarrowingError::Inexact
        })
    }
}
