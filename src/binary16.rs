// This file is part of the ieee754b16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fields of the IEEE 754 `binary16` format
//!
//! A packed half is a plain `u16`: sign in bit 15, biased exponent in bits
//! 14 to 10, and explicit significand in bits 9 to 0.  The setters here put a
//! single field in position so that a value can be built with `|`:
//!
//! ```
//! use ieee754b16::binary16::*;
//!
//! let x = pack_set_sign_unchecked(1)
//!     | pack_set_exponent_unbiased_unchecked(1)
//!     | pack_set_significand_unchecked(0x200);
//!
//! assert_eq!(x, 0xC200);
//! assert_eq!(ieee754b16::unpack(x), -3.0);
//! ```

use core::num::FpCategory;

/// Exponent bias: an exponent `e` is stored as `BIAS + e`
pub const BIAS: i32 = 15;

pub const EXPONENT_BITS: u32 = 5;

/// Number of explicit significand bits
pub const SIGNIFICAND_BITS: u32 = 10;

pub const SIGN_MASK: u16 = 0x8000;
pub const EXPONENT_MASK: u16 = 0x7C00;
pub const SIGNIFICAND_MASK: u16 = 0x03FF;

/// Top significand bit, set in every NaN this crate produces
pub const QUIET_BIT: u16 = 0x0200;

/// Biased exponent shared by infinities and NaNs
pub const EXPONENT_MAX_BIASED: u16 = EXPONENT_MASK >> SIGNIFICAND_BITS;

pub const POSITIVE_ZERO: u16 = 0x0000;
pub const NEGATIVE_ZERO: u16 = SIGN_MASK;
pub const POSITIVE_INFINITY: u16 = EXPONENT_MASK;
pub const NEGATIVE_INFINITY: u16 = SIGN_MASK | EXPONENT_MASK;
pub const NAN: u16 = EXPONENT_MASK | QUIET_BIT;

/// Largest finite value, 65504
pub const MAX: u16 = 0x7BFF;

/// Sign bit of `x` as 0 or 1
#[must_use]
pub const fn sign(x: u16) -> u16 {
    x >> 15
}

/// Biased exponent of `x` in `0..=31`
#[must_use]
pub const fn exponent_biased(x: u16) -> u16 {
    (x & EXPONENT_MASK) >> SIGNIFICAND_BITS
}

/// Unbiased exponent of `x`
///
/// This is `-15` for zeros and subnormals, `16` for infinities and NaNs, and
/// the true exponent in `-14..=15` for normal numbers.
#[must_use]
pub const fn exponent_unbiased(x: u16) -> i32 {
    exponent_biased(x) as i32 - BIAS
}

/// Explicit significand bits of `x`
#[must_use]
pub const fn significand(x: u16) -> u16 {
    x & SIGNIFICAND_MASK
}

/// Put the sign bit in position
///
/// Only the lowest bit of `sign` is used.
#[must_use]
pub const fn pack_set_sign_unchecked(sign: u16) -> u16 {
    (sign & 1) << 15
}

/// Put an unbiased exponent in position
///
/// The exponent is not range-checked.  `-15` yields the zero/subnormal field
/// and `16` the infinity/NaN field; anything outside `-15..=16` wraps.
#[must_use]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn pack_set_exponent_unbiased_unchecked(e: i32) -> u16 {
    (((e + BIAS) as u16) << SIGNIFICAND_BITS) & EXPONENT_MASK
}

/// Put explicit significand bits in position
///
/// Bits above the lowest 10 are discarded.
#[must_use]
pub const fn pack_set_significand_unchecked(m: u16) -> u16 {
    m & SIGNIFICAND_MASK
}

/// Classify `x` by its bit pattern
#[must_use]
pub const fn classify(x: u16) -> FpCategory {
    match (exponent_biased(x), significand(x)) {
        (0, 0) => FpCategory::Zero,
        (0, _) => FpCategory::Subnormal,
        (EXPONENT_MAX_BIASED, 0) => FpCategory::Infinite,
        (EXPONENT_MAX_BIASED, _) => FpCategory::Nan,
        _ => FpCategory::Normal,
    }
}
