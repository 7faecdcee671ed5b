// This file is part of the ieee754b16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Fields of the IEEE 754 `binary64` format

/// Exponent bias: an exponent `e` is stored as `BIAS + e`
pub const BIAS: i64 = 1023;

/// Number of explicit significand bits
pub const SIGNIFICAND_BITS: u32 = f64::MANTISSA_DIGITS - 1;

pub const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
pub const EXPONENT_MASK: u64 = 0x7FF0_0000_0000_0000;
pub const SIGNIFICAND_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;
pub const NEGATIVE_ZERO_BITS: u64 = SIGN_MASK;

/// Biased exponent shared by infinities and NaNs
pub const EXPONENT_MAX_BIASED: u64 = EXPONENT_MASK >> SIGNIFICAND_BITS;

/// Sign bit of `x` as 0 or 1
#[must_use]
pub const fn sign(x: f64) -> u64 {
    x.to_bits() >> 63
}

/// Biased exponent of `x` in `0..=0x7FF`
#[must_use]
pub const fn exponent_biased(x: f64) -> u64 {
    (x.to_bits() & EXPONENT_MASK) >> SIGNIFICAND_BITS
}

/// Unbiased exponent of `x`
///
/// This is `-1023` for zeros and subnormals, `1024` for infinities and NaNs,
/// and the true exponent in `-1022..=1023` for normal numbers.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn exponent_unbiased(x: f64) -> i64 {
    exponent_biased(x) as i64 - BIAS
}

/// Explicit significand bits of `x` without the implicit leading 1
#[must_use]
pub const fn significand(x: f64) -> u64 {
    x.to_bits() & SIGNIFICAND_MASK
}

/// A `binary64` value split by category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    Zero,
    Subnormal(u64),
    Normal {
        /// Unbiased exponent in `-1022..=1023`
        exponent: i64,
        /// Explicit significand bits
        significand: u64,
    },
    Infinite,
    Nan(u64),
}

/// Classify `x` by its bit pattern
///
/// The sign is not part of the result; read it with [`sign`].
#[must_use]
pub const fn decode(x: f64) -> Decoded {
    let m = significand(x);

    match (exponent_biased(x), m) {
        (0, 0) => Decoded::Zero,
        (0, m) => Decoded::Subnormal(m),
        (EXPONENT_MAX_BIASED, 0) => Decoded::Infinite,
        (EXPONENT_MAX_BIASED, m) => Decoded::Nan(m),
        #[allow(clippy::cast_possible_wrap)]
        (e, m) => Decoded::Normal {
            exponent: e as i64 - BIAS,
            significand: m,
        },
    }
}
