// This file is part of the ieee754b16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::binary16::{self as b16, EXPONENT_MAX_BIASED, QUIET_BIT, SIGNIFICAND_BITS};
use crate::binary64::{self as b64, Decoded};
use crate::round::round_nearest_even;
use core::num::FpCategory;

/// Significand bits dropped when narrowing a normal number
const SHIFT: u32 = b64::SIGNIFICAND_BITS - SIGNIFICAND_BITS;

/// Smallest biased half exponent whose values can round to a nonzero subnormal
const MIN_SUBNORMAL_BIASED: i64 = -(SIGNIFICAND_BITS as i64);

/// Encode `x` as a `binary16` bit pattern
///
/// This is lossy and never fails.
///
/// - Finite values round to nearest, ties to even.
/// - Magnitudes from 65520 up saturate to ±∞.
/// - Magnitudes up to 2<sup>-25</sup>, including every `f64` subnormal,
///   flush to ±0.
/// - NaNs stay NaNs with the sign and the top 10 payload bits preserved.
///   The quiet bit is always set so that the payload cannot vanish.
///
/// ```
/// assert_eq!(ieee754b16::pack(1.0), 0x3C00);
/// assert_eq!(ieee754b16::pack(-2.0), 0xC000);
/// assert_eq!(ieee754b16::pack(65519.0), 0x7BFF);
/// assert_eq!(ieee754b16::pack(65520.0), 0x7C00);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn pack(x: f64) -> u16 {
    let sign = b16::pack_set_sign_unchecked(b64::sign(x) as u16);

    let magnitude = match b64::decode(x) {
        Decoded::Zero | Decoded::Subnormal(_) => b16::POSITIVE_ZERO,
        Decoded::Infinite => b16::POSITIVE_INFINITY,
        Decoded::Nan(m) => b16::POSITIVE_INFINITY | QUIET_BIT | (m >> SHIFT) as u16,
        Decoded::Normal {
            exponent,
            significand,
        } => pack_normal(exponent + b16::BIAS as i64, significand),
    };

    sign | magnitude
}

/// Encode the magnitude of a normal `f64` with half-biased exponent `e`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn pack_normal(e: i64, m: u64) -> u16 {
    if e >= EXPONENT_MAX_BIASED as i64 {
        return b16::POSITIVE_INFINITY;
    }

    if e < MIN_SUBNORMAL_BIASED {
        return b16::POSITIVE_ZERO;
    }

    if e <= 0 {
        let full = m | 1 << b64::SIGNIFICAND_BITS;
        let r = round_nearest_even(full, (1 - e) as u32 + SHIFT, SIGNIFICAND_BITS);

        // Rounding up from the largest subnormal reaches the smallest normal.
        return if r.carry {
            1 << SIGNIFICAND_BITS
        } else {
            r.value as u16
        };
    }

    let r = round_nearest_even(m, SHIFT, SIGNIFICAND_BITS);
    let e = if r.carry { e + 1 } else { e };

    if e >= EXPONENT_MAX_BIASED as i64 {
        return b16::POSITIVE_INFINITY;
    }

    (e as u16) << SIGNIFICAND_BITS | r.value as u16
}

/// Decode a `binary16` bit pattern into the `f64` it represents
///
/// This is exact: every `binary16` value is representable in `binary64`.
/// NaN payloads are carried over into the top significand bits.
///
/// ```
/// assert_eq!(ieee754b16::unpack(0x3C00), 1.0);
/// assert_eq!(ieee754b16::unpack(0x7BFF), 65504.0);
/// assert_eq!(ieee754b16::unpack(0x0001), 2.0_f64.powi(-24));
/// assert!(ieee754b16::unpack(0xFE00).is_nan());
/// ```
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub const fn unpack(x: u16) -> f64 {
    let sign = (b16::sign(x) as u64) << 63;
    let m = b16::significand(x) as u64;

    let magnitude = match b16::classify(x) {
        FpCategory::Zero => 0,
        FpCategory::Infinite => b64::EXPONENT_MASK,
        FpCategory::Nan => b64::EXPONENT_MASK | m << SHIFT,
        FpCategory::Normal => {
            let e = b16::exponent_unbiased(x) as i64 + b64::BIAS;
            (e as u64) << b64::SIGNIFICAND_BITS | m << SHIFT
        }
        FpCategory::Subnormal => {
            // Move the leading 1 into the implicit bit at position 10.
            let shift = m.leading_zeros() - (u64::BITS - 1 - SIGNIFICAND_BITS);
            let e = (1 - b16::BIAS) as i64 - shift as i64 + b64::BIAS;
            let m = (m << shift) & b16::SIGNIFICAND_MASK as u64;
            (e as u64) << b64::SIGNIFICAND_BITS | m << SHIFT
        }
    };

    f64::from_bits(sign | magnitude)
}
