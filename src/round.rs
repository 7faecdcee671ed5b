// This file is part of the ieee754b16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Round to nearest, ties to even

/// Result of dropping low bits from a significand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounded {
    /// Retained bits after rounding, masked to the field width
    pub value: u64,

    /// Whether rounding overflowed the field width
    pub carry: bool,
}

/// Drop the low `shift` bits of `x` with round-to-nearest-even
///
/// The result is masked to `width` bits.  If rounding up overflows those
/// bits, `carry` is set and `value` wraps to zero.
///
/// The guard bit is the highest discarded bit and the sticky bit is the OR of
/// the discarded bits below it.  Adding half an ulp, minus one when the
/// retained least significant bit is even, rounds an exact tie toward the
/// even neighbor and every other case toward the nearer neighbor.
///
/// Every argument is accepted.  A `shift` beyond 64 leaves `x` below half an
/// ulp, so the result is zero.  A `width` of 64 or more keeps the whole
/// rounded value and never carries.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn round_nearest_even(x: u64, shift: u32, width: u32) -> Rounded {
    if shift > u64::BITS {
        return Rounded {
            value: 0,
            carry: false,
        };
    }

    let rounded = if shift == 0 {
        x as u128
    } else {
        let retained = if shift < u64::BITS { x >> shift } else { 0 };
        let bias = (1u128 << (shift - 1)) - (!retained & 1) as u128;
        (x as u128 + bias) >> shift
    };

    let mask = match 1u128.checked_shl(width) {
        Some(bit) => bit - 1,
        None => u128::MAX,
    };

    let carry = match rounded.checked_shr(width) {
        Some(high) => high != 0,
        None => false,
    };

    Rounded {
        value: (rounded & mask) as u64,
        carry,
    }
}
