// This file is part of the ieee754b16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
#![allow(clippy::float_cmp)]

use core::cmp::Ordering;
use ieee754b16::{pack, unpack, Half, NarrowingError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sign_symmetric(x in any::<f64>()) {
        prop_assert_eq!(pack(-x), pack(x) ^ 0x8000);
    }
}

proptest! {
    #[test]
    fn rounds_to_nearest(x in -70_000.0..70_000.0f64) {
        let magnitude = pack(x) & 0x7FFF;
        let ax = x.abs();

        if magnitude == 0x7C00 {
            prop_assert!(ax >= 65520.0);
        } else {
            let error = (unpack(magnitude) - ax).abs();

            for neighbor in [magnitude.wrapping_sub(1), magnitude + 1] {
                if neighbor < 0x7C00 {
                    let other = (unpack(neighbor) - ax).abs();
                    prop_assert!(error <= other, "{x} → {magnitude:#06x}");
                    prop_assert!(error < other || magnitude & 1 == 0, "{x} tie → {magnitude:#06x}");
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn monotonic(x in -65_504.0..65_504.0f64, y in -65_504.0..65_504.0f64) {
        let (lo, hi) = if x <= y { (x, y) } else { (y, x) };
        let (a, b) = (Half::from_f64(lo), Half::from_f64(hi));

        prop_assert_ne!(a.total_cmp(&b), Ordering::Greater);
    }
}

proptest! {
    #[test]
    fn subnormal_range(m in 0..1024u16, fraction in 0.0..1.0f64) {
        let scaled = f64::from(m) + fraction;
        let fraction = scaled - f64::from(m);
        let h = pack(libm::ldexp(scaled, -24));

        prop_assert!(h == m || h == m + 1);
        prop_assert_eq!(h == m + 1, fraction > 0.5 || fraction == 0.5 && m & 1 == 1);
    }
}

proptest! {
    #[test]
    fn try_from_accepts_exactly_representable(bits in any::<u16>()) {
        let h = Half::from_bits(bits);
        prop_assume!(!h.is_nan());

        prop_assert_eq!(Half::try_from(h.to_f64()), Ok(h));
    }
}

proptest! {
    #[test]
    fn try_from_rejects_rounding(x in -65_504.0..65_504.0f64) {
        let exact = unpack(pack(x)) == x;

        match Half::try_from(x) {
            Ok(h) => prop_assert!(exact && h.to_f64() == x),
            Err(NarrowingError::Inexact | NarrowingError::Underflow) => prop_assert!(!exact),
            Err(NarrowingError::Overflow) => prop_assert!(false, "{x} cannot overflow"),
        }
    }
}
