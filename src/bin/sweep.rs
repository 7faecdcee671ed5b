// This file is part of the ieee754b16 project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Print round trips through `binary16` for two fixed ranges

use ieee754b16::sweep::Sweep;
use std::io::{self, BufWriter, Write};

fn main() -> io::Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());

    writeln!(out, "-- [-1.0, 1.0]")?;
    Sweep::unit().try_for_each(|r| writeln!(out, "{r}"))?;

    writeln!(out, "-- [-32767, 32767]")?;
    Sweep::integers().try_for_each(|r| writeln!(out, "{r}"))?;

    out.flush()
}
