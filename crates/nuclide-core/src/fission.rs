// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Fission Parity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Symmetric fission into two identical even-even fragments.
//!
//! Parity arithmetic only; no energy threshold is evaluated.

use nuclide_types::nuclide::Nuclide;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FissionFeasibility {
    /// A or Z odd: no symmetric split exists.
    InvalidParity,
    /// Symmetric split exists but A/2 or Z/2 is odd.
    OddFragments,
    /// Splits into two even-even halves.
    Possible,
    /// A = 0.
    Undetermined,
}

impl fmt::Display for FissionFeasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FissionFeasibility::InvalidParity => "Odd A or Z",
            FissionFeasibility::OddFragments => "Odd fragments",
            FissionFeasibility::Possible => "Possible",
            FissionFeasibility::Undetermined => "Cannot be determined",
        };
        f.write_str(text)
    }
}

pub fn classify_fission(nuclide: &Nuclide) -> FissionFeasibility {
    let (z, a) = (nuclide.z(), nuclide.a());
    if a == 0 {
        return FissionFeasibility::Undetermined;
    }
    if a % 2 != 0 || z % 2 != 0 {
        return FissionFeasibility::InvalidParity;
    }
    if (a / 2) % 2 != 0 || (z / 2) % 2 != 0 {
        FissionFeasibility::OddFragments
    } else {
        FissionFeasibility::Possible
    }
}
