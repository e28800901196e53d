// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Nuclear Radius
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Liquid-drop radius R = r0·A^(1/3).

use crate::binding::ensure_finite;
use nuclide_types::error::NuclideResult;
use nuclide_types::nuclide::Nuclide;

/// Nuclear radius [fm], clamped to >= 0. A = 0 gives 0.
pub fn nuclear_radius(nuclide: &Nuclide, r0_fm: f64) -> NuclideResult<f64> {
    if nuclide.is_empty() {
        return Ok(0.0);
    }
    let r = ensure_finite(r0_fm * (nuclide.a() as f64).cbrt(), nuclide, "radius")?;
    Ok(r.max(0.0))
}

/// Sample R = r0·A^(1/3) at `points` evenly spaced A in [a_min, a_max].
///
/// Endpoints are included. Fewer than two points degenerates to `[a_min]`.
pub fn radius_curve(r0_fm: f64, a_min: f64, a_max: f64, points: usize) -> Vec<(f64, f64)> {
    match points {
        0 => Vec::new(),
        1 => vec![(a_min, r0_fm * a_min.max(0.0).cbrt())],
        _ => {
            let step = (a_max - a_min) / (points - 1) as f64;
            (0..points)
                .map(|i| {
                    let a = if i == points - 1 {
                        a_max
                    } else {
                        a_min + step * i as f64
                    };
                    (a, r0_fm * a.max(0.0).cbrt())
                })
                .collect()
        }
    }
}
