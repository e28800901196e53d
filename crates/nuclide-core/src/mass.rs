// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Atomic Mass
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Atomic mass from the binding-energy defect.
//!
//! M = Z·m_p + (A−Z)·m_n − B / (931.49 MeV/u), clamped to >= 0.

use crate::binding::{binding_energy, ensure_finite};
use nuclide_types::config::AnalyzerConfig;
use nuclide_types::error::NuclideResult;
use nuclide_types::nuclide::Nuclide;

/// Atomic mass [u]. A = 0 gives 0 without evaluating the formula.
pub fn atomic_mass(nuclide: &Nuclide, config: &AnalyzerConfig) -> NuclideResult<f64> {
    if nuclide.is_empty() {
        return Ok(0.0);
    }
    let b = binding_energy(nuclide, &config.coefficients)?;
    let free = nuclide.z() as f64 * config.masses.proton + nuclide.n() as f64 * config.masses.neutron;
    let m = ensure_finite(free - b / config.mev_per_amu, nuclide, "atomic mass")?;
    Ok(m.max(0.0))
}
