// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-nucleus summary as shown to the user.

use crate::fission::FissionFeasibility;
use crate::stability::BetaStability;
use crate::verdict::Verdict;
use nuclide_types::nuclide::Nuclide;
use serde::Serialize;
use std::fmt;

/// All derived quantities for one nucleus.
#[derive(Debug, Serialize)]
pub struct NuclideReport {
    /// Isotope label, e.g. "U-238". `None` for ad-hoc input.
    pub name: Option<String>,
    pub nuclide: Nuclide,
    /// Total binding energy [MeV].
    pub binding_energy: f64,
    /// Binding energy per nucleon [MeV].
    pub specific_energy: f64,
    /// Atomic mass [u].
    pub mass: f64,
    /// Nuclear radius [fm].
    pub radius: f64,
    pub beta: Verdict<BetaStability>,
    pub fission: Verdict<FissionFeasibility>,
}

impl fmt::Display for NuclideReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => writeln!(f, "{name} ({}):", self.nuclide)?,
            None => writeln!(f, "Nucleus {}:", self.nuclide)?,
        }
        writeln!(
            f,
            "  Specific binding energy: {:.2} MeV/nucleon",
            self.specific_energy
        )?;
        writeln!(f, "  Atomic mass: {:.4} u", self.mass)?;
        writeln!(f, "  Nuclear radius: {:.2} fm", self.radius)?;
        writeln!(f, "  Beta decay: {}", self.beta)?;
        write!(f, "  Fission: {}", self.fission)
    }
}
