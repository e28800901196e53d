// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Beta Stability
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Beta-decay stability from isobar mass comparison.
//!
//! The nucleus (Z, A) is compared against (Z+1, A) and (Z−1, A).
//! A neighbour that would break 0 <= Z <= A is unreachable and treated
//! as infinitely heavy. Beta-minus is checked first.

use crate::mass::atomic_mass;
use nuclide_types::config::AnalyzerConfig;
use nuclide_types::error::NuclideResult;
use nuclide_types::nuclide::Nuclide;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetaStability {
    Stable,
    /// n → p e⁻ ν̄ lowers the mass: (Z, A) → (Z+1, A).
    UnstableBetaMinus,
    /// p → n e⁺ ν lowers the mass: (Z, A) → (Z−1, A).
    UnstableBetaPlus,
    /// A = 0: nothing to classify.
    Undetermined,
}

impl fmt::Display for BetaStability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BetaStability::Stable => "Stable",
            BetaStability::UnstableBetaMinus => "Unstable (beta-minus)",
            BetaStability::UnstableBetaPlus => "Unstable (beta-plus)",
            BetaStability::Undetermined => "Cannot be determined",
        };
        f.write_str(text)
    }
}

fn neighbour_mass(neighbour: Option<Nuclide>, config: &AnalyzerConfig) -> NuclideResult<f64> {
    match neighbour {
        Some(n) => atomic_mass(&n, config),
        None => Ok(f64::INFINITY),
    }
}

/// Classify a validated nucleus.
pub fn classify_beta(nuclide: &Nuclide, config: &AnalyzerConfig) -> NuclideResult<BetaStability> {
    if nuclide.is_empty() {
        return Ok(BetaStability::Undetermined);
    }
    let m = atomic_mass(nuclide, config)?;
    let m_plus = neighbour_mass(nuclide.proton_neighbour(), config)?;
    let m_minus = neighbour_mass(nuclide.neutron_neighbour(), config)?;

    let beta_minus = m_plus.is_finite() && m > m_plus;
    let beta_plus = m_minus.is_finite() && m > m_minus;

    Ok(if beta_minus {
        BetaStability::UnstableBetaMinus
    } else if beta_plus {
        BetaStability::UnstableBetaPlus
    } else {
        BetaStability::Stable
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beta(z: u32, a: u32) -> BetaStability {
        classify_beta(&Nuclide::new(z, a).unwrap(), &AnalyzerConfig::default()).unwrap()
    }

    #[test]
    fn test_empty_is_undetermined() {
        assert_eq!(beta(0, 0), BetaStability::Undetermined);
    }

    #[test]
    fn test_valley_of_stability() {
        assert_eq!(beta(6, 12), BetaStability::Stable);
        assert_eq!(beta(8, 16), BetaStability::Stable);
        assert_eq!(beta(26, 56), BetaStability::Stable);
        assert_eq!(beta(92, 238), BetaStability::Stable);
    }

    #[test]
    fn test_neutron_rich_decays_beta_minus() {
        assert_eq!(beta(52, 135), BetaStability::UnstableBetaMinus);
        assert_eq!(beta(81, 208), BetaStability::UnstableBetaMinus);
        assert_eq!(beta(0, 12), BetaStability::UnstableBetaMinus);
    }

    #[test]
    fn test_proton_rich_decays_beta_plus() {
        assert_eq!(beta(15, 29), BetaStability::UnstableBetaPlus);
        assert_eq!(beta(12, 12), BetaStability::UnstableBetaPlus);
    }

    #[test]
    fn test_free_neutron_and_proton() {
        // Z−1 is unreachable for the neutron, Z+1 for the proton.
        assert_eq!(beta(0, 1), BetaStability::UnstableBetaMinus);
        assert_eq!(beta(1, 1), BetaStability::Stable);
    }

    #[test]
    fn test_beta_minus_checked_first() {
        // Only volume, surface and pairing left, equal nucleon masses.
        let mut cfg = AnalyzerConfig::default();
        cfg.coefficients.asymmetry = 0.0;
        cfg.coefficients.pairing = 0.0;
        cfg.coefficients.coulomb = 0.0;
        cfg.masses.proton = 1.0;
        cfg.masses.neutron = 1.0;
        // Flat mass surface: nothing is strictly lighter.
        let n = Nuclide::new(5, 11).unwrap();
        assert_eq!(classify_beta(&n, &cfg).unwrap(), BetaStability::Stable);

        // Pairing penalty on an odd-odd nucleus makes both even-even
        // isobars lighter; beta-minus wins the tie-break.
        cfg.coefficients.pairing = 34.0;
        let odd_odd = Nuclide::new(5, 10).unwrap();
        assert_eq!(
            classify_beta(&odd_odd, &cfg).unwrap(),
            BetaStability::UnstableBetaMinus
        );
    }

    #[test]
    fn test_display_text() {
        assert_eq!(BetaStability::Stable.to_string(), "Stable");
        assert_eq!(
            BetaStability::UnstableBetaMinus.to_string(),
            "Unstable (beta-minus)"
        );
        assert_eq!(BetaStability::Undetermined.to_string(), "Cannot be determined");
    }
}
