// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Property-Based Tests (proptest) for nuclide-core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for nuclide-core using proptest.
//!
//! Covers: non-negativity of mass and radius, radius monotonicity,
//! specific-energy identity, classifier totality, fission parity rules,
//! invalid-input propagation vs capture.

use nuclide_core::{BetaStability, FissionFeasibility, NuclideCalculator};
use proptest::prelude::*;

/// (Z, A) with 0 <= Z <= A and 1 <= A < 300.
fn nucleus() -> impl Strategy<Value = (u32, u32)> {
    (1u32..300).prop_flat_map(|a| (0..=a, Just(a)))
}

// ── Numeric Quantities ───────────────────────────────────────────────

proptest! {
    /// Mass and radius are never negative.
    #[test]
    fn mass_and_radius_non_negative((z, a) in nucleus()) {
        let calc = NuclideCalculator::default();
        prop_assert!(calc.mass(z, a).unwrap() >= 0.0);
        prop_assert!(calc.radius(z, a).unwrap() >= 0.0);
    }

    /// Radius grows strictly with A.
    #[test]
    fn radius_strictly_increasing(a1 in 1u32..300, step in 1u32..300) {
        let calc = NuclideCalculator::default();
        let a2 = a1 + step;
        prop_assert!(calc.radius(0, a2).unwrap() > calc.radius(0, a1).unwrap());
    }

    /// specific_energy == binding_energy / A whenever B != 0.
    #[test]
    fn specific_energy_identity((z, a) in nucleus()) {
        let calc = NuclideCalculator::default();
        let b = calc.binding_energy(z, a).unwrap();
        let ba = calc.specific_energy(z, a).unwrap();
        if b != 0.0 {
            prop_assert!((ba - b / a as f64).abs() < 1e-2);
        } else {
            prop_assert_eq!(ba, 0.0);
        }
    }

    /// Mass stays within a nucleon mass per nucleon of the free-particle sum.
    #[test]
    fn mass_near_free_constituents((z, a) in nucleus()) {
        let calc = NuclideCalculator::default();
        let free = z as f64 * 1.007 + (a - z) as f64 * 1.008;
        let m = calc.mass(z, a).unwrap();
        prop_assert!((m - free).abs() < a as f64, "m={} free={}", m, free);
    }
}

// ── Classifiers ──────────────────────────────────────────────────────

proptest! {
    /// For A > 0 beta stability is always one of the three classifications.
    #[test]
    fn beta_total_for_nonempty((z, a) in nucleus()) {
        let verdict = NuclideCalculator::default().beta_stability(z, a);
        prop_assert!(matches!(
            verdict.outcome(),
            Some(BetaStability::Stable
                | BetaStability::UnstableBetaMinus
                | BetaStability::UnstableBetaPlus)
        ));
    }

    /// Odd A or odd Z never splits symmetrically.
    #[test]
    fn fission_odd_parity((z, a) in nucleus()) {
        let verdict = NuclideCalculator::default().fission_feasibility(z, a);
        let outcome = *verdict.outcome().unwrap();
        if a % 2 == 1 || z % 2 == 1 {
            prop_assert_eq!(outcome, FissionFeasibility::InvalidParity);
        } else if (a / 2) % 2 == 0 && (z / 2) % 2 == 0 {
            prop_assert_eq!(outcome, FissionFeasibility::Possible);
        } else {
            prop_assert_eq!(outcome, FissionFeasibility::OddFragments);
        }
    }

    /// Invalid pairs: numeric ops propagate, classifiers capture.
    #[test]
    fn invalid_input_asymmetry(a in 0i64..300, excess in 1i64..50) {
        let calc = NuclideCalculator::default();
        let z = a + excess;
        prop_assert!(calc.binding_energy(z, a).unwrap_err().is_invalid_input());
        prop_assert!(calc.mass(z, a).is_err());
        prop_assert!(calc.radius(z, a).is_err());
        prop_assert!(calc.specific_energy(z, a).is_err());
        prop_assert!(calc.beta_stability(z, a).is_failed());
        prop_assert!(calc.fission_feasibility(z, a).is_failed());
    }
}
