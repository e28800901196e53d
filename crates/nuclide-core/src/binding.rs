// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Binding Energy
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Semi-empirical (Bethe–Weizsäcker) binding energy.
//!
//! B = a1·A − a2·A^(2/3) − a3·Z²/A^(1/3) − a4·(A−2Z)²/A + δ
//!
//! δ = +a5·A^(−3/4) for even-even, −a5·A^(−3/4) for odd-odd, 0 for odd A.
//! The result is not clamped: light or neutron-only systems come out
//! negative, and the mass and per-nucleon quantities use that value as is.

use nuclide_types::config::SemfCoefficients;
use nuclide_types::error::{NuclideError, NuclideResult};
use nuclide_types::nuclide::{Nuclide, Parity};

/// Reject a non-finite intermediate, tagging it with the nucleus.
pub(crate) fn ensure_finite(value: f64, nuclide: &Nuclide, term: &str) -> NuclideResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NuclideError::Computation {
            z: nuclide.z(),
            a: nuclide.a(),
            reason: format!("{term} evaluated to {value}"),
        })
    }
}

/// Pairing term δ [MeV].
pub fn pairing_term(nuclide: &Nuclide, coefficients: &SemfCoefficients) -> f64 {
    if nuclide.is_empty() {
        return 0.0;
    }
    let delta = coefficients.pairing * (nuclide.a() as f64).powf(-0.75);
    match nuclide.parity() {
        Parity::EvenEven => delta,
        Parity::OddOdd => -delta,
        Parity::OddMass => 0.0,
    }
}

/// Total binding energy [MeV]. A = 0 gives 0.
pub fn binding_energy(nuclide: &Nuclide, coefficients: &SemfCoefficients) -> NuclideResult<f64> {
    if nuclide.is_empty() {
        return Ok(0.0);
    }
    let a = nuclide.a() as f64;
    let z = nuclide.z() as f64;

    let volume = coefficients.volume * a;
    let surface = coefficients.surface * a.powf(2.0 / 3.0);
    let coulomb = coefficients.coulomb * z * z / a.powf(1.0 / 3.0);
    let asymmetry = coefficients.asymmetry * (a - 2.0 * z).powi(2) / a;
    let pairing = pairing_term(nuclide, coefficients);

    let b = volume - surface - ensure_finite(coulomb, nuclide, "Coulomb term")?
        - ensure_finite(asymmetry, nuclide, "asymmetry term")?
        + pairing;
    ensure_finite(b, nuclide, "binding energy")
}

/// Binding energy per nucleon [MeV]. Zero when A = 0 or B = 0.
pub fn specific_energy(nuclide: &Nuclide, coefficients: &SemfCoefficients) -> NuclideResult<f64> {
    if nuclide.is_empty() {
        return Ok(0.0);
    }
    let b = binding_energy(nuclide, coefficients)?;
    if b == 0.0 {
        return Ok(0.0);
    }
    Ok(b / nuclide.a() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nuc(z: u32, a: u32) -> Nuclide {
        Nuclide::new(z, a).unwrap()
    }

    fn coeffs() -> SemfCoefficients {
        SemfCoefficients::default()
    }

    #[test]
    fn test_empty_nucleus_is_zero() {
        assert_eq!(binding_energy(&nuc(0, 0), &coeffs()).unwrap(), 0.0);
        assert_eq!(specific_energy(&nuc(0, 0), &coeffs()).unwrap(), 0.0);
        assert_eq!(pairing_term(&nuc(0, 0), &coeffs()), 0.0);
    }

    #[test]
    fn test_carbon12() {
        let b = binding_energy(&nuc(6, 12), &coeffs()).unwrap();
        assert!((b - 91.8314).abs() < 1e-3, "C-12 B = {b}");
    }

    #[test]
    fn test_iron56_per_nucleon() {
        let ba = specific_energy(&nuc(26, 56), &coeffs()).unwrap();
        assert!((ba - 8.8472).abs() < 1e-3, "Fe-56 B/A = {ba}");
    }

    #[test]
    fn test_uranium238() {
        let b = binding_energy(&nuc(92, 238), &coeffs()).unwrap();
        assert!((b - 1813.90).abs() < 0.01, "U-238 B = {b}");
    }

    #[test]
    fn test_pairing_sign() {
        let c = coeffs();
        assert!(pairing_term(&nuc(82, 208), &c) > 0.0);
        assert!(pairing_term(&nuc(81, 208), &c) < 0.0);
        assert_eq!(pairing_term(&nuc(92, 235), &c), 0.0);

        let expected = 34.0 * 208f64.powf(-0.75);
        assert!((pairing_term(&nuc(82, 208), &c) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_even_even_beats_odd_odd_heavy() {
        let c = coeffs();
        let b_ee = binding_energy(&nuc(82, 208), &c).unwrap();
        let b_oo = binding_energy(&nuc(81, 208), &c).unwrap();
        assert!(b_ee > b_oo, "Pb-208 {b_ee} should exceed Tl-208 {b_oo}");
    }

    #[test]
    fn test_free_proton_negative() {
        // Surface and Coulomb terms dominate for a single nucleon.
        let b = binding_energy(&nuc(1, 1), &coeffs()).unwrap();
        assert!((b + 25.91).abs() < 1e-9, "H-1 B = {b}");
        let ba = specific_energy(&nuc(1, 1), &coeffs()).unwrap();
        assert!((ba - b).abs() < 1e-12);
    }

    #[test]
    fn test_specific_energy_identity() {
        let c = coeffs();
        for &(z, a) in &[(8u32, 16u32), (26, 56), (92, 238), (0, 12)] {
            let n = nuc(z, a);
            let b = binding_energy(&n, &c).unwrap();
            let ba = specific_energy(&n, &c).unwrap();
            assert!((ba - b / a as f64).abs() < 1e-12, "({z},{a})");
        }
    }

    #[test]
    fn test_non_finite_coefficient_is_computation_error() {
        let mut c = coeffs();
        c.coulomb = f64::INFINITY;
        let err = binding_energy(&nuc(26, 56), &c).unwrap_err();
        match err {
            NuclideError::Computation { z, a, reason } => {
                assert_eq!((z, a), (26, 56));
                assert!(reason.contains("Coulomb"), "{reason}");
            }
            other => panic!("expected Computation, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_coefficients_give_zero_energy() {
        let zero = SemfCoefficients {
            volume: 0.0,
            surface: 0.0,
            coulomb: 0.0,
            asymmetry: 0.0,
            pairing: 0.0,
        };
        assert_eq!(binding_energy(&nuc(26, 56), &zero).unwrap(), 0.0);
        assert_eq!(specific_energy(&nuc(26, 56), &zero).unwrap(), 0.0);
    }
}
