// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Default liquid-drop coefficients and particle masses.
//!
//! These seed `AnalyzerConfig::default()`; the calculator never reads
//! them directly, so a loaded configuration can override every value.

/// Volume term a1 [MeV].
pub const A_VOLUME: f64 = 15.7;

/// Surface term a2 [MeV].
pub const A_SURFACE: f64 = 17.3;

/// Coulomb term a3 [MeV].
pub const A_COULOMB: f64 = 0.71;

/// Asymmetry term a4 [MeV].
pub const A_ASYMMETRY: f64 = 23.6;

/// Pairing term a5 [MeV]. Scaled by A^(-3/4).
pub const A_PAIRING: f64 = 34.0;

/// Proton mass [u].
pub const M_PROTON_U: f64 = 1.007;

/// Neutron mass [u].
pub const M_NEUTRON_U: f64 = 1.008;

/// Electron mass [u]. Carried in the table, not used by any formula.
pub const M_ELECTRON_U: f64 = 0.0005;

/// Energy equivalent of one atomic mass unit [MeV/u].
pub const MEV_PER_AMU: f64 = 931.49;

/// Nuclear radius parameter r0 [fm] in R = r0·A^(1/3).
pub const R0_FM: f64 = 1.2;
