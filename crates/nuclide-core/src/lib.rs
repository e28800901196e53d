// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Nuclide Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Liquid-drop model of the nucleus.
//!
//! Binding energy, mass, radius, beta stability and fission parity for
//! a (Z, A) pair, plus the report, batch and plot-series layers built on top.

pub mod batch;
pub mod binding;
pub mod calculator;
pub mod catalogue;
pub mod fission;
pub mod mass;
pub mod radius;
pub mod report;
pub mod series;
pub mod stability;
pub mod verdict;

pub use calculator::NuclideCalculator;
pub use fission::FissionFeasibility;
pub use report::NuclideReport;
pub use stability::BetaStability;
pub use verdict::Verdict;
