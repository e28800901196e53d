// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Calculator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Liquid-drop calculator over raw (Z, A) input.
//!
//! Every operation validates first. Numeric operations propagate
//! `NuclideError`; the two classifiers capture it in a `Verdict`.

use crate::binding;
use crate::fission::{classify_fission, FissionFeasibility};
use crate::mass::atomic_mass;
use crate::radius::nuclear_radius;
use crate::report::NuclideReport;
use crate::stability::{classify_beta, BetaStability};
use crate::verdict::Verdict;
use nuclide_types::config::AnalyzerConfig;
use nuclide_types::error::NuclideResult;
use nuclide_types::nuclide::{Nuclide, NumericInput};
use tracing::debug;

/// Stateless apart from its immutable constant table.
#[derive(Debug, Clone, Default)]
pub struct NuclideCalculator {
    config: AnalyzerConfig,
}

impl NuclideCalculator {
    /// Build with a validated configuration.
    pub fn new(config: AnalyzerConfig) -> NuclideResult<Self> {
        config.validate()?;
        Ok(NuclideCalculator { config })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Coerce and check a (Z, A) pair.
    pub fn validate(
        &self,
        z: impl Into<NumericInput>,
        a: impl Into<NumericInput>,
    ) -> NuclideResult<Nuclide> {
        Nuclide::new(z, a)
    }

    /// Total binding energy [MeV].
    pub fn binding_energy(
        &self,
        z: impl Into<NumericInput>,
        a: impl Into<NumericInput>,
    ) -> NuclideResult<f64> {
        let nuclide = self.validate(z, a)?;
        let b = binding::binding_energy(&nuclide, &self.config.coefficients)?;
        debug!(z = nuclide.z(), a = nuclide.a(), binding_mev = b, "binding energy");
        Ok(b)
    }

    /// Binding energy per nucleon [MeV].
    pub fn specific_energy(
        &self,
        z: impl Into<NumericInput>,
        a: impl Into<NumericInput>,
    ) -> NuclideResult<f64> {
        let nuclide = self.validate(z, a)?;
        binding::specific_energy(&nuclide, &self.config.coefficients)
    }

    /// Atomic mass [u], never negative.
    pub fn mass(&self, z: impl Into<NumericInput>, a: impl Into<NumericInput>) -> NuclideResult<f64> {
        let nuclide = self.validate(z, a)?;
        atomic_mass(&nuclide, &self.config)
    }

    /// Nuclear radius [fm], never negative.
    pub fn radius(
        &self,
        z: impl Into<NumericInput>,
        a: impl Into<NumericInput>,
    ) -> NuclideResult<f64> {
        let nuclide = self.validate(z, a)?;
        nuclear_radius(&nuclide, self.config.r0_fm)
    }

    /// Beta-decay classification. Never fails outward.
    pub fn beta_stability(
        &self,
        z: impl Into<NumericInput>,
        a: impl Into<NumericInput>,
    ) -> Verdict<BetaStability> {
        self.validate(z, a)
            .and_then(|nuclide| classify_beta(&nuclide, &self.config))
            .into()
    }

    /// Symmetric-fission parity classification. Never fails outward.
    pub fn fission_feasibility(
        &self,
        z: impl Into<NumericInput>,
        a: impl Into<NumericInput>,
    ) -> Verdict<FissionFeasibility> {
        self.validate(z, a)
            .map(|nuclide| classify_fission(&nuclide))
            .into()
    }

    /// All derived quantities for one nucleus.
    pub fn analyze(
        &self,
        z: impl Into<NumericInput>,
        a: impl Into<NumericInput>,
    ) -> NuclideResult<NuclideReport> {
        let nuclide = self.validate(z, a)?;
        self.report_for(None, nuclide)
    }

    /// Same as [`analyze`](Self::analyze) with an isotope label.
    pub fn analyze_named(
        &self,
        name: &str,
        z: impl Into<NumericInput>,
        a: impl Into<NumericInput>,
    ) -> NuclideResult<NuclideReport> {
        let nuclide = self.validate(z, a)?;
        self.report_for(Some(name.to_string()), nuclide)
    }

    fn report_for(&self, name: Option<String>, nuclide: Nuclide) -> NuclideResult<NuclideReport> {
        let coefficients = &self.config.coefficients;
        let report = NuclideReport {
            name,
            nuclide,
            binding_energy: binding::binding_energy(&nuclide, coefficients)?,
            specific_energy: binding::specific_energy(&nuclide, coefficients)?,
            mass: atomic_mass(&nuclide, &self.config)?,
            radius: nuclear_radius(&nuclide, self.config.r0_fm)?,
            beta: classify_beta(&nuclide, &self.config).into(),
            fission: Verdict::Determined(classify_fission(&nuclide)),
        };
        debug!(nucleus = %nuclide, "analysis complete");
        Ok(report)
    }
}
