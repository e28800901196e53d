// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Batch Analysis
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Analyse a list of isotopes, skipping the ones that fail.

use crate::calculator::NuclideCalculator;
use crate::catalogue::Isotope;
use crate::report::NuclideReport;
use serde::Serialize;
use tracing::{info, warn};

/// Isotope that could not be analysed.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedIsotope {
    pub name: String,
    pub error: String,
}

#[derive(Debug, Default, Serialize)]
pub struct BatchOutcome {
    pub reports: Vec<NuclideReport>,
    pub skipped: Vec<SkippedIsotope>,
}

impl BatchOutcome {
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Analyse every isotope in order. One failure does not stop the rest.
pub fn analyze_all(calculator: &NuclideCalculator, isotopes: &[Isotope]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    for iso in isotopes {
        match calculator.analyze_named(iso.name, iso.z, iso.a) {
            Ok(report) => outcome.reports.push(report),
            Err(e) => {
                warn!(isotope = iso.name, error = %e, "skipping isotope");
                outcome.skipped.push(SkippedIsotope {
                    name: iso.name.to_string(),
                    error: e.to_string(),
                });
            }
        }
    }
    info!(
        analysed = outcome.reports.len(),
        skipped = outcome.skipped.len(),
        "batch analysis finished"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::PREDEFINED_ISOTOPES;
    use crate::stability::BetaStability;

    #[test]
    fn test_predefined_all_succeed() {
        let outcome = analyze_all(&NuclideCalculator::default(), &PREDEFINED_ISOTOPES);
        assert_eq!(outcome.reports.len(), 11);
        assert!(outcome.skipped.is_empty());
        let names: Vec<_> = outcome
            .reports
            .iter()
            .map(|r| r.name.as_deref().unwrap())
            .collect();
        assert_eq!(names[0], "U-238");
        assert_eq!(names[10], "Cr-52");
    }

    #[test]
    fn test_predefined_beta_verdicts() {
        let outcome = analyze_all(&NuclideCalculator::default(), &PREDEFINED_ISOTOPES);
        let beta_of = |name: &str| {
            *outcome
                .reports
                .iter()
                .find(|r| r.name.as_deref() == Some(name))
                .and_then(|r| r.beta.outcome())
                .unwrap()
        };
        assert_eq!(beta_of("Te-135"), BetaStability::UnstableBetaMinus);
        assert_eq!(beta_of("P-29"), BetaStability::UnstableBetaPlus);
        assert_eq!(beta_of("Ni-60"), BetaStability::Stable);
    }

    #[test]
    fn test_invalid_entry_skipped() {
        let isotopes = [
            Isotope::new("bogus", 12, 6),
            Isotope::new("O-16", 8, 16),
        ];
        let outcome = analyze_all(&NuclideCalculator::default(), &isotopes);
        assert_eq!(outcome.reports.len(), 1);
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].name, "bogus");
        assert!(outcome.skipped[0].error.contains("Invalid input"));
    }

    #[test]
    fn test_empty_list() {
        let outcome = analyze_all(&NuclideCalculator::default(), &[]);
        assert!(outcome.is_empty());
    }
}
