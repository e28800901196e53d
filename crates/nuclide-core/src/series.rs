// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Plot Series
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Data behind the three summary plots.
//!
//! Rendering is left to external tools; this module only builds the
//! labelled points and the theoretical radius curve, and writes JSON.

use crate::radius::radius_curve;
use crate::report::NuclideReport;
use nuclide_types::error::{NuclideError, NuclideResult};
use serde::Serialize;

/// Samples in the theoretical R(A) overlay.
pub const THEORY_POINTS: usize = 100;

#[derive(Debug, Clone, Serialize)]
pub struct LabelledPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<LabelledPoint>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurveSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlotSeries {
    pub radius_vs_a: ScatterSeries,
    /// R = r0·A^(1/3) over the plotted A range.
    pub radius_theory: CurveSeries,
    pub specific_energy_vs_a: ScatterSeries,
    pub specific_energy_vs_z: ScatterSeries,
}

fn scatter(
    title: &str,
    x_label: &str,
    y_label: &str,
    reports: &[NuclideReport],
    xy: impl Fn(&NuclideReport) -> (f64, f64),
) -> ScatterSeries {
    let points = reports
        .iter()
        .map(|r| {
            let (x, y) = xy(r);
            LabelledPoint {
                label: r.name.clone().unwrap_or_else(|| r.nuclide.to_string()),
                x,
                y,
            }
        })
        .collect();
    ScatterSeries {
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        points,
    }
}

impl PlotSeries {
    /// Build all series from analysed reports. Empty input is an error.
    pub fn from_reports(reports: &[NuclideReport], r0_fm: f64) -> NuclideResult<Self> {
        if reports.is_empty() {
            return Err(NuclideError::NoData);
        }
        let a_of = |r: &NuclideReport| r.nuclide.a() as f64;
        let a_min = reports.iter().map(a_of).fold(f64::INFINITY, f64::min);
        let a_max = reports.iter().map(a_of).fold(f64::NEG_INFINITY, f64::max);

        Ok(PlotSeries {
            radius_vs_a: scatter(
                "Nuclear radius",
                "Mass number A",
                "Radius (fm)",
                reports,
                |r| (a_of(r), r.radius),
            ),
            radius_theory: CurveSeries {
                label: format!("R = {r0_fm} × A^(1/3)"),
                points: radius_curve(r0_fm, a_min, a_max, THEORY_POINTS),
            },
            specific_energy_vs_a: scatter(
                "Specific binding energy",
                "Mass number A",
                "Specific binding energy (MeV/nucleon)",
                reports,
                |r| (a_of(r), r.specific_energy),
            ),
            specific_energy_vs_z: scatter(
                "Specific binding energy vs Z",
                "Atomic number Z",
                "Specific binding energy (MeV/nucleon)",
                reports,
                |r| (r.nuclide.z() as f64, r.specific_energy),
            ),
        })
    }

    pub fn to_json(&self) -> NuclideResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &str) -> NuclideResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
