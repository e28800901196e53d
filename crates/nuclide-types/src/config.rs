// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::*;
use crate::error::{NuclideError, NuclideResult};
use serde::{Deserialize, Serialize};

/// Complete constant table for the calculator.
/// Every field is optional in JSON; missing fields take the textbook defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub coefficients: SemfCoefficients,
    #[serde(default)]
    pub masses: ParticleMasses,
    /// Radius parameter r0 [fm].
    #[serde(default = "default_r0")]
    pub r0_fm: f64,
    /// Mass-energy conversion [MeV/u].
    #[serde(default = "default_mev_per_amu")]
    pub mev_per_amu: f64,
}

/// Bethe–Weizsäcker coefficients a1..a5 [MeV].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SemfCoefficients {
    #[serde(default = "default_volume")]
    pub volume: f64,
    #[serde(default = "default_surface")]
    pub surface: f64,
    #[serde(default = "default_coulomb")]
    pub coulomb: f64,
    #[serde(default = "default_asymmetry")]
    pub asymmetry: f64,
    #[serde(default = "default_pairing")]
    pub pairing: f64,
}

/// Free-particle masses [u].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleMasses {
    #[serde(default = "default_proton")]
    pub proton: f64,
    #[serde(default = "default_neutron")]
    pub neutron: f64,
    #[serde(default = "default_electron")]
    pub electron: f64,
}

fn default_volume() -> f64 {
    A_VOLUME
}
fn default_surface() -> f64 {
    A_SURFACE
}
fn default_coulomb() -> f64 {
    A_COULOMB
}
fn default_asymmetry() -> f64 {
    A_ASYMMETRY
}
fn default_pairing() -> f64 {
    A_PAIRING
}
fn default_proton() -> f64 {
    M_PROTON_U
}
fn default_neutron() -> f64 {
    M_NEUTRON_U
}
fn default_electron() -> f64 {
    M_ELECTRON_U
}
fn default_r0() -> f64 {
    R0_FM
}
fn default_mev_per_amu() -> f64 {
    MEV_PER_AMU
}

impl Default for SemfCoefficients {
    fn default() -> Self {
        SemfCoefficients {
            volume: default_volume(),
            surface: default_surface(),
            coulomb: default_coulomb(),
            asymmetry: default_asymmetry(),
            pairing: default_pairing(),
        }
    }
}

impl Default for ParticleMasses {
    fn default() -> Self {
        ParticleMasses {
            proton: default_proton(),
            neutron: default_neutron(),
            electron: default_electron(),
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            coefficients: SemfCoefficients::default(),
            masses: ParticleMasses::default(),
            r0_fm: default_r0(),
            mev_per_amu: default_mev_per_amu(),
        }
    }
}

impl AnalyzerConfig {
    /// Load from JSON file and validate.
    pub fn from_file(path: &str) -> NuclideResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parse from a JSON string and validate.
    pub fn from_json_str(json: &str) -> NuclideResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tables the formulas cannot use.
    ///
    /// Coefficients must be finite and non-negative; masses, r0 and the
    /// MeV/u conversion must be finite and strictly positive.
    pub fn validate(&self) -> NuclideResult<()> {
        let c = &self.coefficients;
        let coefficients = [
            ("volume", c.volume),
            ("surface", c.surface),
            ("coulomb", c.coulomb),
            ("asymmetry", c.asymmetry),
            ("pairing", c.pairing),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() || value < 0.0 {
                return Err(NuclideError::ConfigError(format!(
                    "coefficient '{name}' must be finite and >= 0, got {value}"
                )));
            }
        }

        let positive = [
            ("masses.proton", self.masses.proton),
            ("masses.neutron", self.masses.neutron),
            ("r0_fm", self.r0_fm),
            ("mev_per_amu", self.mev_per_amu),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(NuclideError::ConfigError(format!(
                    "'{name}' must be finite and > 0, got {value}"
                )));
            }
        }

        if !self.masses.electron.is_finite() || self.masses.electron < 0.0 {
            return Err(NuclideError::ConfigError(format!(
                "'masses.electron' must be finite and >= 0, got {}",
                self.masses.electron
            )));
        }
        Ok(())
    }
}
