// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NuclideError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Computation error for Z={z}, A={a}: {reason}")]
    Computation { z: u32, a: u32, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No data to build plot series from")]
    NoData,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NuclideError {
    /// Shorthand for a validator rejection.
    pub fn invalid(reason: impl Into<String>) -> Self {
        NuclideError::InvalidInput(reason.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, NuclideError::InvalidInput(_))
    }
}

pub type NuclideResult<T> = Result<T, NuclideError>;
