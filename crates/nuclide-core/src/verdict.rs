// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Verdict
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Outcome of a classifier that must always produce something displayable.
//!
//! Failures are captured, not propagated; text is produced only by `Display`.

use nuclide_types::error::{NuclideError, NuclideResult};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

#[derive(Debug)]
pub enum Verdict<T> {
    Determined(T),
    Failed(NuclideError),
}

impl<T> Verdict<T> {
    pub fn outcome(&self) -> Option<&T> {
        match self {
            Verdict::Determined(value) => Some(value),
            Verdict::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&NuclideError> {
        match self {
            Verdict::Determined(_) => None,
            Verdict::Failed(err) => Some(err),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Verdict::Failed(_))
    }

    pub fn into_result(self) -> NuclideResult<T> {
        match self {
            Verdict::Determined(value) => Ok(value),
            Verdict::Failed(err) => Err(err),
        }
    }
}

impl<T> From<NuclideResult<T>> for Verdict<T> {
    fn from(result: NuclideResult<T>) -> Self {
        match result {
            Ok(value) => Verdict::Determined(value),
            Err(err) => Verdict::Failed(err),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Verdict<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Determined(value) => write!(f, "{value}"),
            Verdict::Failed(err) => write!(f, "Error: {err}"),
        }
    }
}

/// Serializes as `{"determined": <value>}` or `{"failed": "<message>"}`.
impl<T: Serialize> Serialize for Verdict<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Verdict::Determined(value) => map.serialize_entry("determined", value)?,
            Verdict::Failed(err) => map.serialize_entry("failed", &err.to_string())?,
        }
        map.end()
    }
}
