// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Nuclide
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Raw numeric input and the validated (Z, A) descriptor.

use crate::error::{NuclideError, NuclideResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value handed to the validator before coercion to an integer count.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    Integer(i64),
    Real(f64),
    /// Anything that is not a number. Always rejected by the validator.
    Text(String),
}

impl NumericInput {
    /// Interpret a user-typed token: integers first, then reals,
    /// otherwise keep the trimmed text.
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim();
        if let Ok(i) = token.parse::<i64>() {
            NumericInput::Integer(i)
        } else if let Ok(x) = token.parse::<f64>() {
            NumericInput::Real(x)
        } else {
            NumericInput::Text(token.to_string())
        }
    }

    /// Explicit coercion to an integer. Reals must be finite and integral.
    fn coerce(&self, label: &str) -> NuclideResult<i64> {
        match self {
            NumericInput::Integer(i) => Ok(*i),
            NumericInput::Real(x) => {
                if !x.is_finite() {
                    return Err(NuclideError::invalid(format!(
                        "{label} must be a finite number, got {x}"
                    )));
                }
                if x.fract() != 0.0 {
                    return Err(NuclideError::invalid(format!(
                        "{label} must be a whole number, got {x}"
                    )));
                }
                if x.abs() > i64::MAX as f64 {
                    return Err(NuclideError::invalid(format!(
                        "{label} is out of range: {x}"
                    )));
                }
                Ok(*x as i64)
            }
            NumericInput::Text(_) => Err(NuclideError::invalid("Z and A must be numbers")),
        }
    }
}

macro_rules! numeric_input_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericInput {
                fn from(v: $t) -> Self {
                    NumericInput::Integer(i64::from(v))
                }
            }
        )*
    };
}

numeric_input_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for NumericInput {
    fn from(v: u64) -> Self {
        i64::try_from(v)
            .map(NumericInput::Integer)
            .unwrap_or(NumericInput::Real(v as f64))
    }
}

impl From<usize> for NumericInput {
    fn from(v: usize) -> Self {
        NumericInput::from(v as u64)
    }
}

impl From<f64> for NumericInput {
    fn from(v: f64) -> Self {
        NumericInput::Real(v)
    }
}

impl From<f32> for NumericInput {
    fn from(v: f32) -> Self {
        NumericInput::Real(f64::from(v))
    }
}

impl From<&str> for NumericInput {
    fn from(v: &str) -> Self {
        NumericInput::Text(v.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(v: String) -> Self {
        NumericInput::Text(v)
    }
}

/// Parity class of (Z, N), which selects the sign of the pairing term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Parity {
    EvenEven,
    OddOdd,
    /// One of Z, N odd: odd mass number.
    OddMass,
}

/// A validated nucleus: 0 <= Z <= A, and A = 0 only with Z = 0.
/// Only constructed through [`Nuclide::new`], so it is not `Deserialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Nuclide {
    z: u32,
    a: u32,
}

impl Nuclide {
    /// Coerce and validate a (Z, A) pair.
    pub fn new(z: impl Into<NumericInput>, a: impl Into<NumericInput>) -> NuclideResult<Self> {
        let z_in = z.into();
        let a_in = a.into();
        if matches!(z_in, NumericInput::Text(_)) || matches!(a_in, NumericInput::Text(_)) {
            return Err(NuclideError::invalid("Z and A must be numbers"));
        }

        let z = z_in.coerce("Z")?;
        let a = a_in.coerce("A")?;

        if z < 0 {
            return Err(NuclideError::invalid(format!(
                "Z (atomic number) cannot be negative, got {z}"
            )));
        }
        if a < 0 {
            return Err(NuclideError::invalid(format!(
                "A (mass number) cannot be negative, got {a}"
            )));
        }
        if z > a {
            return Err(NuclideError::invalid(format!(
                "Z cannot be greater than A (Z={z}, A={a})"
            )));
        }
        if a == 0 && z != 0 {
            return Err(NuclideError::invalid("Z must be 0 when A is 0"));
        }

        let a = u32::try_from(a)
            .map_err(|_| NuclideError::invalid(format!("A is out of range: {a}")))?;
        // z <= a, so this cannot fail once a fits.
        let z = z as u32;
        Ok(Nuclide { z, a })
    }

    /// Proton count.
    pub fn z(&self) -> u32 {
        self.z
    }

    /// Mass number.
    pub fn a(&self) -> u32 {
        self.a
    }

    /// Neutron count.
    pub fn n(&self) -> u32 {
        self.a - self.z
    }

    /// A = 0: no nucleons at all.
    pub fn is_empty(&self) -> bool {
        self.a == 0
    }

    pub fn parity(&self) -> Parity {
        match (self.z % 2, self.n() % 2) {
            (0, 0) => Parity::EvenEven,
            (1, 1) => Parity::OddOdd,
            _ => Parity::OddMass,
        }
    }

    /// Isobar with one more proton, if it still satisfies Z <= A.
    pub fn proton_neighbour(&self) -> Option<Nuclide> {
        (self.z < self.a).then(|| Nuclide {
            z: self.z + 1,
            a: self.a,
        })
    }

    /// Isobar with one fewer proton, if Z >= 1.
    pub fn neutron_neighbour(&self) -> Option<Nuclide> {
        (self.z > 0).then(|| Nuclide {
            z: self.z - 1,
            a: self.a,
        })
    }
}

impl fmt::Display for Nuclide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z={}, A={}", self.z, self.a)
    }
}
