// ─────────────────────────────────────────────────────────────────────
// Nuclide Analyzer — Isotope Catalogue
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed list of isotopes analysed by the batch mode.

/// Named (Z, A) entry. Not validated until analysed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Isotope {
    pub name: &'static str,
    pub z: u32,
    pub a: u32,
}

impl Isotope {
    pub const fn new(name: &'static str, z: u32, a: u32) -> Self {
        Isotope { name, z, a }
    }
}

/// Actinides, a fission fragment, and light/medium reference nuclei.
pub const PREDEFINED_ISOTOPES: [Isotope; 11] = [
    Isotope::new("U-238", 92, 238),
    Isotope::new("Pu-239", 94, 239),
    Isotope::new("Cf-252", 98, 252),
    Isotope::new("Pu-238", 94, 238),
    Isotope::new("Te-135", 52, 135),
    Isotope::new("Ni-60", 28, 60),
    Isotope::new("O-16", 8, 16),
    Isotope::new("N-15", 7, 15),
    Isotope::new("P-29", 15, 29),
    Isotope::new("Si-29", 14, 29),
    Isotope::new("Cr-52", 24, 52),
];

/// Look up a predefined isotope by label, ignoring ASCII case.
pub fn find(name: &str) -> Option<Isotope> {
    PREDEFINED_ISOTOPES
        .iter()
        .copied()
        .find(|iso| iso.name.eq_ignore_ascii_case(name))
}
