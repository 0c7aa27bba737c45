// ─────────────────────────────────────────────────────────────────────
// Omnisyndetic Baryon Calculator — Reference Baryons
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Measured baryon masses used as fit targets (PDG 2024).

/// A measured baryon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceBaryon {
    pub symbol: &'static str,
    pub name: &'static str,
    /// [MeV/c²]
    pub mass_mev: f64,
    /// [e]
    pub charge: f64,
}

pub const PROTON: ReferenceBaryon = ReferenceBaryon {
    symbol: "p",
    name: "proton",
    mass_mev: 938.272_088_16,
    charge: 1.0,
};

pub const NEUTRON: ReferenceBaryon = ReferenceBaryon {
    symbol: "n",
    name: "neutron",
    mass_mev: 939.565_420_52,
    charge: 0.0,
};

pub const BARYONS: [ReferenceBaryon; 6] = [
    PROTON,
    NEUTRON,
    ReferenceBaryon {
        symbol: "Lambda0",
        name: "lambda",
        mass_mev: 1115.683,
        charge: 0.0,
    },
    ReferenceBaryon {
        symbol: "Sigma+",
        name: "sigma plus",
        mass_mev: 1189.37,
        charge: 1.0,
    },
    ReferenceBaryon {
        symbol: "Xi0",
        name: "xi zero",
        mass_mev: 1314.86,
        charge: 0.0,
    },
    ReferenceBaryon {
        symbol: "Omega-",
        name: "omega minus",
        mass_mev: 1672.45,
        charge: -1.0,
    },
];

/// Look up a baryon by symbol or name, case-insensitively.
pub fn lookup(key: &str) -> Option<&'static ReferenceBaryon> {
    let key = key.trim();
    BARYONS
        .iter()
        .find(|b| b.symbol.eq_ignore_ascii_case(key) || b.name.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_symbol_and_name() {
        assert_eq!(lookup("p"), Some(&PROTON));
        assert_eq!(lookup(" Neutron "), Some(&NEUTRON));
        assert_eq!(lookup("omega-").map(|b| b.charge), Some(-1.0));
        assert!(lookup("pion").is_none());
    }

    #[test]
    fn test_table_sorted_by_mass() {
        for pair in BARYONS.windows(2) {
            assert!(pair[0].mass_mev < pair[1].mass_mev);
        }
    }
}
