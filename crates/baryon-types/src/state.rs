// ─────────────────────────────────────────────────────────────────────
// Omnisyndetic Baryon Calculator — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

/// The two user-controlled inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    /// Coherence length λ [fm]. Expected > 0.
    pub lambda: f64,
    /// Angular closure sum Σφ [rad].
    pub sum_phi: f64,
}

impl InputState {
    pub fn new(lambda: f64, sum_phi: f64) -> Self {
        InputState { lambda, sum_phi }
    }

    /// Bitwise equality, so a cached result is reused only for the exact same input.
    pub fn same_bits(&self, other: &InputState) -> bool {
        self.lambda.to_bits() == other.lambda.to_bits()
            && self.sum_phi.to_bits() == other.sum_phi.to_bits()
    }
}

/// Deviation and coherence scalars derived from the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedState {
    /// ε = |Σφ − φ₀| / φ₀
    pub epsilon: f64,
    /// R_dev = (λ − λ₀) / λ₀
    pub radial_deviation: f64,
    /// κ = ε² + R_dev²
    pub kappa: f64,
    /// C = exp(−κ) ∈ (0, 1]
    pub coherence: f64,
    /// δ = √(1 − C) ∈ [0, 1)
    pub torsion: f64,
    /// α = (ε² + δ²) / (ε² + δ² + λ²)
    pub coupling: f64,
}

/// Energy terms [MeV].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyBreakdown {
    /// λ/λ₀ + λ₀/λ − 2, dimensionless and ≥ 0.
    pub divergence: f64,
    pub validation_energy: f64,
    pub desire_energy: f64,
    pub echonex_field_energy: f64,
}

impl EnergyBreakdown {
    pub fn total(&self) -> f64 {
        self.validation_energy + self.desire_energy + self.echonex_field_energy
    }

    /// Energy stored in the field plus validation term; input to the decay fit.
    pub fn memory_energy(&self) -> f64 {
        self.echonex_field_energy + self.validation_energy
    }
}

/// Decay width and lifetime produced by a decay model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayProperties {
    pub decay_width: f64,
    pub lifetime: f64,
}

/// Three-way outcome of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Collapsed,
    Formed,
    FormedTachyonic,
}

impl Classification {
    pub fn is_formed(self) -> bool {
        !matches!(self, Classification::Collapsed)
    }

    pub fn label(self) -> &'static str {
        match self {
            Classification::Collapsed => "COLLAPSED",
            Classification::Formed => "FORMED",
            Classification::FormedTachyonic => "FORMED (tachyonic)",
        }
    }
}

/// Final output of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    /// [MeV], zero when not formed.
    pub total_mass: f64,
    /// [e]
    pub emergent_charge: f64,
    /// [fm]
    pub charge_cloud_radius: f64,
    /// ε⁴ / λ²
    pub divergence_scale: f64,
    pub decay_width: f64,
    pub lifetime: f64,
    pub formed: bool,
    pub is_tachyonic: bool,
}

impl OutcomeRecord {
    pub fn classification(&self) -> Classification {
        match (self.formed, self.is_tachyonic) {
            (false, _) => Classification::Collapsed,
            (true, false) => Classification::Formed,
            (true, true) => Classification::FormedTachyonic,
        }
    }
}

/// Full record of one evaluation including intermediates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub input: InputState,
    pub derived: DerivedState,
    pub energies: EnergyBreakdown,
    pub outcome: OutcomeRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(formed: bool, is_tachyonic: bool) -> OutcomeRecord {
        OutcomeRecord {
            total_mass: 0.0,
            emergent_charge: 0.0,
            charge_cloud_radius: 0.0,
            divergence_scale: 0.0,
            decay_width: 0.0,
            lifetime: 0.0,
            formed,
            is_tachyonic,
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(outcome(false, false).classification(), Classification::Collapsed);
        assert_eq!(outcome(true, false).classification(), Classification::Formed);
        assert_eq!(
            outcome(true, true).classification(),
            Classification::FormedTachyonic
        );
        assert!(!Classification::Collapsed.is_formed());
        assert!(Classification::FormedTachyonic.is_formed());
    }

    #[test]
    fn test_classification_labels() {
        assert_eq!(outcome(false, true).classification().label(), "COLLAPSED");
        assert_eq!(outcome(true, false).classification().label(), "FORMED");
        assert_eq!(
            outcome(true, true).classification().label(),
            "FORMED (tachyonic)"
        );
    }

    #[test]
    fn test_energy_totals() {
        let e = EnergyBreakdown {
            divergence: 0.1,
            validation_energy: 10.0,
            desire_energy: 2.0,
            echonex_field_energy: 30.0,
        };
        assert_eq!(e.total(), 42.0);
        assert_eq!(e.memory_energy(), 40.0);
    }

    #[test]
    fn test_same_bits_distinguishes_signed_zero() {
        let a = InputState::new(0.5, 0.0);
        let b = InputState::new(0.5, -0.0);
        assert_eq!(a, b);
        assert!(!a.same_bits(&b));
        assert!(a.same_bits(&InputState::new(0.5, 0.0)));
    }
}
