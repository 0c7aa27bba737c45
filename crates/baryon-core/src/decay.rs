// ─────────────────────────────────────────────────────────────────────
// Omnisyndetic Baryon Calculator — Decay
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Decay width and lifetime models.
//!
//! The decay fit is provisional and not derived from the coherence core, so it
//! sits behind [`DecayModel`] and can be replaced without touching the
//! evaluator.

use baryon_types::config::GeometricConstants;
use baryon_types::constants::{DECAY_WIDTH_FLOOR, HBAR_MEV_S, MEMORY_ENERGY_FLOOR};
use baryon_types::state::{DecayProperties, DerivedState, EnergyBreakdown};

use crate::coherence::kappa_log;

/// Maps the evaluated state to a decay width and lifetime.
pub trait DecayModel {
    fn decay(
        &self,
        derived: &DerivedState,
        energies: &EnergyBreakdown,
        constants: &GeometricConstants,
    ) -> DecayProperties;
}

/// Provisional fit:
///   Γ = (ħ / max(E_echonex + E_validation, 1e-6)) · exp(−κ_log/κ_max)
///   τ = 1 / max(Γ, 1e-30)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceholderDecay;

impl DecayModel for PlaceholderDecay {
    fn decay(
        &self,
        derived: &DerivedState,
        energies: &EnergyBreakdown,
        constants: &GeometricConstants,
    ) -> DecayProperties {
        let memory_energy = energies.memory_energy().max(MEMORY_ENERGY_FLOOR);
        let suppression = (-kappa_log(derived.coherence) / constants.kappa_max).exp();
        let decay_width = HBAR_MEV_S / memory_energy * suppression;
        DecayProperties {
            decay_width,
            lifetime: 1.0 / decay_width.max(DECAY_WIDTH_FLOOR),
        }
    }
}

/// Treats every state as stable: zero width, lifetime at the floor-limited maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroWidthDecay;

impl DecayModel for ZeroWidthDecay {
    fn decay(
        &self,
        _derived: &DerivedState,
        _energies: &EnergyBreakdown,
        _constants: &GeometricConstants,
    ) -> DecayProperties {
        DecayProperties {
            decay_width: 0.0,
            lifetime: 1.0 / DECAY_WIDTH_FLOOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(coherence: f64) -> DerivedState {
        DerivedState {
            epsilon: 0.0,
            radial_deviation: 0.0,
            kappa: -coherence.ln(),
            coherence,
            torsion: (1.0 - coherence).sqrt(),
            coupling: 0.1,
        }
    }

    fn energies(memory: f64) -> EnergyBreakdown {
        EnergyBreakdown {
            divergence: 0.0,
            validation_energy: memory / 2.0,
            desire_energy: 123.0,
            echonex_field_energy: memory / 2.0,
        }
    }

    #[test]
    fn test_placeholder_unsuppressed_at_full_coherence() {
        let c = GeometricConstants::derive_relational();
        let p = PlaceholderDecay.decay(&state(1.0), &energies(100.0), &c);
        assert!((p.decay_width - HBAR_MEV_S / 100.0).abs() < 1e-36);
        assert!((p.lifetime * p.decay_width - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_placeholder_floors_memory_energy() {
        let c = GeometricConstants::derive_relational();
        let p = PlaceholderDecay.decay(&state(1.0), &energies(0.0), &c);
        assert!((p.decay_width - HBAR_MEV_S / MEMORY_ENERGY_FLOOR).abs() < 1e-25);
        assert!(p.lifetime.is_finite());
    }

    #[test]
    fn test_placeholder_width_falls_with_curvature() {
        let c = GeometricConstants::derive_relational();
        let tight = PlaceholderDecay.decay(&state(0.95), &energies(500.0), &c);
        let loose = PlaceholderDecay.decay(&state(0.5), &energies(500.0), &c);
        assert!(loose.decay_width < tight.decay_width);
        let ratio = loose.decay_width / tight.decay_width;
        let expected = ((0.5f64).ln() - (0.95f64).ln()) / c.kappa_max;
        assert!((ratio.ln() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_width_is_stable() {
        let c = GeometricConstants::derive_relational();
        let p = ZeroWidthDecay.decay(&state(0.9), &energies(10.0), &c);
        assert_eq!(p.decay_width, 0.0);
        assert!((p.lifetime / 1e30 - 1.0).abs() < 1e-12);
    }
}
