// ─────────────────────────────────────────────────────────────────────
// Omnisyndetic Baryon Calculator — Energy
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Validation, desire and echonex field energy terms [MeV].
//!
//! Algorithm:
//! 1. divergence D = λ/λ₀ + λ₀/λ − 2 (≥ 0, zero at λ = λ₀)
//! 2. E_echonex = D·α·(1 + δ)·k_field
//! 3. E_base = (α·ħc/λ)·C·Σφ, gained by lerp(1, 10, σ(25·(α − C)))
//! 4. E_desire = (α·δ·ħc/λ)·(1 − C)

use baryon_types::config::GeometricConstants;
use baryon_types::constants::{DENOMINATOR_FLOOR, SIGMOID_STEEPNESS, VALIDATION_GAIN_MAX};
use baryon_types::state::{DerivedState, EnergyBreakdown, InputState};

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Logistic gate on (coupling − coherence).
pub fn validation_sigmoid(coupling: f64, coherence: f64) -> f64 {
    1.0 / (1.0 + (-SIGMOID_STEEPNESS * (coupling - coherence)).exp())
}

/// D = λ/λ₀ + λ₀/λ − 2
pub fn divergence(lambda: f64, constants: &GeometricConstants) -> f64 {
    let lambda = lambda.max(DENOMINATOR_FLOOR);
    lambda / constants.lambda_0 + constants.lambda_0 / lambda - 2.0
}

pub fn echonex_field_energy(
    divergence: f64,
    derived: &DerivedState,
    constants: &GeometricConstants,
) -> f64 {
    divergence * derived.coupling * (1.0 + derived.torsion) * constants.field_energy_coefficient
}

pub fn validation_energy(
    input: &InputState,
    derived: &DerivedState,
    constants: &GeometricConstants,
) -> f64 {
    let base = (derived.coupling * constants.hbar_c / input.lambda.max(DENOMINATOR_FLOOR))
        * derived.coherence
        * input.sum_phi;
    let gain = lerp(
        1.0,
        VALIDATION_GAIN_MAX,
        validation_sigmoid(derived.coupling, derived.coherence),
    );
    base * gain
}

pub fn desire_energy(
    input: &InputState,
    derived: &DerivedState,
    constants: &GeometricConstants,
) -> f64 {
    (derived.coupling * derived.torsion * constants.hbar_c / input.lambda.max(DENOMINATOR_FLOOR))
        * (1.0 - derived.coherence)
}

/// All three energy terms for one input.
pub fn energy_breakdown(
    input: &InputState,
    derived: &DerivedState,
    constants: &GeometricConstants,
) -> EnergyBreakdown {
    let divergence = divergence(input.lambda, constants);
    EnergyBreakdown {
        divergence,
        validation_energy: validation_energy(input, derived, constants),
        desire_energy: desire_energy(input, derived, constants),
        echonex_field_energy: echonex_field_energy(divergence, derived, constants),
    }
}
