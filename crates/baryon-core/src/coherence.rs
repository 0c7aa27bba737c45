// ─────────────────────────────────────────────────────────────────────
// Omnisyndetic Baryon Calculator — Coherence
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Deviation, curvature, coherence and coupling.
//!
//! Angular deviation ε and radial deviation R_dev combine into the curvature
//! κ = ε² + R_dev²; coherence is C = exp(−κ) and torsion δ = √(1 − C).

use baryon_types::config::GeometricConstants;
use baryon_types::constants::DENOMINATOR_FLOOR;
use baryon_types::state::{DerivedState, InputState};

/// ε = |Σφ − φ₀| / φ₀
pub fn angular_deviation(sum_phi: f64, constants: &GeometricConstants) -> f64 {
    (sum_phi - constants.phi_0).abs() / constants.phi_0
}

/// R_dev = (λ − λ₀) / λ₀, signed.
pub fn radial_deviation(lambda: f64, constants: &GeometricConstants) -> f64 {
    (lambda - constants.lambda_0) / constants.lambda_0
}

/// δ = √(1 − C), clamped at zero against rounding above C = 1.
pub fn torsion(coherence: f64) -> f64 {
    (1.0 - coherence).max(0.0).sqrt()
}

/// α = (ε² + δ²) / (ε² + δ² + λ²), zero when the denominator vanishes.
pub fn coupling(epsilon: f64, torsion: f64, lambda: f64) -> f64 {
    let numerator = epsilon * epsilon + torsion * torsion;
    let denominator = numerator + lambda * lambda;
    if denominator < DENOMINATOR_FLOOR {
        0.0
    } else {
        numerator / denominator
    }
}

/// −ln C, with C floored at the smallest positive normal so the log stays finite
/// after exp(−κ) underflows.
pub fn kappa_log(coherence: f64) -> f64 {
    -coherence.max(f64::MIN_POSITIVE).ln()
}

/// Compute every derived scalar for one input.
pub fn derive_state(input: &InputState, constants: &GeometricConstants) -> DerivedState {
    let epsilon = angular_deviation(input.sum_phi, constants);
    let radial_deviation = radial_deviation(input.lambda, constants);
    let kappa = epsilon * epsilon + radial_deviation * radial_deviation;
    let coherence = (-kappa).exp();
    let torsion = torsion(coherence);
    let coupling = coupling(epsilon, torsion, input.lambda);

    DerivedState {
        epsilon,
        radial_deviation,
        kappa,
        coherence,
        torsion,
        coupling,
    }
}
