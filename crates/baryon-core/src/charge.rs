// ─────────────────────────────────────────────────────────────────────
// Omnisyndetic Baryon Calculator — Charge
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Emergent charge, charge-cloud radius and divergence scale.

use baryon_types::config::{CloudRadiusModel, GeometricConstants};
use baryon_types::constants::{DENOMINATOR_FLOOR, Q_ELEMENTARY};
use baryon_types::state::{DerivedState, InputState};

use crate::coherence::kappa_log;

/// Emergent charge [e].
///
/// Zero at or above `coherence_max`. Below it:
///   q = sign(Σφ − φ₀) · q₀ · |ε/φ₀| · (κ_log/κ_min) · exp(1 − κ_log)
/// with κ_log = −ln C.
pub fn emergent_charge(
    input: &InputState,
    derived: &DerivedState,
    constants: &GeometricConstants,
) -> f64 {
    if derived.coherence >= constants.coherence_max {
        return 0.0;
    }
    let k_log = kappa_log(derived.coherence);
    let sign = if input.sum_phi - constants.phi_0 >= 0.0 {
        1.0
    } else {
        -1.0
    };
    sign * Q_ELEMENTARY
        * (derived.epsilon / constants.phi_0).abs()
        * (k_log / constants.kappa_min)
        * (1.0 - k_log).exp()
}

/// Charge-cloud radius [fm] under the chosen model.
pub fn charge_cloud_radius(
    model: CloudRadiusModel,
    derived: &DerivedState,
    constants: &GeometricConstants,
) -> f64 {
    let logarithmic = constants.ideal_charge_radius * (1.0 + derived.kappa.ln_1p());
    match model {
        CloudRadiusModel::Logarithmic => logarithmic,
        CloudRadiusModel::HybridMidpoint => {
            let geometric =
                constants.lambda_0 * (1.0 + derived.epsilon + derived.radial_deviation);
            0.5 * (logarithmic + geometric)
        }
    }
}

/// ε⁴ / λ²
pub fn divergence_scale(input: &InputState, derived: &DerivedState) -> f64 {
    let lambda = input.lambda.max(DENOMINATOR_FLOOR);
    derived.epsilon.powi(4) / (lambda * lambda)
}
