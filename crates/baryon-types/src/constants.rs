// ─────────────────────────────────────────────────────────────────────
// Omnisyndetic Baryon Calculator — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::f64::consts::{FRAC_1_SQRT_2, TAU};

/// Ideal angular closure sum Σφ₀ (rad): one full turn.
pub const PHI_0: f64 = TAU;

/// Ideal radial length λ₀ (fm) from the geometric derivation: 1/√2.
pub const LAMBDA_0_DERIVED: f64 = FRAC_1_SQRT_2;

/// Ideal radial length λ₀ (fm) as written in the calibrated constant set.
pub const LAMBDA_0_TRUNCATED: f64 = 0.7071;

/// ħc (MeV·fm) at the precision the calculator was calibrated with.
/// CODATA 2018 gives 197.3269804.
pub const HBAR_C: f64 = 197.33;

/// Reduced Planck constant (MeV·s).
pub const HBAR_MEV_S: f64 = 6.582119569e-22;

/// Speed of light (fm/s).
pub const SPEED_OF_LIGHT_FM_S: f64 = 2.99792458e23;

/// Echonex field energy coefficient (MeV).
pub const FIELD_ENERGY_COEFFICIENT: f64 = 170_400.0;

/// Elementary charge in the units emergent charge is reported in (e).
pub const Q_ELEMENTARY: f64 = 1.0;

/// Elementary charge (C), for converting reported charge to SI.
pub const Q_ELECTRON_C: f64 = 1.602176634e-19;

/// Floor applied to λ and other denominators before division.
pub const DENOMINATOR_FLOOR: f64 = 1e-12;

/// Floor on the memory energy in the placeholder decay fit (MeV).
pub const MEMORY_ENERGY_FLOOR: f64 = 1e-6;

/// Floor on the decay width before inversion to a lifetime.
pub const DECAY_WIDTH_FLOOR: f64 = 1e-30;

/// Steepness of the validation-gain sigmoid in (coupling − coherence).
pub const SIGMOID_STEEPNESS: f64 = 25.0;

/// Upper end of the validation gain lerp (lower end is 1).
pub const VALIDATION_GAIN_MAX: f64 = 10.0;
