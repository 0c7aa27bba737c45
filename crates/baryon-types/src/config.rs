// ─────────────────────────────────────────────────────────────────────
// Omnisyndetic Baryon Calculator — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{
    FIELD_ENERGY_COEFFICIENT, HBAR_C, LAMBDA_0_DERIVED, LAMBDA_0_TRUNCATED, PHI_0,
    SPEED_OF_LIGHT_FM_S,
};
use crate::error::{BaryonError, BaryonResult};
use crate::state::InputState;

/// Geometric constant set the evaluator runs against.
/// Read-only after construction; shared by every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometricConstants {
    /// Ideal radial length λ₀ [fm].
    pub lambda_0: f64,
    /// Ideal angular closure sum φ₀ [rad].
    pub phi_0: f64,
    /// Charge-cloud radius at perfect closure [fm].
    pub ideal_charge_radius: f64,
    pub epsilon_min: f64,
    pub epsilon_max: f64,
    /// Lower curvature bound; divides the charge asymmetry term.
    pub kappa_min: f64,
    /// Upper curvature bound; scales the decay suppression.
    pub kappa_max: f64,
    /// Formation band lower edge on C.
    pub coherence_min: f64,
    /// Formation band upper edge on C. Charge vanishes at or above it.
    pub coherence_max: f64,
    /// Echonex field energy coefficient [MeV].
    pub field_energy_coefficient: f64,
    /// ħc [MeV·fm].
    pub hbar_c: f64,
    /// Time for light to traverse one closure φ₀·λ₀ [s].
    pub closure_time: f64,
    /// [fm/s]
    pub speed_of_light: f64,
}

impl GeometricConstants {
    /// Derive every relational constant from λ₀ and φ₀ = 2π.
    ///
    /// ε bounds are one radian per turn and one full turn; κ bounds are their
    /// squares; the coherence band is exp(−κ) over the κ bounds, so that
    /// `coherence_min = exp(−κ_max)` and `coherence_max = exp(−κ_min)`.
    pub fn from_geometry(lambda_0: f64) -> Self {
        let phi_0 = PHI_0;
        let epsilon_min = 1.0 / phi_0;
        let epsilon_max = 1.0;
        let kappa_min = epsilon_min * epsilon_min;
        let kappa_max = epsilon_max * epsilon_max;
        let speed_of_light = SPEED_OF_LIGHT_FM_S;

        GeometricConstants {
            lambda_0,
            phi_0,
            ideal_charge_radius: lambda_0 * (1.0 + epsilon_min),
            epsilon_min,
            epsilon_max,
            kappa_min,
            kappa_max,
            coherence_min: (-kappa_max).exp(),
            coherence_max: (-kappa_min).exp(),
            field_energy_coefficient: FIELD_ENERGY_COEFFICIENT,
            hbar_c: HBAR_C,
            closure_time: phi_0 * lambda_0 / speed_of_light,
            speed_of_light,
        }
    }

    /// Canonical set: λ₀ = 1/√2.
    pub fn derive_relational() -> Self {
        Self::from_geometry(LAMBDA_0_DERIVED)
    }

    /// Load a bare constant set from a JSON file and validate it.
    pub fn from_file(path: &str) -> BaryonResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let constants: Self = serde_json::from_str(&contents)?;
        constants.validate()?;
        Ok(constants)
    }

    /// `true` when C lies inside the formation band (edges inclusive).
    pub fn in_formation_band(&self, coherence: f64) -> bool {
        self.coherence_min <= coherence && coherence <= self.coherence_max
    }

    pub fn validate(&self) -> BaryonResult<()> {
        let named = [
            ("lambda_0", self.lambda_0),
            ("phi_0", self.phi_0),
            ("ideal_charge_radius", self.ideal_charge_radius),
            ("epsilon_min", self.epsilon_min),
            ("epsilon_max", self.epsilon_max),
            ("kappa_min", self.kappa_min),
            ("kappa_max", self.kappa_max),
            ("coherence_min", self.coherence_min),
            ("coherence_max", self.coherence_max),
            ("field_energy_coefficient", self.field_energy_coefficient),
            ("hbar_c", self.hbar_c),
            ("closure_time", self.closure_time),
            ("speed_of_light", self.speed_of_light),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(BaryonError::ConfigError(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        let strictly_positive = [
            ("lambda_0", self.lambda_0),
            ("phi_0", self.phi_0),
            ("ideal_charge_radius", self.ideal_charge_radius),
            ("kappa_min", self.kappa_min),
            ("kappa_max", self.kappa_max),
            ("hbar_c", self.hbar_c),
            ("closure_time", self.closure_time),
            ("speed_of_light", self.speed_of_light),
        ];
        for (name, value) in strictly_positive {
            if value <= 0.0 {
                return Err(BaryonError::ConfigError(format!(
                    "{name} must be > 0, got {value}"
                )));
            }
        }

        if self.epsilon_min < 0.0 || self.epsilon_min > self.epsilon_max {
            return Err(BaryonError::ConfigError(format!(
                "epsilon bounds must satisfy 0 <= epsilon_min <= epsilon_max, got [{}, {}]",
                self.epsilon_min, self.epsilon_max
            )));
        }
        if self.kappa_min >= self.kappa_max {
            return Err(BaryonError::ConfigError(format!(
                "kappa_min ({}) must be < kappa_max ({})",
                self.kappa_min, self.kappa_max
            )));
        }
        if !(self.coherence_min > 0.0
            && self.coherence_min < self.coherence_max
            && self.coherence_max <= 1.0)
        {
            return Err(BaryonError::ConfigError(format!(
                "coherence band must satisfy 0 < min < max <= 1, got [{}, {}]",
                self.coherence_min, self.coherence_max
            )));
        }
        if self.field_energy_coefficient < 0.0 {
            return Err(BaryonError::ConfigError(format!(
                "field_energy_coefficient must be >= 0, got {}",
                self.field_energy_coefficient
            )));
        }
        Ok(())
    }
}

impl Default for GeometricConstants {
    fn default() -> Self {
        Self::derive_relational()
    }
}

/// Named constant sets shipped with the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantSet {
    /// λ₀ = 1/√2, every other constant derived from geometry.
    Derived,
    /// λ₀ = 0.7071 as written in the calibrated script.
    Truncated,
}

impl ConstantSet {
    pub fn constants(self) -> GeometricConstants {
        match self {
            ConstantSet::Derived => GeometricConstants::derive_relational(),
            ConstantSet::Truncated => GeometricConstants::from_geometry(LAMBDA_0_TRUNCATED),
        }
    }
}

/// Charge-cloud radius formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloudRadiusModel {
    /// r_ideal · (1 + ln(1 + κ))
    #[default]
    Logarithmic,
    /// Mean of the logarithmic radius and λ₀ · (1 + ε + R_dev).
    HybridMidpoint,
}

/// Admissible range of each user-controlled input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputBounds {
    /// [fm]
    #[serde(default = "default_lambda_min")]
    pub lambda_min: f64,
    /// [fm]
    #[serde(default = "default_lambda_max")]
    pub lambda_max: f64,
    /// [rad]
    #[serde(default = "default_sum_phi_min")]
    pub sum_phi_min: f64,
    /// [rad]
    #[serde(default = "default_sum_phi_max")]
    pub sum_phi_max: f64,
}

fn default_lambda_min() -> f64 {
    0.01
}
fn default_lambda_max() -> f64 {
    2.0
}
fn default_sum_phi_min() -> f64 {
    0.0
}
fn default_sum_phi_max() -> f64 {
    2.0 * PHI_0
}

impl Default for InputBounds {
    fn default() -> Self {
        InputBounds {
            lambda_min: default_lambda_min(),
            lambda_max: default_lambda_max(),
            sum_phi_min: default_sum_phi_min(),
            sum_phi_max: default_sum_phi_max(),
        }
    }
}

impl InputBounds {
    pub fn validate(&self) -> BaryonResult<()> {
        let all = [
            self.lambda_min,
            self.lambda_max,
            self.sum_phi_min,
            self.sum_phi_max,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(BaryonError::ConfigError(
                "input bounds must be finite".to_string(),
            ));
        }
        if !(self.lambda_min > 0.0 && self.lambda_min < self.lambda_max) {
            return Err(BaryonError::ConfigError(format!(
                "lambda bounds must satisfy 0 < lambda_min < lambda_max, got [{}, {}]",
                self.lambda_min, self.lambda_max
            )));
        }
        if self.sum_phi_min >= self.sum_phi_max {
            return Err(BaryonError::ConfigError(format!(
                "sum_phi_min ({}) must be < sum_phi_max ({})",
                self.sum_phi_min, self.sum_phi_max
            )));
        }
        Ok(())
    }

    pub fn clamp_lambda(&self, lambda: f64) -> f64 {
        lambda.clamp(self.lambda_min, self.lambda_max)
    }

    pub fn clamp_sum_phi(&self, sum_phi: f64) -> f64 {
        sum_phi.clamp(self.sum_phi_min, self.sum_phi_max)
    }

    /// Clamp both inputs into range. NaN passes through unchanged.
    pub fn clamp(&self, input: InputState) -> InputState {
        InputState {
            lambda: self.clamp_lambda(input.lambda),
            sum_phi: self.clamp_sum_phi(input.sum_phi),
        }
    }

    pub fn contains(&self, input: &InputState) -> bool {
        (self.lambda_min..=self.lambda_max).contains(&input.lambda)
            && (self.sum_phi_min..=self.sum_phi_max).contains(&input.sum_phi)
    }
}

/// Everything needed to build an evaluator.
/// Maps 1:1 to the JSON files under `configs/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub constants: GeometricConstants,
    #[serde(default)]
    pub cloud_radius: CloudRadiusModel,
    #[serde(default)]
    pub bounds: InputBounds,
}

fn default_name() -> String {
    "derived".to_string()
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        EvaluatorConfig {
            name: default_name(),
            constants: GeometricConstants::default(),
            cloud_radius: CloudRadiusModel::default(),
            bounds: InputBounds::default(),
        }
    }
}

impl EvaluatorConfig {
    /// Config for one of the shipped constant sets with default bounds.
    pub fn for_set(set: ConstantSet) -> Self {
        let name = match set {
            ConstantSet::Derived => "derived",
            ConstantSet::Truncated => "truncated",
        };
        EvaluatorConfig {
            name: name.to_string(),
            constants: set.constants(),
            ..Self::default()
        }
    }

    /// Load from JSON file and validate.
    pub fn from_file(path: &str) -> BaryonResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BaryonResult<()> {
        self.constants.validate()?;
        self.bounds.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/baryon-types/, the presets live
    /// two levels up.
    fn project_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    fn config_path(relative: &str) -> String {
        project_root().join(relative).to_string_lossy().to_string()
    }

    #[test]
    fn test_derived_constants_satisfy_invariants() {
        let c = GeometricConstants::derive_relational();
        c.validate().unwrap();
        assert!((c.lambda_0 - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
        assert!((c.phi_0 - std::f64::consts::TAU).abs() < 1e-15);
        assert!(c.kappa_min < c.kappa_max);
        assert!((c.coherence_max - (-c.kappa_min).exp()).abs() < 1e-15);
        assert!((c.coherence_min - (-c.kappa_max).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_truncated_set_only_moves_lambda_0() {
        let derived = ConstantSet::Derived.constants();
        let truncated = ConstantSet::Truncated.constants();
        assert_eq!(truncated.lambda_0, 0.7071);
        assert_eq!(truncated.kappa_min, derived.kappa_min);
        assert_eq!(truncated.coherence_max, derived.coherence_max);
        assert_eq!(truncated.field_energy_coefficient, 170_400.0);
        assert!(truncated.closure_time < derived.closure_time);
    }

    #[test]
    fn test_load_shipped_configs() {
        for (relative, set) in [
            ("configs/derived.json", ConstantSet::Derived),
            ("configs/truncated.json", ConstantSet::Truncated),
        ] {
            let cfg = EvaluatorConfig::from_file(&config_path(relative)).unwrap();
            assert_eq!(cfg, EvaluatorConfig::for_set(set));
        }
        let hybrid = EvaluatorConfig::from_file(&config_path("configs/hybrid_midpoint.json"))
            .unwrap();
        assert_eq!(hybrid.cloud_radius, CloudRadiusModel::HybridMidpoint);
        assert_eq!(hybrid.constants, ConstantSet::Derived.constants());
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let cfg: EvaluatorConfig = serde_json::from_str(r#"{"name": "bare"}"#).unwrap();
        assert_eq!(cfg.name, "bare");
        assert_eq!(cfg.constants, GeometricConstants::derive_relational());
        assert_eq!(cfg.bounds, InputBounds::default());
        cfg.validate().unwrap();
    }

    #[test]
    fn test_rejects_inverted_coherence_band() {
        let mut c = GeometricConstants::derive_relational();
        std::mem::swap(&mut c.coherence_min, &mut c.coherence_max);
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("coherence band"), "{err}");
    }

    #[test]
    fn test_rejects_zero_kappa_min() {
        let mut c = GeometricConstants::derive_relational();
        c.kappa_min = 0.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_rejects_coherence_max_above_one() {
        let mut c = GeometricConstants::derive_relational();
        c.coherence_max = 1.01;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_constant() {
        let mut c = GeometricConstants::derive_relational();
        c.hbar_c = f64::NAN;
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("hbar_c"), "{err}");
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = InputBounds::default();
        let clamped = bounds.clamp(InputState::new(-1.0, 100.0));
        assert_eq!(clamped.lambda, 0.01);
        assert!((clamped.sum_phi - 4.0 * std::f64::consts::PI).abs() < 1e-12);
        assert!(bounds.contains(&clamped));
    }

    #[test]
    fn test_bounds_reject_non_positive_lambda_min() {
        let bounds = InputBounds {
            lambda_min: 0.0,
            ..InputBounds::default()
        };
        assert!(bounds.validate().is_err());
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = EvaluatorConfig::for_set(ConstantSet::Truncated);
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: EvaluatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, cfg2);
    }

    #[test]
    fn test_derived_constants_survive_json_bit_exact() {
        let c = GeometricConstants::derive_relational();
        let back: GeometricConstants =
            serde_json::from_str(&serde_json::to_string(&c).unwrap()).unwrap();
        assert_eq!(back.epsilon_min.to_bits(), c.epsilon_min.to_bits());
        assert_eq!(back.lambda_0.to_bits(), c.lambda_0.to_bits());
        assert_eq!(back, c);
    }
}
