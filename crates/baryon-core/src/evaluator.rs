// ─────────────────────────────────────────────────────────────────────
// Omnisyndetic Baryon Calculator — Evaluator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Coherence evaluator: (λ, Σφ) → outcome record.
//!
//! Pipeline:
//! 1. Derived state: ε, R_dev, κ, C, δ, α
//! 2. Energy terms: validation, desire, echonex
//! 3. Formation test: C ∈ [C_min, C_max], mass zero otherwise
//! 4. Charge, cloud radius, divergence scale
//! 5. Decay width and lifetime (pluggable model)
//! 6. Tachyonic flag: formed and λ < λ₀
//!
//! Evaluation is infallible and pure. Near-zero λ is floored rather than
//! rejected, so every finite input produces a finite record.

use baryon_types::config::{CloudRadiusModel, EvaluatorConfig, GeometricConstants};
use baryon_types::error::BaryonResult;
use baryon_types::state::{Evaluation, InputState, OutcomeRecord};

use crate::charge::{charge_cloud_radius, divergence_scale, emergent_charge};
use crate::coherence::derive_state;
use crate::decay::{DecayModel, PlaceholderDecay};
use crate::energy::energy_breakdown;

/// Evaluate with the default logarithmic cloud radius and placeholder decay fit.
pub fn evaluate(input: &InputState, constants: &GeometricConstants) -> OutcomeRecord {
    evaluate_with(input, constants, CloudRadiusModel::default(), &PlaceholderDecay).outcome
}

/// Full evaluation with an explicit cloud-radius model and decay model.
pub fn evaluate_with<D: DecayModel + ?Sized>(
    input: &InputState,
    constants: &GeometricConstants,
    cloud_radius: CloudRadiusModel,
    decay_model: &D,
) -> Evaluation {
    let derived = derive_state(input, constants);
    let energies = energy_breakdown(input, &derived, constants);

    let formed = constants.in_formation_band(derived.coherence);
    let total_mass = if formed { energies.total() } else { 0.0 };
    let decay = decay_model.decay(&derived, &energies, constants);

    let outcome = OutcomeRecord {
        total_mass,
        emergent_charge: emergent_charge(input, &derived, constants),
        charge_cloud_radius: charge_cloud_radius(cloud_radius, &derived, constants),
        divergence_scale: divergence_scale(input, &derived),
        decay_width: decay.decay_width,
        lifetime: decay.lifetime,
        formed,
        is_tachyonic: formed && input.lambda < constants.lambda_0,
    };

    tracing::trace!(
        lambda = input.lambda,
        sum_phi = input.sum_phi,
        coherence = derived.coherence,
        total_mass,
        formed,
        "evaluated"
    );

    Evaluation {
        input: *input,
        derived,
        energies,
        outcome,
    }
}

/// Evaluator bound to one constant set, cloud-radius model and decay model.
#[derive(Debug, Clone)]
pub struct CoherenceEvaluator<D: DecayModel = PlaceholderDecay> {
    config: EvaluatorConfig,
    decay_model: D,
}

impl CoherenceEvaluator<PlaceholderDecay> {
    /// Validate the configuration and build an evaluator with the placeholder decay fit.
    pub fn new(config: EvaluatorConfig) -> BaryonResult<Self> {
        config.validate()?;
        Ok(CoherenceEvaluator {
            config,
            decay_model: PlaceholderDecay,
        })
    }

    /// Load configuration from a JSON file.
    pub fn from_file(path: &str) -> BaryonResult<Self> {
        Self::new(EvaluatorConfig::from_file(path)?)
    }
}

impl Default for CoherenceEvaluator<PlaceholderDecay> {
    /// Derived constant set with default bounds. That config always validates,
    /// so `new` is skipped here.
    fn default() -> Self {
        CoherenceEvaluator {
            config: EvaluatorConfig::default(),
            decay_model: PlaceholderDecay,
        }
    }
}

impl<D: DecayModel> CoherenceEvaluator<D> {
    /// Swap the decay model, keeping the configuration.
    pub fn with_decay_model<E: DecayModel>(self, decay_model: E) -> CoherenceEvaluator<E> {
        CoherenceEvaluator {
            config: self.config,
            decay_model,
        }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn constants(&self) -> &GeometricConstants {
        &self.config.constants
    }

    pub fn decay_model(&self) -> &D {
        &self.decay_model
    }

    pub fn evaluate(&self, input: &InputState) -> OutcomeRecord {
        self.evaluate_full(input).outcome
    }

    pub fn evaluate_full(&self, input: &InputState) -> Evaluation {
        evaluate_with(
            input,
            &self.config.constants,
            self.config.cloud_radius,
            &self.decay_model,
        )
    }
}
