// ─────────────────────────────────────────────────────────────────────
// Omnisyndetic Baryon Calculator — Parameter Scan
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Grid and Monte Carlo scans over the (λ, Σφ) input plane.
//!
//! Grid arrays are laid out [n_phi, n_lambda]: Σφ rows, λ columns.

use baryon_types::config::InputBounds;
use baryon_types::error::{BaryonError, BaryonResult};
use baryon_types::reference::ReferenceBaryon;
use baryon_types::state::InputState;
use ndarray::{Array1, Array2};
use rand::Rng;

use crate::decay::DecayModel;
use crate::evaluator::CoherenceEvaluator;

/// One evaluated sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanPoint {
    pub lambda: f64,
    pub sum_phi: f64,
    pub coherence: f64,
    pub total_mass: f64,
    pub emergent_charge: f64,
    pub formed: bool,
}

/// Outputs of a regular grid scan.
#[derive(Debug, Clone)]
pub struct ScanGrid {
    pub lambda: Array1<f64>,
    pub sum_phi: Array1<f64>,
    pub coherence: Array2<f64>,
    pub total_mass: Array2<f64>,
    pub emergent_charge: Array2<f64>,
    pub formed: Array2<bool>,
}

impl ScanGrid {
    /// Fraction of grid points inside the formation band.
    pub fn formed_fraction(&self) -> f64 {
        let n = self.formed.len();
        if n == 0 {
            return 0.0;
        }
        self.formed.iter().filter(|&&f| f).count() as f64 / n as f64
    }

    pub fn point(&self, iphi: usize, ilambda: usize) -> ScanPoint {
        ScanPoint {
            lambda: self.lambda[ilambda],
            sum_phi: self.sum_phi[iphi],
            coherence: self.coherence[[iphi, ilambda]],
            total_mass: self.total_mass[[iphi, ilambda]],
            emergent_charge: self.emergent_charge[[iphi, ilambda]],
            formed: self.formed[[iphi, ilambda]],
        }
    }

    /// Formed point whose total mass is closest to `target_mev`.
    pub fn closest_to_mass(&self, target_mev: f64) -> Option<ScanPoint> {
        let mut best: Option<(f64, ScanPoint)> = None;
        for ((iphi, ilambda), &formed) in self.formed.indexed_iter() {
            if !formed {
                continue;
            }
            let point = self.point(iphi, ilambda);
            let residual = (point.total_mass - target_mev).abs();
            if best.map_or(true, |(r, _)| residual < r) {
                best = Some((residual, point));
            }
        }
        best.map(|(_, point)| point)
    }
}

/// Evaluate a linspace grid covering `bounds`.
pub fn scan_grid<D: DecayModel>(
    evaluator: &CoherenceEvaluator<D>,
    bounds: &InputBounds,
    n_lambda: usize,
    n_phi: usize,
) -> BaryonResult<ScanGrid> {
    if n_lambda < 2 || n_phi < 2 {
        return Err(BaryonError::ScanError(format!(
            "grid needs at least 2 points per axis, got n_lambda={n_lambda}, n_phi={n_phi}"
        )));
    }
    bounds.validate()?;

    let lambda = Array1::linspace(bounds.lambda_min, bounds.lambda_max, n_lambda);
    let sum_phi = Array1::linspace(bounds.sum_phi_min, bounds.sum_phi_max, n_phi);
    let mut coherence = Array2::zeros((n_phi, n_lambda));
    let mut total_mass = Array2::zeros((n_phi, n_lambda));
    let mut emergent_charge = Array2::zeros((n_phi, n_lambda));
    let mut formed = Array2::from_elem((n_phi, n_lambda), false);

    for (iphi, &phi) in sum_phi.iter().enumerate() {
        for (ilambda, &lam) in lambda.iter().enumerate() {
            let ev = evaluator.evaluate_full(&InputState::new(lam, phi));
            coherence[[iphi, ilambda]] = ev.derived.coherence;
            total_mass[[iphi, ilambda]] = ev.outcome.total_mass;
            emergent_charge[[iphi, ilambda]] = ev.outcome.emergent_charge;
            formed[[iphi, ilambda]] = ev.outcome.formed;
        }
    }

    let grid = ScanGrid {
        lambda,
        sum_phi,
        coherence,
        total_mass,
        emergent_charge,
        formed,
    };
    tracing::debug!(
        n_lambda,
        n_phi,
        formed_fraction = grid.formed_fraction(),
        "grid scan complete"
    );
    Ok(grid)
}

/// Monte Carlo survey with rejection: keeps only formed samples.
///
/// Stops after `n_samples` formed points or `10 · n_samples` attempts.
pub fn survey<D: DecayModel, R: Rng>(
    evaluator: &CoherenceEvaluator<D>,
    bounds: &InputBounds,
    n_samples: usize,
    rng: &mut R,
) -> BaryonResult<Vec<ScanPoint>> {
    bounds.validate()?;
    let max_attempts = n_samples.saturating_mul(10);
    let mut results = Vec::with_capacity(n_samples);

    let mut attempts = 0;
    while results.len() < n_samples && attempts < max_attempts {
        attempts += 1;

        let lambda = rng.gen_range(bounds.lambda_min..=bounds.lambda_max);
        let sum_phi = rng.gen_range(bounds.sum_phi_min..=bounds.sum_phi_max);
        let ev = evaluator.evaluate_full(&InputState::new(lambda, sum_phi));
        if !ev.outcome.formed {
            continue;
        }

        results.push(ScanPoint {
            lambda,
            sum_phi,
            coherence: ev.derived.coherence,
            total_mass: ev.outcome.total_mass,
            emergent_charge: ev.outcome.emergent_charge,
            formed: true,
        });
    }

    tracing::debug!(
        requested = n_samples,
        accepted = results.len(),
        attempts,
        "survey complete"
    );
    Ok(results)
}

/// Best grid match for a reference baryon's mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub baryon: ReferenceBaryon,
    pub point: ScanPoint,
    /// |M_model − M_reference| [MeV]
    pub mass_residual: f64,
}

/// Grid search (n × n) for the formed input closest to `baryon`'s mass.
pub fn fit_reference<D: DecayModel>(
    evaluator: &CoherenceEvaluator<D>,
    bounds: &InputBounds,
    baryon: &ReferenceBaryon,
    n: usize,
) -> BaryonResult<Fit> {
    let grid = scan_grid(evaluator, bounds, n, n)?;
    let point = grid.closest_to_mass(baryon.mass_mev).ok_or_else(|| {
        BaryonError::ScanError(format!(
            "no formed point in the scanned range to fit {}",
            baryon.name
        ))
    })?;
    Ok(Fit {
        baryon: *baryon,
        point,
        mass_residual: (point.total_mass - baryon.mass_mev).abs(),
    })
}
