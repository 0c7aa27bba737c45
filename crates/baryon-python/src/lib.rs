// ─────────────────────────────────────────────────────────────────────
// Omnisyndetic Baryon Calculator — Baryon Python
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! PyO3 Python bindings for the Omnisyndetic baryon calculator.
//!
//! Exposes the evaluator, the on-change session, manual entry parsing and the
//! grid scan (as numpy arrays) to the visualisation front end.

use numpy::{IntoPyArray, PyArray1, PyArray2};
use pyo3::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use baryon_core::evaluator::CoherenceEvaluator;
use baryon_core::input::{parse_manual_entry, InputField};
use baryon_core::report::Report;
use baryon_core::scan::{fit_reference, scan_grid, survey};
use baryon_core::session::{EvaluationSession, Transition};
use baryon_types::config::{ConstantSet, EvaluatorConfig};
use baryon_types::error::BaryonError;
use baryon_types::reference;
use baryon_types::state::{Classification, Evaluation, InputState};

fn to_py_err(e: BaryonError) -> PyErr {
    match e {
        BaryonError::Io(_) => pyo3::exceptions::PyIOError::new_err(e.to_string()),
        _ => pyo3::exceptions::PyValueError::new_err(e.to_string()),
    }
}

fn parse_set(name: &str) -> PyResult<ConstantSet> {
    match name {
        "derived" => Ok(ConstantSet::Derived),
        "truncated" => Ok(ConstantSet::Truncated),
        other => Err(pyo3::exceptions::PyValueError::new_err(format!(
            "unknown constant set '{other}', expected 'derived' or 'truncated'"
        ))),
    }
}

// ─── Result types ───

/// One evaluation: derived scalars, energies and outcome.
#[pyclass]
#[derive(Clone)]
struct PyEvaluation {
    #[pyo3(get)]
    lambda_: f64,
    #[pyo3(get)]
    sum_phi: f64,
    #[pyo3(get)]
    epsilon: f64,
    #[pyo3(get)]
    radial_deviation: f64,
    #[pyo3(get)]
    kappa: f64,
    #[pyo3(get)]
    coherence: f64,
    #[pyo3(get)]
    torsion: f64,
    #[pyo3(get)]
    coupling: f64,
    #[pyo3(get)]
    validation_energy: f64,
    #[pyo3(get)]
    desire_energy: f64,
    #[pyo3(get)]
    echonex_field_energy: f64,
    #[pyo3(get)]
    total_mass: f64,
    #[pyo3(get)]
    emergent_charge: f64,
    #[pyo3(get)]
    charge_cloud_radius: f64,
    #[pyo3(get)]
    divergence_scale: f64,
    #[pyo3(get)]
    decay_width: f64,
    #[pyo3(get)]
    lifetime: f64,
    #[pyo3(get)]
    formed: bool,
    #[pyo3(get)]
    is_tachyonic: bool,
    classification: Classification,
    report: String,
}

impl From<&Evaluation> for PyEvaluation {
    fn from(ev: &Evaluation) -> Self {
        PyEvaluation {
            lambda_: ev.input.lambda,
            sum_phi: ev.input.sum_phi,
            epsilon: ev.derived.epsilon,
            radial_deviation: ev.derived.radial_deviation,
            kappa: ev.derived.kappa,
            coherence: ev.derived.coherence,
            torsion: ev.derived.torsion,
            coupling: ev.derived.coupling,
            validation_energy: ev.energies.validation_energy,
            desire_energy: ev.energies.desire_energy,
            echonex_field_energy: ev.energies.echonex_field_energy,
            total_mass: ev.outcome.total_mass,
            emergent_charge: ev.outcome.emergent_charge,
            charge_cloud_radius: ev.outcome.charge_cloud_radius,
            divergence_scale: ev.outcome.divergence_scale,
            decay_width: ev.outcome.decay_width,
            lifetime: ev.outcome.lifetime,
            formed: ev.outcome.formed,
            is_tachyonic: ev.outcome.is_tachyonic,
            classification: ev.outcome.classification(),
            report: Report::new(ev).to_string(),
        }
    }
}

#[pymethods]
impl PyEvaluation {
    /// Status label: COLLAPSED, FORMED or FORMED (tachyonic).
    #[getter]
    fn status(&self) -> &'static str {
        self.classification.label()
    }

    /// Formatted readout panel.
    fn report(&self) -> String {
        self.report.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "Evaluation(C={:.4}, mass={:.2} MeV, charge={:+.4} e, {})",
            self.coherence,
            self.total_mass,
            self.emergent_charge,
            self.status()
        )
    }
}

// ─── Evaluator ───

/// Python-accessible coherence evaluator.
#[pyclass]
struct PyCoherenceEvaluator {
    inner: CoherenceEvaluator,
}

#[pymethods]
impl PyCoherenceEvaluator {
    /// Build from a shipped constant set ("derived" or "truncated").
    #[new]
    #[pyo3(signature = (constant_set = "derived"))]
    fn new(constant_set: &str) -> PyResult<Self> {
        let inner = CoherenceEvaluator::new(EvaluatorConfig::for_set(parse_set(constant_set)?))
            .map_err(to_py_err)?;
        Ok(PyCoherenceEvaluator { inner })
    }

    /// Load evaluator configuration from a JSON file.
    #[staticmethod]
    fn from_file(config_path: &str) -> PyResult<Self> {
        let inner = CoherenceEvaluator::from_file(config_path).map_err(to_py_err)?;
        Ok(PyCoherenceEvaluator { inner })
    }

    fn evaluate(&self, lambda_: f64, sum_phi: f64) -> PyEvaluation {
        PyEvaluation::from(&self.inner.evaluate_full(&InputState::new(lambda_, sum_phi)))
    }

    /// Parse a manually typed value for "lambda" or "sum_phi", clamped to bounds.
    fn parse_entry(&self, text: &str, field: &str) -> PyResult<f64> {
        let field = match field {
            "lambda" => InputField::Lambda,
            "sum_phi" => InputField::SumPhi,
            other => {
                return Err(pyo3::exceptions::PyValueError::new_err(format!(
                    "unknown field '{other}', expected 'lambda' or 'sum_phi'"
                )))
            }
        };
        parse_manual_entry(text, field, &self.inner.config().bounds).map_err(to_py_err)
    }

    /// Grid scan over the configured bounds.
    /// Returns (lambda [n_lambda], sum_phi [n_phi], coherence, total_mass, charge [n_phi, n_lambda]).
    #[allow(clippy::type_complexity)]
    fn scan<'py>(
        &self,
        py: Python<'py>,
        n_lambda: usize,
        n_phi: usize,
    ) -> PyResult<(
        Bound<'py, PyArray1<f64>>,
        Bound<'py, PyArray1<f64>>,
        Bound<'py, PyArray2<f64>>,
        Bound<'py, PyArray2<f64>>,
        Bound<'py, PyArray2<f64>>,
    )> {
        let grid = scan_grid(&self.inner, &self.inner.config().bounds, n_lambda, n_phi)
            .map_err(to_py_err)?;
        Ok((
            grid.lambda.into_pyarray(py),
            grid.sum_phi.into_pyarray(py),
            grid.coherence.into_pyarray(py),
            grid.total_mass.into_pyarray(py),
            grid.emergent_charge.into_pyarray(py),
        ))
    }

    /// Monte Carlo survey of formed states: list of (lambda, sum_phi, coherence, mass, charge).
    #[pyo3(signature = (n_samples, seed = 0))]
    fn survey(&self, n_samples: usize, seed: u64) -> PyResult<Vec<(f64, f64, f64, f64, f64)>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let points = survey(&self.inner, &self.inner.config().bounds, n_samples, &mut rng)
            .map_err(to_py_err)?;
        Ok(points
            .into_iter()
            .map(|p| {
                (
                    p.lambda,
                    p.sum_phi,
                    p.coherence,
                    p.total_mass,
                    p.emergent_charge,
                )
            })
            .collect())
    }

    /// Fit a reference baryon by grid search. Returns (lambda, sum_phi, mass, residual).
    #[pyo3(signature = (baryon, n = 121))]
    fn fit(&self, baryon: &str, n: usize) -> PyResult<(f64, f64, f64, f64)> {
        let target = reference::lookup(baryon).ok_or_else(|| {
            pyo3::exceptions::PyKeyError::new_err(format!("unknown baryon '{baryon}'"))
        })?;
        let fit = fit_reference(&self.inner, &self.inner.config().bounds, target, n)
            .map_err(to_py_err)?;
        Ok((
            fit.point.lambda,
            fit.point.sum_phi,
            fit.point.total_mass,
            fit.mass_residual,
        ))
    }
}

// ─── Session ───

/// On-change session for interactive front ends.
#[pyclass]
struct PyEvaluationSession {
    inner: EvaluationSession,
}

#[pymethods]
impl PyEvaluationSession {
    #[new]
    #[pyo3(signature = (lambda_, sum_phi, constant_set = "derived"))]
    fn new(lambda_: f64, sum_phi: f64, constant_set: &str) -> PyResult<Self> {
        let evaluator = CoherenceEvaluator::new(EvaluatorConfig::for_set(parse_set(constant_set)?))
            .map_err(to_py_err)?;
        Ok(PyEvaluationSession {
            inner: EvaluationSession::new(evaluator, InputState::new(lambda_, sum_phi)),
        })
    }

    /// Update inputs. Returns (recomputed, transition) with transition in
    /// {"unchanged", "collapsed", "recovered"}.
    fn update(&mut self, lambda_: f64, sum_phi: f64) -> (bool, &'static str) {
        let update = self.inner.update(InputState::new(lambda_, sum_phi));
        let transition = match update.transition {
            Transition::Unchanged => "unchanged",
            Transition::Collapsed => "collapsed",
            Transition::Recovered => "recovered",
        };
        (update.recomputed, transition)
    }

    /// Current evaluation.
    fn current(&self) -> PyEvaluation {
        PyEvaluation::from(self.inner.current())
    }

    fn evaluation_count(&self) -> u64 {
        self.inner.evaluation_count()
    }
}

// ─── Module registration ───

/// Omnisyndetic baryon calculator — Rust evaluation core.
#[pymodule]
fn omnisyndetic_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCoherenceEvaluator>()?;
    m.add_class::<PyEvaluationSession>()?;
    m.add_class::<PyEvaluation>()?;
    Ok(())
}
