// ─────────────────────────────────────────────────────────────────────
// Omnisyndetic Baryon Calculator — Evaluation Session
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! On-change evaluation driver.
//!
//! Holds the last input and its evaluation; a new evaluation runs only when
//! the (clamped) input actually changes. Formation edges are reported so the
//! caller can start a collapse or recovery transition.

use baryon_types::state::{Evaluation, InputState, OutcomeRecord};

use crate::decay::{DecayModel, PlaceholderDecay};
use crate::evaluator::CoherenceEvaluator;
use crate::input::clamp_input;

/// Formation edge crossed by the latest update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    /// formed → collapsed
    Collapsed,
    /// collapsed → formed
    Recovered,
}

/// Result of one [`EvaluationSession::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Update {
    pub outcome: OutcomeRecord,
    pub recomputed: bool,
    pub transition: Transition,
}

/// Evaluator plus cached last evaluation.
#[derive(Debug, Clone)]
pub struct EvaluationSession<D: DecayModel = PlaceholderDecay> {
    evaluator: CoherenceEvaluator<D>,
    current: Evaluation,
    evaluations: u64,
}

impl<D: DecayModel> EvaluationSession<D> {
    /// Start a session at `initial` (clamped into the configured bounds).
    pub fn new(evaluator: CoherenceEvaluator<D>, initial: InputState) -> Self {
        let input = clamp_input(initial, &evaluator.config().bounds);
        let current = evaluator.evaluate_full(&input);
        tracing::debug!(
            lambda = input.lambda,
            sum_phi = input.sum_phi,
            formed = current.outcome.formed,
            "session started"
        );
        EvaluationSession {
            evaluator,
            current,
            evaluations: 1,
        }
    }

    pub fn evaluator(&self) -> &CoherenceEvaluator<D> {
        &self.evaluator
    }

    pub fn input(&self) -> InputState {
        self.current.input
    }

    pub fn current(&self) -> &Evaluation {
        &self.current
    }

    /// Number of evaluations actually performed, including the initial one.
    pub fn evaluation_count(&self) -> u64 {
        self.evaluations
    }

    /// Feed a new input; re-evaluate only if it differs from the cached one.
    pub fn update(&mut self, input: InputState) -> Update {
        let input = clamp_input(input, &self.evaluator.config().bounds);
        if input.same_bits(&self.current.input) {
            return Update {
                outcome: self.current.outcome,
                recomputed: false,
                transition: Transition::Unchanged,
            };
        }

        let was_formed = self.current.outcome.formed;
        self.current = self.evaluator.evaluate_full(&input);
        self.evaluations += 1;

        let transition = match (was_formed, self.current.outcome.formed) {
            (true, false) => Transition::Collapsed,
            (false, true) => Transition::Recovered,
            _ => Transition::Unchanged,
        };
        if transition != Transition::Unchanged {
            tracing::debug!(
                ?transition,
                lambda = input.lambda,
                sum_phi = input.sum_phi,
                coherence = self.current.derived.coherence,
                "formation edge crossed"
            );
        }

        Update {
            outcome: self.current.outcome,
            recomputed: true,
            transition,
        }
    }

    pub fn set_lambda(&mut self, lambda: f64) -> Update {
        let input = InputState {
            lambda,
            ..self.current.input
        };
        self.update(input)
    }

    pub fn set_sum_phi(&mut self, sum_phi: f64) -> Update {
        let input = InputState {
            sum_phi,
            ..self.current.input
        };
        self.update(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EvaluationSession {
        EvaluationSession::new(CoherenceEvaluator::default(), InputState::new(0.84211, 7.3412))
    }

    #[test]
    fn test_same_input_is_not_recomputed() {
        let mut s = session();
        let first = s.current().outcome;
        for _ in 0..100 {
            let u = s.update(InputState::new(0.84211, 7.3412));
            assert!(!u.recomputed);
            assert_eq!(u.outcome, first);
            assert_eq!(u.transition, Transition::Unchanged);
        }
        assert_eq!(s.evaluation_count(), 1);
    }

    #[test]
    fn test_changed_input_recomputes() {
        let mut s = session();
        let u = s.set_lambda(0.9);
        assert!(u.recomputed);
        assert_eq!(s.evaluation_count(), 2);
        assert_eq!(s.input().lambda, 0.9);
        assert_eq!(s.input().sum_phi, 7.3412);
    }

    #[test]
    fn test_collapse_and_recovery_edges() {
        let mut s = session();
        assert!(s.current().outcome.formed);

        let u = s.set_lambda(2.0);
        assert_eq!(u.transition, Transition::Collapsed);
        assert_eq!(u.outcome.total_mass, 0.0);

        let u = s.set_sum_phi(12.0);
        assert_eq!(u.transition, Transition::Unchanged);

        let u = s.update(InputState::new(0.84211, 7.3412));
        assert_eq!(u.transition, Transition::Recovered);
        assert!(u.outcome.total_mass > 0.0);
    }

    #[test]
    fn test_out_of_range_input_clamped_before_caching() {
        let mut s = session();
        s.set_lambda(50.0);
        assert_eq!(s.input().lambda, 2.0);
        let count = s.evaluation_count();
        let u = s.set_lambda(75.0);
        assert!(!u.recomputed);
        assert_eq!(s.evaluation_count(), count);
    }
}
