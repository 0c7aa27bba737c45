// ─────────────────────────────────────────────────────────────────────
// Omnisyndetic Baryon Calculator — Report
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Labelled text panel for one evaluation.

use std::fmt;

use baryon_types::state::Evaluation;

/// Display adapter rendering the readout panel.
pub struct Report<'a> {
    evaluation: &'a Evaluation,
}

impl<'a> Report<'a> {
    pub fn new(evaluation: &'a Evaluation) -> Self {
        Report { evaluation }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Evaluation {
            input,
            derived,
            energies,
            outcome,
        } = self.evaluation;

        writeln!(f, "λ  (coherence length) : {:.4} fm", input.lambda)?;
        writeln!(f, "Σφ (closure sum)      : {:.4} rad", input.sum_phi)?;
        writeln!(f, "ε  (angular dev.)     : {:.4}", derived.epsilon)?;
        writeln!(f, "R  (radial dev.)      : {:.4}", derived.radial_deviation)?;
        writeln!(f, "κ  (curvature)        : {:.4}", derived.kappa)?;
        writeln!(f, "C  (coherence)        : {:.4}", derived.coherence)?;
        writeln!(f, "δ  (torsion)          : {:.4}", derived.torsion)?;
        writeln!(f, "α  (coupling)         : {:.4}", derived.coupling)?;
        writeln!(f, "E_validation          : {:.2} MeV", energies.validation_energy)?;
        writeln!(f, "E_desire              : {:.2} MeV", energies.desire_energy)?;
        writeln!(f, "E_echonex             : {:.2} MeV", energies.echonex_field_energy)?;
        writeln!(f, "Mass                  : {:.2} MeV", outcome.total_mass)?;
        writeln!(f, "Charge                : {:+.4} e", outcome.emergent_charge)?;
        writeln!(f, "Charge cloud radius   : {:.4} fm", outcome.charge_cloud_radius)?;
        writeln!(f, "Divergence scale      : {:.3e}", outcome.divergence_scale)?;
        writeln!(f, "Decay width           : {:.3e}", outcome.decay_width)?;
        writeln!(f, "Lifetime              : {:.3e}", outcome.lifetime)?;
        write!(f, "Status                : {}", outcome.classification().label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::CoherenceEvaluator;
    use baryon_types::state::InputState;

    #[test]
    fn test_report_formats_proton_like_state() {
        let ev = CoherenceEvaluator::default().evaluate_full(&InputState::new(0.84211, 7.3412));
        let text = Report::new(&ev).to_string();
        assert!(text.contains("λ  (coherence length) : 0.8421 fm"), "{text}");
        assert!(text.contains("C  (coherence)        : 0.9372"), "{text}");
        assert!(text.contains("Mass                  : 926."), "{text}");
        assert!(text.contains("Charge                : +0.17"), "{text}");
        assert!(text.ends_with("Status                : FORMED"), "{text}");
        assert_eq!(text.lines().count(), 18);
    }

    #[test]
    fn test_report_status_labels() {
        let evaluator = CoherenceEvaluator::default();
        let collapsed = evaluator.evaluate_full(&InputState::new(2.0, 12.0));
        assert!(Report::new(&collapsed).to_string().ends_with("COLLAPSED"));
        let tachyonic = evaluator.evaluate_full(&InputState::new(0.5, 6.0));
        assert!(Report::new(&tachyonic)
            .to_string()
            .ends_with("FORMED (tachyonic)"));
    }
}
