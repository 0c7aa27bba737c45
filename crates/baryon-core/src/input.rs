// ─────────────────────────────────────────────────────────────────────
// Omnisyndetic Baryon Calculator — Input
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Slider clamping and manual numeric entry.

use baryon_types::config::InputBounds;
use baryon_types::error::{BaryonError, BaryonResult};
use baryon_types::state::InputState;

/// Which input a manual entry targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Lambda,
    SumPhi,
}

impl InputField {
    pub fn name(self) -> &'static str {
        match self {
            InputField::Lambda => "lambda",
            InputField::SumPhi => "sum_phi",
        }
    }

    fn clamp(self, bounds: &InputBounds, value: f64) -> f64 {
        match self {
            InputField::Lambda => bounds.clamp_lambda(value),
            InputField::SumPhi => bounds.clamp_sum_phi(value),
        }
    }
}

/// Clamp slider inputs into bounds, logging when anything moved.
pub fn clamp_input(input: InputState, bounds: &InputBounds) -> InputState {
    let clamped = bounds.clamp(input);
    if !clamped.same_bits(&input) {
        tracing::warn!(
            lambda = input.lambda,
            sum_phi = input.sum_phi,
            clamped_lambda = clamped.lambda,
            clamped_sum_phi = clamped.sum_phi,
            "input outside bounds, clamped"
        );
    }
    clamped
}

/// Parse a manually typed value and clamp it into the field's range.
///
/// Accepts decimal and scientific notation with surrounding whitespace.
/// Empty, non-numeric and non-finite entries are rejected.
pub fn parse_manual_entry(
    text: &str,
    field: InputField,
    bounds: &InputBounds,
) -> BaryonResult<f64> {
    let trimmed = text.trim();
    let invalid = |reason: &str| {
        tracing::warn!(field = field.name(), text, reason, "manual entry rejected");
        BaryonError::InvalidInput {
            field: field.name(),
            value: text.to_string(),
            reason: reason.to_string(),
        }
    };

    if trimmed.is_empty() {
        return Err(invalid("empty entry"));
    }
    let value: f64 = trimmed.parse().map_err(|_| invalid("not a number"))?;
    if !value.is_finite() {
        return Err(invalid("value must be finite"));
    }

    let clamped = field.clamp(bounds, value);
    if clamped != value {
        tracing::warn!(
            field = field.name(),
            value,
            clamped,
            "manual entry outside bounds, clamped"
        );
    }
    Ok(clamped)
}

/// Apply a manual entry to the current input, returning the updated input.
pub fn apply_manual_entry(
    current: InputState,
    text: &str,
    field: InputField,
    bounds: &InputBounds,
) -> BaryonResult<InputState> {
    let value = parse_manual_entry(text, field, bounds)?;
    Ok(match field {
        InputField::Lambda => InputState {
            lambda: value,
            ..current
        },
        InputField::SumPhi => InputState {
            sum_phi: value,
            ..current
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_decimal_and_scientific() {
        let b = InputBounds::default();
        assert_eq!(parse_manual_entry("0.84211", InputField::Lambda, &b).unwrap(), 0.84211);
        assert_eq!(parse_manual_entry(" 7.3412\n", InputField::SumPhi, &b).unwrap(), 7.3412);
        assert_eq!(parse_manual_entry("5e-1", InputField::Lambda, &b).unwrap(), 0.5);
    }

    #[test]
    fn test_rejects_junk() {
        let b = InputBounds::default();
        for junk in ["", "   ", "abc", "1.2.3", "0,84", "NaN", "inf", "-infinity"] {
            let err = parse_manual_entry(junk, InputField::Lambda, &b);
            assert!(
                matches!(err, Err(BaryonError::InvalidInput { field: "lambda", .. })),
                "{junk:?} -> {err:?}"
            );
        }
    }

    #[test]
    fn test_clamps_out_of_range_entry() {
        let b = InputBounds::default();
        assert_eq!(parse_manual_entry("5", InputField::Lambda, &b).unwrap(), 2.0);
        assert_eq!(parse_manual_entry("-3", InputField::Lambda, &b).unwrap(), 0.01);
        assert_eq!(parse_manual_entry("-1", InputField::SumPhi, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_apply_manual_entry_touches_one_field() {
        let b = InputBounds::default();
        let current = InputState::new(0.7, 6.0);
        let next = apply_manual_entry(current, "1.1", InputField::Lambda, &b).unwrap();
        assert_eq!(next, InputState::new(1.1, 6.0));
        let next = apply_manual_entry(next, "6.5", InputField::SumPhi, &b).unwrap();
        assert_eq!(next, InputState::new(1.1, 6.5));
        assert!(apply_manual_entry(next, "x", InputField::SumPhi, &b).is_err());
    }

    #[test]
    fn test_clamp_input() {
        let b = InputBounds::default();
        let inside = InputState::new(1.0, 3.0);
        assert!(clamp_input(inside, &b).same_bits(&inside));
        let outside = clamp_input(InputState::new(3.0, -2.0), &b);
        assert_eq!(outside, InputState::new(2.0, 0.0));
    }
}
