//! Closed-form coherence evaluator for the Omnisyndetic baryon calculator.
//!
//! Maps a coherence length λ and angular closure sum Σφ to mass, charge,
//! cloud radius and decay properties, plus the on-change session driver,
//! manual-entry handling, readout panel and parameter scans built on it.

pub mod charge;
pub mod coherence;
pub mod decay;
pub mod energy;
pub mod evaluator;
pub mod input;
pub mod report;
pub mod scan;
pub mod session;

pub use evaluator::{evaluate, evaluate_with, CoherenceEvaluator};
