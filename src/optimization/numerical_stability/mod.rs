//! numerical_stability — numerically robust probability transformations.
//!
//! Purpose
//! -------
//! Collect numerically stable scalar and matrix transforms used by the
//! logistic-regression objectives. This module centralizes the probability
//! clamp and the guarded sigmoid/softmax implementations so the
//! classification layer can assume well-conditioned `f64` arithmetic when
//! evaluating cross-entropy losses and their gradients.
//!
//! Key behaviors
//! -------------
//! - Provide a stable logistic sigmoid (`safe_sigmoid`) that cannot
//!   overflow in either tail.
//! - Provide a row-wise, max-shifted softmax (`row_softmax`) whose rows
//!   always sum to one regardless of score magnitude.
//! - Centralize the probability clamp (`PROB_EPSILON`,
//!   `clamp_probability`) keeping log arguments strictly inside `(0, 1)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - All public transforms assume finite `f64` inputs; shape and domain
//!   validation is enforced in the classification layer, not here.
//! - Softmax normalization is strictly per row: probabilities in one row
//!   never depend on scores in another.
//! - The clamp applies to loss evaluation only; gradient formulas use the
//!   unclamped probabilities.
//!
//! Conventions
//! -----------
//! - Matrix routines operate on `ndarray` types (`Array2` and views).
//! - This module never logs, performs I/O, or touches global state; it is
//!   pure numerical helpers suitable for use inside tight inner loops.
//! - Panics and `unsafe` are avoided under normal usage; invalid inputs
//!   should be caught by upstream validation and surfaced as
//!   domain-specific error types.
//!
//! Downstream usage
//! ----------------
//! - The one-vs-all classifier maps per-sample scores through
//!   `safe_sigmoid` and clamps before the log-loss.
//! - The multinomial classifier maps its `N × K` score matrix through
//!   `row_softmax` and clamps before the log-loss.
//! - Prediction reuses both transforms when a caller asks for calibrated
//!   probabilities rather than raw scores.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] cover agreement with naïve formulas
//!   on safe grids, tail saturation, clamp bounds, row normalization, and
//!   shift invariance of the softmax.
//! - Loss and gradient correctness on top of these primitives is covered
//!   by the classification-model tests.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{PROB_EPSILON, clamp_probability, row_softmax, safe_sigmoid};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_logreg::optimization::numerical_stability::prelude::*;
//
// to import the main numerical-stability surface in a single line.

pub mod prelude {
    pub use super::transformations::{PROB_EPSILON, clamp_probability, row_softmax, safe_sigmoid};
}
