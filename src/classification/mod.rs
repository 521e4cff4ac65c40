//! classification — multi-class logistic regression over feature vectors.
//!
//! Purpose
//! -------
//! Provide a complete multi-class classification stack: validated data
//! containers, design-matrix construction, two logistic-regression model
//! families (one-vs-all and multinomial softmax), argmax prediction, and
//! accuracy evaluation over train/validation/test splits.
//!
//! Key behaviors
//! -------------
//! - [`core`] validates raw features and labels at the crate boundary and
//!   handles bias augmentation, one-hot encoding, and weight flattening.
//! - [`models`] fits the two classifier families by conjugate-gradient
//!   minimization of their cross-entropy losses through the
//!   [`optimization`](crate::optimization) layer.
//! - [`predict`] turns fitted weight matrices into hard labels via a
//!   row-wise argmax with first-occurrence tie-breaking.
//! - [`metrics`] reports percentage accuracy per split.
//!
//! Invariants & assumptions
//! ------------------------
//! - Labels are 0-based class indices in `[0, K)` with `K >= 2`.
//! - Raw features carry no bias column; augmentation happens at
//!   fit/predict time and the intercept is always weight row 0.
//! - Fitting is deterministic: zero initial weights and no randomness,
//!   so repeated fits on identical data produce identical models.
//! - Hitting the optimizer's iteration cap is a normal outcome; the model
//!   keeps the best weights found.
//!
//! Conventions
//! -----------
//! - Fitted weights are `(D + 1) × K` matrices, one column per class;
//!   flat optimizer vectors use row-major order.
//! - Invalid inputs surface as [`errors::ClassifError`] values, never
//!   panics; optimizer failures cross into
//!   [`OptError`](crate::optimization::errors::OptError) via `From`.
//!
//! Downstream usage
//! ----------------
//! - Callers construct [`core::LabeledData`] (and optionally
//!   [`core::DatasetSplits`]), pick a model from [`models`], `fit`, then
//!   `predict` or [`metrics::evaluate_splits`].
//! - Dataset acquisition, feature extraction, and any preprocessing are
//!   the caller's responsibility; this layer starts at validated numeric
//!   feature matrices.
//!
//! Testing notes
//! -------------
//! - Unit tests in each submodule cover validation paths, numeric
//!   correctness (finite-difference gradient checks), and tie-breaking.
//! - The integration suite in `tests/` exercises the full
//!   fit/predict/evaluate pipeline on small separable problems.

pub mod core;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod predict;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_logreg::classification::prelude::*;
//
// to import the main classification surface in a single line.

pub mod prelude {
    pub use super::core::{DatasetSplits, LabeledData};
    pub use super::errors::{ClassifError, ClassifResult};
    pub use super::metrics::{SplitScores, accuracy, evaluate_splits};
    pub use super::models::{OneVsAllClassifier, SoftmaxClassifier};
    pub use super::predict::{Classifier, DecisionRule, predict_labels};
}
