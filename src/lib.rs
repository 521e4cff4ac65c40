//! rust_logreg — multi-class logistic regression over image feature vectors.
//!
//! Purpose
//! -------
//! Serve as the crate root for a complete multi-class logistic-regression
//! stack: validated data containers, one-vs-all and multinomial softmax
//! classifiers fitted by nonlinear conjugate gradient, argmax prediction,
//! and per-split accuracy evaluation.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules ([`classification`] and
//!   [`optimization`]) as the public crate surface.
//! - [`classification`] owns the data model, the two model families, and
//!   the prediction/evaluation surface.
//! - [`optimization`] owns the Argmin-backed conjugate-gradient minimizer,
//!   numerically stable probability transforms, and the optimizer error
//!   surface.
//!
//! Invariants & assumptions
//! ------------------------
//! - Dataset acquisition and feature extraction happen upstream; this crate
//!   starts at numeric feature matrices with 0-based integer labels.
//! - All fallible operations return rich error types (`ClassifError`,
//!   `OptError`); the crate never intentionally panics on user input.
//! - Fitting is deterministic: zero initial weights, no randomness.
//!
//! Conventions
//! -----------
//! - Fitted weights are `(D + 1) × K` matrices with the intercept in row 0;
//!   the optimizer sees their row-major flattening.
//! - Accuracy is reported in percent, one figure per split.
//!
//! Downstream usage
//! ----------------
//! - Typical callers import `classification::prelude::*`, construct
//!   `LabeledData`, pick `OneVsAllClassifier` or `SoftmaxClassifier`,
//!   `fit`, then `predict` or `evaluate_splits`.
//! - Advanced callers can implement `optimization::minimizer::Objective`
//!   directly to minimize custom losses with the same solver stack.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; the end-to-end fit/predict/
//!   evaluate pipeline is covered by the integration suite in `tests/`.

pub mod classification;
pub mod optimization;
