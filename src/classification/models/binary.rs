//! One-vs-all logistic regression.
//!
//! Purpose
//! -------
//! Fit `K` independent binary logistic regressions, one per class, each
//! discriminating its class against the rest. The fitted weight columns are
//! assembled into a single `(D + 1) × K` matrix; prediction takes the
//! per-sample argmax over the `K` sigmoid scores.
//!
//! Key behaviors
//! -------------
//! - [`BinaryProblem`] packages the shared augmented design matrix with one
//!   class's 0/1 indicator targets, validated at construction.
//! - [`OneVsAllClassifier`] implements [`Objective`] for a single binary
//!   subproblem: cross-entropy loss with clamped probabilities and the
//!   analytic gradient `(1/N)·Xᵀ(θ − y)` on unclamped probabilities.
//! - `fit` runs `K` conjugate-gradient minimizations from zero weights and
//!   records the per-class optimizer outcomes for diagnostics.
//!
//! Invariants & assumptions
//! ------------------------
//! - The design matrix is already bias-augmented; weight index 0 per class
//!   is the intercept.
//! - Indicator targets are exactly `0.0` or `1.0`.
//! - Fitting is deterministic: the same data and options always produce
//!   bit-identical weights (zero initialization, no randomness anywhere).
//!
//! Testing notes
//! -------------
//! - Unit tests check the loss/gradient pair against finite differences,
//!   loss finiteness on saturating weights, indicator validation, and
//!   fit-then-predict on a small separable problem.
use std::sync::Arc;

use crate::{
    classification::{
        core::{data::LabeledData, design::augment_with_bias},
        errors::{ClassifError, ClassifResult},
        predict::{Classifier, DecisionRule, predict_labels},
    },
    optimization::{
        errors::{OptError, OptResult},
        minimizer::{Cost, FitOptions, Grad, Objective, OptimOutcome, Theta, minimize},
        numerical_stability::{clamp_probability, safe_sigmoid},
    },
};
use ndarray::{Array1, Array2, ArrayView2};

/// One binary subproblem: the shared design matrix plus one class's targets.
///
/// The augmented design matrix is shared across all `K` subproblems via
/// `Arc`, so assembling the per-class problems never copies the features.
#[derive(Debug, Clone)]
pub struct BinaryProblem {
    /// `N × (D + 1)` bias-augmented design matrix, shared across classes.
    pub x: Arc<Array2<f64>>,
    /// `N` indicator targets, exactly 0.0 or 1.0.
    pub y: Array1<f64>,
}

impl BinaryProblem {
    /// Construct a validated binary subproblem.
    ///
    /// # Errors
    /// - [`ClassifError::IndicatorLengthMismatch`] if `y.len()` differs
    ///   from the number of design-matrix rows.
    /// - [`ClassifError::IndicatorNotBinary`] on the first entry that is
    ///   neither `0.0` nor `1.0`.
    pub fn new(x: Arc<Array2<f64>>, y: Array1<f64>) -> ClassifResult<Self> {
        if y.len() != x.nrows() {
            return Err(ClassifError::IndicatorLengthMismatch {
                expected: x.nrows(),
                actual: y.len(),
            });
        }
        for (index, &value) in y.iter().enumerate() {
            if value != 0.0 && value != 1.0 {
                return Err(ClassifError::IndicatorNotBinary { index, value });
            }
        }
        Ok(Self { x, y })
    }

    /// Number of samples `N`.
    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }
}

/// One-vs-all logistic-regression classifier.
///
/// Fields
/// ------
/// - `n_classes`: number of classes `K >= 2`.
/// - `options`: optimizer configuration shared by all `K` subproblems.
/// - `weights`: `(D + 1) × K` fitted weight matrix, `None` before `fit`.
/// - `class_fits`: per-class optimizer outcomes recorded during `fit`.
#[derive(Debug, Clone)]
pub struct OneVsAllClassifier {
    pub n_classes: usize,
    pub options: FitOptions,
    pub weights: Option<Array2<f64>>,
    pub class_fits: Vec<OptimOutcome>,
}

impl OneVsAllClassifier {
    /// Create an unfitted classifier for `n_classes` classes.
    ///
    /// # Errors
    /// - [`ClassifError::TooFewClasses`] if `n_classes < 2`.
    pub fn new(n_classes: usize, options: FitOptions) -> ClassifResult<Self> {
        if n_classes < 2 {
            return Err(ClassifError::TooFewClasses { n_classes });
        }
        Ok(Self { n_classes, options, weights: None, class_fits: Vec::new() })
    }

    /// Joint loss/gradient evaluation for one binary subproblem.
    ///
    /// Computes both quantities in a single pass over the data:
    /// - scores `X·w` mapped through the guarded sigmoid,
    /// - loss `-(1/N) Σ [y·ln θ + (1 − y)·ln(1 − θ)]` with clamped `θ`,
    /// - gradient `(1/N)·Xᵀ(θ − y)` on the **unclamped** `θ`.
    ///
    /// # Errors
    /// - [`OptError::WeightLengthMismatch`] if `theta.len()` differs from
    ///   the design-matrix width.
    fn evaluate(theta: &Theta, problem: &BinaryProblem) -> OptResult<(Cost, Grad)> {
        if theta.len() != problem.x.ncols() {
            return Err(OptError::WeightLengthMismatch {
                expected: problem.x.ncols(),
                actual: theta.len(),
            });
        }
        let n = problem.n_samples() as f64;
        let probs = problem.x.dot(theta).mapv(safe_sigmoid);
        let loss = -probs
            .iter()
            .zip(problem.y.iter())
            .map(|(&p, &y)| {
                let p = clamp_probability(p);
                y * p.ln() + (1.0 - y) * (1.0 - p).ln()
            })
            .sum::<f64>()
            / n;
        let grad = problem.x.t().dot(&(&probs - &problem.y)) / n;
        Ok((loss, grad))
    }

    /// Fit all `K` binary subproblems and assemble the weight matrix.
    ///
    /// # Behavior
    /// - Augments the features once and shares the design matrix across
    ///   classes via `Arc`.
    /// - For each class `k`, builds the 0/1 indicator for `label == k` and
    ///   minimizes the binary cross-entropy from a zero initial weight
    ///   vector.
    /// - Stores fitted weights column-wise and keeps each class's
    ///   [`OptimOutcome`] in `class_fits`.
    ///
    /// # Errors
    /// - [`OptError::ModelError`] if `data.n_classes` differs from the
    ///   classifier's `n_classes`.
    /// - Propagates any optimizer error from an individual subproblem.
    ///   Hitting the iteration cap is not an error.
    pub fn fit(&mut self, data: &LabeledData) -> OptResult<()> {
        if data.n_classes != self.n_classes {
            return Err(ClassifError::ClassCountMismatch {
                expected: self.n_classes,
                actual: data.n_classes,
            }
            .into());
        }
        let x = Arc::new(augment_with_bias(data.features.view()));
        let dim = x.ncols();
        let mut weights = Array2::zeros((dim, self.n_classes));
        let mut class_fits = Vec::with_capacity(self.n_classes);
        for class in 0..self.n_classes {
            let y = data.labels.mapv(|label| if label == class { 1.0 } else { 0.0 });
            let problem = BinaryProblem::new(Arc::clone(&x), y)?;
            let theta0 = Array1::zeros(dim);
            let outcome = minimize(&*self, theta0, &problem, &self.options)?;
            weights.column_mut(class).assign(&outcome.best_param);
            class_fits.push(outcome);
        }
        self.weights = Some(weights);
        self.class_fits = class_fits;
        Ok(())
    }
}

impl Objective for OneVsAllClassifier {
    type Data = BinaryProblem;

    fn value(&self, theta: &Theta, data: &BinaryProblem) -> OptResult<Cost> {
        Ok(Self::evaluate(theta, data)?.0)
    }

    fn check(&self, theta: &Theta, data: &BinaryProblem) -> OptResult<()> {
        if theta.len() != data.x.ncols() {
            return Err(OptError::WeightLengthMismatch {
                expected: data.x.ncols(),
                actual: theta.len(),
            });
        }
        for (index, &value) in theta.iter().enumerate() {
            if !value.is_finite() {
                return Err(OptError::InvalidBestParam {
                    index,
                    value,
                    reason: "Initial weights must be finite.",
                });
            }
        }
        Ok(())
    }

    fn grad(&self, theta: &Theta, data: &BinaryProblem) -> OptResult<Grad> {
        Ok(Self::evaluate(theta, data)?.1)
    }
}

impl Classifier for OneVsAllClassifier {
    fn predict(&self, features: ArrayView2<'_, f64>) -> ClassifResult<Array1<usize>> {
        let weights = self.weights.as_ref().ok_or(ClassifError::ModelNotFitted)?;
        predict_labels(weights.view(), features, DecisionRule::Sigmoid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use finitediff::FiniteDiff;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Agreement of the analytic gradient with finite differences.
    // - Loss finiteness and non-negativity, including saturating weights.
    // - Indicator validation in `BinaryProblem::new`.
    // - Deterministic fit-then-predict on a small separable problem.
    //
    // They intentionally DO NOT cover:
    // - Multi-split evaluation (see the integration suite).
    // -------------------------------------------------------------------------

    fn toy_problem() -> BinaryProblem {
        let x = Arc::new(array![
            [1.0, 0.2, -1.0],
            [1.0, 1.5, 0.3],
            [1.0, -0.7, 2.0],
            [1.0, 0.0, 0.5]
        ]);
        BinaryProblem::new(x, array![0.0, 1.0, 0.0, 1.0]).expect("valid problem")
    }

    #[test]
    // Purpose
    // -------
    // The analytic gradient matches a central finite difference of the
    // loss at a generic point.
    //
    // Given
    // -----
    // - The toy problem and `θ = (0.1, -0.3, 0.8)`.
    //
    // Expect
    // ------
    // - Agreement within 1e-6 in every coordinate.
    fn analytic_gradient_matches_finite_differences() {
        let model = OneVsAllClassifier::new(2, FitOptions::default()).expect("valid classifier");
        let problem = toy_problem();
        let theta = array![0.1, -0.3, 0.8];

        let analytic = model.grad(&theta, &problem).expect("gradient should evaluate");
        let numeric = theta.central_diff(&|t: &Theta| {
            model.value(t, &problem).expect("loss should evaluate")
        });

        for (a, n) in analytic.iter().zip(numeric.iter()) {
            assert_abs_diff_eq!(a, n, epsilon = 1e-6);
        }
    }

    #[test]
    // Purpose
    // -------
    // The clamped loss stays finite and non-negative even when huge
    // weights saturate every sigmoid.
    fn loss_is_finite_under_saturation() {
        let model = OneVsAllClassifier::new(2, FitOptions::default()).expect("valid classifier");
        let problem = toy_problem();
        let theta = array![1000.0, -1000.0, 1000.0];

        let loss = model.value(&theta, &problem).expect("loss should evaluate");

        assert!(loss.is_finite());
        assert!(loss >= 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Non-binary indicator entries are rejected with their index.
    fn binary_problem_rejects_non_binary_targets() {
        let x = Arc::new(array![[1.0, 0.0], [1.0, 1.0]]);

        let result = BinaryProblem::new(x, array![0.0, 0.5]);

        assert_eq!(
            result.unwrap_err(),
            ClassifError::IndicatorNotBinary { index: 1, value: 0.5 }
        );
    }

    #[test]
    // Purpose
    // -------
    // An indicator of the wrong length is rejected with both lengths.
    fn binary_problem_rejects_length_mismatch() {
        let x = Arc::new(array![[1.0, 0.0], [1.0, 1.0]]);

        let result = BinaryProblem::new(x, array![0.0]);

        assert_eq!(
            result.unwrap_err(),
            ClassifError::IndicatorLengthMismatch { expected: 2, actual: 1 }
        );
    }

    #[test]
    // Purpose
    // -------
    // On a linearly separable two-class problem, fit-then-predict recovers
    // the training labels exactly, and prediction before `fit` fails.
    //
    // Given
    // -----
    // - Two well-separated points per class in 2-D.
    //
    // Expect
    // ------
    // - `ModelNotFitted` before fitting; exact label recovery after.
    fn fit_then_predict_recovers_separable_labels() {
        let data = LabeledData::new(
            array![[0.0, 0.0], [0.2, 0.1], [3.0, 3.0], [2.8, 3.2]],
            array![0, 0, 1, 1],
            2,
        )
        .expect("valid data");
        let mut model = OneVsAllClassifier::new(2, FitOptions::default()).expect("valid classifier");

        assert_eq!(
            model.predict(data.features.view()).unwrap_err(),
            ClassifError::ModelNotFitted
        );

        model.fit(&data).expect("fit should succeed");
        let predicted = model.predict(data.features.view()).expect("predict should succeed");

        assert_eq!(predicted, data.labels);
        assert_eq!(model.class_fits.len(), 2);
    }

    #[test]
    // Purpose
    // -------
    // Fitting is fully deterministic: two independent fits on the same
    // data produce bit-identical weight matrices.
    fn fit_is_deterministic() {
        let data = LabeledData::new(
            array![[0.0, 1.0], [1.0, 0.0], [2.0, 2.0], [3.0, 2.5]],
            array![0, 0, 1, 1],
            2,
        )
        .expect("valid data");

        let mut first = OneVsAllClassifier::new(2, FitOptions::default()).expect("valid classifier");
        let mut second = first.clone();
        first.fit(&data).expect("fit should succeed");
        second.fit(&data).expect("fit should succeed");

        assert_eq!(first.weights, second.weights);
    }
}
