//! Multinomial (softmax) logistic regression.
//!
//! Purpose
//! -------
//! Fit all `K` classes jointly with a single softmax cross-entropy
//! minimization over a `(D + 1) × K` weight matrix. The optimizer works on
//! the row-major flattened weight vector; model code reshapes it back on
//! every loss/gradient evaluation and after fitting.
//!
//! Key behaviors
//! -------------
//! - [`MultinomialProblem`] packages the augmented design matrix with the
//!   one-hot label targets, validated at construction.
//! - [`SoftmaxClassifier`] implements [`Objective`] over the flat weight
//!   vector: row-wise max-shifted softmax, clamped log-loss, and the
//!   analytic gradient `Xᵀ(θ − Y)/N` flattened row-major.
//! - `fit` runs one conjugate-gradient minimization from zero weights.
//!
//! Invariants & assumptions
//! ------------------------
//! - Softmax normalization is strictly per sample row; probabilities in one
//!   row never depend on another row's scores.
//! - The flat/matrix weight layout is row-major everywhere (see
//!   [`weights`](crate::classification::core::weights)).
//! - Fitting is deterministic (zero initialization, no randomness).
//!
//! Testing notes
//! -------------
//! - Unit tests check the loss/gradient pair against finite differences,
//!   loss finiteness on saturating weights, shape validation, and
//!   fit-then-predict on a small separable three-class problem.
use crate::{
    classification::{
        core::{
            data::LabeledData,
            design::{augment_with_bias, one_hot},
            weights::{flatten_weights, unflatten_weights},
        },
        errors::{ClassifError, ClassifResult},
        predict::{Classifier, DecisionRule, predict_labels},
    },
    optimization::{
        errors::{OptError, OptResult},
        minimizer::{Cost, FitOptions, Grad, Objective, OptimOutcome, Theta, minimize},
        numerical_stability::{clamp_probability, row_softmax},
    },
};
use ndarray::{Array1, Array2, ArrayView2};

/// The joint multinomial problem: design matrix plus one-hot targets.
#[derive(Debug, Clone)]
pub struct MultinomialProblem {
    /// `N × (D + 1)` bias-augmented design matrix.
    pub x: Array2<f64>,
    /// `N × K` one-hot label matrix.
    pub y_onehot: Array2<f64>,
    /// Number of classes `K`.
    pub n_classes: usize,
}

impl MultinomialProblem {
    /// Construct a validated multinomial problem.
    ///
    /// # Errors
    /// - [`ClassifError::OneHotShapeMismatch`] if `y_onehot` is not
    ///   `N × n_classes` for the design matrix's `N`.
    pub fn new(x: Array2<f64>, y_onehot: Array2<f64>, n_classes: usize) -> ClassifResult<Self> {
        let expected = (x.nrows(), n_classes);
        if y_onehot.dim() != expected {
            return Err(ClassifError::OneHotShapeMismatch {
                expected,
                actual: y_onehot.dim(),
            });
        }
        Ok(Self { x, y_onehot, n_classes })
    }

    /// Number of samples `N`.
    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }
}

/// Multinomial logistic-regression classifier.
///
/// Fields
/// ------
/// - `n_classes`: number of classes `K >= 2`.
/// - `options`: optimizer configuration.
/// - `weights`: `(D + 1) × K` fitted weight matrix, `None` before `fit`.
/// - `fit_outcome`: the optimizer outcome recorded during `fit`.
#[derive(Debug, Clone)]
pub struct SoftmaxClassifier {
    pub n_classes: usize,
    pub options: FitOptions,
    pub weights: Option<Array2<f64>>,
    pub fit_outcome: Option<OptimOutcome>,
}

impl SoftmaxClassifier {
    /// Create an unfitted classifier for `n_classes` classes.
    ///
    /// # Errors
    /// - [`ClassifError::TooFewClasses`] if `n_classes < 2`.
    pub fn new(n_classes: usize, options: FitOptions) -> ClassifResult<Self> {
        if n_classes < 2 {
            return Err(ClassifError::TooFewClasses { n_classes });
        }
        Ok(Self { n_classes, options, weights: None, fit_outcome: None })
    }

    /// Joint loss/gradient evaluation over the flat weight vector.
    ///
    /// Computes both quantities in a single pass:
    /// - reshapes `theta` to the `(D + 1) × K` weight matrix,
    /// - scores `X·W` mapped through the row-wise max-shifted softmax,
    /// - loss `-(1/N) Σ_{i,k} Y_{ik}·ln θ_{ik}` with clamped `θ`,
    /// - gradient `Xᵀ(θ − Y)/N` on the **unclamped** `θ`, flattened
    ///   row-major back into optimizer space.
    ///
    /// # Errors
    /// - [`OptError::WeightShapeMismatch`] if `theta` cannot be reshaped to
    ///   `(D + 1) × K`.
    fn evaluate(theta: &Theta, problem: &MultinomialProblem) -> OptResult<(Cost, Grad)> {
        let dim = problem.x.ncols();
        let w = unflatten_weights(theta, dim, problem.n_classes)?;
        let n = problem.n_samples() as f64;
        let probs = row_softmax(problem.x.dot(&w).view());
        let loss = -probs
            .iter()
            .zip(problem.y_onehot.iter())
            .map(|(&p, &y)| y * clamp_probability(p).ln())
            .sum::<f64>()
            / n;
        let grad_matrix = problem.x.t().dot(&(&probs - &problem.y_onehot)) / n;
        Ok((loss, flatten_weights(grad_matrix.view())))
    }

    /// Fit the joint softmax model.
    ///
    /// # Behavior
    /// - Augments the features, one-hot encodes the labels, and minimizes
    ///   the softmax cross-entropy over the flat `(D + 1)·K` weight vector
    ///   from a zero start.
    /// - Stores the reshaped weight matrix and the [`OptimOutcome`].
    ///
    /// # Errors
    /// - [`OptError::ModelError`] if `data.n_classes` differs from the
    ///   classifier's `n_classes`.
    /// - Propagates any optimizer error. Hitting the iteration cap is not
    ///   an error.
    pub fn fit(&mut self, data: &LabeledData) -> OptResult<()> {
        if data.n_classes != self.n_classes {
            return Err(ClassifError::ClassCountMismatch {
                expected: self.n_classes,
                actual: data.n_classes,
            }
            .into());
        }
        let x = augment_with_bias(data.features.view());
        let y_onehot = one_hot(data.labels.view(), self.n_classes)?;
        let dim = x.ncols();
        let problem = MultinomialProblem::new(x, y_onehot, self.n_classes)?;
        let theta0 = Array1::zeros(dim * self.n_classes);
        let outcome = minimize(&*self, theta0, &problem, &self.options)?;
        self.weights = Some(unflatten_weights(&outcome.best_param, dim, self.n_classes)?);
        self.fit_outcome = Some(outcome);
        Ok(())
    }
}

impl Objective for SoftmaxClassifier {
    type Data = MultinomialProblem;

    fn value(&self, theta: &Theta, data: &MultinomialProblem) -> OptResult<Cost> {
        Ok(Self::evaluate(theta, data)?.0)
    }

    fn check(&self, theta: &Theta, data: &MultinomialProblem) -> OptResult<()> {
        let expected = data.x.ncols() * data.n_classes;
        if theta.len() != expected {
            return Err(OptError::WeightLengthMismatch { expected, actual: theta.len() });
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

    fn grad(&self, theta: &Theta, data: &MultinomialProblem) -> OptResult<Grad> {
        Ok(Self::evaluate(theta, data)?.1)
    }
}

impl Classifier for SoftmaxClassifier {
    fn predict(&self, features: ArrayView2<'_, f64>) -> ClassifResult<Array1<usize>> {
        let weights = self.weights.as_ref().ok_or(ClassifError::ModelNotFitted)?;
        predict_labels(weights.view(), features, DecisionRule::Softmax)
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
    // - Agreement of the analytic gradient with finite differences over the
    //   full flat weight vector.
    // - Loss finiteness under saturating weights.
    // - Shape validation of `MultinomialProblem::new` and `check`.
    // - Deterministic fit-then-predict on a separable three-class problem.
    // -------------------------------------------------------------------------

    fn toy_problem() -> MultinomialProblem {
        let x = array![[1.0, 0.5, -0.2], [1.0, -1.0, 0.8], [1.0, 0.3, 1.5], [1.0, 2.0, -0.5]];
        let y = array![
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 0.0]
        ];
        MultinomialProblem::new(x, y, 3).expect("valid problem")
    }

    #[test]
    // Purpose
    // -------
    // The analytic gradient matches a central finite difference of the
    // loss at a generic point in the flat weight space.
    //
    // Given
    // -----
    // - The toy problem and a non-trivial 9-element weight vector.
    //
    // Expect
    // ------
    // - Agreement within 1e-6 in every coordinate.
    fn analytic_gradient_matches_finite_differences() {
        let model = SoftmaxClassifier::new(3, FitOptions::default()).expect("valid classifier");
        let problem = toy_problem();
        let theta = array![0.1, -0.2, 0.3, 0.5, 0.0, -0.4, -0.1, 0.2, 0.6];

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
    // The max-shifted softmax plus clamp keeps the loss finite even for
    // huge weights that saturate every row.
    fn loss_is_finite_under_saturation() {
        let model = SoftmaxClassifier::new(3, FitOptions::default()).expect("valid classifier");
        let problem = toy_problem();
        let theta = Array1::from_elem(9, 500.0);

        let loss = model.value(&theta, &problem).expect("loss should evaluate");

        assert!(loss.is_finite());
        assert!(loss >= 0.0);
    }

    #[test]
    // Purpose
    // -------
    // A one-hot matrix of the wrong shape is rejected with both shapes.
    fn multinomial_problem_rejects_shape_mismatch() {
        let x = array![[1.0, 0.0], [1.0, 1.0]];
        let y = array![[1.0, 0.0], [0.0, 1.0], [1.0, 0.0]];

        let result = MultinomialProblem::new(x, y, 2);

        assert_eq!(
            result.unwrap_err(),
            ClassifError::OneHotShapeMismatch { expected: (2, 2), actual: (3, 2) }
        );
    }

    #[test]
    // Purpose
    // -------
    // `check` rejects a flat weight vector whose length is not
    // `(D + 1) · K`.
    fn check_rejects_wrong_weight_length() {
        let model = SoftmaxClassifier::new(3, FitOptions::default()).expect("valid classifier");
        let problem = toy_problem();
        let theta = Array1::zeros(8);

        let result = model.check(&theta, &problem);

        assert_eq!(
            result.unwrap_err(),
            OptError::WeightLengthMismatch { expected: 9, actual: 8 }
        );
    }

    #[test]
    // Purpose
    // -------
    // On three well-separated clusters, fit-then-predict recovers the
    // training labels exactly, and prediction before `fit` fails.
    fn fit_then_predict_recovers_separable_labels() {
        let data = LabeledData::new(
            array![
                [0.0, 0.0],
                [0.3, -0.2],
                [5.0, 0.0],
                [4.8, 0.3],
                [0.0, 5.0],
                [-0.2, 4.7]
            ],
            array![0, 0, 1, 1, 2, 2],
            3,
        )
        .expect("valid data");
        let mut model = SoftmaxClassifier::new(3, FitOptions::default()).expect("valid classifier");

        assert_eq!(
            model.predict(data.features.view()).unwrap_err(),
            ClassifError::ModelNotFitted
        );

        model.fit(&data).expect("fit should succeed");
        let predicted = model.predict(data.features.view()).expect("predict should succeed");

        assert_eq!(predicted, data.labels);
        assert!(model.fit_outcome.is_some());
    }
}
