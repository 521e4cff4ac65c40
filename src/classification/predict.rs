//! Prediction: decision rules, argmax, and the shared `Classifier` trait.
//!
//! Purpose
//! -------
//! Turn fitted weight matrices into hard label predictions. Both model
//! families share the same decision procedure: augment the features, form
//! linear scores `X·W`, map them through the model's activation, and take
//! the row-wise argmax. Because sigmoid and softmax are monotone per row,
//! the argmax over activations equals the argmax over raw scores; the
//! activation is still applied here so the same path can serve calibrated
//! probabilities.
//!
//! Conventions
//! -----------
//! - Ties in the argmax resolve to the **lowest** class index (strict `>`
//!   comparison during the scan).
//! - `predict_labels` consumes **raw** features; bias augmentation happens
//!   internally.
use crate::{
    classification::{
        core::{data::LabeledData, design::augment_with_bias},
        errors::{ClassifError, ClassifResult},
        metrics::accuracy,
    },
    optimization::numerical_stability::{row_softmax, safe_sigmoid},
};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Activation applied to linear scores before the argmax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionRule {
    /// Per-entry logistic sigmoid (one-vs-all models).
    Sigmoid,
    /// Row-wise max-shifted softmax (multinomial models).
    Softmax,
}

/// Index of the largest entry, first occurrence winning ties.
///
/// Scans left to right with a strict `>` comparison, so equal scores
/// resolve to the lowest index. The row is assumed non-empty, which the
/// shape checks in `predict_labels` guarantee.
pub(crate) fn argmax(row: ArrayView1<'_, f64>) -> usize {
    let mut best_index = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (index, &value) in row.iter().enumerate() {
        if value > best_value {
            best_index = index;
            best_value = value;
        }
    }
    best_index
}

/// Predict hard labels for raw features under a fitted weight matrix.
///
/// # Behavior
/// - Augments `features` with the intercept column.
/// - Forms the `N × K` score matrix `X·W`.
/// - Applies the activation selected by `rule`.
/// - Returns the row-wise argmax as 0-based class labels.
///
/// # Errors
/// - [`ClassifError::FeatureDimMismatch`] if `weights.nrows()` differs from
///   `features.ncols() + 1`.
pub fn predict_labels(
    weights: ArrayView2<'_, f64>, features: ArrayView2<'_, f64>, rule: DecisionRule,
) -> ClassifResult<Array1<usize>> {
    if weights.nrows() != features.ncols() + 1 {
        return Err(ClassifError::FeatureDimMismatch {
            expected: weights.nrows(),
            actual: features.ncols() + 1,
        });
    }
    let augmented = augment_with_bias(features);
    let scores = augmented.dot(&weights);
    let activations = match rule {
        DecisionRule::Sigmoid => scores.mapv(safe_sigmoid),
        DecisionRule::Softmax => row_softmax(scores.view()),
    };
    let labels = activations.rows().into_iter().map(argmax).collect();
    Ok(Array1::from_vec(labels))
}

/// Shared surface for fitted classifiers.
///
/// Implementors expose hard label prediction; `score` is provided on top of
/// it as predict-then-accuracy against a labeled split.
pub trait Classifier {
    /// Predict 0-based class labels for raw (unaugmented) features.
    ///
    /// # Errors
    /// - [`ClassifError::ModelNotFitted`] before `fit`.
    /// - [`ClassifError::FeatureDimMismatch`] if the feature dimension does
    ///   not match the fitted weights.
    fn predict(&self, features: ArrayView2<'_, f64>) -> ClassifResult<Array1<usize>>;

    /// Percentage accuracy of this classifier on a labeled split.
    fn score(&self, data: &LabeledData) -> ClassifResult<f64> {
        let predicted = self.predict(data.features.view())?;
        accuracy(predicted.view(), data.labels.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - First-occurrence tie-breaking in `argmax`.
    // - Agreement of both decision rules with the raw-score argmax.
    // - Feature-dimension checking in `predict_labels`.
    //
    // They intentionally DO NOT cover:
    // - Fitted-model prediction (see the model and integration tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Equal scores resolve to the lowest index; a later strict maximum
    // still wins.
    fn argmax_breaks_ties_toward_lowest_index() {
        assert_eq!(argmax(array![1.0, 1.0, 1.0].view()), 0);
        assert_eq!(argmax(array![0.0, 2.0, 2.0].view()), 1);
        assert_eq!(argmax(array![0.0, 1.0, 3.0].view()), 2);
    }

    #[test]
    // Purpose
    // -------
    // Sigmoid and softmax are monotone per row, so both rules produce the
    // same labels as the raw-score argmax.
    //
    // Given
    // -----
    // - A 3×3 weight matrix (2 features + bias) and two samples whose raw
    //   scores have distinct per-row maxima.
    //
    // Expect
    // ------
    // - Identical label vectors under both rules.
    fn decision_rules_agree_on_argmax() {
        let weights = array![[0.0, 0.5, -0.5], [1.0, -1.0, 0.0], [-1.0, 1.0, 2.0]];
        let features = array![[2.0, -1.0], [-2.0, 3.0]];

        let sigmoid = predict_labels(weights.view(), features.view(), DecisionRule::Sigmoid)
            .expect("shapes match");
        let softmax = predict_labels(weights.view(), features.view(), DecisionRule::Softmax)
            .expect("shapes match");

        assert_eq!(sigmoid, softmax);
    }

    #[test]
    // Purpose
    // -------
    // A feature matrix whose width does not match the weight rows (minus
    // the bias) is rejected.
    fn predict_labels_rejects_feature_dim_mismatch() {
        let weights = array![[0.0, 0.0], [1.0, -1.0], [0.5, 0.5]];
        let features = array![[1.0, 2.0, 3.0]];

        let result = predict_labels(weights.view(), features.view(), DecisionRule::Sigmoid);

        assert!(matches!(result.unwrap_err(), ClassifError::FeatureDimMismatch { .. }));
    }
}
