//! Evaluation metrics: accuracy and per-split scoring.
//!
//! Purpose
//! -------
//! Score fitted classifiers against labeled data. Accuracy is reported as a
//! **percentage** in `[0, 100]`, one figure per split, matching the usual
//! train/validation/test reporting convention.
use crate::classification::{
    core::data::DatasetSplits,
    errors::{ClassifError, ClassifResult},
    predict::Classifier,
};
use ndarray::ArrayView1;

/// Percentage of positions where `predicted` equals `actual`.
///
/// # Errors
/// - [`ClassifError::PredictionLengthMismatch`] if the two vectors differ
///   in length.
/// - [`ClassifError::EmptyData`] if both are empty (accuracy is undefined).
pub fn accuracy(
    predicted: ArrayView1<'_, usize>, actual: ArrayView1<'_, usize>,
) -> ClassifResult<f64> {
    if predicted.len() != actual.len() {
        return Err(ClassifError::PredictionLengthMismatch {
            predicted: predicted.len(),
            actual: actual.len(),
        });
    }
    if predicted.is_empty() {
        return Err(ClassifError::EmptyData);
    }
    let correct = predicted.iter().zip(actual.iter()).filter(|(p, a)| p == a).count();
    Ok(100.0 * correct as f64 / predicted.len() as f64)
}

/// Accuracy figures for the three standard splits, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitScores {
    pub train: f64,
    pub validation: f64,
    pub test: f64,
}

/// Score a fitted classifier on train, validation, and test splits.
///
/// # Errors
/// Propagates any prediction error from the classifier (e.g.,
/// [`ClassifError::ModelNotFitted`]).
pub fn evaluate_splits<C: Classifier>(
    classifier: &C, splits: &DatasetSplits,
) -> ClassifResult<SplitScores> {
    Ok(SplitScores {
        train: classifier.score(&splits.train)?,
        validation: classifier.score(&splits.validation)?,
        test: classifier.score(&splits.test)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Exact accuracy values at full agreement, no agreement, and a
    //   fractional case.
    // - Rejection of mismatched lengths and empty inputs.
    //
    // They intentionally DO NOT cover:
    // - `evaluate_splits` over fitted models (see the integration suite).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Full agreement scores exactly 100 and full disagreement exactly 0.
    fn accuracy_hits_exact_bounds() {
        let labels = array![0usize, 1, 2, 1];

        let perfect = accuracy(labels.view(), labels.view()).expect("lengths match");
        let wrong = accuracy(array![1usize, 0, 0, 0].view(), labels.view())
            .expect("lengths match");

        assert_abs_diff_eq!(perfect, 100.0, epsilon = 0.0);
        assert_abs_diff_eq!(wrong, 0.0, epsilon = 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Three correct out of four yields exactly 75 percent.
    fn accuracy_computes_fractional_agreement() {
        let predicted = array![0usize, 1, 2, 0];
        let actual = array![0usize, 1, 2, 1];

        let score = accuracy(predicted.view(), actual.view()).expect("lengths match");

        assert_abs_diff_eq!(score, 75.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Length mismatch and empty input are rejected, not silently scored.
    fn accuracy_rejects_bad_inputs() {
        let mismatch = accuracy(array![0usize, 1].view(), array![0usize].view());
        let empty_arr = Array1::<usize>::zeros(0);
        let empty = accuracy(empty_arr.view(), empty_arr.view());

        assert_eq!(
            mismatch.unwrap_err(),
            ClassifError::PredictionLengthMismatch { predicted: 2, actual: 1 }
        );
        assert_eq!(empty.unwrap_err(), ClassifError::EmptyData);
    }
}
