//! Design-matrix helpers: bias augmentation and one-hot label encoding.
//!
//! Purpose
//! -------
//! Build the augmented design matrix and indicator targets that the
//! logistic-regression objectives consume. Raw data is stored without a
//! bias column (see [`data`](crate::classification::core::data)); these
//! helpers perform the mapping into model space at fit/predict time.
//!
//! Conventions
//! -----------
//! - The bias column is **prepended**: column 0 of the augmented matrix is
//!   all ones, so weight index 0 is the intercept.
//! - One-hot rows follow the 0-based label convention: row `i` has a single
//!   `1.0` at column `labels[i]`.
use crate::classification::errors::{ClassifError, ClassifResult};
use ndarray::{Array2, ArrayView1, ArrayView2, s};

/// Prepend a column of ones to a feature matrix.
///
/// Maps an `N × D` raw feature matrix to the `N × (D + 1)` design matrix
/// used by the classifiers, with the intercept column at index 0.
pub fn augment_with_bias(features: ArrayView2<'_, f64>) -> Array2<f64> {
    let (n, d) = features.dim();
    let mut augmented = Array2::ones((n, d + 1));
    augmented.slice_mut(s![.., 1..]).assign(&features);
    augmented
}

/// Encode labels as an `N × K` one-hot indicator matrix.
///
/// Row `i` is all zeros except for a `1.0` at column `labels[i]`.
///
/// # Errors
/// - [`ClassifError::TooFewClasses`] if `n_classes < 2`.
/// - [`ClassifError::LabelOutOfRange`] on the first label `>= n_classes`.
pub fn one_hot(labels: ArrayView1<'_, usize>, n_classes: usize) -> ClassifResult<Array2<f64>> {
    if n_classes < 2 {
        return Err(ClassifError::TooFewClasses { n_classes });
    }
    let mut encoded = Array2::zeros((labels.len(), n_classes));
    for (index, &label) in labels.iter().enumerate() {
        if label >= n_classes {
            return Err(ClassifError::LabelOutOfRange { index, label, n_classes });
        }
        encoded[[index, label]] = 1.0;
    }
    Ok(encoded)
}
