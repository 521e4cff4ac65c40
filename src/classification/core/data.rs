//! Labeled data containers for the classification stack.
//!
//! Purpose
//! -------
//! Provide small, validated containers for labeled feature data used by the
//! logistic-regression classifiers. This module centralizes input validation
//! for raw feature matrices and label vectors and standardizes how
//! train/validation/test splits are grouped.
//!
//! Key behaviors
//! -------------
//! - [`LabeledData`] enforces basic data invariants (non-empty, finite
//!   features, labels inside `[0, n_classes)`, matching lengths, at least
//!   two classes).
//! - [`DatasetSplits`] groups three [`LabeledData`] instances and enforces
//!   that they agree on feature dimension and class count.
//!
//! Invariants & assumptions
//! ------------------------
//! - Feature values must be **finite**; labels must lie in `[0, n_classes)`.
//! - The feature matrix must be non-empty at construction time.
//! - `labels.len() == features.nrows()` always holds after construction.
//! - `n_classes >= 2`.
//!
//! Conventions
//! -----------
//! - Features are stored raw, one sample per row, **without** a bias column;
//!   bias augmentation happens at fit/predict time (see
//!   [`design`](crate::classification::core::design)).
//! - Labels are 0-based class indices stored as `usize`.
//!
//! Downstream usage
//! ----------------
//! - Construct [`LabeledData`] at the boundary where raw feature arrays
//!   enter the classification stack.
//! - Classifiers and the split evaluator rely on these invariants and avoid
//!   re-validating basic properties.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction behavior for `LabeledData::new` (happy
//!   path, empty matrix, non-finite features, out-of-range labels, length
//!   mismatch, too few classes) and the cross-split consistency checks of
//!   `DatasetSplits::new`.
use crate::classification::errors::{ClassifError, ClassifResult};
use ndarray::{Array1, Array2};

/// `LabeledData` — validated feature matrix plus class labels.
///
/// Purpose
/// -------
/// Represent a single, validated set of labeled samples for classification,
/// together with the number of classes the labels are drawn from. This type
/// centralizes basic input checks so downstream code can assume clean,
/// finite data with in-range labels.
///
/// Fields
/// ------
/// - `features`: `Array2<f64>`
///   `N × D` feature matrix, one sample per row; all entries finite.
/// - `labels`: `Array1<usize>`
///   `N` class labels, each in `[0, n_classes)`.
/// - `n_classes`: `usize`
///   Total number of classes `K >= 2`.
///
/// Invariants
/// ----------
/// - `features.nrows() > 0`.
/// - All entries in `features` are finite.
/// - `labels.len() == features.nrows()`.
/// - Every label is `< n_classes` and `n_classes >= 2`.
///
/// Performance
/// -----------
/// - Validation is O(N·D) due to a single scan over `features` plus an O(N)
///   scan over `labels`.
/// - After construction, this type is a lightweight container with no hidden
///   allocations.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledData {
    /// `N × D` feature matrix (finite entries, no bias column).
    pub features: Array2<f64>,
    /// Class labels in `[0, n_classes)`.
    pub labels: Array1<usize>,
    /// Number of classes `K >= 2`.
    pub n_classes: usize,
}

impl LabeledData {
    /// Construct a validated [`LabeledData`] instance.
    ///
    /// Parameters
    /// ----------
    /// - `features`: `N × D` matrix, one sample per row.
    /// - `labels`: `N` class labels.
    /// - `n_classes`: total number of classes `K`.
    ///
    /// Errors
    /// ------
    /// - [`ClassifError::EmptyData`] if `features` has zero rows.
    /// - [`ClassifError::TooFewClasses`] if `n_classes < 2`.
    /// - [`ClassifError::NonFiniteFeature`] on the first non-finite entry.
    /// - [`ClassifError::LabelLengthMismatch`] if `labels.len()` differs
    ///   from `features.nrows()`.
    /// - [`ClassifError::LabelOutOfRange`] on the first label `>= n_classes`.
    pub fn new(
        features: Array2<f64>, labels: Array1<usize>, n_classes: usize,
    ) -> ClassifResult<Self> {
        if features.nrows() == 0 {
            return Err(ClassifError::EmptyData);
        }
        if n_classes < 2 {
            return Err(ClassifError::TooFewClasses { n_classes });
        }
        if labels.len() != features.nrows() {
            return Err(ClassifError::LabelLengthMismatch {
                expected: features.nrows(),
                actual: labels.len(),
            });
        }
        for ((row, col), &value) in features.indexed_iter() {
            if !value.is_finite() {
                return Err(ClassifError::NonFiniteFeature { row, col, value });
            }
        }
        for (index, &label) in labels.iter().enumerate() {
            if label >= n_classes {
                return Err(ClassifError::LabelOutOfRange { index, label, n_classes });
            }
        }
        Ok(Self { features, labels, n_classes })
    }

    /// Number of samples `N`.
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Raw feature dimension `D` (without the bias column).
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }
}

/// `DatasetSplits` — train/validation/test triple with consistent shapes.
///
/// Groups three [`LabeledData`] instances and checks that they share the
/// same feature dimension and class count, so a model fitted on `train`
/// can score `validation` and `test` without further shape checks.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSplits {
    pub train: LabeledData,
    pub validation: LabeledData,
    pub test: LabeledData,
}

impl DatasetSplits {
    /// Construct a validated split triple.
    ///
    /// Errors
    /// ------
    /// - [`ClassifError::FeatureDimMismatch`] if `validation` or `test`
    ///   differ from `train` in feature dimension.
    /// - [`ClassifError::ClassCountMismatch`] if the splits disagree on
    ///   `n_classes`.
    pub fn new(
        train: LabeledData, validation: LabeledData, test: LabeledData,
    ) -> ClassifResult<Self> {
        for split in [&validation, &test] {
            if split.n_features() != train.n_features() {
                return Err(ClassifError::FeatureDimMismatch {
                    expected: train.n_features(),
                    actual: split.n_features(),
                });
            }
            if split.n_classes != train.n_classes {
                return Err(ClassifError::ClassCountMismatch {
                    expected: train.n_classes,
                    actual: split.n_classes,
                });
            }
        }
        Ok(Self { train, validation, test })
    }
}
