//! Error surface for the classification layer.
//!
//! All invalid inputs — empty matrices, non-finite features, labels outside
//! `[0, K)`, and shape mismatches between weights, labels, and feature
//! dimensions — are reported through [`ClassifError`] rather than panics.
//! Shape mismatches fail fast with the expected/actual dimensions so callers
//! never fall into silent broadcasting.

/// Crate-wide result alias for classification operations.
pub type ClassifResult<T> = Result<T, ClassifError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ClassifError {
    // ---- Data containers ----
    /// Feature matrix has zero rows.
    EmptyData,

    /// Feature values must be finite.
    NonFiniteFeature {
        row: usize,
        col: usize,
        value: f64,
    },

    /// Label vector length does not match the number of feature rows.
    LabelLengthMismatch {
        expected: usize,
        actual: usize,
    },

    /// Label value is outside `[0, n_classes)`.
    LabelOutOfRange {
        index: usize,
        label: usize,
        n_classes: usize,
    },

    /// A classifier needs at least two classes.
    TooFewClasses {
        n_classes: usize,
    },

    /// Feature dimension differs between splits or from the fitted weights.
    FeatureDimMismatch {
        expected: usize,
        actual: usize,
    },

    /// Class count differs between splits.
    ClassCountMismatch {
        expected: usize,
        actual: usize,
    },

    // ---- Weights ----
    /// Weight vector length does not match D + 1.
    WeightLengthMismatch {
        expected: usize,
        actual: usize,
    },

    /// Flat weight vector cannot be reshaped to the requested matrix.
    WeightShapeMismatch {
        rows: usize,
        cols: usize,
        len: usize,
    },

    // ---- Indicator / one-hot labels ----
    /// Indicator vector length does not match the number of samples.
    IndicatorLengthMismatch {
        expected: usize,
        actual: usize,
    },

    /// Indicator entries must be exactly 0.0 or 1.0.
    IndicatorNotBinary {
        index: usize,
        value: f64,
    },

    /// One-hot label matrix shape does not match (N, K).
    OneHotShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    // ---- Prediction / evaluation ----
    /// Predicted and actual label vectors have different lengths.
    PredictionLengthMismatch {
        predicted: usize,
        actual: usize,
    },

    /// `predict` or `score` called before `fit`.
    ModelNotFitted,
}

impl std::error::Error for ClassifError {}

impl std::fmt::Display for ClassifError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Data containers ----
            ClassifError::EmptyData => {
                write!(f, "Feature matrix must contain at least one row")
            }
            ClassifError::NonFiniteFeature { row, col, value } => {
                write!(f, "Non-finite feature at ({row}, {col}): {value}")
            }
            ClassifError::LabelLengthMismatch { expected, actual } => {
                write!(f, "Label length mismatch: expected {expected}, actual {actual}")
            }
            ClassifError::LabelOutOfRange { index, label, n_classes } => {
                write!(
                    f,
                    "Label {label} at index {index} is outside [0, {n_classes})"
                )
            }
            ClassifError::TooFewClasses { n_classes } => {
                write!(f, "Need at least 2 classes, got {n_classes}")
            }
            ClassifError::FeatureDimMismatch { expected, actual } => {
                write!(f, "Feature dimension mismatch: expected {expected}, actual {actual}")
            }
            ClassifError::ClassCountMismatch { expected, actual } => {
                write!(f, "Class count mismatch: expected {expected}, actual {actual}")
            }

            // ---- Weights ----
            ClassifError::WeightLengthMismatch { expected, actual } => {
                write!(f, "Weight vector length mismatch: expected {expected}, actual {actual}")
            }
            ClassifError::WeightShapeMismatch { rows, cols, len } => {
                write!(
                    f,
                    "Cannot reshape flat weight vector of length {len} to ({rows}, {cols})"
                )
            }

            // ---- Indicator / one-hot labels ----
            ClassifError::IndicatorLengthMismatch { expected, actual } => {
                write!(f, "Indicator length mismatch: expected {expected}, actual {actual}")
            }
            ClassifError::IndicatorNotBinary { index, value } => {
                write!(f, "Indicator entry at index {index} is {value}, must be 0.0 or 1.0")
            }
            ClassifError::OneHotShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "One-hot matrix shape mismatch: expected {expected:?}, actual {actual:?}"
                )
            }

            // ---- Prediction / evaluation ----
            ClassifError::PredictionLengthMismatch { predicted, actual } => {
                write!(
                    f,
                    "Predicted labels have length {predicted} but actual labels have length {actual}"
                )
            }
            ClassifError::ModelNotFitted => {
                write!(f, "Model has not been fitted yet")
            }
        }
    }
}
