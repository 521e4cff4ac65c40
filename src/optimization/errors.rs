use argmin::core::{ArgminError, Error};

use crate::classification::errors::ClassifError;

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Gradient ----
    /// Implies that FD should be used
    GradientNotImplemented,

    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- FitOptions ----
    /// Target cost needs to be finite.
    InvalidTargetCost {
        target: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// At least one stopping rule must be provided.
    NoStoppingRuleProvided,

    /// Invalid line searcher name.
    InvalidLineSearch {
        name: String,
        reason: &'static str,
    },

    /// Invalid conjugate-gradient beta-update rule name.
    InvalidBetaRule {
        name: String,
        reason: &'static str,
    },

    /// CG restart interval needs to be at least 1.
    InvalidRestartIters {
        iters: u64,
        reason: &'static str,
    },

    /// CG restart orthogonality threshold needs to be finite and positive.
    InvalidRestartOrthogonality {
        value: f64,
        reason: &'static str,
    },

    // ---- Cost function ----
    /// Cost function returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    // ---- Optimizer outcome ----
    /// Estimated parameters must be finite.
    InvalidBestParam {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Best parameter vector is missing
    MissingBestParam,

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Classification errors ----
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
    /// Feature dimension mismatch between data and weights.
    FeatureDimMismatch {
        expected: usize,
        actual: usize,
    },
    /// Any other model-layer failure surfaced during optimization.
    ModelError {
        text: String,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Gradient ----
            OptError::GradientNotImplemented => {
                write!(f, "Gradient optimization not implemented")
            }
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- FitOptions ----
            OptError::InvalidTargetCost { target, reason } => {
                write!(f, "Invalid target cost {target}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            OptError::NoStoppingRuleProvided => {
                write!(f, "No stopping rule provided")
            }
            OptError::InvalidLineSearch { name, reason } => {
                write!(f, "Invalid line searcher '{name}': {reason}")
            }
            OptError::InvalidBetaRule { name, reason } => {
                write!(f, "Invalid beta-update rule '{name}': {reason}")
            }
            OptError::InvalidRestartIters { iters, reason } => {
                write!(f, "Invalid CG restart interval {iters}: {reason}")
            }
            OptError::InvalidRestartOrthogonality { value, reason } => {
                write!(f, "Invalid CG restart orthogonality threshold {value}: {reason}")
            }

            // ---- Cost function ----
            OptError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Optimizer outcome ----
            OptError::InvalidBestParam { index, value, reason } => {
                write!(f, "Invalid estimated parameter at index {index}: {value}: {reason}")
            }
            OptError::MissingBestParam => {
                write!(f, "Missing estimated parameter vector")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Classification errors ----
            OptError::WeightLengthMismatch { expected, actual } => {
                write!(f, "Weight vector length mismatch: expected {expected}, actual {actual}")
            }
            OptError::WeightShapeMismatch { rows, cols, len } => {
                write!(
                    f,
                    "Cannot reshape flat weight vector of length {len} to ({rows}, {cols})"
                )
            }
            OptError::IndicatorLengthMismatch { expected, actual } => {
                write!(f, "Indicator length mismatch: expected {expected}, actual {actual}")
            }
            OptError::IndicatorNotBinary { index, value } => {
                write!(f, "Indicator entry at index {index} is {value}, must be 0.0 or 1.0")
            }
            OptError::FeatureDimMismatch { expected, actual } => {
                write!(f, "Feature dimension mismatch: expected {expected}, actual {actual}")
            }
            OptError::ModelError { text } => {
                write!(f, "Model error: {text}")
            }

            // ---- Fallback ----
            OptError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        match original_err.downcast() {
            Ok(opt_err) => match opt_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

impl From<ClassifError> for OptError {
    fn from(err: ClassifError) -> Self {
        match err {
            ClassifError::WeightLengthMismatch { expected, actual } => {
                OptError::WeightLengthMismatch { expected, actual }
            }
            ClassifError::WeightShapeMismatch { rows, cols, len } => {
                OptError::WeightShapeMismatch { rows, cols, len }
            }
            ClassifError::IndicatorLengthMismatch { expected, actual } => {
                OptError::IndicatorLengthMismatch { expected, actual }
            }
            ClassifError::IndicatorNotBinary { index, value } => {
                OptError::IndicatorNotBinary { index, value }
            }
            ClassifError::FeatureDimMismatch { expected, actual } => {
                OptError::FeatureDimMismatch { expected, actual }
            }
            other => OptError::ModelError { text: other.to_string() },
        }
    }
}
