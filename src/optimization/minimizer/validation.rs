//! Validation helpers for loss minimization.
//!
//! This module centralizes common consistency checks used across the
//! minimizer interface:
//!
//! - **Stopping-rule checks**: [`verify_target_cost`] ensures a target loss
//!   is finite when provided.
//! - **Gradient validation**: [`validate_grad`] enforces correct dimension
//!   and finite entries.
//! - **Parameter estimates**: [`validate_best_param`] ensures a candidate
//!   best parameter vector exists and contains only finite values.
//! - **Loss values**: [`validate_loss`] checks loss outputs for finiteness.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`OptError`] variants, making higher-level code more uniform and easier
//! to debug.
use crate::optimization::{
    errors::{OptError, OptResult},
    minimizer::{Grad, Theta},
};

/// Validate the optional target loss used as a stopping rule.
///
/// - Accepts `None` (no stopping rule on the loss value).
/// - If `Some`, the value must be **finite**. Zero and negative targets are
///   accepted; a loss bounded below by zero simply never reaches a negative
///   target, which degrades gracefully to the iteration cap.
///
/// # Errors
/// Returns [`OptError::InvalidTargetCost`] if the value is NaN or infinite.
pub fn verify_target_cost(target: Option<f64>) -> OptResult<()> {
    if let Some(target) = target {
        if !target.is_finite() {
            return Err(OptError::InvalidTargetCost {
                target,
                reason: "Target cost must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// Checks:
/// - `grad.len() == dim`
/// - every element is finite (`NaN` or `±∞` are rejected)
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] if length does not match `dim`.
/// - [`OptError::InvalidGradient`] with the index/value/reason of the first
///   offending element.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate and unwrap an estimated best parameter vector.
///
/// Accepts only a present vector with all **finite** entries.
///
/// # Returns
/// The owned `Theta` if valid.
///
/// # Errors
/// - [`OptError::MissingBestParam`] if no vector was provided.
/// - [`OptError::InvalidBestParam`] if any element is non-finite.
pub fn validate_best_param(best_param: Option<Theta>) -> OptResult<Theta> {
    match best_param {
        Some(t) => {
            for (index, &value) in t.iter().enumerate() {
                if !value.is_finite() {
                    return Err(OptError::InvalidBestParam {
                        index,
                        value,
                        reason: "Parameter estimates must be finite.",
                    });
                }
            }
            Ok(t)
        }
        None => Err(OptError::MissingBestParam),
    }
}

/// Validate that a scalar loss value is finite.
///
/// # Errors
/// Returns [`OptError::NonFiniteCost`] if the value is `NaN` or infinite.
pub fn validate_loss(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}
