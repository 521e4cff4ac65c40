//! Weight-matrix flattening between model space and optimizer space.
//!
//! Purpose
//! -------
//! The multinomial objective is optimized over a flat vector of length
//! `(D + 1) · K`, while model code works with a `(D + 1) × K` weight matrix
//! (one column per class, row 0 the intercepts). These helpers perform the
//! round trip in **row-major** order, so the flat layout is
//! `[w_{0,0}, w_{0,1}, …, w_{0,K-1}, w_{1,0}, …]`.
//!
//! Conventions
//! -----------
//! - Row-major everywhere; `unflatten_weights(flatten_weights(W)) == W`.
//! - Length mismatches fail fast with the expected shape rather than
//!   silently truncating or broadcasting.
use crate::classification::errors::{ClassifError, ClassifResult};
use ndarray::{Array1, Array2, ArrayView2};

/// Flatten a `(D + 1) × K` weight matrix into a row-major vector.
pub fn flatten_weights(weights: ArrayView2<'_, f64>) -> Array1<f64> {
    Array1::from_iter(weights.iter().copied())
}

/// Reshape a flat row-major vector back into a `rows × cols` weight matrix.
///
/// # Errors
/// - [`ClassifError::WeightShapeMismatch`] if `flat.len() != rows * cols`.
pub fn unflatten_weights(
    flat: &Array1<f64>, rows: usize, cols: usize,
) -> ClassifResult<Array2<f64>> {
    if flat.len() != rows * cols {
        return Err(ClassifError::WeightShapeMismatch { rows, cols, len: flat.len() });
    }
    let matrix = Array2::from_shape_vec((rows, cols), flat.to_vec())
        .map_err(|_| ClassifError::WeightShapeMismatch { rows, cols, len: flat.len() })?;
    Ok(matrix)
}
