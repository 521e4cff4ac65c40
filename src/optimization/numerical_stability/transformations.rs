//! Numerical stability utilities.
//!
//! Provides safe implementations of the nonlinear transforms used by the
//! logistic-regression objectives, which are prone to overflow/underflow
//! in naïve form. The functions here follow guarded strategies similar to
//! those in major ML libraries (e.g. PyTorch, TensorFlow), using explicit
//! branch cutoffs to keep `f64` arithmetic in a well-conditioned regime.
//!
//! # Provided items
//! - [`PROB_EPSILON`]: a small ε clamp (default 1e-10) keeping
//!   probabilities strictly inside `(0, 1)` before they enter a `ln`.
//! - [`safe_sigmoid(x)`]: stable version of `1 / (1 + exp(-x))`,
//!   mapping ℝ → (0, 1) without overflow in either tail.
//! - [`clamp_probability(p)`]: clips a probability into
//!   `[PROB_EPSILON, 1 − PROB_EPSILON]`.
//! - [`row_softmax(scores)`]: row-wise softmax over a score matrix with a
//!   per-row max shift, so each row sums to one regardless of score scale.
//!
//! # Rationale
//! Cross-entropy losses evaluate `ln(θ)` and `ln(1 − θ)`; without the
//! clamp, a saturated sigmoid or softmax produces an exact 0 or 1 and the
//! loss becomes `-inf`. The max-shifted softmax keeps `exp` arguments
//! non-positive, so large scores never overflow.

use ndarray::{Array2, ArrayView2};

/// Clamp width keeping probabilities strictly inside the open unit interval.
///
/// Cross-entropy terms `ln(θ)` and `ln(1 − θ)` diverge at the endpoints, so
/// every probability that feeds a logarithm is first clipped into
/// `[PROB_EPSILON, 1 − PROB_EPSILON]`. Gradients use the unclamped
/// probabilities; only the loss value is protected.
pub const PROB_EPSILON: f64 = 1e-10;

/// Numerically stable logistic sigmoid: `σ(x) = 1 / (1 + exp(-x))`.
///
/// Evaluates the sigmoid without overflow in either tail by branching on
/// the sign of `x`:
///
/// - For `x >= 0`, uses `1 / (1 + exp(-x))`, where `exp(-x)` cannot
///   overflow.
/// - For `x < 0`, uses the algebraically equivalent
///   `exp(x) / (1 + exp(x))`, where `exp(x)` cannot overflow.
///
/// Both branches underflow gracefully: deep in the tails the result
/// saturates at exactly `0.0` or `1.0`, which callers clamp via
/// [`clamp_probability`] before taking logarithms.
///
/// # Parameters
/// - `x`: real input (a linear score `w·x`).
///
/// # Returns
/// - `σ(x)` in `[0, 1]` as `f64`.
pub fn safe_sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Clip a probability into `[PROB_EPSILON, 1 − PROB_EPSILON]`.
///
/// Saturated sigmoid/softmax outputs reach exactly 0 or 1 in `f64`; this
/// clamp keeps the subsequent `ln` finite.
///
/// # Parameters
/// - `p`: a probability in `[0, 1]`.
///
/// # Returns
/// - `p` clipped to the closed interval `[PROB_EPSILON, 1 − PROB_EPSILON]`.
pub fn clamp_probability(p: f64) -> f64 {
    p.clamp(PROB_EPSILON, 1.0 - PROB_EPSILON)
}

/// Row-wise softmax with per-row max shift.
///
/// For each row `s` of `scores`, computes
/// `softmax(s)_k = exp(s_k − max(s)) / Σ_j exp(s_j − max(s))`,
/// so that every exponent is non-positive and each row of the result sums
/// to one. Normalization is strictly per row: scores in one row never
/// influence probabilities in another.
///
/// # Parameters
/// - `scores`: an `N × K` matrix of linear scores (one row per sample,
///   one column per class).
///
/// # Returns
/// - An `N × K` matrix of class probabilities; each row sums to 1.
pub fn row_softmax(scores: ArrayView2<'_, f64>) -> Array2<f64> {
    let mut probs = scores.to_owned();
    for mut row in probs.rows_mut() {
        let max = row.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        row.mapv_inplace(|s| (s - max).exp());
        let sum = row.sum();
        row.mapv_inplace(|e| e / sum);
    }
    probs
}
