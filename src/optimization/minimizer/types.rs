//! minimizer::types — shared numeric aliases and solver wiring.
//!
//! Purpose
//! -------
//! Centralize the core numeric types and solver aliases used by the loss
//! minimizer. By defining these in one place, the rest of the optimization
//! code can stay agnostic to `ndarray` and Argmin generics and can more
//! easily evolve if the backend changes.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for flat weight vectors, gradients, and scalar
//!   losses (`Theta`, `Grad`, `Cost`).
//! - Provide a standard map type for Argmin function-evaluation counters
//!   (`FnEvalMap`).
//! - Expose pre-wired nonlinear conjugate-gradient solver aliases for the
//!   supported line-search and beta-update combinations.
//!
//! Invariants & assumptions
//! ------------------------
//! - All optimizer vectors are represented as `ndarray` containers over
//!   `f64`.
//! - `Cost` is always a scalar `f64` loss; smaller is better, and the
//!   minimizer works on the loss directly (no sign flips anywhere).
//! - The solver aliases assume Argmin's `(Param, Gradient, Float)` forms as
//!   of the pinned Argmin version.
//!
//! Conventions
//! -----------
//! - `Theta` is the flat optimizer-space weight vector; matrix-shaped models
//!   reshape it at the boundary (see `classification::core::weights`).
//! - This module defines no runtime behavior beyond what `ndarray` and
//!   Argmin require when these types are instantiated elsewhere.
use argmin::solver::{
    conjugategradient::{
        NonlinearConjugateGradient,
        beta::{FletcherReeves, PolakRibiere},
    },
    linesearch::{HagerZhangLineSearch, MoreThuenteLineSearch},
};
use ndarray::Array1;
use std::collections::HashMap;

/// Flat weight vector `θ` in optimizer space.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical parameter type
/// throughout the minimizer.
pub type Theta = Array1<f64>;

/// Gradient vector `∇L(θ)` of the loss.
///
/// Alias for `ndarray::Array1<f64>`, matching the shape of `Theta`.
pub type Grad = Array1<f64>;

/// Scalar loss value used by the optimizer. Smaller is better.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps human-readable counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Default iteration cap applied when callers do not provide one.
pub const DEFAULT_MAX_ITER: usize = 100;

/// Hager–Zhang line search specialized to this crate's numeric types.
pub type HagerZhangLS = HagerZhangLineSearch<Theta, Grad, Cost>;

/// More–Thuente line search specialized to this crate's numeric types.
pub type MoreThuenteLS = MoreThuenteLineSearch<Theta, Grad, Cost>;

/// Nonlinear CG with More–Thuente line search and Polak–Ribière beta.
pub type CgMoreThuentePr = NonlinearConjugateGradient<Theta, MoreThuenteLS, PolakRibiere, Cost>;

/// Nonlinear CG with More–Thuente line search and Fletcher–Reeves beta.
pub type CgMoreThuenteFr = NonlinearConjugateGradient<Theta, MoreThuenteLS, FletcherReeves, Cost>;

/// Nonlinear CG with Hager–Zhang line search and Polak–Ribière beta.
pub type CgHagerZhangPr = NonlinearConjugateGradient<Theta, HagerZhangLS, PolakRibiere, Cost>;

/// Nonlinear CG with Hager–Zhang line search and Fletcher–Reeves beta.
pub type CgHagerZhangFr = NonlinearConjugateGradient<Theta, HagerZhangLS, FletcherReeves, Cost>;
