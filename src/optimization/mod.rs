//! optimization — CG minimizer stack, numerical helpers, and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for model fitting, combining an
//! Argmin-backed nonlinear conjugate-gradient minimizer, numerically stable
//! probability transforms, and a single error/result surface. Callers
//! implement a loss, choose stopping rules, and obtain fitted parameters and
//! diagnostics without touching backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **minimizing losses** `L(θ)` ([`minimizer`]),
//!   including configuration of line searches, beta-update rules, and
//!   stopping criteria.
//! - Supply shared numerical primitives ([`numerical_stability`]) for mapping
//!   linear scores into well-conditioned probabilities (guarded sigmoid,
//!   row-wise softmax, probability clamping).
//! - Normalize configuration issues, numerical failures, and backend solver
//!   errors into a single enum ([`errors::OptError`]) with a common result
//!   alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Optimizers operate on a flat parameter vector `θ` and assume that
//!   inputs are finite once validation has passed; invalid states are
//!   reported as `OptError`, not panics.
//! - Loss implementations are expected to treat domain violations (e.g.,
//!   shape mismatches, non-finite features) as recoverable errors surfaced
//!   through the optimization layer.
//! - Hitting the iteration cap is a normal outcome: the best parameters
//!   found so far are reported, never an error.
//!
//! Conventions
//! -----------
//! - The solvers minimize the loss directly; no sign flips exist anywhere
//!   between the user objective and the backend.
//! - Parameters and gradients are represented using `ndarray`-based aliases
//!   (`Theta`, `Grad`); any mapping between the flat optimizer space and
//!   matrix-shaped model weights is handled by the classification layer.
//! - Public optimization entrypoints that can fail return `OptResult<T>`;
//!   callers never see raw Argmin errors or model-specific error enums.
//! - This module and its submodules avoid I/O and logging by default;
//!   optional per-iteration logging is available behind the `obs_slog`
//!   feature.
//!
//! Downstream usage
//! ----------------
//! - Classifier types implement [`minimizer::Objective`] and call
//!   [`minimizer::minimize`] with an initial weight vector, a data payload,
//!   and a [`minimizer::FitOptions`] to obtain an
//!   [`minimizer::OptimOutcome`].
//! - Classification objectives use [`numerical_stability`] for the guarded
//!   sigmoid, row-wise softmax, and probability clamping inside their loss
//!   and gradient evaluations.
//! - Front-ends typically import the curated surface via
//!   `optimization::prelude::*`, which forwards the submodule preludes and
//!   the core error types.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules focus on local concerns:
//!   - [`minimizer`]: solver wiring, option validation, gradient fallbacks,
//!     and convergence on toy objectives.
//!   - [`numerical_stability`]: agreement with naïve formulas on safe grids,
//!     tail saturation, and row normalization.
//!   - [`errors`]: conversions from backend/model errors into `OptError`.
//! - Higher-level integration tests exercise end-to-end fitting workflows
//!   through the classification layer.

pub mod errors;
pub mod minimizer;
pub mod numerical_stability;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_logreg::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::minimizer::prelude::*;
    pub use super::numerical_stability::prelude::*;
}
