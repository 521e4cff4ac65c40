//! minimizer — argmin-powered nonlinear conjugate-gradient loss minimizer.
//!
//! Purpose
//! -------
//! Provide a high-level, Argmin-backed optimization layer for **minimizing
//! losses** `L(θ)`. Callers implement a single trait, [`Objective`], and
//! invoke [`minimize`] to run nonlinear conjugate gradient with a
//! configurable line search, beta-update rule, stopping rules, and
//! finite-difference fallbacks.
//!
//! Key behaviors
//! -------------
//! - Bridge user-supplied objectives into Argmin via
//!   [`adapter::ArgMinAdapter`]; values and gradients pass through without
//!   sign changes.
//! - Expose a single, user-facing entrypoint [`minimize`] that:
//!   - validates the initial guess with [`Objective::check`],
//!   - selects a CG solver via [`builders`] based on
//!     [`traits::LineSearcher`] and [`traits::BetaRule`],
//!   - executes the solver via [`run::run_cg`], and
//!   - normalizes results into an [`OptimOutcome`].
//! - Centralize optimizer configuration ([`Tolerances`], [`FitOptions`]) and
//!   validation logic ([`validation`]) so downstream code can assume sane,
//!   finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer **always minimizes**; smaller loss is better, and there
//!   are no sign conventions to get wrong between layers.
//! - [`Objective::value`] and [`Objective::grad`] must treat invalid inputs
//!   as recoverable [`OptError`](crate::optimization::errors::OptError)
//!   values, not panics.
//! - Hitting the iteration cap is a normal, best-effort outcome: the best
//!   parameters found so far are returned, never an error.
//!
//! Conventions
//! -----------
//! - Parameters live in a flat optimizer space as [`Theta`] (`Array1<f64>`).
//!   Any mapping from matrix-shaped model weights to flat vectors happens in
//!   the model layer (see `classification::core::weights`).
//! - Errors bubble up as `OptResult<T>`; this module and its children never
//!   intentionally panic or use `unsafe`.
//!
//! Downstream usage
//! ----------------
//! - Classifier types implement [`Objective`] and call [`minimize`] with a
//!   model instance, an initial weight vector, a data payload, and a
//!   [`FitOptions`] configuration.
//! - Internal optimizer code uses [`adapter`] to bridge into Argmin,
//!   [`builders`] to construct CG solvers, and delegates execution to
//!   [`run::run_cg`].
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover gradient handling in [`adapter`], solver
//!   construction in [`builders`], validation behavior in [`validation`],
//!   configuration and outcome invariants in [`traits`], and convergence of
//!   [`minimize`] on toy objectives in [`api`].
//! - Integration tests exercise [`minimize`] through the logistic-regression
//!   classifiers.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize;
pub use self::traits::{BetaRule, FitOptions, LineSearcher, Objective, OptimOutcome, Tolerances};
pub use self::types::{Cost, DEFAULT_MAX_ITER, FnEvalMap, Grad, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_logreg::optimization::minimizer::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::minimize;
    pub use super::traits::{
        BetaRule, FitOptions, LineSearcher, Objective, OptimOutcome, Tolerances,
    };
    pub use super::types::{Cost, Grad, Theta};
}
