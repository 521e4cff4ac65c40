//! minimizer::builders — nonlinear conjugate-gradient solver construction.
//!
//! Purpose
//! -------
//! Provide small, focused builders for the nonlinear CG solvers used by the
//! loss minimizer. These helpers hide Argmin's generic wiring and apply
//! crate-level options (restart interval, orthogonality threshold) so that
//! higher-level code can request a configured solver without touching
//! Argmin-specific types.
//!
//! Key behaviors
//! -------------
//! - Construct nonlinear CG solvers for every supported combination of line
//!   search (Hager–Zhang / More–Thuente) and beta-update rule
//!   (Polak–Ribière / Fletcher–Reeves).
//! - Apply optional CG restart controls from [`FitOptions`] via a shared
//!   generic configuration helper.
//! - Leave the initial parameter vector, iteration cap, and target cost to
//!   the runner/executor layer, keeping these builders side-effect free.
//!
//! Conventions
//! -----------
//! - All solvers operate on the canonical numeric types [`Theta`], [`Grad`],
//!   and [`Cost`] as defined in [`minimizer::types`](crate::optimization::minimizer::types).
//! - The builders are infallible: Argmin's CG constructor and restart
//!   setters cannot reject the validated values stored in [`FitOptions`].
use argmin::solver::conjugategradient::{
    NonlinearConjugateGradient,
    beta::{FletcherReeves, PolakRibiere},
};

use crate::optimization::minimizer::{
    traits::FitOptions,
    types::{
        CgHagerZhangFr, CgHagerZhangPr, CgMoreThuenteFr, CgMoreThuentePr, Cost, HagerZhangLS,
        MoreThuenteLS, Theta,
    },
};

/// Construct nonlinear CG with More–Thuente line search and Polak–Ribière beta.
///
/// Applies the restart settings from `opts`; initial parameters and stopping
/// rules are configured by the runner (`run_cg`).
pub fn build_cg_more_thuente_pr(opts: &FitOptions) -> CgMoreThuentePr {
    let solver = NonlinearConjugateGradient::new(MoreThuenteLS::new(), PolakRibiere::new());
    configure_cg(solver, opts)
}

/// Construct nonlinear CG with More–Thuente line search and Fletcher–Reeves beta.
pub fn build_cg_more_thuente_fr(opts: &FitOptions) -> CgMoreThuenteFr {
    let solver = NonlinearConjugateGradient::new(MoreThuenteLS::new(), FletcherReeves::new());
    configure_cg(solver, opts)
}

/// Construct nonlinear CG with Hager–Zhang line search and Polak–Ribière beta.
pub fn build_cg_hager_zhang_pr(opts: &FitOptions) -> CgHagerZhangPr {
    let solver = NonlinearConjugateGradient::new(HagerZhangLS::new(), PolakRibiere::new());
    configure_cg(solver, opts)
}

/// Construct nonlinear CG with Hager–Zhang line search and Fletcher–Reeves beta.
pub fn build_cg_hager_zhang_fr(opts: &FitOptions) -> CgHagerZhangFr {
    let solver = NonlinearConjugateGradient::new(HagerZhangLS::new(), FletcherReeves::new());
    configure_cg(solver, opts)
}

/// configure_cg — apply optional restart controls to a CG solver.
///
/// Generic helper that wires crate-level restart options from [`FitOptions`]
/// into an existing nonlinear CG solver, regardless of the line-search and
/// beta-update types. When an option is `None`, the corresponding Argmin
/// setter is not called and Argmin's defaults remain in effect.
pub fn configure_cg<L, B>(
    mut solver: NonlinearConjugateGradient<Theta, L, B, Cost>, opts: &FitOptions,
) -> NonlinearConjugateGradient<Theta, L, B, Cost> {
    if let Some(iters) = opts.restart_iters {
        solver = solver.restart_iters(iters);
    }
    if let Some(v) = opts.restart_orthogonality {
        solver = solver.restart_orthogonality(v);
    }
    solver
}
