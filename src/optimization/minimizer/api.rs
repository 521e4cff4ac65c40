//! High-level entry point for minimizing a user-provided `Objective`.
//!
//! This selects a nonlinear conjugate-gradient solver for the configured
//! line-search / beta-rule combination, wraps the model in an
//! `ArgMinAdapter`, and delegates the run to `run_cg`.
use crate::optimization::{
    errors::OptResult,
    minimizer::{
        OptimOutcome, Theta,
        adapter::ArgMinAdapter,
        builders::{
            build_cg_hager_zhang_fr, build_cg_hager_zhang_pr, build_cg_more_thuente_fr,
            build_cg_more_thuente_pr,
        },
        run::run_cg,
        traits::{BetaRule, FitOptions, LineSearcher, Objective},
    },
};

/// Minimize a loss `L(θ)` using nonlinear conjugate gradient.
///
/// # Behavior
/// - Validates the initial guess via `f.check(theta0, data)`.
/// - Wraps `(f, data)` in an `ArgMinAdapter` exposing the loss and its
///   (analytic or finite-difference) gradient to `argmin`.
/// - Builds a nonlinear CG solver for the configured line search
///   (**More–Thuente** or **Hager–Zhang**) and beta rule (**Polak–Ribière**
///   or **Fletcher–Reeves**).
/// - Calls `run_cg`, which configures the executor (initial params, stopping
///   rules, optional observers) and returns an `OptimOutcome`.
///
/// # Parameters
/// - `f`: Your model implementing [`Objective`].
/// - `theta0`: Initial weight vector (consumed).
/// - `data`: Model data passed through to `value`/`grad`.
/// - `opts`: Optimizer options (stopping rules, solver choices, verbosity).
///
/// # Errors
/// - Propagates any error from `f.check`.
/// - Propagates runtime errors from `run_cg` (e.g., line search failures).
///   Reaching the iteration cap is **not** an error; the best estimate found
///   so far is returned in the outcome.
///
/// # Returns
/// An [`OptimOutcome`] containing `best_param`, the best loss value,
/// termination status, iteration counts, function evaluation counts, and
/// optionally the gradient norm.
pub fn minimize<F: Objective>(
    f: &F, theta0: Theta, data: &F::Data, opts: &FitOptions,
) -> OptResult<OptimOutcome> {
    f.check(&theta0, data)?;
    let problem = ArgMinAdapter::new(f, data);
    match (opts.line_searcher, opts.beta_rule) {
        (LineSearcher::MoreThuente, BetaRule::PolakRibiere) => {
            let solver = build_cg_more_thuente_pr(opts);
            run_cg(theta0, opts, problem, solver)
        }
        (LineSearcher::MoreThuente, BetaRule::FletcherReeves) => {
            let solver = build_cg_more_thuente_fr(opts);
            run_cg(theta0, opts, problem, solver)
        }
        (LineSearcher::HagerZhang, BetaRule::PolakRibiere) => {
            let solver = build_cg_hager_zhang_pr(opts);
            run_cg(theta0, opts, problem, solver)
        }
        (LineSearcher::HagerZhang, BetaRule::FletcherReeves) => {
            let solver = build_cg_hager_zhang_fr(opts);
            run_cg(theta0, opts, problem, solver)
        }
    }
}
