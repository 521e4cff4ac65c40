//! Execution helper that runs an `argmin` solver on a loss-minimization
//! problem and returns a crate-friendly [`OptimOutcome`].
use crate::optimization::{
    errors::OptResult,
    minimizer::{FitOptions, Grad, Objective, OptimOutcome, Theta, adapter::ArgMinAdapter},
};
#[cfg(feature = "obs_slog")]
use argmin::core::{CostFunction, Gradient};
use argmin::core::{Executor, State};
#[cfg(feature = "obs_slog")]
use argmin_math::ArgminL2Norm;

/// Run an `argmin` optimization for a loss-minimization problem.
///
/// This is the shared runner used by every line-search / beta-rule variant.
/// It wires up:
/// - the user model via [`ArgMinAdapter`],
/// - the chosen `Solver` (a nonlinear CG from
///   [`builders`](crate::optimization::minimizer::builders)),
/// - initial parameter `theta0`,
/// - optional observers (behind the `obs_slog` feature),
/// - the stopping rules from `opts.tols` (`max_iters`, `target_cost`),
///   then executes the solver and converts the result into [`OptimOutcome`].
///
/// # Arguments
/// - `theta0`: Initial weight vector. It is **consumed** and set on the
///   optimizer state via `state.param(theta0)`.
/// - `opts`: Optimizer options (stopping rules, verbosity, etc.).
/// - `problem`: An [`ArgMinAdapter`] wrapping the user's model and data.
/// - `solver`: A fully constructed solver from the builder layer.
///
/// # Returns
/// An [`OptimOutcome`] containing the best parameter found, the best loss
/// value, termination status, iteration count, function-evaluation counts,
/// and the last available gradient's norm if it can be calculated.
/// Termination at the iteration cap is a normal outcome: the best current
/// estimate is returned, never an error.
///
/// # Errors
/// - Propagates any `argmin` runtime error (observer failures, solver errors,
///   line-search failures, etc.) via the crate's `From<argmin::core::Error>`
///   conversion.
/// - Propagates any validation errors encountered when constructing
///   [`OptimOutcome`].
pub fn run_cg<'a, F, S>(
    theta0: Theta, opts: &FitOptions, problem: ArgMinAdapter<'a, F>, solver: S,
) -> OptResult<OptimOutcome>
where
    F: Objective,
    S: argmin::core::Solver<
            ArgMinAdapter<'a, F>,
            argmin::core::IterState<Theta, Grad, (), (), (), f64>,
        > + Send
        + 'static,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(&theta0, &problem)?;
    }
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(theta0));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }
    if let Some(target) = opts.tols.target_cost {
        optimizer = optimizer.configure(|state| state.target_cost(target));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let grad = result.take_gradient();
    OptimOutcome::new(
        result.take_best_param(),
        result.get_best_cost(),
        termination,
        iterations,
        function_counts,
        grad,
    )
}

// ---- Helper Methods ----

#[cfg(feature = "obs_slog")]
fn log_initial_state<F>(theta0: &Theta, problem: &ArgMinAdapter<'_, F>) -> OptResult<()>
where
    F: Objective,
{
    let loss0 = problem.cost(theta0)?;
    let g0n = problem.gradient(theta0).ok().map(|g| g.l2_norm());

    eprintln!(
        "init: loss(theta0) = {:.6}{}",
        loss0,
        g0n.map(|n| format!(", ||grad|| = {:.6}", n)).unwrap_or_default()
    );
    Ok(())
}
