//! Public API surface for loss minimization.
//!
//! - [`Objective`]: trait users implement for their model.
//! - [`FitOptions`] and [`Tolerances`]: configuration for the optimizer.
//! - [`LineSearcher`] / [`BetaRule`]: choice of line search and beta update
//!   used by the nonlinear conjugate-gradient solver.
//! - [`OptimOutcome`]: normalized result returned by the high-level
//!   `minimize` API.
//!
//! Convention: the solver *minimizes* a user loss `L(θ)` directly. If an
//! analytic gradient is provided, it should be the gradient of the loss
//! (`∇L(θ)`); no sign conventions apply anywhere in this layer.
use crate::optimization::{
    errors::{OptError, OptResult},
    minimizer::{
        Cost, FnEvalMap, Grad, Theta,
        types::DEFAULT_MAX_ITER,
        validation::{validate_best_param, validate_loss, verify_target_cost},
    },
};
use argmin::core::TerminationStatus;
use argmin_math::ArgminL2Norm;
use std::str::FromStr;

/// User-implemented loss interface.
///
/// The minimizer drives `L(θ)` downhill. If you provide an analytic
/// gradient, return the gradient of the loss `∇L(θ)`.
///
/// - `type Data`: per-model data carried into `value`/`grad`/`check`.
///
/// Required:
/// - `value(&Theta, &Data) -> OptResult<Cost>`: evaluate `L(θ)`.
///   - Errors: return a descriptive `OptError` for invalid inputs or model failures.
/// - `check(&Theta, &Data) -> OptResult<()>`: validation hook to reject
///   obviously invalid `θ`/`data` pairs. Called once before optimization.
///
/// Optional:
/// - `grad(&Theta, &Data) -> OptResult<Grad>`: analytic gradient `∇L(θ)`.
///   If not implemented, robust finite differences are used automatically.
pub trait Objective {
    type Data: 'static;

    // Required methods
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()>;

    // Optional methods
    fn grad(&self, _theta: &Theta, _data: &Self::Data) -> OptResult<Grad> {
        Err(OptError::GradientNotImplemented)
    }
}

/// Choice of line search used inside the nonlinear CG solver.
///
/// Variants:
/// - `MoreThuente`: More–Thuente line search.
/// - `HagerZhang`: Hager–Zhang line search.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"MoreThuente"`, `"HagerZhang"`). Unknown names return
/// `OptError::InvalidLineSearch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSearcher {
    MoreThuente,
    HagerZhang,
}

impl FromStr for LineSearcher {
    type Err = OptError;

    /// Parse a line-search choice from a string (case-insensitive).
    ///
    /// Accepts `"MoreThuente"`, `"HagerZhang"`, and any case variant. Any
    /// other value returns `OptError::InvalidLineSearch`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morethuente" => Ok(LineSearcher::MoreThuente),
            "hagerzhang" => Ok(LineSearcher::HagerZhang),
            _ => Err(OptError::InvalidLineSearch {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'MoreThuente' or 'HagerZhang'.",
            }),
        }
    }
}

/// Choice of beta-update rule for the nonlinear CG direction.
///
/// Variants:
/// - `PolakRibiere`: Polak–Ribière update (default; restarts well on
///   non-quadratic objectives).
/// - `FletcherReeves`: Fletcher–Reeves update.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names.
/// Unknown names return `OptError::InvalidBetaRule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetaRule {
    PolakRibiere,
    FletcherReeves,
}

impl FromStr for BetaRule {
    type Err = OptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "polakribiere" => Ok(BetaRule::PolakRibiere),
            "fletcherreeves" => Ok(BetaRule::FletcherReeves),
            _ => Err(OptError::InvalidBetaRule {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'PolakRibiere' or 'FletcherReeves'.",
            }),
        }
    }
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `tols: Tolerances` — stopping rules (target cost, iteration cap).
/// - `line_searcher: LineSearcher` — line-search algorithm used by CG.
/// - `beta_rule: BetaRule` — CG beta-update rule.
/// - `restart_iters: Option<u64>` — periodic CG restart interval.
/// - `restart_orthogonality: Option<f64>` — restart when successive
///   gradients lose orthogonality beyond this threshold.
/// - `verbose: bool` — if `true`, attaches an observer (behind the
///   `obs_slog` feature) and prints progress.
///
/// Default:
/// - `tols`: `target_cost = None`, `max_iter = 100`
/// - `line_searcher`: `MoreThuente`
/// - `beta_rule`: `PolakRibiere`
/// - no restarts, `verbose = false`
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    pub tols: Tolerances,
    pub line_searcher: LineSearcher,
    pub beta_rule: BetaRule,
    pub restart_iters: Option<u64>,
    pub restart_orthogonality: Option<f64>,
    pub verbose: bool,
}

impl FitOptions {
    /// Create a new set of optimizer options.
    ///
    /// Validation of the stopping rules is performed inside
    /// [`Tolerances::new`]; this constructor only checks the CG restart
    /// settings.
    ///
    /// # Errors
    /// - `OptError::InvalidRestartIters` if `restart_iters == Some(0)`.
    /// - `OptError::InvalidRestartOrthogonality` if the threshold is
    ///   non-finite or not strictly positive.
    pub fn new(
        tols: Tolerances, line_searcher: LineSearcher, beta_rule: BetaRule,
        restart_iters: Option<u64>, restart_orthogonality: Option<f64>, verbose: bool,
    ) -> OptResult<Self> {
        if let Some(iters) = restart_iters {
            if iters == 0 {
                return Err(OptError::InvalidRestartIters {
                    iters,
                    reason: "CG restart interval must be at least one iteration.",
                });
            }
        }
        if let Some(v) = restart_orthogonality {
            if !v.is_finite() || v <= 0.0 {
                return Err(OptError::InvalidRestartOrthogonality {
                    value: v,
                    reason: "Restart orthogonality threshold must be finite and positive.",
                });
            }
        }
        Ok(Self { tols, line_searcher, beta_rule, restart_iters, restart_orthogonality, verbose })
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances { target_cost: None, max_iter: Some(DEFAULT_MAX_ITER) },
            line_searcher: LineSearcher::MoreThuente,
            beta_rule: BetaRule::PolakRibiere,
            restart_iters: None,
            restart_orthogonality: None,
            verbose: false,
        }
    }
}

/// Stopping rules used by the optimizer.
///
/// - `target_cost`: terminate once the loss falls to or below this value.
/// - `max_iter`: hard cap on the number of iterations.
///
/// Either field can be `None` but **at least one** of the two must be
/// provided (see [`Tolerances::new`]). Hitting `max_iter` is not a failure:
/// the solver returns its best current estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub target_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated stopping rules.
    ///
    /// # Rules
    /// - At least one of `target_cost` or `max_iter` must be `Some`.
    /// - If provided, `target_cost` must be **finite**.
    /// - If provided, `max_iter` must be `> 0`.
    ///
    /// # Errors
    /// - [`OptError::NoStoppingRuleProvided`] if both are `None`.
    /// - [`OptError::InvalidTargetCost`] for a non-finite target.
    /// - `OptError::InvalidMaxIter` if `max_iter == 0`.
    pub fn new(target_cost: Option<f64>, max_iter: Option<usize>) -> OptResult<Self> {
        if target_cost.is_none() && max_iter.is_none() {
            return Err(OptError::NoStoppingRuleProvided);
        }
        verify_target_cost(target_cost)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(OptError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { target_cost, max_iter })
    }
}

/// Canonical result returned by `minimize`.
///
/// - `best_param`: best weight vector found.
/// - `best_loss`: best loss value `L(θ̂)` reached by the solver.
/// - `converged`: `true` if the solver reported a terminating status other
///   than `NotTerminated`. Note that reaching the iteration cap counts as a
///   terminating status: optimization is best-effort, and the caller still
///   receives the best estimate.
/// - `status`: human-readable termination status string.
/// - `iterations`: number of optimizer iterations performed.
/// - `fn_evals`: function-evaluation counters reported by `argmin`.
/// - `grad_norm`: norm of the last available gradient, if present.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub best_param: Theta,
    pub best_loss: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_norm: Option<f64>,
}

impl OptimOutcome {
    /// Build a validated [`OptimOutcome`] from raw solver state.
    ///
    /// Performs:
    /// - `best_param` check via `validate_best_param` (present and all finite).
    /// - `best_loss` check via `validate_loss` (finite).
    /// - Maps `TerminationStatus` into `(converged, status)`.
    /// - Computes `grad_norm` if a gradient was provided.
    ///
    /// # Errors
    /// - Propagates any validation errors for `best_param` or `best_loss`.
    pub fn new(
        best_param_opt: Option<Theta>, best_loss: f64, termination: TerminationStatus,
        iterations: u64, fn_evals: FnEvalMap, grad: Option<Grad>,
    ) -> OptResult<Self> {
        let best_param = validate_best_param(best_param_opt)?;
        validate_loss(best_loss)?;
        let status: String;
        let converged = match termination {
            TerminationStatus::NotTerminated => {
                status = "Not terminated".to_string();
                false
            }
            _ => {
                status = format!("{termination:?}");
                true
            }
        };
        let iterations = iterations as usize;
        let grad_norm = grad.map(|g| g.l2_norm());
        Ok(Self { best_param, best_loss, converged, status, iterations, fn_evals, grad_norm })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argmin::core::TerminationReason;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Validation rules in `Tolerances::new` and `FitOptions::new`.
    // - `FromStr` parsing of `LineSearcher` and `BetaRule`.
    // - `OptimOutcome::new` mapping of termination statuses and validation
    //   of the best parameter vector.
    //
    // They intentionally DO NOT cover:
    // - End-to-end solver behavior (see the `api` and integration tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure `Tolerances::new` rejects the configuration with no stopping
    // rule at all.
    //
    // Given
    // -----
    // - `target_cost = None`, `max_iter = None`.
    //
    // Expect
    // ------
    // - `Err(OptError::NoStoppingRuleProvided)`.
    fn tolerances_require_at_least_one_stopping_rule() {
        let result = Tolerances::new(None, None);

        assert_eq!(result.unwrap_err(), OptError::NoStoppingRuleProvided);
    }

    #[test]
    // Purpose
    // -------
    // Ensure `Tolerances::new` rejects a zero iteration cap and a
    // non-finite target cost.
    //
    // Given
    // -----
    // - `max_iter = Some(0)` in one call.
    // - `target_cost = Some(NaN)` in the other.
    //
    // Expect
    // ------
    // - `InvalidMaxIter` and `InvalidTargetCost` respectively.
    fn tolerances_reject_invalid_values() {
        let zero_iter = Tolerances::new(None, Some(0));
        assert!(matches!(zero_iter.unwrap_err(), OptError::InvalidMaxIter { max_iter: 0, .. }));

        let nan_target = Tolerances::new(Some(f64::NAN), None);
        assert!(matches!(nan_target.unwrap_err(), OptError::InvalidTargetCost { .. }));
    }

    #[test]
    // Purpose
    // -------
    // Verify that `FitOptions::new` accepts valid restart settings and
    // rejects a zero restart interval.
    //
    // Given
    // -----
    // - Valid `Tolerances` with `max_iter = Some(50)`.
    // - One call with `restart_iters = Some(10)`, one with `Some(0)`.
    //
    // Expect
    // ------
    // - `Ok(_)` for the positive interval, `InvalidRestartIters` for zero.
    fn fit_options_validate_restart_interval() {
        let tols = Tolerances::new(None, Some(50)).expect("Tolerances should be valid");

        let valid = FitOptions::new(
            tols,
            LineSearcher::MoreThuente,
            BetaRule::PolakRibiere,
            Some(10),
            None,
            false,
        );
        assert!(valid.is_ok());

        let invalid = FitOptions::new(
            tols,
            LineSearcher::MoreThuente,
            BetaRule::PolakRibiere,
            Some(0),
            None,
            false,
        );
        assert!(matches!(invalid.unwrap_err(), OptError::InvalidRestartIters { iters: 0, .. }));
    }

    #[test]
    // Purpose
    // -------
    // Verify that `FitOptions::new` rejects non-positive or non-finite
    // restart orthogonality thresholds.
    //
    // Given
    // -----
    // - Valid `Tolerances`.
    // - `restart_orthogonality = Some(-0.1)`.
    //
    // Expect
    // ------
    // - `Err(OptError::InvalidRestartOrthogonality { .. })`.
    fn fit_options_reject_negative_orthogonality_threshold() {
        let tols = Tolerances::new(None, Some(50)).expect("Tolerances should be valid");

        let result = FitOptions::new(
            tols,
            LineSearcher::HagerZhang,
            BetaRule::FletcherReeves,
            None,
            Some(-0.1),
            false,
        );

        assert!(matches!(result.unwrap_err(), OptError::InvalidRestartOrthogonality { .. }));
    }

    #[test]
    // Purpose
    // -------
    // Check that the default options match the documented configuration,
    // in particular the 100-iteration cap.
    //
    // Given
    // -----
    // - `FitOptions::default()`.
    //
    // Expect
    // ------
    // - `max_iter = Some(100)`, More–Thuente line search, Polak–Ribière
    //   beta, no restarts, not verbose.
    fn fit_options_default_uses_hundred_iteration_cap() {
        let opts = FitOptions::default();

        assert_eq!(opts.tols.max_iter, Some(100));
        assert_eq!(opts.tols.target_cost, None);
        assert_eq!(opts.line_searcher, LineSearcher::MoreThuente);
        assert_eq!(opts.beta_rule, BetaRule::PolakRibiere);
        assert_eq!(opts.restart_iters, None);
        assert!(!opts.verbose);
    }

    #[test]
    // Purpose
    // -------
    // Verify case-insensitive parsing of line-search and beta-rule names
    // and rejection of unknown names.
    //
    // Given
    // -----
    // - Mixed-case valid names and one invalid name per enum.
    //
    // Expect
    // ------
    // - Valid names parse to the matching variant; unknown names return
    //   the enum-specific error.
    fn enum_parsing_is_case_insensitive() {
        assert_eq!("morethuente".parse::<LineSearcher>().unwrap(), LineSearcher::MoreThuente);
        assert_eq!("HAGERZHANG".parse::<LineSearcher>().unwrap(), LineSearcher::HagerZhang);
        assert!(matches!(
            "newton".parse::<LineSearcher>().unwrap_err(),
            OptError::InvalidLineSearch { .. }
        ));

        assert_eq!("PolakRibiere".parse::<BetaRule>().unwrap(), BetaRule::PolakRibiere);
        assert_eq!("fletcherreeves".parse::<BetaRule>().unwrap(), BetaRule::FletcherReeves);
        assert!(matches!(
            "daiyuan".parse::<BetaRule>().unwrap_err(),
            OptError::InvalidBetaRule { .. }
        ));
    }

    #[test]
    // Purpose
    // -------
    // Ensure `OptimOutcome::new` treats a max-iterations termination as a
    // terminated (best-effort) outcome rather than an error.
    //
    // Given
    // -----
    // - A finite parameter vector and loss.
    // - `TerminationStatus::Terminated(TerminationReason::MaxItersReached)`.
    //
    // Expect
    // ------
    // - `Ok(outcome)` with `converged = true` and the reason recorded in
    //   `status`.
    fn optim_outcome_accepts_max_iters_termination() {
        let outcome = OptimOutcome::new(
            Some(array![0.5, -0.5]),
            1.25,
            TerminationStatus::Terminated(TerminationReason::MaxItersReached),
            100,
            FnEvalMap::new(),
            None,
        )
        .expect("outcome should be valid");

        assert!(outcome.converged);
        assert!(outcome.status.contains("MaxItersReached"));
        assert_eq!(outcome.iterations, 100);
        assert_eq!(outcome.grad_norm, None);
    }

    #[test]
    // Purpose
    // -------
    // Ensure `OptimOutcome::new` rejects a missing or non-finite best
    // parameter vector.
    //
    // Given
    // -----
    // - One call with `best_param_opt = None`.
    // - One call with a NaN entry in the vector.
    //
    // Expect
    // ------
    // - `MissingBestParam` and `InvalidBestParam` respectively.
    fn optim_outcome_rejects_invalid_parameters() {
        let missing = OptimOutcome::new(
            None,
            0.0,
            TerminationStatus::NotTerminated,
            0,
            FnEvalMap::new(),
            None,
        );
        assert_eq!(missing.unwrap_err(), OptError::MissingBestParam);

        let non_finite = OptimOutcome::new(
            Some(array![0.0, f64::NAN]),
            0.0,
            TerminationStatus::NotTerminated,
            0,
            FnEvalMap::new(),
            None,
        );
        assert!(matches!(non_finite.unwrap_err(), OptError::InvalidBestParam { index: 1, .. }));
    }
}
