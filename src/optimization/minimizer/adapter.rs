//! Adapter that exposes a user `Objective` as an `argmin` problem.
//!
//! The user implements a loss `L(θ)` that is minimized directly, so the
//! adapter forwards values and analytic gradients unchanged. If a gradient
//! is not provided, we finite-difference the loss closure.
use std::cell::RefCell;

use crate::optimization::{
    errors::OptError,
    minimizer::{
        traits::Objective,
        types::{Cost, Grad, Theta},
        validation::validate_grad,
    },
};
use argmin::core::{CostFunction, Error, Gradient};
use finitediff::FiniteDiff;

/// Bridges a user `Objective` to `argmin`'s `CostFunction` and `Gradient`.
///
/// - `CostFunction::cost` returns the loss `L(θ)`.
/// - `Gradient::gradient` returns:
///   - `∇L(θ)` if the user provides an analytic gradient, or
///   - a finite-difference gradient of the loss.
pub struct ArgMinAdapter<'a, F: Objective> {
    pub f: &'a F,
    pub data: &'a F::Data,
}

impl<'a, F: Objective> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the loss `L(θ)`.
    ///
    /// - Calls the user's `value(θ, data)` and checks the result is finite.
    /// - Returns `Error(NonFiniteCost)` if the value is not finite.
    ///
    /// # Errors
    /// Propagates any `OptError` from the user's `value` via `?`.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(theta, self.data)?;
        if !output.is_finite() {
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(output)
    }
}

impl<'a, F: Objective> Gradient for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Gradient = Grad;

    /// Evaluate the gradient of the loss at `θ`.
    ///
    /// Behavior:
    /// - If the user implements `grad(θ, data)`, we validate it and return it
    ///   as-is.
    /// - Otherwise, we compute a finite-difference gradient of the loss:
    ///   - Try *central* differences first.
    ///   - If any evaluation of the `cost` closure failed (captured via
    ///     `closure_err`), retry with *forward* differences.
    ///   - Validate the FD gradient; if it fails (e.g., non-finite), retry once
    ///     with *forward* differences and validate again.
    ///
    /// Implementation notes:
    /// - The FD closure must return `f64`, so we can't use `?` inside it; we
    ///   capture the first error in `closure_err` and return `NaN` from the
    ///   closure. After FD, we turn that captured error back into a real error
    ///   (or switch to forward diff).
    ///
    /// # Errors
    /// - Propagates user errors from `grad` (non-`GradientNotImplemented`).
    /// - Propagates any error raised by loss evaluations performed during FD.
    /// - Returns validation errors if the gradient has wrong dimension or
    ///   non-finite entries.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        let dim = theta.len();
        match self.f.grad(theta, self.data) {
            Ok(g) => {
                validate_grad(&g, dim)?;
                Ok(g)
            }
            Err(e) => {
                let closure_err: RefCell<Option<Error>> = RefCell::new(None);
                match e {
                    OptError::GradientNotImplemented => {
                        let cost_func = |theta: &Theta| -> f64 {
                            match self.cost(theta) {
                                Ok(val) => val,
                                Err(e) => {
                                    let mut slot = closure_err.borrow_mut();
                                    if slot.is_none() {
                                        *slot = Some(e);
                                    }
                                    f64::NAN
                                }
                            }
                        };
                        let mut fd_grad = theta.central_diff(&cost_func);
                        if closure_err.borrow().is_some() {
                            fd_grad = run_fd_diff(theta, &cost_func, &closure_err)?;
                            return Ok(fd_grad);
                        }
                        match validate_grad(&fd_grad, dim) {
                            Ok(()) => Ok(fd_grad),
                            Err(_) => {
                                fd_grad = run_fd_diff(theta, &cost_func, &closure_err)?;
                                Ok(fd_grad)
                            }
                        }
                    }
                    _ => Err(e.into()),
                }
            }
        }
    }
}

impl<'a, F: Objective> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a user `Objective` and its data.
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data }
    }
}

/// Compute a forward-difference gradient of `func` at `theta`, with error capture.
///
/// The FD closure can't return `Result`, so any error raised by `func` is
/// stored into `closure_err` and the closure returns `NaN`. This helper:
/// - clears `closure_err`,
/// - performs `forward_diff`,
/// - if an error was captured, returns it as `Err`,
/// - validates the resulting gradient,
/// - if validation succeeds, returns the gradient as `Ok(grad)`.
///
/// # Errors
/// Returns any error captured during evaluation of `func` inside the FD routine
/// or by validation of the resulting gradient.
fn run_fd_diff<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> Result<Grad, Error> {
    closure_err.replace(None);
    let fd_grad = theta.forward_diff(func);
    let dim = theta.len();
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    validate_grad(&fd_grad, dim)?;
    Ok(fd_grad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptResult;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Forwarding of analytic values and gradients without sign changes.
    // - The finite-difference fallback when `grad` is not implemented.
    //
    // They intentionally DO NOT cover:
    // - Full solver runs (see `api` tests and the integration suite).
    // -------------------------------------------------------------------------

    /// Quadratic bowl `L(θ) = θ·θ` with an analytic gradient `2θ`.
    struct QuadraticWithGrad;

    impl Objective for QuadraticWithGrad {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            Ok(theta.dot(theta))
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }

        fn grad(&self, theta: &Theta, _data: &()) -> OptResult<Grad> {
            Ok(2.0 * theta)
        }
    }

    /// Same bowl without an analytic gradient, forcing the FD fallback.
    struct QuadraticNoGrad;

    impl Objective for QuadraticNoGrad {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            Ok(theta.dot(theta))
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that cost and analytic gradient pass through unchanged (the
    // minimizer works on the loss directly, no negation).
    //
    // Given
    // -----
    // - `QuadraticWithGrad` at `θ = [1, -2]`.
    //
    // Expect
    // ------
    // - `cost = 5.0` and `gradient = [2, -4]`.
    fn adapter_forwards_value_and_analytic_gradient() {
        let f = QuadraticWithGrad;
        let adapter = ArgMinAdapter::new(&f, &());
        let theta = array![1.0, -2.0];

        let cost = adapter.cost(&theta).expect("cost should evaluate");
        let grad = adapter.gradient(&theta).expect("gradient should evaluate");

        assert_abs_diff_eq!(cost, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(grad[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(grad[1], -4.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify the finite-difference fallback approximates the true gradient
    // when `grad` is not implemented.
    //
    // Given
    // -----
    // - `QuadraticNoGrad` at `θ = [0.3, -0.7]`, true gradient `[0.6, -1.4]`.
    //
    // Expect
    // ------
    // - FD gradient agrees with the analytic one within 1e-4.
    fn adapter_falls_back_to_finite_differences() {
        let f = QuadraticNoGrad;
        let adapter = ArgMinAdapter::new(&f, &());
        let theta = array![0.3, -0.7];

        let grad = adapter.gradient(&theta).expect("FD gradient should evaluate");

        assert_abs_diff_eq!(grad[0], 0.6, epsilon = 1e-4);
        assert_abs_diff_eq!(grad[1], -1.4, epsilon = 1e-4);
    }
}
