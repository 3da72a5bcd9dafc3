//! Brent's method on a closed bracket.

use crate::error::SolverError;
use tracing::{debug, trace};

/// Bracketed solver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BracketConfig {
    /// Absolute tolerance on the root location
    pub x_tol: f64,
    /// Residual magnitude accepted as converged (0 disables)
    pub f_tol: f64,
    /// Maximum iterations
    pub max_iterations: usize,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            x_tol: 1e-10,
            f_tol: 0.0,
            max_iterations: 100,
        }
    }
}

/// Converged bracketed solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BracketReport {
    /// Root estimate
    pub root: f64,
    /// Residual at the root estimate
    pub residual: f64,
    /// Number of residual evaluations after the two endpoints
    pub iterations: usize,
}

/// Find a root of `f` in `[lo, hi]` with Brent's method.
///
/// Combines bisection, secant and inverse quadratic interpolation while
/// keeping the root bracketed. `f(lo)` and `f(hi)` must differ in sign (or
/// one of them be exactly zero).
///
/// Errors raised by `f` are returned unchanged; solver failures are converted
/// into the caller's error type through `From<SolverError>`.
pub fn brent<F, E>(mut f: F, lo: f64, hi: f64, config: &BracketConfig) -> Result<BracketReport, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<SolverError>,
{
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(SolverError::InvalidBracket { lo, hi }.into());
    }

    let mut eval = |x: f64| -> Result<f64, E> {
        let fx = f(x)?;
        if fx.is_nan() {
            return Err(SolverError::NonFinite { x, value: fx }.into());
        }
        Ok(fx)
    };

    let mut a = lo;
    let mut b = hi;
    let mut fa = eval(a)?;
    let mut fb = eval(b)?;

    if fa == 0.0 {
        return Ok(BracketReport {
            root: a,
            residual: fa,
            iterations: 0,
        });
    }
    if fb == 0.0 {
        return Ok(BracketReport {
            root: b,
            residual: fb,
            iterations: 0,
        });
    }
    if fa.signum() == fb.signum() {
        return Err(SolverError::NoSignChange {
            lo,
            hi,
            f_lo: fa,
            f_hi: fb,
        }
        .into());
    }

    // c is the previous iterate on the far side of the root from b
    let mut c = a;
    let mut fc = fa;

    for iter in 0..config.max_iterations {
        let prev_step = b - a;

        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol_act = 2.0 * f64::EPSILON * b.abs() + 0.5 * config.x_tol;
        let mut new_step = 0.5 * (c - b);

        if new_step.abs() <= tol_act || fb == 0.0 || fb.abs() <= config.f_tol {
            debug!(root = b, residual = fb, iterations = iter, "brent converged");
            return Ok(BracketReport {
                root: b,
                residual: fb,
                iterations: iter,
            });
        }

        // Try interpolation when the last step was large enough and improved the residual
        if prev_step.abs() >= tol_act && fa.abs() > fb.abs() {
            let cb = c - b;
            let mut p: f64;
            let mut q: f64;
            if a == c {
                // Secant
                let t1 = fb / fa;
                p = cb * t1;
                q = 1.0 - t1;
            } else {
                // Inverse quadratic
                let qa = fa / fc;
                let t1 = fb / fc;
                let t2 = fb / fa;
                p = t2 * (cb * qa * (qa - t1) - (b - a) * (t1 - 1.0));
                q = (qa - 1.0) * (t1 - 1.0) * (t2 - 1.0);
            }
            if p > 0.0 {
                q = -q;
            } else {
                p = -p;
            }

            if p < 0.75 * cb * q - 0.5 * (tol_act * q).abs() && p < (0.5 * prev_step * q).abs() {
                new_step = p / q;
            }
        }

        if new_step.abs() < tol_act {
            new_step = tol_act.copysign(new_step);
        }

        a = b;
        fa = fb;
        b += new_step;
        fb = eval(b)?;
        trace!(iter, x = b, residual = fb, "brent step");

        if (fb > 0.0 && fc > 0.0) || (fb < 0.0 && fc < 0.0) {
            c = a;
            fc = fa;
        }
    }

    Err(SolverError::MaxIterations {
        iterations: config.max_iterations,
        best: b,
        residual: fb,
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SolverResult;

    fn ok(f: impl Fn(f64) -> f64) -> impl FnMut(f64) -> SolverResult<f64> {
        move |x| Ok(f(x))
    }

    #[test]
    fn simple_quadratic() {
        // Solve x^2 - 4 = 0 on [0, 5]
        let report = brent(ok(|x| x * x - 4.0), 0.0, 5.0, &BracketConfig::default()).unwrap();
        assert!((report.root - 2.0).abs() < 1e-9);
        assert!(report.iterations > 0);
    }

    #[test]
    fn decreasing_function() {
        let report = brent(ok(|x| 1.0 - x.exp()), -3.0, 2.0, &BracketConfig::default()).unwrap();
        assert!(report.root.abs() < 1e-9);
    }

    #[test]
    fn endpoint_root_is_returned_immediately() {
        let report = brent(ok(|x| x - 1.0), 1.0, 3.0, &BracketConfig::default()).unwrap();
        assert_eq!(report.root, 1.0);
        assert_eq!(report.iterations, 0);
    }

    #[test]
    fn no_sign_change_is_an_error() {
        let err = brent(ok(|x| x * x + 1.0), -1.0, 1.0, &BracketConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::NoSignChange { .. }));
    }

    #[test]
    fn inverted_bracket_is_rejected() {
        let err = brent(ok(|x| x), 1.0, -1.0, &BracketConfig::default()).unwrap_err();
        assert_eq!(err, SolverError::InvalidBracket { lo: 1.0, hi: -1.0 });
    }

    #[test]
    fn nan_residual_is_an_error() {
        let err = brent(
            ok(|x| if x > 0.5 { f64::NAN } else { x - 0.75 }),
            0.0,
            1.0,
            &BracketConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SolverError::NonFinite { .. }));
    }

    #[test]
    fn iteration_cap_is_reported() {
        let config = BracketConfig {
            max_iterations: 2,
            ..BracketConfig::default()
        };
        let err = brent(ok(|x| x.powi(3) - 2.0), 0.0, 100.0, &config).unwrap_err();
        assert!(matches!(err, SolverError::MaxIterations { iterations: 2, .. }));
    }

    #[test]
    fn residual_errors_pass_through() {
        #[derive(Debug, PartialEq)]
        enum Probe {
            Solver,
            Domain(f64),
        }
        impl From<SolverError> for Probe {
            fn from(_: SolverError) -> Self {
                Probe::Solver
            }
        }

        let err = brent(
            |x: f64| if x > 2.0 { Err(Probe::Domain(x)) } else { Ok(x) },
            -1.0,
            3.0,
            &BracketConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, Probe::Domain(3.0));
    }
}
