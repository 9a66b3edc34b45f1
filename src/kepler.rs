use log::{trace, warn};

use crate::constants::{Degree, Radian, FULL_TURN};
use crate::moonphase_errors::MoonPhaseError;

/// Outcome of a converged Kepler solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly E (radians)
    pub eccentric_anomaly: Radian,
    /// Number of Newton updates applied before the residual fell under tolerance
    pub iterations: usize,
    /// Final residual `E − e·sin(E) − M`
    pub residual: f64,
}

/// Reduce an angle in degrees into [0, 360) by subtracting `⌊a/360⌋·360`.
///
/// For tiny negative inputs the subtraction can round up to exactly 360.0; callers that need
/// a strict bound must fold that case themselves.
pub fn principal_degrees(a: Degree) -> Degree {
    a - (a / FULL_TURN).floor() * FULL_TURN
}

/// Solve Kepler's equation `E − e·sin(E) = M` for the eccentric anomaly with Newton–Raphson.
///
/// The iteration starts from `E = M` and stops as soon as `|E − e·sin(E) − M| < eps`,
/// so an already-converged seed returns with `iterations == 0`.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: M in radians
/// * `eccentricity`: e, expected in [0, 1)
/// * `eps`: absolute tolerance on the residual
/// * `max_iter`: maximum number of Newton updates
///
/// Return
/// ------
/// * the [`KeplerSolution`], or [`MoonPhaseError::KeplerNotConverged`] if the residual is still
///   above `eps` after `max_iter` updates (or became NaN).
pub fn solve_kepler(
    mean_anomaly: Radian,
    eccentricity: f64,
    eps: f64,
    max_iter: usize,
) -> Result<KeplerSolution, MoonPhaseError> {
    let mut e = mean_anomaly;
    let mut dl = e - eccentricity * e.sin() - mean_anomaly;

    for iterations in 0..=max_iter {
        if dl.abs() < eps {
            trace!("kepler: converged in {iterations} iterations, residual {dl:e}");
            return Ok(KeplerSolution {
                eccentric_anomaly: e,
                iterations,
                residual: dl,
            });
        }
        if iterations == max_iter || dl.is_nan() {
            break;
        }

        e -= dl / (1.0 - eccentricity * e.cos());
        dl = e - eccentricity * e.sin() - mean_anomaly;
    }

    warn!(
        "kepler: no convergence for M = {mean_anomaly}, e = {eccentricity} after {max_iter} iterations (residual {dl:e})"
    );
    Err(MoonPhaseError::KeplerNotConverged {
        iterations: max_iter,
        residual: dl,
    })
}
