//! # Apparent solar longitude
//!
//! Ecliptic longitude of the Sun from a Julian offset, using a fixed elliptical orbit: the mean
//! anomaly grows uniformly over the tropical year, Kepler's equation gives the eccentric anomaly,
//! and the true anomaly is added to the longitude of perigee.
use log::trace;

use crate::{
    constants::{
        Degree, JulianOffset, FULL_TURN, RADEG, SUN_ECCENTRICITY, SUN_LONGITUDE_PERIGEE,
        SUN_MEAN_ANOMALY_OFFSET, SUN_TRUE_ANOMALY_RATIO, TROPICAL_YEAR,
    },
    kepler::{principal_degrees, solve_kepler},
    moonphase_errors::MoonPhaseError,
    params::PhaseParams,
};

/// Mean anomaly of the Sun (degrees, in [0, 360)) at Julian offset `j`.
pub fn sun_mean_anomaly(j: JulianOffset) -> Degree {
    let n = principal_degrees(FULL_TURN / TROPICAL_YEAR * j);
    let x = n - SUN_MEAN_ANOMALY_OFFSET;
    if x < 0.0 {
        x + FULL_TURN
    } else {
        x
    }
}

/// Ecliptic longitude of the Sun (degrees, in [0, 360)) at Julian offset `j`.
///
/// Arguments
/// ---------
/// * `j`: days since 1980-01-00.0 (see [`crate::time::julian_offset`])
/// * `params`: Kepler tolerance, iteration cap and true-anomaly scale
///
/// Return
/// ------
/// * the longitude, or [`MoonPhaseError::KeplerNotConverged`] if the eccentric anomaly could not
///   be resolved within `params.kepler_max_iter` iterations.
pub fn sun_longitude(j: JulianOffset, params: &PhaseParams) -> Result<Degree, MoonPhaseError> {
    let mean_anomaly = sun_mean_anomaly(j) * RADEG;

    let kepler = solve_kepler(
        mean_anomaly,
        SUN_ECCENTRICITY,
        params.kepler_eps,
        params.kepler_max_iter,
    )?;

    let half_e = kepler.eccentric_anomaly / 2.0;
    let true_anomaly =
        params.anomaly_scale.factor() * (SUN_TRUE_ANOMALY_RATIO * half_e.tan()).atan();

    let longitude = principal_degrees(true_anomaly + SUN_LONGITUDE_PERIGEE);
    trace!(
        "sun: j = {j}, M = {:.6}°, E = {:.6} rad ({} it), λ☉ = {longitude:.6}°",
        mean_anomaly / RADEG,
        kepler.eccentric_anomaly,
        kepler.iterations
    );

    Ok(longitude)
}
