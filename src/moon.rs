//! # Geocentric lunar longitude
//!
//! Ecliptic longitude of the Moon from its mean elements plus the principal periodic terms of
//! the simplified lunar theory:
//!
//! | Term                     | Amplitude |
//! |--------------------------|-----------|
//! | Evection                 | 1.2739°   |
//! | Annual equation          | 0.1858°   |
//! | Equation of the centre   | 6.2886°   |
//! | Fourth correction        | 0.214°    |
//! | Variation                | 0.6583°   |
//!
//! The returned longitude is **not** reduced to [0, 360): only its difference with the solar
//! longitude matters to the phase.
use log::trace;

use crate::{
    constants::{
        Degree, JulianOffset, ANNUAL_EQUATION, ANOMALY_CORRECTION, EQUATION_OF_CENTRE, EVECTION,
        FULL_TURN, LONGITUDE_CORRECTION, MOON_DAILY_MOTION, MOON_MEAN_LONGITUDE_AT_EPOCH,
        MOON_PERIGEE_AT_EPOCH, MOON_PERIGEE_DAILY_MOTION, RADEG, SUN_DAILY_MOTION,
        SUN_MEAN_ANOMALY_OFFSET, VARIATION,
    },
    kepler::principal_degrees,
};

#[inline]
fn sin_deg(a: Degree) -> f64 {
    (a * RADEG).sin()
}

/// Mean longitude and mean anomaly of the Moon at Julian offset `j`, both in [0, 360).
pub fn moon_mean_elements(j: JulianOffset) -> (Degree, Degree) {
    let mut l = principal_degrees(MOON_DAILY_MOTION * j + MOON_MEAN_LONGITUDE_AT_EPOCH);
    // Never taken after principal_degrees; kept to follow the published step order
    if l < 0.0 {
        l += FULL_TURN;
    }

    let mm = principal_degrees(l - MOON_PERIGEE_DAILY_MOTION * j - MOON_PERIGEE_AT_EPOCH);
    (l, mm)
}

/// True ecliptic longitude of the Moon (degrees, unreduced).
///
/// Arguments
/// ---------
/// * `j`: days since 1980-01-00.0
/// * `sun_longitude`: apparent solar longitude at `j` in degrees, as returned by
///   [`crate::sun::sun_longitude`]
pub fn moon_longitude(j: JulianOffset, sun_longitude: Degree) -> Degree {
    let ls = sun_longitude;

    // Solar mean anomaly as seen by the lunar perturbations; only folded once
    let mut ms = SUN_DAILY_MOTION * j - SUN_MEAN_ANOMALY_OFFSET;
    if ms < 0.0 {
        ms += FULL_TURN;
    }

    let (mut l, mut mm) = moon_mean_elements(j);

    let ev = EVECTION * sin_deg(2.0 * (l - ls) - mm);
    let sms = sin_deg(ms);
    let ae = ANNUAL_EQUATION * sms;

    mm += ev - ae - ANOMALY_CORRECTION * sms;
    let ec = EQUATION_OF_CENTRE * sin_deg(mm);

    l += ev + ec - ae + LONGITUDE_CORRECTION * sin_deg(2.0 * mm);
    l += VARIATION * sin_deg(2.0 * (l - ls));

    trace!("moon: j = {j}, ev = {ev:.5}, ae = {ae:.5}, ec = {ec:.5}, λ☾ = {l:.6}°");
    l
}

#[cfg(test)]
mod moon_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_moon_mean_elements_at_epoch() {
        let (l, mm) = moon_mean_elements(0.0);
        assert_relative_eq!(l, MOON_MEAN_LONGITUDE_AT_EPOCH, epsilon = 1e-12);
        // 64.975464 − 349.383063 folded into [0, 360)
        assert_relative_eq!(mm, 75.592401, epsilon = 1e-9);
    }

    #[test]
    fn test_moon_mean_elements_are_reduced() {
        for j in [-12_345.6, -1.0, 0.5, 9_999.0, 16_081.5] {
            let (l, mm) = moon_mean_elements(j);
            assert!((0.0..=FULL_TURN).contains(&l), "j = {j}: l = {l}");
            assert!((0.0..=FULL_TURN).contains(&mm), "j = {j}: mm = {mm}");
        }
    }

    #[test]
    fn test_moon_longitude_stays_near_mean() {
        // Periodic terms add at most ~9.4° to the mean longitude
        for j in [0.0, 100.25, 7_305.0, 16_081.5] {
            let (l, _) = moon_mean_elements(j);
            let lm = moon_longitude(j, 280.0);
            assert!((lm - l).abs() < 9.5, "j = {j}: λ☾ = {lm}, L = {l}");
        }
    }

    #[test]
    fn test_moon_longitude_reference_value() {
        // 2000-01-01 12:00 UT (J2000.0)
        let j = 7306.5;
        let lm = moon_longitude(j, 280.37);
        let lm = lm.rem_euclid(360.0);
        // Published geocentric longitude ≈ 223.3°
        assert!((lm - 223.3).abs() < 1.0, "λ☾ = {lm}");
    }
}
