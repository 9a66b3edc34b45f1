#![allow(dead_code)]

use hifitime::{Epoch, Unit};
use moonphase::CivilMoment;

/// Absolute difference between two angles in degrees, taking the 360° wrap into account.
#[inline]
pub fn angle_abs_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

pub fn assert_angle_close(actual: f64, expected: f64, tol: f64, context: &str) {
    let diff = angle_abs_diff(actual, expected);
    assert!(
        diff <= tol,
        "{context}: angle {actual} vs expected {expected} (|Δ| = {diff} > {tol})"
    );
}

/// `epoch` shifted by a (possibly fractional) number of days, as civil UTC fields.
pub fn shifted(epoch: Epoch, days: f64) -> CivilMoment {
    CivilMoment::from(epoch + Unit::Day * days)
}
