//! # Constants and type definitions for moonphase
//!
//! This module centralizes the **epochs**, **orbital coefficients**, and **unit conversions**
//! used by the solar and lunar position solvers.
//!
//! ## Overview
//!
//! - Julian day epochs used by the calendar conversion
//! - Mean orbital elements of the Sun's apparent orbit
//! - Mean elements and perturbation coefficients of the simplified lunar theory
//! - Degree ↔ radian conversions and type aliases
//!
//! All lunar and solar coefficients are empirical fits of the simplified theory and are
//! reproduced exactly; changing any digit changes the output of [`crate::get_phase`].

// -------------------------------------------------------------------------------------------------
// Epochs and calendar
// -------------------------------------------------------------------------------------------------

/// Julian day of the reference epoch 1980-01-00.0 (1979-12-31 00:00 UTC)
pub const EPOCH_1980: f64 = 2_444_238.5;

/// Constant term of the calendar → Julian day formula
pub const JULIAN_DAY_BASE: f64 = 1_720_994.5;

/// Length of the tropical year in days
pub const TROPICAL_YEAR: f64 = 365.2422;

/// Mean synodic month in days (new moon to new moon)
pub const SYNODIC_MONTH: f64 = 29.530589;

/// Number of seconds in one hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

// -------------------------------------------------------------------------------------------------
// Solar orbit
// -------------------------------------------------------------------------------------------------

/// Ecliptic longitude of the Sun at perigee (degrees)
pub const SUN_LONGITUDE_PERIGEE: f64 = 282.596403;

/// Offset subtracted from the solar mean motion to obtain the mean anomaly (degrees)
pub const SUN_MEAN_ANOMALY_OFFSET: f64 = 3.762863;

/// Eccentricity of the Sun's apparent orbit
pub const SUN_ECCENTRICITY: f64 = 0.016718;

/// sqrt((1 + e) / (1 - e)) for [`SUN_ECCENTRICITY`]
pub const SUN_TRUE_ANOMALY_RATIO: f64 = 1.01686011182;

/// Daily motion of the solar mean anomaly used in the lunar perturbations (degrees/day)
pub const SUN_DAILY_MOTION: f64 = 0.985647332099;

// -------------------------------------------------------------------------------------------------
// Lunar theory
// -------------------------------------------------------------------------------------------------

/// Daily motion of the Moon's mean longitude (degrees/day)
pub const MOON_DAILY_MOTION: f64 = 13.176396;

/// Moon's mean longitude at epoch (degrees)
pub const MOON_MEAN_LONGITUDE_AT_EPOCH: f64 = 64.975464;

/// Daily motion of the lunar perigee (degrees/day)
pub const MOON_PERIGEE_DAILY_MOTION: f64 = 0.1114041;

/// Mean longitude of the lunar perigee at epoch (degrees)
pub const MOON_PERIGEE_AT_EPOCH: f64 = 349.383063;

/// Amplitude of the evection term (degrees)
pub const EVECTION: f64 = 1.2739;

/// Amplitude of the annual equation (degrees)
pub const ANNUAL_EQUATION: f64 = 0.1858;

/// Third correction applied to the mean anomaly (degrees)
pub const ANOMALY_CORRECTION: f64 = 0.37;

/// Amplitude of the equation of the centre (degrees)
pub const EQUATION_OF_CENTRE: f64 = 6.2886;

/// Fourth correction to the longitude (degrees)
pub const LONGITUDE_CORRECTION: f64 = 0.214;

/// Amplitude of the variation term (degrees)
pub const VARIATION: f64 = 0.6583;

// -------------------------------------------------------------------------------------------------
// Conversions and aliases
// -------------------------------------------------------------------------------------------------

/// Full turn in degrees
pub const FULL_TURN: f64 = 360.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Angle in degrees
pub type Degree = f64;

/// Angle in radians
pub type Radian = f64;

/// Julian day count relative to [`EPOCH_1980`]
pub type JulianOffset = f64;
