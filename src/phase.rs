//! # Moon phase
//!
//! This module composes the calendar conversion, the solar and lunar solvers into the public
//! entry points:
//!
//! - [`get_phase`] – phase at a calendar instant with the default [`PhaseParams`],
//! - [`get_phase_with`] – same with explicit parameters,
//! - [`phase_at_julian_offset`] – phase from a precomputed Julian offset,
//! - [`phase_from_longitudes`] – the last stage alone, from the two ecliptic longitudes.
//!
//! ## Pipeline
//!
//! ```text
//! CalendarMoment ──► julian_offset (j)
//! j       ──► sun_longitude  (λ☉)
//! j, λ☉   ──► moon_longitude (λ☾)
//! λ☾, λ☉  ──► phase_from_longitudes ──► MoonPhase
//! ```
//!
//! ## Example
//!
//! ```rust
//! use moonphase::{get_phase, time::CivilMoment, PhaseName};
//!
//! // Full moon of 25 January 2024, 17:54 UTC
//! let phase = get_phase(&CivilMoment::new(2024, 1, 25, 17, 54, 0)).unwrap();
//!
//! assert!(phase.percent_lit > 0.99);
//! assert_eq!(phase.name(), PhaseName::FullMoon);
//! ```
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    constants::{Degree, JulianOffset, FULL_TURN, RADEG, SYNODIC_MONTH},
    kepler::principal_degrees,
    moon::moon_longitude,
    moonphase_errors::MoonPhaseError,
    params::PhaseParams,
    sun::sun_longitude,
    time::{julian_offset, validate_moment, CalendarMoment},
};

/// Phase of the Moon at one instant.
///
/// * `angle` – Sun–Earth–Moon elongation `λ☾ − λ☉` truncated to whole degrees, in `0..360`
///   (0 = new moon, 90 = first quarter, 180 = full moon, 270 = last quarter).
/// * `percent_lit` – illuminated fraction of the disc, in `[0, 1]`. Serialized as `percentLit`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonPhase {
    pub angle: u16,
    #[serde(rename = "percentLit")]
    pub percent_lit: f64,
}

impl MoonPhase {
    /// Named phase for this elongation.
    pub fn name(&self) -> PhaseName {
        PhaseName::from_angle(self.angle as f64)
    }

    /// `true` between new moon and full moon.
    pub fn is_waxing(&self) -> bool {
        self.angle < 180
    }

    /// Approximate days elapsed since the last new moon, from the mean synodic month.
    pub fn age_days(&self) -> f64 {
        self.age_fraction() * SYNODIC_MONTH
    }

    /// Fraction of the synodic cycle elapsed since the last new moon, in [0, 1).
    pub fn age_fraction(&self) -> f64 {
        self.angle as f64 / FULL_TURN
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}°, {:.1}% lit)",
            self.name(),
            self.angle,
            self.percent_lit * 100.0
        )
    }
}

/// The eight traditional phases, each spanning 45° of elongation centred on its nominal angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseName {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseName {
    /// Named phase for an elongation in degrees (any real value, folded into [0, 360)).
    pub fn from_angle(angle: Degree) -> Self {
        let phase = principal_degrees(angle) / FULL_TURN;
        match phase {
            _ if phase < 1.0 / 16.0 => PhaseName::NewMoon,
            _ if phase < 3.0 / 16.0 => PhaseName::WaxingCrescent,
            _ if phase < 5.0 / 16.0 => PhaseName::FirstQuarter,
            _ if phase < 7.0 / 16.0 => PhaseName::WaxingGibbous,
            _ if phase < 9.0 / 16.0 => PhaseName::FullMoon,
            _ if phase < 11.0 / 16.0 => PhaseName::WaningGibbous,
            _ if phase < 13.0 / 16.0 => PhaseName::LastQuarter,
            _ if phase < 15.0 / 16.0 => PhaseName::WaningCrescent,
            _ => PhaseName::NewMoon,
        }
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PhaseName::NewMoon => "new moon",
            PhaseName::WaxingCrescent => "waxing crescent",
            PhaseName::FirstQuarter => "first quarter",
            PhaseName::WaxingGibbous => "waxing gibbous",
            PhaseName::FullMoon => "full moon",
            PhaseName::WaningGibbous => "waning gibbous",
            PhaseName::LastQuarter => "last quarter",
            PhaseName::WaningCrescent => "waning crescent",
        };
        f.write_str(label)
    }
}

/// Phase from the ecliptic longitudes of the Moon and the Sun (degrees).
///
/// The elongation is folded into [0, 360) before truncation; the illuminated fraction uses the
/// raw difference, cosine being even and periodic.
pub fn phase_from_longitudes(moon_longitude: Degree, sun_longitude: Degree) -> MoonPhase {
    let elongation = moon_longitude - sun_longitude;

    // A 359.999… that rounds up to 360 belongs to the new moon
    let angle = principal_degrees(elongation).trunc() as u16 % 360;
    let percent_lit = ((1.0 - (elongation * RADEG).cos()) / 2.0).clamp(0.0, 1.0);

    MoonPhase { angle, percent_lit }
}

/// Phase at `j` days after 1980-01-00.0.
pub fn phase_at_julian_offset(
    j: JulianOffset,
    params: &PhaseParams,
) -> Result<MoonPhase, MoonPhaseError> {
    let ls = sun_longitude(j, params)?;
    let lm = moon_longitude(j, ls);
    let phase = phase_from_longitudes(lm, ls);

    debug!("phase: j = {j:.6}, λ☉ = {ls:.4}°, λ☾ = {lm:.4}° → {phase}");
    Ok(phase)
}

/// Phase of the Moon at `moment` with explicit parameters.
///
/// Return
/// ------
/// * [`MoonPhaseError::InvalidCalendarField`] if `params.validate_input` is set and a civil
///   field is out of range,
/// * [`MoonPhaseError::KeplerNotConverged`] if the solar solver hits its iteration cap.
pub fn get_phase_with(
    moment: &impl CalendarMoment,
    params: &PhaseParams,
) -> Result<MoonPhase, MoonPhaseError> {
    let moment = moment.to_civil();
    if params.validate_input {
        validate_moment(&moment)?;
    }
    phase_at_julian_offset(julian_offset(&moment), params)
}

/// Phase of the Moon at `moment` (UTC civil fields) with the default [`PhaseParams`].
pub fn get_phase(moment: &impl CalendarMoment) -> Result<MoonPhase, MoonPhaseError> {
    get_phase_with(moment, &PhaseParams::default())
}
