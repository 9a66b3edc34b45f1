//! # Calendar input and Julian day conversion
//!
//! The phase engine only needs the six civil fields of an instant. They are read through the
//! [`CalendarMoment`] trait, implemented here for the plain [`CivilMoment`] value type and for
//! [`hifitime::Epoch`] (read in the UTC time scale).
//!
//! No timezone conversion is ever applied: the caller supplies the civil fields in the
//! reference frame they want, normally UTC.
use hifitime::Epoch;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::{JulianOffset, EPOCH_1980, JULIAN_DAY_BASE, SECONDS_PER_HOUR};
use crate::moonphase_errors::MoonPhaseError;

/// Civil calendar fields of an instant.
///
/// Implementors only expose the fields; range checking is done by [`validate_moment`].
pub trait CalendarMoment {
    fn year(&self) -> i32;
    /// Month in 1..=12
    fn month(&self) -> u8;
    /// Day of month in 1..=31
    fn day(&self) -> u8;
    fn hour(&self) -> u8;
    fn minute(&self) -> u8;
    fn second(&self) -> u8;

    /// All six fields at once.
    ///
    /// Types whose accessors share an expensive conversion should override this so that the
    /// phase pipeline pays for it once.
    fn to_civil(&self) -> CivilMoment {
        CivilMoment::new(
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second(),
        )
    }
}

/// Plain civil date and time, without any timezone attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CivilMoment {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl CivilMoment {
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        CivilMoment {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given day.
    pub fn from_date(year: i32, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }
}

impl CalendarMoment for CivilMoment {
    fn year(&self) -> i32 {
        self.year
    }
    fn month(&self) -> u8 {
        self.month
    }
    fn day(&self) -> u8 {
        self.day
    }
    fn hour(&self) -> u8 {
        self.hour
    }
    fn minute(&self) -> u8 {
        self.minute
    }
    fn second(&self) -> u8 {
        self.second
    }
}

impl From<Epoch> for CivilMoment {
    /// Sub-second precision is dropped.
    fn from(epoch: Epoch) -> Self {
        let (year, month, day, hour, minute, second, _nanos) = epoch.to_gregorian_utc();
        CivilMoment::new(year, month, day, hour, minute, second)
    }
}

impl CalendarMoment for Epoch {
    fn year(&self) -> i32 {
        self.to_gregorian_utc().0
    }
    fn month(&self) -> u8 {
        self.to_gregorian_utc().1
    }
    fn day(&self) -> u8 {
        self.to_gregorian_utc().2
    }
    fn hour(&self) -> u8 {
        self.to_gregorian_utc().3
    }
    fn minute(&self) -> u8 {
        self.to_gregorian_utc().4
    }
    fn second(&self) -> u8 {
        self.to_gregorian_utc().5
    }
    fn to_civil(&self) -> CivilMoment {
        CivilMoment::from(*self)
    }
}

/// Parse an ISO 8601 date (e.g. `2024-01-11T11:57:00`) into a [`CivilMoment`].
///
/// A missing time scale is read as UTC; an explicit one is converted to UTC first.
pub fn parse_moment(date: &str) -> Result<CivilMoment, MoonPhaseError> {
    let epoch = Epoch::from_str(date.trim())
        .map_err(|e| MoonPhaseError::InvalidDate(format!("{date}: {e}")))?;
    Ok(CivilMoment::from(epoch))
}

fn check_field(field: &'static str, value: u8, min: u8, max: u8) -> Result<(), MoonPhaseError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(MoonPhaseError::InvalidCalendarField {
            field,
            value: value as i64,
            min: min as i64,
            max: max as i64,
        })
    }
}

/// Check the civil fields of `moment` against their calendar ranges.
///
/// The day is only checked against 1..=31; month lengths are not enforced.
pub fn validate_moment(moment: &impl CalendarMoment) -> Result<(), MoonPhaseError> {
    check_field("month", moment.month(), 1, 12)?;
    check_field("day", moment.day(), 1, 31)?;
    check_field("hour", moment.hour(), 0, 23)?;
    check_field("minute", moment.minute(), 0, 59)?;
    check_field("second", moment.second(), 0, 59)?;
    Ok(())
}

/// Linearly remap `val` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Undefined (infinite or NaN) when `in_min == in_max`.
pub fn map_range<T>(val: T, in_min: T, in_max: T, out_min: f64, out_max: f64) -> f64
where
    T: Into<f64> + Copy,
{
    let (val, in_min, in_max) = (val.into(), in_min.into(), in_max.into());
    (val - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Time of day of `moment` as a fractional hour, e.g. 12:30:00 → 12.5.
pub fn fractional_hour(moment: &impl CalendarMoment) -> f64 {
    let seconds = moment.minute() as u32 * 60 + moment.second() as u32;
    moment.hour() as f64 + map_range(seconds, 0, SECONDS_PER_HOUR as u32, 0.0, 1.0)
}

/// Julian Day of a calendar date, the day carrying the time of day as a fraction.
///
/// The Gregorian correction applies from 1582-10-15 onwards; earlier dates are read in the
/// Julian calendar. Years before 1 are outside the supported domain.
///
/// Arguments
/// ---------
/// * `year`: calendar year
/// * `month`: month, 1..=12
/// * `day`: day of month with fractional part (e.g. `11.5` for noon on the 11th)
///
/// Return
/// ------
/// * the Julian Day (`2451545.0` at 2000-01-01 12:00)
pub fn julian_day(year: i32, month: u8, day: f64) -> f64 {
    let (mut year, mut month) = (year as i64, month as i64);

    let gregorian = year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15.0)));

    if month < 3 {
        year -= 1;
        month += 12;
    }

    let b = if gregorian {
        let a = (year as f64 / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    let c = (365.25 * year as f64).floor();
    let e = (30.6001 * (month + 1) as f64).floor();

    b + c + e + day + JULIAN_DAY_BASE
}

/// Julian day of `moment` counted from [`EPOCH_1980`].
pub fn julian_offset(moment: &impl CalendarMoment) -> JulianOffset {
    let day = moment.day() as f64 + fractional_hour(moment) / 24.0;
    julian_day(moment.year(), moment.month(), day) - EPOCH_1980
}
