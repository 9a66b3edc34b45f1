//! # moonphase
//!
//! Geocentric phase of the Moon — elongation angle and illuminated fraction — for any civil
//! date and time, from a simplified analytic solar and lunar theory.
//!
//! The computation is a pipeline of pure numeric stages:
//!
//! 1. [`time`] – civil fields → Julian day offset from 1980-01-00.0,
//! 2. [`sun`] – solar longitude, solving Kepler's equation with [`kepler`],
//! 3. [`moon`] – lunar longitude from mean elements and periodic terms,
//! 4. [`phase`] – elongation and illuminated fraction.
//!
//! The model is accurate to a fraction of a degree in elongation over recent centuries; it is
//! not a precision ephemeris and applies no timezone, leap-second or parallax correction.
//!
//! ```rust
//! use moonphase::{get_phase, time::parse_moment};
//!
//! let moment = parse_moment("2024-01-11T11:57:00").unwrap();
//! let phase = get_phase(&moment).unwrap();
//! assert!(phase.percent_lit < 0.01);
//! ```
pub mod constants;
pub mod kepler;
pub mod moon;
pub mod moonphase_errors;
pub mod params;
pub mod phase;
pub mod sun;
pub mod time;

pub use moonphase_errors::MoonPhaseError;
pub use params::{AnomalyScale, PhaseParams};
pub use phase::{get_phase, get_phase_with, MoonPhase, PhaseName};
pub use time::{CalendarMoment, CivilMoment};
