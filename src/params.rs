//! # Phase computation parameters
//!
//! This module defines the [`PhaseParams`](crate::params::PhaseParams) configuration struct and its
//! builder, which control the numerical behaviour of [`get_phase_with`](crate::phase::get_phase_with):
//!
//! - the tolerance and iteration cap of the solar Kepler solver,
//! - the scale factor used to turn the eccentric anomaly into the true anomaly,
//! - whether calendar fields are range-checked before the computation.
//!
//! ## Example
//!
//! ```rust
//! use moonphase::params::{AnomalyScale, PhaseParams};
//!
//! let params = PhaseParams::builder()
//!     .kepler_eps(1e-10)
//!     .kepler_max_iter(20)
//!     .anomaly_scale(AnomalyScale::Truncated)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(params.kepler_max_iter, 20);
//! ```
use serde::{Deserialize, Serialize};

use crate::moonphase_errors::MoonPhaseError;

/// Factor converting `atan(√((1+e)/(1-e))·tan(E/2))` into a true anomaly in degrees.
///
/// Variants
/// --------
/// * `Exact` – `360 / π` (≈ 114.59), the textbook `2 × 180/π`.
/// * `Truncated` – `⌊360 / π⌋ = 114`, the factor obtained by integer division in older
///   ports of the algorithm. Kept for comparison against historical tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnomalyScale {
    #[default]
    Exact,
    Truncated,
}

impl AnomalyScale {
    /// Degrees per radian of half-angle, according to the selected convention.
    pub fn factor(self) -> f64 {
        let exact = 360.0 / std::f64::consts::PI;
        match self {
            AnomalyScale::Exact => exact,
            AnomalyScale::Truncated => exact.floor(),
        }
    }
}

/// Configuration parameters for the phase computation.
///
/// Fields
/// -----------------
/// * `kepler_eps` – absolute tolerance on the Kepler residual `E − e·sin(E) − M` (radians).
/// * `kepler_max_iter` – maximum Newton–Raphson iterations before giving up with
///   [`MoonPhaseError::KeplerNotConverged`].
/// * `anomaly_scale` – see [`AnomalyScale`].
/// * `validate_input` – when `true`, calendar fields outside their civil range are rejected
///   with [`MoonPhaseError::InvalidCalendarField`]. When `false` any value is accepted and
///   yields a finite, astronomically meaningless result.
///
/// Defaults
/// -----------------
/// * `kepler_eps`: 1e-12
/// * `kepler_max_iter`: 50
/// * `anomaly_scale`: [`AnomalyScale::Exact`]
/// * `validate_input`: true
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseParams {
    pub kepler_eps: f64,
    pub kepler_max_iter: usize,
    pub anomaly_scale: AnomalyScale,
    pub validate_input: bool,
}

impl PhaseParams {
    /// Construct a new [`PhaseParams`] with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`PhaseParamsBuilder`] initialised with the defaults.
    pub fn builder() -> PhaseParamsBuilder {
        PhaseParamsBuilder::new()
    }
}

impl Default for PhaseParams {
    fn default() -> Self {
        PhaseParams {
            kepler_eps: 1e-12,
            kepler_max_iter: 50,
            anomaly_scale: AnomalyScale::Exact,
            validate_input: true,
        }
    }
}

/// Builder for [`PhaseParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct PhaseParamsBuilder {
    params: PhaseParams,
}

impl PhaseParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: PhaseParams::default(),
        }
    }

    pub fn kepler_eps(mut self, v: f64) -> Self {
        self.params.kepler_eps = v;
        self
    }
    pub fn kepler_max_iter(mut self, v: usize) -> Self {
        self.params.kepler_max_iter = v;
        self
    }
    pub fn anomaly_scale(mut self, v: AnomalyScale) -> Self {
        self.params.anomaly_scale = v;
        self
    }
    pub fn validate_input(mut self, v: bool) -> Self {
        self.params.validate_input = v;
        self
    }

    /// Finalize the builder and produce a [`PhaseParams`] instance.
    ///
    /// Validation rules
    /// -----------------
    /// * `kepler_eps` must be finite and strictly positive (NaN rejected).
    /// * `kepler_max_iter ≥ 1`.
    pub fn build(self) -> Result<PhaseParams, MoonPhaseError> {
        let p = &self.params;

        if !(p.kepler_eps.is_finite() && p.kepler_eps > 0.0) {
            return Err(MoonPhaseError::InvalidParams(format!(
                "kepler_eps must be finite and > 0 (got {})",
                p.kepler_eps
            )));
        }
        if p.kepler_max_iter == 0 {
            return Err(MoonPhaseError::InvalidParams(
                "kepler_max_iter must be >= 1".into(),
            ));
        }

        Ok(self.params)
    }
}
