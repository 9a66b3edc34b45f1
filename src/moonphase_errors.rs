use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum MoonPhaseError {
    #[error("Calendar field `{field}` out of range: {value} (expected {min}..={max})")]
    InvalidCalendarField {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Kepler equation did not converge after {iterations} iterations (residual {residual:e})")]
    KeplerNotConverged { iterations: usize, residual: f64 },

    #[error("Invalid phase parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid date string: {0}")]
    InvalidDate(String),
}

impl PartialEq for MoonPhaseError {
    fn eq(&self, other: &Self) -> bool {
        use MoonPhaseError::*;
        match (self, other) {
            (
                InvalidCalendarField {
                    field: fa,
                    value: va,
                    ..
                },
                InvalidCalendarField {
                    field: fb,
                    value: vb,
                    ..
                },
            ) => fa == fb && va == vb,

            // Residuals are floating point: same iteration count is enough
            (
                KeplerNotConverged { iterations: a, .. },
                KeplerNotConverged { iterations: b, .. },
            ) => a == b,

            (InvalidParams(a), InvalidParams(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,

            _ => false,
        }
    }
}
