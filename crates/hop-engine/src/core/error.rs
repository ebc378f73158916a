use thiserror::Error;

/// Errors raised at the checked boundary of the engine.
///
/// The physics core itself never fails; these describe inputs that violate
/// its preconditions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid timestep: {0} (must be finite and > 0)")]
    InvalidTimestep(f32),

    #[error("Non-finite value for {name}: {value}")]
    NonFinite { name: &'static str, value: f32 },

    #[error("{name} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

/// Reject zero, negative and non-finite time slices.
pub fn check_dt(dt: f32) -> Result<f32, EngineError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(dt)
    } else {
        Err(EngineError::InvalidTimestep(dt))
    }
}

pub(crate) fn check_finite(name: &'static str, value: f32) -> Result<f32, EngineError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::NonFinite { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dt_must_be_positive_and_finite() {
        assert_eq!(check_dt(0.016), Ok(0.016));
        assert_eq!(check_dt(0.0), Err(EngineError::InvalidTimestep(0.0)));
        assert!(check_dt(-1.0).is_err());
        assert!(check_dt(f32::NAN).is_err());
        assert!(check_dt(f32::INFINITY).is_err());
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = check_finite("gravity", f32::NAN).unwrap_err();
        assert!(err.to_string().contains("gravity"));
    }
}
