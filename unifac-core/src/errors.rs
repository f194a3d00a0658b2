use crate::parameter::ParameterError;
use thiserror::Error;

/// Error type for invalid mixture specifications and degenerate calculations.
#[derive(Error, Debug)]
pub enum UnifacError {
    #[error("Invalid input in {0}: {1} = {2}.")]
    DomainError(String, String, f64),
    #[error("The experimental reference value must be finite and non-zero to compute a relative error, got {0}.")]
    InvalidReferenceValue(f64),
    #[error(transparent)]
    ParameterError(#[from] ParameterError),
}

/// Convenience type for `Result<T, UnifacError>`.
pub type UnifacResult<T> = Result<T, UnifacError>;

impl UnifacError {
    pub(crate) fn domain(context: &str, quantity: &str, value: f64) -> Self {
        Self::DomainError(context.into(), quantity.into(), value)
    }
}

/// Check that a temperature is a finite, strictly positive value in Kelvin.
pub fn validate_temperature(context: &str, temperature: f64) -> UnifacResult<()> {
    if temperature.is_finite() && temperature > 0.0 {
        Ok(())
    } else {
        Err(UnifacError::domain(context, "temperature", temperature))
    }
}

/// Check that a mole fraction lies strictly inside the open interval (0, 1).
pub fn validate_mole_fraction(context: &str, x: f64) -> UnifacResult<()> {
    if x.is_finite() && x > 0.0 && x < 1.0 {
        Ok(())
    } else {
        Err(UnifacError::domain(context, "mole fraction", x))
    }
}

/// Check that a denominator can be divided by (and its logarithm taken).
pub fn validate_denominator(context: &str, quantity: &str, value: f64) -> UnifacResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(UnifacError::domain(context, quantity, value))
    }
}
