use thiserror::Error;

use crate::rational::SpecialValue;

/// Errors that can occur when converting a [`Rational`](crate::Rational) to another type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("{0} has no integer value")]
    NotFinite(SpecialValue),

    #[error("value does not fit in {target}")]
    Overflow { target: &'static str },
}

/// Errors raised by operations that exist but cannot be applied to their operands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// Result type for conversions
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Result type for fallible operations
pub type OperationResult<T> = Result<T, OperationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConversionError::NotFinite(SpecialValue::NaN).to_string(),
            "NaN has no integer value"
        );
        assert_eq!(
            ConversionError::NotFinite(SpecialValue::NegativeInfinity).to_string(),
            "-∞ has no integer value"
        );
        assert_eq!(
            ConversionError::Overflow { target: "i64" }.to_string(),
            "value does not fit in i64"
        );
        assert_eq!(
            OperationError::Unsupported("modular power with a fractional exponent").to_string(),
            "unsupported operation: modular power with a fractional exponent"
        );
    }
}
