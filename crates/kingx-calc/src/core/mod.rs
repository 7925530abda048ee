//! Core calculator module: arithmetic, number formatting and the input engine
//!
//! Every failure the engine can show on the display is a [`CalcError`]
//! variant. Nothing here panics on user input.

pub mod engine;
pub mod format;
mod operations;

pub use engine::{transition, transition_with, Engine, EngineState, Input, Phase};
pub use format::NumberFormat;
pub use operations::{Calculator, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error kinds - closed set, each with the label the display shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CalcError {
    /// The first operand could not be parsed when an operator was pressed
    #[error("Invalid Input")]
    InvalidInput,
    /// The second operand could not be parsed when evaluating
    #[error("Invalid Number")]
    InvalidNumber,
    /// Division (or a negative power) of zero
    #[error("Error: Div by Zero")]
    DivisionByZero,
    /// Logarithm of a non-positive number, or with base <= 0 or base == 1
    #[error("Error: Log Domain")]
    LogDomain,
    /// Result or typed operand does not fit the finite `f64` range
    #[error("Error: Overflow")]
    Overflow,
    /// Result has no real value (e.g. a negative base with a fractional exponent)
    ///
    /// Seventh kind beside the six calculator labels; NaN has nowhere else
    /// to go, since it is neither an overflow nor a domain error.
    #[error("Error: Undefined")]
    Undefined,
    /// Operator name not in the dispatch table
    #[error("Unknown Operation")]
    UnknownOperation,
}

impl CalcError {
    /// Returns the display label for this error
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_division_by_zero() {
        assert_eq!(format!("{}", CalcError::DivisionByZero), "Error: Div by Zero");
    }

    #[test]
    fn test_calc_error_display_log_domain() {
        assert_eq!(CalcError::LogDomain.label(), "Error: Log Domain");
    }

    #[test]
    fn test_calc_error_display_overflow() {
        assert_eq!(CalcError::Overflow.label(), "Error: Overflow");
    }

    #[test]
    fn test_calc_error_display_input_errors() {
        assert_eq!(CalcError::InvalidInput.label(), "Invalid Input");
        assert_eq!(CalcError::InvalidNumber.label(), "Invalid Number");
        assert_eq!(CalcError::UnknownOperation.label(), "Unknown Operation");
    }

    #[test]
    fn test_calc_error_labels_never_empty() {
        let all = [
            CalcError::InvalidInput,
            CalcError::InvalidNumber,
            CalcError::DivisionByZero,
            CalcError::LogDomain,
            CalcError::Overflow,
            CalcError::Undefined,
            CalcError::UnknownOperation,
        ];
        for err in all {
            assert!(!err.label().is_empty(), "{err:?} has no label");
        }
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Div by Zero"));
    }
}
