//! Binary operators and their arithmetic
//!
//! Operators are a closed enum dispatched by exhaustive `match`, so adding
//! one forces every symbol, name and arithmetic table to handle it.

use std::fmt;
use std::str::FromStr;

use crate::core::{CalcError, CalcResult};

/// The binary operators on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Power (^)
    Power,
    /// Logarithm of the first operand in the base of the second (log)
    Logarithm,
}

impl Operation {
    /// All operators in keypad order
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Logarithm,
    ];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Logarithm => "log",
        }
    }

    /// Returns the long operator name used by keypad adapters
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
            Self::Power => "Power",
            Self::Logarithm => "Logarithm",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Accepts either the symbol or the long name, case-insensitively for names
impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s || op.name().eq_ignore_ascii_case(s))
            .or_else(|| s.eq_ignore_ascii_case("log").then_some(Self::Logarithm))
            .ok_or(CalcError::UnknownOperation)
    }
}

/// Arithmetic for every [`Operation`]
///
/// Results are classified before they leave: NaN becomes
/// [`CalcError::Undefined`] and infinities become [`CalcError::Overflow`],
/// so callers only ever see finite numbers.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Performs an operation on two operands
    pub fn calculate(a: f64, b: f64, op: Operation) -> CalcResult<f64> {
        match op {
            Operation::Add => Self::add(a, b),
            Operation::Subtract => Self::subtract(a, b),
            Operation::Multiply => Self::multiply(a, b),
            Operation::Divide => Self::divide(a, b),
            Operation::Power => Self::power(a, b),
            Operation::Logarithm => Self::logarithm(a, b),
        }
    }

    /// Addition: a + b
    pub fn add(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_result(a + b)
    }

    /// Subtraction: a - b
    pub fn subtract(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_result(a - b)
    }

    /// Multiplication: a * b
    pub fn multiply(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_result(a * b)
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Self::check_result(a / b)
    }

    /// Power: a ^ b
    pub fn power(a: f64, b: f64) -> CalcResult<f64> {
        // 0 raised to a negative power is a division by zero, not infinity
        if a == 0.0 && b < 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Self::check_result(a.powf(b))
    }

    /// Logarithm of `a` in base `base`
    pub fn logarithm(a: f64, base: f64) -> CalcResult<f64> {
        if a <= 0.0 || base <= 0.0 || base == 1.0 {
            return Err(CalcError::LogDomain);
        }
        Self::check_result(a.ln() / base.ln())
    }

    /// Rejects results outside the finite `f64` range
    fn check_result(result: f64) -> CalcResult<f64> {
        if result.is_nan() {
            Err(CalcError::Undefined)
        } else if result.is_infinite() {
            Err(CalcError::Overflow)
        } else {
            Ok(result)
        }
    }
}
