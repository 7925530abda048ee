//! KingX Calculator - keypad calculator engine
//!
//! A deterministic state machine turns button presses into a running
//! calculation. Operators chain strictly left to right with no precedence,
//! a second operator replaces the first, and errors are shown on the
//! display instead of escaping.
//!
//! Front ends are thin adapters: they map each button to an [`Input`] and
//! draw the display text the engine returns. The terminal front end lives
//! behind the `tui` feature.
//!
//! # Example
//!
//! ```rust
//! use kingx_calc::prelude::*;
//!
//! let mut engine = Engine::new();
//! for input in Input::sequence("5+3*2=") {
//!     engine.apply(input);
//! }
//! assert_eq!(engine.display(), "16");
//!
//! engine.apply(Input::Clear);
//! for input in Input::sequence("6/0=") {
//!     engine.apply(input);
//! }
//! assert_eq!(engine.display(), "Error: Div by Zero");
//! ```
//!
//! [`Input`]: core::Input

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod keypad;
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, LoggingConfig};
    pub use crate::core::{
        transition, transition_with, CalcError, CalcResult, Calculator, Engine, EngineState, Input,
        NumberFormat, Operation, Phase,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::error::{ConfigError, ConfigResult};
    pub use crate::keypad::{ButtonKind, Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn run(engine: &mut Engine, keys: &str) -> String {
        for input in Input::sequence(keys) {
            engine.apply(input);
        }
        engine.display().to_string()
    }

    #[test]
    fn test_prelude_imports() {
        let mut engine = Engine::new();
        assert_eq!(run(&mut engine, "2+3="), "5");
    }

    #[test]
    fn test_calculator_direct() {
        let result = Calculator::calculate(6.0, 7.0, Operation::Multiply).unwrap();
        assert_eq!(result, 42.0);
    }

    #[test]
    fn test_transition_pure_form() {
        let (state, display) = transition(EngineState::default(), Input::Digit('4'));
        assert_eq!(display, "4");
        let (state, display) = transition(state, Input::Operator(Operation::Add));
        assert_eq!(display, "4 +");
        assert_eq!(state.phase(), Phase::OperatorArmed);
    }

    #[test]
    fn test_keypad_drives_engine() {
        let mut keypad = Keypad::new();
        let mut engine = Engine::new();
        for label in ["9", "^", "2", "="] {
            let idx = keypad.find_button_by_label(label).unwrap();
            let input = keypad.press_button(idx).unwrap();
            engine.apply(input);
        }
        assert_eq!(engine.display(), "81");
    }

    #[test]
    fn test_config_drives_precision() {
        let config = CalculatorConfig::from_yaml_str("significant_digits: 4").unwrap();
        let mut engine = Engine::with_config(&config);
        assert_eq!(run(&mut engine, "1/3="), "0.3333");
    }

    #[test]
    fn test_error_is_typed() {
        let mut engine = Engine::new();
        run(&mut engine, "8l1=");
        assert_eq!(engine.state().last_error(), Some(CalcError::LogDomain));
    }

    #[test]
    fn test_config_error_display() {
        let err = CalculatorConfig::from_json_str(r#"{"significant_digits": 40}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
