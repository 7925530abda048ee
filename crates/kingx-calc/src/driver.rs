//! Unified calculator driver
//!
//! Behaviour checks are written once against [`CalculatorDriver`]
//! and run against every front end: the bare [`Engine`] and, with the `tui`
//! feature, the terminal app pressing its keypad buttons.
//!
//! ```rust
//! use kingx_calc::core::Engine;
//! use kingx_calc::driver::{verify_left_to_right_chaining, CalculatorDriver};
//!
//! let mut engine = Engine::new();
//! verify_left_to_right_chaining(&mut engine);
//! assert_eq!(engine.press_keys("C2^10="), "1024");
//! ```

use crate::core::{Engine, Input};

/// Abstract driver for keypad interactions
pub trait CalculatorDriver {
    /// Presses one button and returns the display
    fn press(&mut self, input: Input) -> String;

    /// Returns what the display currently shows
    fn display(&self) -> String;

    /// Resets the calculator
    fn clear(&mut self);

    /// Presses every recognised key in `keys` and returns the final display
    fn press_keys(&mut self, keys: &str) -> String {
        for input in Input::sequence(keys) {
            self.press(input);
        }
        self.display()
    }
}

impl CalculatorDriver for Engine {
    fn press(&mut self, input: Input) -> String {
        self.apply(input).to_string()
    }

    fn display(&self) -> String {
        Engine::display(self).to_string()
    }

    fn clear(&mut self) {
        self.clear_input();
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::Input;
    use crate::tui::CalculatorApp;

    /// Drives the terminal app through its keypad buttons
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, input: Input) -> String {
            // every input has a button, so go through it like a click would
            match self.app.keypad().find_button_by_input(input) {
                Some(index) => {
                    self.app.press_button(index);
                }
                None => {
                    self.app.press(input);
                }
            }
            self.app.display().to_string()
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn clear(&mut self) {
            self.press(Input::Clear);
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared behaviour checks =====

/// Verifies one operation of each kind
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.press_keys("2+3="), "5");
    assert_eq!(driver.press_keys("C10-4="), "6");
    assert_eq!(driver.press_keys("C6*7="), "42");
    assert_eq!(driver.press_keys("C20/4="), "5");
    assert_eq!(driver.press_keys("C7/2="), "3.5");
    assert_eq!(driver.press_keys("C2^10="), "1024");
    assert_eq!(driver.press_keys("C100l10="), "2");
    driver.clear();
}

/// Verifies strict left-to-right evaluation without precedence
pub fn verify_left_to_right_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.press_keys("5+3"), "3");
    assert_eq!(driver.press_keys("*"), "8 *");
    assert_eq!(driver.press_keys("2="), "16");
    driver.clear();
}

/// Verifies that a second operator replaces the first
pub fn verify_operator_replacement<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.press_keys("5+"), "5 +");
    assert_eq!(driver.press_keys("*"), "5 *");
    assert_eq!(driver.press_keys("3="), "15");
    driver.clear();
}

/// Verifies that a result feeds the next operator
pub fn verify_result_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.press_keys("5+3="), "8");
    assert_eq!(driver.press_keys("*2="), "16");
    // a digit after a result starts a fresh number
    assert_eq!(driver.press_keys("4"), "4");
    driver.clear();
}

/// Verifies decimal entry
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.press_keys("3..1"), "3.1");
    assert_eq!(driver.press_keys("C007"), "7");
    assert_eq!(driver.press_keys("C.5*2="), "1");
    driver.clear();
}

/// Verifies error labels and recovery
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.press_keys("6/0="), "Error: Div by Zero");
    assert_eq!(driver.press_keys("7"), "7");
    // the failed operation is gone, so = does nothing
    assert_eq!(driver.press_keys("="), "7");

    assert_eq!(driver.press_keys("C0l2="), "Error: Log Domain");
    assert_eq!(driver.press_keys("C8l1="), "Error: Log Domain");
    assert_eq!(driver.press_keys("C8l0="), "Error: Log Domain");
    driver.clear();
}

/// Verifies the overflow threshold of the power operator
pub fn verify_overflow<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    let finite = driver.press_keys("10^308=");
    assert!(
        finite.len() > 300 && !finite.starts_with("Error"),
        "10^308 showed {finite}"
    );
    assert_eq!(driver.press_keys("C10^309="), "Error: Overflow");
    driver.clear();
}

/// Verifies that clear always returns to `0`
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    for keys in ["", "12", "12+", "12+3", "12+3=", "6/0="] {
        driver.clear();
        driver.press_keys(keys);
        driver.clear();
        assert_eq!(driver.display(), "0", "after {keys:?}");
        assert_eq!(driver.press_keys("4+4="), "8");
    }
    driver.clear();
}

/// Runs every check above
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_left_to_right_chaining(driver);
    verify_operator_replacement(driver);
    verify_result_chaining(driver);
    verify_decimal_entry(driver);
    verify_error_recovery(driver);
    verify_overflow(driver);
    verify_clear(driver);
}
