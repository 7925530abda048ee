//! TUI application state

use ratatui::layout::Rect;
use tracing::debug;

use super::input::KeyAction;
use super::keypad::KeypadWidget;
use crate::config::CalculatorConfig;
use crate::core::{CalcError, Engine, Input, Phase};
use crate::keypad::Keypad;

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    engine: Engine,
    keypad: Keypad,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an app using the configured display precision
    #[must_use]
    pub fn with_config(config: &CalculatorConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            ..Self::default()
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// What the display shows
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// The error on the display, if any
    #[must_use]
    pub fn last_error(&self) -> Option<CalcError> {
        self.engine.state().last_error()
    }

    /// Current state machine phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.engine.state().phase()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies an input, highlighting its button
    pub fn press(&mut self, input: Input) -> &str {
        self.keypad.highlight_input(input);
        self.engine.apply(input)
    }

    /// Presses the button at `index`; returns false if there is none
    pub fn press_button(&mut self, index: usize) -> bool {
        self.keypad.release_all();
        match self.keypad.press_button(index) {
            Some(input) => {
                self.engine.apply(input);
                true
            }
            None => false,
        }
    }

    /// Presses the button a typed character stands for
    pub fn press_key(&mut self, key: char) -> bool {
        match self.keypad.find_button_by_key(key) {
            Some(index) => self.press_button(index),
            None => {
                debug!(%key, "no button for key");
                false
            }
        }
    }

    /// Presses the button under a click inside `keypad_area`
    pub fn click(&mut self, keypad_area: Rect, column: u16, row: u16) -> bool {
        let hit = KeypadWidget::new(&self.keypad).hit_test(keypad_area, column, row);
        debug!(column, row, ?hit, "click");
        hit.is_some_and(|index| self.press_button(index))
    }

    /// Applies a terminal action; `keypad_area` is where the keypad was drawn
    pub fn handle_action(&mut self, action: KeyAction, keypad_area: Rect) {
        match action {
            KeyAction::Press(input) => {
                self.press(input);
            }
            KeyAction::Key(key) => {
                self.press_key(key);
            }
            KeyAction::Click { column, row } => {
                self.click(keypad_area, column, row);
            }
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    fn press_all(app: &mut CalculatorApp, keys: &str) {
        for input in Input::sequence(keys) {
            app.press(input);
        }
    }

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.display(), "0");
        assert_eq!(app.phase(), Phase::Idle);
        assert!(app.last_error().is_none());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_app_with_config() {
        let config = CalculatorConfig::default().with_significant_digits(3);
        let mut app = CalculatorApp::with_config(&config);
        press_all(&mut app, "2/3=");
        assert_eq!(app.display(), "0.667");
    }

    #[test]
    fn test_press_updates_display_and_highlight() {
        let mut app = CalculatorApp::new();
        assert_eq!(app.press(Input::Digit('7')), "7");
        let idx = app.keypad().find_button_by_label("7").unwrap();
        assert!(app.keypad().get_button(idx).unwrap().pressed);
    }

    #[test]
    fn test_press_button() {
        let mut app = CalculatorApp::new();
        let nine = app.keypad().find_button_by_label("9").unwrap();
        let plus = app.keypad().find_button_by_label("+").unwrap();
        let equals = app.keypad().find_button_by_label("=").unwrap();
        assert!(app.press_button(nine));
        assert!(app.press_button(plus));
        assert!(app.press_button(nine));
        assert!(app.press_button(equals));
        assert_eq!(app.display(), "18");
    }

    #[test]
    fn test_press_button_out_of_range() {
        let mut app = CalculatorApp::new();
        assert!(!app.press_button(42));
        assert_eq!(app.display(), "0");
    }

    #[test]
    fn test_last_error() {
        let mut app = CalculatorApp::new();
        press_all(&mut app, "1/0=");
        assert_eq!(app.last_error(), Some(CalcError::DivisionByZero));
        assert_eq!(app.phase(), Phase::ErrorShown);
        app.press(Input::Digit('2'));
        assert!(app.last_error().is_none());
    }

    #[test]
    fn test_press_key_goes_through_keypad() {
        let mut app = CalculatorApp::new();
        for key in "8l2=".chars() {
            assert!(app.press_key(key));
        }
        assert_eq!(app.display(), "3");
        let idx = app.keypad().find_button_by_label("=").unwrap();
        assert!(app.keypad().get_button(idx).unwrap().pressed);
    }

    #[test]
    fn test_press_key_without_button_is_ignored() {
        let mut app = CalculatorApp::new();
        app.press_key('4');
        assert!(!app.press_key('x'));
        assert!(!app.press_key(' '));
        assert_eq!(app.display(), "4");
    }

    #[test]
    fn test_handle_key_action() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 26, 12);
        for key in "6*7".chars() {
            app.handle_action(KeyAction::Key(key), area);
        }
        app.handle_action(KeyAction::Press(Input::Equals), area);
        assert_eq!(app.display(), "42");
        app.handle_action(KeyAction::Key('C'), area);
        assert_eq!(app.display(), "0");
    }

    #[test]
    fn test_click_presses_button() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 26, 12);
        // row 1, col 0 is '7'
        assert!(app.click(area, 3, 3));
        assert_eq!(app.display(), "7");
    }

    #[test]
    fn test_click_outside_keypad() {
        let mut app = CalculatorApp::new();
        assert!(!app.click(Rect::new(10, 10, 26, 12), 0, 0));
        assert_eq!(app.display(), "0");
    }

    #[test]
    fn test_handle_action() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 26, 12);
        app.handle_action(KeyAction::Press(Input::Digit('4')), area);
        app.handle_action(KeyAction::Press(Input::Operator(Operation::Power)), area);
        app.handle_action(KeyAction::Press(Input::Digit('2')), area);
        app.handle_action(KeyAction::None, area);
        app.handle_action(KeyAction::Press(Input::Equals), area);
        assert_eq!(app.display(), "16");
        assert!(!app.should_quit());
        app.handle_action(KeyAction::Quit, area);
        assert!(app.should_quit());
    }

    #[test]
    fn test_handle_click_action() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 26, 12);
        // row 0, col 0 is 'C'
        app.press(Input::Digit('5'));
        app.handle_action(KeyAction::Click { column: 3, row: 1 }, area);
        assert_eq!(app.display(), "0");
    }
}
