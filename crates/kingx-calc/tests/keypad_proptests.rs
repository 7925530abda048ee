//! Property-based tests for the keypad model

use proptest::prelude::*;

use kingx_calc::core::{Engine, Input, Operation};
use kingx_calc::keypad::{ButtonKind, Keypad};

// ===== Strategy definitions =====

fn operator_strategy() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

/// Any input a button can emit
fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        prop::sample::select("0123456789.".chars().collect::<Vec<_>>()).prop_map(Input::Digit),
        operator_strategy().prop_map(Input::Operator),
        Just(Input::Equals),
        Just(Input::Clear),
    ]
}

fn grid_position_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..5usize, 0usize..4usize)
}

proptest! {
    /// Every grid cell is covered by a button
    #[test]
    fn prop_button_at_valid_position_exists((row, col) in grid_position_strategy()) {
        let keypad = Keypad::new();
        let button = keypad.get_button_at(row, col);
        prop_assert!(button.is_some());
        prop_assert!(button.unwrap().covers(row, col));
    }

    /// Nothing exists past the last row
    #[test]
    fn prop_button_at_invalid_row_missing(row in 5usize..100usize, col in 0usize..4usize) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_none());
    }

    /// Nothing exists past the last column
    #[test]
    fn prop_button_at_invalid_col_missing(row in 0usize..5usize, col in 4usize..100usize) {
        let keypad = Keypad::new();
        prop_assert!(keypad.get_button_at(row, col).is_none());
    }

    /// Each input has exactly one button
    #[test]
    fn prop_every_input_has_one_button(input in input_strategy()) {
        let keypad = Keypad::new();
        let count = keypad.buttons().filter(|b| b.input == input).count();
        prop_assert_eq!(count, 1);
    }

    /// The button's kind agrees with its input
    #[test]
    fn prop_kind_matches_input(input in input_strategy()) {
        let keypad = Keypad::new();
        let idx = keypad.find_button_by_input(input).unwrap();
        let kind = keypad.get_button(idx).unwrap().kind;
        let expected = match input {
            Input::Digit(_) => ButtonKind::Number,
            Input::Operator(_) => ButtonKind::Operator,
            Input::Equals => ButtonKind::Equals,
            Input::Clear => ButtonKind::Clear,
        };
        prop_assert_eq!(kind, expected);
    }

    /// Highlighting leaves exactly one button pressed
    #[test]
    fn prop_highlight_is_exclusive(inputs in prop::collection::vec(input_strategy(), 1..20)) {
        let mut keypad = Keypad::new();
        for input in &inputs {
            keypad.highlight_input(*input);
        }
        let pressed: Vec<_> = keypad.buttons().filter(|b| b.pressed).collect();
        prop_assert_eq!(pressed.len(), 1);
        prop_assert_eq!(pressed[0].input, *inputs.last().unwrap());
    }

    /// Pressing buttons and applying inputs directly give the same display
    #[test]
    fn prop_buttons_match_direct_inputs(inputs in prop::collection::vec(input_strategy(), 0..30)) {
        let mut keypad = Keypad::new();
        let mut via_buttons = Engine::new();
        let mut direct = Engine::new();
        for input in inputs {
            let idx = keypad.find_button_by_input(input).unwrap();
            let emitted = keypad.press_button(idx).unwrap();
            via_buttons.apply(emitted);
            direct.apply(input);
        }
        prop_assert_eq!(via_buttons.display(), direct.display());
    }
}
