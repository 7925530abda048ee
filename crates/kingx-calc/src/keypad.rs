//! The 19-button keypad
//!
//! Maps button identity to engine [`Input`]s independently of any UI
//! toolkit. The terminal front end renders and hit-tests this model; tests
//! press buttons through it exactly as a user would.

use crate::core::{Input, Operation};

/// What a button does, used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// A digit or the decimal point
    Number,
    /// A binary operator
    Operator,
    /// Evaluate
    Equals,
    /// Reset
    Clear,
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text on the button
    pub label: &'static str,
    /// Grid row
    pub row: usize,
    /// Leftmost grid column
    pub col: usize,
    /// Number of columns covered
    pub col_span: usize,
    /// Styling category
    pub kind: ButtonKind,
    /// The input this button emits
    pub input: Input,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    fn new(label: &'static str, (row, col): (usize, usize), input: Input) -> Self {
        let kind = match input {
            Input::Digit(_) => ButtonKind::Number,
            Input::Operator(_) => ButtonKind::Operator,
            Input::Equals => ButtonKind::Equals,
            Input::Clear => ButtonKind::Clear,
        };
        Self {
            label,
            row,
            col,
            col_span: 1,
            kind,
            input,
            pressed: false,
        }
    }

    fn digit(label: &'static str, pos: (usize, usize)) -> Self {
        let d = label.chars().next().unwrap_or('0');
        Self::new(label, pos, Input::Digit(d))
    }

    fn operator(label: &'static str, pos: (usize, usize), op: Operation) -> Self {
        Self::new(label, pos, Input::Operator(op))
    }

    const fn spanning(mut self, col_span: usize) -> Self {
        self.col_span = col_span;
        self
    }

    /// Whether the button covers grid cell (`row`, `col`)
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.col_span
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout, 5 rows by 4 columns
/// ```text
/// [ C ] [Log] [ ^ ] [ / ]
/// [ 7 ] [ 8 ] [ 9 ] [ * ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [    0    ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            KeypadButton::new("C", (0, 0), Input::Clear),
            KeypadButton::operator("Log", (0, 1), Operation::Logarithm),
            KeypadButton::operator("^", (0, 2), Operation::Power),
            KeypadButton::operator("/", (0, 3), Operation::Divide),
            KeypadButton::digit("7", (1, 0)),
            KeypadButton::digit("8", (1, 1)),
            KeypadButton::digit("9", (1, 2)),
            KeypadButton::operator("*", (1, 3), Operation::Multiply),
            KeypadButton::digit("4", (2, 0)),
            KeypadButton::digit("5", (2, 1)),
            KeypadButton::digit("6", (2, 2)),
            KeypadButton::operator("-", (2, 3), Operation::Subtract),
            KeypadButton::digit("1", (3, 0)),
            KeypadButton::digit("2", (3, 1)),
            KeypadButton::digit("3", (3, 2)),
            KeypadButton::operator("+", (3, 3), Operation::Add),
            KeypadButton::digit("0", (4, 0)).spanning(2),
            KeypadButton::digit(".", (4, 2)),
            KeypadButton::new("=", (4, 3), Input::Equals),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Index of the button covering (`row`, `col`)
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Gets the button covering (`row`, `col`)
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Finds the button that emits `input`
    #[must_use]
    pub fn find_button_by_input(&self, input: Input) -> Option<usize> {
        self.buttons.iter().position(|b| b.input == input)
    }

    /// Finds the button a keyboard character stands for
    #[must_use]
    pub fn find_button_by_key(&self, key: char) -> Option<usize> {
        Input::from_key(key).and_then(|input| self.find_button_by_input(input))
    }

    /// Highlights a button and returns the input it emits
    pub fn press_button(&mut self, index: usize) -> Option<Input> {
        let btn = self.buttons.get_mut(index)?;
        btn.set_pressed(true);
        Some(btn.input)
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button emitting `input`
    pub fn highlight_input(&mut self, input: Input) {
        self.release_all();
        if let Some(idx) = self.find_button_by_input(input) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().map(|btn| ((btn.row, btn.col), btn))
    }
}
