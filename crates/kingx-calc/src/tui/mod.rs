//! Terminal front end
//!
//! A thin adapter: terminal events become engine inputs, and the engine's
//! display text is drawn verbatim.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::KeypadWidget;
pub use ui::{render, CalculatorLayout, CalculatorUI, HELP_LINE, TITLE};
