//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::Phase;

/// Window title
pub const TITLE: &str = " KingX Calculator ";

/// Key reference shown on the bottom line
pub const HELP_LINE: &str = "0-9 . | + - * / ^ l | = Enter | c Esc clear | q quit";

/// Where each part of the UI goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// Display panel
    pub display: Rect,
    /// Keypad grid, used for mouse hit-testing
    pub keypad: Rect,
    /// Status and help line
    pub help: Rect,
}

impl CalculatorLayout {
    /// Splits the full terminal area
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Display
                Constraint::Min(7),    // Keypad
                Constraint::Length(1), // Help
            ])
            .split(area);
        Self {
            display: chunks[0],
            keypad: chunks[1],
            help: chunks[2],
        }
    }
}

/// Renders the calculator UI to the frame and returns the layout used
pub fn render(app: &CalculatorApp, frame: &mut Frame) -> CalculatorLayout {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
    CalculatorLayout::new(area)
}

/// Short phase name for the status line
fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "ready",
        Phase::EnteringFirstOperand | Phase::EnteringSecondOperand => "entering",
        Phase::OperatorArmed => "operator",
        Phase::ResultShown => "result",
        Phase::ErrorShown => "error",
    }
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the display panel, right-justified
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.last_error().is_some() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    /// Renders the status and help line
    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(
                format!("[{}] ", phase_label(self.app.phase())),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled(HELP_LINE, Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = CalculatorLayout::new(area);
        self.render_display(layout.display, buf);
        KeypadWidget::new(self.app.keypad()).render(layout.keypad, buf);
        self.render_help(layout.help, buf);
    }
}
