//! Keypad widget
//!
//! Draws the [`Keypad`] as a bordered grid and maps mouse clicks back to
//! buttons. The `0` key spans two columns in both directions.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::keypad::{ButtonKind, Keypad, KeypadButton};

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    /// Size of one grid cell inside `area`, or `None` if it does not fit
    fn cell_size(&self, area: Rect) -> Option<(u16, u16)> {
        let (rows, cols) = self.keypad.dimensions();
        let btn_width = area.width.saturating_sub(2) / cols as u16;
        let btn_height = area.height.saturating_sub(2) / rows as u16;
        (btn_width > 0 && btn_height > 0).then_some((btn_width, btn_height))
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // border
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let (btn_width, btn_height) = self.cell_size(area)?;
        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        self.keypad.index_at(row, col)
    }

    fn button_style(btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match btn.kind {
            ButtonKind::Number => Style::default().fg(Color::White),
            ButtonKind::Operator => Style::default().fg(Color::Yellow),
            ButtonKind::Equals => Style::default().fg(Color::Green),
            ButtonKind::Clear => Style::default().fg(Color::Red),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let Some((btn_width, btn_height)) = self.cell_size(area) else {
            return; // too small
        };
        let inner_x = area.x + 1;
        let inner_y = area.y + 1;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner_x + col as u16 * btn_width;
            let y = inner_y + row as u16 * btn_height + btn_height / 2;
            let width = btn_width * btn.col_span as u16;

            let label = format!("[{}]", btn.label);
            let label_x = x + width.saturating_sub(label.len() as u16) / 2;
            buf.set_span(label_x, y, &Span::styled(label, Self::button_style(btn)), width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Input;

    fn area() -> Rect {
        // 6x2 cells inside the border
        Rect::new(2, 3, 26, 12)
    }

    fn render_to_buffer(keypad: &Keypad) -> Buffer {
        let mut buf = Buffer::empty(area());
        KeypadWidget::new(keypad).render(area(), &mut buf);
        buf
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_all_labels() {
        let keypad = Keypad::new();
        let text = buffer_text(&render_to_buffer(&keypad));
        for btn in keypad.buttons() {
            assert!(text.contains(&format!("[{}]", btn.label)), "{}", btn.label);
        }
        assert!(text.contains("Keypad"));
    }

    #[test]
    fn test_render_too_small_only_draws_border() {
        let keypad = Keypad::new();
        let small = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(small);
        KeypadWidget::new(&keypad).render(small, &mut buf);
        assert!(!buffer_text(&buf).contains('['));
    }

    #[test]
    fn test_pressed_button_highlighted() {
        let mut keypad = Keypad::new();
        keypad.highlight_input(Input::Equals);
        let buf = render_to_buffer(&keypad);
        // '=' sits in the last column of the last row
        let y = 3 + 1 + 4 * 2 + 1;
        let highlighted = (area().x..area().right())
            .any(|x| buf[(x, y)].symbol() == "=" && buf[(x, y)].bg == Color::Yellow);
        assert!(highlighted);
    }

    #[test]
    fn test_hit_test_each_cell() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad);
        let a = area();
        for row in 0..5u16 {
            for col in 0..4u16 {
                let x = a.x + 1 + col * 6 + 2;
                let y = a.y + 1 + row * 2;
                let expected = keypad.index_at(row as usize, col as usize);
                assert_eq!(widget.hit_test(a, x, y), expected, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_hit_test_zero_spans_two_cells() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad);
        let a = area();
        let y = a.y + 1 + 4 * 2;
        let left = widget.hit_test(a, a.x + 2, y);
        let right = widget.hit_test(a, a.x + 1 + 6 + 2, y);
        assert_eq!(left, keypad.find_button_by_label("0"));
        assert_eq!(left, right);
    }

    #[test]
    fn test_hit_test_outside() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad);
        assert!(widget.hit_test(area(), 0, 0).is_none());
        assert!(widget.hit_test(area(), 100, 100).is_none());
    }

    #[test]
    fn test_hit_test_border() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad);
        let a = area();
        assert!(widget.hit_test(a, a.x, a.y + 5).is_none());
        assert!(widget.hit_test(a, a.x + 5, a.y).is_none());
        assert!(widget.hit_test(a, a.right() - 1, a.y + 5).is_none());
    }

    #[test]
    fn test_hit_test_leftover_margin() {
        // 23 inner columns leave 3 unused on the right
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad);
        let a = Rect::new(0, 0, 25, 12);
        assert!(widget.hit_test(a, 22, 2).is_none());
    }
}
