//! Keypad pane: a grid of calculator buttons
//!
//! ```text
//! [ AC ] [ ± ] [ % ] [ log ] [ ÷ ]
//! [ 7  ] [ 8 ] [ 9 ] [ e   ] [ × ]
//! [ 4  ] [ 5 ] [ 6 ] [ π   ] [ − ]
//! [ 1  ] [ 2 ] [ 3 ] [ xʸ  ] [ + ]
//! [ 0  ] [ . ] [ ʸ√x ] [   =   ]
//! ```

use crate::session::{Button, Constant, Operator, UnaryFn};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Keypad layout in row-major order
pub const KEYPAD_ROWS: [&[Button]; 5] = [
    &[
        Button::AllClear,
        Button::ToggleSign,
        Button::Unary(UnaryFn::Percent),
        Button::Unary(UnaryFn::Log10),
        Button::Operator(Operator::Divide),
    ],
    &[
        Button::Digit(7),
        Button::Digit(8),
        Button::Digit(9),
        Button::Constant(Constant::E),
        Button::Operator(Operator::Multiply),
    ],
    &[
        Button::Digit(4),
        Button::Digit(5),
        Button::Digit(6),
        Button::Constant(Constant::Pi),
        Button::Operator(Operator::Subtract),
    ],
    &[
        Button::Digit(1),
        Button::Digit(2),
        Button::Digit(3),
        Button::Operator(Operator::Power),
        Button::Operator(Operator::Add),
    ],
    &[
        Button::Digit(0),
        Button::Dot,
        Button::Operator(Operator::Root),
        Button::Equals,
    ],
];

/// Screen area occupied by one button, for mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadHit {
    pub area: Rect,
    pub button: Button,
}

impl KeypadHit {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }
}

/// Render the keypad and return where each button landed
pub fn render_keypad_pane(
    frame: &mut Frame,
    area: Rect,
    last_pressed: Option<Button>,
) -> Vec<KeypadHit> {
    let block = Block::default()
        .title(" Keypad ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row_count = KEYPAD_ROWS.len() as u32;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(KEYPAD_ROWS.map(|_| Constraint::Ratio(1, row_count)))
        .split(inner);

    let mut hits = Vec::new();
    for (row_area, buttons) in rows.iter().zip(KEYPAD_ROWS) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                buttons
                    .iter()
                    .map(|_| Constraint::Ratio(1, buttons.len() as u32)),
            )
            .split(*row_area);

        for (cell, button) in cells.iter().zip(buttons) {
            render_button(frame, *cell, *button, last_pressed == Some(*button));
            hits.push(KeypadHit {
                area: *cell,
                button: *button,
            });
        }
    }
    hits
}

fn render_button(frame: &mut Frame, area: Rect, button: Button, pressed: bool) {
    let mut style = Style::default().fg(button_color(button));
    if pressed {
        style = style
            .bg(DEFAULT_THEME.key_pressed)
            .add_modifier(Modifier::BOLD);
    }

    let border_style = if pressed {
        Style::default().fg(DEFAULT_THEME.border_focused)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    // Vertically centre the label when the cell has room
    let top_pad = area.height.saturating_sub(3) / 2;
    let mut text = "\n".repeat(top_pad as usize);
    text.push_str(button.label());

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(paragraph, area);
}

fn button_color(button: Button) -> Color {
    match button {
        Button::Digit(_) | Button::Dot => DEFAULT_THEME.fg,
        Button::Operator(_) => DEFAULT_THEME.secondary,
        Button::Constant(_) | Button::Unary(_) | Button::ToggleSign => DEFAULT_THEME.function,
        Button::Equals => DEFAULT_THEME.success,
        Button::AllClear => DEFAULT_THEME.error,
    }
}
