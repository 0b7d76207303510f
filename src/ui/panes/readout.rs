//! Calculator display pane

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the display: expression hint on top, current number below
pub fn render_readout_pane(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    hint: Option<&str>,
    is_error: bool,
) {
    let block = Block::default()
        .title(" Display ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused))
        .padding(Padding::horizontal(1));

    // Borders plus padding
    let width = area.width.saturating_sub(4) as usize;

    let number_style = Style::default()
        .fg(if is_error {
            DEFAULT_THEME.error
        } else {
            DEFAULT_THEME.number
        })
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(Span::styled(
            fit_width(hint.unwrap_or(""), width),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::from(Span::styled(fit_width(text, width), number_style)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}

/// Keep the tail of text that is wider than the pane, marking the cut with `…`
fn fit_width(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width || width == 0 {
        return text.to_string();
    }
    let tail: String = text.chars().skip(count - width + 1).collect();
    format!("…{}", tail)
}
