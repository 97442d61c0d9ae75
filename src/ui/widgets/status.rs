//! Status bar: entry count and shortcuts.

use ratatui::{style::Style, text::Span, widgets::Paragraph, Frame};

use crate::ui::theme::colors;

pub fn render(f: &mut Frame, area: ratatui::prelude::Rect, entry_count: usize) {
    let left = match entry_count {
        0 => " Ready".to_string(),
        1 => " 1 message".to_string(),
        n => format!(" {} messages", n),
    };
    let right = " Tab panel  ↑↓ history  PgUp/PgDn scroll  Enter send  q quit ";
    let width = area.width as usize;
    let left_len = left.chars().count();
    let right_len = right.chars().count();
    let pad = width.saturating_sub(left_len + right_len);
    let line = format!("{}{}{}", left, " ".repeat(pad), right);
    let span = Span::styled(line, Style::default().fg(colors::MUTED).bg(colors::ELEVATED));
    f.render_widget(Paragraph::new(span), area);
}
