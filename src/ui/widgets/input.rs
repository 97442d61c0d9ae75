//! Input bar: prompt, buffer, cursor.

use ratatui::{
    layout::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::colors;

pub fn render(f: &mut Frame, buffer: &str, cursor_pos: usize, area: ratatui::prelude::Rect) {
    let prompt = " ▸ ";
    let line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled(buffer, Style::default().fg(colors::TEXT)),
    ]);
    let block = Block::default()
        .style(Style::default().bg(colors::ELEVATED))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER))
        .border_type(BorderType::Plain);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(line), inner);

    let cursor_x = inner.x
        + 3
        + buffer.get(..cursor_pos).map(|s| s.chars().count()).unwrap_or(0) as u16;
    let x = cursor_x.min(inner.x + inner.width.saturating_sub(1));
    f.set_cursor_position(Position { x, y: inner.y });
}
