//! Message log: one labelled line per entry, pinned to the newest.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::state::{ChatState, Sender};
use crate::ui::theme::{colors, MESSAGE_GAP};

pub fn render(f: &mut Frame, chat: &ChatState, area: ratatui::prelude::Rect) {
    let mut lines: Vec<Line> = Vec::new();
    let mut first_message = true;

    for msg in &chat.entries {
        if !first_message {
            for _ in 0..MESSAGE_GAP {
                lines.push(Line::from(Span::raw("")));
            }
        }
        first_message = false;

        let label_style = match msg.sender {
            Sender::User => Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
            Sender::Bot => Style::default().fg(colors::ACCENT_SOFT).add_modifier(Modifier::BOLD),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", msg.sender.label()), label_style),
            Span::styled(msg.text.as_str(), Style::default().fg(colors::TEXT)),
        ]));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Say hello — Enter to send",
            Style::default().fg(colors::TEXT_DIM),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::BORDER))
        .style(Style::default().bg(colors::BG));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Bottom-anchored scroll: chat.scroll is an offset back from the
    // newest line, clamped here to the real maximum.
    let height = inner.height as usize;
    let total = lines.len();
    let max_scroll = total.saturating_sub(height);
    let offset = chat.scroll.min(max_scroll);
    let start = total.saturating_sub(height + offset);
    let visible: Vec<Line> = lines.into_iter().skip(start).take(height).collect();
    let para = Paragraph::new(visible)
        .style(Style::default().fg(colors::TEXT).bg(colors::BG))
        .wrap(Wrap { trim: false });
    f.render_widget(para, inner);
}
