//! Header bar: the always-visible strip that stands in for the original
//! widget's clickable header.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::colors;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const TITLE: &str = "Chat with us ";
/// Reserve +1 for 💬 (wide in terminal) so the hint doesn't clip.
const EMOJI_WIDTH_SLOP: usize = 1;

pub fn render(f: &mut Frame, area: ratatui::prelude::Rect, expanded: bool) {
    let hint = if expanded { " Tab to close " } else { " Tab to open " };

    // Total width available, minus 2 for leading "  " indent.
    let total = (area.width as usize).saturating_sub(2);
    // Number of horizontal dashes between the corners (╭ and ╮ take 1 each).
    let dash_count = total.saturating_sub(2);
    // Inner content width = between the "│ " and " │" (1 border + 1 space each side = 4).
    let inner = total.saturating_sub(4);

    let top_line = format!("╭{}╮", "─".repeat(dash_count));
    let bottom_line = format!("╰{}╯", "─".repeat(dash_count));

    let hint_len = hint.chars().count();
    let title_len = "💬 ".chars().count()
        + TITLE.chars().count()
        + format!("(v{VERSION})").chars().count()
        + EMOJI_WIDTH_SLOP;
    let pad = inner.saturating_sub(title_len + hint_len);

    let border = Style::default().fg(colors::BORDER);
    let lines = vec![
        // ╭─────────────────────────────────╮
        Line::from(vec![
            Span::styled("  ", border),
            Span::styled(top_line, border),
        ]),
        // │ 💬 Chat with us (v0.1.0)  Tab… │
        Line::from(vec![
            Span::styled("  │ ", border),
            Span::styled("💬 ", Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(TITLE, Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD)),
            Span::styled(format!("(v{VERSION})"), Style::default().fg(colors::TEXT_DIM)),
            Span::styled(" ".repeat(pad), Style::default()),
            Span::styled(hint, Style::default().fg(colors::MUTED)),
            Span::styled("│", border),
        ]),
        // ╰─────────────────────────────────╯
        Line::from(vec![
            Span::styled("  ", border),
            Span::styled(bottom_line, border),
        ]),
    ];

    let para = Paragraph::new(lines).style(Style::default().bg(colors::ELEVATED));
    f.render_widget(para, area);
}
