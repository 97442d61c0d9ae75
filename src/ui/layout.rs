//! Vertical layout: header always visible, body regions only when expanded.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::theme::{HEADER_HEIGHT, INPUT_HEIGHT, MARGIN_X, MIN_CHAT_LINES, STATUS_HEIGHT};

#[derive(Clone, Debug)]
pub struct BodyRegions {
    pub chat: Rect,
    pub input: Rect,
    pub status: Rect,
}

#[derive(Clone, Debug)]
pub struct LayoutRegions {
    pub header: Rect,
    /// None while the panel is collapsed.
    pub body: Option<BodyRegions>,
}

pub fn compute(area: Rect, body_visible: bool) -> LayoutRegions {
    if !body_visible {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
            .split(area);
        return LayoutRegions {
            header: chunks[0],
            body: None,
        };
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(MIN_CHAT_LINES),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);
    let chat = Rect {
        x: area.x + MARGIN_X,
        y: chunks[1].y,
        width: area.width.saturating_sub(2 * MARGIN_X),
        height: chunks[1].height,
    };
    LayoutRegions {
        header: chunks[0],
        body: Some(BodyRegions {
            chat,
            input: chunks[2],
            status: chunks[3],
        }),
    }
}
