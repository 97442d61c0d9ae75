//! Theme: dark support-widget palette and layout metrics.

use ratatui::style::Color;

pub mod colors {
    use super::*;
    /// Main canvas (message log) — dark gray so white text pops.
    pub const BG: Color = Color::Rgb(0x18, 0x1c, 0x22);
    /// Header, input bar, status.
    pub const ELEVATED: Color = Color::Rgb(0x16, 0x1a, 0x1f);
    /// Borders / separators.
    pub const BORDER: Color = Color::Rgb(0x2d, 0x34, 0x3e);
    /// Primary accent (prompt, You label).
    pub const ACCENT: Color = Color::Rgb(0x6b, 0xbc, 0xff);
    /// Bot label.
    pub const ACCENT_SOFT: Color = Color::Rgb(0x99, 0xd4, 0xff);
    /// Body text — near white.
    pub const TEXT: Color = Color::Rgb(0xf2, 0xf4, 0xf8);
    /// Secondary text.
    pub const TEXT_DIM: Color = Color::Rgb(0xbc, 0xc5, 0xd0);
    /// Hints.
    pub const MUTED: Color = Color::Rgb(0x94, 0x9e, 0xad);
}

/// Boxed title bar: border, content line, border.
pub const HEADER_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 1;
/// Top border plus the prompt line.
pub const INPUT_HEIGHT: u16 = 2;
pub const MIN_CHAT_LINES: u16 = 3;
/// Blank line between messages.
pub const MESSAGE_GAP: usize = 1;
/// Inner horizontal margin (chars each side).
pub const MARGIN_X: u16 = 1;
