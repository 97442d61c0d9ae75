//! Keybindings: Enter send, Tab panel toggle, Up/Down history, PgUp/PgDn scroll.

use crate::actions::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub const TICK_RATE: Duration = Duration::from_millis(80);

pub fn key_to_action(event: &KeyEvent, input_empty: bool) -> Option<Action> {
    // Accept Press and Repeat (hold key); ignore Release so we don't double-handle.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let (code, mods) = (event.code, event.modifiers);

    if code == KeyCode::Char('c') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }
    if code == KeyCode::Char('l') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::ClearInput);
    }
    if code == KeyCode::Char('q') && mods.is_empty() && input_empty {
        return Some(Action::Quit);
    }

    if code == KeyCode::Tab && mods.is_empty() {
        return Some(Action::TogglePanel);
    }
    if code == KeyCode::Enter && mods.is_empty() {
        return Some(Action::Submit);
    }
    if code == KeyCode::Backspace && mods.is_empty() {
        return Some(Action::Backspace);
    }

    if code == KeyCode::Up && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::ScrollUp);
    }
    if code == KeyCode::Down && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::ScrollDown);
    }
    if code == KeyCode::Up && mods.is_empty() {
        return Some(Action::HistoryUp);
    }
    if code == KeyCode::Down && mods.is_empty() {
        return Some(Action::HistoryDown);
    }

    if code == KeyCode::PageUp && mods.is_empty() {
        return Some(Action::ScrollPageUp);
    }
    if code == KeyCode::PageDown && mods.is_empty() {
        return Some(Action::ScrollPageDown);
    }
    if code == KeyCode::Home && mods.is_empty() && input_empty {
        return Some(Action::ScrollTop);
    }
    if code == KeyCode::End && mods.is_empty() && input_empty {
        return Some(Action::ScrollBottom);
    }

    // Any other character goes to input (allow Alt for accented chars; only block Ctrl/Cmd).
    if let KeyCode::Char(c) = code {
        if !mods.contains(KeyModifiers::CONTROL) && !mods.contains(KeyModifiers::SUPER) {
            return Some(Action::Char(c));
        }
    }

    None
}
