//! State container and action dispatch for the chat panel.

use tracing::debug;

use crate::actions::Action;
use crate::state::AppState;
use crate::widget::{ChatWidget, PanelView};

pub struct App {
    pub state: AppState,
    pub widget: ChatWidget,
    pub should_quit: bool,
}

impl App {
    pub fn new(start_expanded: bool) -> Self {
        let mut state = AppState::default();
        if start_expanded {
            state.show();
        }
        Self {
            state,
            widget: ChatWidget::new(start_expanded),
            should_quit: false,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatch");
        match action {
            Action::Quit => self.should_quit = true,

            Action::Char(c) => {
                let pos = self.state.input_cursor.min(self.state.input_buffer.len());
                self.state.input_buffer.insert(pos, c);
                self.state.input_cursor = pos + c.len_utf8();
            }
            Action::Backspace => {
                let end = self.state.input_cursor.min(self.state.input_buffer.len());
                if let Some((idx, _)) = self.state.input_buffer[..end].char_indices().next_back() {
                    self.state.input_buffer.remove(idx);
                    self.state.input_cursor = idx;
                }
            }
            Action::ClearInput => self.state.clear_input(),
            Action::Submit => self.submit_input(),

            Action::TogglePanel => self.widget.toggle_panel(&mut self.state),

            Action::ScrollUp => self.scroll_back(1),
            Action::ScrollDown => {
                self.state.chat.scroll = self.state.chat.scroll.saturating_sub(1);
            }
            Action::ScrollPageUp => self.scroll_back(10),
            Action::ScrollPageDown => {
                self.state.chat.scroll = self.state.chat.scroll.saturating_sub(10);
            }
            Action::ScrollTop => self.state.chat.scroll = self.state.chat.line_count(),
            Action::ScrollBottom => self.state.chat.scroll = 0,

            Action::HistoryUp => self.history_up(),
            Action::HistoryDown => self.history_down(),
        }
    }

    fn submit_input(&mut self) {
        let raw = self.state.input_buffer.trim().to_string();
        if raw.is_empty() {
            return;
        }

        if self.state.history.last() != Some(&raw) {
            self.state.history.push(raw.clone());
        }
        self.state.history_index = self.state.history.len();

        self.widget.send_message(&raw, &mut self.state);
        if let Some(entry) = self.state.chat.entries.last() {
            debug!(entry = %entry.display_line(), "appended canned reply");
        }
    }

    /// Scroll toward older entries; clamped so the offset can't run far
    /// past the top of the log.
    fn scroll_back(&mut self, n: usize) {
        let max = self.state.chat.line_count();
        self.state.chat.scroll = (self.state.chat.scroll + n).min(max);
    }

    fn history_up(&mut self) {
        if !self.state.history.is_empty() && self.state.history_index > 0 {
            self.state.history_index -= 1;
            self.state.input_buffer = self.state.history[self.state.history_index].clone();
            self.state.input_cursor = self.state.input_buffer.len();
        }
    }

    fn history_down(&mut self) {
        if self.state.history_index < self.state.history.len() {
            self.state.history_index += 1;
            self.state.input_buffer = if self.state.history_index >= self.state.history.len() {
                String::new()
            } else {
                self.state.history[self.state.history_index].clone()
            };
            self.state.input_cursor = self.state.input_buffer.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::CANNED_REPLY;

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.dispatch(Action::Char(c));
        }
    }

    fn log_lines(app: &App) -> Vec<String> {
        app.state
            .chat
            .entries
            .iter()
            .map(|m| m.display_line())
            .collect()
    }

    #[test]
    fn test_submit_appends_user_then_bot_and_clears_input() {
        let mut app = App::new(true);
        type_str(&mut app, "Hello");
        app.dispatch(Action::Submit);
        assert_eq!(
            log_lines(&app),
            vec![
                "You: Hello".to_string(),
                format!("Bot: {}", CANNED_REPLY),
            ]
        );
        assert!(app.state.input_buffer.is_empty());
        assert_eq!(app.state.input_cursor, 0);
        assert_eq!(app.state.chat.scroll, 0);
    }

    #[test]
    fn test_submit_whitespace_is_noop() {
        let mut app = App::new(true);
        type_str(&mut app, "   ");
        app.dispatch(Action::Submit);
        assert!(app.state.chat.entries.is_empty());
        assert_eq!(app.state.input_buffer, "   ");
    }

    #[test]
    fn test_toggle_panel_twice_restores_state() {
        let mut app = App::new(false);
        assert!(!app.state.body_visible);
        app.dispatch(Action::TogglePanel);
        assert!(app.state.body_visible);
        assert!(app.widget.is_expanded());
        app.dispatch(Action::TogglePanel);
        assert!(!app.state.body_visible);
        assert!(!app.widget.is_expanded());
    }

    #[test]
    fn test_starts_expanded_when_configured() {
        let app = App::new(true);
        assert!(app.state.body_visible);
        assert!(app.widget.is_expanded());
    }

    #[test]
    fn test_backspace_handles_multibyte() {
        let mut app = App::new(true);
        type_str(&mut app, "héllo");
        app.dispatch(Action::Backspace);
        app.dispatch(Action::Backspace);
        app.dispatch(Action::Backspace);
        assert_eq!(app.state.input_buffer, "hé");
        app.dispatch(Action::Backspace);
        assert_eq!(app.state.input_buffer, "h");
    }

    #[test]
    fn test_history_recalls_previous_inputs() {
        let mut app = App::new(true);
        type_str(&mut app, "first");
        app.dispatch(Action::Submit);
        type_str(&mut app, "second");
        app.dispatch(Action::Submit);

        app.dispatch(Action::HistoryUp);
        assert_eq!(app.state.input_buffer, "second");
        app.dispatch(Action::HistoryUp);
        assert_eq!(app.state.input_buffer, "first");
        app.dispatch(Action::HistoryDown);
        assert_eq!(app.state.input_buffer, "second");
        app.dispatch(Action::HistoryDown);
        assert!(app.state.input_buffer.is_empty());
    }

    #[test]
    fn test_scroll_back_is_clamped() {
        let mut app = App::new(true);
        type_str(&mut app, "hi");
        app.dispatch(Action::Submit);
        for _ in 0..50 {
            app.dispatch(Action::ScrollUp);
        }
        assert_eq!(app.state.chat.scroll, app.state.chat.line_count());
        app.dispatch(Action::ScrollBottom);
        assert_eq!(app.state.chat.scroll, 0);
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = App::new(false);
        app.dispatch(Action::Quit);
        assert!(app.should_quit);
    }
}
