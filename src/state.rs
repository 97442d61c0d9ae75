//! App state: chat log, input buffer, history, panel visibility.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::widget::PanelView;

/// Who authored a chat entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn label(self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Bot => "Bot",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub timestamp: SystemTime,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp: SystemTime::now(),
        }
    }

    /// The log line for this entry, e.g. `You: hello`.
    pub fn display_line(&self) -> String {
        format!("{}: {}", self.sender.label(), self.text)
    }
}

/// Chat log plus a scroll offset measured from the bottom (0 = pinned to
/// the newest entry).
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub entries: Vec<Message>,
    pub scroll: usize,
}

impl ChatState {
    /// Upper bound on rendered log lines (entries plus gaps). The renderer
    /// clamps scrolling to the real maximum.
    pub fn line_count(&self) -> usize {
        self.entries
            .iter()
            .map(|m| m.text.lines().count().max(1) + 1)
            .sum()
    }
}

/// Global app state (single panel).
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub chat: ChatState,
    pub input_buffer: String,
    pub input_cursor: usize,
    pub history: Vec<String>,
    pub history_index: usize,
    /// Display-layer visibility of the panel body. Mutated only through
    /// the [`PanelView`] adapter below.
    pub body_visible: bool,
}

/// TUI adapter: view effects land on the render state.
impl PanelView for AppState {
    fn show(&mut self) {
        self.body_visible = true;
    }

    fn hide(&mut self) {
        self.body_visible = false;
    }

    fn append_entry(&mut self, sender: Sender, text: &str) {
        self.chat.entries.push(Message::new(sender, text));
    }

    fn scroll_to_end(&mut self) {
        self.chat.scroll = 0;
    }

    fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.input_cursor = 0;
    }
}
