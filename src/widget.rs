//! ChatWidget: panel toggling and the echo send path.
//!
//! Display effects go through [`PanelView`], so the widget logic runs
//! without a terminal in tests.

use crate::state::Sender;

/// Fixed reply appended after every user message, regardless of content.
pub const CANNED_REPLY: &str = "Sorry, I'm just a demo!";

/// Presentation seam between the widget and whatever draws it.
pub trait PanelView {
    fn show(&mut self);
    fn hide(&mut self);
    fn append_entry(&mut self, sender: Sender, text: &str);
    fn scroll_to_end(&mut self);
    fn clear_input(&mut self);
}

/// One collapsible chat panel. Owns the expanded/collapsed flag; the
/// message log itself lives behind the view.
pub struct ChatWidget {
    expanded: bool,
}

impl ChatWidget {
    pub fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Header interaction: flip between expanded and collapsed. Calling
    /// twice restores the original state.
    pub fn toggle_panel(&mut self, view: &mut impl PanelView) {
        self.expanded = !self.expanded;
        if self.expanded {
            view.show();
        } else {
            view.hide();
        }
    }

    /// Append the user entry and the canned bot entry, pin the log to its
    /// end, clear the input. Input that trims to empty is a no-op: nothing
    /// appended, input left as typed.
    pub fn send_message(&mut self, raw: &str, view: &mut impl PanelView) {
        let text = raw.trim();
        if text.is_empty() {
            return;
        }
        view.append_entry(Sender::User, text);
        view.append_entry(Sender::Bot, CANNED_REPLY);
        view.scroll_to_end();
        view.clear_input();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingView {
        entries: Vec<(Sender, String)>,
        calls: Vec<&'static str>,
        input: String,
        visible: bool,
    }

    impl PanelView for RecordingView {
        fn show(&mut self) {
            self.calls.push("show");
            self.visible = true;
        }
        fn hide(&mut self) {
            self.calls.push("hide");
            self.visible = false;
        }
        fn append_entry(&mut self, sender: Sender, text: &str) {
            self.calls.push("append");
            self.entries.push((sender, text.to_string()));
        }
        fn scroll_to_end(&mut self) {
            self.calls.push("scroll");
        }
        fn clear_input(&mut self) {
            self.calls.push("clear");
            self.input.clear();
        }
    }

    #[test]
    fn test_send_appends_user_then_bot() {
        let mut widget = ChatWidget::new(true);
        let mut view = RecordingView::default();
        widget.send_message("Hello", &mut view);
        assert_eq!(
            view.entries,
            vec![
                (Sender::User, "Hello".to_string()),
                (Sender::Bot, CANNED_REPLY.to_string()),
            ]
        );
    }

    #[test]
    fn test_send_side_effects_in_order() {
        let mut widget = ChatWidget::new(true);
        let mut view = RecordingView::default();
        widget.send_message("  hi  ", &mut view);
        assert_eq!(view.calls, vec!["append", "append", "scroll", "clear"]);
        // Leading/trailing whitespace is trimmed off the user entry.
        assert_eq!(view.entries[0].1, "hi");
    }

    #[test]
    fn test_whitespace_input_is_noop() {
        let mut widget = ChatWidget::new(true);
        let mut view = RecordingView {
            input: "   ".to_string(),
            ..RecordingView::default()
        };
        widget.send_message("   ", &mut view);
        assert!(view.entries.is_empty());
        assert!(view.calls.is_empty());
        assert_eq!(view.input, "   ");
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut widget = ChatWidget::new(false);
        let mut view = RecordingView::default();
        widget.toggle_panel(&mut view);
        assert!(widget.is_expanded());
        assert!(view.visible);
        widget.toggle_panel(&mut view);
        assert!(!widget.is_expanded());
        assert!(!view.visible);
        assert_eq!(view.calls, vec!["show", "hide"]);
    }

    #[test]
    fn test_bot_reply_is_content_independent() {
        let mut widget = ChatWidget::new(true);
        let mut view = RecordingView::default();
        widget.send_message("first", &mut view);
        widget.send_message("a completely different message", &mut view);
        assert_eq!(view.entries[1].1, view.entries[3].1);
    }
}
