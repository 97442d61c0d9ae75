//! Render pass: header always, chat/input/status only when expanded.

use ratatui::Frame;

use crate::app::App;
use crate::ui::layout;
use crate::ui::widgets::{render_chat, render_header, render_input, render_status};

pub fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    let regions = layout::compute(area, app.state.body_visible);

    render_header(f, regions.header, app.widget.is_expanded());

    if let Some(body) = regions.body {
        render_chat(f, &app.state.chat, body.chat);
        render_input(
            f,
            app.state.input_buffer.as_str(),
            app.state.input_cursor,
            body.input,
        );
        render_status(f, body.status, app.state.chat.entries.len());
    }
}
