use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, widgets::Paragraph};

/// Render footer hotkey hints according to state.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let text = if state.is_editing() {
        " Type to edit, ←/→: icon, Enter/Esc: done, Ctrl-d: delete"
    } else {
        match state.current_focus() {
            Focus::Entry => " Type a task, ←/→: icon, Enter: add, Tab: list, Ctrl-c: quit",
            Focus::List => " j/k: navigate, Enter: edit, d: delete, r: random, Tab: entry, q: quit",
        }
    };

    let paragraph = Paragraph::new(text).style(styling::muted_text_style());
    frame.render_widget(paragraph, size);
}
