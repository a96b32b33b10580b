use super::{entry, footer, log, todo_list, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    entry::entry(frame, rows[0], state);

    if state.is_log_panel_open() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);
        todo_list::todo_list(frame, columns[0], state);
        log::log(frame, columns[1], state);
    } else {
        todo_list::todo_list(frame, rows[1], state);
    }

    footer::footer(frame, rows[2], state);
}
