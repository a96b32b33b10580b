use super::Frame;
use crate::state::State;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_logger::TuiLoggerWidget;

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, _state: &mut State) {
    let widget = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title("Log (Ctrl-l: hide)")
                .borders(Borders::ALL),
        )
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Green))
        .style_debug(Style::default().fg(Color::Gray))
        .style_trace(Style::default().fg(Color::DarkGray));
    frame.render_widget(widget, size);
}
