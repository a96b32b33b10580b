use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BLOCK_TITLE: &str = "New Todo";

/// Render entry input widget according to state. While an item is under
/// edit the input is replaced by a notice, since the inline editor in the
/// list takes over.
///
pub fn entry(frame: &mut Frame, size: Rect, state: &mut State) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style());

    if state.is_editing() {
        block = block.title(BLOCK_TITLE);
        let notice = Paragraph::new("Editing item")
            .style(styling::muted_text_style())
            .block(block);
        frame.render_widget(notice, size);
        return;
    }

    let focused = *state.current_focus() == Focus::Entry;
    if focused {
        block = block
            .border_style(styling::active_block_border_style())
            .title(Span::styled(
                BLOCK_TITLE,
                styling::active_block_title_style(),
            ));
    } else {
        block = block.title(BLOCK_TITLE);
    }

    let icon = state.entry_icon();
    let mut spans = vec![
        Span::styled(format!("{} ", icon.glyph()), styling::icon_style()),
        Span::raw(state.entry_text().to_string()),
    ];
    if focused {
        spans.push(Span::styled("▏", styling::active_list_item_style()));
    }
    spans.push(Span::styled(
        format!("  [{}]", icon.label()),
        styling::muted_text_style(),
    ));

    let input = Paragraph::new(Line::from(spans))
        .style(styling::normal_text_style())
        .block(block);
    frame.render_widget(input, size);
}
