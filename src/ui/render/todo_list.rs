use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "Todos";

/// Render todo list widget according to state. The row under edit renders
/// as an inline editor showing the live task text.
///
pub fn todo_list(frame: &mut Frame, size: Rect, state: &mut State) {
    let title = format!("{} ({})", BLOCK_TITLE, state.todos().len());
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style());

    let list_item_style;
    if *state.current_focus() == Focus::List && !state.is_editing() {
        list_item_style = styling::active_list_item_style();
        block = block
            .border_style(styling::active_block_border_style())
            .title(Span::styled(title, styling::active_block_title_style()));
    } else {
        list_item_style = styling::current_list_item_style();
        block = block.title(title);
    }

    let editing_id = state.current_edit_item().map(|item| item.id);
    let items: Vec<ListItem> = if state.todos().is_empty() {
        vec![ListItem::new("No todos yet (r: add a random one)")]
    } else {
        state
            .todos()
            .iter()
            .map(|todo| {
                let mut spans = vec![Span::styled(
                    format!("{} ", todo.icon.glyph()),
                    styling::icon_style(),
                )];
                if editing_id == Some(todo.id) {
                    spans.push(Span::styled(
                        todo.task.to_owned(),
                        styling::editing_row_style(),
                    ));
                    spans.push(Span::styled("▏", styling::editing_row_style()));
                } else {
                    spans.push(Span::raw(todo.task.to_owned()));
                }
                spans.push(Span::styled(
                    format!("  [{}]", todo.icon.label()),
                    styling::muted_text_style(),
                ));
                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let list = List::new(items)
        .style(styling::normal_text_style())
        .highlight_style(list_item_style)
        .block(block);

    frame.render_stateful_widget(list, size, state.get_todos_list_state());
}
