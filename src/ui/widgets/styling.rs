use ratatui::style::{Color, Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for current list items.
///
pub fn current_list_item_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for active list items.
///
pub fn active_list_item_style() -> Style {
    current_list_item_style().fg(Color::Cyan)
}

/// Return the style for normal text.
///
pub fn normal_text_style() -> Style {
    Style::default()
}

/// Return the style for muted text.
///
pub fn muted_text_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Return the style for todo category glyphs.
///
pub fn icon_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Return the style for the row under inline edit.
///
pub fn editing_row_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::UNDERLINED)
}
