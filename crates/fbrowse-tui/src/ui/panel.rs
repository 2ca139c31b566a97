//! File list panel rendering.
//!
//! Renders the current directory listing as a scrollable `List` widget.
//! Hidden entries are dimmed; the selected item is reversed.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Renders the entry list of the current directory.
pub fn render_file_list(
    f: &mut Frame,
    area: Rect,
    entries: &[String],
    selected: Option<usize>,
    title: &str,
) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|name| ListItem::new(name.as_str()).style(entry_style(name)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_owned())
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .fg(Color::Cyan),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected);

    f.render_stateful_widget(list, area, &mut state);
}

fn entry_style(name: &str) -> Style {
    if name.starts_with('.') {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    }
}
