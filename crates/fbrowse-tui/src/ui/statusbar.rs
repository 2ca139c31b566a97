//! Status bar rendering.
//!
//! The status bar occupies a single row at the bottom of the terminal and
//! shows the cursor position, the path of the selection (or the current
//! directory), the hidden-file indicator and an optional status message.

use std::path::Path;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub entry_count: usize,
    pub selected_index: Option<usize>,
    pub status_path: &'a Path,
    pub show_hidden: bool,
    pub status_message: Option<&'a str>,
}

/// Renders the bottom status bar.
pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>) {
    let bg = Color::DarkGray;

    let hidden_indicator = if props.show_hidden { " [H]" } else { "" };

    let status_span = props
        .status_message
        .map(|msg| {
            Span::styled(
                format!("  {msg}"),
                Style::default()
                    .fg(Color::Yellow)
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            )
        })
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            position_label(props.selected_index, props.entry_count),
            Style::default()
                .fg(Color::White)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", props.status_path.display()),
            Style::default().fg(Color::White).bg(bg),
        ),
        Span::styled(
            hidden_indicator.to_owned(),
            Style::default()
                .fg(Color::Magenta)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        status_span,
    ]);

    let bar = Paragraph::new(line).style(Style::default().bg(bg));
    f.render_widget(bar, area);
}

fn position_label(selected: Option<usize>, count: usize) -> String {
    match selected {
        Some(i) if count > 0 => format!(" {}/{count}", i + 1),
        _ => format!(" -/{count}"),
    }
}
