//! Preview pane rendering for text files and image metadata.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::PreviewContent;

/// Renders the preview pane. `None` shows a placeholder.
pub fn render_preview(f: &mut Frame, area: Rect, content: Option<&PreviewContent>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Preview")
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = match content {
        Some(PreviewContent::Text(text)) => text_lines(text),
        Some(PreviewContent::Image(info)) => image_lines(info),
        Some(PreviewContent::Unavailable(reason)) => vec![dim_line(reason)],
        None => vec![dim_line("Open a .txt, .md, .png, .jpg or .bmp file to preview it")],
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn text_lines(text: &fbrowse_core::TextPreview) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = text.lines.iter().map(|l| Line::from(l.clone())).collect();
    if text.is_truncated {
        lines.push(dim_line(&format!(
            "... {} more lines",
            text.total_lines - text.lines.len()
        )));
    }
    lines
}

fn image_lines(info: &fbrowse_core::ImageInfo) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("{} image", info.format),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{} x {} px", info.width, info.height)),
        Line::from(format!("{} bytes", info.file_size)),
    ]
}

fn dim_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_owned(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ))
}
