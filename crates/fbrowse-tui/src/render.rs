use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Color,
    Frame,
};
use fbrowse_core::{ActionRegistry, Keymap};

use crate::app::{App, AppMode, PromptKind};
use crate::ui::panel::render_file_list;
use crate::ui::popup::render_popup;
use crate::ui::preview::render_preview;
use crate::ui::statusbar::{render_statusbar, StatusBarProps};

/// Main render function: composes the full UI layout each frame.
pub fn render(f: &mut Frame, app: &App) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    // File list (40%) | preview (60%)
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(vertical[0]);

    let nav = app.navigator();
    let title = nav.current_dir().display().to_string();
    render_file_list(
        f,
        horizontal[0],
        nav.entries(),
        nav.selected_index(),
        &title,
    );
    render_preview(f, horizontal[1], app.preview_content());

    let status_path = nav.status_path();
    let status_props = StatusBarProps {
        entry_count: nav.entries().len(),
        selected_index: nav.selected_index(),
        status_path: &status_path,
        show_hidden: nav.show_hidden(),
        status_message: app.status_message(),
    };
    render_statusbar(f, vertical[1], &status_props);

    match app.mode() {
        AppMode::Normal => {}
        AppMode::Prompt { kind, input } => {
            let name = nav.selected_name().unwrap_or_default();
            render_prompt_popup(f, *kind, name, input);
        }
        AppMode::Confirm(name) => render_confirm_popup(f, name),
        AppMode::Alert(message) => render_alert_popup(f, message),
        AppMode::Help => {
            let lines = help_lines(app.registry(), app.keymap());
            render_popup(f, "Help", &lines, Color::Cyan);
        }
    }
}

fn render_prompt_popup(f: &mut Frame, kind: PromptKind, name: &str, input: &str) {
    let lines = vec![
        kind.question(name),
        String::new(),
        format!("{input}_"),
        String::new(),
        "Enter to confirm, Esc to cancel".to_owned(),
    ];
    render_popup(f, kind.title(), &lines, Color::Cyan);
}

fn render_confirm_popup(f: &mut Frame, name: &str) {
    let lines = vec![
        format!("Are you sure you want to delete {name}?"),
        String::new(),
        "y - Yes, delete".to_owned(),
        "n - No, cancel".to_owned(),
    ];
    render_popup(f, "Delete", &lines, Color::Yellow);
}

fn render_alert_popup(f: &mut Frame, message: &str) {
    let lines = vec![
        message.to_owned(),
        String::new(),
        "Press any key to continue".to_owned(),
    ];
    render_popup(f, "Error", &lines, Color::Red);
}

/// Builds the help overlay: one section per category, each action with its keys.
fn help_lines(registry: &ActionRegistry, keymap: &Keymap) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_category = None;

    for desc in registry.all() {
        if current_category != Some(desc.category) {
            if current_category.is_some() {
                lines.push(String::new());
            }
            lines.push(format!("{}:", desc.category.label()));
            current_category = Some(desc.category);
        }
        let keys = keymap
            .keys_for_action(desc.action)
            .map(|keys| keys.join("/"))
            .unwrap_or_else(|| "-".to_owned());
        lines.push(format!("  {keys:<18} {}", desc.description));
    }

    lines.push(String::new());
    lines.push("Press Esc or ? to close".to_owned());
    lines
}
