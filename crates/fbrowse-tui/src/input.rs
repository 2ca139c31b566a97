use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fbrowse_core::{Action, Keymap};

use crate::app::AppMode;

/// Actions that can result from a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// A key-bound action in Normal mode.
    Action(Action),
    /// Append a character to the prompt input.
    PromptChar(char),
    /// Remove the last character from the prompt input.
    PromptBackspace,
    /// Submit the prompt input.
    PromptSubmit,
    /// User approved the pending delete.
    ConfirmYes,
    /// Close the current popup without acting.
    Cancel,
    /// Quit the application.
    Quit,
    /// No action for this key.
    None,
}

/// Maps a key event to an InputAction based on the current mode.
///
/// In Normal mode keys are resolved through the `Keymap`; Ctrl+C always
/// quits. Popups use fixed keys.
pub fn handle_key(key: KeyEvent, mode: &AppMode, keymap: &Keymap) -> InputAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputAction::Quit;
    }

    match mode {
        AppMode::Normal => handle_normal_key(key, keymap),
        AppMode::Prompt { .. } => handle_prompt_key(key),
        AppMode::Confirm(_) => handle_confirm_key(key),
        AppMode::Alert(_) => InputAction::Cancel,
        AppMode::Help => handle_help_key(key),
    }
}

/// Returns the keymap name of a key (`"j"`, `"Enter"`, `"F5"`, ...).
pub fn key_name(key: &KeyEvent) -> Option<String> {
    let name = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return None,
    };
    Some(name)
}

fn handle_normal_key(key: KeyEvent, keymap: &Keymap) -> InputAction {
    key_name(&key)
        .and_then(|name| keymap.action_for_key(&name))
        .map(InputAction::Action)
        .unwrap_or(InputAction::None)
}

fn handle_prompt_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::Cancel,
        KeyCode::Enter => InputAction::PromptSubmit,
        KeyCode::Backspace => InputAction::PromptBackspace,
        KeyCode::Char(c) => InputAction::PromptChar(c),
        _ => InputAction::None,
    }
}

fn handle_confirm_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => InputAction::ConfirmYes,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => InputAction::Cancel,
        _ => InputAction::None,
    }
}

fn handle_help_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => InputAction::Cancel,
        _ => InputAction::None,
    }
}
