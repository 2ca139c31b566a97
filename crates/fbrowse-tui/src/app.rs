use std::path::{Path, PathBuf};

use fbrowse_core::config::settings::{Config, PreviewConfig};
use fbrowse_core::{
    Action, ActionRegistry, CoreResult, FileKind, ImageInfo, Keymap, Navigator, TextPreview,
};

use crate::input::InputAction;

/// Application mode: determines how input is routed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    /// Text input popup; `input` is what has been typed so far.
    Prompt { kind: PromptKind, input: String },
    /// Delete confirmation for the named entry.
    Confirm(String),
    /// Modal error message; any key dismisses it.
    Alert(String),
    Help,
}

/// What a text prompt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Rename,
    Move,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Rename => "Rename",
            Self::Move => "Move",
        }
    }

    /// Question shown above the input line.
    pub fn question(self, name: &str) -> String {
        match self {
            Self::Rename => format!("What would you like to rename {name} to?"),
            Self::Move => format!("Which directory would you like to move {name} to?"),
        }
    }
}

/// Loaded content for the preview pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewContent {
    Text(TextPreview),
    Image(ImageInfo),
    Unavailable(String),
}

/// Front-end state wrapped around the core [`Navigator`].
#[derive(Debug)]
pub struct App {
    navigator: Navigator,
    mode: AppMode,
    keymap: Keymap,
    registry: ActionRegistry,
    preview_config: PreviewConfig,
    confirm_delete: bool,
    loaded_preview: Option<(PathBuf, PreviewContent)>,
    status_message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(start: &Path, home: &Path, config: &Config, keymap: Keymap) -> CoreResult<Self> {
        let navigator = Navigator::new(start, home, config.general.show_hidden)?;
        Ok(Self {
            navigator,
            mode: AppMode::Normal,
            keymap,
            registry: ActionRegistry::new(),
            preview_config: config.preview.clone(),
            confirm_delete: config.general.confirm_delete,
            loaded_preview: None,
            status_message: None,
            should_quit: false,
        })
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn mode(&self) -> &AppMode {
        &self.mode
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn preview_content(&self) -> Option<&PreviewContent> {
        self.loaded_preview.as_ref().map(|(_, content)| content)
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one decoded key press.
    pub fn apply(&mut self, input: InputAction) {
        match input {
            InputAction::Action(action) => self.perform(action),
            InputAction::PromptChar(c) => {
                if let AppMode::Prompt { input, .. } = &mut self.mode {
                    input.push(c);
                }
            }
            InputAction::PromptBackspace => {
                if let AppMode::Prompt { input, .. } = &mut self.mode {
                    input.pop();
                }
            }
            InputAction::PromptSubmit => self.submit_prompt(),
            InputAction::ConfirmYes => self.confirm_delete_entry(),
            InputAction::Cancel => self.mode = AppMode::Normal,
            InputAction::Quit => self.should_quit = true,
            InputAction::None => {}
        }
        self.sync_preview();
    }

    fn perform(&mut self, action: Action) {
        self.status_message = None;
        match action {
            Action::CursorUp => self.navigator.cursor_up(),
            Action::CursorDown => self.navigator.cursor_down(),
            Action::CursorTop => self.navigator.cursor_top(),
            Action::CursorBottom => self.navigator.cursor_bottom(),
            Action::Open => self.open_selected(),
            Action::GoParent => {
                let result = self.navigator.navigate_to_parent().map(|_| ());
                self.report(result);
            }
            Action::GoHome => {
                let result = self.navigator.go_home().map(|_| ());
                self.report(result);
            }
            Action::Refresh => {
                let result = self.navigator.refresh().map(|_| ());
                self.report(result);
            }
            Action::Rename => self.start_prompt(PromptKind::Rename),
            Action::Move => self.start_prompt(PromptKind::Move),
            Action::Delete => match self.navigator.selected_name().map(str::to_owned) {
                Some(name) if self.confirm_delete => self.mode = AppMode::Confirm(name),
                Some(name) => self.delete_entry(&name),
                None => self.alert("no entry selected"),
            },
            Action::ToggleHidden => {
                let result = self.navigator.toggle_hidden().map(|_| ());
                if result.is_ok() {
                    let state = if self.navigator.show_hidden() { "shown" } else { "hidden" };
                    self.status_message = Some(format!("Hidden files {state}"));
                }
                self.report(result);
            }
            Action::Help => self.mode = AppMode::Help,
            Action::Quit => self.should_quit = true,
        }
    }

    fn open_selected(&mut self) {
        let name = self.navigator.selected_name().unwrap_or_default().to_string();
        match self.navigator.open_selected() {
            Ok(FileKind::Unsupported) => self.alert(&format!(
                "Cannot open {name} due to unrecognized file type."
            )),
            Ok(_) => {}
            Err(e) => self.alert(&e.to_string()),
        }
    }

    fn start_prompt(&mut self, kind: PromptKind) {
        if self.navigator.selected_name().is_none() {
            self.alert("no entry selected");
            return;
        }
        self.mode = AppMode::Prompt {
            kind,
            input: String::new(),
        };
    }

    fn submit_prompt(&mut self) {
        let AppMode::Prompt { kind, input } = std::mem::replace(&mut self.mode, AppMode::Normal)
        else {
            return;
        };
        let name = self.navigator.selected_name().unwrap_or_default().to_string();
        match kind {
            PromptKind::Rename => match self.navigator.rename_selected(&input) {
                Ok(()) => self.status_message = Some(format!("Renamed {name} to {input}")),
                Err(e) => self.alert(&e.to_string()),
            },
            PromptKind::Move => match self.navigator.move_selected(&input) {
                Ok(dest) => {
                    self.status_message = Some(format!("Moved {name} to {}", dest.display()));
                }
                Err(e) => self.alert(&e.to_string()),
            },
        }
    }

    fn confirm_delete_entry(&mut self) {
        let AppMode::Confirm(name) = std::mem::replace(&mut self.mode, AppMode::Normal) else {
            return;
        };
        self.delete_entry(&name);
    }

    fn delete_entry(&mut self, name: &str) {
        match self.navigator.delete(name) {
            Ok(()) => self.status_message = Some(format!("Deleted {name}")),
            Err(e) => self.alert(&e.to_string()),
        }
    }

    fn report(&mut self, result: CoreResult<()>) {
        if let Err(e) = result {
            self.alert(&e.to_string());
        }
    }

    fn alert(&mut self, message: &str) {
        tracing::warn!("{message}");
        self.mode = AppMode::Alert(message.to_string());
    }

    /// Loads preview content when the navigator's preview target changed.
    fn sync_preview(&mut self) {
        let Some(target) = self.navigator.preview() else {
            self.loaded_preview = None;
            return;
        };
        if self
            .loaded_preview
            .as_ref()
            .is_some_and(|(path, _)| *path == target.path)
        {
            return;
        }

        let content = if !self.preview_config.enabled {
            PreviewContent::Unavailable("Preview disabled".to_string())
        } else {
            let loaded = match target.kind {
                FileKind::Image => ImageInfo::load(&target.path).map(PreviewContent::Image),
                _ => TextPreview::load(
                    &target.path,
                    self.preview_config.max_lines,
                    self.preview_config.max_file_size,
                )
                .map(PreviewContent::Text),
            };
            loaded.unwrap_or_else(|e| PreviewContent::Unavailable(e.to_string()))
        };
        self.loaded_preview = Some((target.path.clone(), content));
    }
}
