//! Event system for communication between a front end and the navigator.
//!
//! The UI translates user input into [`Command`]s and hands them to
//! [`Navigator::execute`], which answers with an [`Event`] describing what
//! changed. Any front end can drive the same core logic this way.

use std::path::PathBuf;

use crate::error::CoreResult;
use crate::fs::ops::FileKind;
use crate::nav::navigator::Navigator;

/// An action the UI requests the core to perform.
///
/// Commands flow **UI → Core**. Destructive commands must only be sent
/// after the UI's own confirmation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Navigate into the directory at the given path.
    Navigate(PathBuf),
    /// Move to the parent directory.
    GoUp,
    /// Move to the home directory.
    GoHome,
    /// Re-read the current directory.
    Refresh,
    /// Set hidden-file visibility.
    SetHidden(bool),
    /// Flip hidden-file visibility.
    ToggleHidden,
    /// Select the entry at the given index (clamped).
    Select(usize),
    /// Move the cursor up by one entry.
    CursorUp,
    /// Move the cursor down by one entry.
    CursorDown,
    /// Open the selected entry.
    Open,
    /// Rename the selected entry.
    Rename(String),
    /// Move the selected entry into a directory relative to the current one.
    Move(String),
    /// Delete the selected entry.
    Delete,
}

/// A notification the core sends back to the UI.
///
/// Events flow **Core → UI**.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A directory has been listed and is now current.
    DirectoryLoaded {
        path: PathBuf,
        entries: Vec<String>,
    },
    /// The listing of the current directory changed in place.
    ListingChanged { entries: Vec<String> },
    /// The selection moved.
    SelectionChanged(Option<usize>),
    /// A file was opened (classified); directories produce `DirectoryLoaded`.
    Opened { path: PathBuf, kind: FileKind },
    /// An entry was renamed in the current directory.
    Renamed { from: String, to: String },
    /// An entry was moved out of the current directory.
    Moved { name: String, destination: PathBuf },
    /// An entry was deleted.
    Deleted(String),
}

impl Navigator {
    /// Applies `command` and reports the outcome.
    ///
    /// # Errors
    ///
    /// Whatever the underlying operation returns; state is unchanged on
    /// error.
    pub fn execute(&mut self, command: Command) -> CoreResult<Event> {
        match command {
            Command::Navigate(path) => {
                self.navigate(&path)?;
                Ok(self.directory_loaded())
            }
            Command::GoUp => {
                self.navigate_to_parent()?;
                Ok(self.directory_loaded())
            }
            Command::GoHome => {
                self.go_home()?;
                Ok(self.directory_loaded())
            }
            Command::Refresh => {
                self.refresh()?;
                Ok(self.listing_changed())
            }
            Command::SetHidden(show) => {
                self.toggle_hidden_visibility(show)?;
                Ok(self.listing_changed())
            }
            Command::ToggleHidden => {
                self.toggle_hidden()?;
                Ok(self.listing_changed())
            }
            Command::Select(index) => {
                self.select(index);
                Ok(Event::SelectionChanged(self.selected_index()))
            }
            Command::CursorUp => {
                self.cursor_up();
                Ok(Event::SelectionChanged(self.selected_index()))
            }
            Command::CursorDown => {
                self.cursor_down();
                Ok(Event::SelectionChanged(self.selected_index()))
            }
            Command::Open => {
                let path = self.status_path();
                match self.open_selected()? {
                    FileKind::Directory => Ok(self.directory_loaded()),
                    kind => Ok(Event::Opened { path, kind }),
                }
            }
            Command::Rename(new_name) => {
                let from = self.selected_name().unwrap_or_default().to_string();
                self.rename_selected(&new_name)?;
                Ok(Event::Renamed { from, to: new_name })
            }
            Command::Move(dest) => {
                let name = self.selected_name().unwrap_or_default().to_string();
                let destination = self.move_selected(&dest)?;
                Ok(Event::Moved { name, destination })
            }
            Command::Delete => {
                let name = self.selected_name().unwrap_or_default().to_string();
                self.delete_selected()?;
                Ok(Event::Deleted(name))
            }
        }
    }

    fn directory_loaded(&self) -> Event {
        Event::DirectoryLoaded {
            path: self.current_dir().to_path_buf(),
            entries: self.entries().to_vec(),
        }
    }

    fn listing_changed(&self) -> Event {
        Event::ListingChanged {
            entries: self.entries().to_vec(),
        }
    }
}
