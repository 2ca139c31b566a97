//! Unified action system.
//!
//! Every user-triggerable action is represented by the [`Action`] enum.
//! [`ActionRegistry`] provides metadata (id, name, description, menu) used
//! by key binding files and by the help overlay.

/// Every user-triggerable action.
///
/// Variants carry no parameters; context (selection, prompt input) is
/// determined at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Navigation
    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,
    Open,
    GoParent,
    GoHome,
    Refresh,
    // File operations
    Rename,
    Move,
    Delete,
    // Options
    ToggleHidden,
    // System
    Help,
    Quit,
}

/// The menu an action belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Actions,
    Options,
    System,
}

impl ActionCategory {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Actions => "Actions",
            Self::Options => "Options",
            Self::System => "System",
        }
    }
}

/// Metadata for a single action.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    pub action: Action,
    /// Snake-case identifier used in key binding files (e.g. `"go_parent"`).
    pub id: &'static str,
    /// Human-readable name (e.g. `"Go Parent"`).
    pub name: &'static str,
    /// Short description (e.g. `"Navigate to parent directory"`).
    pub description: &'static str,
    pub category: ActionCategory,
}

const fn descriptor(
    action: Action,
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: ActionCategory,
) -> ActionDescriptor {
    ActionDescriptor {
        action,
        id,
        name,
        description,
        category,
    }
}

/// Registry of all available actions.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    descriptors: Vec<ActionDescriptor>,
}

impl ActionRegistry {
    /// Builds the registry containing every known action.
    pub fn new() -> Self {
        use Action as A;
        use ActionCategory as C;

        let descriptors = vec![
            descriptor(A::CursorUp, "cursor_up", "Cursor Up", "Move cursor up one entry", C::Navigation),
            descriptor(A::CursorDown, "cursor_down", "Cursor Down", "Move cursor down one entry", C::Navigation),
            descriptor(A::CursorTop, "go_first", "Go to First", "Jump to the first entry", C::Navigation),
            descriptor(A::CursorBottom, "go_last", "Go to Last", "Jump to the last entry", C::Navigation),
            descriptor(A::Open, "open", "Open", "Enter directory or preview file", C::Navigation),
            descriptor(A::GoParent, "go_parent", "Go Parent", "Navigate to parent directory", C::Navigation),
            descriptor(A::GoHome, "go_home", "Go Home", "Navigate to home directory", C::Navigation),
            descriptor(A::Refresh, "refresh", "Refresh", "Re-read current directory", C::Navigation),
            descriptor(A::Rename, "rename", "Rename", "Rename selected entry", C::Actions),
            descriptor(A::Move, "move", "Move", "Move selected entry into a directory", C::Actions),
            descriptor(A::Delete, "delete", "Delete", "Delete selected entry", C::Actions),
            descriptor(A::ToggleHidden, "toggle_hidden", "Toggle Hidden Files", "Show or hide dot-files", C::Options),
            descriptor(A::Help, "help", "Help", "Show key bindings", C::System),
            descriptor(A::Quit, "quit", "Quit", "Exit the browser", C::System),
        ];
        Self { descriptors }
    }

    /// Returns every descriptor in display order.
    pub fn all(&self) -> &[ActionDescriptor] {
        &self.descriptors
    }

    /// Resolves a snake-case id to its action.
    pub fn find_by_id(&self, id: &str) -> Option<Action> {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.action)
    }

    /// Returns the descriptor for `action`.
    pub fn get(&self, action: Action) -> Option<&ActionDescriptor> {
        self.descriptors.iter().find(|d| d.action == action)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
