//! Key binding configuration.
//!
//! Key bindings map key names (e.g. `"j"`, `"Enter"`, `"Backspace"`) to
//! [`Action`] values. The defaults keep the classic bindings (Enter opens,
//! Backspace and Delete go to the parent) and add letter keys for the
//! menu actions.
//!
//! TOML files use string action identifiers (e.g. `"go_parent"`); these are
//! resolved via [`ActionRegistry::find_by_id`] at load time.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionRegistry};
use crate::config::settings::read_config_file;
use crate::error::{CoreError, CoreResult};

/// Raw TOML representation: deserialized first, then resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawKeymap {
    #[serde(default)]
    bindings: HashMap<String, String>,
}

/// Complete set of key bindings.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
    /// Reverse map: Action → key strings (for the help overlay).
    reverse: HashMap<Action, Vec<String>>,
}

impl Default for Keymap {
    fn default() -> Self {
        let defaults = [
            ("Up", Action::CursorUp),
            ("k", Action::CursorUp),
            ("Down", Action::CursorDown),
            ("j", Action::CursorDown),
            ("g", Action::CursorTop),
            ("G", Action::CursorBottom),
            ("Enter", Action::Open),
            ("l", Action::Open),
            ("Backspace", Action::GoParent),
            ("Delete", Action::GoParent),
            ("h", Action::GoParent),
            ("~", Action::GoHome),
            ("F5", Action::Refresh),
            ("r", Action::Rename),
            ("m", Action::Move),
            ("d", Action::Delete),
            (".", Action::ToggleHidden),
            ("?", Action::Help),
            ("q", Action::Quit),
        ];
        let bindings: HashMap<String, Action> = defaults
            .into_iter()
            .map(|(key, action)| (key.to_string(), action))
            .collect();

        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }
}

/// Builds the reverse mapping from Action → Vec<key string>.
fn build_reverse(bindings: &HashMap<String, Action>) -> HashMap<Action, Vec<String>> {
    let mut reverse: HashMap<Action, Vec<String>> = HashMap::new();
    for (key, action) in bindings {
        reverse.entry(*action).or_default().push(key.clone());
    }
    // Sort keys for deterministic display
    for keys in reverse.values_mut() {
        keys.sort();
    }
    reverse
}

impl Keymap {
    /// Loads key bindings from a TOML file at `path`.
    ///
    /// Bindings in the file are layered over the defaults. Unknown action
    /// strings are ignored.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = read_config_file(path)?;
        let raw: RawKeymap =
            toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        Ok(Self::default().with_raw(raw))
    }

    fn with_raw(self, raw: RawKeymap) -> Self {
        let registry = ActionRegistry::new();
        let mut bindings = self.bindings;
        for (key, action_id) in raw.bindings {
            match registry.find_by_id(&action_id) {
                Some(action) => {
                    bindings.insert(key, action);
                }
                None => tracing::warn!("unknown action `{action_id}` bound to `{key}`"),
            }
        }
        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }

    /// Returns the action mapped to `key`, or `None` if unbound.
    pub fn action_for_key(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Returns the key(s) bound to a given action.
    pub fn keys_for_action(&self, action: Action) -> Option<&[String]> {
        self.reverse.get(&action).map(|v| v.as_slice())
    }
}
