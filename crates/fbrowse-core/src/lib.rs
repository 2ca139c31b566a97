//! fbrowse core library. UI-agnostic file browsing logic.
//!
//! `fbrowse-core` holds the navigation and mutation model of the browser.
//! It knows nothing about terminals or windows: a front end owns one
//! [`Navigator`], calls its operations in response to user input, and
//! renders the listing, preview and errors it gets back.
//!
//! # Modules
//!
//! - [`fs`]: Directory listing, entry classification, rename/move/delete, previews.
//! - [`nav`]: The [`Navigator`] state machine.
//! - [`config`]: TOML settings and key bindings.
//! - [`action`]: User-triggerable actions and their metadata.
//! - [`event`]: [`Command`]/[`Event`] types for UI ↔ Core communication.
//! - [`error`]: Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod nav;

pub use error::{CoreError, CoreResult};
pub use event::{Command, Event};
pub use fs::ops::{
    delete_entry, list_directory, move_entry, open_entry, rename_entry, resolve_selection,
    FileKind,
};
pub use fs::{ImageInfo, TextPreview};
pub use nav::navigator::{Navigator, Preview};

pub use action::{Action, ActionCategory, ActionDescriptor, ActionRegistry};
pub use config::keymap::Keymap;
pub use config::settings::Config;
