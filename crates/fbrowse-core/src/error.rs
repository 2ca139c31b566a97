//! Error types for `fbrowse-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Each variant carries the path(s) or name(s) involved so the caller can
/// show the message to the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The path cannot be enumerated or opened (permissions, I/O error,
    /// or a non-directory where a directory was expected).
    #[error("{} is unreadable", .0.display())]
    Unreadable(PathBuf),

    /// Navigation past a filesystem root.
    #[error("{} has no parent directory", .0.display())]
    NoParent(PathBuf),

    /// The platform rename failed or the destination already exists.
    #[error("could not rename {from} to {to}")]
    RenameConflict { from: String, to: String },

    /// The platform move failed or the destination already exists.
    #[error("could not move {} to {}", .from.display(), .to.display())]
    MoveConflict { from: PathBuf, to: PathBuf },

    /// The platform delete failed (non-empty directory, permission, ...).
    #[error("could not delete {0}")]
    DeleteConflict(String),

    /// A selection-based operation was issued with nothing selected.
    #[error("no entry selected")]
    NothingSelected,

    /// The named entry is not part of the current listing.
    #[error("{0} is not in the current listing")]
    NotListed(String),

    /// A configuration file does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `fbrowse-core`.
pub type CoreResult<T> = Result<T, CoreError>;
