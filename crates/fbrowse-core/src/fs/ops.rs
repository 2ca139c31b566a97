//! Directory listing, entry classification, and single-entry mutations.
//!
//! These are the stateless building blocks behind [`crate::Navigator`].
//! None of them touch a listing; the navigator applies the incremental
//! listing update after the filesystem call succeeds.

use std::path::{Component, Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Extensions classified as [`FileKind::Image`]. Matching is case-sensitive.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "bmp"];

/// Extensions classified as [`FileKind::Text`]. Matching is case-sensitive.
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "md"];

/// Classification of an entry for the purpose of opening it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// A directory; the caller should navigate into it.
    Directory,
    /// A raster image the renderer can display.
    Image,
    /// A plain-text or markdown file.
    Text,
    /// Anything else.
    Unsupported,
}

/// Returns `true` if `name` is a hidden entry (starts with `.`).
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Lists the immediate children of `path` in directory-read order.
///
/// When `show_hidden` is `false`, names starting with `.` are dropped.
/// The result is **not** sorted. Individual entries that fail to read are
/// skipped.
///
/// # Errors
///
/// [`CoreError::Unreadable`] if `path` does not exist, is not a directory,
/// or cannot be enumerated.
///
/// # Examples
///
/// ```no_run
/// use fbrowse_core::list_directory;
/// use std::path::Path;
///
/// let names = list_directory(Path::new("/home/user"), false).unwrap();
/// assert!(names.iter().all(|n| !n.starts_with('.')));
/// ```
pub fn list_directory(path: &Path, show_hidden: bool) -> CoreResult<Vec<String>> {
    let read_dir = std::fs::read_dir(path).map_err(|e| {
        tracing::warn!("cannot list {}: {e}", path.display());
        CoreError::Unreadable(path.to_path_buf())
    })?;

    let names = read_dir
        .filter_map(|dir_entry| match dir_entry {
            Ok(dir_entry) => Some(dir_entry),
            Err(e) => {
                tracing::warn!("skipping unreadable entry in {}: {e}", path.display());
                None
            }
        })
        .map(|dir_entry| dir_entry.file_name().to_string_lossy().into_owned())
        .filter(|name| show_hidden || !is_hidden(name))
        .collect();

    Ok(names)
}

/// Lists only the hidden children of `path`, in directory-read order.
///
/// # Errors
///
/// [`CoreError::Unreadable`] under the same conditions as [`list_directory`].
pub fn list_hidden(path: &Path) -> CoreResult<Vec<String>> {
    Ok(list_directory(path, true)?
        .into_iter()
        .filter(|name| is_hidden(name))
        .collect())
}

/// Joins an entry name onto its directory. Pure; never touches the disk.
pub fn resolve_selection(current_dir: &Path, entry_name: &str) -> PathBuf {
    current_dir.join(entry_name)
}

/// Returns `true` if `name` is exactly one normal path component.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == name
    )
}

/// Returns the extension used for classification: the text after the last
/// `.` in the file name, or an empty string when there is none.
///
/// Unlike [`Path::extension`], a dot-file such as `.md` yields `"md"`.
pub fn extension_of(path: &Path) -> &str {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext)
        .unwrap_or("")
}

/// Classifies `path` for opening.
///
/// Directories are reported as [`FileKind::Directory`]. Files must be
/// openable for reading; they are then classified by extension. No content
/// is read.
///
/// # Errors
///
/// [`CoreError::Unreadable`] if `path` does not exist or cannot be opened.
pub fn open_entry(path: &Path) -> CoreResult<FileKind> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        tracing::warn!("cannot stat {}: {e}", path.display());
        CoreError::Unreadable(path.to_path_buf())
    })?;

    if metadata.is_dir() {
        return Ok(FileKind::Directory);
    }

    std::fs::File::open(path).map_err(|e| {
        tracing::warn!("cannot open {}: {e}", path.display());
        CoreError::Unreadable(path.to_path_buf())
    })?;

    let ext = extension_of(path);
    let kind = if IMAGE_EXTENSIONS.contains(&ext) {
        FileKind::Image
    } else if TEXT_EXTENSIONS.contains(&ext) {
        FileKind::Text
    } else {
        FileKind::Unsupported
    };
    Ok(kind)
}

/// Renames `old_name` to `new_name` inside `current_dir`.
///
/// An existing destination is never overwritten, and `new_name` must be a
/// single plain name so the entry stays in `current_dir`.
///
/// # Errors
///
/// - [`CoreError::RenameConflict`] if `new_name` is empty, `.`, `..` or
///   contains a separator.
/// - [`CoreError::Unreadable`] if `old_name` does not exist.
/// - [`CoreError::RenameConflict`] if the destination exists or the
///   platform rename fails.
pub fn rename_entry(current_dir: &Path, old_name: &str, new_name: &str) -> CoreResult<PathBuf> {
    let conflict = || CoreError::RenameConflict {
        from: old_name.to_string(),
        to: new_name.to_string(),
    };

    if !is_plain_name(new_name) {
        tracing::warn!("rejecting rename target {new_name:?}: not a plain name");
        return Err(conflict());
    }

    let old_path = resolve_selection(current_dir, old_name);
    let new_path = resolve_selection(current_dir, new_name);

    // Use symlink_metadata so a dangling symlink can still be renamed
    if std::fs::symlink_metadata(&old_path).is_err() {
        return Err(CoreError::Unreadable(old_path));
    }

    if old_path != new_path && std::fs::symlink_metadata(&new_path).is_ok() {
        tracing::warn!("rename target exists: {}", new_path.display());
        return Err(conflict());
    }

    std::fs::rename(&old_path, &new_path).map_err(|e| {
        tracing::warn!("rename {} failed: {e}", old_path.display());
        conflict()
    })?;

    Ok(new_path)
}

/// Moves `name` into `dest_dir_relative`, which is resolved against
/// `current_dir` (leading separators are ignored, so an absolute-looking
/// destination still lands under `current_dir`).
///
/// # Errors
///
/// - [`CoreError::Unreadable`] if `name` does not exist.
/// - [`CoreError::MoveConflict`] if the destination exists or the platform
///   rename fails (missing destination directory, cross-device, ...).
pub fn move_entry(current_dir: &Path, name: &str, dest_dir_relative: &str) -> CoreResult<PathBuf> {
    let old_path = resolve_selection(current_dir, name);
    let relative = dest_dir_relative.trim_start_matches(['/', '\\']);
    let new_path = current_dir.join(relative).join(name);

    if std::fs::symlink_metadata(&old_path).is_err() {
        return Err(CoreError::Unreadable(old_path));
    }

    if std::fs::symlink_metadata(&new_path).is_ok() {
        tracing::warn!("move target exists: {}", new_path.display());
        return Err(CoreError::MoveConflict {
            from: old_path,
            to: new_path,
        });
    }

    if let Err(e) = std::fs::rename(&old_path, &new_path) {
        tracing::warn!("move {} failed: {e}", old_path.display());
        return Err(CoreError::MoveConflict {
            from: old_path,
            to: new_path,
        });
    }

    Ok(new_path)
}

/// Deletes a single file, symlink, or **empty** directory.
///
/// Non-empty directories are not removed recursively; the platform call
/// fails and that failure is reported.
///
/// # Errors
///
/// [`CoreError::DeleteConflict`] if the entry is missing or cannot be removed.
pub fn delete_entry(current_dir: &Path, name: &str) -> CoreResult<()> {
    let path = resolve_selection(current_dir, name);
    let conflict = || CoreError::DeleteConflict(name.to_string());

    // symlink_metadata: a symlink to a directory is removed as a file
    let meta = std::fs::symlink_metadata(&path).map_err(|e| {
        tracing::warn!("cannot stat {}: {e}", path.display());
        conflict()
    })?;

    let result = if meta.is_dir() {
        std::fs::remove_dir(&path)
    } else {
        std::fs::remove_file(&path)
    };

    result.map_err(|e| {
        tracing::warn!("delete {} failed: {e}", path.display());
        conflict()
    })
}
