//! The navigation state machine.
//!
//! A [`Navigator`] owns the current directory, its entry listing, the
//! selection cursor, the hidden-file flag and the preview slot. Every
//! operation is all-or-nothing: the filesystem call runs first and the
//! in-memory state changes only after it succeeded.

use std::path::{Component, Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::ops::{self, FileKind};

/// The entry currently shown by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub path: PathBuf,
    pub kind: FileKind,
}

/// Single-context file navigator.
///
/// The listing is kept in directory-read order and is updated
/// incrementally by mutations, so positions of untouched entries never
/// move. It is not refreshed on external filesystem changes; call
/// [`Navigator::refresh`] for that.
#[derive(Debug, Clone)]
pub struct Navigator {
    current_dir: PathBuf,
    home: PathBuf,
    entries: Vec<String>,
    selected: Option<usize>,
    show_hidden: bool,
    preview: Option<Preview>,
}

impl Navigator {
    /// Creates a navigator listing `start`, with `home` as the fixed home
    /// shortcut.
    ///
    /// # Errors
    ///
    /// [`CoreError::Unreadable`] if `start` cannot be listed.
    pub fn new(start: &Path, home: &Path, show_hidden: bool) -> CoreResult<Self> {
        let current_dir = absolute(start)?;
        let entries = ops::list_directory(&current_dir, show_hidden)?;
        let home = absolute(home).unwrap_or_else(|_| home.to_path_buf());
        let selected = first_index(&entries);

        Ok(Self {
            current_dir,
            home,
            entries,
            selected,
            show_hidden,
            preview: None,
        })
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Entry names of the current directory in listing order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.entries.get(i))
            .map(String::as_str)
    }

    /// Absolute path of the selected entry.
    pub fn selected_path(&self) -> Option<PathBuf> {
        self.selected_name()
            .map(|name| ops::resolve_selection(&self.current_dir, name))
    }

    /// The path a status line should show: the selection if there is one,
    /// otherwise the current directory.
    pub fn status_path(&self) -> PathBuf {
        self.selected_path()
            .unwrap_or_else(|| self.current_dir.clone())
    }

    // ---- selection ----

    /// Selects `index`, clamped to the listing. No-op on an empty listing.
    pub fn select(&mut self, index: usize) {
        self.selected = if self.entries.is_empty() {
            None
        } else {
            Some(index.min(self.entries.len() - 1))
        };
    }

    /// Selects the entry called `name`. Returns `false` if it is not listed.
    pub fn select_name(&mut self, name: &str) -> bool {
        match self.position_of(name) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn cursor_up(&mut self) {
        match self.selected {
            Some(i) => self.select(i.saturating_sub(1)),
            None => self.select(0),
        }
    }

    pub fn cursor_down(&mut self) {
        match self.selected {
            Some(i) => self.select(i + 1),
            None => self.select(0),
        }
    }

    pub fn cursor_top(&mut self) {
        self.select(0);
    }

    pub fn cursor_bottom(&mut self) {
        self.select(self.entries.len().saturating_sub(1));
    }

    // ---- navigation ----

    /// Makes `target` the current directory and returns its listing.
    ///
    /// Relative targets are resolved against the process working
    /// directory and `..` is folded lexically; symlinks are not resolved.
    /// The preview is cleared and the first entry selected.
    ///
    /// # Errors
    ///
    /// [`CoreError::Unreadable`] if `target` cannot be listed; the navigator
    /// is left untouched.
    pub fn navigate(&mut self, target: &Path) -> CoreResult<&[String]> {
        let dir = absolute(target)?;
        let entries = ops::list_directory(&dir, self.show_hidden)?;

        tracing::debug!("navigated to {} ({} entries)", dir.display(), entries.len());
        self.selected = first_index(&entries);
        self.entries = entries;
        self.current_dir = dir;
        self.preview = None;
        Ok(&self.entries)
    }

    /// Navigates to the parent of the current directory.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NoParent`] if the current directory is a filesystem root.
    /// - [`CoreError::Unreadable`] if the parent cannot be listed.
    pub fn navigate_to_parent(&mut self) -> CoreResult<&[String]> {
        let parent = self
            .current_dir
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| CoreError::NoParent(self.current_dir.clone()))?;
        self.navigate(&parent)
    }

    /// Navigates to the home directory fixed at construction.
    pub fn go_home(&mut self) -> CoreResult<&[String]> {
        let home = self.home.clone();
        self.navigate(&home)
    }

    /// Re-lists the current directory, keeping the selection on the same
    /// name when it still exists. The preview is kept.
    pub fn refresh(&mut self) -> CoreResult<&[String]> {
        let entries = ops::list_directory(&self.current_dir, self.show_hidden)?;
        let previous = self.selected_name().map(str::to_owned);
        let previous_index = self.selected;

        self.entries = entries;
        self.reselect(previous.as_deref(), previous_index);
        Ok(&self.entries)
    }

    /// Classifies `path` without changing any state.
    pub fn open_entry(&self, path: &Path) -> CoreResult<FileKind> {
        ops::open_entry(path)
    }

    /// Opens the selected entry.
    ///
    /// Directories are navigated into. Images and text files become the
    /// current [`Preview`]. Unsupported files are classified but leave the
    /// preview alone.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NothingSelected`] if no entry is selected.
    /// - [`CoreError::Unreadable`] if the entry cannot be read or listed.
    pub fn open_selected(&mut self) -> CoreResult<FileKind> {
        let path = self.selected_path().ok_or(CoreError::NothingSelected)?;
        let kind = ops::open_entry(&path)?;

        match kind {
            FileKind::Directory => {
                self.navigate(&path)?;
            }
            FileKind::Image | FileKind::Text => {
                self.preview = Some(Preview { path, kind });
            }
            FileKind::Unsupported => {}
        }
        Ok(kind)
    }

    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    // ---- mutations ----

    /// Renames `old_name` to `new_name` in the current directory.
    ///
    /// On success the listing entry is replaced in place, so its position
    /// and the selection are unchanged.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotListed`] if `old_name` is not in the listing.
    /// - [`CoreError::Unreadable`] if `old_name` vanished from disk.
    /// - [`CoreError::RenameConflict`] if the platform rename fails.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> CoreResult<()> {
        let index = self
            .position_of(old_name)
            .ok_or_else(|| CoreError::NotListed(old_name.to_string()))?;
        let old_path = ops::resolve_selection(&self.current_dir, old_name);
        let new_path = ops::rename_entry(&self.current_dir, old_name, new_name)?;

        tracing::debug!("renamed {} -> {}", old_path.display(), new_path.display());
        self.entries[index] = new_name.to_string();
        if let Some(preview) = self.preview.as_mut().filter(|p| p.path == old_path) {
            preview.path = new_path;
        }
        Ok(())
    }

    /// Moves `name` into `dest_dir_relative`, resolved against the current
    /// directory. The entry leaves the listing; the navigator does not
    /// follow it.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotListed`] if `name` is not in the listing.
    /// - [`CoreError::Unreadable`] if `name` vanished from disk.
    /// - [`CoreError::MoveConflict`] if the platform move fails.
    pub fn move_entry(&mut self, name: &str, dest_dir_relative: &str) -> CoreResult<PathBuf> {
        let index = self
            .position_of(name)
            .ok_or_else(|| CoreError::NotListed(name.to_string()))?;
        let old_path = ops::resolve_selection(&self.current_dir, name);
        let new_path = ops::move_entry(&self.current_dir, name, dest_dir_relative)?;

        tracing::debug!("moved {} -> {}", old_path.display(), new_path.display());
        self.remove_at(index, &old_path);
        Ok(new_path)
    }

    /// Deletes `name` from the current directory.
    ///
    /// The caller must have obtained the user's confirmation first; the
    /// navigator performs no prompting of its own.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotListed`] if `name` is not in the listing.
    /// - [`CoreError::DeleteConflict`] if the platform delete fails.
    pub fn delete(&mut self, name: &str) -> CoreResult<()> {
        let index = self
            .position_of(name)
            .ok_or_else(|| CoreError::NotListed(name.to_string()))?;
        ops::delete_entry(&self.current_dir, name)?;

        let path = ops::resolve_selection(&self.current_dir, name);
        tracing::debug!("deleted {}", path.display());
        self.remove_at(index, &path);
        Ok(())
    }

    /// [`Navigator::rename`] applied to the selected entry.
    pub fn rename_selected(&mut self, new_name: &str) -> CoreResult<()> {
        let name = self.selected_owned()?;
        self.rename(&name, new_name)
    }

    /// [`Navigator::move_entry`] applied to the selected entry.
    pub fn move_selected(&mut self, dest_dir_relative: &str) -> CoreResult<PathBuf> {
        let name = self.selected_owned()?;
        self.move_entry(&name, dest_dir_relative)
    }

    /// [`Navigator::delete`] applied to the selected entry.
    pub fn delete_selected(&mut self) -> CoreResult<()> {
        let name = self.selected_owned()?;
        self.delete(&name)
    }

    // ---- hidden files ----

    /// Switches hidden-file visibility and updates the listing in place.
    ///
    /// Turning visibility on appends the hidden entries of the current
    /// directory that are not already listed, in directory-read order.
    /// Turning it off removes every hidden entry. Non-hidden entries keep
    /// their relative order, and the selection follows its entry.
    ///
    /// # Errors
    ///
    /// [`CoreError::Unreadable`] if the directory cannot be re-scanned when
    /// turning visibility on; nothing changes in that case.
    pub fn toggle_hidden_visibility(&mut self, show_hidden: bool) -> CoreResult<&[String]> {
        let previous = self.selected_name().map(str::to_owned);
        let previous_index = self.selected;

        if show_hidden {
            let hidden = ops::list_hidden(&self.current_dir)?;
            for name in hidden {
                if !self.entries.contains(&name) {
                    self.entries.push(name);
                }
            }
        } else {
            self.entries.retain(|name| !ops::is_hidden(name));
        }

        self.show_hidden = show_hidden;
        self.reselect(previous.as_deref(), previous_index);
        tracing::debug!("hidden files {}", if show_hidden { "shown" } else { "hidden" });
        Ok(&self.entries)
    }

    /// Flips hidden-file visibility.
    pub fn toggle_hidden(&mut self) -> CoreResult<&[String]> {
        self.toggle_hidden_visibility(!self.show_hidden)
    }

    // ---- helpers ----

    fn position_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry == name)
    }

    fn selected_owned(&self) -> CoreResult<String> {
        self.selected_name()
            .map(str::to_owned)
            .ok_or(CoreError::NothingSelected)
    }

    /// Removes the entry at `index` after it left the directory.
    fn remove_at(&mut self, index: usize, path: &Path) {
        self.entries.remove(index);
        if self.preview.as_ref().is_some_and(|p| p.path == path) {
            self.preview = None;
        }
        self.selected = match self.selected {
            _ if self.entries.is_empty() => None,
            Some(s) if s > index => Some(s - 1),
            Some(s) => Some(s.min(self.entries.len() - 1)),
            None => None,
        };
    }

    /// Restores the selection to `name`, or clamps `fallback` if the name
    /// is gone.
    fn reselect(&mut self, name: Option<&str>, fallback: Option<usize>) {
        if let Some(index) = name.and_then(|n| self.position_of(n)) {
            self.selected = Some(index);
            return;
        }
        match fallback {
            Some(i) => self.select(i),
            None => self.selected = None,
        }
    }
}

fn first_index(entries: &[String]) -> Option<usize> {
    if entries.is_empty() {
        None
    } else {
        Some(0)
    }
}

/// Makes `path` absolute and folds `.` and `..` lexically. Symlinks are
/// kept as they are, so the parent of an entered link is the directory the
/// link lives in.
fn absolute(path: &Path) -> CoreResult<PathBuf> {
    let abs = std::path::absolute(path).map_err(|e| {
        tracing::warn!("cannot resolve {}: {e}", path.display());
        CoreError::Unreadable(path.to_path_buf())
    })?;

    let mut normalized = PathBuf::new();
    for component in abs.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Creates the files and returns a navigator on the temp dir.
    fn setup(names: &[&str]) -> (TempDir, Navigator) {
        let tmp = TempDir::new().unwrap();
        for name in names {
            fs::write(tmp.path().join(name), "").unwrap();
        }
        let nav = Navigator::new(tmp.path(), tmp.path(), false).unwrap();
        (tmp, nav)
    }

    #[test]
    fn new_selects_first_entry() {
        let (_tmp, nav) = setup(&["a.txt", "b.txt"]);
        assert_eq!(nav.selected_index(), Some(0));
        assert!(nav.preview().is_none());
    }

    #[test]
    fn new_on_empty_dir_has_no_selection() {
        let (tmp, nav) = setup(&[]);
        assert!(nav.entries().is_empty());
        assert!(nav.selected_name().is_none());
        assert_eq!(nav.status_path(), tmp.path().to_path_buf());
    }

    #[test]
    fn new_on_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing");
        assert!(matches!(
            Navigator::new(&missing, tmp.path(), false),
            Err(CoreError::Unreadable(_))
        ));
    }

    #[test]
    fn select_clamps_to_bounds() {
        let (_tmp, mut nav) = setup(&["a", "b"]);
        nav.select(100);
        assert_eq!(nav.selected_index(), Some(1));
    }

    #[test]
    fn cursor_moves_stay_in_bounds() {
        let (_tmp, mut nav) = setup(&["a", "b", "c"]);

        nav.cursor_up();
        assert_eq!(nav.selected_index(), Some(0));
        nav.cursor_down();
        nav.cursor_down();
        nav.cursor_down();
        assert_eq!(nav.selected_index(), Some(2));
        nav.cursor_top();
        assert_eq!(nav.selected_index(), Some(0));
        nav.cursor_bottom();
        assert_eq!(nav.selected_index(), Some(2));
    }

    #[test]
    fn cursor_down_from_nothing_selects_first() {
        let (_tmp, mut nav) = setup(&["a", "b"]);
        nav.clear_selection();
        nav.cursor_down();
        assert_eq!(nav.selected_index(), Some(0));
    }

    #[test]
    fn status_path_follows_selection() {
        let (tmp, mut nav) = setup(&["a.txt"]);
        let dir = tmp.path().to_path_buf();

        assert_eq!(nav.status_path(), dir.join("a.txt"));
        nav.clear_selection();
        assert_eq!(nav.status_path(), dir);
    }

    #[test]
    fn navigate_into_subdirectory() {
        let (tmp, mut nav) = setup(&["top.txt"]);
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("inner.txt"), "").unwrap();

        let listing = nav.navigate(&sub).unwrap().to_vec();

        assert_eq!(listing, vec!["inner.txt".to_string()]);
        assert_eq!(nav.current_dir(), sub.to_path_buf());
    }

    #[test]
    fn navigate_failure_keeps_state() {
        let (tmp, mut nav) = setup(&["a.txt", "b.txt"]);
        nav.select(1);
        let before_dir = nav.current_dir().to_path_buf();
        let before_entries = nav.entries().to_vec();

        let err = nav.navigate(&tmp.path().join("missing")).unwrap_err();

        assert!(matches!(err, CoreError::Unreadable(_)));
        assert_eq!(nav.current_dir(), before_dir);
        assert_eq!(nav.entries(), before_entries.as_slice());
        assert_eq!(nav.selected_index(), Some(1));
    }

    #[test]
    fn navigate_to_file_is_unreadable() {
        let (tmp, mut nav) = setup(&["a.txt"]);
        let err = nav.navigate(&tmp.path().join("a.txt")).unwrap_err();
        assert!(matches!(err, CoreError::Unreadable(_)));
    }

    #[test]
    fn navigate_clears_preview() {
        let (tmp, mut nav) = setup(&["readme.txt"]);
        nav.open_selected().unwrap();
        assert!(nav.preview().is_some());

        nav.navigate(tmp.path()).unwrap();

        assert!(nav.preview().is_none());
    }

    #[test]
    fn navigate_to_parent_goes_up() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        let mut nav = Navigator::new(&sub, tmp.path(), false).unwrap();

        let listing = nav.navigate_to_parent().unwrap().to_vec();

        assert_eq!(nav.current_dir(), tmp.path().to_path_buf());
        assert_eq!(listing, vec!["sub".to_string()]);
    }

    #[test]
    fn navigate_folds_parent_components() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        let mut nav = Navigator::new(&sub, tmp.path(), false).unwrap();

        nav.navigate(&sub.join("..").join(".")).unwrap();

        assert_eq!(nav.current_dir(), tmp.path());
    }

    #[cfg(unix)]
    #[test]
    fn parent_of_symlinked_dir_is_where_the_link_lives() {
        let tmp = TempDir::new().unwrap();
        let here = tmp.path().join("here");
        let real = tmp.path().join("elsewhere").join("real");
        fs::create_dir(&here).unwrap();
        fs::create_dir_all(&real).unwrap();
        fs::write(real.join("inside.txt"), "").unwrap();
        std::os::unix::fs::symlink(&real, here.join("link")).unwrap();
        let mut nav = Navigator::new(&here, tmp.path(), false).unwrap();

        assert_eq!(nav.open_selected().unwrap(), FileKind::Directory);
        assert_eq!(nav.current_dir(), here.join("link"));
        assert_eq!(nav.entries(), ["inside.txt".to_string()]);

        nav.navigate_to_parent().unwrap();

        assert_eq!(nav.current_dir(), here);
        assert_eq!(nav.entries(), ["link".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn navigate_into_unreadable_dir_keeps_state() {
        use std::os::unix::fs::PermissionsExt;

        let (tmp, mut nav) = setup(&["a.txt"]);
        let locked = tmp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not stop root.
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let before = nav.current_dir().to_path_buf();
        let err = nav.navigate(&locked).unwrap_err();

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(matches!(err, CoreError::Unreadable(ref p) if p == &locked));
        assert_eq!(nav.current_dir(), before);
        assert_eq!(nav.entries(), ["a.txt".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn navigate_to_parent_at_root_fails() {
        let mut nav = Navigator::new(Path::new("/"), Path::new("/"), false).unwrap();
        let before = nav.entries().to_vec();

        let err = nav.navigate_to_parent().unwrap_err();

        assert!(matches!(err, CoreError::NoParent(ref p) if p == Path::new("/")));
        assert_eq!(nav.current_dir(), Path::new("/"));
        assert_eq!(nav.entries(), before.as_slice());
    }

    #[test]
    fn go_home_returns_to_home() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        let mut nav = Navigator::new(&sub, tmp.path(), false).unwrap();

        nav.go_home().unwrap();

        assert_eq!(nav.current_dir(), tmp.path().to_path_buf());
    }

    #[test]
    fn open_selected_directory_navigates() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("docs")).unwrap();
        let mut nav = Navigator::new(tmp.path(), tmp.path(), false).unwrap();

        let kind = nav.open_selected().unwrap();

        assert_eq!(kind, FileKind::Directory);
        assert!(nav.current_dir().ends_with("docs"));
    }

    #[test]
    fn open_selected_text_sets_preview() {
        let (tmp, mut nav) = setup(&["readme.txt"]);

        let kind = nav.open_selected().unwrap();

        assert_eq!(kind, FileKind::Text);
        let preview = nav.preview().unwrap();
        assert_eq!(preview.kind, FileKind::Text);
        assert_eq!(preview.path, tmp.path().to_path_buf().join("readme.txt"));
    }

    #[test]
    fn open_selected_unsupported_leaves_preview() {
        let (_tmp, mut nav) = setup(&["data.bin"]);
        assert_eq!(nav.open_selected().unwrap(), FileKind::Unsupported);
        assert!(nav.preview().is_none());
    }

    #[test]
    fn open_selected_without_selection() {
        let (_tmp, mut nav) = setup(&[]);
        assert!(matches!(nav.open_selected(), Err(CoreError::NothingSelected)));
    }

    #[test]
    fn rename_replaces_in_place() {
        let (tmp, mut nav) = setup(&["a.txt", "x.txt", "y.txt"]);
        let pos = nav.entries().iter().position(|n| n == "a.txt").unwrap();
        let before_len = nav.entries().len();

        nav.rename("a.txt", "b.txt").unwrap();

        assert_eq!(nav.entries()[pos], "b.txt");
        assert_eq!(nav.entries().len(), before_len);
        assert!(!nav.entries().iter().any(|n| n == "a.txt"));
        assert!(tmp.path().join("b.txt").exists());
    }

    #[test]
    fn rename_keeps_selection_index() {
        let (_tmp, mut nav) = setup(&["a.txt", "c.txt"]);
        nav.select(1);
        let name = nav.selected_name().unwrap().to_string();

        nav.rename_selected("renamed.txt").unwrap();

        assert_eq!(nav.selected_index(), Some(1));
        assert_eq!(nav.selected_name(), Some("renamed.txt"));
        assert!(!nav.entries().contains(&name));
    }

    #[test]
    fn rename_conflict_leaves_listing() {
        let (tmp, mut nav) = setup(&["a.txt", "b.txt"]);
        let before = nav.entries().to_vec();

        let err = nav.rename("a.txt", "b.txt").unwrap_err();

        assert!(matches!(err, CoreError::RenameConflict { .. }));
        assert_eq!(nav.entries(), before.as_slice());
        assert!(tmp.path().join("a.txt").exists());
    }

    #[test]
    fn rename_into_subdirectory_is_refused() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("a.txt"), "").unwrap();
        let mut nav = Navigator::new(tmp.path(), tmp.path(), false).unwrap();
        let before = nav.entries().to_vec();

        let err = nav.rename("a.txt", "sub/b.txt").unwrap_err();

        assert!(matches!(err, CoreError::RenameConflict { .. }));
        assert_eq!(nav.entries(), before.as_slice());
        let mut on_disk = ops::list_directory(tmp.path(), false).unwrap();
        let mut listed = nav.entries().to_vec();
        on_disk.sort();
        listed.sort();
        assert_eq!(listed, on_disk);
    }

    #[test]
    fn rename_unlisted_touches_nothing() {
        let (tmp, mut nav) = setup(&[".secret"]);

        let err = nav.rename(".secret", "public").unwrap_err();

        assert!(matches!(err, CoreError::NotListed(_)));
        assert!(tmp.path().join(".secret").exists());
    }

    #[test]
    fn rename_retargets_preview() {
        let (_tmp, mut nav) = setup(&["notes.md"]);
        nav.open_selected().unwrap();

        nav.rename("notes.md", "todo.md").unwrap();

        assert!(nav.preview().unwrap().path.ends_with("todo.md"));
    }

    #[test]
    fn move_removes_entry_and_stays() {
        let (tmp, mut nav) = setup(&["a.txt", "b.txt"]);
        fs::create_dir(tmp.path().join("sub")).unwrap();
        nav.refresh().unwrap();
        let dir = nav.current_dir().to_path_buf();

        let dest = nav.move_entry("a.txt", "sub").unwrap();

        assert_eq!(dest, dir.join("sub").join("a.txt"));
        assert!(!nav.entries().iter().any(|n| n == "a.txt"));
        assert_eq!(nav.current_dir(), dir);
        assert!(dest.exists());
    }

    #[test]
    fn move_failure_leaves_listing() {
        let (_tmp, mut nav) = setup(&["a.txt"]);
        let before = nav.entries().to_vec();

        let err = nav.move_entry("a.txt", "nowhere").unwrap_err();

        assert!(matches!(err, CoreError::MoveConflict { .. }));
        assert_eq!(nav.entries(), before.as_slice());
    }

    #[test]
    fn move_clears_preview_of_moved_entry() {
        let (tmp, mut nav) = setup(&["readme.txt"]);
        fs::create_dir(tmp.path().join("archive")).unwrap();
        nav.refresh().unwrap();
        assert!(nav.select_name("readme.txt"));
        nav.open_selected().unwrap();

        nav.move_selected("archive").unwrap();

        assert!(nav.preview().is_none());
    }

    #[test]
    fn delete_removes_exactly_one_entry() {
        let (tmp, mut nav) = setup(&["a.txt", "b.txt", "c.txt"]);

        nav.delete("a.txt").unwrap();

        assert_eq!(nav.entries().len(), 2);
        assert!(!nav.entries().iter().any(|n| n == "a.txt"));
        assert!(!tmp.path().join("a.txt").exists());
    }

    #[test]
    fn delete_failure_keeps_cardinality() {
        let (tmp, mut nav) = setup(&["a.txt"]);
        let full = tmp.path().join("full");
        fs::create_dir(&full).unwrap();
        fs::write(full.join("x"), "").unwrap();
        nav.refresh().unwrap();
        let before = nav.entries().len();

        let err = nav.delete("full").unwrap_err();

        assert!(matches!(err, CoreError::DeleteConflict(ref n) if n == "full"));
        assert_eq!(nav.entries().len(), before);
    }

    #[test]
    fn delete_last_entry_clears_selection() {
        let (_tmp, mut nav) = setup(&["only.txt"]);

        nav.delete_selected().unwrap();

        assert!(nav.entries().is_empty());
        assert!(nav.selected_index().is_none());
        assert!(matches!(nav.delete_selected(), Err(CoreError::NothingSelected)));
    }

    #[test]
    fn delete_before_selection_shifts_it() {
        let (_tmp, mut nav) = setup(&["a", "b", "c"]);
        nav.select(2);
        let selected = nav.selected_name().unwrap().to_string();
        let first = nav.entries()[0].clone();

        nav.delete(&first).unwrap();

        assert_eq!(nav.selected_name(), Some(selected.as_str()));
    }

    #[test]
    fn toggle_hidden_on_appends_without_duplicates() {
        let (_tmp, mut nav) = setup(&[".git", "readme.txt", ".env"]);
        assert_eq!(nav.entries(), ["readme.txt".to_string()]);

        nav.toggle_hidden_visibility(true).unwrap();
        nav.toggle_hidden_visibility(true).unwrap();

        assert_eq!(nav.entries()[0], "readme.txt");
        assert_eq!(nav.entries().len(), 3);
        assert!(nav.show_hidden());
    }

    #[test]
    fn toggle_hidden_is_its_own_inverse() {
        let (_tmp, mut nav) = setup(&[".a", "b", "c", ".d", "e"]);
        let original = nav.entries().to_vec();

        nav.toggle_hidden().unwrap();
        nav.toggle_hidden().unwrap();

        assert_eq!(nav.entries(), original.as_slice());
        assert!(!nav.show_hidden());
    }

    #[test]
    fn toggle_hidden_keeps_selection_on_visible_entry() {
        let (_tmp, mut nav) = setup(&[".x", "a", "b"]);
        nav.select(1);
        let selected = nav.selected_name().unwrap().to_string();

        nav.toggle_hidden_visibility(true).unwrap();
        assert_eq!(nav.selected_name(), Some(selected.as_str()));

        nav.toggle_hidden_visibility(false).unwrap();
        assert_eq!(nav.selected_name(), Some(selected.as_str()));
    }

    #[test]
    fn toggle_hidden_off_moves_selection_off_hidden_entry() {
        let (_tmp, mut nav) = setup(&[".x", "a"]);
        nav.toggle_hidden_visibility(true).unwrap();
        assert!(nav.select_name(".x"));

        nav.toggle_hidden_visibility(false).unwrap();

        assert_eq!(nav.selected_name(), Some("a"));
    }

    #[test]
    fn navigation_honours_hidden_flag() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join(".hidden"), "").unwrap();
        let mut nav = Navigator::new(tmp.path(), tmp.path(), true).unwrap();

        nav.navigate(&sub).unwrap();

        assert_eq!(nav.entries(), [".hidden".to_string()]);
    }

    #[test]
    fn browse_scenario_with_hidden_git_dir() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join("readme.txt"), "hello").unwrap();
        fs::write(tmp.path().join("photo.png"), "").unwrap();
        let nav = Navigator::new(tmp.path(), tmp.path(), false).unwrap();
        let dir = nav.current_dir().to_path_buf();

        let mut listed = nav.entries().to_vec();
        listed.sort();
        assert_eq!(listed, vec!["photo.png".to_string(), "readme.txt".to_string()]);
        assert_eq!(nav.open_entry(&dir.join("photo.png")).unwrap(), FileKind::Image);
        assert_eq!(nav.open_entry(&dir.join("readme.txt")).unwrap(), FileKind::Text);

        fs::write(dir.join("unknown.xyz"), "").unwrap();
        assert_eq!(
            nav.open_entry(&dir.join("unknown.xyz")).unwrap(),
            FileKind::Unsupported
        );
    }

    #[test]
    fn refresh_picks_up_external_changes() {
        let (tmp, mut nav) = setup(&["a.txt"]);
        fs::write(tmp.path().join("new.txt"), "").unwrap();
        assert_eq!(nav.entries().len(), 1);

        nav.refresh().unwrap();

        assert_eq!(nav.entries().len(), 2);
        assert_eq!(nav.selected_name(), Some("a.txt"));
    }
}
