// src/filesystem/dir.rs
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{matches, EntryKind, FileEntry};
use crate::error::{EditorError, Result};

/// Directory picker with incremental fuzzy filtering.
///
/// `current_dir` is relative to `root`; the empty path is the root itself.
/// A `..` entry is listed whenever `current_dir` has a parent.
#[derive(Debug, Clone)]
pub struct DirectoryBrowser {
    root: PathBuf,
    current_dir: PathBuf,
    entries: Vec<FileEntry>,
    /// Indices into `entries`, in listing order.
    filtered: Vec<usize>,
    search: String,
    selected: usize,
    /// Selection before each typed character, restored by backspace.
    selection_history: Vec<usize>,
    visible: bool,
}

impl DirectoryBrowser {
    /// Lists `start` (relative to `root`). The browser starts hidden.
    pub fn open(root: impl Into<PathBuf>, start: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let current_dir = start.into();
        let entries = list_entries(&root, &current_dir)?;
        let mut browser = DirectoryBrowser {
            root,
            current_dir,
            entries,
            filtered: Vec::new(),
            search: String::new(),
            selected: 0,
            selection_history: Vec::new(),
            visible: false,
        };
        browser.refilter();
        Ok(browser)
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Directory name for display; `./` at the root.
    pub fn display_dir(&self) -> String {
        if self.current_dir.as_os_str().is_empty() {
            "./".to_string()
        } else {
            self.current_dir.display().to_string()
        }
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Number of real directory entries, without `..`.
    pub fn entry_count(&self) -> usize {
        self.entries.iter().filter(|e| e.kind != EntryKind::Parent).count()
    }

    pub fn filtered_entries(&self) -> impl Iterator<Item = &FileEntry> + '_ {
        self.filtered.iter().map(move |&i| &self.entries[i])
    }

    pub fn filtered_names(&self) -> Vec<&str> {
        self.filtered_entries().map(|e| e.name.as_str()).collect()
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn selection_index(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.filtered.get(self.selected).map(|&i| &self.entries[i])
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn type_char(&mut self, c: char) {
        self.selection_history.push(self.selected);
        self.search.push(c);
        self.selected = 0;
        self.refilter();
    }

    pub fn backspace(&mut self) {
        if self.search.pop().is_none() {
            return;
        }
        self.refilter();
        let previous = self.selection_history.pop().unwrap_or(0);
        self.selected = previous.min(self.filtered.len().saturating_sub(1));
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let last = self.filtered.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    /// Acts on the selected entry. Directories (and `..`) are entered and
    /// `Ok(None)` is returned; a file hides the browser and yields its path.
    /// On a listing failure the browser keeps its previous state.
    pub fn confirm(&mut self) -> Result<Option<PathBuf>> {
        let Some(entry) = self.selected_entry().cloned() else {
            return Ok(None);
        };
        match entry.kind {
            EntryKind::Parent => {
                let parent = self.current_dir.parent().map(Path::to_path_buf).unwrap_or_default();
                self.change_dir(parent)?;
                Ok(None)
            }
            EntryKind::Directory => {
                self.change_dir(self.current_dir.join(&entry.name))?;
                Ok(None)
            }
            EntryKind::File => {
                let path = join_non_empty(&self.root, &self.current_dir.join(&entry.name));
                log::info!("selected {}", path.display());
                self.visible = false;
                Ok(Some(path))
            }
        }
    }

    /// Replaces the listing with `dir` and clears the search.
    pub fn change_dir(&mut self, dir: PathBuf) -> Result<()> {
        let entries = list_entries(&self.root, &dir)?;
        log::debug!("browsing {}", dir.display());
        self.current_dir = dir;
        self.entries = entries;
        self.search.clear();
        self.selection_history.clear();
        self.selected = 0;
        self.refilter();
        Ok(())
    }

    fn refilter(&mut self) {
        self.filtered = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| matches(&self.search, &entry.name))
            .map(|(i, _)| i)
            .collect();
    }
}

fn join_non_empty(base: &Path, rel: &Path) -> PathBuf {
    if rel.as_os_str().is_empty() {
        base.to_path_buf()
    } else {
        base.join(rel)
    }
}

/// Entries of `root/dir` sorted by name, led by `..` when `dir` has a parent.
fn list_entries(root: &Path, dir: &Path) -> Result<Vec<FileEntry>> {
    let mut path = join_non_empty(root, dir);
    if path.as_os_str().is_empty() {
        path = PathBuf::from(".");
    }

    let mut entries = Vec::new();
    if dir.parent().is_some() {
        entries.push(FileEntry::parent());
    }
    for entry in WalkDir::new(&path).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| EditorError::io(&path, io::Error::from(e)))?;
        entries.push(FileEntry::from_walk_entry(&entry));
    }
    Ok(entries)
}
