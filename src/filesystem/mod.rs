// src/filesystem/mod.rs
pub mod dir;
pub mod fuzzy;

pub use dir::DirectoryBrowser;
pub use fuzzy::matches;

/// Name shown for the synthetic entry that leads to the parent directory.
pub const PARENT_ENTRY: &str = "..";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Parent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        FileEntry { name: name.into(), kind }
    }

    pub fn parent() -> Self {
        FileEntry::new(PARENT_ENTRY, EntryKind::Parent)
    }

    pub fn from_walk_entry(entry: &walkdir::DirEntry) -> Self {
        let name = entry.file_name().to_string_lossy().to_string();
        // path().is_dir() follows symlinks, file_type() does not
        let kind = if entry.path().is_dir() { EntryKind::Directory } else { EntryKind::File };
        FileEntry { name, kind }
    }
}
