//! Opened files and the tab strip shown above the editor.
//!
//! `OpenedFiles` is the authoritative list (insertion order, one entry per
//! path). `TabStrip` keeps its own display order on top of it: new files are
//! appended, closed files dropped, and pinned tabs always sort first.

use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIcon {
    File,
    Folder,
}

impl FileIcon {
    pub fn label(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedFile {
    pub name: String,
    pub path: PathBuf,
    pub is_folder: bool,
    pub icon: FileIcon,
}

impl OpenedFile {
    pub fn from_path(path: PathBuf) -> Self {
        Self {
            name: file_name_of(&path),
            path,
            is_folder: false,
            icon: FileIcon::File,
        }
    }
}

/// Last `/`- or `\`-delimited segment of `path`.
pub fn file_name_of(path: &Path) -> String {
    let text = path.to_string_lossy();
    text.rsplit(['/', '\\']).next().unwrap_or_default().to_string()
}

/// Rewrites `path` when it is `from` or lives under it.
pub fn renamed_path(path: &Path, from: &Path, to: &Path) -> Option<PathBuf> {
    let rest = path.strip_prefix(from).ok()?;
    if rest.as_os_str().is_empty() {
        Some(to.to_path_buf())
    } else {
        Some(to.join(rest))
    }
}

#[derive(Debug, Default)]
pub struct OpenedFiles {
    files: Vec<OpenedFile>,
    untitled_count: u64,
}

impl OpenedFiles {
    pub fn files(&self) -> &[OpenedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.iter().any(|f| f.path == path)
    }

    pub fn last(&self) -> Option<&OpenedFile> {
        self.files.last()
    }

    /// Appends `path` unless it is already open.
    pub fn open(&mut self, path: &Path) -> bool {
        if self.contains(path) {
            return false;
        }
        tracing::debug!(path = %path.display(), "adding file to opened files");
        self.files.push(OpenedFile::from_path(path.to_path_buf()));
        true
    }

    pub fn close(&mut self, path: &Path) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.path != path);
        self.files.len() != before
    }

    /// Closes `path` and everything below it. Returns the closed paths.
    pub fn close_under(&mut self, path: &Path) -> Vec<PathBuf> {
        let mut closed = Vec::new();
        self.files.retain(|f| {
            if f.path.starts_with(path) {
                closed.push(f.path.clone());
                false
            } else {
                true
            }
        });
        closed
    }

    pub fn create_untitled(&mut self) -> PathBuf {
        self.untitled_count += 1;
        let path = PathBuf::from(format!("untitled-{}", self.untitled_count));
        self.files.push(OpenedFile {
            name: format!("Untitled-{}", self.untitled_count),
            path: path.clone(),
            is_folder: false,
            icon: FileIcon::File,
        });
        path
    }

    pub fn rename(&mut self, from: &Path, to: &Path) -> bool {
        let mut changed = false;
        for file in &mut self.files {
            if let Some(next) = renamed_path(&file.path, from, to) {
                file.name = file_name_of(&next);
                file.path = next;
                changed = true;
            }
        }
        changed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenFileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_folder: bool,
    pub is_pinned: bool,
    pub is_modified: bool,
}

impl OpenFileEntry {
    fn from_opened(file: &OpenedFile) -> Self {
        Self {
            name: file.name.clone(),
            path: file.path.clone(),
            is_folder: file.is_folder,
            is_pinned: false,
            is_modified: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTarget {
    This,
    Others,
    ToTheRight,
    ToTheLeft,
    All,
    Saved,
}

#[derive(Debug, Default)]
pub struct TabStrip {
    entries: Vec<OpenFileEntry>,
}

impl TabStrip {
    /// Tabs in display order.
    pub fn entries(&self) -> &[OpenFileEntry] {
        &self.entries
    }

    pub fn position(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }

    pub fn get(&self, path: &Path) -> Option<&OpenFileEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    pub fn reconcile(&mut self, opened: &[OpenedFile], modified: &FxHashSet<PathBuf>) -> bool {
        let present: FxHashSet<&Path> = opened.iter().map(|f| f.path.as_path()).collect();
        let before = self.entries.clone();

        self.entries.retain(|e| present.contains(e.path.as_path()));

        let mut known: FxHashSet<PathBuf> = self.entries.iter().map(|e| e.path.clone()).collect();
        for file in opened {
            if known.insert(file.path.clone()) {
                self.entries.push(OpenFileEntry::from_opened(file));
            }
        }

        for entry in &mut self.entries {
            entry.is_modified = modified.contains(&entry.path);
        }

        self.sort_pinned_first();
        self.entries != before
    }

    pub fn toggle_pin(&mut self, path: &Path) -> Option<bool> {
        let entry = self.entries.iter_mut().find(|e| e.path == path)?;
        entry.is_pinned = !entry.is_pinned;
        let pinned = entry.is_pinned;
        self.sort_pinned_first();
        Some(pinned)
    }

    /// Keeps pin state and position for a renamed file.
    pub fn rename(&mut self, from: &Path, to: &Path) -> bool {
        let mut changed = false;
        for entry in &mut self.entries {
            if let Some(next) = renamed_path(&entry.path, from, to) {
                entry.name = file_name_of(&next);
                entry.path = next;
                changed = true;
            }
        }
        changed
    }

    /// Paths a close command affects, in display order, computed against the
    /// current strip.
    pub fn close_targets(&self, anchor: &Path, target: CloseTarget) -> Vec<PathBuf> {
        let anchor_index = self.position(anchor);
        self.entries
            .iter()
            .enumerate()
            .filter(|(idx, entry)| match target {
                CloseTarget::This => entry.path == anchor,
                CloseTarget::Others => anchor_index.is_some() && entry.path != anchor,
                CloseTarget::ToTheRight => anchor_index.is_some_and(|a| *idx > a),
                CloseTarget::ToTheLeft => anchor_index.is_some_and(|a| *idx < a),
                CloseTarget::All => true,
                CloseTarget::Saved => !entry.is_modified,
            })
            .map(|(_, entry)| entry.path.clone())
            .collect()
    }

    fn sort_pinned_first(&mut self) {
        self.entries.sort_by_key(|e| !e.is_pinned);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/tabs.rs"]
mod tests;
