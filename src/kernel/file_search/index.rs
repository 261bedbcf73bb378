//! In-memory file index and path ranking.
//!
//! A `FileIndex` is built from one flat listing of the workspace and never
//! mutated afterwards; rebuilding produces a new snapshot. Queries are ranked
//! with a cheap ordered-substring score:
//!
//! - every `/`-separated query part must occur in order in the relative path
//! - parts matching at a segment start score higher than mid-segment matches
//! - shorter paths score higher
//! - an exact file name match on the last part gets a flat bonus

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::kernel::services::ports::FileProvider;

pub const DEFAULT_MAX_RESULTS: usize = 20;

const BOUNDARY_MATCH_SCORE: i64 = 10;
const INNER_MATCH_SCORE: i64 = 5;
const PATH_LENGTH_BUDGET: usize = 100;
const EXACT_NAME_BONUS: i64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFile {
    pub full_path: String,
    pub name: String,
    pub extension: String,
    pub is_directory: bool,
}

impl IndexedFile {
    pub fn from_listing(path: &str) -> Self {
        let name = base_name(path).to_string();
        let extension = extension_of(&name).to_string();
        Self {
            full_path: path.to_string(),
            is_directory: path.ends_with('/') || path.ends_with('\\'),
            name,
            extension,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub full_path: String,
    pub relative_path: String,
    pub name: String,
    pub is_directory: bool,
    pub match_score: i64,
}

#[derive(Debug, Default)]
pub struct FileIndex {
    root: String,
    root_key: String,
    files: Vec<IndexedFile>,
    // Lower-cased, `/`-normalized relative paths, parallel to `files`.
    keys: Vec<String>,
}

impl FileIndex {
    pub fn empty(root: &str) -> Self {
        Self::from_listing(root, std::iter::empty::<String>())
    }

    pub fn from_listing<I, S>(root: &str, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let root_key = normalize_path(root).trim_end_matches('/').to_string();
        let files: Vec<IndexedFile> = paths
            .into_iter()
            .map(|p| IndexedFile::from_listing(p.as_ref()))
            .collect();
        let keys = files
            .iter()
            .map(|f| relative_key(&root_key, &normalize_path(&f.full_path)).to_string())
            .collect();

        Self {
            root: root.to_string(),
            root_key,
            files,
            keys,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn files(&self) -> &[IndexedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn search(&self, query: &str, max_results: usize) -> Vec<SearchResult> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let parts = query_parts(query);
        let mut results: Vec<SearchResult> = self
            .files
            .iter()
            .zip(self.keys.iter())
            .filter_map(|(file, key)| {
                let match_score = score_relative_path(key, &file.name, &parts)?;
                Some(SearchResult {
                    full_path: file.full_path.clone(),
                    relative_path: self.relative_path(&file.full_path),
                    name: file.name.clone(),
                    is_directory: file.is_directory,
                    match_score,
                })
            })
            .collect();

        // Stable: equal scores keep listing order.
        results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        results.truncate(max_results);
        results
    }

    /// Display form of `full_path` relative to the root, original casing kept.
    pub fn relative_path(&self, full_path: &str) -> String {
        let root = self.root.trim_end_matches(['/', '\\']);
        if root.is_empty() {
            return full_path.to_string();
        }
        match full_path.strip_prefix(root) {
            Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => {
                rest.strip_prefix(['/', '\\']).unwrap_or(rest).to_string()
            }
            _ => full_path.to_string(),
        }
    }
}

/// Lower-cases the query, normalizes separators and splits it into the
/// non-empty parts that must match in order.
pub fn query_parts(query: &str) -> Vec<String> {
    normalize_path(query)
        .split('/')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scores one normalized relative path, or `None` when some part is missing.
pub fn score_relative_path(relative: &str, file_name: &str, parts: &[String]) -> Option<i64> {
    let mut score = 0i64;
    let mut remaining = relative;

    for part in parts {
        let index = remaining.find(part.as_str())?;
        if index == 0 || remaining[..index].ends_with('/') {
            score += BOUNDARY_MATCH_SCORE;
        } else {
            score += INNER_MATCH_SCORE;
        }
        remaining = &remaining[index + part.len()..];
    }

    let length = relative.chars().count().min(PATH_LENGTH_BUDGET);
    score += (PATH_LENGTH_BUDGET - length) as i64;

    if parts
        .last()
        .is_some_and(|last| file_name.to_lowercase() == *last)
    {
        score += EXACT_NAME_BONUS;
    }

    Some(score)
}

pub fn normalize_path(path: &str) -> String {
    path.to_lowercase().replace('\\', "/")
}

fn relative_key<'a>(root_key: &str, normalized: &'a str) -> &'a str {
    if root_key.is_empty() {
        return normalized;
    }
    match normalized.strip_prefix(root_key) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => {
            rest.strip_prefix('/').unwrap_or(rest)
        }
        _ => normalized,
    }
}

fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}

fn extension_of(name: &str) -> &str {
    name.rfind('.').map(|i| &name[i..]).unwrap_or("")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    Unindexed,
    Indexing { generation: u64 },
    Indexed,
}

/// Owns the index for one workspace root.
///
/// The root is injected; changing it drops the current snapshot and bumps the
/// generation so listings still in flight for the old root are ignored.
#[derive(Debug)]
pub struct FileSearch {
    root: Option<PathBuf>,
    generation: u64,
    index: Arc<FileIndex>,
    status: IndexStatus,
}

impl Default for FileSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSearch {
    pub fn new() -> Self {
        Self {
            root: None,
            generation: 0,
            index: Arc::new(FileIndex::default()),
            status: IndexStatus::Unindexed,
        }
    }

    pub fn with_root(root: PathBuf) -> Self {
        let mut search = Self::new();
        search.set_workspace_root(root);
        search
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> IndexStatus {
        self.status
    }

    pub fn is_indexed(&self) -> bool {
        self.status == IndexStatus::Indexed
    }

    pub fn is_indexing(&self) -> bool {
        matches!(self.status, IndexStatus::Indexing { .. })
    }

    pub fn index(&self) -> Arc<FileIndex> {
        Arc::clone(&self.index)
    }

    pub fn set_workspace_root(&mut self, root: PathBuf) -> bool {
        if self.root.as_ref() == Some(&root) {
            return false;
        }
        self.root = Some(root);
        self.reset();
        true
    }

    /// Drops the index; the next search lists the workspace again.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        let root = self.root_string();
        self.index = Arc::new(FileIndex::empty(&root));
        self.status = IndexStatus::Unindexed;
    }

    /// Marks the index stale but keeps serving the old snapshot until the
    /// next listing completes.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.status = IndexStatus::Unindexed;
    }

    /// Returns the root and generation to list, or `None` when there is no
    /// root or a listing is already running.
    pub fn begin_indexing(&mut self) -> Option<(PathBuf, u64)> {
        if self.is_indexing() {
            return None;
        }
        let Some(root) = self.root.clone() else {
            tracing::warn!("file index requested without a workspace root");
            return None;
        };
        self.status = IndexStatus::Indexing {
            generation: self.generation,
        };
        tracing::debug!(root = %root.display(), generation = self.generation, "indexing files");
        Some((root, self.generation))
    }

    pub fn finish_indexing(&mut self, generation: u64, paths: Vec<String>) -> bool {
        if self.status != (IndexStatus::Indexing { generation }) {
            tracing::debug!(generation, "dropping stale file listing");
            return false;
        }
        let root = self.root_string();
        self.index = Arc::new(FileIndex::from_listing(&root, paths));
        self.status = IndexStatus::Indexed;
        tracing::info!(files = self.index.len(), "indexed files");
        true
    }

    pub fn fail_indexing(&mut self, generation: u64, error: &str) -> bool {
        if self.status != (IndexStatus::Indexing { generation }) {
            return false;
        }
        tracing::warn!(error, "file indexing failed");
        self.status = IndexStatus::Unindexed;
        true
    }

    /// Blocking indexing pass through `provider`.
    pub fn index_files(&mut self, provider: &dyn FileProvider) {
        let Some((root, generation)) = self.begin_indexing() else {
            return;
        };
        match provider.list_all_files(&root) {
            Ok(paths) => {
                self.finish_indexing(generation, paths);
            }
            Err(e) => {
                self.fail_indexing(generation, &e.to_string());
            }
        }
    }

    /// Blocking search; indexes first when no snapshot has been built yet.
    pub fn search_files(
        &mut self,
        provider: &dyn FileProvider,
        query: &str,
        max_results: usize,
    ) -> Vec<SearchResult> {
        if !self.is_indexed() && !self.is_indexing() {
            self.index_files(provider);
        }
        self.index.search(query, max_results)
    }

    fn root_string(&self) -> String {
        self.root
            .as_ref()
            .map(|r| r.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/file_search/index.rs"]
mod tests;
