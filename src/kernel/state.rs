use rustc_hash::FxHashSet;
use std::path::PathBuf;

use super::file_search::{FileSearch, FileSearchDialog, PendingSearch};
use super::layout::PaneLayout;
use super::problems::ProblemsState;
use super::services::ports::Settings;
use super::tabs::{OpenedFiles, TabStrip};

#[derive(Debug, Default)]
pub struct UiState {
    /// Last swallowed backend error, for a status line.
    pub last_error: Option<String>,
}

#[derive(Debug)]
pub struct AppState {
    pub workspace_root: PathBuf,
    pub settings: Settings,
    pub opened: OpenedFiles,
    pub modified: FxHashSet<PathBuf>,
    pub tabs: TabStrip,
    pub layout: PaneLayout,
    pub file_search: FileSearch,
    pub search_dialog: FileSearchDialog,
    pub pending_search: Option<PendingSearch>,
    pub problems: ProblemsState,
    pub ui: UiState,
}

impl AppState {
    pub fn new(workspace_root: PathBuf, settings: Settings) -> Self {
        let layout = PaneLayout::new(settings.layout.clamped_primary_width());
        let search_dialog = FileSearchDialog::new(settings.search.debounce());
        Self {
            file_search: FileSearch::with_root(workspace_root.clone()),
            workspace_root,
            settings,
            opened: OpenedFiles::default(),
            modified: FxHashSet::default(),
            tabs: TabStrip::default(),
            layout,
            search_dialog,
            pending_search: None,
            problems: ProblemsState::default(),
            ui: UiState::default(),
        }
    }

    pub fn font_size(&self) -> u16 {
        self.settings.editor.font_size
    }

    /// `path` relative to the workspace root, or the full path outside it.
    pub fn relative_path_text(&self, path: &std::path::Path) -> String {
        path.strip_prefix(&self.workspace_root)
            .ok()
            .filter(|rel| !rel.as_os_str().is_empty())
            .map(|rel| rel.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string())
    }
}
