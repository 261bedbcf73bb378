use super::layout::PaneLayout;
use super::tabs::OpenFileEntry;
use super::{Action, AppState, Effect};

mod file_search;
mod tabs;
mod workspace;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn with_effects(effects: Vec<Effect>, state_changed: bool) -> Self {
        Self {
            effects,
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Open files in display order (pinned first).
    pub fn open_files(&self) -> &[OpenFileEntry] {
        self.state.tabs.entries()
    }

    pub fn layout(&self) -> &PaneLayout {
        &self.state.layout
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Tick { now } => self.fire_due_search(now),
            Action::SetWorkspaceRoot(root) => self.set_workspace_root(root),
            Action::IndexWorkspace => self.index_workspace(),
            Action::WorkspaceIndexed { generation, paths } => {
                self.workspace_indexed(generation, paths)
            }
            Action::WorkspaceIndexFailed { generation, error } => {
                self.workspace_index_failed(generation, &error)
            }
            Action::FileSearchOpen => {
                DispatchResult::changed(self.state.search_dialog.open())
            }
            Action::FileSearchClose => {
                self.state.pending_search = None;
                DispatchResult::changed(self.state.search_dialog.close())
            }
            Action::FileSearchSetQuery { query, now } => {
                DispatchResult::changed(self.state.search_dialog.set_query(query, now))
            }
            Action::FileSearchAppend { ch, now } => {
                DispatchResult::changed(self.state.search_dialog.append(ch, now))
            }
            Action::FileSearchBackspace { now } => {
                DispatchResult::changed(self.state.search_dialog.backspace(now))
            }
            Action::FileSearchMoveSelection { delta } => {
                DispatchResult::changed(self.state.search_dialog.move_selection(delta))
            }
            Action::FileSearchAccept => self.accept_search_result(),
            Action::FileSearchPick { index } => {
                if !self.state.search_dialog.select(index)
                    && self.state.search_dialog.selected_index() != Some(index)
                {
                    return DispatchResult::changed(false);
                }
                self.accept_search_result()
            }
            Action::FileSearchCompleted {
                request_id,
                results,
            } => DispatchResult::changed(self.state.search_dialog.complete(request_id, results)),
            Action::FileSearchFailed { request_id, error } => {
                DispatchResult::changed(self.state.search_dialog.fail(request_id, &error))
            }
            Action::SelectFile { pane, path } => self.select_file(pane, path),
            Action::CloseFile(path) => self.close_files(std::slice::from_ref(&path)),
            Action::CreateUntitled => self.create_untitled(),
            Action::SetModifiedFiles(paths) => self.set_modified_files(paths),
            Action::TogglePin(path) => self.toggle_pin(&path),
            Action::TabMenu { path, action } => self.run_tab_menu_action(path, action),
            Action::SplitEditor(path) => self.split_editor(path),
            Action::CloseSecondaryPane => self.close_secondary_pane(),
            Action::FocusPane(pane) => DispatchResult::changed(self.state.layout.focus(pane)),
            Action::SplitterDragStart { x } => {
                DispatchResult::changed(self.state.layout.begin_drag(x))
            }
            Action::SplitterDragMove { x, container_width } => {
                DispatchResult::changed(self.state.layout.drag_to(x, container_width))
            }
            Action::SplitterDragEnd => self.end_splitter_drag(),
            Action::EditorInfoChanged { pane, info } => self.editor_info_changed(pane, info),
            Action::IssuesChanged { pane, issues } => self.issues_changed(pane, issues),
            Action::ZoomIn => self.zoom(|editor| editor.zoom_in()),
            Action::ZoomOut => self.zoom(|editor| editor.zoom_out()),
            Action::ResetZoom => self.zoom(|editor| editor.reset_zoom()),
            Action::CreateFile(path) => self.request_fs_op(super::FsOp::CreateFile { path }),
            Action::CreateFolder(path) => self.request_fs_op(super::FsOp::CreateDir { path }),
            Action::DeletePath(path) => self.request_fs_op(super::FsOp::Delete { path }),
            Action::RenamePath { from, to } => {
                self.request_fs_op(super::FsOp::Rename { from, to })
            }
            Action::FsOpCompleted(op) => self.fs_op_completed(op),
            Action::FsOpFailed { op, error } => self.fs_op_failed(op, error),
        }
    }

    fn sync_tabs(&mut self) -> bool {
        self.state
            .tabs
            .reconcile(self.state.opened.files(), &self.state.modified)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
