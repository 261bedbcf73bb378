use std::path::PathBuf;
use std::time::Instant;

use super::DispatchResult;
use crate::kernel::file_search::PendingSearch;
use crate::kernel::layout::Pane;
use crate::kernel::Effect;

impl super::Store {
    pub(super) fn set_workspace_root(&mut self, root: PathBuf) -> DispatchResult {
        if !self.state.file_search.set_workspace_root(root.clone()) {
            return DispatchResult::changed(false);
        }
        tracing::info!(root = %root.display(), "workspace root changed");
        self.state.workspace_root = root;
        self.state.pending_search = None;
        self.state.search_dialog.clear_results();
        DispatchResult::changed(true)
    }

    pub(super) fn index_workspace(&mut self) -> DispatchResult {
        match self.begin_indexing() {
            Some(effect) => DispatchResult::with_effects(vec![effect], true),
            None => DispatchResult::changed(false),
        }
    }

    pub(super) fn workspace_indexed(
        &mut self,
        generation: u64,
        paths: Vec<String>,
    ) -> DispatchResult {
        if !self.state.file_search.finish_indexing(generation, paths) {
            return DispatchResult::changed(false);
        }
        DispatchResult::with_effects(self.run_pending_search(), true)
    }

    pub(super) fn workspace_index_failed(&mut self, generation: u64, error: &str) -> DispatchResult {
        if !self.state.file_search.fail_indexing(generation, error) {
            return DispatchResult::changed(false);
        }
        self.state.ui.last_error = Some(format!("indexing failed: {error}"));
        // Searches still run against whatever snapshot exists.
        DispatchResult::with_effects(self.run_pending_search(), true)
    }

    pub(super) fn fire_due_search(&mut self, now: Instant) -> DispatchResult {
        let Some(query) = self.state.search_dialog.take_due_query(now) else {
            return DispatchResult::changed(false);
        };

        if query.trim().is_empty() {
            self.state.pending_search = None;
            return DispatchResult::changed(self.state.search_dialog.clear_results());
        }

        let request_id = self.state.search_dialog.begin_request();
        if self.state.file_search.is_indexed() {
            let effect = self.search_effect(request_id, query);
            return DispatchResult::with_effects(vec![effect], true);
        }

        tracing::debug!(request_id, "search waiting for file index");
        self.state.pending_search = Some(PendingSearch { request_id, query });
        let effects = self.begin_indexing().into_iter().collect();
        DispatchResult::with_effects(effects, true)
    }

    pub(super) fn accept_search_result(&mut self) -> DispatchResult {
        let Some(result) = self.state.search_dialog.selected_result() else {
            return DispatchResult::changed(false);
        };
        if result.is_directory {
            tracing::debug!(path = %result.full_path, "ignoring directory in file search");
            return DispatchResult::changed(false);
        }

        let path = PathBuf::from(&result.full_path);
        self.state.search_dialog.close();
        self.state.pending_search = None;

        let mut result = self.select_file(Pane::Primary, path);
        result.state_changed = true;
        result
    }

    fn begin_indexing(&mut self) -> Option<Effect> {
        let (root, generation) = self.state.file_search.begin_indexing()?;
        Some(Effect::IndexWorkspace { root, generation })
    }

    fn run_pending_search(&mut self) -> Vec<Effect> {
        let Some(pending) = self.state.pending_search.take() else {
            return Vec::new();
        };
        if !self.state.search_dialog.is_current(pending.request_id) {
            return Vec::new();
        }
        vec![self.search_effect(pending.request_id, pending.query)]
    }

    fn search_effect(&self, request_id: u64, query: String) -> Effect {
        Effect::RunFileSearch {
            request_id,
            index: self.state.file_search.index(),
            query,
            max_results: self.state.settings.search.max_results(),
        }
    }
}
