use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

use super::DispatchResult;
use crate::kernel::effect::FsOp;
use crate::kernel::layout::Pane;
use crate::kernel::tabs::renamed_path;
use crate::kernel::Effect;

impl super::Store {
    pub(super) fn request_fs_op(&mut self, op: FsOp) -> DispatchResult {
        tracing::debug!(op = op.name(), "requesting file operation");
        DispatchResult::with_effects(vec![Effect::Fs(op)], false)
    }

    pub(super) fn fs_op_completed(&mut self, op: FsOp) -> DispatchResult {
        self.state.ui.last_error = None;
        self.state.file_search.invalidate();

        let mut effects = Vec::new();
        // A search parked on the old listing needs a fresh one.
        if self.state.pending_search.is_some() {
            if let Some((root, generation)) = self.state.file_search.begin_indexing() {
                effects.push(Effect::IndexWorkspace { root, generation });
            }
        }

        match op {
            FsOp::CreateFile { path } => {
                let result = self.select_file(Pane::Primary, path);
                effects.extend(result.effects);
            }
            FsOp::CreateDir { .. } => {}
            FsOp::Delete { path } => {
                let mut primary_closed = false;
                for closed in self.state.opened.close_under(&path) {
                    primary_closed |= self.forget_closed(closed, &mut effects);
                }
                if primary_closed {
                    self.refill_primary(&mut effects);
                }
                self.sync_tabs();
            }
            FsOp::Rename { from, to } => self.rename_open_paths(&from, &to),
        }

        DispatchResult::with_effects(effects, true)
    }

    pub(super) fn fs_op_failed(&mut self, op: FsOp, error: String) -> DispatchResult {
        tracing::warn!(op = op.name(), error = %error, "file operation failed");
        self.state.ui.last_error = Some(format!("{}: {error}", op.name()));
        DispatchResult::changed(true)
    }

    fn rename_open_paths(&mut self, from: &Path, to: &Path) {
        self.state.opened.rename(from, to);
        self.state.tabs.rename(from, to);
        self.state.layout.rename(from, to);

        let modified: FxHashSet<PathBuf> = self
            .state
            .modified
            .drain()
            .map(|p| renamed_path(&p, from, to).unwrap_or(p))
            .collect();
        self.state.modified = modified;
        self.sync_tabs();
    }
}
