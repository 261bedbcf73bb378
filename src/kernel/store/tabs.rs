use std::path::PathBuf;

use super::DispatchResult;
use crate::kernel::action::TabMenuAction;
use crate::kernel::layout::Pane;
use crate::kernel::problems::{EditorInfo, FileIssues};
use crate::kernel::services::ports::EditorSettings;
use crate::kernel::tabs::CloseTarget;
use crate::kernel::Effect;

fn close_target(action: TabMenuAction) -> Option<CloseTarget> {
    match action {
        TabMenuAction::Close => Some(CloseTarget::This),
        TabMenuAction::CloseOthers => Some(CloseTarget::Others),
        TabMenuAction::CloseToRight => Some(CloseTarget::ToTheRight),
        TabMenuAction::CloseToLeft => Some(CloseTarget::ToTheLeft),
        TabMenuAction::CloseAll => Some(CloseTarget::All),
        TabMenuAction::CloseSaved => Some(CloseTarget::Saved),
        _ => None,
    }
}

impl super::Store {
    pub(super) fn select_file(&mut self, pane: Pane, path: PathBuf) -> DispatchResult {
        if pane == Pane::Secondary && !self.state.layout.is_split() {
            tracing::debug!(path = %path.display(), "secondary pane select without split");
            return DispatchResult::changed(false);
        }

        let mut changed = self.state.opened.open(&path);
        changed |= self.state.layout.select(pane, path.clone());
        changed |= self.sync_tabs();
        DispatchResult::with_effects(vec![Effect::FileSelected { pane, path }], changed)
    }

    /// Closes each path in turn. A path that is not open is skipped; the
    /// remaining closes still run.
    pub(super) fn close_files(&mut self, paths: &[PathBuf]) -> DispatchResult {
        let mut effects = Vec::new();
        let mut changed = false;
        let mut primary_closed = false;
        for path in paths {
            if !self.state.opened.close(path) {
                tracing::debug!(path = %path.display(), "close of a file that is not open");
                continue;
            }
            primary_closed |= self.forget_closed(path.clone(), &mut effects);
            changed = true;
        }
        if primary_closed {
            self.refill_primary(&mut effects);
        }
        changed |= self.sync_tabs();
        DispatchResult::with_effects(effects, changed)
    }

    /// Layout and dirty-state cleanup after `path` left the opened files.
    /// Returns true when the primary pane was showing it; the caller refills
    /// the pane once its whole batch of closes has run.
    pub(super) fn forget_closed(&mut self, path: PathBuf, effects: &mut Vec<Effect>) -> bool {
        self.state.modified.remove(&path);

        if self.state.layout.secondary_file() == Some(path.as_path()) {
            self.state.layout.close_secondary();
        }
        let was_primary = self.state.layout.primary_file() == Some(path.as_path());
        if was_primary {
            self.state.layout.set_primary_file(None);
        }

        tracing::debug!(path = %path.display(), "file closed");
        effects.push(Effect::FileClosed(path));
        was_primary
    }

    /// Shows the last remaining opened file in an emptied primary pane.
    pub(super) fn refill_primary(&mut self, effects: &mut Vec<Effect>) {
        let Some(next) = self.state.opened.last().map(|f| f.path.clone()) else {
            return;
        };
        self.state.layout.set_primary_file(Some(next.clone()));
        effects.push(Effect::FileSelected {
            pane: Pane::Primary,
            path: next,
        });
    }

    pub(super) fn create_untitled(&mut self) -> DispatchResult {
        let path = self.state.opened.create_untitled();
        self.state.layout.select(Pane::Primary, path.clone());
        self.sync_tabs();
        DispatchResult::with_effects(
            vec![Effect::FileSelected {
                pane: Pane::Primary,
                path,
            }],
            true,
        )
    }

    pub(super) fn set_modified_files(&mut self, paths: Vec<PathBuf>) -> DispatchResult {
        self.state.modified = paths.into_iter().collect();
        DispatchResult::changed(self.sync_tabs())
    }

    pub(super) fn toggle_pin(&mut self, path: &std::path::Path) -> DispatchResult {
        let Some(pinned) = self.state.tabs.toggle_pin(path) else {
            return DispatchResult::changed(false);
        };
        DispatchResult::with_effects(
            vec![Effect::PinToggled {
                path: path.to_path_buf(),
                pinned,
            }],
            true,
        )
    }

    pub(super) fn run_tab_menu_action(
        &mut self,
        path: PathBuf,
        action: TabMenuAction,
    ) -> DispatchResult {
        if let Some(target) = close_target(action) {
            let targets = self.state.tabs.close_targets(&path, target);
            return self.close_files(&targets);
        }

        match action {
            TabMenuAction::CopyPath => DispatchResult::with_effects(
                vec![Effect::SetClipboardText(path.to_string_lossy().to_string())],
                false,
            ),
            TabMenuAction::CopyRelativePath => {
                let text = self.state.relative_path_text(&path);
                DispatchResult::with_effects(vec![Effect::SetClipboardText(text)], false)
            }
            TabMenuAction::RevealInFileManager => {
                DispatchResult::with_effects(vec![Effect::RevealInFileManager(path)], false)
            }
            TabMenuAction::TogglePin => self.toggle_pin(&path),
            _ => DispatchResult::changed(false),
        }
    }

    pub(super) fn split_editor(&mut self, path: PathBuf) -> DispatchResult {
        let mut changed = self.state.opened.open(&path);
        changed |= self.state.layout.split(path.clone());
        changed |= self.sync_tabs();
        DispatchResult::with_effects(vec![Effect::SplitEditor { path }], changed)
    }

    pub(super) fn close_secondary_pane(&mut self) -> DispatchResult {
        if !self.state.layout.close_secondary() {
            return DispatchResult::changed(false);
        }
        let effects = self
            .state
            .layout
            .primary_file()
            .map(|path| Effect::SplitEditor {
                path: path.to_path_buf(),
            })
            .into_iter()
            .collect();
        DispatchResult::with_effects(effects, true)
    }

    pub(super) fn end_splitter_drag(&mut self) -> DispatchResult {
        if !self.state.layout.end_drag() {
            return DispatchResult::changed(false);
        }
        let width = self.state.layout.primary_width_percent();
        let layout = &mut self.state.settings.layout;
        if (layout.primary_width_percent - width).abs() < f64::EPSILON {
            return DispatchResult::changed(true);
        }
        layout.primary_width_percent = width;
        DispatchResult::with_effects(
            vec![Effect::SaveSettings(self.state.settings.clone())],
            true,
        )
    }

    pub(super) fn editor_info_changed(&mut self, pane: Pane, info: EditorInfo) -> DispatchResult {
        if pane != Pane::Primary {
            tracing::debug!(?pane, "ignoring editor info from secondary pane");
            return DispatchResult::changed(false);
        }
        DispatchResult::changed(self.state.problems.set_editor_info(info))
    }

    pub(super) fn issues_changed(&mut self, pane: Pane, issues: Vec<FileIssues>) -> DispatchResult {
        if pane != Pane::Primary {
            tracing::debug!(?pane, count = issues.len(), "ignoring issues from secondary pane");
            return DispatchResult::changed(false);
        }
        DispatchResult::changed(self.state.problems.set_issues(issues))
    }

    pub(super) fn zoom(&mut self, apply: impl FnOnce(&mut EditorSettings) -> bool) -> DispatchResult {
        if !apply(&mut self.state.settings.editor) {
            return DispatchResult::changed(false);
        }
        let size = self.state.settings.editor.font_size;
        tracing::debug!(size, "font size changed");
        DispatchResult::with_effects(
            vec![
                Effect::FontSizeChanged(size),
                Effect::SaveSettings(self.state.settings.clone()),
            ],
            true,
        )
    }
}
