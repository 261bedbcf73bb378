use super::*;
use crate::kernel::action::TabMenuAction;
use crate::kernel::effect::FsOp;
use crate::kernel::file_search::IndexStatus;
use crate::kernel::layout::{Pane, PaneSplit};
use crate::kernel::problems::{EditorInfo, FileIssues};
use crate::kernel::services::ports::Settings;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const ROOT: &str = "/ws";

fn new_store() -> Store {
    Store::new(AppState::new(PathBuf::from(ROOT), Settings::default()))
}

fn p(path: &str) -> PathBuf {
    PathBuf::from(path)
}

fn open(store: &mut Store, path: &str) -> DispatchResult {
    store.dispatch(Action::SelectFile {
        pane: Pane::Primary,
        path: p(path),
    })
}

fn tab_order(store: &Store) -> Vec<String> {
    store
        .open_files()
        .iter()
        .map(|e| e.path.to_string_lossy().to_string())
        .collect()
}

/// Types `query` and lets the debounce elapse. Returns the tick's effects.
fn search(store: &mut Store, query: &str, now: Instant) -> Vec<Effect> {
    store.dispatch(Action::FileSearchOpen);
    store.dispatch(Action::FileSearchSetQuery {
        query: query.to_string(),
        now,
    });
    store
        .dispatch(Action::Tick {
            now: now + Duration::from_millis(300),
        })
        .effects
}

fn index_with(store: &mut Store, effects: &[Effect], paths: &[&str]) -> Vec<Effect> {
    let generation = effects
        .iter()
        .find_map(|e| match e {
            Effect::IndexWorkspace { generation, .. } => Some(*generation),
            _ => None,
        })
        .expect("index effect");
    store
        .dispatch(Action::WorkspaceIndexed {
            generation,
            paths: paths.iter().map(|s| s.to_string()).collect(),
        })
        .effects
}

/// Runs the search effect inline, the way the runtime would.
fn complete_search(store: &mut Store, effects: Vec<Effect>) -> u64 {
    let effect = effects
        .into_iter()
        .find(|e| matches!(e, Effect::RunFileSearch { .. }))
        .expect("search effect");
    let Effect::RunFileSearch {
        request_id,
        index,
        query,
        max_results,
    } = effect
    else {
        unreachable!()
    };
    let results = index.search(&query, max_results);
    store.dispatch(Action::FileSearchCompleted {
        request_id,
        results,
    });
    request_id
}

const LISTING: [&str; 3] = [
    "/ws/src/components/Button.tsx",
    "/ws/src/components/Input.tsx",
    "/ws/src/utils/Button.ts",
];

#[test]
fn select_file_opens_it_once_and_notifies_host() {
    let mut store = new_store();
    let result = open(&mut store, "/ws/a.rs");
    assert!(result.state_changed);
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::FileSelected { pane: Pane::Primary, path }] if path == Path::new("/ws/a.rs")
    ));

    open(&mut store, "/ws/b.rs");
    open(&mut store, "/ws/a.rs");
    assert_eq!(tab_order(&store), vec!["/ws/a.rs", "/ws/b.rs"]);
    assert_eq!(store.layout().primary_file(), Some(Path::new("/ws/a.rs")));
}

#[test]
fn secondary_select_without_split_is_ignored() {
    let mut store = new_store();
    let result = store.dispatch(Action::SelectFile {
        pane: Pane::Secondary,
        path: p("/ws/a.rs"),
    });
    assert!(!result.state_changed);
    assert!(result.effects.is_empty());
    assert!(store.open_files().is_empty());
}

#[test]
fn split_opens_file_in_secondary_pane() {
    let mut store = new_store();
    open(&mut store, "/ws/a.rs");

    let result = store.dispatch(Action::SplitEditor(p("/ws/b.rs")));
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::SplitEditor { path }] if path == Path::new("/ws/b.rs")
    ));
    assert_eq!(
        store.layout().split_state(),
        &PaneSplit::Split {
            secondary_file: p("/ws/b.rs")
        }
    );
    assert_eq!(store.layout().active_pane(), Pane::Secondary);
    assert_eq!(tab_order(&store), vec!["/ws/a.rs", "/ws/b.rs"]);

    let result = store.dispatch(Action::SelectFile {
        pane: Pane::Secondary,
        path: p("/ws/c.rs"),
    });
    assert!(result.state_changed);
    assert_eq!(store.layout().secondary_file(), Some(Path::new("/ws/c.rs")));
    assert_eq!(tab_order(&store).len(), 3);
}

#[test]
fn close_secondary_pane_reports_primary_file() {
    let mut store = new_store();
    open(&mut store, "/ws/a.rs");
    store.dispatch(Action::SplitEditor(p("/ws/b.rs")));

    let result = store.dispatch(Action::CloseSecondaryPane);
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::SplitEditor { path }] if path == Path::new("/ws/a.rs")
    ));
    assert!(!store.layout().is_split());
    assert_eq!(store.layout().active_pane(), Pane::Primary);

    assert!(!store.dispatch(Action::CloseSecondaryPane).state_changed);
}

#[test]
fn closing_secondary_file_collapses_split() {
    let mut store = new_store();
    open(&mut store, "/ws/a.rs");
    store.dispatch(Action::SplitEditor(p("/ws/b.rs")));

    let result = store.dispatch(Action::CloseFile(p("/ws/b.rs")));
    assert!(result
        .effects
        .iter()
        .any(|e| matches!(e, Effect::FileClosed(path) if path == Path::new("/ws/b.rs"))));
    assert!(!store.layout().is_split());
    assert_eq!(store.layout().primary_file(), Some(Path::new("/ws/a.rs")));
}

#[test]
fn closing_selected_file_selects_last_remaining() {
    let mut store = new_store();
    open(&mut store, "/ws/a.rs");
    open(&mut store, "/ws/b.rs");
    open(&mut store, "/ws/c.rs");
    open(&mut store, "/ws/a.rs");

    let result = store.dispatch(Action::CloseFile(p("/ws/a.rs")));
    assert_eq!(store.layout().primary_file(), Some(Path::new("/ws/c.rs")));
    assert!(result.effects.iter().any(|e| matches!(
        e,
        Effect::FileSelected { pane: Pane::Primary, path } if path == Path::new("/ws/c.rs")
    )));

    store.dispatch(Action::CloseFile(p("/ws/b.rs")));
    store.dispatch(Action::CloseFile(p("/ws/c.rs")));
    assert_eq!(store.layout().primary_file(), None);
    assert!(store.open_files().is_empty());
}

#[test]
fn close_all_does_not_select_a_file_it_closes() {
    let mut store = new_store();
    open(&mut store, "/ws/b.rs");
    open(&mut store, "/ws/c.rs");
    open(&mut store, "/ws/a.rs");

    let result = store.dispatch(Action::TabMenu {
        path: p("/ws/a.rs"),
        action: TabMenuAction::CloseAll,
    });
    assert!(result
        .effects
        .iter()
        .all(|e| matches!(e, Effect::FileClosed(_))));
    assert_eq!(result.effects.len(), 3);
    assert_eq!(store.layout().primary_file(), None);
}

#[test]
fn close_others_selects_survivor_after_batch() {
    let mut store = new_store();
    open(&mut store, "/ws/a.rs");
    open(&mut store, "/ws/b.rs");
    open(&mut store, "/ws/c.rs");

    let result = store.dispatch(Action::TabMenu {
        path: p("/ws/a.rs"),
        action: TabMenuAction::CloseOthers,
    });
    assert!(matches!(
        result.effects.last(),
        Some(Effect::FileSelected { pane: Pane::Primary, path }) if path == Path::new("/ws/a.rs")
    ));
    let selected = result
        .effects
        .iter()
        .filter(|e| matches!(e, Effect::FileSelected { .. }))
        .count();
    assert_eq!(selected, 1);
    assert_eq!(store.layout().primary_file(), Some(Path::new("/ws/a.rs")));
}

#[test]
fn closing_unknown_file_is_noop() {
    let mut store = new_store();
    open(&mut store, "/ws/a.rs");
    let result = store.dispatch(Action::CloseFile(p("/ws/zzz.rs")));
    assert!(!result.state_changed);
    assert!(result.effects.is_empty());
}

#[test]
fn toggle_pin_reorders_and_notifies() {
    let mut store = new_store();
    for path in ["/ws/a.rs", "/ws/b.rs", "/ws/c.rs"] {
        open(&mut store, path);
    }

    let result = store.dispatch(Action::TogglePin(p("/ws/c.rs")));
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::PinToggled { pinned: true, .. }]
    ));
    assert_eq!(tab_order(&store), vec!["/ws/c.rs", "/ws/a.rs", "/ws/b.rs"]);

    // New files still land after the pinned group.
    open(&mut store, "/ws/d.rs");
    assert_eq!(
        tab_order(&store),
        vec!["/ws/c.rs", "/ws/a.rs", "/ws/b.rs", "/ws/d.rs"]
    );

    let result = store.dispatch(Action::TogglePin(p("/ws/unknown.rs")));
    assert!(!result.state_changed);
    assert!(result.effects.is_empty());
}

#[test]
fn tab_menu_close_to_right_uses_display_order() {
    let mut store = new_store();
    for path in ["/ws/a.rs", "/ws/b.rs", "/ws/c.rs", "/ws/d.rs"] {
        open(&mut store, path);
    }
    store.dispatch(Action::TogglePin(p("/ws/d.rs")));

    let result = store.dispatch(Action::TabMenu {
        path: p("/ws/a.rs"),
        action: TabMenuAction::CloseToRight,
    });
    let closed: Vec<&Path> = result
        .effects
        .iter()
        .filter_map(|e| match e {
            Effect::FileClosed(path) => Some(path.as_path()),
            _ => None,
        })
        .collect();
    assert_eq!(closed, vec![Path::new("/ws/b.rs"), Path::new("/ws/c.rs")]);
    assert_eq!(tab_order(&store), vec!["/ws/d.rs", "/ws/a.rs"]);
}

#[test]
fn tab_menu_close_others_and_left() {
    let mut store = new_store();
    for path in ["/ws/a.rs", "/ws/b.rs", "/ws/c.rs"] {
        open(&mut store, path);
    }

    store.dispatch(Action::TabMenu {
        path: p("/ws/b.rs"),
        action: TabMenuAction::CloseToLeft,
    });
    assert_eq!(tab_order(&store), vec!["/ws/b.rs", "/ws/c.rs"]);

    store.dispatch(Action::TabMenu {
        path: p("/ws/c.rs"),
        action: TabMenuAction::CloseOthers,
    });
    assert_eq!(tab_order(&store), vec!["/ws/c.rs"]);
    assert_eq!(store.layout().primary_file(), Some(Path::new("/ws/c.rs")));
}

#[test]
fn tab_menu_close_saved_keeps_modified() {
    let mut store = new_store();
    for path in ["/ws/a.rs", "/ws/b.rs", "/ws/c.rs"] {
        open(&mut store, path);
    }
    let result = store.dispatch(Action::SetModifiedFiles(vec![p("/ws/b.rs")]));
    assert!(result.state_changed);
    assert!(store.open_files()[1].is_modified);

    store.dispatch(Action::TabMenu {
        path: p("/ws/a.rs"),
        action: TabMenuAction::CloseSaved,
    });
    assert_eq!(tab_order(&store), vec!["/ws/b.rs"]);

    store.dispatch(Action::TabMenu {
        path: p("/ws/b.rs"),
        action: TabMenuAction::CloseAll,
    });
    assert!(store.open_files().is_empty());
    assert!(store.state().modified.is_empty());
}

#[test]
fn tab_menu_copy_and_reveal_effects() {
    let mut store = new_store();
    open(&mut store, "/ws/src/a.rs");

    let result = store.dispatch(Action::TabMenu {
        path: p("/ws/src/a.rs"),
        action: TabMenuAction::CopyRelativePath,
    });
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::SetClipboardText(text)] if text == "src/a.rs"
    ));

    let result = store.dispatch(Action::TabMenu {
        path: p("/ws/src/a.rs"),
        action: TabMenuAction::CopyPath,
    });
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::SetClipboardText(text)] if text == "/ws/src/a.rs"
    ));

    let result = store.dispatch(Action::TabMenu {
        path: p("/ws/src/a.rs"),
        action: TabMenuAction::RevealInFileManager,
    });
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::RevealInFileManager(_)]
    ));
}

#[test]
fn create_untitled_opens_numbered_file() {
    let mut store = new_store();
    store.dispatch(Action::CreateUntitled);
    store.dispatch(Action::CreateUntitled);
    let names: Vec<&str> = store.open_files().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Untitled-1", "Untitled-2"]);
    assert_eq!(store.layout().primary_file(), Some(Path::new("untitled-2")));
}

#[test]
fn search_indexes_lazily_then_ranks() {
    let mut store = new_store();
    let now = Instant::now();

    store.dispatch(Action::FileSearchOpen);
    store.dispatch(Action::FileSearchSetQuery {
        query: "Button".to_string(),
        now,
    });
    let early = store.dispatch(Action::Tick {
        now: now + Duration::from_millis(100),
    });
    assert!(early.effects.is_empty());

    let effects = store
        .dispatch(Action::Tick {
            now: now + Duration::from_millis(300),
        })
        .effects;
    assert!(matches!(effects.as_slice(), [Effect::IndexWorkspace { .. }]));
    assert!(store.state().search_dialog.is_loading());
    assert!(store.state().pending_search.is_some());

    let effects = index_with(&mut store, &effects, &LISTING);
    assert_eq!(store.state().file_search.status(), IndexStatus::Indexed);
    complete_search(&mut store, effects);

    let results = store.state().search_dialog.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].relative_path, "src/utils/Button.ts");
    assert_eq!(results[0].match_score, 91);
    assert_eq!(results[1].match_score, 85);
    assert_eq!(store.state().search_dialog.selected_index(), Some(0));
}

#[test]
fn configured_result_cap_never_exceeds_twenty() {
    let mut settings = Settings::default();
    settings.search.max_results = 50;
    let mut store = Store::new(AppState::new(PathBuf::from(ROOT), settings));

    let listing: Vec<String> = (0..40).map(|i| format!("/ws/f{i}.rs")).collect();
    let listing: Vec<&str> = listing.iter().map(String::as_str).collect();
    let effects = search(&mut store, "f", Instant::now());
    let effects = index_with(&mut store, &effects, &listing);
    complete_search(&mut store, effects);

    assert_eq!(store.state().search_dialog.results().len(), 20);
}

#[test]
fn second_search_reuses_index() {
    let mut store = new_store();
    let now = Instant::now();
    let effects = search(&mut store, "button", now);
    let effects = index_with(&mut store, &effects, &LISTING);
    complete_search(&mut store, effects);

    let later = now + Duration::from_secs(1);
    store.dispatch(Action::FileSearchSetQuery {
        query: "input".to_string(),
        now: later,
    });
    let effects = store
        .dispatch(Action::Tick {
            now: later + Duration::from_millis(300),
        })
        .effects;
    assert!(matches!(effects.as_slice(), [Effect::RunFileSearch { .. }]));
}

#[test]
fn stale_search_results_are_discarded() {
    let mut store = new_store();
    let now = Instant::now();
    let effects = search(&mut store, "button", now);
    let effects = index_with(&mut store, &effects, &LISTING);
    complete_search(&mut store, effects);

    let t1 = now + Duration::from_secs(1);
    store.dispatch(Action::FileSearchSetQuery {
        query: "input".to_string(),
        now: t1,
    });
    let first = store
        .dispatch(Action::Tick {
            now: t1 + Duration::from_millis(300),
        })
        .effects;

    let t2 = t1 + Duration::from_secs(1);
    store.dispatch(Action::FileSearchSetQuery {
        query: "utils".to_string(),
        now: t2,
    });
    let second = store
        .dispatch(Action::Tick {
            now: t2 + Duration::from_millis(300),
        })
        .effects;

    // Newer request answers first, the older one arrives late.
    complete_search(&mut store, second);
    complete_search(&mut store, first);

    let results = store.state().search_dialog.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].relative_path, "src/utils/Button.ts");
}

#[test]
fn clearing_query_clears_results_without_searching() {
    let mut store = new_store();
    let now = Instant::now();
    let effects = search(&mut store, "button", now);
    let effects = index_with(&mut store, &effects, &LISTING);
    complete_search(&mut store, effects);

    let later = now + Duration::from_secs(1);
    store.dispatch(Action::FileSearchSetQuery {
        query: "  ".to_string(),
        now: later,
    });
    let result = store.dispatch(Action::Tick {
        now: later + Duration::from_millis(300),
    });
    assert!(result.effects.is_empty());
    assert!(store.state().search_dialog.results().is_empty());
}

#[test]
fn search_failure_shows_generic_error() {
    let mut store = new_store();
    let now = Instant::now();
    let effects = search(&mut store, "button", now);
    let effects = index_with(&mut store, &effects, &LISTING);
    let Some(Effect::RunFileSearch { request_id, .. }) = effects.into_iter().next() else {
        panic!("expected search effect");
    };

    store.dispatch(Action::FileSearchFailed {
        request_id,
        error: "worker died".to_string(),
    });
    let dialog = &store.state().search_dialog;
    assert_eq!(
        dialog.error(),
        Some("An error occurred while searching. Please try again.")
    );
    assert!(dialog.results().is_empty());
}

#[test]
fn index_failure_still_answers_pending_search() {
    let mut store = new_store();
    let now = Instant::now();
    let effects = search(&mut store, "button", now);
    let Some(Effect::IndexWorkspace { generation, .. }) = effects.first().cloned() else {
        panic!("expected index effect");
    };

    let result = store.dispatch(Action::WorkspaceIndexFailed {
        generation,
        error: "permission denied".to_string(),
    });
    assert_eq!(store.state().file_search.status(), IndexStatus::Unindexed);
    assert!(store
        .state()
        .ui
        .last_error
        .as_deref()
        .is_some_and(|e| e.contains("permission denied")));

    complete_search(&mut store, result.effects);
    assert!(store.state().search_dialog.results().is_empty());
    assert!(!store.state().search_dialog.is_loading());
}

#[test]
fn accept_opens_selected_result_and_closes_dialog() {
    let mut store = new_store();
    let now = Instant::now();
    let effects = search(&mut store, "button", now);
    let effects = index_with(&mut store, &effects, &LISTING);
    complete_search(&mut store, effects);

    store.dispatch(Action::FileSearchMoveSelection { delta: 1 });
    let result = store.dispatch(Action::FileSearchAccept);
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::FileSelected { pane: Pane::Primary, path }]
            if path == Path::new("/ws/src/components/Button.tsx")
    ));
    assert!(!store.state().search_dialog.is_visible());
    assert_eq!(
        store.layout().primary_file(),
        Some(Path::new("/ws/src/components/Button.tsx"))
    );
}

#[test]
fn pick_by_index_opens_that_result() {
    let mut store = new_store();
    let now = Instant::now();
    let effects = search(&mut store, "button", now);
    let effects = index_with(&mut store, &effects, &LISTING);
    complete_search(&mut store, effects);

    assert!(!store.dispatch(Action::FileSearchPick { index: 9 }).state_changed);
    store.dispatch(Action::FileSearchPick { index: 0 });
    assert_eq!(
        store.layout().primary_file(),
        Some(Path::new("/ws/src/utils/Button.ts"))
    );
}

#[test]
fn closing_dialog_drops_in_flight_results() {
    let mut store = new_store();
    let now = Instant::now();
    let effects = search(&mut store, "button", now);
    let effects = index_with(&mut store, &effects, &LISTING);

    store.dispatch(Action::FileSearchClose);
    store.dispatch(Action::FileSearchOpen);
    complete_search(&mut store, effects);
    assert!(store.state().search_dialog.results().is_empty());
}

#[test]
fn workspace_root_change_resets_index() {
    let mut store = new_store();
    let now = Instant::now();
    let effects = search(&mut store, "button", now);
    index_with(&mut store, &effects, &LISTING);
    assert!(store.state().file_search.is_indexed());

    assert!(store.dispatch(Action::SetWorkspaceRoot(p("/other"))).state_changed);
    assert_eq!(store.state().workspace_root, p("/other"));
    assert!(store.state().file_search.index().is_empty());
    assert!(!store.dispatch(Action::SetWorkspaceRoot(p("/other"))).state_changed);
}

#[test]
fn fs_ops_become_effects() {
    let mut store = new_store();
    let result = store.dispatch(Action::RenamePath {
        from: p("/ws/a.rs"),
        to: p("/ws/b.rs"),
    });
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::Fs(FsOp::Rename { .. })]
    ));
    let result = store.dispatch(Action::CreateFolder(p("/ws/dir")));
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::Fs(FsOp::CreateDir { .. })]
    ));
}

#[test]
fn completed_delete_closes_tabs_under_path() {
    let mut store = new_store();
    open(&mut store, "/ws/keep.rs");
    open(&mut store, "/ws/src/a.rs");
    store.dispatch(Action::SplitEditor(p("/ws/src/b.rs")));

    let result = store.dispatch(Action::FsOpCompleted(FsOp::Delete { path: p("/ws/src") }));
    let closed = result
        .effects
        .iter()
        .filter(|e| matches!(e, Effect::FileClosed(_)))
        .count();
    assert_eq!(closed, 2);
    assert_eq!(tab_order(&store), vec!["/ws/keep.rs"]);
    assert!(!store.layout().is_split());
    assert_eq!(store.layout().primary_file(), Some(Path::new("/ws/keep.rs")));
}

#[test]
fn completed_rename_rewrites_open_paths() {
    let mut store = new_store();
    open(&mut store, "/ws/old.rs");
    store.dispatch(Action::TogglePin(p("/ws/old.rs")));
    store.dispatch(Action::SetModifiedFiles(vec![p("/ws/old.rs")]));

    store.dispatch(Action::FsOpCompleted(FsOp::Rename {
        from: p("/ws/old.rs"),
        to: p("/ws/new.rs"),
    }));

    let entry = &store.open_files()[0];
    assert_eq!(entry.path, p("/ws/new.rs"));
    assert_eq!(entry.name, "new.rs");
    assert!(entry.is_pinned);
    assert!(entry.is_modified);
    assert_eq!(store.layout().primary_file(), Some(Path::new("/ws/new.rs")));
}

#[test]
fn completed_create_file_opens_it_and_invalidates_index() {
    let mut store = new_store();
    let now = Instant::now();
    let effects = search(&mut store, "button", now);
    index_with(&mut store, &effects, &LISTING);

    let result = store.dispatch(Action::FsOpCompleted(FsOp::CreateFile {
        path: p("/ws/new.rs"),
    }));
    assert!(result
        .effects
        .iter()
        .any(|e| matches!(e, Effect::FileSelected { .. })));
    assert_eq!(tab_order(&store), vec!["/ws/new.rs"]);
    assert_eq!(store.state().file_search.status(), IndexStatus::Unindexed);
}

#[test]
fn fs_op_while_search_waits_restarts_indexing() {
    let mut store = new_store();
    let now = Instant::now();
    let effects = search(&mut store, "button", now);
    let Some(Effect::IndexWorkspace { generation: stale, .. }) = effects.first().cloned() else {
        panic!("expected index effect");
    };

    let result = store.dispatch(Action::FsOpCompleted(FsOp::CreateDir {
        path: p("/ws/dir"),
    }));
    let fresh = index_with(&mut store, &result.effects, &LISTING);
    assert!(matches!(fresh.as_slice(), [Effect::RunFileSearch { .. }]));

    let late = store.dispatch(Action::WorkspaceIndexed {
        generation: stale,
        paths: Vec::new(),
    });
    assert!(!late.state_changed);
}

#[test]
fn failed_fs_op_is_recorded() {
    let mut store = new_store();
    store.dispatch(Action::FsOpFailed {
        op: FsOp::Delete { path: p("/ws/x") },
        error: "denied".to_string(),
    });
    assert_eq!(store.state().ui.last_error.as_deref(), Some("delete: denied"));
}

#[test]
fn zoom_changes_font_size_and_saves() {
    let mut store = new_store();
    let result = store.dispatch(Action::ZoomIn);
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::FontSizeChanged(16), Effect::SaveSettings(_)]
    ));
    assert_eq!(store.state().font_size(), 16);

    store.dispatch(Action::ResetZoom);
    assert_eq!(store.state().font_size(), 14);
    assert!(store.dispatch(Action::ResetZoom).effects.is_empty());

    for _ in 0..10 {
        store.dispatch(Action::ZoomOut);
    }
    assert_eq!(store.state().font_size(), 8);
}

#[test]
fn splitter_drag_persists_width_on_release() {
    let mut store = new_store();
    open(&mut store, "/ws/a.rs");
    store.dispatch(Action::SplitEditor(p("/ws/b.rs")));

    assert!(store.dispatch(Action::SplitterDragStart { x: 500.0 }).state_changed);
    store.dispatch(Action::SplitterDragMove {
        x: 300.0,
        container_width: 1000.0,
    });
    assert!((store.layout().primary_width_percent() - 30.0).abs() < 1e-9);

    let result = store.dispatch(Action::SplitterDragEnd);
    let Some(Effect::SaveSettings(settings)) = result.effects.first() else {
        panic!("expected settings save");
    };
    assert!((settings.layout.primary_width_percent - 30.0).abs() < 1e-9);
    assert!(!store.layout().is_dragging());
}

#[test]
fn secondary_pane_reports_are_ignored() {
    let mut store = new_store();
    let info = EditorInfo {
        errors: 3,
        ..EditorInfo::default()
    };
    let issues = vec![FileIssues {
        path: p("/ws/a.rs"),
        file_name: "a.rs".to_string(),
        issues: Vec::new(),
    }];

    assert!(!store
        .dispatch(Action::EditorInfoChanged {
            pane: Pane::Secondary,
            info: info.clone(),
        })
        .state_changed);
    assert!(!store
        .dispatch(Action::IssuesChanged {
            pane: Pane::Secondary,
            issues: issues.clone(),
        })
        .state_changed);

    assert!(store
        .dispatch(Action::EditorInfoChanged {
            pane: Pane::Primary,
            info,
        })
        .state_changed);
    assert!(store
        .dispatch(Action::IssuesChanged {
            pane: Pane::Primary,
            issues,
        })
        .state_changed);
    assert_eq!(store.state().problems.editor_info().errors, 3);
    assert_eq!(store.state().problems.files().len(), 1);
}
