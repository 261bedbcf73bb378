use std::path::PathBuf;
use std::time::Instant;

use crate::kernel::effect::FsOp;
use crate::kernel::file_search::SearchResult;
use crate::kernel::layout::Pane;
use crate::kernel::problems::{EditorInfo, FileIssues};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabMenuAction {
    Close,
    CloseOthers,
    CloseToRight,
    CloseToLeft,
    CloseAll,
    CloseSaved,
    CopyPath,
    CopyRelativePath,
    RevealInFileManager,
    TogglePin,
}

#[derive(Debug, Clone)]
pub enum Action {
    Tick {
        now: Instant,
    },
    SetWorkspaceRoot(PathBuf),
    IndexWorkspace,
    WorkspaceIndexed {
        generation: u64,
        paths: Vec<String>,
    },
    WorkspaceIndexFailed {
        generation: u64,
        error: String,
    },
    FileSearchOpen,
    FileSearchClose,
    FileSearchSetQuery {
        query: String,
        now: Instant,
    },
    FileSearchAppend {
        ch: char,
        now: Instant,
    },
    FileSearchBackspace {
        now: Instant,
    },
    FileSearchMoveSelection {
        delta: isize,
    },
    FileSearchAccept,
    FileSearchPick {
        index: usize,
    },
    FileSearchCompleted {
        request_id: u64,
        results: Vec<SearchResult>,
    },
    FileSearchFailed {
        request_id: u64,
        error: String,
    },
    SelectFile {
        pane: Pane,
        path: PathBuf,
    },
    CloseFile(PathBuf),
    CreateUntitled,
    SetModifiedFiles(Vec<PathBuf>),
    TogglePin(PathBuf),
    TabMenu {
        path: PathBuf,
        action: TabMenuAction,
    },
    SplitEditor(PathBuf),
    CloseSecondaryPane,
    FocusPane(Pane),
    SplitterDragStart {
        x: f64,
    },
    SplitterDragMove {
        x: f64,
        container_width: f64,
    },
    SplitterDragEnd,
    EditorInfoChanged {
        pane: Pane,
        info: EditorInfo,
    },
    IssuesChanged {
        pane: Pane,
        issues: Vec<FileIssues>,
    },
    ZoomIn,
    ZoomOut,
    ResetZoom,
    CreateFile(PathBuf),
    CreateFolder(PathBuf),
    DeletePath(PathBuf),
    RenamePath {
        from: PathBuf,
        to: PathBuf,
    },
    FsOpCompleted(FsOp),
    FsOpFailed {
        op: FsOp,
        error: String,
    },
}
