use std::path::PathBuf;
use std::sync::Arc;

use crate::kernel::file_search::FileIndex;
use crate::kernel::layout::Pane;
use crate::kernel::services::ports::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsOp {
    CreateFile { path: PathBuf },
    CreateDir { path: PathBuf },
    Delete { path: PathBuf },
    Rename { from: PathBuf, to: PathBuf },
}

impl FsOp {
    pub fn name(&self) -> &'static str {
        match self {
            FsOp::CreateFile { .. } => "create_file",
            FsOp::CreateDir { .. } => "create_dir",
            FsOp::Delete { .. } => "delete",
            FsOp::Rename { .. } => "rename",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Effect {
    IndexWorkspace {
        root: PathBuf,
        generation: u64,
    },
    RunFileSearch {
        request_id: u64,
        index: Arc<FileIndex>,
        query: String,
        max_results: usize,
    },
    Fs(FsOp),
    SaveSettings(Settings),
    // Host notifications.
    FileSelected {
        pane: Pane,
        path: PathBuf,
    },
    SplitEditor {
        path: PathBuf,
    },
    PinToggled {
        path: PathBuf,
        pinned: bool,
    },
    FileClosed(PathBuf),
    SetClipboardText(String),
    RevealInFileManager(PathBuf),
    FontSizeChanged(u16),
}
