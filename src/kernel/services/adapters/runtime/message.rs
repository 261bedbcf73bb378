use crate::kernel::effect::FsOp;
use crate::kernel::file_search::SearchResult;
use crate::kernel::Action;

#[derive(Debug)]
pub enum AppMessage {
    FilesListed {
        generation: u64,
        paths: Vec<String>,
    },
    FileListFailed {
        generation: u64,
        error: String,
    },
    FileSearchFinished {
        request_id: u64,
        results: Vec<SearchResult>,
    },
    FileSearchFailed {
        request_id: u64,
        error: String,
    },
    FsOpFinished {
        op: FsOp,
    },
    FsOpFailed {
        op: FsOp,
        error: String,
    },
    SettingsSaveFailed {
        error: String,
    },
}

impl AppMessage {
    /// The action the host dispatches for this message, if any.
    pub fn into_action(self) -> Option<Action> {
        let action = match self {
            AppMessage::FilesListed { generation, paths } => {
                Action::WorkspaceIndexed { generation, paths }
            }
            AppMessage::FileListFailed { generation, error } => {
                Action::WorkspaceIndexFailed { generation, error }
            }
            AppMessage::FileSearchFinished {
                request_id,
                results,
            } => Action::FileSearchCompleted {
                request_id,
                results,
            },
            AppMessage::FileSearchFailed { request_id, error } => {
                Action::FileSearchFailed { request_id, error }
            }
            AppMessage::FsOpFinished { op } => Action::FsOpCompleted(op),
            AppMessage::FsOpFailed { op, error } => Action::FsOpFailed { op, error },
            AppMessage::SettingsSaveFailed { error } => {
                tracing::warn!(error = %error, "settings save failed");
                return None;
            }
        };
        Some(action)
    }
}
