//! Headless workbench core (state/action/effect).

pub mod action;
pub mod effect;
pub mod file_search;
pub mod layout;
pub mod problems;
pub mod services;
pub mod state;
pub mod store;
pub mod tabs;

pub use action::{Action, TabMenuAction};
pub use effect::{Effect, FsOp};
pub use file_search::{FileIndex, FileSearch, FileSearchDialog, SearchResult};
pub use layout::{Pane, PaneLayout, PaneSplit};
pub use problems::{EditorInfo, FileIssues, Issue, IssueSeverity, ProblemsState};
pub use state::{AppState, UiState};
pub use store::{DispatchResult, Store};
pub use tabs::{CloseTarget, OpenFileEntry, OpenedFile, OpenedFiles, TabStrip};
