//! Find-file: workspace index, ranking and the dialog driving it.

mod dialog;
mod index;

pub use dialog::{FileSearchDialog, DEFAULT_DEBOUNCE, SEARCH_ERROR_MESSAGE};
pub use index::{
    normalize_path, query_parts, score_relative_path, FileIndex, FileSearch, IndexStatus,
    IndexedFile, SearchResult, DEFAULT_MAX_RESULTS,
};

/// A fired query waiting for the index to finish building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub request_id: u64,
    pub query: String,
}
