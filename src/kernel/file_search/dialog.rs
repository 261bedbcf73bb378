use std::time::{Duration, Instant};

use super::index::SearchResult;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
pub const SEARCH_ERROR_MESSAGE: &str = "An error occurred while searching. Please try again.";

/// State of the "find file" dialog: query text, debounce timer and the
/// result list of the newest request.
#[derive(Debug)]
pub struct FileSearchDialog {
    visible: bool,
    query: String,
    debounce: Duration,
    deadline: Option<Instant>,
    last_request_id: u64,
    in_flight: Option<u64>,
    results: Vec<SearchResult>,
    selected: Option<usize>,
    error: Option<String>,
}

impl Default for FileSearchDialog {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl FileSearchDialog {
    pub fn new(debounce: Duration) -> Self {
        Self {
            visible: false,
            query: String::new(),
            debounce,
            deadline: None,
            last_request_id: 0,
            in_flight: None,
            results: Vec::new(),
            selected: None,
            error: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.results.get(self.selected?)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn set_debounce(&mut self, debounce: Duration) {
        self.debounce = debounce;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn open(&mut self) -> bool {
        if self.visible {
            return false;
        }
        self.visible = true;
        true
    }

    /// Hides the dialog and forgets everything about the last query. Responses
    /// still in flight are dropped when they arrive.
    pub fn close(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        self.query.clear();
        self.deadline = None;
        self.in_flight = None;
        self.results.clear();
        self.selected = None;
        self.error = None;
        true
    }

    pub fn set_query(&mut self, query: String, now: Instant) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query;
        self.arm(now);
        true
    }

    pub fn append(&mut self, ch: char, now: Instant) -> bool {
        self.query.push(ch);
        self.arm(now);
        true
    }

    pub fn backspace(&mut self, now: Instant) -> bool {
        if self.query.pop().is_none() {
            return false;
        }
        self.arm(now);
        true
    }

    fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.debounce);
    }

    /// Returns the query to run once the debounce delay elapsed since the last
    /// edit. Each edit re-arms the timer, so only the last one fires.
    pub fn take_due_query(&mut self, now: Instant) -> Option<String> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        Some(self.query.clone())
    }

    pub fn clear_results(&mut self) -> bool {
        let changed = !self.results.is_empty() || self.in_flight.is_some() || self.error.is_some();
        self.results.clear();
        self.selected = None;
        self.in_flight = None;
        self.error = None;
        changed
    }

    /// Issues the id of a new request. Any older request becomes stale.
    pub fn begin_request(&mut self) -> u64 {
        self.last_request_id = self.last_request_id.wrapping_add(1);
        self.in_flight = Some(self.last_request_id);
        self.error = None;
        self.last_request_id
    }

    pub fn is_current(&self, request_id: u64) -> bool {
        self.in_flight == Some(request_id)
    }

    pub fn complete(&mut self, request_id: u64, results: Vec<SearchResult>) -> bool {
        if !self.is_current(request_id) {
            tracing::debug!(request_id, "discarding stale file search results");
            return false;
        }
        self.in_flight = None;
        self.selected = if results.is_empty() { None } else { Some(0) };
        self.results = results;
        true
    }

    pub fn fail(&mut self, request_id: u64, error: &str) -> bool {
        if !self.is_current(request_id) {
            return false;
        }
        tracing::warn!(request_id, error, "file search failed");
        self.in_flight = None;
        self.results.clear();
        self.selected = None;
        self.error = Some(SEARCH_ERROR_MESSAGE.to_string());
        true
    }

    pub fn move_selection(&mut self, delta: isize) -> bool {
        let len = self.results.len();
        if len == 0 || delta == 0 {
            return false;
        }

        let prev = self.selected;
        let current = prev.unwrap_or(0);
        let next = if delta > 0 {
            (current + 1) % len
        } else if current == 0 {
            len - 1
        } else {
            current - 1
        };
        self.selected = Some(next);
        self.selected != prev
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.results.len() || self.selected == Some(index) {
            return false;
        }
        self.selected = Some(index);
        true
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/file_search/dialog.rs"]
mod tests;
