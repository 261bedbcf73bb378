use rustc_hash::FxHashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
    Info,
}

impl IssueSeverity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueRange {
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: IssueSeverity,
    pub message: String,
    pub range: IssueRange,
    pub source: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIssues {
    pub path: PathBuf,
    pub file_name: String,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorInfo {
    pub line: u32,
    pub column: u32,
    pub total_chars: usize,
}

/// Status-bar summary reported by the editor hosted in a pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorInfo {
    pub errors: usize,
    pub warnings: usize,
    pub language: String,
    pub encoding: String,
    pub cursor: CursorInfo,
}

impl Default for EditorInfo {
    fn default() -> Self {
        Self {
            errors: 0,
            warnings: 0,
            language: "plaintext".to_string(),
            encoding: "UTF-8".to_string(),
            cursor: CursorInfo {
                line: 1,
                column: 1,
                total_chars: 0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IssueCounts {
    pub errors: usize,
    pub warnings: usize,
}

#[derive(Debug, Default)]
pub struct ProblemsState {
    editor_info: EditorInfo,
    files: Vec<FileIssues>,
}

impl ProblemsState {
    pub fn editor_info(&self) -> &EditorInfo {
        &self.editor_info
    }

    pub fn files(&self) -> &[FileIssues] {
        &self.files
    }

    pub fn set_editor_info(&mut self, info: EditorInfo) -> bool {
        if self.editor_info == info {
            return false;
        }
        self.editor_info = info;
        true
    }

    pub fn set_issues(&mut self, files: Vec<FileIssues>) -> bool {
        if self.files == files {
            return false;
        }
        self.files = files;
        true
    }

    /// Error/warning totals per file; files without either are left out.
    pub fn issue_counts(&self) -> FxHashMap<PathBuf, IssueCounts> {
        let mut counts = FxHashMap::default();
        for file in &self.files {
            let mut c = IssueCounts::default();
            for issue in &file.issues {
                match issue.severity {
                    IssueSeverity::Error => c.errors += 1,
                    IssueSeverity::Warning => c.warnings += 1,
                    IssueSeverity::Info => {}
                }
            }
            if c.errors > 0 || c.warnings > 0 {
                counts.insert(file.path.clone(), c);
            }
        }
        counts
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/problems.rs"]
mod tests;
