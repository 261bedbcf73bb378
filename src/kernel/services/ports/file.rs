//! 工作区文件系统端口
//!
//! The kernel never touches the disk itself; adapters implement this trait.

use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug)]
pub enum FileError {
    Io(io::Error),
    NotFound(PathBuf),
    AlreadyExists(PathBuf),
    NotADirectory(PathBuf),
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::Io(e) => write!(f, "IO error: {}", e),
            FileError::NotFound(p) => write!(f, "Not found: {}", p.display()),
            FileError::AlreadyExists(p) => write!(f, "Already exists: {}", p.display()),
            FileError::NotADirectory(p) => write!(f, "Not a directory: {}", p.display()),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FileError {
    fn from(e: io::Error) -> Self {
        FileError::Io(e)
    }
}

pub trait FileProvider: Send + Sync {
    /// Flat recursive listing of `root`. Directories end with `/`.
    fn list_all_files(&self, root: &Path) -> Result<Vec<String>>;

    fn create_file(&self, path: &Path) -> Result<()>;

    fn create_dir(&self, path: &Path) -> Result<()>;

    /// Removes a file, or a directory with everything in it.
    fn delete_path(&self, path: &Path) -> Result<()>;

    fn rename(&self, from: &Path, to: &Path) -> Result<()>;
}
