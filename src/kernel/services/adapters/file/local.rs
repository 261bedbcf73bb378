//! 本地文件系统 Provider
//!
//! 实现 FileProvider trait，操作本地文件系统。目录遍历使用 ignore crate，
//! 跳过隐藏文件和 .gitignore 中的路径。

use crate::kernel::services::ports::file::{FileError, FileProvider, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::Path;

pub struct LocalFileProvider;

impl LocalFileProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileProvider for LocalFileProvider {
    fn list_all_files(&self, root: &Path) -> Result<Vec<String>> {
        if !root.exists() {
            return Err(FileError::NotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(FileError::NotADirectory(root.to_path_buf()));
        }

        let walker = WalkBuilder::new(root)
            .hidden(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }

            let mut path = entry.path().to_string_lossy().to_string();
            if entry.file_type().is_some_and(|t| t.is_dir()) {
                path.push('/');
            }
            files.push(path);
        }

        Ok(files)
    }

    fn create_file(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(FileError::AlreadyExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::File::create(path)?;
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(FileError::AlreadyExists(path.to_path_buf()));
        }
        Ok(fs::create_dir_all(path)?)
    }

    fn delete_path(&self, path: &Path) -> Result<()> {
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FileError::NotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };
        if meta.is_dir() {
            Ok(fs::remove_dir_all(path)?)
        } else {
            Ok(fs::remove_file(path)?)
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        if !from.exists() {
            return Err(FileError::NotFound(from.to_path_buf()));
        }
        if to.exists() {
            return Err(FileError::AlreadyExists(to.to_path_buf()));
        }
        Ok(fs::rename(from, to)?)
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/local.rs"]
mod tests;
