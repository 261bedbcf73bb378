use super::message::AppMessage;
use crate::kernel::effect::FsOp;
use crate::kernel::file_search::FileIndex;
use crate::kernel::services::adapters::settings::{save_settings, write_settings_to};
use crate::kernel::services::ports::{FileProvider, Settings};
use crate::kernel::Effect;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    tx: Sender<AppMessage>,
    provider: Arc<dyn FileProvider>,
    settings_path: Option<PathBuf>,
}

impl AsyncRuntime {
    pub fn new(tx: Sender<AppMessage>, provider: Arc<dyn FileProvider>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self {
            runtime,
            tx,
            provider,
            settings_path: None,
        })
    }

    /// Writes settings to `path` instead of the per-user settings file.
    pub fn with_settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }

    /// Starts the IO effects this runtime owns. Anything else is a host
    /// notification and is handed back.
    pub fn handle(&self, effect: Effect) -> Option<Effect> {
        match effect {
            Effect::IndexWorkspace { root, generation } => {
                self.list_files(root, generation);
                None
            }
            Effect::RunFileSearch {
                request_id,
                index,
                query,
                max_results,
            } => {
                self.search_files(request_id, index, query, max_results);
                None
            }
            Effect::Fs(op) => {
                self.run_fs_op(op);
                None
            }
            Effect::SaveSettings(settings) => {
                self.save_settings(settings);
                None
            }
            other => Some(other),
        }
    }

    pub fn list_files(&self, root: PathBuf, generation: u64) {
        let tx = self.tx.clone();
        let provider = Arc::clone(&self.provider);
        self.runtime.spawn(async move {
            let result =
                tokio::task::spawn_blocking(move || provider.list_all_files(&root)).await;
            let msg = match result {
                Ok(Ok(paths)) => AppMessage::FilesListed { generation, paths },
                Ok(Err(e)) => AppMessage::FileListFailed {
                    generation,
                    error: e.to_string(),
                },
                Err(e) => AppMessage::FileListFailed {
                    generation,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(msg);
        });
    }

    pub fn search_files(
        &self,
        request_id: u64,
        index: Arc<FileIndex>,
        query: String,
        max_results: usize,
    ) {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result =
                tokio::task::spawn_blocking(move || index.search(&query, max_results)).await;
            let msg = match result {
                Ok(results) => AppMessage::FileSearchFinished {
                    request_id,
                    results,
                },
                Err(e) => AppMessage::FileSearchFailed {
                    request_id,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(msg);
        });
    }

    pub fn run_fs_op(&self, op: FsOp) {
        let tx = self.tx.clone();
        let provider = Arc::clone(&self.provider);
        self.runtime.spawn(async move {
            let work = op.clone();
            let result = tokio::task::spawn_blocking(move || match &work {
                FsOp::CreateFile { path } => provider.create_file(path),
                FsOp::CreateDir { path } => provider.create_dir(path),
                FsOp::Delete { path } => provider.delete_path(path),
                FsOp::Rename { from, to } => provider.rename(from, to),
            })
            .await;
            let msg = match result {
                Ok(Ok(())) => AppMessage::FsOpFinished { op },
                Ok(Err(e)) => AppMessage::FsOpFailed {
                    op,
                    error: e.to_string(),
                },
                Err(e) => AppMessage::FsOpFailed {
                    op,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(msg);
        });
    }

    pub fn save_settings(&self, settings: Settings) {
        let tx = self.tx.clone();
        let path = self.settings_path.clone();
        self.runtime.spawn(async move {
            let result = tokio::task::spawn_blocking(move || match path {
                Some(path) => write_settings_to(&path, &settings),
                None => save_settings(&settings),
            })
            .await;
            let error = match result {
                Ok(Ok(())) => return,
                Ok(Err(e)) => e.to_string(),
                Err(e) => e.to_string(),
            };
            let _ = tx.send(AppMessage::SettingsSaveFailed { error });
        });
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/runtime/async_runtime.rs"]
mod tests;
