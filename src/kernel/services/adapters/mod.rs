//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod file;
pub mod paths;
pub mod runtime;
pub mod settings;

pub use file::LocalFileProvider;
pub use paths::{ensure_log_dir, get_log_dir};
pub use runtime::{AppMessage, AsyncRuntime};
pub use settings::{ensure_settings_file, get_settings_path, load_settings, save_settings};
