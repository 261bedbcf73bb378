//! quickpane - headless editor workbench core
//!
//! 模块结构：
//! - kernel: state/action/effect store (find-file index, tabs, split panes)
//! - kernel::services: ports and adapters (file system, settings, tokio runtime)

pub mod kernel;
