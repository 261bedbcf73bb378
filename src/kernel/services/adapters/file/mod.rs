//! 文件服务模块
//!
//! 提供文件系统抽象的本地实现

pub mod local;

pub use local::LocalFileProvider;
