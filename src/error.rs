//! 脚手架错误类型
//!
//! 调用方需要区分处理的失败；其余错误统一走 anyhow

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// 项目名称不可用作目录名 / CMake 目标名
    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// 同时指定了 --app 和 --lib
    #[error("A project cannot be both an application and a library")]
    ConflictingKinds,

    /// 目标目录已存在
    #[error("Destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),
}
