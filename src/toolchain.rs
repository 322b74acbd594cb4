//! 编译器探测
//!
//! 与生成脚本中的编译器选择保持一致：gcc -> g++，clang -> clang++，msvc -> cl

use serde::Serialize;
use std::path::PathBuf;

/// (脚本中的编译器选项, 可执行文件名)
pub const KNOWN_COMPILERS: [(&str, &str); 3] = [("gcc", "g++"), ("clang", "clang++"), ("msvc", "cl")];

/// 生成脚本的默认编译器选项
pub const DEFAULT_COMPILER: &str = "gcc";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedCompiler {
    pub id: String,
    pub executable: String,
    pub path: PathBuf,
}

/// 编译器选项对应的可执行文件名
pub fn compiler_executable(id: &str) -> Option<&'static str> {
    KNOWN_COMPILERS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, exe)| *exe)
}

/// 在 PATH 中查找单个编译器
pub fn find_compiler(id: &str) -> Option<DetectedCompiler> {
    let executable = compiler_executable(id)?;
    let path = which::which(executable).ok()?;

    Some(DetectedCompiler {
        id: id.to_string(),
        executable: executable.to_string(),
        path,
    })
}

/// 探测 PATH 中所有已知编译器
pub fn detect_compilers() -> Vec<DetectedCompiler> {
    KNOWN_COMPILERS
        .iter()
        .filter_map(|(id, _)| find_compiler(id))
        .collect()
}
