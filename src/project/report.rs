//! 生成结果报告

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::request::ProjectKind;
use crate::templates::ScriptFlavor;
use crate::toolchain::DetectedCompiler;

#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub name: String,
    pub kind: ProjectKind,
    pub flavor: ScriptFlavor,
    pub root: PathBuf,
    /// 生成的文件（相对路径，`/` 分隔，已排序，不含 .git）
    pub files: Vec<String>,
    pub git_initialized: bool,
    pub compilers: Vec<DetectedCompiler>,
}

/// 收集目录下的文件清单
pub fn collect_manifest(root: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git")
    {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(root)?;
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        files.push(parts.join("/"));
    }

    files.sort();
    Ok(files)
}
