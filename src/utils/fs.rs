//! 文件系统工具

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// 安全写入文件
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    // 确保父目录存在
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// 创建单层目录，已存在时报错
pub fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// 设置可执行权限 (0755)，非 Unix 平台为空操作
#[cfg(unix)]
pub fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("Failed to set permissions: {}", path.display()))
}

#[cfg(not(unix))]
pub fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}
