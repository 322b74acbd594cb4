//! Git 操作工具

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// 执行 git 命令并返回输出
pub fn git_command(args: &[&str], cwd: Option<&Path>) -> Result<String> {
    let mut cmd = Command::new("git");
    cmd.args(args);

    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd
        .output()
        .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

    if !output.status.success() {
        anyhow::bail!(
            "Git command failed (git {}): {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// 初始化仓库、暂存全部文件并创建初始提交
///
/// 任一步失败即返回 git 的错误输出，不做重试或回滚
pub fn init_repository(dir: &Path, message: &str) -> Result<()> {
    git_command(&["init"], Some(dir))?;
    git_command(&["add", "-A"], Some(dir))?;
    git_command(&["commit", "-m", message], Some(dir))?;
    Ok(())
}

/// 检查目录是否在 git 仓库中
pub fn is_git_repo(cwd: Option<&Path>) -> bool {
    git_command(&["rev-parse", "--git-dir"], cwd).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// 测试中提供提交身份，不依赖宿主机的 git 配置
    fn with_identity(cmd: &mut Command) -> &mut Command {
        cmd.env("GIT_AUTHOR_NAME", "cppnew")
            .env("GIT_AUTHOR_EMAIL", "cppnew@example.com")
            .env("GIT_COMMITTER_NAME", "cppnew")
            .env("GIT_COMMITTER_EMAIL", "cppnew@example.com")
    }

    #[test]
    fn test_is_git_repo_true_and_false() {
        let non_repo = TempDir::new().unwrap();
        assert!(!is_git_repo(Some(non_repo.path())));

        let repo = TempDir::new().unwrap();
        git_command(&["init"], Some(repo.path())).unwrap();
        assert!(is_git_repo(Some(repo.path())));
    }

    #[test]
    fn test_git_command_failure_reports_stderr() {
        let non_repo = TempDir::new().unwrap();
        let err = git_command(&["log"], Some(non_repo.path())).unwrap_err();
        assert!(err.to_string().contains("git log"));
    }

    #[test]
    fn test_commit_after_staging() {
        let repo = TempDir::new().unwrap();
        std::fs::write(repo.path().join("README.md"), "hello\n").unwrap();

        git_command(&["init"], Some(repo.path())).unwrap();
        git_command(&["add", "-A"], Some(repo.path())).unwrap();
        let status = with_identity(&mut Command::new("git"))
            .args(["commit", "-m", "Initial commit: demo (application project)"])
            .current_dir(repo.path())
            .status()
            .unwrap();
        assert!(status.success());

        let subject = git_command(&["log", "-1", "--format=%s"], Some(repo.path())).unwrap();
        assert_eq!(subject, "Initial commit: demo (application project)");
    }
}
