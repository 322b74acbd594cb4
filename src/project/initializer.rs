//! 项目初始化
//!
//! 线性流程：校验目标目录 -> 渲染模板 -> 创建目录 -> 写入文件 -> git 初始化
//!
//! 中途失败不回滚，已创建的目录树保留在磁盘上

use anyhow::Result;
use colored::*;
use std::path::Path;

use super::report::{collect_manifest, GenerationReport};
use super::request::GenerationRequest;
use crate::error::ScaffoldError;
use crate::templates::{render_project, ScriptFlavor};
use crate::toolchain::detect_compilers;
use crate::utils::{create_dir, init_repository, is_git_repo, set_executable, write_file};

/// 项目根目录下固定创建的子目录
pub const PROJECT_DIRS: [&str; 7] = ["src", "include", "tests", "scripts", "libs", "cmake", "external"];

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// 工作流脚本风格
    pub flavor: ScriptFlavor,
    /// 是否初始化 git 仓库并提交
    pub init_git: bool,
    /// 是否打印进度
    pub verbose: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            flavor: ScriptFlavor::host(),
            init_git: true,
            verbose: false,
        }
    }
}

/// 在 `parent` 下生成项目
pub fn generate_project(
    parent: &Path,
    request: &GenerationRequest,
    options: &GenerateOptions,
) -> Result<GenerationReport> {
    let root = parent.join(request.name());

    if root.exists() {
        return Err(ScaffoldError::DestinationExists(root).into());
    }

    // 先完成全部渲染，模板缺失时不会留下任何目录
    let files = render_project(request, options.flavor)?;

    if options.verbose {
        println!(
            "{}",
            format!(
                "🚀 Creating {} project '{}'",
                request.kind().as_str(),
                request.name()
            )
            .cyan()
            .bold()
        );
    }

    create_dir(&root)?;
    for dir in PROJECT_DIRS {
        create_dir(&root.join(dir))?;
    }
    if options.verbose {
        println!("   {} {}", "✓".green(), "Directory structure".yellow());
    }

    for file in &files {
        let path = root.join(&file.path);
        write_file(&path, &file.content)?;
        if file.executable {
            set_executable(&path)?;
        }
        if options.verbose {
            println!("   {} {}", "✓".green(), file.path.display());
        }
    }

    if options.init_git {
        init_repository(&root, &request.commit_message())?;
        if options.verbose {
            println!("   {} {}", "✓".green(), "Git repository initialized".yellow());
        }
    }

    Ok(GenerationReport {
        name: request.name().to_string(),
        kind: request.kind(),
        flavor: options.flavor,
        files: collect_manifest(&root)?,
        git_initialized: options.init_git && is_git_repo(Some(&root)),
        compilers: detect_compilers(),
        root,
    })
}
