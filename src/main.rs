use anyhow::Result;
use clap::Parser;
use colored::*;
use std::env;

use cppnew::{
    generate_project, toolchain::DEFAULT_COMPILER, GenerateOptions, GenerationReport,
    GenerationRequest, ProjectKind, ScriptFlavor,
};

/// C++ project scaffolding CLI
///
/// 生成 CMake 驱动的 C++ 应用或库项目
#[derive(Parser)]
#[command(name = "cppnew")]
#[command(author, version = env!("APP_VERSION"), about)]
#[command(
    long_about = "Scaffold a C++ project driven by CMake.\n\
                  Creates the directory layout, starter sources, CMakeLists.txt, workflow scripts,\n\
                  clang-format/clang-tidy configuration and an initial git commit."
)]
struct Cli {
    /// 项目名称（同时作为目录名与 CMake 目标名）
    name: String,

    /// 生成应用项目（默认）
    #[arg(long, conflicts_with = "lib")]
    app: bool,

    /// 生成库项目
    #[arg(long)]
    lib: bool,

    /// 工作流脚本风格（默认跟随当前系统）
    #[arg(long, value_enum)]
    scripts: Option<ScriptFlavor>,

    /// 跳过 git 初始化
    #[arg(long)]
    no_git: bool,

    /// 以 JSON 输出生成报告
    #[arg(long)]
    json: bool,

    /// 不打印进度
    #[arg(short, long)]
    quiet: bool,
}

// ═══════════════════════════════════════════════════════════════════
// 结果展示
// ═══════════════════════════════════════════════════════════════════

fn print_summary(report: &GenerationReport) {
    println!();
    println!(
        "{}",
        format!("✅ Created {} project '{}'", report.kind.as_str(), report.name)
            .green()
            .bold()
    );
    println!("   📁 Location: {}", report.root.display().to_string().cyan());
    println!("   📄 Files: {}", report.files.len());

    println!();
    if report.compilers.is_empty() {
        println!("{}", "⚠️  No C++ compiler found on PATH (g++, clang++, cl)".yellow());
    } else {
        println!("🔧 Detected compilers:");
        for compiler in &report.compilers {
            println!(
                "   {} {} ({})",
                "•".green(),
                compiler.executable.yellow(),
                compiler.path.display()
            );
        }
        if !report.compilers.iter().any(|c| c.id == DEFAULT_COMPILER) {
            println!(
                "{}",
                format!(
                    "⚠️  Scripts default to '{}'; pass --compiler to choose another",
                    DEFAULT_COMPILER
                )
                .yellow()
            );
        }
    }

    let (build, test) = match report.flavor {
        ScriptFlavor::Posix => ("scripts/build", "scripts/test"),
        ScriptFlavor::PowerShell => ("scripts\\build.cmd", "scripts\\test.cmd"),
    };

    println!();
    println!("💡 Next steps:");
    println!("   cd {}", report.name.cyan());
    println!("   {}", build.cyan());
    println!("   {}", test.cyan());
}

// ═══════════════════════════════════════════════════════════════════
// Main
// ═══════════════════════════════════════════════════════════════════

fn run(cli: Cli) -> Result<()> {
    let kind = ProjectKind::from_flags(cli.app, cli.lib)?;
    let request = GenerationRequest::new(cli.name, kind)?;

    let options = GenerateOptions {
        flavor: cli.scripts.unwrap_or_else(ScriptFlavor::host),
        init_git: !cli.no_git,
        verbose: !cli.quiet && !cli.json,
    };

    let cwd = env::current_dir()?;
    let report = generate_project(&cwd, &request, &options)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !cli.quiet {
        print_summary(&report);
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "❌".red(), e);
        std::process::exit(1);
    }
}
