// cppnew - C++/CMake Project Scaffolding
//
// 生成目录结构、源码桩、CMake 配置、工作流脚本与工具配置，并初始化 git 仓库

pub mod error;
pub mod project;
pub mod templates;
pub mod toolchain;
pub mod utils;

// 重新导出常用类型
pub use error::ScaffoldError;
pub use project::{generate_project, GenerateOptions, GenerationReport, GenerationRequest, ProjectKind};
pub use templates::ScriptFlavor;
