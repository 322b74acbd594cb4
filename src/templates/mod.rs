//! 嵌入模板
//!
//! 使用 rust-embed 将 C++ 源码桩、CMake 配置、工作流脚本与工具配置编译进二进制

pub mod cmake;
pub mod files;
pub mod scripts;
pub mod sources;
pub mod tooling;

pub use files::{RenderedFile, TemplateAssets, TemplateContext};
pub use scripts::{ScriptFlavor, WORKFLOW_SCRIPTS};

use anyhow::Result;

use crate::project::GenerationRequest;

/// 渲染一个项目的全部文件（不触碰磁盘）
pub fn render_project(request: &GenerationRequest, flavor: ScriptFlavor) -> Result<Vec<RenderedFile>> {
    let ctx = TemplateContext::for_request(request);

    let mut files = sources::source_files(request, &ctx)?;
    files.push(cmake::cmake_lists(request.kind(), &ctx)?);
    files.extend(scripts::workflow_scripts(flavor)?);
    files.extend(tooling::tooling_files()?);

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProjectKind;

    #[test]
    fn test_render_project_file_counts() {
        let app = GenerationRequest::new("Widgets", ProjectKind::Application).unwrap();
        // 2 源码 + CMakeLists + 10 脚本 + 4 配置
        assert_eq!(render_project(&app, ScriptFlavor::Posix).unwrap().len(), 17);

        let lib = GenerationRequest::new("Core", ProjectKind::Library).unwrap();
        assert_eq!(render_project(&lib, ScriptFlavor::PowerShell).unwrap().len(), 18);
    }

    #[test]
    fn test_render_project_leaves_no_placeholders() {
        let lib = GenerationRequest::new("my-lib", ProjectKind::Library).unwrap();
        for file in render_project(&lib, ScriptFlavor::Posix).unwrap() {
            assert!(
                !file.content.contains("{{"),
                "unrendered placeholder in {}",
                file.path.display()
            );
        }
    }
}
