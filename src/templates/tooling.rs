//! 工具链配置：.clang-format / .clang-tidy / .gitignore / .gitattributes

use anyhow::Result;

use super::files::{RenderedFile, TemplateAssets};

/// (模板路径, 生成文件名)
const TOOLING_FILES: [(&str, &str); 4] = [
    ("tooling/clang-format", ".clang-format"),
    ("tooling/clang-tidy", ".clang-tidy"),
    ("tooling/gitignore", ".gitignore"),
    ("tooling/gitattributes", ".gitattributes"),
];

/// 固定内容，不做占位符替换
pub fn tooling_files() -> Result<Vec<RenderedFile>> {
    TOOLING_FILES
        .iter()
        .map(|(template, target)| -> Result<RenderedFile> {
            Ok(RenderedFile::new(*target, TemplateAssets::get_file(template)?))
        })
        .collect()
}
