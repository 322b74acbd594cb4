//! 模板文件嵌入与渲染
//!
//! 模板中的占位符形如 `{{PROJECT_NAME}}`，渲染时按上下文逐个替换

use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::project::GenerationRequest;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{([A-Z_]+)\}\}").unwrap();
}

/// 模板文件资源（编译时嵌入）
#[derive(RustEmbed)]
#[folder = "embedded/templates/"]
pub struct TemplateAssets;

impl TemplateAssets {
    /// 获取指定模板文件
    pub fn get_file(filename: &str) -> Result<String> {
        let file = Self::get(filename)
            .ok_or_else(|| anyhow!("Template '{}' not found", filename))?;

        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| anyhow!("Failed to decode template '{}': {}", filename, e))?;

        Ok(content.to_string())
    }
}

/// 占位符取值表
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    vars: HashMap<&'static str, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由生成请求派生项目名、命名空间与 include guard
    pub fn for_request(request: &GenerationRequest) -> Self {
        Self::new()
            .with("PROJECT_NAME", request.name())
            .with("NAMESPACE", request.namespace())
            .with("INCLUDE_GUARD", request.include_guard())
    }

    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.vars.insert(key, value.into());
        self
    }

    /// 替换已知占位符，未知占位符原样保留
    pub fn render(&self, template: &str) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| match self.vars.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }

    /// 读取嵌入模板并渲染
    pub fn render_asset(&self, filename: &str) -> Result<String> {
        Ok(self.render(&TemplateAssets::get_file(filename)?))
    }
}

/// 渲染完成、待写入磁盘的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// 相对项目根目录的路径
    pub path: PathBuf,
    pub content: String,
    /// 是否需要可执行权限（仅 Unix 生效）
    pub executable: bool,
}

impl RenderedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            executable: false,
        }
    }

    pub fn executable(mut self) -> Self {
        self.executable = true;
        self
    }
}

// ═══════════════════════════════════════════════════════════════════
// 测试
// ═══════════════════════════════════════════════════════════════════
