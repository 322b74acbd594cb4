//! 生成请求
//!
//! 一次调用只构造一个 GenerationRequest，构造后不可变

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::error::ScaffoldError;

lazy_static! {
    // 单个路径分量，同时是合法的 CMake 项目名
    static ref PROJECT_NAME: Regex = Regex::new(r"^[A-Za-z0-9_.\-]+$").unwrap();
}

/// 项目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    #[default]
    Application,
    Library,
}

impl ProjectKind {
    /// 由两个互斥的选择开关解析项目类型，都未指定时为 Application
    pub fn from_flags(app: bool, lib: bool) -> Result<Self, ScaffoldError> {
        match (app, lib) {
            (true, true) => Err(ScaffoldError::ConflictingKinds),
            (_, true) => Ok(ProjectKind::Library),
            _ => Ok(ProjectKind::Application),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::Application => "application",
            ProjectKind::Library => "library",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    name: String,
    kind: ProjectKind,
}

impl GenerationRequest {
    /// 校验名称并构造请求
    pub fn new(name: impl Into<String>, kind: ProjectKind) -> Result<Self, ScaffoldError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name, kind })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    pub fn include_guard(&self) -> String {
        include_guard(&self.name)
    }

    pub fn namespace(&self) -> String {
        namespace_ident(&self.name)
    }

    /// 初始提交信息
    pub fn commit_message(&self) -> String {
        format!(
            "Initial commit: {} ({} project)",
            self.name,
            self.kind.as_str()
        )
    }
}

fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    let invalid = |reason: &str| ScaffoldError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if name == "." || name == ".." {
        return Err(invalid("name must not be a relative path marker"));
    }
    if !PROJECT_NAME.is_match(name) {
        return Err(invalid(
            "only ASCII letters, digits, '-', '_' and '.' are allowed",
        ));
    }

    Ok(())
}

/// C++ 关键字，不能直接用作命名空间名
const CPP_KEYWORDS: [&str; 92] = [
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

/// 非字母开头的标识符加 `prefix`，避免数字开头或保留的 `_X` 形式
fn ensure_leading_letter(ident: String, prefix: &str) -> String {
    match ident.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => ident,
        _ => format!("{}{}", prefix, ident),
    }
}

/// 合并连续的 `_`（含 `__` 的标识符为实现保留）
fn collapse_underscores(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    for c in ident.chars() {
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }
    out
}

/// 头文件 include guard：大写，非字母数字替换为 `_`，追加 `_HPP`
///
/// `my-lib`、`My_Lib` 与 `my--lib` 得到同一个 `MY_LIB_HPP`；`3d-engine` 得到 `PROJECT_3D_ENGINE_HPP`
pub fn include_guard(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    collapse_underscores(&format!("{}_HPP", ensure_leading_letter(stem, "PROJECT_")))
}

/// C++ 命名空间标识符
pub fn namespace_ident(name: &str) -> String {
    let ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    let ident = collapse_underscores(&ensure_leading_letter(ident, "project_"));
    if CPP_KEYWORDS.contains(&ident.as_str()) {
        format!("{}_", ident)
    } else {
        ident
    }
}
