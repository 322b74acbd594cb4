//! 项目管理模块
//!
//! 提供生成请求、项目生成与结果报告

pub mod initializer;
pub mod report;
pub mod request;

// 重导出
pub use initializer::*;
pub use report::{collect_manifest, GenerationReport};
pub use request::{include_guard, namespace_ident, GenerationRequest, ProjectKind};
