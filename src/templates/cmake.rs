//! CMakeLists.txt 生成
//!
//! 公共部分（标准、警告、输出目录、BUILD_TESTS 选项）+ 按项目类型拼接目标定义

use anyhow::Result;

use super::files::{RenderedFile, TemplateContext};
use crate::project::ProjectKind;

pub const CMAKE_LISTS: &str = "CMakeLists.txt";

pub fn cmake_lists(kind: ProjectKind, ctx: &TemplateContext) -> Result<RenderedFile> {
    let targets = match kind {
        ProjectKind::Application => "cmake/application.cmake",
        ProjectKind::Library => "cmake/library.cmake",
    };

    let mut content = ctx.render_asset("cmake/common.cmake")?;
    content.push_str(&ctx.render_asset(targets)?);

    Ok(RenderedFile::new(CMAKE_LISTS, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::GenerationRequest;

    fn render(name: &str, kind: ProjectKind) -> String {
        let request = GenerationRequest::new(name, kind).unwrap();
        cmake_lists(kind, &TemplateContext::for_request(&request))
            .unwrap()
            .content
    }

    #[test]
    fn test_common_settings() {
        let content = render("Widgets", ProjectKind::Application);
        assert!(content.contains("project(Widgets VERSION 0.1.0 LANGUAGES CXX)"));
        assert!(content.contains("set(CMAKE_CXX_STANDARD 20)"));
        assert!(content.contains("-Wall -Wextra -Wpedantic -Werror"));
        assert!(content.contains("option(BUILD_TESTS"));
        assert!(!content.contains("{{"));
    }

    #[test]
    fn test_application_declares_executable() {
        let content = render("Widgets", ProjectKind::Application);
        assert!(content.contains("add_executable(Widgets src/main.cpp)"));
        assert!(content.contains("add_executable(Widgets_tests tests/test_main.cpp)"));
        assert!(!content.contains("add_library("));
    }

    #[test]
    fn test_library_declares_static_or_interface_target() {
        let content = render("Core", ProjectKind::Library);
        assert!(content.contains("add_library(Core STATIC ${LIBRARY_SOURCES})"));
        assert!(content.contains("add_library(Core INTERFACE)"));
        assert!(content.contains("target_link_libraries(Core_tests PRIVATE Core)"));
        assert!(!content.contains("add_executable(Core "));
    }
}
