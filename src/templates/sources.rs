//! 源码桩生成
//!
//! 应用：src/main.cpp；库：include/<name>.hpp + src/<name>.cpp；两者都带 tests/test_main.cpp

use anyhow::Result;

use super::files::{RenderedFile, TemplateContext};
use crate::project::{GenerationRequest, ProjectKind};

/// 渲染源码与测试入口
pub fn source_files(request: &GenerationRequest, ctx: &TemplateContext) -> Result<Vec<RenderedFile>> {
    let name = request.name();

    let files = match request.kind() {
        ProjectKind::Application => vec![
            RenderedFile::new("src/main.cpp", ctx.render_asset("sources/main.cpp")?),
            RenderedFile::new("tests/test_main.cpp", ctx.render_asset("sources/test_app.cpp")?),
        ],
        ProjectKind::Library => vec![
            RenderedFile::new(
                format!("include/{}.hpp", name),
                ctx.render_asset("sources/library.hpp")?,
            ),
            RenderedFile::new(
                format!("src/{}.cpp", name),
                ctx.render_asset("sources/library.cpp")?,
            ),
            RenderedFile::new("tests/test_main.cpp", ctx.render_asset("sources/test_lib.cpp")?),
        ],
    };

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn render(name: &str, kind: ProjectKind) -> Vec<RenderedFile> {
        let request = GenerationRequest::new(name, kind).unwrap();
        let ctx = TemplateContext::for_request(&request);
        source_files(&request, &ctx).unwrap()
    }

    fn find<'a>(files: &'a [RenderedFile], path: &str) -> &'a RenderedFile {
        files
            .iter()
            .find(|f| f.path == Path::new(path))
            .unwrap_or_else(|| panic!("missing {}", path))
    }

    #[test]
    fn test_application_entry_point_greets_project() {
        let files = render("Widgets", ProjectKind::Application);
        assert_eq!(files.len(), 2);

        let main = find(&files, "src/main.cpp");
        assert!(main.content.contains("int main()"));
        assert!(main.content.contains("Hello from Widgets!"));
    }

    #[test]
    fn test_library_header_and_implementation() {
        let files = render("Core", ProjectKind::Library);
        assert_eq!(files.len(), 3);

        let header = find(&files, "include/Core.hpp");
        assert!(header.content.contains("#ifndef CORE_HPP"));
        assert!(header.content.contains("#define CORE_HPP"));
        assert!(header.content.contains("namespace Core {"));
        assert!(header.content.contains("std::string greet(const std::string& name);"));

        let source = find(&files, "src/Core.cpp");
        assert!(source.content.contains("#include \"Core.hpp\""));
        assert!(source.content.contains("Greetings from Core."));
    }

    #[test]
    fn test_library_name_with_punctuation() {
        let files = render("my-lib", ProjectKind::Library);
        let header = find(&files, "include/my-lib.hpp");
        assert!(header.content.contains("#ifndef MY_LIB_HPP"));
        assert!(header.content.contains("namespace my_lib {"));
    }

    #[test]
    fn test_library_name_with_leading_digit() {
        let files = render("3d-engine", ProjectKind::Library);
        let header = find(&files, "include/3d-engine.hpp");

        let first = header.content.lines().next().unwrap();
        assert_eq!(first, "#ifndef PROJECT_3D_ENGINE_HPP");
        assert!(header.content.contains("namespace project_3d_engine {"));

        let test = find(&files, "tests/test_main.cpp");
        assert!(test.content.contains("project_3d_engine::greet(\"World\")"));
    }

    #[test]
    fn test_test_entry_point_has_placeholder_assertions() {
        for kind in [ProjectKind::Application, ProjectKind::Library] {
            let files = render("Core", kind);
            let test = find(&files, "tests/test_main.cpp");
            assert_eq!(test.content.matches("assert(").count(), 2);
            assert!(!test.content.contains("{{"));
        }
    }
}
