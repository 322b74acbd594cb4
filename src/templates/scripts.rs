//! 工作流脚本生成
//!
//! build / clean / rebuild / run / test 五个脚本，各配一个系统原生启动器：
//! - Posix：`build.sh` + 可执行的 `build`
//! - PowerShell：`build.ps1` + `build.cmd`

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use super::files::{RenderedFile, TemplateAssets, TemplateContext};

/// 工作流脚本名称（按生成顺序）
pub const WORKFLOW_SCRIPTS: [&str; 5] = ["build", "clean", "rebuild", "run", "test"];

pub const SCRIPTS_DIR: &str = "scripts";

/// 脚本风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptFlavor {
    /// POSIX sh 脚本
    Posix,
    /// PowerShell 脚本 + .cmd 启动器
    #[value(name = "powershell")]
    PowerShell,
}

impl ScriptFlavor {
    /// 按宿主系统选择默认风格
    pub fn host() -> Self {
        if cfg!(windows) {
            ScriptFlavor::PowerShell
        } else {
            ScriptFlavor::Posix
        }
    }

    fn template_dir(&self) -> &'static str {
        match self {
            ScriptFlavor::Posix => "scripts/posix",
            ScriptFlavor::PowerShell => "scripts/powershell",
        }
    }

    pub fn script_file(&self, script: &str) -> String {
        match self {
            ScriptFlavor::Posix => format!("{}.sh", script),
            ScriptFlavor::PowerShell => format!("{}.ps1", script),
        }
    }

    pub fn launcher_file(&self, script: &str) -> String {
        match self {
            ScriptFlavor::Posix => script.to_string(),
            ScriptFlavor::PowerShell => format!("{}.cmd", script),
        }
    }

    fn launcher_template(&self) -> String {
        match self {
            ScriptFlavor::Posix => format!("{}/launcher", self.template_dir()),
            ScriptFlavor::PowerShell => format!("{}/launcher.cmd", self.template_dir()),
        }
    }
}

impl Default for ScriptFlavor {
    fn default() -> Self {
        Self::host()
    }
}

/// 渲染五个脚本及其启动器
///
/// 脚本本体与项目无关（运行时从 CMakeLists.txt 读取项目名），只有启动器需要替换脚本名
pub fn workflow_scripts(flavor: ScriptFlavor) -> Result<Vec<RenderedFile>> {
    let launcher = TemplateAssets::get_file(&flavor.launcher_template())?;
    let posix = flavor == ScriptFlavor::Posix;

    let mut files = Vec::with_capacity(WORKFLOW_SCRIPTS.len() * 2);
    for script in WORKFLOW_SCRIPTS {
        let body = TemplateAssets::get_file(&format!(
            "{}/{}",
            flavor.template_dir(),
            flavor.script_file(script)
        ))?;
        let shim = TemplateContext::new()
            .with("SCRIPT_NAME", script)
            .render(&launcher);

        let body = RenderedFile::new(format!("{}/{}", SCRIPTS_DIR, flavor.script_file(script)), body);
        let shim = RenderedFile::new(format!("{}/{}", SCRIPTS_DIR, flavor.launcher_file(script)), shim);

        if posix {
            files.push(body.executable());
            files.push(shim.executable());
        } else {
            files.push(body);
            files.push(shim);
        }
    }

    Ok(files)
}
