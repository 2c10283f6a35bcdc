//! Build tool invocation.

use devx_cmd::cmd;
use std::path::{Path, PathBuf};

/// Reports resolved build settings as `KEY = VALUE` lines.
pub trait BuildTool {
    /// Returns the build settings report of `project` under `configuration`.
    fn show_build_settings(&self, project: &Path, configuration: &str) -> anyhow::Result<String>;
}

/// `xcodebuild` command line tool.
#[derive(Debug, Clone)]
pub struct XcodeBuild {
    program: PathBuf,
}

impl Default for XcodeBuild {
    fn default() -> Self {
        Self::with_program("xcodebuild")
    }
}

impl XcodeBuild {
    /// Uses `program` instead of `xcodebuild` from the search path.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }
}

impl BuildTool for XcodeBuild {
    fn show_build_settings(&self, project: &Path, configuration: &str) -> anyhow::Result<String> {
        log::debug!(
            "running {} -project {} -configuration {configuration} -showBuildSettings",
            self.program.display(),
            project.display()
        );
        let output =
            cmd!(&self.program, "-project", project, "-configuration", configuration, "-showBuildSettings").read()?;
        Ok(output)
    }
}
