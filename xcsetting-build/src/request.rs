//! Build setting request.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Configuration used when none is specified.
pub const DEFAULT_CONFIGURATION: &str = "Release";

/// Query for one build setting of a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Path to the `.xcodeproj`.
    pub project: PathBuf,
    /// Build configuration, e.g. `Debug`.
    pub configuration: String,
    /// Build setting key, matched case-sensitively.
    pub key: String,
}

impl Request {
    /// Creates a request for `key` of `project` using the default configuration.
    pub fn new(project: impl AsRef<Path>, key: impl Into<String>) -> Self {
        Self {
            project: project.as_ref().to_path_buf(),
            configuration: DEFAULT_CONFIGURATION.to_string(),
            key: key.into(),
        }
    }

    /// Sets the build configuration.
    pub fn with_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = configuration.into();
        self
    }

    /// Checks that project path and key are present.
    ///
    /// The project path is not checked for existence; `xcodebuild` reports that itself.
    pub fn validate(&self) -> Result<()> {
        if self.project.as_os_str().is_empty() {
            return Err(Error::MissingProject);
        }
        if self.key.is_empty() {
            return Err(Error::MissingKey);
        }
        Ok(())
    }
}
