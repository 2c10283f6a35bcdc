//! Build setting fetcher.

use std::path::Path;

use crate::{extract, BuildTool, Error, MatchMode, Request, Result, SharedValues, XcodeBuild, LAST_VALUE};

/// Fetches build setting values using a build tool.
#[derive(Debug, Clone, Default)]
pub struct Fetcher<T> {
    tool: T,
    mode: MatchMode,
}

impl<T: BuildTool> Fetcher<T> {
    /// Creates a fetcher using anchored key matching.
    pub fn new(tool: T) -> Self {
        Self { tool, mode: MatchMode::default() }
    }

    /// Sets how output lines are matched against the key.
    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// The build tool.
    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// Returns the value of the requested build setting.
    ///
    /// The build tool is not invoked if the request is invalid.
    pub fn fetch(&self, request: &Request) -> Result<String> {
        request.validate()?;

        log::info!(
            "getting xcodebuild value for {} in {} for {}",
            request.key,
            request.project.display(),
            request.configuration
        );

        let output =
            self.tool.show_build_settings(&request.project, &request.configuration).map_err(Error::Tool)?;

        match extract(&output, &request.key, self.mode) {
            Some(value) => {
                log::debug!("{} = {value}", request.key);
                Ok(value)
            }
            None => Err(Error::NotFound { key: request.key.clone() }),
        }
    }

    /// Like [`fetch`](Self::fetch), but also publishes the value as [`LAST_VALUE`].
    pub fn fetch_into(&self, request: &Request, shared: &mut impl SharedValues) -> Result<String> {
        let value = self.fetch(request)?;
        shared.set(LAST_VALUE, value.clone());
        Ok(value)
    }
}

/// Returns the value of build setting `key` of `project` using `xcodebuild`.
///
/// The configuration defaults to `Release`.
pub fn fetch(project: impl AsRef<Path>, configuration: Option<&str>, key: &str) -> Result<String> {
    let mut request = Request::new(project, key);
    if let Some(configuration) = configuration {
        request = request.with_configuration(configuration);
    }
    Fetcher::new(XcodeBuild::default()).fetch(&request)
}
