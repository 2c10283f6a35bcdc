//! Errors.

/// Build setting query error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No project path was given.
    #[error("no path for Xcode project given, pass using `--project <path>`")]
    MissingProject,
    /// No build setting key was given.
    #[error("no key for the build setting given, pass using `--key <key>`")]
    MissingKey,
    /// The build tool failed.
    #[error(transparent)]
    Tool(anyhow::Error),
    /// The build tool succeeded but printed no value for the key.
    #[error("build setting for {key} not found")]
    NotFound {
        /// Requested key.
        key: String,
    },
}

/// Build setting query result.
pub type Result<T> = std::result::Result<T, Error>;
