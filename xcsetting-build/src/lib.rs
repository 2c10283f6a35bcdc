//! Xcode build setting queries.
//!
//! Runs `xcodebuild -showBuildSettings` for a project and configuration and
//! extracts the value of a single build setting from its output.

mod error;
mod extract;
mod fetcher;
mod request;
mod shared;
mod tool;

pub use error::{Error, Result};
pub use extract::{extract, MatchMode};
pub use fetcher::{fetch, Fetcher};
pub use request::{Request, DEFAULT_CONFIGURATION};
pub use shared::{SharedValues, LAST_VALUE};
pub use tool::{BuildTool, XcodeBuild};
