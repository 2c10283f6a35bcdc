//! Prints the value of an Xcode build setting.

use anyhow::Result;
use clap::Parser;
use env_logger::Target;
use log::LevelFilter;
use std::{collections::HashMap, path::PathBuf};

use xcsetting_build::{Error, Fetcher, MatchMode, Request, SharedValues, XcodeBuild, DEFAULT_CONFIGURATION, LAST_VALUE};

/// Prints the value of a build setting reported by `xcodebuild -showBuildSettings`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Opts {
    /// Path to the Xcode project.
    #[arg(short, long, env = "XCSETTING_PROJECT", default_value = "")]
    project: String,
    /// Build configuration.
    #[arg(short, long, env = "XCSETTING_CONFIGURATION", default_value = DEFAULT_CONFIGURATION)]
    configuration: String,
    /// Build setting key, e.g. PRODUCT_NAME.
    #[arg(short, long, env = "XCSETTING_KEY", default_value = "")]
    key: String,
    /// xcodebuild program.
    #[arg(long, env = "XCODEBUILD", default_value = "xcodebuild")]
    xcodebuild: PathBuf,
    /// Match every line containing the key instead of only `KEY = VALUE` lines.
    #[arg(long)]
    substring: bool,
    /// Print the value as shared value assignment.
    #[arg(long)]
    export: bool,
    /// Log level.
    #[arg(short, long, default_value_t = LevelFilter::Warn)]
    level: LevelFilter,
}

impl Opts {
    fn request(&self) -> Request {
        Request::new(&self.project, &self.key).with_configuration(&self.configuration)
    }

    fn mode(&self) -> MatchMode {
        if self.substring {
            MatchMode::Substring
        } else {
            MatchMode::Anchored
        }
    }
}

fn perform(opts: &Opts) -> Result<String> {
    let fetcher = Fetcher::new(XcodeBuild::with_program(&opts.xcodebuild)).with_mode(opts.mode());
    let request = opts.request();

    if !opts.export {
        return Ok(fetcher.fetch(&request)?);
    }

    let mut shared = HashMap::new();
    fetcher.fetch_into(&request, &mut shared)?;
    let value = SharedValues::get(&shared, LAST_VALUE).unwrap_or_default();
    Ok(format!("{LAST_VALUE}={value}"))
}

/// Whether the failure was already logged when running the build tool.
fn reported_by_tool(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<Error>(), Some(Error::Tool(_)))
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    env_logger::builder().target(Target::Stderr).filter_level(opts.level).init();

    match perform(&opts) {
        Ok(line) => {
            println!("{line}");
            Ok(())
        }
        Err(err) => {
            if !reported_by_tool(&err) {
                log::error!("cannot get build setting: {err}");
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = Opts::try_parse_from(["xcsetting", "-p", "App.xcodeproj", "-k", "PRODUCT_NAME"]).unwrap();
        let request = opts.request();
        assert_eq!(request.configuration, "Release");
        assert_eq!(request.key, "PRODUCT_NAME");
        assert_eq!(opts.mode(), MatchMode::Anchored);
        assert_eq!(opts.xcodebuild, PathBuf::from("xcodebuild"));
    }

    #[test]
    fn options() {
        let opts = Opts::try_parse_from([
            "xcsetting",
            "--project",
            "App.xcodeproj",
            "--configuration",
            "Debug",
            "--key",
            "INFOPLIST_PATH",
            "--substring",
            "--export",
        ])
        .unwrap();
        assert_eq!(opts.request().configuration, "Debug");
        assert_eq!(opts.mode(), MatchMode::Substring);
        assert!(opts.export);
    }

    #[test]
    fn missing_key_is_reported_before_running() {
        let opts =
            Opts::try_parse_from(["xcsetting", "-p", "App.xcodeproj", "--xcodebuild", "/nonexistent/xcodebuild"])
                .unwrap();
        let err = perform(&opts).unwrap_err();
        assert!(err.to_string().contains("--key"));
        assert!(!reported_by_tool(&err));
    }

    #[test]
    fn missing_project_is_reported_before_running() {
        for args in [
            &["xcsetting", "-k", "PRODUCT_NAME", "--xcodebuild", "/nonexistent/xcodebuild"][..],
            &["xcsetting", "-p", "", "-k", "PRODUCT_NAME", "--xcodebuild", "/nonexistent/xcodebuild"][..],
        ] {
            let opts = Opts::try_parse_from(args).unwrap();
            let err = perform(&opts).unwrap_err();
            assert!(err.to_string().contains("--project <path>"));
        }
    }

    #[test]
    fn tool_failure_is_not_logged_twice() {
        let opts = Opts::try_parse_from([
            "xcsetting",
            "-p",
            "App.xcodeproj",
            "-k",
            "PRODUCT_NAME",
            "--xcodebuild",
            "/nonexistent/xcodebuild",
        ])
        .unwrap();
        let err = perform(&opts).unwrap_err();
        assert!(reported_by_tool(&err));
    }
}
