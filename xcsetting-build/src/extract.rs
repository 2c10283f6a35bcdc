//! Extraction of a build setting value from `-showBuildSettings` output.

/// How lines of the build settings report are matched against the key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// The key must start the line, after indentation, and be followed by `=`.
    #[default]
    Anchored,
    /// Any line containing the key matches and all matches are concatenated.
    ///
    /// `NAME` also matches the line of `PRODUCT_NAME`.
    Substring,
}

/// Extracts the value of `key` from the build settings report `output`.
///
/// Returns `None` if no non-empty value was found.
pub fn extract(output: &str, key: &str, mode: MatchMode) -> Option<String> {
    let value = match mode {
        MatchMode::Anchored => output.lines().find_map(|line| anchored_value(line, key))?.to_string(),
        MatchMode::Substring => substring_value(output, key),
    };
    (!value.is_empty()).then_some(value)
}

/// Value of a `KEY = VALUE` line, if `line` sets `key` to a non-empty value.
fn anchored_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let rest = line.trim_start().strip_prefix(key)?;
    let rest = rest.trim_start_matches([' ', '\t']).strip_prefix('=')?;
    let value = rest.trim_start().trim_end_matches(['\r', '\n']);
    (!value.is_empty()).then_some(value)
}

fn substring_value(output: &str, key: &str) -> String {
    let prefix = format!("{key} = ");
    let mut value = String::new();
    for line in output.split_inclusive('\n').filter(|line| line.contains(key)) {
        let line = line.replacen(&prefix, "", 1);
        value.extend(line.chars().filter(|&c| c != '\n' && c != '\r'));
    }
    value.trim_start().to_string()
}
