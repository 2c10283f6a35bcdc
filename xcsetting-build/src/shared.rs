//! Shared values for later pipeline steps.

use std::collections::HashMap;

/// Name under which the last queried build setting value is published.
pub const LAST_VALUE: &str = "GET_XCODEBUILD_BUILD_SETTING_LAST_VALUE";

/// Named value slots managed by the host.
pub trait SharedValues {
    /// Stores `value` under `name`, replacing any previous value.
    fn set(&mut self, name: &str, value: String);

    /// Value stored under `name`.
    fn get(&self, name: &str) -> Option<&str>;
}

impl SharedValues for HashMap<String, String> {
    fn set(&mut self, name: &str, value: String) {
        self.insert(name.to_string(), value);
    }

    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(String::as_str)
    }
}
