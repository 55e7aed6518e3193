// aliasql/src/process/arguments.rs
use std::ffi::{OsStr, OsString};

const REDACTED: &str = "[REDACTED]";

#[derive(Debug, Clone, PartialEq)]
struct ProcessArgument {
    value: OsString,
    secret: bool,
}

/// Ordered positional arguments for a child process.
///
/// Values are handed to the OS as discrete argv entries; the rendered forms exist for logging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessArguments {
    items: Vec<ProcessArgument>,
}

impl ProcessArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, value: impl Into<OsString>) -> &mut Self {
        self.items.push(ProcessArgument { value: value.into(), secret: false });
        self
    }

    /// Appends a value that must never show up in logs.
    pub fn append_secret(&mut self, value: impl Into<OsString>) -> &mut Self {
        self.items.push(ProcessArgument { value: value.into(), secret: true });
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Raw values in order, secrets included.
    pub fn values(&self) -> Vec<&OsStr> {
        self.items.iter().map(|a| a.value.as_os_str()).collect()
    }

    /// Space-joined command line, secrets included.
    pub fn render(&self) -> String {
        self.items
            .iter()
            .map(|a| quote(&a.value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Space-joined command line with secret values replaced.
    pub fn render_safe(&self) -> String {
        self.items
            .iter()
            .map(|a| if a.secret { REDACTED.to_string() } else { quote(&a.value) })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn quote(value: &OsStr) -> String {
    let value = value.to_string_lossy();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value.into_owned()
    }
}
