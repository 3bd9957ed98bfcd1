//! Literal command tokens.

use crate::node::{Arguments, Leaf, Shape};
use crate::{Formatters, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A command argument with no children, such as an executable name or a
/// sub-command.
///
/// Encodes to `[value]`, or to nothing when the value is empty.
///
/// # Examples
///
/// ```rust
/// use argument_encoding::{Arguments, Command};
///
/// assert_eq!(Command::from("swift").arguments().unwrap(), vec!["swift"]);
/// assert!(Command::from("").arguments().unwrap().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Command(String);

impl Command {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Command(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    pub(crate) fn tokens(&self) -> Vec<String> {
        if self.0.is_empty() {
            Vec::new()
        } else {
            vec![self.0.clone()]
        }
    }
}

impl Leaf for Command {
    fn render(&self, _key: Option<&str>, _formatters: Option<&Formatters>) -> Result<Vec<String>> {
        Ok(self.tokens())
    }
}

impl Arguments for Command {
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf(self)
    }
}

impl From<&str> for Command {
    fn from(value: &str) -> Self {
        Command(value.to_string())
    }
}

impl From<String> for Command {
    fn from(value: String) -> Self {
        Command(value)
    }
}

impl AsRef<str> for Command {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_ignores_key_and_formatters() {
        let command = Command::new("build");
        assert_eq!(
            command
                .render(Some("ignored"), Some(&Formatters::unimplemented()))
                .unwrap(),
            vec!["build"]
        );
    }

    #[test]
    fn test_empty_command() {
        assert!(Command::default().render(None, None).unwrap().is_empty());
    }
}
