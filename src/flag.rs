//! Flags: arguments that switch a feature on by their presence.

use crate::node::{Arguments, Leaf, Shape};
use crate::{Error, Formatters, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An argument that enables a feature by being present. Flags never carry a
/// value; a disabled flag encodes to nothing.
///
/// A flag inside a record takes its key from the field name. A standalone
/// flag needs an explicit key.
///
/// # Examples
///
/// ```rust
/// use argument_encoding::{encode_with_formatters, Flag, Formatters};
///
/// let flag = Flag::keyed("verbose", true);
/// assert_eq!(encode_with_formatters(&flag, Formatters::double_dash()).unwrap(), vec!["--verbose"]);
///
/// let disabled = Flag::keyed("verbose", false);
/// assert!(encode_with_formatters(&disabled, Formatters::double_dash()).unwrap().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flag {
    key: Option<String>,
    enabled: bool,
}

impl Flag {
    /// Creates a flag that takes its key from its parent.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Flag { key: None, enabled }
    }

    /// Creates a flag with an explicit key.
    #[must_use]
    pub fn keyed(key: impl Into<String>, enabled: bool) -> Self {
        Flag {
            key: Some(key.into()),
            enabled,
        }
    }

    /// Sets the explicit key, which takes precedence over any key supplied by a parent.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl Leaf for Flag {
    fn render(&self, key: Option<&str>, formatters: Option<&Formatters>) -> Result<Vec<String>> {
        let key = match self.key.as_deref().or(key) {
            Some(key) if self.enabled => key,
            _ => return Ok(Vec::new()),
        };
        let formatters = formatters.ok_or_else(|| Error::missing_formatters("flag", key))?;
        Ok(vec![formatters.flag.format(key)])
    }
}

impl Arguments for Flag {
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf(self)
    }
}

impl From<bool> for Flag {
    fn from(enabled: bool) -> Self {
        Flag::new(enabled)
    }
}

// Serialized as the bare `enabled` value
impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.enabled)
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        bool::deserialize(deserializer).map(Flag::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_flag_never_formats() {
        let flag = Flag::keyed("asyncMain", false);
        assert!(flag
            .render(Some("other"), Some(&Formatters::unimplemented()))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_keyless_flag_never_formats() {
        let flag = Flag::new(true);
        assert!(flag
            .render(None, Some(&Formatters::unimplemented()))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_override_beats_supplied_key() {
        let flag = Flag::new(true).with_key("explicit");
        assert_eq!(
            flag.render(Some("field"), Some(&Formatters::single_dash()))
                .unwrap(),
            vec!["-explicit"]
        );
    }

    #[test]
    fn test_missing_formatters() {
        let err = Flag::new(true).render(Some("verbose"), None).unwrap_err();
        assert_eq!(err, Error::missing_formatters("flag", "verbose"));
    }
}
