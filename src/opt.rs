//! Options: key/value arguments.

use crate::decode::{self, Decode};
use crate::node::{Arguments, Leaf, Shape};
use crate::{Error, Formatters, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Converts an option's value to its argument string. `None` omits the option.
pub type OptUnwrap<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;

/// A key/value argument such as `--num-workers 4`.
///
/// The value is converted to a string by the option's unwrap function. When
/// the unwrap function yields `None`, or when neither an explicit key nor a
/// parent-supplied key exists, the option encodes to nothing.
///
/// # Examples
///
/// ```rust
/// use argument_encoding::{encode_with_formatters, Formatters, Opt};
///
/// let jobs = Opt::new(4).with_key("jobs");
/// assert_eq!(encode_with_formatters(&jobs, Formatters::double_dash()).unwrap(), vec!["--jobs", "4"]);
///
/// let absent: Opt<Option<String>> = Opt::optional(None).with_key("product");
/// assert!(encode_with_formatters(&absent, Formatters::double_dash()).unwrap().is_empty());
/// ```
pub struct Opt<T> {
    key: Option<String>,
    value: T,
    unwrap: OptUnwrap<T>,
}

impl<T> Opt<T> {
    /// Creates an option with a caller-supplied unwrap function.
    pub fn with_unwrap<F>(value: T, unwrap: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        Self::from_parts(value, Arc::new(unwrap))
    }

    pub(crate) fn from_parts(value: T, unwrap: OptUnwrap<T>) -> Self {
        Opt {
            key: None,
            value,
            unwrap,
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

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// The value as it appears in the arguments, if any.
    pub fn unwrapped(&self) -> Option<String> {
        (self.unwrap)(&self.value)
    }
}

impl<T: fmt::Display + 'static> Opt<T> {
    /// Creates an option whose value is rendered with `Display`.
    pub fn new(value: T) -> Self {
        Self::with_unwrap(value, |value| Some(value.to_string()))
    }
}

impl<T: AsRef<str> + 'static> Opt<T> {
    /// Creates an option backed by a raw string value, such as an enum with
    /// an `AsRef<str>` representation.
    pub fn raw(value: T) -> Self {
        Self::with_unwrap(value, |value| Some(value.as_ref().to_string()))
    }
}

impl<T: fmt::Display + 'static> Opt<Option<T>> {
    /// Creates an option that is omitted when the value is absent.
    pub fn optional(value: Option<T>) -> Self {
        Self::with_unwrap(value, |value| value.as_ref().map(ToString::to_string))
    }
}

impl<T> Leaf for Opt<T> {
    fn render(&self, key: Option<&str>, formatters: Option<&Formatters>) -> Result<Vec<String>> {
        let Some(key) = self.key.as_deref().or(key) else {
            return Ok(Vec::new());
        };
        let Some(value) = self.unwrapped() else {
            return Ok(Vec::new());
        };
        let formatters = formatters.ok_or_else(|| Error::missing_formatters("option", key))?;
        Ok(formatters.option.format(key, &value))
    }
}

impl<T> Arguments for Opt<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf(self)
    }
}

impl<T: fmt::Display + 'static> From<T> for Opt<T> {
    fn from(value: T) -> Self {
        Opt::new(value)
    }
}

impl<T: Clone> Clone for Opt<T> {
    fn clone(&self) -> Self {
        Opt {
            key: self.key.clone(),
            value: self.value.clone(),
            unwrap: Arc::clone(&self.unwrap),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opt")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq> PartialEq for Opt<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl<T: Eq> Eq for Opt<T> {}

impl<T: Hash> Hash for Opt<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.value.hash(state);
    }
}

// Serialized as the bare value; key and unwrap function are not data
impl<T: Serialize> Serialize for Opt<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<T: DeserializeOwned + 'static> Decode for Opt<T> {
    type Value = T;
    type Unwrap = OptUnwrap<T>;

    fn from_parts(value: T, unwrap: OptUnwrap<T>) -> Self {
        Opt::from_parts(value, unwrap)
    }
}

impl<'de, T: DeserializeOwned + 'static> Deserialize<'de> for Opt<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        decode::deserialize_in_scope(deserializer)
    }
}
