//! Option sets: one key repeated for several values.

use crate::decode::{self, Decode};
use crate::node::{Arguments, Leaf, Shape};
use crate::{Error, Formatters, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Converts one element of an option set to its argument string. `None`
/// drops the element.
pub type ElementUnwrap<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;

/// An option repeated once per value, such as `-Xcc -I -Xcc include`.
///
/// # Examples
///
/// ```rust
/// use argument_encoding::{encode_with_formatters, Formatters, OptSet};
///
/// let targets = OptSet::new(vec!["Core", "CLI"]).with_key("target");
/// assert_eq!(
///     encode_with_formatters(&targets, Formatters::double_dash()).unwrap(),
///     vec!["--target", "Core", "--target", "CLI"]
/// );
/// ```
pub struct OptSet<T> {
    key: Option<String>,
    values: Vec<T>,
    unwrap: ElementUnwrap<T>,
}

impl<T> OptSet<T> {
    /// Creates an option set with a caller-supplied element unwrap function.
    pub fn with_unwrap<F>(values: Vec<T>, unwrap: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        Self::from_parts(values, Arc::new(unwrap))
    }

    pub(crate) fn from_parts(values: Vec<T>, unwrap: ElementUnwrap<T>) -> Self {
        OptSet {
            key: None,
            values,
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

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut Vec<T> {
        &mut self.values
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// The values as they appear in the arguments, in order.
    pub fn unwrapped(&self) -> Vec<String> {
        self.values.iter().filter_map(|value| (self.unwrap)(value)).collect()
    }
}

impl<T: fmt::Display + 'static> OptSet<T> {
    /// Creates an option set whose values are rendered with `Display`.
    pub fn new(values: Vec<T>) -> Self {
        Self::with_unwrap(values, |value| Some(value.to_string()))
    }
}

impl<T: AsRef<str> + 'static> OptSet<T> {
    /// Creates an option set of raw string values.
    pub fn raw(values: Vec<T>) -> Self {
        Self::with_unwrap(values, |value| Some(value.as_ref().to_string()))
    }
}

impl<T> Leaf for OptSet<T> {
    fn render(&self, key: Option<&str>, formatters: Option<&Formatters>) -> Result<Vec<String>> {
        let Some(key) = self.key.as_deref().or(key) else {
            return Ok(Vec::new());
        };
        let values = self.unwrapped();
        if values.is_empty() {
            return Ok(Vec::new());
        }

        let formatters = formatters.ok_or_else(|| Error::missing_formatters("option set", key))?;
        Ok(values
            .iter()
            .flat_map(|value| formatters.option.format(key, value))
            .collect())
    }
}

impl<T> Arguments for OptSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Leaf(self)
    }
}

impl<T: fmt::Display + 'static> From<Vec<T>> for OptSet<T> {
    fn from(values: Vec<T>) -> Self {
        OptSet::new(values)
    }
}

impl<T: Clone> Clone for OptSet<T> {
    fn clone(&self) -> Self {
        OptSet {
            key: self.key.clone(),
            values: self.values.clone(),
            unwrap: Arc::clone(&self.unwrap),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OptSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptSet")
            .field("key", &self.key)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq> PartialEq for OptSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.values == other.values
    }
}

impl<T: Eq> Eq for OptSet<T> {}

impl<T: Hash> Hash for OptSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.values.hash(state);
    }
}

impl<T: Serialize> Serialize for OptSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

impl<T: DeserializeOwned + 'static> Decode for OptSet<T> {
    type Value = Vec<T>;
    type Unwrap = ElementUnwrap<T>;

    fn from_parts(values: Vec<T>, unwrap: ElementUnwrap<T>) -> Self {
        OptSet::from_parts(values, unwrap)
    }
}

impl<'de, T: DeserializeOwned + 'static> Deserialize<'de> for OptSet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        decode::deserialize_in_scope(deserializer)
    }
}
