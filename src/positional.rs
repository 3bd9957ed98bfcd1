//! Positional arguments: bare values with no key.

use crate::decode::{self, Decode};
use crate::node::{Arguments, Leaf, Shape};
use crate::{Error, Formatters, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// How a positional value becomes tokens.
pub enum Expansion<T> {
    /// A function returning the tokens directly.
    Tokens(Arc<dyn Fn(&T) -> Vec<String> + Send + Sync>),
    /// The value is itself a node; its full encoding is emitted in place.
    Group(fn(&T) -> &dyn Arguments),
}

fn as_node<T: Arguments>(value: &T) -> &dyn Arguments {
    value
}

impl<T> Expansion<T> {
    pub fn tokens<F>(expand: F) -> Self
    where
        F: Fn(&T) -> Vec<String> + Send + Sync + 'static,
    {
        Expansion::Tokens(Arc::new(expand))
    }
}

impl<T: Arguments> Expansion<T> {
    #[must_use]
    pub fn group() -> Self {
        Expansion::Group(as_node::<T>)
    }
}

impl<T> Clone for Expansion<T> {
    fn clone(&self) -> Self {
        match self {
            Expansion::Tokens(expand) => Expansion::Tokens(Arc::clone(expand)),
            Expansion::Group(node) => Expansion::Group(*node),
        }
    }
}

impl<T> fmt::Debug for Expansion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expansion::Tokens(_) => f.write_str("Tokens"),
            Expansion::Group(_) => f.write_str("Group"),
        }
    }
}

/// A value emitted without a key, such as a path or a nested invocation.
///
/// Positionals never consult the formatting context themselves. A group
/// positional emits its value's arguments, formatted with whatever context
/// is in effect at its position.
///
/// # Examples
///
/// ```rust
/// use argument_encoding::{encode, Positional};
///
/// assert_eq!(encode(&Positional::new("Sources/main.swift")).unwrap(), vec!["Sources/main.swift"]);
/// assert_eq!(encode(&Positional::values(vec![1, 2])).unwrap(), vec!["1", "2"]);
/// assert!(encode(&Positional::<Option<String>>::optional(None)).unwrap().is_empty());
/// ```
pub struct Positional<T> {
    value: T,
    expansion: Expansion<T>,
}

impl<T> Positional<T> {
    /// Creates a positional with a caller-supplied token function.
    pub fn with_unwrap<F>(value: T, expand: F) -> Self
    where
        F: Fn(&T) -> Vec<String> + Send + Sync + 'static,
    {
        Self::from_parts(value, Expansion::tokens(expand))
    }

    pub(crate) fn from_parts(value: T, expansion: Expansion<T>) -> Self {
        Positional { value, expansion }
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

    pub fn expansion(&self) -> &Expansion<T> {
        &self.expansion
    }
}

impl<T: fmt::Display + 'static> Positional<T> {
    pub fn new(value: T) -> Self {
        Self::with_unwrap(value, |value| vec![value.to_string()])
    }
}

impl<T: AsRef<str> + 'static> Positional<T> {
    pub fn raw(value: T) -> Self {
        Self::with_unwrap(value, |value| vec![value.as_ref().to_string()])
    }
}

impl<T: fmt::Display + 'static> Positional<Option<T>> {
    /// Creates a positional that emits nothing when the value is absent.
    pub fn optional(value: Option<T>) -> Self {
        Self::with_unwrap(value, |value| {
            value.iter().map(ToString::to_string).collect()
        })
    }
}

impl<E: fmt::Display + 'static> Positional<Vec<E>> {
    /// Creates a positional emitting one token per element.
    pub fn values(values: Vec<E>) -> Self {
        Self::with_unwrap(values, |values| {
            values.iter().map(ToString::to_string).collect()
        })
    }
}

impl<T: Arguments> Positional<T> {
    /// Creates a positional whose tokens are the full encoding of `value`.
    pub fn group(value: T) -> Self {
        Self::from_parts(value, Expansion::group())
    }
}

impl<T> Leaf for Positional<T> {
    /// Renders token positionals.
    ///
    /// # Errors
    ///
    /// A group positional is a node rather than a leaf and is only encoded
    /// through [`Arguments::shape`]; rendering it directly is an
    /// [`Error::Custom`].
    fn render(&self, _key: Option<&str>, _formatters: Option<&Formatters>) -> Result<Vec<String>> {
        match &self.expansion {
            Expansion::Tokens(expand) => Ok(expand(&self.value)
                .into_iter()
                .filter(|token| !token.is_empty())
                .collect()),
            Expansion::Group(_) => Err(Error::custom(
                "group positionals are encoded as nodes and cannot be rendered as leaves",
            )),
        }
    }
}

impl<T> Arguments for Positional<T> {
    fn shape(&self) -> Shape<'_> {
        match &self.expansion {
            Expansion::Tokens(_) => Shape::Leaf(self),
            Expansion::Group(node) => Shape::Optional(Some(node(&self.value))),
        }
    }
}

impl<T: fmt::Display + 'static> From<T> for Positional<T> {
    fn from(value: T) -> Self {
        Positional::new(value)
    }
}

impl<T: Clone> Clone for Positional<T> {
    fn clone(&self) -> Self {
        Positional {
            value: self.value.clone(),
            expansion: self.expansion.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Positional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Positional")
            .field("value", &self.value)
            .field("expansion", &self.expansion)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Positional<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Positional<T> {}

impl<T: Hash> Hash for Positional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: Serialize> Serialize for Positional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<T: DeserializeOwned + 'static> Decode for Positional<T> {
    type Value = T;
    type Unwrap = Expansion<T>;

    fn from_parts(value: T, expansion: Expansion<T>) -> Self {
        Positional::from_parts(value, expansion)
    }
}

impl<'de, T: DeserializeOwned + 'static> Deserialize<'de> for Positional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        decode::deserialize_in_scope(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EncodeOptions, Flag, Record};

    struct Filter {
        verbose: Flag,
    }

    impl Arguments for Filter {
        fn shape(&self) -> Shape<'_> {
            Record::new().field("verbose", &self.verbose).into()
        }
    }

    #[test]
    fn test_positional_ignores_key_and_formatters() {
        let positional = Positional::new("path");
        assert_eq!(
            positional
                .render(Some("key"), Some(&Formatters::unimplemented()))
                .unwrap(),
            vec!["path"]
        );
    }

    #[test]
    fn test_empty_tokens_are_dropped() {
        assert!(Positional::new("").render(None, None).unwrap().is_empty());
        let values = Positional::values(vec!["a", "", "b"]);
        assert_eq!(values.render(None, None).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_group_is_encoded_as_a_node() {
        let group = Positional::group(Filter {
            verbose: Flag::new(true),
        });
        assert!(matches!(group.shape(), Shape::Optional(Some(_))));
        assert_eq!(
            crate::encode_with_formatters(&group, Formatters::single_dash()).unwrap(),
            vec!["-verbose"]
        );
        assert!(group
            .render(None, Some(&Formatters::single_dash()))
            .is_err());
    }

    #[test]
    fn test_group_honors_strict_mode() {
        struct Handle;

        impl Arguments for Handle {
            fn shape(&self) -> Shape<'_> {
                Shape::Opaque
            }
        }

        let group = Positional::group(Handle);
        assert!(crate::encode(&group).unwrap().is_empty());

        let strict = EncodeOptions::new().with_strict(true);
        assert!(matches!(
            crate::encode_with_options(&group, strict),
            Err(Error::UnrecognizedShape { .. })
        ));
    }

    #[test]
    fn test_equality_compares_values() {
        assert_eq!(Positional::new(1), Positional::with_unwrap(1, |_| Vec::new()));
        assert_ne!(Positional::new(1), Positional::new(2));
    }
}
