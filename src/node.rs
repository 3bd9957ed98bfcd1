//! The node capability: how a type describes itself to the encoder.
//!
//! Every value that takes part in encoding implements [`Arguments`]. Instead
//! of being inspected at runtime, a node reports its [`Shape`]: a leaf that
//! renders itself, a record of keyed fields, a variant with one active case,
//! or a container of further nodes. A node may also declare the
//! [`Formatters`] its subtree uses and how it contributes a command token.
//!
//! ## Records
//!
//! ```rust
//! use argument_encoding::{Arguments, Flag, Formatters, Opt, Record, Shape};
//!
//! struct Build {
//!     verbose: Flag,
//!     jobs: Opt<u32>,
//! }
//!
//! impl Arguments for Build {
//!     fn shape(&self) -> Shape<'_> {
//!         Record::new()
//!             .field("verbose", &self.verbose)
//!             .field("jobs", &self.jobs)
//!             .into()
//!     }
//!
//!     fn formatters(&self) -> Option<Formatters> {
//!         Some(Formatters::double_dash())
//!     }
//! }
//!
//! let build = Build { verbose: Flag::new(true), jobs: Opt::new(8) };
//! assert_eq!(build.arguments().unwrap(), vec!["--verbose", "--jobs", "8"]);
//! ```
//!
//! ## Variants
//!
//! ```rust
//! use argument_encoding::{Arguments, CommandToken, Flag, Formatters, Shape, Variant};
//!
//! enum Swift {
//!     Build { release: Flag },
//!     Clean,
//! }
//!
//! impl Arguments for Swift {
//!     fn shape(&self) -> Shape<'_> {
//!         match self {
//!             Swift::Build { release } => Variant::new("build").field("release", release).into(),
//!             Swift::Clean => Variant::new("clean").into(),
//!         }
//!     }
//!
//!     fn formatters(&self) -> Option<Formatters> {
//!         Some(Formatters::double_dash())
//!     }
//!
//!     fn command(&self) -> CommandToken {
//!         CommandToken::Supplied
//!     }
//! }
//!
//! let build = Swift::Build { release: Flag::new(true) };
//! assert_eq!(build.arguments().unwrap(), vec!["build", "--release"]);
//! assert_eq!(Swift::Clean.arguments().unwrap(), vec!["clean"]);
//! ```

use crate::{Command, Formatters, Result};
use indexmap::{IndexMap, IndexSet};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A terminal token-producing unit.
///
/// A leaf receives the key its parent supplies (a field name, a variant
/// label, a map key) and the formatters in effect at its position.
pub trait Leaf {
    /// Renders the leaf into tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFormatters`](crate::Error::MissingFormatters)
    /// when a token must be formatted but `formatters` is `None`.
    fn render(&self, key: Option<&str>, formatters: Option<&Formatters>) -> Result<Vec<String>>;
}

/// How a node contributes a leading command token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CommandToken {
    /// The node is a plain group of arguments.
    #[default]
    None,
    /// The node is a sub-command named by its parent: the key the parent
    /// supplies (a field name or variant case) is emitted first. Variants
    /// with this token lead with their active case name instead.
    Supplied,
    /// The node always leads with this command, regardless of its parent.
    Fixed(Command),
}

/// A value that can be encoded into command line arguments.
pub trait Arguments {
    /// Describes this node to the encoder.
    fn shape(&self) -> Shape<'_>;

    /// Formatters used for this node and everything beneath it, until a
    /// descendant declares its own.
    fn formatters(&self) -> Option<Formatters> {
        None
    }

    /// How this node contributes a leading command token.
    fn command(&self) -> CommandToken {
        CommandToken::None
    }

    /// Type name reported when the node has no recognizable shape.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Encodes this node as the root of an argument vector.
    ///
    /// Trait objects call this through a reference, `(&node).arguments()`,
    /// or use [`encode`](crate::encode) directly.
    ///
    /// # Errors
    ///
    /// See [`encode`](crate::encode).
    fn arguments(&self) -> Result<Vec<String>>
    where
        Self: Sized,
    {
        crate::encode(self)
    }
}

/// The structure of a node, as reported by [`Arguments::shape`].
pub enum Shape<'a> {
    /// A terminal unit that renders its own tokens.
    Leaf(&'a dyn Leaf),
    /// Keyed (or tuple) fields visited in declaration order.
    Record(Record<'a>),
    /// The active case of a tagged union.
    Variant(Variant<'a>),
    /// Elements visited in order, with no supplied key.
    Sequence(Vec<&'a dyn Arguments>),
    /// Elements visited in the set's iteration order, with no supplied key.
    Set(Vec<&'a dyn Arguments>),
    /// Values visited with their key as supplied key.
    Mapping(Vec<(String, &'a dyn Arguments)>),
    /// A value that may be absent.
    Optional(Option<&'a dyn Arguments>),
    /// Nothing the encoder recognizes.
    Opaque,
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Leaf(_) => f.write_str("Leaf"),
            Shape::Record(record) => f.debug_tuple("Record").field(record).finish(),
            Shape::Variant(variant) => f.debug_tuple("Variant").field(variant).finish(),
            Shape::Sequence(elements) => write!(f, "Sequence({})", elements.len()),
            Shape::Set(elements) => write!(f, "Set({})", elements.len()),
            Shape::Mapping(entries) => f
                .debug_tuple("Mapping")
                .field(&entries.iter().map(|(k, _)| k).collect::<Vec<_>>())
                .finish(),
            Shape::Optional(value) => write!(f, "Optional({})", value.is_some()),
            Shape::Opaque => f.write_str("Opaque"),
        }
    }
}

/// A child node together with the key its parent supplies.
pub struct Field<'a> {
    pub key: Option<Cow<'a, str>>,
    pub node: &'a dyn Arguments,
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("key", &self.key).finish_non_exhaustive()
    }
}

/// Builder for [`Shape::Record`].
#[derive(Debug, Default)]
pub struct Record<'a> {
    pub fields: Vec<Field<'a>>,
}

impl<'a> Record<'a> {
    #[must_use]
    pub fn new() -> Self {
        Record { fields: Vec::new() }
    }

    /// Adds a named field. The name becomes the child's supplied key.
    #[must_use]
    pub fn field(mut self, key: impl Into<Cow<'a, str>>, node: &'a dyn Arguments) -> Self {
        self.fields.push(Field {
            key: Some(key.into()),
            node,
        });
        self
    }

    /// Adds a tuple field with no supplied key.
    #[must_use]
    pub fn unnamed(mut self, node: &'a dyn Arguments) -> Self {
        self.fields.push(Field { key: None, node });
        self
    }
}

impl<'a> From<Record<'a>> for Shape<'a> {
    fn from(record: Record<'a>) -> Self {
        Shape::Record(record)
    }
}

/// Builder for [`Shape::Variant`]: the active case and its payloads.
#[derive(Debug)]
pub struct Variant<'a> {
    pub case: Cow<'a, str>,
    pub payloads: Vec<Field<'a>>,
}

impl<'a> Variant<'a> {
    #[must_use]
    pub fn new(case: impl Into<Cow<'a, str>>) -> Self {
        Variant {
            case: case.into(),
            payloads: Vec::new(),
        }
    }

    /// Adds a labeled payload. The label becomes the payload's supplied key.
    #[must_use]
    pub fn field(mut self, label: impl Into<Cow<'a, str>>, node: &'a dyn Arguments) -> Self {
        self.payloads.push(Field {
            key: Some(label.into()),
            node,
        });
        self
    }

    /// Adds an unlabeled payload.
    #[must_use]
    pub fn unnamed(mut self, node: &'a dyn Arguments) -> Self {
        self.payloads.push(Field { key: None, node });
        self
    }
}

impl<'a> From<Variant<'a>> for Shape<'a> {
    fn from(variant: Variant<'a>) -> Self {
        Shape::Variant(variant)
    }
}

// Containers

impl Arguments for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Record(Record::new())
    }
}

impl<T: Arguments> Arguments for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Optional(self.as_ref().map(|value| value as &dyn Arguments))
    }
}

impl<T: Arguments> Arguments for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|value| value as &dyn Arguments).collect())
    }
}

impl<T: Arguments, const N: usize> Arguments for [T; N] {
    fn shape(&self) -> Shape<'_> {
        self.as_slice().shape()
    }
}

impl<T: Arguments> Arguments for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        self.as_slice().shape()
    }
}

impl<T: Arguments> Arguments for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|value| value as &dyn Arguments).collect())
    }
}

impl<T: Arguments, S> Arguments for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Set(self.iter().map(|value| value as &dyn Arguments).collect())
    }
}

impl<T: Arguments> Arguments for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Set(self.iter().map(|value| value as &dyn Arguments).collect())
    }
}

impl<T: Arguments, S> Arguments for IndexSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Set(self.iter().map(|value| value as &dyn Arguments).collect())
    }
}

impl<K: fmt::Display, V: Arguments, S> Arguments for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(
            self.iter()
                .map(|(key, value)| (key.to_string(), value as &dyn Arguments))
                .collect(),
        )
    }
}

impl<K: fmt::Display, V: Arguments> Arguments for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(
            self.iter()
                .map(|(key, value)| (key.to_string(), value as &dyn Arguments))
                .collect(),
        )
    }
}

impl<K: fmt::Display, V: Arguments, S> Arguments for IndexMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(
            self.iter()
                .map(|(key, value)| (key.to_string(), value as &dyn Arguments))
                .collect(),
        )
    }
}

macro_rules! tuple_arguments {
    ($($name:ident)+) => {
        impl<$($name: Arguments),+> Arguments for ($($name,)+) {
            #[allow(non_snake_case)]
            fn shape(&self) -> Shape<'_> {
                let ($($name,)+) = self;
                Record::new()$(.unnamed($name))+.into()
            }
        }
    };
}

tuple_arguments!(A);
tuple_arguments!(A B);
tuple_arguments!(A B C);
tuple_arguments!(A B C D);
tuple_arguments!(A B C D E);
tuple_arguments!(A B C D E F);

// Pointers forward everything to the pointee.
macro_rules! forward_arguments {
    ($($ty:ty),+) => {
        $(
            impl<T: Arguments + ?Sized> Arguments for $ty {
                fn shape(&self) -> Shape<'_> {
                    (**self).shape()
                }

                fn formatters(&self) -> Option<Formatters> {
                    (**self).formatters()
                }

                fn command(&self) -> CommandToken {
                    (**self).command()
                }

                fn type_name(&self) -> &'static str {
                    (**self).type_name()
                }
            }
        )+
    };
}

forward_arguments!(&T, Box<T>, Rc<T>, Arc<T>);
