//! The argument encoder.
//!
//! This module provides the [`Encoder`] that walks a tree of
//! [`Arguments`] nodes and flattens it into an argument vector.
//!
//! ## Overview
//!
//! Each node is visited according to its [`Shape`]:
//!
//! - **Records**: fields in declaration order, each keyed by its field name
//! - **Variants**: the active case's payloads, sorted by label
//! - **Sequences and sets**: elements in iteration order, with no key
//! - **Mappings**: values keyed by their map key
//! - **Leaves**: rendered with the key supplied by the parent and the
//!   formatters in effect at their position
//!
//! A node that declares [`Formatters`] installs them for its subtree. The
//! previous formatters are restored once the subtree is done, so siblings
//! never observe each other's formatting.
//!
//! ## Usage
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use argument_encoding::{encode_with_formatters, Flag, Formatters, Opt, Record, Shape, Arguments};
//!
//! struct Run {
//!     skip_build: Flag,
//!     jobs: Opt<u32>,
//! }
//!
//! impl Arguments for Run {
//!     fn shape(&self) -> Shape<'_> {
//!         Record::new()
//!             .field("skipBuild", &self.skip_build)
//!             .field("jobs", &self.jobs)
//!             .into()
//!     }
//! }
//!
//! let run = Run { skip_build: Flag::new(true), jobs: Opt::new(2) };
//! let tokens = encode_with_formatters(&run, Formatters::double_dash_kebab_case()).unwrap();
//! assert_eq!(tokens, vec!["--skip-build", "--jobs", "2"]);
//! ```
//!
//! ## Direct Encoder Usage
//!
//! ```rust
//! use argument_encoding::{Command, EncodeOptions, Encoder};
//!
//! let mut encoder = Encoder::new(EncodeOptions::new());
//! encoder.encode(&Command::from("swift")).unwrap();
//! encoder.encode(&Command::from("build")).unwrap();
//! assert_eq!(encoder.into_inner(), vec!["swift", "build"]);
//! ```

use crate::node::{Arguments, CommandToken, Field, Shape, Variant};
use crate::{EncodeOptions, Error, Formatters, Result};
use std::mem;
use tracing::{debug, trace};

/// The argument encoder.
///
/// Tokens produced by successive calls to [`Encoder::encode`] accumulate in
/// order. Created via [`Encoder::new`].
pub struct Encoder {
    output: Vec<String>,
    options: EncodeOptions,
    formatters: Option<Formatters>,
    depth: usize,
}

impl Encoder {
    pub fn new(options: EncodeOptions) -> Self {
        Encoder {
            output: Vec::new(),
            formatters: options.formatters.clone(),
            options,
            depth: 0,
        }
    }

    pub fn into_inner(self) -> Vec<String> {
        self.output
    }

    /// Encodes `node` as a root, appending its tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFormatters`] when a flag or option has to be
    /// rendered with no formatters in effect, and [`Error::UnrecognizedShape`]
    /// when strict mode is on and an opaque node is reached. Tokens of a
    /// failed call are discarded.
    pub fn encode<T: Arguments + ?Sized>(&mut self, node: &T) -> Result<()> {
        let start = self.output.len();
        debug!(type_name = node.type_name(), "encoding arguments");

        match self.encode_node(&node, None) {
            Ok(()) => {
                debug!(tokens = self.output.len() - start, "encoded arguments");
                Ok(())
            }
            Err(err) => {
                self.output.truncate(start);
                Err(err)
            }
        }
    }

    fn encode_node(&mut self, node: &dyn Arguments, key: Option<&str>) -> Result<()> {
        self.depth += 1;
        trace!(depth = self.depth, key, type_name = node.type_name(), "visiting node");

        let result = match node.formatters() {
            Some(formatters) => {
                let previous = mem::replace(&mut self.formatters, Some(formatters));
                let result = self.encode_scoped(node, key);
                self.formatters = previous;
                result
            }
            None => self.encode_scoped(node, key),
        };

        self.depth -= 1;
        result
    }

    fn encode_scoped(&mut self, node: &dyn Arguments, key: Option<&str>) -> Result<()> {
        let command = node.command();
        let shape = node.shape();
        match &command {
            CommandToken::None => {}
            // Variants name themselves by their active case
            CommandToken::Supplied if matches!(shape, Shape::Variant(_)) => {}
            CommandToken::Supplied => {
                if let Some(key) = key.filter(|key| !key.is_empty()) {
                    self.output.push(key.to_string());
                }
            }
            CommandToken::Fixed(command) => self.output.extend(command.tokens()),
        }

        match shape {
            Shape::Leaf(leaf) => {
                let tokens = leaf.render(key, self.formatters.as_ref())?;
                self.output.extend(tokens);
                Ok(())
            }
            Shape::Record(record) => {
                for field in record.fields {
                    let key = field.key.as_deref().map(public_name);
                    self.encode_node(field.node, key)?;
                }
                Ok(())
            }
            Shape::Variant(variant) => {
                self.encode_variant(variant, command == CommandToken::Supplied)
            }
            Shape::Sequence(elements) | Shape::Set(elements) => {
                for element in elements {
                    self.encode_node(element, None)?;
                }
                Ok(())
            }
            Shape::Mapping(entries) => {
                for (key, value) in entries {
                    self.encode_node(value, Some(key.as_str()))?;
                }
                Ok(())
            }
            Shape::Optional(Some(value)) => self.encode_node(value, None),
            Shape::Optional(None) => Ok(()),
            Shape::Opaque => {
                let type_name = node.type_name();
                if self.options.strict {
                    return Err(Error::unrecognized_shape(type_name));
                }
                debug!(type_name, "skipping node with no recognizable shape");
                Ok(())
            }
        }
    }

    fn encode_variant(&mut self, variant: Variant<'_>, leads_with_case: bool) -> Result<()> {
        let Variant { case, mut payloads } = variant;
        if leads_with_case && !case.is_empty() {
            self.output.push(case.to_string());
        }

        if let [Field { key, node }] = payloads.as_slice() {
            let key = match key.as_deref() {
                Some(label) => Some(label),
                None if leads_with_case => None,
                None => Some(&*case),
            };
            return self.encode_node(*node, key);
        }

        // Unlabeled payloads sort first and keep their declaration order
        payloads.sort_by(|a, b| a.key.cmp(&b.key));
        for Field { key, node } in payloads {
            self.encode_node(node, key.as_deref())?;
        }
        Ok(())
    }
}

/// Strips storage markers from a field name: a raw identifier prefix and
/// one leading underscore.
fn public_name(name: &str) -> &str {
    let name = name.strip_prefix("r#").unwrap_or(name);
    name.strip_prefix('_').unwrap_or(name)
}
