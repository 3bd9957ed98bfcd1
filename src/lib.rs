//! # argument_encoding
//!
//! Model command line invocations as typed data and encode them into the
//! argument vector of a child process.
//!
//! ## Overview
//!
//! Instead of concatenating strings, describe an invocation with a tree of
//! nodes. Leaves are the arguments themselves:
//!
//! - [`Command`]: a literal token such as an executable or sub-command name
//! - [`Flag`]: `--verbose`, present only when enabled
//! - [`Opt`]: a key/value option such as `--num-workers 4`
//! - [`OptSet`]: one option repeated for several values
//! - [`Positional`]: bare values with no key
//!
//! Any type implementing [`Arguments`] groups leaves and other nodes. A node
//! may declare the [`Formatters`] used for its subtree, which decide how keys
//! are prefixed and cased and how values are attached, and how it contributes
//! a leading command token.
//!
//! ## Quick Start
//!
//! ```rust
//! use argument_encoding::{impl_arguments, Arguments, Command, CommandToken, Flag, Formatters, Opt, Positional};
//!
//! struct SwiftTest {
//!     parallel: Flag,
//!     num_workers: Opt<u32>,
//!     filter: Opt<Option<String>>,
//! }
//!
//! impl_arguments! {
//!     #[formatters = Formatters::double_dash_kebab_case()]
//!     #[command = CommandToken::Supplied]
//!     SwiftTest { parallel, num_workers => "numWorkers", filter }
//! }
//!
//! struct Swift {
//!     test: SwiftTest,
//!     package_path: Positional<&'static str>,
//! }
//!
//! impl_arguments! {
//!     #[formatters = Formatters::double_dash()]
//!     #[command = CommandToken::Fixed(Command::from("swift"))]
//!     Swift { test, package_path }
//! }
//!
//! let swift = Swift {
//!     test: SwiftTest {
//!         parallel: Flag::new(true),
//!         num_workers: Opt::new(4),
//!         filter: Opt::optional(None),
//!     },
//!     package_path: Positional::new("Packages/Core"),
//! };
//!
//! assert_eq!(
//!     swift.arguments().unwrap(),
//!     vec!["swift", "test", "--parallel", "--num-workers", "4", "Packages/Core"]
//! );
//! ```
//!
//! ## Enums
//!
//! Enums report their active case through [`Variant`]. An enum whose command
//! token is [`CommandToken::Supplied`] leads with the case name, so each case
//! reads as a sub-command. See the [`node`] module for a full example.
//!
//! ## Serialization
//!
//! Every leaf serializes as its bare value with `serde`. Leaves that carry an
//! unwrap function are decoded through an [`UnwrapRegistry`]; see the
//! [`decode`] module.
//!
//! ## Logging
//!
//! Encoding emits `tracing` events at `debug` and `trace` level. The crate
//! never installs a subscriber.

pub mod case;
pub mod command;
pub mod decode;
pub mod encoder;
pub mod error;
pub mod flag;
pub mod formatter;
pub mod macros;
pub mod node;
pub mod opt;
pub mod opt_set;
pub mod options;
pub mod positional;

pub use command::Command;
pub use decode::{Decode, LeafSeed, UnwrapRegistry};
pub use encoder::Encoder;
pub use error::{Error, Result};
pub use flag::Flag;
pub use formatter::{
    BodyFormatter, FlagFormatter, Formatters, OptionFormatter, PrefixFormatter,
    SeparatorFormatter, ValueFormatter,
};
pub use node::{Arguments, CommandToken, Field, Leaf, Record, Shape, Variant};
pub use opt::{Opt, OptUnwrap};
pub use opt_set::{ElementUnwrap, OptSet};
pub use options::EncodeOptions;
pub use positional::{Expansion, Positional};

/// Encode any `T: Arguments` into an argument vector.
///
/// Only formatters declared by nodes in the tree are used.
///
/// # Examples
///
/// ```rust
/// use argument_encoding::{encode, Command};
///
/// let tokens = encode(&vec![Command::from("git"), Command::from("status")]).unwrap();
/// assert_eq!(tokens, vec!["git", "status"]);
/// ```
///
/// # Errors
///
/// Returns [`Error::MissingFormatters`] if a flag or option renders with no
/// formatters in effect.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode<T>(node: &T) -> Result<Vec<String>>
where
    T: ?Sized + Arguments,
{
    encode_with_options(node, EncodeOptions::default())
}

/// Encode any `T: Arguments` with `formatters` in effect at the root.
///
/// # Examples
///
/// ```rust
/// use argument_encoding::{encode_with_formatters, Flag, Formatters};
///
/// let tokens = encode_with_formatters(&Flag::keyed("dryRun", true), Formatters::double_dash_kebab_case()).unwrap();
/// assert_eq!(tokens, vec!["--dry-run"]);
/// ```
///
/// # Errors
///
/// See [`encode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_formatters<T>(node: &T, formatters: Formatters) -> Result<Vec<String>>
where
    T: ?Sized + Arguments,
{
    encode_with_options(node, EncodeOptions::new().with_formatters(formatters))
}

/// Encode any `T: Arguments` with custom options.
///
/// # Errors
///
/// See [`Encoder::encode`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_options<T>(node: &T, options: EncodeOptions) -> Result<Vec<String>>
where
    T: ?Sized + Arguments,
{
    let mut encoder = Encoder::new(options);
    encoder.encode(node)?;
    Ok(encoder.into_inner())
}
