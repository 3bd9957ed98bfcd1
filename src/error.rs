//! Error types for argument encoding and leaf decoding.
//!
//! Encoding is pure computation, so very little can go wrong. The errors in
//! this module are configuration mistakes made by the caller:
//!
//! - **Missing formatters**: a flag or option had to render a token but no
//!   [`Formatters`](crate::Formatters) were in effect at its position
//! - **Unrecognized shape**: a node reported [`Shape::Opaque`](crate::Shape::Opaque)
//!   while strict mode was enabled
//! - **Missing unwrap**: a leaf was decoded without its unwrap function being
//!   registered in the [`UnwrapRegistry`](crate::UnwrapRegistry)
//!
//! Silent omissions such as disabled flags or absent values are not errors
//! and never surface here.
//!
//! ## Examples
//!
//! ```rust
//! use argument_encoding::{encode, Error, Flag};
//!
//! // No formatters anywhere above the flag
//! let result = encode(&Flag::keyed("verbose", true));
//! assert!(matches!(result, Err(Error::MissingFormatters { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding arguments or
/// decoding leaves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A flag or option rendered with no formatting context in effect
    #[error("no formatters in effect to render {kind} `{key}`\nHelp: declare formatters on an enclosing node or pass them to `encode_with_formatters`")]
    MissingFormatters { kind: &'static str, key: String },

    /// A node with no recognizable shape was encountered in strict mode
    #[error("node of type `{type_name}` has no recognizable shape")]
    UnrecognizedShape { type_name: &'static str },

    /// Decoding a leaf whose unwrap function was never registered
    #[error("no unwrap function registered for `{type_name}`\nHelp: register one on the UnwrapRegistry before decoding")]
    MissingUnwrap { type_name: &'static str },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a missing formatters error for a leaf of the given kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argument_encoding::Error;
    ///
    /// let err = Error::missing_formatters("flag", "verbose");
    /// assert!(err.to_string().contains("flag `verbose`"));
    /// ```
    pub fn missing_formatters(kind: &'static str, key: &str) -> Self {
        Error::MissingFormatters {
            kind,
            key: key.to_string(),
        }
    }

    /// Creates an unrecognized shape error for the named node type.
    pub fn unrecognized_shape(type_name: &'static str) -> Self {
        Error::UnrecognizedShape { type_name }
    }

    /// Creates a missing unwrap error for the named leaf type.
    pub fn missing_unwrap(type_name: &'static str) -> Self {
        Error::MissingUnwrap { type_name }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
