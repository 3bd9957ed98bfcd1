//! Configuration options for argument encoding.
//!
//! [`EncodeOptions`] controls the parts of encoding that are not described
//! by the nodes themselves:
//!
//! - the ambient [`Formatters`] used where no enclosing node declares its own
//! - whether nodes with no recognizable shape are skipped or rejected
//!
//! ## Examples
//!
//! ```rust
//! use argument_encoding::{encode_with_options, EncodeOptions, Flag, Formatters};
//!
//! let options = EncodeOptions::new().with_formatters(Formatters::single_dash());
//! let tokens = encode_with_options(&Flag::keyed("v", true), options).unwrap();
//! assert_eq!(tokens, vec!["-v"]);
//! ```

use crate::Formatters;

/// Configuration options for argument encoding.
///
/// # Examples
///
/// ```rust
/// use argument_encoding::{EncodeOptions, Formatters};
///
/// // No ambient formatters, opaque nodes skipped
/// let options = EncodeOptions::new();
/// assert!(options.formatters.is_none());
/// assert!(!options.strict);
///
/// let options = EncodeOptions::new()
///     .with_formatters(Formatters::double_dash())
///     .with_strict(true);
/// assert!(options.strict);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EncodeOptions {
    pub formatters: Option<Formatters>,
    pub strict: bool,
}

impl EncodeOptions {
    /// Creates default options (no ambient formatters, permissive shapes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the formatters in effect at the root.
    ///
    /// A node that declares its own formatters overrides these for its subtree.
    #[must_use]
    pub fn with_formatters(mut self, formatters: Formatters) -> Self {
        self.formatters = Some(formatters);
        self
    }

    /// Rejects nodes reporting [`Shape::Opaque`](crate::Shape::Opaque) with
    /// [`Error::UnrecognizedShape`](crate::Error::UnrecognizedShape) instead
    /// of skipping them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argument_encoding::{encode_with_options, Arguments, EncodeOptions, Error, Shape};
    ///
    /// struct Unknown;
    ///
    /// impl Arguments for Unknown {
    ///     fn shape(&self) -> Shape<'_> {
    ///         Shape::Opaque
    ///     }
    /// }
    ///
    /// assert!(encode_with_options(&Unknown, EncodeOptions::new()).unwrap().is_empty());
    /// let strict = EncodeOptions::new().with_strict(true);
    /// assert!(matches!(
    ///     encode_with_options(&Unknown, strict),
    ///     Err(Error::UnrecognizedShape { .. })
    /// ));
    /// ```
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
