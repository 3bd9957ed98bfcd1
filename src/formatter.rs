//! Formatting rules for flags and options.
//!
//! Executables disagree on how arguments look: `-v` or `--verbose`,
//! `--num-workers 4` or `num_workers=4`. A [`FlagFormatter`] and an
//! [`OptionFormatter`] capture one such convention, and a [`Formatters`] pair
//! declared on a node applies it to every flag and option beneath that node.
//!
//! Both formatters are composed from small named rules:
//!
//! - [`PrefixFormatter`]: the text before the key (`""`, `"-"`, `"--"`)
//! - [`BodyFormatter`]: a transform applied to the key (identity, kebab-case, snake_case)
//! - [`ValueFormatter`]: a transform applied to an option's value (identity, quoted)
//! - [`SeparatorFormatter`]: how a formatted key and value become tokens
//!
//! ## Examples
//!
//! ```rust
//! use argument_encoding::{BodyFormatter, FlagFormatter, OptionFormatter, PrefixFormatter, SeparatorFormatter};
//!
//! let flag = FlagFormatter::new()
//!     .with_prefix(PrefixFormatter::double_dash())
//!     .with_body(BodyFormatter::kebab_case());
//! assert_eq!(flag.format("buildTests"), "--build-tests");
//!
//! let option = OptionFormatter::new()
//!     .with_prefix(PrefixFormatter::double_dash())
//!     .with_separator(SeparatorFormatter::equal());
//! assert_eq!(option.format("numWorkers", "4"), vec!["--numWorkers=4"]);
//! ```

use crate::case;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type PrefixFn = dyn Fn() -> String + Send + Sync;
type TransformFn = dyn Fn(&str) -> String + Send + Sync;
type SeparatorFn = dyn Fn(String, String) -> Vec<String> + Send + Sync;

const SINGLE_DASH: &str = "-";
const DOUBLE_DASH: &str = "--";
const EQUAL: &str = "=";

/// Produces the text placed before a flag or option key.
#[derive(Clone)]
pub struct PrefixFormatter {
    name: Cow<'static, str>,
    transform: Arc<PrefixFn>,
}

impl PrefixFormatter {
    /// Creates a prefix rule from a closure.
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::named("custom", transform)
    }

    fn named<F>(name: &'static str, transform: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        PrefixFormatter {
            name: Cow::Borrowed(name),
            transform: Arc::new(transform),
        }
    }

    /// No prefix.
    #[must_use]
    pub fn empty() -> Self {
        Self::named("empty", String::new)
    }

    /// `-`
    #[must_use]
    pub fn single_dash() -> Self {
        Self::named("single_dash", || SINGLE_DASH.to_string())
    }

    /// `--`
    #[must_use]
    pub fn double_dash() -> Self {
        Self::named("double_dash", || DOUBLE_DASH.to_string())
    }

    pub fn apply(&self) -> String {
        (self.transform)()
    }
}

/// Transforms a flag or option key.
#[derive(Clone)]
pub struct BodyFormatter {
    name: Cow<'static, str>,
    transform: Arc<TransformFn>,
}

impl BodyFormatter {
    /// Creates a key transform from a closure.
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::named("custom", transform)
    }

    fn named<F>(name: &'static str, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        BodyFormatter {
            name: Cow::Borrowed(name),
            transform: Arc::new(transform),
        }
    }

    /// Leaves the key untouched.
    #[must_use]
    pub fn identity() -> Self {
        Self::named("identity", str::to_string)
    }

    /// Converts camelCase keys to kebab-case.
    #[must_use]
    pub fn kebab_case() -> Self {
        Self::named("kebab_case", case::kebab_case)
    }

    /// Converts camelCase keys to snake_case.
    #[must_use]
    pub fn snake_case() -> Self {
        Self::named("snake_case", case::snake_case)
    }

    pub fn apply(&self, key: &str) -> String {
        (self.transform)(key)
    }
}

/// Transforms an option's value before it is joined with the key.
#[derive(Clone)]
pub struct ValueFormatter {
    name: Cow<'static, str>,
    transform: Arc<TransformFn>,
}

impl ValueFormatter {
    /// Creates a value transform from a closure.
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        ValueFormatter {
            name: Cow::Borrowed("custom"),
            transform: Arc::new(transform),
        }
    }

    /// Leaves the value untouched.
    #[must_use]
    pub fn identity() -> Self {
        ValueFormatter {
            name: Cow::Borrowed("identity"),
            transform: Arc::new(str::to_string),
        }
    }

    /// Wraps the value in double quotes, escaping `"` and `\`.
    #[must_use]
    pub fn quoted() -> Self {
        ValueFormatter {
            name: Cow::Borrowed("quoted"),
            transform: Arc::new(quote),
        }
    }

    pub fn apply(&self, value: &str) -> String {
        (self.transform)(value)
    }
}

/// Turns a formatted key and value into one or more tokens.
#[derive(Clone)]
pub struct SeparatorFormatter {
    name: Cow<'static, str>,
    transform: Arc<SeparatorFn>,
}

impl SeparatorFormatter {
    /// Creates a separator rule from a closure.
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(String, String) -> Vec<String> + Send + Sync + 'static,
    {
        Self::named("custom", transform)
    }

    fn named<F>(name: &'static str, transform: F) -> Self
    where
        F: Fn(String, String) -> Vec<String> + Send + Sync + 'static,
    {
        SeparatorFormatter {
            name: Cow::Borrowed(name),
            transform: Arc::new(transform),
        }
    }

    /// Key and value as two separate tokens: `["--key", "value"]`.
    #[must_use]
    pub fn space() -> Self {
        Self::named("space", |key, value| vec![key, value])
    }

    /// One `key=value` token.
    #[must_use]
    pub fn equal() -> Self {
        Self::named("equal", |key, value| vec![key + EQUAL + &value])
    }

    /// One `key="value"` token.
    #[must_use]
    pub fn quoted() -> Self {
        Self::named("quoted", |key, value| vec![key + EQUAL + &quote(&value)])
    }

    pub fn apply(&self, key: String, value: String) -> Vec<String> {
        (self.transform)(key, value)
    }
}

fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

/// Formats flag keys into a single token: `prefix + body(key)`.
///
/// # Examples
///
/// ```rust
/// use argument_encoding::{BodyFormatter, FlagFormatter};
///
/// assert_eq!(FlagFormatter::single_dash_prefix().format("flagKey"), "-flagKey");
/// assert_eq!(FlagFormatter::new().with_body(BodyFormatter::snake_case()).format("flagKey"), "flag_key");
/// ```
#[derive(Clone)]
pub struct FlagFormatter {
    pub prefix: PrefixFormatter,
    pub body: BodyFormatter,
}

impl Default for FlagFormatter {
    fn default() -> Self {
        FlagFormatter {
            prefix: PrefixFormatter::empty(),
            body: BodyFormatter::identity(),
        }
    }
}

impl FlagFormatter {
    /// Creates a formatter with no prefix and an identity key transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: PrefixFormatter) -> Self {
        self.prefix = prefix;
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: BodyFormatter) -> Self {
        self.body = body;
        self
    }

    /// Renders a key as one token.
    pub fn format(&self, key: &str) -> String {
        self.prefix.apply() + &self.body.apply(key)
    }

    /// `-key`
    #[must_use]
    pub fn single_dash_prefix() -> Self {
        Self::new().with_prefix(PrefixFormatter::single_dash())
    }

    /// `-kebab-key`
    #[must_use]
    pub fn single_dash_prefix_kebab_case() -> Self {
        Self::single_dash_prefix().with_body(BodyFormatter::kebab_case())
    }

    /// `-snake_key`
    #[must_use]
    pub fn single_dash_prefix_snake_case() -> Self {
        Self::single_dash_prefix().with_body(BodyFormatter::snake_case())
    }

    /// `--key`
    #[must_use]
    pub fn double_dash_prefix() -> Self {
        Self::new().with_prefix(PrefixFormatter::double_dash())
    }

    /// `--kebab-key`
    #[must_use]
    pub fn double_dash_prefix_kebab_case() -> Self {
        Self::double_dash_prefix().with_body(BodyFormatter::kebab_case())
    }

    /// `--snake_key`
    #[must_use]
    pub fn double_dash_prefix_snake_case() -> Self {
        Self::double_dash_prefix().with_body(BodyFormatter::snake_case())
    }

    /// A formatter that panics when used.
    ///
    /// Install it in tests that assert no flag is ever rendered.
    #[must_use]
    pub fn unimplemented() -> Self {
        Self::new().with_prefix(PrefixFormatter::named("unimplemented", || {
            unimplemented!("FlagFormatter::unimplemented was invoked")
        }))
    }
}

impl fmt::Debug for FlagFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagFormatter")
            .field("prefix", &self.prefix.name)
            .field("body", &self.body.name)
            .finish()
    }
}

/// Formats option keys and values into tokens.
///
/// The key becomes `prefix + body(key)`, the value goes through the value
/// transform, and the separator decides how many tokens the pair produces.
///
/// # Examples
///
/// ```rust
/// use argument_encoding::{OptionFormatter, PrefixFormatter};
///
/// let option = OptionFormatter::new().with_prefix(PrefixFormatter::single_dash());
/// assert_eq!(option.format("optionKey", "optionValue"), vec!["-optionKey", "optionValue"]);
/// ```
#[derive(Clone)]
pub struct OptionFormatter {
    pub prefix: PrefixFormatter,
    pub body: BodyFormatter,
    pub value: ValueFormatter,
    pub separator: SeparatorFormatter,
}

impl Default for OptionFormatter {
    fn default() -> Self {
        OptionFormatter {
            prefix: PrefixFormatter::empty(),
            body: BodyFormatter::identity(),
            value: ValueFormatter::identity(),
            separator: SeparatorFormatter::space(),
        }
    }
}

impl OptionFormatter {
    /// Creates a formatter with no prefix, identity transforms and space separation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: PrefixFormatter) -> Self {
        self.prefix = prefix;
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: BodyFormatter) -> Self {
        self.body = body;
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: ValueFormatter) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: SeparatorFormatter) -> Self {
        self.separator = separator;
        self
    }

    /// Renders a key and value as one or more tokens.
    pub fn format(&self, key: &str, value: &str) -> Vec<String> {
        let key = self.prefix.apply() + &self.body.apply(key);
        self.separator.apply(key, self.value.apply(value))
    }

    /// `-key value`
    #[must_use]
    pub fn single_dash_prefix() -> Self {
        Self::new().with_prefix(PrefixFormatter::single_dash())
    }

    /// `-kebab-key value`
    #[must_use]
    pub fn single_dash_prefix_kebab_case() -> Self {
        Self::single_dash_prefix().with_body(BodyFormatter::kebab_case())
    }

    /// `-snake_key value`
    #[must_use]
    pub fn single_dash_prefix_snake_case() -> Self {
        Self::single_dash_prefix().with_body(BodyFormatter::snake_case())
    }

    /// `--key value`
    #[must_use]
    pub fn double_dash_prefix() -> Self {
        Self::new().with_prefix(PrefixFormatter::double_dash())
    }

    /// `--kebab-key value`
    #[must_use]
    pub fn double_dash_prefix_kebab_case() -> Self {
        Self::double_dash_prefix().with_body(BodyFormatter::kebab_case())
    }

    /// `--snake_key value`
    #[must_use]
    pub fn double_dash_prefix_snake_case() -> Self {
        Self::double_dash_prefix().with_body(BodyFormatter::snake_case())
    }

    /// `key=value`
    #[must_use]
    pub fn equal_separator() -> Self {
        Self::new().with_separator(SeparatorFormatter::equal())
    }

    /// A formatter that panics when used.
    ///
    /// Install it in tests that assert no option is ever rendered.
    #[must_use]
    pub fn unimplemented() -> Self {
        Self::new().with_prefix(PrefixFormatter::named("unimplemented", || {
            unimplemented!("OptionFormatter::unimplemented was invoked")
        }))
    }
}

impl fmt::Debug for OptionFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionFormatter")
            .field("prefix", &self.prefix.name)
            .field("body", &self.body.name)
            .field("value", &self.value.name)
            .field("separator", &self.separator.name)
            .finish()
    }
}

/// The formatting context: the flag and option formatters in effect at a
/// point of the argument tree.
///
/// # Examples
///
/// ```rust
/// use argument_encoding::{FlagFormatter, Formatters, OptionFormatter};
///
/// let formatters = Formatters::new(
///     FlagFormatter::double_dash_prefix_kebab_case(),
///     OptionFormatter::double_dash_prefix_kebab_case(),
/// );
/// assert_eq!(formatters.flag.format("showCodecovPath"), "--show-codecov-path");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Formatters {
    pub flag: FlagFormatter,
    pub option: OptionFormatter,
}

impl Formatters {
    #[must_use]
    pub fn new(flag: FlagFormatter, option: OptionFormatter) -> Self {
        Formatters { flag, option }
    }

    /// `-flag`, `-option value`
    #[must_use]
    pub fn single_dash() -> Self {
        Self::new(
            FlagFormatter::single_dash_prefix(),
            OptionFormatter::single_dash_prefix(),
        )
    }

    /// `--flag`, `--option value`
    #[must_use]
    pub fn double_dash() -> Self {
        Self::new(
            FlagFormatter::double_dash_prefix(),
            OptionFormatter::double_dash_prefix(),
        )
    }

    /// `--kebab-flag`, `--kebab-option value`
    #[must_use]
    pub fn double_dash_kebab_case() -> Self {
        Self::new(
            FlagFormatter::double_dash_prefix_kebab_case(),
            OptionFormatter::double_dash_prefix_kebab_case(),
        )
    }

    /// Formatters that panic when used.
    #[must_use]
    pub fn unimplemented() -> Self {
        Self::new(
            FlagFormatter::unimplemented(),
            OptionFormatter::unimplemented(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_prefixes() {
        assert_eq!(
            FlagFormatter::new()
                .with_prefix(PrefixFormatter::single_dash())
                .format("flagKey"),
            "-flagKey"
        );
        assert_eq!(
            FlagFormatter::new()
                .with_prefix(PrefixFormatter::double_dash())
                .format("flagKey"),
            "--flagKey"
        );
        assert_eq!(FlagFormatter::new().format("flagKey"), "flagKey");
    }

    #[test]
    fn test_flag_bodies() {
        assert_eq!(
            FlagFormatter::new()
                .with_body(BodyFormatter::kebab_case())
                .format("flagKey"),
            "flag-key"
        );
        assert_eq!(
            FlagFormatter::double_dash_prefix_snake_case().format("flagKey"),
            "--flag_key"
        );
    }

    #[test]
    fn test_option_separators() {
        assert_eq!(
            OptionFormatter::double_dash_prefix().format("optionKey", "optionValue"),
            vec!["--optionKey", "optionValue"]
        );
        assert_eq!(
            OptionFormatter::equal_separator().format("optionKey", "optionValue"),
            vec!["optionKey=optionValue"]
        );
        assert_eq!(
            OptionFormatter::new()
                .with_separator(SeparatorFormatter::quoted())
                .format("optionKey", "a \"b\""),
            vec!["optionKey=\"a \\\"b\\\"\""]
        );
    }

    #[test]
    fn test_option_value_transform() {
        let option = OptionFormatter::single_dash_prefix_kebab_case()
            .with_value(ValueFormatter::quoted());
        assert_eq!(
            option.format("testProduct", "My Target"),
            vec!["-test-product", "\"My Target\""]
        );

        let upper = OptionFormatter::new().with_value(ValueFormatter::new(|v| v.to_uppercase()));
        assert_eq!(upper.format("level", "debug"), vec!["level", "DEBUG"]);
    }

    #[test]
    fn test_custom_rules() {
        let flag = FlagFormatter::new()
            .with_prefix(PrefixFormatter::new(|| "+".to_string()))
            .with_body(BodyFormatter::new(|key| key.to_uppercase()));
        assert_eq!(flag.format("x"), "+X");

        let option = OptionFormatter::new().with_separator(SeparatorFormatter::new(|key, value| {
            vec![format!("{key}:{value}")]
        }));
        assert_eq!(option.format("k", "v"), vec!["k:v"]);
    }

    #[test]
    #[should_panic(expected = "FlagFormatter::unimplemented was invoked")]
    fn test_unimplemented_flag_formatter_panics() {
        FlagFormatter::unimplemented().format("never");
    }

    #[test]
    #[should_panic(expected = "OptionFormatter::unimplemented was invoked")]
    fn test_unimplemented_option_formatter_panics() {
        OptionFormatter::unimplemented().format("never", "used");
    }

    #[test]
    fn test_debug_names_rules() {
        let debug = format!("{:?}", FlagFormatter::double_dash_prefix_kebab_case());
        assert!(debug.contains("double_dash"));
        assert!(debug.contains("kebab_case"));
    }
}
