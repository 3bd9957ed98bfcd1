//! Case conversion for argument keys.
//!
//! Keys usually come from camelCase names, while many executables expect
//! kebab-case or snake_case. A separator is inserted wherever an ASCII
//! lowercase letter or digit is directly followed by an ASCII uppercase
//! letter, then the whole key is lower-cased.
//!
//! ```rust
//! use argument_encoding::case;
//!
//! assert_eq!(case::kebab_case("numWorkers"), "num-workers");
//! assert_eq!(case::snake_case("showCodecovPath"), "show_codecov_path");
//! assert_eq!(case::kebab_case("verbose"), "verbose");
//! ```

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Converts a camelCase key to kebab-case.
#[must_use]
pub fn kebab_case(input: &str) -> String {
    from_camel_case(input, "${1}-${2}")
}

/// Converts a camelCase key to snake_case.
#[must_use]
pub fn snake_case(input: &str) -> String {
    from_camel_case(input, "${1}_${2}")
}

fn camel_boundary() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new("([a-z0-9])([A-Z])").ok())
        .as_ref()
}

fn from_camel_case(input: &str, template: &str) -> String {
    let separated = match camel_boundary() {
        Some(boundary) => boundary.replace_all(input, template),
        None => Cow::Borrowed(input),
    };
    separated.to_lowercase()
}
