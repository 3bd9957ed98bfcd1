//! Decoding leaves that carry unwrap functions.
//!
//! [`Opt`](crate::Opt), [`OptSet`](crate::OptSet) and
//! [`Positional`](crate::Positional) serialize as their bare values. The
//! function that turns a value into argument strings is not data, so it has
//! to be supplied again when decoding. An [`UnwrapRegistry`] holds those
//! functions, one per leaf type.
//!
//! A single leaf is decoded with a [`LeafSeed`]:
//!
//! ```rust
//! use argument_encoding::{Opt, UnwrapRegistry};
//! use serde::de::DeserializeSeed;
//!
//! let mut registry = UnwrapRegistry::new();
//! registry.register_opt_display::<u32>();
//!
//! let mut de = serde_json::Deserializer::from_str("4");
//! let jobs: Opt<u32> = registry.seed::<Opt<u32>>().deserialize(&mut de).unwrap();
//! assert_eq!(jobs.unwrapped().as_deref(), Some("4"));
//! ```
//!
//! Leaves nested in derived containers use their `Deserialize` impls, which
//! look the registry up from the innermost [`UnwrapRegistry::scope`]:
//!
//! ```rust
//! use argument_encoding::{Flag, Opt, UnwrapRegistry};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Build {
//!     verbose: Flag,
//!     jobs: Opt<u32>,
//! }
//!
//! let mut registry = UnwrapRegistry::new();
//! registry.register_opt_display::<u32>();
//!
//! let build: Build = registry
//!     .scope(|| serde_json::from_str(r#"{"verbose": true, "jobs": 8}"#))
//!     .unwrap();
//! assert!(build.verbose.enabled());
//! assert_eq!(build.jobs.value(), &8);
//! ```

use crate::opt::OptUnwrap;
use crate::opt_set::ElementUnwrap;
use crate::positional::Expansion;
use crate::{Arguments, Error, Opt, OptSet, Positional};
use serde::de::{self, DeserializeOwned, DeserializeSeed, Deserializer};
use serde::Deserialize;
use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// A leaf that is rebuilt from its serialized value and an unwrap function.
pub trait Decode: Sized + 'static {
    /// The serialized form of the leaf.
    type Value: DeserializeOwned;
    /// The function (or functions) the leaf needs besides its value.
    type Unwrap: Clone + Send + Sync + 'static;

    /// Reassembles the leaf.
    fn from_parts(value: Self::Value, unwrap: Self::Unwrap) -> Self;
}

/// Unwrap functions keyed by leaf type.
#[derive(Clone, Default)]
pub struct UnwrapRegistry {
    entries: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

thread_local! {
    static SCOPES: RefCell<Vec<UnwrapRegistry>> = const { RefCell::new(Vec::new()) };
}

struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        SCOPES.with(|scopes| {
            scopes.borrow_mut().pop();
        });
    }
}

impl UnwrapRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the unwrap function for leaf type `L`, replacing any
    /// previous registration.
    pub fn register<L: Decode>(&mut self, unwrap: L::Unwrap) -> &mut Self {
        self.entries.insert(TypeId::of::<L>(), Arc::new(unwrap));
        self
    }

    pub fn register_opt<T, F>(&mut self, unwrap: F) -> &mut Self
    where
        T: DeserializeOwned + 'static,
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        let unwrap: OptUnwrap<T> = Arc::new(unwrap);
        self.register::<Opt<T>>(unwrap)
    }

    /// Registers `Display` as the unwrap function of `Opt<T>`.
    pub fn register_opt_display<T>(&mut self) -> &mut Self
    where
        T: DeserializeOwned + fmt::Display + 'static,
    {
        self.register_opt::<T, _>(|value: &T| Some(value.to_string()))
    }

    pub fn register_opt_set<T, F>(&mut self, unwrap: F) -> &mut Self
    where
        T: DeserializeOwned + 'static,
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        let unwrap: ElementUnwrap<T> = Arc::new(unwrap);
        self.register::<OptSet<T>>(unwrap)
    }

    /// Registers `Display` as the element unwrap function of `OptSet<T>`.
    pub fn register_opt_set_display<T>(&mut self) -> &mut Self
    where
        T: DeserializeOwned + fmt::Display + 'static,
    {
        self.register_opt_set::<T, _>(|value: &T| Some(value.to_string()))
    }

    pub fn register_positional<T, F>(&mut self, unwrap: F) -> &mut Self
    where
        T: DeserializeOwned + 'static,
        F: Fn(&T) -> Vec<String> + Send + Sync + 'static,
    {
        self.register::<Positional<T>>(Expansion::tokens(unwrap))
    }

    /// Registers `Display` as the expansion of `Positional<T>`.
    pub fn register_positional_display<T>(&mut self) -> &mut Self
    where
        T: DeserializeOwned + fmt::Display + 'static,
    {
        self.register_positional::<T, _>(|value: &T| vec![value.to_string()])
    }

    /// Registers `Positional<T>` as a group that expands to `T`'s own arguments.
    pub fn register_positional_group<T>(&mut self) -> &mut Self
    where
        T: Arguments + DeserializeOwned + 'static,
    {
        self.register::<Positional<T>>(Expansion::group())
    }

    /// The unwrap function registered for `L`, if any.
    #[must_use]
    pub fn unwrap_for<L: Decode>(&self) -> Option<L::Unwrap> {
        self.entries
            .get(&TypeId::of::<L>())
            .and_then(|entry| entry.downcast_ref::<L::Unwrap>())
            .cloned()
    }

    /// A seed that decodes one `L` using this registry.
    #[must_use]
    pub fn seed<L: Decode>(&self) -> LeafSeed<'_, L> {
        LeafSeed {
            registry: self,
            marker: PhantomData,
        }
    }

    /// Runs `f` with this registry visible to the `Deserialize` impls of
    /// `Opt`, `OptSet` and `Positional` on the current thread.
    ///
    /// Scopes nest; the innermost one wins.
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        SCOPES.with(|scopes| scopes.borrow_mut().push(self.clone()));
        let _guard = ScopeGuard;
        f()
    }

    fn decode<'de, L: Decode, D: Deserializer<'de>>(
        &self,
        deserializer: D,
    ) -> std::result::Result<L, D::Error> {
        let Some(unwrap) = self.unwrap_for::<L>() else {
            let type_name = std::any::type_name::<L>();
            debug!(type_name, "no unwrap function registered");
            return Err(de::Error::custom(Error::missing_unwrap(type_name)));
        };
        let value = L::Value::deserialize(deserializer)?;
        Ok(L::from_parts(value, unwrap))
    }
}

impl fmt::Debug for UnwrapRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnwrapRegistry")
            .field("entries", &self.entries.len())
            .finish()
    }
}

/// Decodes one leaf of type `L` with the unwrap function from a registry.
pub struct LeafSeed<'a, L> {
    registry: &'a UnwrapRegistry,
    marker: PhantomData<fn() -> L>,
}

impl<'de, L: Decode> DeserializeSeed<'de> for LeafSeed<'_, L> {
    type Value = L;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<L, D::Error> {
        self.registry.decode(deserializer)
    }
}

pub(crate) fn deserialize_in_scope<'de, L: Decode, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<L, D::Error> {
    let registry = SCOPES.with(|scopes| scopes.borrow().last().cloned());
    match registry {
        Some(registry) => registry.decode(deserializer),
        None => {
            let type_name = std::any::type_name::<L>();
            debug!(type_name, "decoded outside of an unwrap registry scope");
            Err(de::Error::custom(Error::missing_unwrap(type_name)))
        }
    }
}
