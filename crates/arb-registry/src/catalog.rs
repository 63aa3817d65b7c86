//! Catalog of known behavior implementations.
//!
//! The catalog maps a behavior name to a factory producing its canonical
//! implementation.  It is filled once at agent startup; the registry asks it
//! for a fresh instance whenever `add` is called for a name that is not
//! currently registered.

use rustc_hash::FxHashMap;

use arb_behavior::Behavior;
use arb_core::{ArbError, ArbResult};

type Factory<A> = Box<dyn Fn() -> Box<dyn Behavior<A>>>;

/// Name → factory table for every behavior the agent knows how to build.
pub struct BehaviorCatalog<A> {
    factories: FxHashMap<String, Factory<A>>,
}

impl<A: 'static> Default for BehaviorCatalog<A> {
    fn default() -> Self {
        Self { factories: FxHashMap::default() }
    }
}

impl<A: 'static> BehaviorCatalog<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` as the implementation of `name`.
    ///
    /// Registering the same name twice replaces the earlier factory; live
    /// instances already built from it are not affected.
    pub fn register<F, B>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> B + 'static,
        B: Behavior<A>,
    {
        self.factories
            .insert(name.into(), Box::new(move || Box::new(factory()) as Box<dyn Behavior<A>>));
    }

    /// Build a fresh instance of `name`.
    ///
    /// Fails with [`ArbError::InvalidBehavior`] if no factory is registered.
    pub fn instantiate(&self, name: &str) -> ArbResult<Box<dyn Behavior<A>>> {
        self.factories
            .get(name)
            .map(|make| make())
            .ok_or_else(|| ArbError::InvalidBehavior(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Every known name, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
